mod button;
pub use button::{Button, Debouncer, Edge};

mod trigger;
pub use trigger::Trigger;

#[cfg(test)]
pub(crate) mod mock;
