mod char_display;
pub use char_display::{CharDisplay, CursorMode};

mod hd44780;
pub use hd44780::{Hd44780, Hd44780Pins};
