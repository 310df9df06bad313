#![cfg_attr(not(test), no_std)]

mod bitstream;
mod message;
mod transmitter;

pub mod config;
pub mod lcd;
pub mod support;

pub use bitstream::{bit_period, from_bits, Bits};
pub use message::{group_count, Group, Groups};
pub use transmitter::{Report, Transmitter};
