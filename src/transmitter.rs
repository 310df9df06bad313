use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{OutputPin, PinState};
use log::{debug, info, trace};

use crate::bitstream::Bits;
use crate::config::{self, MillisDuration};
use crate::lcd::{CharDisplay, CursorMode};
use crate::message::Groups;

/// What one pass put on the wire.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Report {
    pub groups: usize,
    pub bytes: usize,
    pub bits: usize,
}

/// Sends text out of the TX pin bit by bit and mirrors the progress on the display.
///
/// Everything here blocks: a pass holds the caller for
/// `groups * GROUP_PAUSE + bytes * 8 * BIT_PERIOD + DONE_PAUSE`.
pub struct Transmitter<D, TX, DL> {
    display: D,
    tx: TX,
    delay: DL,
}

impl<D, TX, DL> Transmitter<D, TX, DL>
where
    D: CharDisplay,
    TX: OutputPin<Error = Infallible>,
    DL: DelayMs<u32>,
{
    pub fn new(display: D, mut tx: TX, delay: DL) -> Self {
        let _ = tx.set_low();
        Self { display, tx, delay }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn show_idle(&mut self) {
        self.display.clear_line(0);
        self.display.clear_line(1);
        self.display.write_str(config::IDLE_PROMPT);
    }

    /// One complete pass: every group, then the completion text, then back to idle.
    pub fn run(&mut self, message: &str) -> Report {
        let bytes = message.as_bytes();
        let cols = self.display.columns() as usize;
        let groups = Groups::new(bytes, cols);

        info!("TX start: {} bytes, {} groups", bytes.len(), groups.total());

        let mut report = Report::default();
        for group in groups {
            debug!("group {}/{}", group.index + 1, group.total);

            self.display.set_cursor(0, 0);
            for i in 0..cols {
                self.display
                    .write_byte(group.bytes.get(i).copied().unwrap_or(b' '));
            }

            self.display.clear_line(1);
            self.display.write_str(&group.label());
            self.hold(config::GROUP_PAUSE);

            report.groups += 1;
            report.bytes += self.transmit_group(group.bytes);
        }
        report.bits = report.bytes * u8::BITS as usize;

        self.display.clear_line(1);
        self.display.write_str(config::DONE_TEXT);
        self.hold(config::DONE_PAUSE);

        self.show_idle();

        info!(
            "TX done: {} groups, {} bytes, {} bits",
            report.groups, report.bytes, report.bits
        );
        report
    }

    /// Returns the number of bytes sent.
    pub fn transmit_group(&mut self, bytes: &[u8]) -> usize {
        let cols = self.display.columns().max(1) as usize;
        for (i, &b) in bytes.iter().enumerate() {
            self.display.clear_line(1);
            self.transmit_byte(b, (i % cols) as u8);
        }
        let _ = self.tx.set_low();
        bytes.len()
    }

    /// Whole message in one go, no paging and no progress text.
    pub fn transmit_message(&mut self, message: &str) -> usize {
        let cols = self.display.columns().max(1) as usize;
        for (i, &b) in message.as_bytes().iter().enumerate() {
            self.display.clear_line(1);
            self.transmit_byte(b, (i % cols) as u8);
        }
        let _ = self.tx.set_low();
        message.len()
    }

    /// MSB first, `BIT_PERIOD` per bit. The bit being sent shows up on line 2
    /// at its own column, the cursor blinks under `column` of line 1.
    pub fn transmit_byte(&mut self, byte: u8, column: u8) {
        trace!("0x{:02x} -> col {}", byte, column);

        self.display.set_cursor(column, 0);
        self.display.set_cursor_mode(CursorMode::Blink);

        for (k, bit) in Bits::msb_first(byte).enumerate() {
            let _ = self.tx.set_state(PinState::from(bit));

            self.display.set_cursor(k as u8, 1);
            self.display.write_byte(if bit { b'1' } else { b'0' });
            self.display.set_cursor(column, 0);

            self.hold(config::BIT_PERIOD);
        }

        self.display.set_cursor_mode(CursorMode::Hidden);
        let _ = self.tx.set_low();
    }

    fn hold(&mut self, d: MillisDuration) {
        self.delay.delay_ms(d.to_millis());
    }
}
