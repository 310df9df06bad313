#[derive(Clone, Copy, PartialEq, Debug)]
pub enum CursorMode {
    Hidden,
    Underline,
    Blink,
}

/// Character display as seen by the transmitter.
///
/// Writes are infallible: a miswired display shows garbage, it does not report errors.
pub trait CharDisplay {
    fn columns(&self) -> u8;

    fn clear(&mut self);

    fn set_cursor(&mut self, col: u8, row: u8);

    fn set_cursor_mode(&mut self, mode: CursorMode);

    fn write_byte(&mut self, b: u8);

    fn write_str(&mut self, s: &str) {
        s.bytes().for_each(|b| self.write_byte(b));
    }

    /// Blank one line and leave the cursor at its start.
    fn clear_line(&mut self, row: u8) {
        self.set_cursor(0, row);
        for _ in 0..self.columns() {
            self.write_byte(b' ');
        }
        self.set_cursor(0, row);
    }
}
