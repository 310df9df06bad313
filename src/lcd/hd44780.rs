use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::{OutputPin, PinState};

use super::{CharDisplay, CursorMode};

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x04;
const CMD_DISPLAY_CTRL: u8 = 0x08;
const CMD_FUNCTION_SET: u8 = 0x20;
const CMD_SET_DDRAM_ADDR: u8 = 0x80;

const ENTRY_INCREMENT: u8 = 0x02;

const DISPLAY_ON: u8 = 0x04;
const CURSOR_ON: u8 = 0x02;
const BLINK_ON: u8 = 0x01;

const FUNCTION_2_LINES: u8 = 0x08;

const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];
// DDRAM line length in 2-line mode
const MAX_COLS: u8 = 40;

const POWER_ON_DELAY_US: u32 = 50_000;
const CMD_EXEC_US: u32 = 50;
const CLEAR_EXEC_US: u32 = 2_000;
// PWEH >= 450 ns, tcycE >= 1000 ns. Timer delays drop one tick, so 1 us would be 0.
const EN_PULSE_US: u32 = 2;

//-----------------------------------------------------------------------------

/// 4-bit parallel bus, R/W tied to ground.
pub struct Hd44780Pins<RS, EN, D4, D5, D6, D7> {
    pub rs: RS,
    pub en: EN,
    pub d4: D4,
    pub d5: D5,
    pub d6: D6,
    pub d7: D7,
}

pub struct Hd44780<RS, EN, D4, D5, D6, D7, DL> {
    pins: Hd44780Pins<RS, EN, D4, D5, D6, D7>,
    delay: DL,
    cols: u8,
    rows: u8,
}

impl<RS, EN, D4, D5, D6, D7, DL> Hd44780<RS, EN, D4, D5, D6, D7, DL>
where
    RS: OutputPin<Error = Infallible>,
    EN: OutputPin<Error = Infallible>,
    D4: OutputPin<Error = Infallible>,
    D5: OutputPin<Error = Infallible>,
    D6: OutputPin<Error = Infallible>,
    D7: OutputPin<Error = Infallible>,
    DL: DelayUs<u32>,
{
    /// `rows` is 1 or 2, `cols` at most 40, larger values are clamped.
    pub fn new(pins: Hd44780Pins<RS, EN, D4, D5, D6, D7>, delay: DL, cols: u8, rows: u8) -> Self {
        Self {
            pins,
            delay,
            cols: cols.min(MAX_COLS),
            rows: rows.clamp(1, ROW_OFFSETS.len() as u8),
        }
    }

    /// Power-on initialization by instruction (datasheet fig. 24).
    pub fn init(mut self) -> Self {
        self.delay.delay_us(POWER_ON_DELAY_US);

        let _ = self.pins.rs.set_low();
        let _ = self.pins.en.set_low();

        // controller may be in 8-bit mode or halfway through a 4-bit transfer
        self.write_nibble(0x03);
        self.delay.delay_us(4_500);
        self.write_nibble(0x03);
        self.delay.delay_us(4_500);
        self.write_nibble(0x03);
        self.delay.delay_us(150);

        self.write_nibble(0x02);
        self.delay.delay_us(CMD_EXEC_US);

        let lines = if self.rows > 1 { FUNCTION_2_LINES } else { 0 };
        self.command(CMD_FUNCTION_SET | lines);
        self.set_cursor_mode(CursorMode::Hidden);
        self.clear();
        self.command(CMD_ENTRY_MODE | ENTRY_INCREMENT);

        self
    }

    fn write_nibble(&mut self, nibble: u8) {
        let _ = self.pins.d4.set_state(PinState::from(nibble & 0x01 != 0));
        let _ = self.pins.d5.set_state(PinState::from(nibble & 0x02 != 0));
        let _ = self.pins.d6.set_state(PinState::from(nibble & 0x04 != 0));
        let _ = self.pins.d7.set_state(PinState::from(nibble & 0x08 != 0));

        // data latched on the falling edge of EN
        let _ = self.pins.en.set_high();
        self.delay.delay_us(EN_PULSE_US);
        let _ = self.pins.en.set_low();
        self.delay.delay_us(EN_PULSE_US);
    }

    fn send(&mut self, byte: u8, rs: PinState) {
        let _ = self.pins.rs.set_state(rs);
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
        self.delay.delay_us(CMD_EXEC_US);
    }

    fn command(&mut self, cmd: u8) {
        self.send(cmd, PinState::Low);
    }
}

impl<RS, EN, D4, D5, D6, D7, DL> CharDisplay for Hd44780<RS, EN, D4, D5, D6, D7, DL>
where
    RS: OutputPin<Error = Infallible>,
    EN: OutputPin<Error = Infallible>,
    D4: OutputPin<Error = Infallible>,
    D5: OutputPin<Error = Infallible>,
    D6: OutputPin<Error = Infallible>,
    D7: OutputPin<Error = Infallible>,
    DL: DelayUs<u32>,
{
    fn columns(&self) -> u8 {
        self.cols
    }

    fn clear(&mut self) {
        self.command(CMD_CLEAR);
        self.delay.delay_us(CLEAR_EXEC_US);
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        let col = col.min(self.cols.saturating_sub(1));
        let row = row.min(self.rows - 1);
        self.command(CMD_SET_DDRAM_ADDR | (ROW_OFFSETS[row as usize] + col));
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        let ctrl = match mode {
            CursorMode::Hidden => DISPLAY_ON,
            CursorMode::Underline => DISPLAY_ON | CURSOR_ON,
            CursorMode::Blink => DISPLAY_ON | CURSOR_ON | BLINK_ON,
        };
        self.command(CMD_DISPLAY_CTRL | ctrl);
    }

    fn write_byte(&mut self, b: u8) {
        self.send(b, PinState::High);
    }
}
