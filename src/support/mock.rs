//! Recording doubles of the hardware traits for host tests.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::lcd::{CharDisplay, CursorMode};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Pin(&'static str, bool),
    DelayUs(u32),
    DelayMs(u32),
    Clear,
    SetCursor(u8, u8),
    Cursor(CursorMode),
    Write(u8),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

//-----------------------------------------------------------------------------

pub struct MockPin {
    name: &'static str,
    log: Log,
}

impl MockPin {
    pub fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: log.clone(),
        }
    }
}

impl OutputPin for MockPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push(Event::Pin(self.name, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push(Event::Pin(self.name, true));
        Ok(())
    }
}

//-----------------------------------------------------------------------------

pub struct MockInput {
    level: Rc<Cell<bool>>,
}

impl MockInput {
    /// Returns the pin and a handle to drive its level.
    pub fn new(high: bool) -> (Self, Rc<Cell<bool>>) {
        let level = Rc::new(Cell::new(high));
        (
            Self {
                level: level.clone(),
            },
            level,
        )
    }
}

impl InputPin for MockInput {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(self.level.get())
    }

    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(!self.level.get())
    }
}

//-----------------------------------------------------------------------------

pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayUs<u32> for MockDelay {
    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Event::DelayUs(us));
    }
}

impl DelayMs<u32> for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

//-----------------------------------------------------------------------------

/// 16x2 screen buffer that also records every call.
pub struct MockDisplay {
    log: Log,
    screen: [[u8; 16]; 2],
    col: u8,
    row: u8,
    pub cursor: CursorMode,
}

impl MockDisplay {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            screen: [[b' '; 16]; 2],
            col: 0,
            row: 0,
            cursor: CursorMode::Hidden,
        }
    }

    /// Line content without trailing blanks.
    pub fn line(&self, row: usize) -> String {
        String::from_utf8_lossy(&self.screen[row])
            .trim_end()
            .into()
    }
}

impl CharDisplay for MockDisplay {
    fn columns(&self) -> u8 {
        16
    }

    fn clear(&mut self) {
        self.log.borrow_mut().push(Event::Clear);
        self.screen = [[b' '; 16]; 2];
        self.col = 0;
        self.row = 0;
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.log.borrow_mut().push(Event::SetCursor(col, row));
        self.col = col.min(15);
        self.row = row.min(1);
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.log.borrow_mut().push(Event::Cursor(mode));
        self.cursor = mode;
    }

    fn write_byte(&mut self, b: u8) {
        self.log.borrow_mut().push(Event::Write(b));
        // controller keeps counting into off-screen DDRAM
        if self.col < 16 {
            self.screen[self.row as usize][self.col as usize] = b;
        }
        self.col = self.col.saturating_add(1);
    }
}
