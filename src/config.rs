use fugit_timer::Duration;

pub type MillisDuration = Duration<u32, 1, 1_000>;

pub const MCU_XTAL_HZ: u32 = 8_000_000;
pub const SYSCLK_HZ: u32 = 72_000_000;

//-----------------------------------------------------------------------------

pub const SYSTICK_RATE_HZ: u32 = 1_000;

//-----------------------------------------------------------------------------

/// bits per second on the TX line
pub const TX_RATE: u32 = 20;

pub const BIT_PERIOD: MillisDuration = crate::bitstream::bit_period(TX_RATE);
pub const GROUP_PAUSE: MillisDuration = MillisDuration::from_ticks(500);
pub const DONE_PAUSE: MillisDuration = MillisDuration::from_ticks(1_000);

//-----------------------------------------------------------------------------

pub const LCD_COLS: u8 = 16;
pub const LCD_ROWS: u8 = 2;

pub const MESSAGE: &str = "je suis geek et j'aime programmer des microcontroleurs Arduino pour \
                           transmettre des donnees de facon professionnelle";

pub const IDLE_PROMPT: &str = "TX Demo Ready";
pub const DONE_TEXT: &str = "Done!";

//-----------------------------------------------------------------------------

pub const BUTTON_SAMPLE_PERIOD_MS: u64 = 5;
pub const DEBOUNCE_SAMPLES: u8 = 4;

//-----------------------------------------------------------------------------

pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Debug;
