#![no_main]
#![no_std]

mod rtt_logger;

use panic_abort as _;
use rtic::app;

use stm32f1xx_hal::flash::FlashExt;
use stm32f1xx_hal::gpio::{
    GpioExt, Input, Output, PinState, PullUp, PushPull, PA0, PA1, PB10, PB5, PB6, PB7, PB8, PB9,
};
use stm32f1xx_hal::pac::{TIM2, TIM3};
use stm32f1xx_hal::timer::DelayUs as TimerDelay;

use systick_monotonic::Systick;

use lcd_bitbang_tx::lcd::{Hd44780, Hd44780Pins};
use lcd_bitbang_tx::support::{Button, Edge, Trigger};
use lcd_bitbang_tx::{config, Transmitter};

//-----------------------------------------------------------------------------

type Lcd = Hd44780<
    PB5<Output<PushPull>>,
    PB6<Output<PushPull>>,
    PB7<Output<PushPull>>,
    PB8<Output<PushPull>>,
    PB9<Output<PushPull>>,
    PB10<Output<PushPull>>,
    TimerDelay<TIM3>,
>;

type Tx = Transmitter<Lcd, PA0<Output<PushPull>>, TimerDelay<TIM2>>;

//-----------------------------------------------------------------------------

#[app(device = stm32f1xx_hal::pac, peripherals = true, dispatchers = [RTCALARM])]
mod app {
    use super::*;

    #[shared]
    struct Shared {
        trigger: Trigger,
    }

    #[local]
    struct Local {
        transmitter: Tx,
        button: Button<PA1<Input<PullUp>>>,
    }

    #[monotonic(binds = SysTick, default = true)]
    type MonoTimer = Systick<{ config::SYSTICK_RATE_HZ }>;

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        use stm32f1xx_hal::prelude::_fugit_RateExtU32;
        use stm32f1xx_hal::prelude::_stm32_hal_rcc_RccExt;
        use stm32f1xx_hal::prelude::_stm32f4xx_hal_timer_TimerExt;

        rtt_logger::init(config::LOG_LEVEL);

        let mut flash = ctx.device.FLASH.constrain();

        let mut gpioa = ctx.device.GPIOA.split();
        let mut gpiob = ctx.device.GPIOB.split();

        let rcc = ctx.device.RCC.constrain();
        let clocks = rcc
            .cfgr
            .use_hse(config::MCU_XTAL_HZ.Hz())
            .sysclk(config::SYSCLK_HZ.Hz())
            .pclk1((config::SYSCLK_HZ / 2).Hz())
            .freeze(&mut flash.acr);

        let mono = Systick::new(ctx.core.SYST, clocks.sysclk().to_Hz());

        //---------------------------------------------------------------------

        let tx = gpioa
            .pa0
            .into_push_pull_output_with_state(&mut gpioa.crl, PinState::Low);
        let button = gpioa.pa1.into_pull_up_input(&mut gpioa.crl);

        let lcd = Hd44780::new(
            Hd44780Pins {
                rs: gpiob.pb5.into_push_pull_output(&mut gpiob.crl),
                en: gpiob.pb6.into_push_pull_output(&mut gpiob.crl),
                d4: gpiob.pb7.into_push_pull_output(&mut gpiob.crl),
                d5: gpiob.pb8.into_push_pull_output(&mut gpiob.crh),
                d6: gpiob.pb9.into_push_pull_output(&mut gpiob.crh),
                d7: gpiob.pb10.into_push_pull_output(&mut gpiob.crh),
            },
            ctx.device.TIM3.delay_us(&clocks),
            config::LCD_COLS,
            config::LCD_ROWS,
        )
        .init();

        let mut transmitter = Transmitter::new(lcd, tx, ctx.device.TIM2.delay_us(&clocks));
        transmitter.show_idle();

        log::info!(
            "ready: {} bytes at {} bit/s",
            config::MESSAGE.len(),
            config::TX_RATE
        );

        button_sampler::spawn().unwrap();

        //---------------------------------------------------------------------

        (
            Shared {
                trigger: Trigger::new(),
            },
            Local {
                transmitter,
                button: Button::new(button, config::DEBOUNCE_SAMPLES),
            },
            init::Monotonics(mono),
        )
    }

    //-------------------------------------------------------------------------

    #[idle(shared = [trigger], local = [transmitter])]
    fn idle(mut ctx: idle::Context) -> ! {
        loop {
            if ctx.shared.trigger.lock(|t| t.take()) {
                ctx.local.transmitter.run(config::MESSAGE);
                ctx.shared.trigger.lock(|t| t.finish());
            } else {
                cortex_m::asm::wfi();
            }
        }
    }

    //-------------------------------------------------------------------------

    #[task(shared = [trigger], local = [button])]
    fn button_sampler(mut ctx: button_sampler::Context) {
        use systick_monotonic::*;

        if let Some(Edge::Pressed) = ctx.local.button.sample() {
            if !ctx.shared.trigger.lock(|t| t.press()) {
                log::debug!("press ignored, transmission in progress");
            }
        }

        button_sampler::spawn_after(config::BUTTON_SAMPLE_PERIOD_MS.millis()).unwrap();
    }
}
