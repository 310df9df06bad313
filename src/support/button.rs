use core::convert::Infallible;

use embedded_hal::digital::v2::InputPin;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Edge {
    Pressed,
    Released,
}

/// Counts consecutive samples that disagree with the stable level.
pub struct Debouncer {
    pressed: bool,
    count: u8,
    threshold: u8,
}

impl Debouncer {
    pub fn new(pressed: bool, threshold: u8) -> Self {
        Self {
            pressed,
            count: 0,
            threshold: threshold.max(1),
        }
    }

    pub fn update(&mut self, pressed: bool) -> Option<Edge> {
        if pressed == self.pressed {
            self.count = 0;
            return None;
        }

        self.count += 1;
        if self.count < self.threshold {
            return None;
        }

        self.count = 0;
        self.pressed = pressed;
        Some(if pressed {
            Edge::Pressed
        } else {
            Edge::Released
        })
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

/// Push button to ground with pull-up: low level means pressed.
pub struct Button<PIN> {
    pin: PIN,
    debouncer: Debouncer,
}

impl<PIN> Button<PIN>
where
    PIN: InputPin<Error = Infallible>,
{
    /// A button already held down here reports nothing until released.
    pub fn new(pin: PIN, debounce_samples: u8) -> Self {
        let pressed = pin.is_low().unwrap_or(false);
        Self {
            pin,
            debouncer: Debouncer::new(pressed, debounce_samples),
        }
    }

    pub fn sample(&mut self) -> Option<Edge> {
        let pressed = self.pin.is_low().unwrap_or(false);
        self.debouncer.update(pressed)
    }

    pub fn is_pressed(&self) -> bool {
        self.debouncer.is_pressed()
    }
}
