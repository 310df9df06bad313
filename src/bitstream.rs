use crate::config::MillisDuration;

/// Bits of one byte, most significant first.
#[derive(Clone, Copy)]
pub struct Bits {
    byte: u8,
    pos: u8,
}

impl Bits {
    pub fn msb_first(byte: u8) -> Self {
        Self { byte, pos: 0 }
    }
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.pos >= u8::BITS as u8 {
            return None;
        }
        let bit = (self.byte >> (7 - self.pos)) & 1 == 1;
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (u8::BITS as u8 - self.pos) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Bits {}

/// Assemble a byte from bits given MSB first. Extra bits push the oldest out.
pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> u8 {
    bits.into_iter()
        .fold(0u8, |acc, bit| (acc << 1) | bit as u8)
}

/// Hold time of one bit for `rate` bits per second.
pub const fn bit_period(rate: u32) -> MillisDuration {
    MillisDuration::from_ticks(1_000 / rate)
}
