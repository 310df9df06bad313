use core::fmt::Write;

use heapless::String;

/// Number of display-width groups needed for `len` bytes.
pub const fn group_count(len: usize, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    (len + width - 1) / width
}

/// One display line worth of the message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Group<'a> {
    pub index: usize,
    pub total: usize,
    pub bytes: &'a [u8],
}

impl<'a> Group<'a> {
    /// Progress text for the second line: `TX <n>/<total> `
    pub fn label(&self) -> String<16> {
        let mut s = String::new();
        // 16 chars is enough for any u16 pair, longer counts get truncated
        let _ = write!(s, "TX {}/{} ", self.index + 1, self.total);
        s
    }
}

pub struct Groups<'a> {
    message: &'a [u8],
    width: usize,
    index: usize,
    total: usize,
}

impl<'a> Groups<'a> {
    pub fn new(message: &'a [u8], width: usize) -> Self {
        Self {
            message,
            width,
            index: 0,
            total: group_count(message.len(), width),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

impl<'a> Iterator for Groups<'a> {
    type Item = Group<'a>;

    fn next(&mut self) -> Option<Group<'a>> {
        if self.index >= self.total {
            return None;
        }

        let start = self.index * self.width;
        let end = core::cmp::min(start + self.width, self.message.len());
        let group = Group {
            index: self.index,
            total: self.total,
            bytes: &self.message[start..end],
        };

        self.index += 1;
        Some(group)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.index;
        (left, Some(left))
    }
}

impl<'a> ExactSizeIterator for Groups<'a> {}
