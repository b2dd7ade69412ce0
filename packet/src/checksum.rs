/// Running checksum: the complement of the byte sum, modulo 256.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Checksum {
    sum: u8,
}

impl Checksum {
    #[inline(always)]
    pub const fn new() -> Self {
        Self { sum: 0 }
    }

    #[inline(always)]
    pub const fn push(&mut self, byte: u8) {
        self.sum = self.sum.wrapping_add(byte);
    }

    #[inline]
    pub const fn extend(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            self.push(bytes[i]);
            i += 1;
        }
    }

    #[inline(always)]
    pub const fn collapse(self) -> u8 {
        !self.sum
    }
}

/// Checksum over everything between the `FF FF` marker and the checksum byte itself.
#[inline]
pub const fn checksum(payload: &[u8]) -> u8 {
    let mut state = Checksum::new();
    state.extend(payload);
    state.collapse()
}
