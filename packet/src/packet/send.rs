use {
    crate::{checksum::Checksum, constants},
    alloc::vec::Vec,
    core::fmt,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TooManyParameters {
    pub count: usize,
}

impl fmt::Display for TooManyParameters {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { count } = *self;
        write!(
            f,
            "{count} parameters cannot fit in one packet (at most {})",
            constants::MAX_PARAMETERS,
        )
    }
}

impl core::error::Error for TooManyParameters {}

/// A complete outgoing packet, marker through checksum.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithCrc {
    bytes: Vec<u8>,
}

impl WithCrc {
    /// Frames `parameters` for `id`. Neither the id nor the instruction is checked here.
    #[inline]
    pub fn new(id: u8, instruction: u8, parameters: &[u8]) -> Result<Self, TooManyParameters> {
        let Ok(length) = u8::try_from(parameters.len() + constants::LENGTH_OVERHEAD) else {
            return Err(TooManyParameters {
                count: parameters.len(),
            });
        };

        let mut bytes = Vec::with_capacity(parameters.len() + 6);
        bytes.extend_from_slice(&constants::HEADER);
        bytes.extend_from_slice(&[id, length, instruction]);
        bytes.extend_from_slice(parameters);

        let mut checksum = Checksum::new();
        checksum.extend(&bytes[constants::HEADER.len()..]);
        bytes.push(checksum.collapse());
        Ok(Self { bytes })
    }

    #[inline(always)]
    pub fn as_buffer(&self) -> &[u8] {
        &self.bytes
    }

    #[inline(always)]
    pub fn id(&self) -> u8 {
        self.bytes[2]
    }

    #[inline(always)]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for WithCrc {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        self.as_buffer()
    }
}
