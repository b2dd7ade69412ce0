pub mod recv;
pub mod send;

/// Frames one instruction for `id`: `FF FF id length instruction parameters.. checksum`.
#[inline]
pub fn new(
    id: u8,
    instruction: u8,
    parameters: &[u8],
) -> Result<send::WithCrc, send::TooManyParameters> {
    send::WithCrc::new(id, instruction, parameters)
}
