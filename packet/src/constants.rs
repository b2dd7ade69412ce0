/// Two-byte marker opening every packet in either direction.
pub const HEADER: [u8; 2] = [0xFF, 0xFF];

/// Highest id a single device can answer to.
pub const MAX_ID: u8 = 0xFD;

/// Every device on the bus accepts packets sent to this id, and none replies.
pub const BROADCAST_ID: u8 = 0xFE;

/// Marker, id, and length: the part of a reply read before its body.
pub const HEADER_BYTES: usize = 4;

/// Instruction (or error) byte plus checksum, both counted by the length field.
pub const LENGTH_OVERHEAD: usize = 2;

/// The length field is a single byte.
pub const MAX_PARAMETERS: usize = u8::MAX as usize - LENGTH_OVERHEAD;

#[inline(always)]
pub const fn is_unicast(id: u8) -> bool {
    id <= MAX_ID
}
