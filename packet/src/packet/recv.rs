use {
    crate::{checksum::Checksum, constants},
    alloc::vec::Vec,
    core::fmt,
};

/// Raw status byte a device returns with every reply.
///
/// Nothing in this crate acts on it. The accessors below name the alarm bits
/// that protocol 1.0 devices set; which of them matter is up to the caller.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusError(pub u8);

impl StatusError {
    pub const INPUT_VOLTAGE: u8 = 0x01;
    pub const ANGLE_LIMIT: u8 = 0x02;
    pub const OVERHEATING: u8 = 0x04;
    pub const RANGE: u8 = 0x08;
    pub const CHECKSUM: u8 = 0x10;
    pub const OVERLOAD: u8 = 0x20;
    pub const INSTRUCTION: u8 = 0x40;

    const NAMES: [(u8, &'static str); 7] = [
        (Self::INPUT_VOLTAGE, "input voltage"),
        (Self::ANGLE_LIMIT, "angle limit"),
        (Self::OVERHEATING, "overheating"),
        (Self::RANGE, "range"),
        (Self::CHECKSUM, "checksum"),
        (Self::OVERLOAD, "overload"),
        (Self::INSTRUCTION, "instruction"),
    ];

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn contains(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    #[inline(always)]
    pub const fn input_voltage(self) -> bool {
        self.contains(Self::INPUT_VOLTAGE)
    }

    #[inline(always)]
    pub const fn angle_limit(self) -> bool {
        self.contains(Self::ANGLE_LIMIT)
    }

    #[inline(always)]
    pub const fn overheating(self) -> bool {
        self.contains(Self::OVERHEATING)
    }

    #[inline(always)]
    pub const fn range(self) -> bool {
        self.contains(Self::RANGE)
    }

    #[inline(always)]
    pub const fn checksum(self) -> bool {
        self.contains(Self::CHECKSUM)
    }

    #[inline(always)]
    pub const fn overload(self) -> bool {
        self.contains(Self::OVERLOAD)
    }

    #[inline(always)]
    pub const fn instruction(self) -> bool {
        self.contains(Self::INSTRUCTION)
    }
}

impl From<StatusError> for u8 {
    #[inline(always)]
    fn from(StatusError(byte): StatusError) -> Self {
        byte
    }
}

impl fmt::Display for StatusError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "no error");
        }
        let mut first = true;
        for (bit, name) in Self::NAMES {
            if self.contains(bit) {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        let unnamed = self.0 & 0x80;
        if unnamed != 0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "unknown bit `x{unnamed:02X}`")?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mismatch8 {
    pub expected: u8,
    pub actual: u8,
}

impl fmt::Display for Mismatch8 {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { expected, actual } = *self;
        write!(f, "expected `x{expected:02X}` but received `x{actual:02X}`")
    }
}

/// Why a reply was rejected.
///
/// Callers of the bus only ever see a single communication failure; this is
/// the detail that goes to the log.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    WrongFirstHeaderByte(Mismatch8),
    WrongSecondHeaderByte(Mismatch8),
    LengthTooShort { length: u8 },
    WrongBodyLength { expected: u8, actual: usize },
    Checksum(Mismatch8),
}

impl fmt::Display for ParseError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::WrongFirstHeaderByte(ref e) => write!(f, "Wrong first header byte: {e}"),
            Self::WrongSecondHeaderByte(ref e) => write!(f, "Wrong second header byte: {e}"),
            Self::LengthTooShort { length } => write!(
                f,
                "Length `{length}` leaves no room for the error and checksum bytes",
            ),
            Self::WrongBodyLength { expected, actual } => write!(
                f,
                "Body should be {expected} bytes long but {actual} were given",
            ),
            Self::Checksum(ref e) => write!(f, "Checksum mismatch: {e}"),
        }
    }
}

impl core::error::Error for ParseError {}

/// The four bytes read before a reply's body: marker, id, and length.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Header {
    pub id: u8,
    pub length: u8,
}

impl Header {
    #[inline]
    pub const fn parse(bytes: [u8; constants::HEADER_BYTES]) -> Result<Self, ParseError> {
        let [first, second, id, length] = bytes;
        if first != constants::HEADER[0] {
            return Err(ParseError::WrongFirstHeaderByte(Mismatch8 {
                expected: constants::HEADER[0],
                actual: first,
            }));
        }
        if second != constants::HEADER[1] {
            return Err(ParseError::WrongSecondHeaderByte(Mismatch8 {
                expected: constants::HEADER[1],
                actual: second,
            }));
        }
        Ok(Self { id, length })
    }

    /// Bytes still to read after the header: error, parameters, and checksum.
    #[inline(always)]
    pub const fn body_len(&self) -> usize {
        self.length as usize
    }
}

/// A validated reply.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    pub id: u8,
    pub error: StatusError,
    pub parameters: Vec<u8>,
}

impl Status {
    /// Splits `body` into `[error, parameters.., checksum]` and checks it against the header.
    #[inline]
    pub fn parse(header: Header, body: &[u8]) -> Result<Self, ParseError> {
        let Header { id, length } = header;
        if body.len() != header.body_len() {
            return Err(ParseError::WrongBodyLength {
                expected: length,
                actual: body.len(),
            });
        }
        let [error, parameters @ .., received] = body else {
            return Err(ParseError::LengthTooShort { length });
        };

        let mut checksum = Checksum::new();
        checksum.extend(&[id, length, *error]);
        checksum.extend(parameters);
        let expected = checksum.collapse();
        if expected != *received {
            return Err(ParseError::Checksum(Mismatch8 {
                expected,
                actual: *received,
            }));
        }

        Ok(Self {
            id,
            error: StatusError(*error),
            parameters: parameters.to_vec(),
        })
    }
}

#[cfg(test)]
mod test {
    use {
        super::*,
        crate::packet::send::WithCrc,
        quickcheck::TestResult,
        quickcheck_macros::quickcheck,
    };

    #[test]
    fn parse_read_reply() {
        let header = Header::parse([0xFF, 0xFF, 0x01, 0x03]).unwrap();
        assert_eq!(header, Header { id: 0x01, length: 0x03 });
        let status = Status::parse(header, &[0x00, 0x20, 0xDB]).unwrap();
        assert_eq!(
            status,
            Status {
                id: 0x01,
                error: StatusError(0x00),
                parameters: vec![0x20],
            },
        );
    }

    #[test]
    fn parse_wrong_header_1() {
        assert_eq!(
            Header::parse([0xFE, 0xFF, 0x01, 0x00]),
            Err(ParseError::WrongFirstHeaderByte(Mismatch8 {
                expected: 0xFF,
                actual: 0xFE,
            })),
        );
    }

    #[test]
    fn parse_wrong_header_2() {
        assert_eq!(
            Header::parse([0xFF, 0x00, 0x01, 0x02]),
            Err(ParseError::WrongSecondHeaderByte(Mismatch8 {
                expected: 0xFF,
                actual: 0x00,
            })),
        );
    }

    #[test]
    fn parse_wrong_checksum() {
        let header = Header { id: 0x01, length: 0x03 };
        assert_eq!(
            Status::parse(header, &[0x00, 0x20, 0xDA]),
            Err(ParseError::Checksum(Mismatch8 {
                expected: 0xDB,
                actual: 0xDA,
            })),
        );
    }

    #[test]
    fn parse_length_too_short() {
        let header = Header { id: 0x01, length: 0x01 };
        assert_eq!(
            Status::parse(header, &[0xFD]),
            Err(ParseError::LengthTooShort { length: 0x01 }),
        );
        let header = Header { id: 0x01, length: 0x00 };
        assert_eq!(
            Status::parse(header, &[]),
            Err(ParseError::LengthTooShort { length: 0x00 }),
        );
    }

    #[test]
    fn parse_wrong_body_length() {
        let header = Header { id: 0x01, length: 0x03 };
        assert_eq!(
            Status::parse(header, &[0x00, 0xFC]),
            Err(ParseError::WrongBodyLength {
                expected: 0x03,
                actual: 2,
            }),
        );
    }

    #[test]
    fn status_error_passes_through() {
        let header = Header { id: 0x02, length: 0x02 };
        // id 2, length 2, error 0x24: sum 0x28
        let status = Status::parse(header, &[0x24, 0xD7]).unwrap();
        assert_eq!(status.error, StatusError(0x24));
        assert!(status.error.overheating());
        assert!(status.error.overload());
        assert!(!status.error.range());
        assert!(status.parameters.is_empty());
    }

    #[test]
    fn status_error_display() {
        assert_eq!(format!("{}", StatusError(0)), "no error");
        assert_eq!(
            format!("{}", StatusError(0x41)),
            "input voltage, instruction",
        );
        assert_eq!(
            format!("{}", StatusError(0x88)),
            "range, unknown bit `x80`",
        );
    }

    /// Replies share the request framing with the error byte in place of the instruction.
    #[quickcheck]
    fn framed_reply_parses(id: u8, error: u8, parameters: Vec<u8>) -> TestResult {
        let Ok(packet) = WithCrc::new(id, error, &parameters) else {
            return TestResult::discard();
        };
        let bytes = packet.as_buffer();
        let Ok(header) = Header::parse([bytes[0], bytes[1], bytes[2], bytes[3]]) else {
            return TestResult::error(format!("{bytes:02X?}: header rejected"));
        };
        match Status::parse(header, &bytes[constants::HEADER_BYTES..]) {
            Ok(status) => TestResult::from_bool(
                status.id == id && status.error == StatusError(error) && status.parameters == parameters,
            ),
            Err(e) => TestResult::error(format!("{bytes:02X?}: {e}")),
        }
    }

    #[quickcheck]
    fn corrupted_byte_is_caught(parameters: Vec<u8>, index: usize, flip: u8) -> TestResult {
        if flip == 0 {
            return TestResult::discard();
        }
        let Ok(packet) = WithCrc::new(0x01, 0x00, &parameters) else {
            return TestResult::discard();
        };
        let mut body = packet.as_buffer()[constants::HEADER_BYTES..].to_vec();
        let index = index % body.len();
        body[index] ^= flip;
        let header = Header { id: 0x01, length: packet.as_buffer()[3] };
        TestResult::from_bool(matches!(
            Status::parse(header, &body),
            Err(ParseError::Checksum(_))
        ))
    }
}
