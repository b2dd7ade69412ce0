use enum_repr::EnumRepr;

/// Standard protocol 1.0 instruction codes.
///
/// The frame codec treats the instruction byte as opaque: anything that fits
/// in a `u8` can be framed, and this list exists only so callers don't have
/// to spell the common ones out by hand.
#[EnumRepr(type = "u8")]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(test, derive(Ord, PartialOrd, strum_macros::VariantArray))]
pub enum Instruction {
    Ping = 0x01,
    Read = 0x02,
    Write = 0x03,
    RegWrite = 0x04,
    Action = 0x05,
    FactoryReset = 0x06,
    SyncWrite = 0x83,
}

impl From<Instruction> for u8 {
    #[inline(always)]
    fn from(instruction: Instruction) -> Self {
        instruction.repr()
    }
}

#[cfg(test)]
mod test {
    use {
        super::*,
        quickcheck::{Arbitrary, Gen, TestResult},
        quickcheck_macros::quickcheck,
        strum::VariantArray,
    };

    impl Arbitrary for Instruction {
        #[inline]
        fn arbitrary(g: &mut Gen) -> Self {
            let i = usize::arbitrary(g) % const { Self::VARIANTS.len() };
            Self::VARIANTS[i]
        }

        #[inline]
        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let i = Self::VARIANTS
                .binary_search(self)
                .expect("Invalid enum variant");
            Box::new(i.shrink().filter_map(|j| Self::VARIANTS.get(j).copied()))
        }
    }

    #[quickcheck]
    fn instruction_byte_roundtrip(instruction: Instruction) -> TestResult {
        let byte = u8::from(instruction);
        let roundtrip = Instruction::from_repr(byte);
        if roundtrip == Some(instruction) {
            TestResult::passed()
        } else {
            TestResult::error(format!(
                "{instruction:?} -> {byte:02X} -> {roundtrip:?} =/= Some({instruction:?})"
            ))
        }
    }

    #[quickcheck]
    fn byte_instruction_roundtrip(byte: u8) -> TestResult {
        let Some(instruction) = Instruction::from_repr(byte) else {
            return TestResult::discard();
        };
        TestResult::from_bool(instruction.repr() == byte)
    }

    #[test]
    fn instructions_are_plain_values() {
        let write = Instruction::Write;
        let copy = write;
        assert_eq!(u8::from(write), copy.repr());
        assert_eq!(write, copy);
    }

    #[test]
    fn unknown_bytes_are_not_named() {
        assert_eq!(Instruction::from_repr(0x00), None);
        assert_eq!(Instruction::from_repr(0x07), None);
        assert_eq!(Instruction::from_repr(0xFF), None);
    }

    #[test]
    fn wire_codes() {
        assert_eq!(u8::from(Instruction::Ping), 0x01);
        assert_eq!(u8::from(Instruction::Read), 0x02);
        assert_eq!(u8::from(Instruction::Write), 0x03);
        assert_eq!(u8::from(Instruction::SyncWrite), 0x83);
    }
}
