use core::fmt;

/// A register at a fixed address in some device's control table.
pub trait Item {
    const ADDRESS: u8;
    const DESCRIPTION: &'static str;
    type Width: Width;
    type Access: Access;
}

/// How many bytes a register spans and how they map to a value (always little-endian).
pub trait Width {
    type Value: Copy + fmt::Debug + fmt::Display;
    type Bytes: AsRef<[u8]>;
    const BYTES: u8;

    fn from_le_bytes(bytes: &[u8]) -> Option<Self::Value>;
    fn to_le_bytes(value: Self::Value) -> Self::Bytes;
}

#[derive(Clone, Copy, Debug)]
pub struct U8;

impl Width for U8 {
    type Value = u8;
    type Bytes = [u8; 1];
    const BYTES: u8 = 1;

    #[inline(always)]
    fn from_le_bytes(bytes: &[u8]) -> Option<u8> {
        <[u8; 1]>::try_from(bytes).ok().map(u8::from_le_bytes)
    }

    #[inline(always)]
    fn to_le_bytes(value: u8) -> [u8; 1] {
        value.to_le_bytes()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct U16;

impl Width for U16 {
    type Value = u16;
    type Bytes = [u8; 2];
    const BYTES: u8 = 2;

    #[inline(always)]
    fn from_le_bytes(bytes: &[u8]) -> Option<u16> {
        <[u8; 2]>::try_from(bytes).ok().map(u16::from_le_bytes)
    }

    #[inline(always)]
    fn to_le_bytes(value: u16) -> [u8; 2] {
        value.to_le_bytes()
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::ReadOnly {}
    impl Sealed for super::ReadWrite {}
}

pub trait Access: sealed::Sealed {
    const WRITABLE: bool;
}

/// Only registers marked with an access type implementing this can be written.
pub trait Writable: Access {}

#[derive(Clone, Copy, Debug)]
pub struct ReadOnly;

impl Access for ReadOnly {
    const WRITABLE: bool = false;
}

#[derive(Clone, Copy, Debug)]
pub struct ReadWrite;

impl Access for ReadWrite {
    const WRITABLE: bool = true;
}

impl Writable for ReadWrite {}

/// One row of a control table, for walking a whole table at runtime.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Entry {
    pub address: u8,
    pub bytes: u8,
    pub writable: bool,
    pub description: &'static str,
}

impl Entry {
    #[inline(always)]
    pub const fn of<I: Item>() -> Self {
        Self {
            address: I::ADDRESS,
            bytes: <I::Width as Width>::BYTES,
            writable: <I::Access as Access>::WRITABLE,
            description: I::DESCRIPTION,
        }
    }
}

macro_rules! items {
    ($($name:ident = $address:literal, $width:ident, $access:ident, $description:literal;)*) => {
        $(
            pub struct $name;
            impl super::Item for $name {
                const ADDRESS: u8 = $address;
                const DESCRIPTION: &'static str = $description;
                type Width = super::$width;
                type Access = super::$access;
            }
        )*

        /// Every register in this table, in address order.
        pub const TABLE: &[super::Entry] = &[$(super::Entry::of::<$name>(),)*];
    };
}

pub mod ax12;
pub mod ax_s1;
