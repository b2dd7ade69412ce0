#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod checksum;
pub mod constants;
pub mod control_table;
pub mod instruction;
pub mod packet;

pub use {
    checksum::checksum,
    instruction::Instruction,
    packet::recv::{Header, Status, StatusError},
};
