#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

pub mod bus;
pub mod device;
#[cfg(feature = "std")]
pub mod io;
pub mod mutex;
pub mod register;
pub mod transport;

#[cfg(test)]
mod test_util;

pub use {bus::Bus, transport::Transport};

use core::fmt;

/// Anything that can go wrong using a bus someone else may be holding.
pub enum RegisterError<T: Transport, M: mutex::Mutex> {
    Mutex(<M as mutex::Mutex>::Error),
    Bus(bus::Error<T>),
}

impl<T: Transport, M: mutex::Mutex> fmt::Display for RegisterError<T, M> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Mutex(ref e) => write!(f, "Error waiting to use the bus: {e}"),
            Self::Bus(ref e) => write!(f, "Error from the bus: {e}"),
        }
    }
}

impl<T: Transport, M: mutex::Mutex> fmt::Debug for RegisterError<T, M> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Mutex(ref e) => f.debug_tuple("Mutex").field(e).finish(),
            Self::Bus(ref e) => f.debug_tuple("Bus").field(e).finish(),
        }
    }
}

impl<T: Transport, M: mutex::Mutex> core::error::Error for RegisterError<T, M> {}
