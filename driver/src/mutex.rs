use core::{
    cell::{BorrowMutError, RefCell},
    fmt,
    ops::DerefMut,
};

/// Whatever serializes access to a shared bus.
///
/// A guard is held for one whole request/response exchange, so replies can
/// never be interleaved.
pub trait Mutex {
    type Item;
    type Error: fmt::Debug + fmt::Display;

    fn new(item: Self::Item) -> Self;
    fn lock(&self) -> Result<impl DerefMut<Target = Self::Item>, Self::Error>;
}

/// Single-threaded sharing: locking fails while another guard is alive.
impl<T> Mutex for RefCell<T> {
    type Item = T;
    type Error = BorrowMutError;

    #[inline(always)]
    fn new(item: T) -> Self {
        RefCell::new(item)
    }

    #[inline(always)]
    fn lock(&self) -> Result<impl DerefMut<Target = T>, BorrowMutError> {
        self.try_borrow_mut()
    }
}

#[cfg(feature = "std")]
#[derive(Debug)]
pub struct Poisoned;

#[cfg(feature = "std")]
impl fmt::Display for Poisoned {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Another thread panicked while holding the bus")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Poisoned {}

#[cfg(feature = "std")]
impl<T> Mutex for std::sync::Mutex<T> {
    type Item = T;
    type Error = Poisoned;

    #[inline(always)]
    fn new(item: T) -> Self {
        std::sync::Mutex::new(item)
    }

    #[inline(always)]
    fn lock(&self) -> Result<impl DerefMut<Target = T>, Poisoned> {
        std::sync::Mutex::lock(self).map_err(|_| Poisoned)
    }
}
