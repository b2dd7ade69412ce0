use core::fmt;

/// Raw byte link to the bus: a serial port, a USB adapter, a test script.
///
/// Timeouts belong here, not in the bus: a `receive` that never returns
/// blocks the bus with it.
pub trait Transport {
    type SendError: fmt::Debug + fmt::Display;
    type RecvError: fmt::Debug + fmt::Display;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::SendError>;

    /// Fills as much of `buffer` as arrives and returns how many bytes that was.
    ///
    /// Fewer than `buffer.len()` is a short read, not an error.
    fn receive(&mut self, buffer: &mut [u8]) -> Result<usize, Self::RecvError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type SendError = T::SendError;
    type RecvError = T::RecvError;

    #[inline(always)]
    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::SendError> {
        T::send(self, bytes)
    }

    #[inline(always)]
    fn receive(&mut self, buffer: &mut [u8]) -> Result<usize, Self::RecvError> {
        T::receive(self, buffer)
    }
}
