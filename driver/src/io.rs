use {
    crate::transport::Transport,
    std::io::{self, Read, Write},
};

/// Any blocking byte stream as a [`Transport`], e.g. a serial port opened with a read timeout.
///
/// A read that times out ends the reply early instead of failing, so a
/// silent device shows up as a short read.
#[derive(Debug)]
pub struct Io<P>(pub P);

impl<P> Io<P> {
    #[inline(always)]
    pub const fn new(port: P) -> Self {
        Self(port)
    }

    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut P {
        &mut self.0
    }

    #[inline(always)]
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P: Read + Write> Transport for Io<P> {
    type SendError = io::Error;
    type RecvError = io::Error;

    #[inline]
    fn send(&mut self, bytes: &[u8]) -> Result<(), io::Error> {
        self.0.write_all(bytes)?;
        self.0.flush()
    }

    #[inline]
    fn receive(&mut self, buffer: &mut [u8]) -> Result<usize, io::Error> {
        let mut filled = 0;
        while filled < buffer.len() {
            match self.0.read(&mut buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock) => {
                    log::debug!("Read timed out after {filled} of {} bytes", buffer.len());
                    break;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}
