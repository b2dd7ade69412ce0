use {
    crate::transport::Transport,
    alloc::{vec, vec::Vec},
    ax_packet::{
        Instruction, constants,
        packet::{
            self,
            recv::{Header, ParseError, Status},
        },
    },
    core::fmt,
};

pub enum Error<T: Transport> {
    Send(T::SendError),
    Recv(T::RecvError),
    InvalidId(u8),
    TooManyParameters(usize),
    /// The reply was truncated, had a bad marker, or failed its checksum.
    /// Which one is only logged.
    Communication,
}

impl<T: Transport> fmt::Display for Error<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Send(ref e) => write!(f, "Error sending a packet: {e}"),
            Self::Recv(ref e) => write!(f, "Error receiving a reply: {e}"),
            Self::InvalidId(id) => write!(
                f,
                "ID {id} cannot be addressed on its own (valid IDs are 0 to {})",
                constants::MAX_ID,
            ),
            Self::TooManyParameters(count) => write!(
                f,
                "{count} parameters cannot fit in one packet (at most {})",
                constants::MAX_PARAMETERS,
            ),
            Self::Communication => write!(f, "Communication error"),
        }
    }
}

impl<T: Transport> fmt::Debug for Error<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Send(ref e) => f.debug_tuple("Send").field(e).finish(),
            Self::Recv(ref e) => f.debug_tuple("Recv").field(e).finish(),
            Self::InvalidId(id) => f.debug_tuple("InvalidId").field(&id).finish(),
            Self::TooManyParameters(count) => {
                f.debug_tuple("TooManyParameters").field(&count).finish()
            }
            Self::Communication => f.write_str("Communication"),
        }
    }
}

impl<T: Transport> core::error::Error for Error<T> {}

#[inline]
fn rejected<T: Transport>(e: ParseError) -> Error<T> {
    log::warn!("Rejected reply: {e}");
    Error::Communication
}

/// One half-duplex bus, owning the transport it talks through.
///
/// Every method takes `&mut self`: a request and its reply are never
/// interleaved with anything else. To share a bus, put it behind a
/// [`Mutex`](crate::mutex::Mutex).
pub struct Bus<T: Transport> {
    transport: T,
}

impl<T: Transport> Bus<T> {
    #[inline(always)]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    #[inline(always)]
    pub fn transport(&mut self) -> &mut T {
        &mut self.transport
    }

    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Sends one instruction to one device and waits for its reply.
    ///
    /// The reply's ID and error byte are returned as received.
    #[inline]
    pub fn send(
        &mut self,
        id: u8,
        instruction: u8,
        parameters: &[u8],
    ) -> Result<Status, Error<T>> {
        if !constants::is_unicast(id) {
            return Err(Error::InvalidId(id));
        }
        self.transmit(id, instruction, parameters)?;
        self.receive()
    }

    /// Sends one instruction to every device. Nothing replies, so nothing is read.
    #[inline]
    pub fn broadcast(&mut self, instruction: u8, parameters: &[u8]) -> Result<(), Error<T>> {
        self.transmit(constants::BROADCAST_ID, instruction, parameters)
    }

    #[inline]
    fn transmit(&mut self, id: u8, instruction: u8, parameters: &[u8]) -> Result<(), Error<T>> {
        let packet = packet::new(id, instruction, parameters)
            .map_err(|e| Error::TooManyParameters(e.count))?;
        log::debug!("Sending {:02X?}", packet.as_buffer());
        self.transport.send(packet.as_buffer()).map_err(Error::Send)
    }

    #[inline]
    fn receive(&mut self) -> Result<Status, Error<T>> {
        let mut header = [0; constants::HEADER_BYTES];
        self.receive_exactly(&mut header, "header")?;
        let header = Header::parse(header).map_err(rejected)?;

        let mut body = vec![0; header.body_len()];
        self.receive_exactly(&mut body, "body")?;
        let status = Status::parse(header, &body).map_err(rejected)?;

        log::debug!(
            "Received reply from ID {}: error `x{:02X}`, parameters {:02X?}",
            status.id,
            u8::from(status.error),
            status.parameters,
        );
        Ok(status)
    }

    #[inline]
    fn receive_exactly(&mut self, buffer: &mut [u8], part: &str) -> Result<(), Error<T>> {
        let received = self.transport.receive(buffer).map_err(Error::Recv)?;
        if received != buffer.len() {
            log::warn!(
                "Truncated reply {part}: received {received} of {} bytes",
                buffer.len(),
            );
            return Err(Error::Communication);
        }
        Ok(())
    }

    #[inline]
    pub fn ping(&mut self, id: u8) -> Result<Status, Error<T>> {
        self.send(id, Instruction::Ping.into(), &[])
    }

    /// Reads `count` bytes starting at `address`.
    #[inline]
    pub fn read(&mut self, id: u8, address: u8, count: u8) -> Result<Status, Error<T>> {
        self.send(id, Instruction::Read.into(), &[address, count])
    }

    #[inline]
    pub fn write(&mut self, id: u8, address: u8, bytes: &[u8]) -> Result<Status, Error<T>> {
        self.send(id, Instruction::Write.into(), &prefixed(address, bytes))
    }

    /// Like [`Self::write`], but the device holds the value until [`Self::action`].
    #[inline]
    pub fn reg_write(&mut self, id: u8, address: u8, bytes: &[u8]) -> Result<Status, Error<T>> {
        self.send(id, Instruction::RegWrite.into(), &prefixed(address, bytes))
    }

    /// Tells every device to apply what it received through [`Self::reg_write`].
    #[inline]
    pub fn action(&mut self) -> Result<(), Error<T>> {
        self.broadcast(Instruction::Action.into(), &[])
    }

    #[inline]
    pub fn factory_reset(&mut self, id: u8) -> Result<Status, Error<T>> {
        self.send(id, Instruction::FactoryReset.into(), &[])
    }

    /// Writes `N` bytes at `address` on several devices with one broadcast.
    #[inline]
    pub fn sync_write<const N: usize>(
        &mut self,
        address: u8,
        entries: &[(u8, [u8; N])],
    ) -> Result<(), Error<T>> {
        let count = 2 + entries.len() * (N + 1);
        let Ok(width) = u8::try_from(N) else {
            return Err(Error::TooManyParameters(count));
        };
        if let Some(&(id, _)) = entries.iter().find(|&&(id, _)| !constants::is_unicast(id)) {
            return Err(Error::InvalidId(id));
        }
        let mut parameters = Vec::with_capacity(count);
        parameters.extend_from_slice(&[address, width]);
        for (id, bytes) in entries {
            parameters.push(*id);
            parameters.extend_from_slice(bytes);
        }
        self.broadcast(Instruction::SyncWrite.into(), &parameters)
    }
}

#[inline]
fn prefixed(address: u8, bytes: &[u8]) -> Vec<u8> {
    let mut parameters = Vec::with_capacity(bytes.len() + 1);
    parameters.push(address);
    parameters.extend_from_slice(bytes);
    parameters
}
