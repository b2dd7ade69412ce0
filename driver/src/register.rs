use {
    crate::{
        RegisterError,
        bus::{self, Bus},
        mutex::Mutex,
        transport::Transport,
    },
    ax_packet::{
        Status,
        control_table::{Access, ReadOnly, ReadWrite, U8, U16, Width, Writable},
    },
    core::{fmt, marker::PhantomData},
};

/// One register on one device, typed by its width and whether it can be written.
pub struct Register<'bus, M, W, A> {
    bus: &'bus M,
    id: u8,
    address: u8,
    width_and_access: PhantomData<(W, A)>,
}

pub type R8<'bus, M> = Register<'bus, M, U8, ReadOnly>;
pub type RW8<'bus, M> = Register<'bus, M, U8, ReadWrite>;
pub type R16<'bus, M> = Register<'bus, M, U16, ReadOnly>;
pub type RW16<'bus, M> = Register<'bus, M, U16, ReadWrite>;

impl<M, W, A> Clone for Register<'_, M, W, A> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, W, A> Copy for Register<'_, M, W, A> {}

impl<M, W: Width, A: Access> fmt::Debug for Register<'_, M, W, A> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Register")
            .field("id", &self.id)
            .field("address", &self.address)
            .field("bytes", &W::BYTES)
            .field("writable", &A::WRITABLE)
            .finish()
    }
}

impl<'bus, M, W, A> Register<'bus, M, W, A> {
    #[inline(always)]
    pub const fn new(bus: &'bus M, id: u8, address: u8) -> Self {
        Self {
            bus,
            id,
            address,
            width_and_access: PhantomData,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> u8 {
        self.id
    }

    #[inline(always)]
    pub const fn address(&self) -> u8 {
        self.address
    }
}

#[inline]
fn warn_on_error(status: &Status, id: u8, address: u8) {
    if !status.error.is_empty() {
        log::warn!(
            "ID {id} reported `{}` while accessing address {address}",
            status.error,
        );
    }
}

impl<T: Transport, M: Mutex<Item = Bus<T>>, W: Width, A: Access> Register<'_, M, W, A> {
    #[inline]
    pub fn read(&self) -> Result<W::Value, RegisterError<T, M>> {
        let status = self
            .bus
            .lock()
            .map_err(RegisterError::Mutex)?
            .read(self.id, self.address, W::BYTES)
            .map_err(RegisterError::Bus)?;
        warn_on_error(&status, self.id, self.address);
        W::from_le_bytes(&status.parameters).ok_or_else(|| {
            log::warn!(
                "Expected {} bytes from address {} on ID {} but received {:02X?}",
                W::BYTES,
                self.address,
                self.id,
                status.parameters,
            );
            RegisterError::Bus(bus::Error::Communication)
        })
    }
}

impl<T: Transport, M: Mutex<Item = Bus<T>>, W: Width, A: Writable> Register<'_, M, W, A> {
    /// Writes `value` and discards whatever the reply carries beyond its status.
    #[inline]
    pub fn write(&self, value: W::Value) -> Result<(), RegisterError<T, M>> {
        let bytes = W::to_le_bytes(value);
        let status = self
            .bus
            .lock()
            .map_err(RegisterError::Mutex)?
            .write(self.id, self.address, bytes.as_ref())
            .map_err(RegisterError::Bus)?;
        warn_on_error(&status, self.id, self.address);
        Ok(())
    }
}
