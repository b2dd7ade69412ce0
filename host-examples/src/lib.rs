//! Shared setup for the command-line examples: serial connection and logging.

use {
    anyhow::Context,
    ax_driver::{Bus, io::Io},
    ax_packet::constants::MAX_ID,
    clap::{Args, builder::RangedI64ValueParser},
    serialport::SerialPort,
    std::time::Duration,
    tracing_subscriber::EnvFilter,
};

pub type Port = Io<Box<dyn SerialPort>>;

#[derive(Args, Debug)]
pub struct Connection {
    /// Serial device of the bus adapter (e.g. /dev/ttyUSB0, COM3)
    #[arg(long, env = "AX_PORT")]
    pub port: String,

    /// Baud rate every device on the bus is set to
    #[arg(long, env = "AX_BAUD", default_value_t = 1_000_000)]
    pub baud: u32,

    /// How long to wait for a reply, in milliseconds
    #[arg(long, env = "AX_TIMEOUT_MS", default_value_t = 50)]
    pub timeout_ms: u64,
}

impl Connection {
    pub fn open(&self) -> anyhow::Result<Bus<Port>> {
        let port = serialport::new(&self.port, self.baud)
            .timeout(Duration::from_millis(self.timeout_ms))
            .open()
            .with_context(|| format!("Couldn't open `{}` at {} baud", self.port, self.baud))?;
        log::info!("Opened `{}` at {} baud", self.port, self.baud);
        Ok(Bus::new(Io(port)))
    }
}

/// Accepts only IDs a single device can answer to (0 to 253).
pub fn unicast_id() -> RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(..=i64::from(MAX_ID))
}

/// Sends `log` records to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}
