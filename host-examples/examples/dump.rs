//! Reads every register in a device's control table.

use {
    ax_host_examples::{Connection, init_logging, unicast_id},
    ax_packet::control_table::{Entry, ax_s1, ax12},
    clap::{Parser, ValueEnum},
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Model {
    Ax12,
    AxS1,
}

impl Model {
    const fn table(self) -> &'static [Entry] {
        match self {
            Self::Ax12 => ax12::TABLE,
            Self::AxS1 => ax_s1::TABLE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Print a device's whole control table")]
struct Cli {
    #[command(flatten)]
    connection: Connection,

    #[arg(long, value_enum, default_value_t = Model::Ax12)]
    model: Model,

    #[arg(value_parser = unicast_id())]
    id: u8,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut bus = cli.connection.open()?;

    for entry in cli.model.table() {
        let status = bus.read(cli.id, entry.address, entry.bytes)?;
        let value = status
            .parameters
            .iter()
            .rev()
            .fold(0_u32, |acc, &byte| (acc << 8) | u32::from(byte));
        println!(
            "{:#04X} {:<2} {:>5}  {}",
            entry.address,
            if entry.writable { "rw" } else { "r" },
            value,
            entry.description,
        );
        if !status.error.is_empty() {
            log::warn!("{}: {}", entry.description, status.error);
        }
    }
    Ok(())
}
