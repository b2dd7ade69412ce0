//! Pings every ID in a range and lists whoever answers.

use {
    ax_driver::bus,
    ax_host_examples::{Connection, init_logging, unicast_id},
    ax_packet::constants::MAX_ID,
    clap::Parser,
};

#[derive(Parser, Debug)]
#[command(about = "Ping every ID on the bus")]
struct Cli {
    #[command(flatten)]
    connection: Connection,

    /// First ID to ping
    #[arg(long, default_value_t = 0, value_parser = unicast_id())]
    first: u8,

    /// Last ID to ping
    #[arg(long, default_value_t = MAX_ID, value_parser = unicast_id())]
    last: u8,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut bus = cli.connection.open()?;

    let mut found = 0_usize;
    for id in cli.first..=cli.last {
        match bus.ping(id) {
            Ok(status) => {
                found += 1;
                println!("ID {id:>3}: {}", status.error);
            }
            // Nobody home
            Err(bus::Error::Communication) => {}
            Err(e) => return Err(e.into()),
        }
    }
    log::info!("{found} device(s) between ID {} and {}", cli.first, cli.last);
    Ok(())
}
