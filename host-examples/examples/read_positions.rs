//! Polls the present position of a few AX-12s until interrupted.

use {
    ax_driver::device::Ax12,
    ax_host_examples::{Connection, init_logging, unicast_id},
    clap::Parser,
    core::cell::RefCell,
    std::{thread, time::Duration},
};

#[derive(Parser, Debug)]
#[command(about = "Print the present position of each actuator")]
struct Cli {
    #[command(flatten)]
    connection: Connection,

    /// Milliseconds between polls
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Stop after this many polls
    #[arg(long)]
    count: Option<usize>,

    /// IDs to poll
    #[arg(required = true, value_parser = unicast_id())]
    ids: Vec<u8>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let bus = RefCell::new(cli.connection.open()?);
    let actuators: Vec<_> = cli.ids.iter().map(|&id| Ax12::new(&bus, id)).collect();

    let mut polls = 0;
    while cli.count.is_none_or(|count| polls < count) {
        let line: Vec<String> = actuators
            .iter()
            .map(|actuator| match actuator.present_position().read() {
                Ok(position) => format!("{}: {position:>4}", actuator.ident()),
                Err(e) => {
                    log::warn!("ID {}: {e}", actuator.ident());
                    format!("{}:    ?", actuator.ident())
                }
            })
            .collect();
        println!("{}", line.join("  "));
        polls += 1;
        thread::sleep(Duration::from_millis(cli.interval_ms));
    }
    Ok(())
}
