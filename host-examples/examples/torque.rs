//! Turns torque on or off, either for listed IDs in one sync write or for everyone.

use {
    ax_host_examples::{Connection, init_logging, unicast_id},
    ax_packet::{
        Instruction,
        control_table::{Item, ax12::TorqueEnable},
    },
    clap::{Parser, ValueEnum},
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum State {
    On,
    Off,
}

#[derive(Parser, Debug)]
#[command(about = "Enable or disable torque")]
struct Cli {
    #[command(flatten)]
    connection: Connection,

    #[arg(value_enum)]
    state: State,

    /// IDs to change (every device on the bus if none)
    #[arg(value_parser = unicast_id())]
    ids: Vec<u8>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut bus = cli.connection.open()?;
    let value = match cli.state {
        State::On => 1,
        State::Off => 0,
    };

    if cli.ids.is_empty() {
        bus.broadcast(Instruction::Write.into(), &[TorqueEnable::ADDRESS, value])?;
        log::info!("Torque {:?} on every device", cli.state);
    } else {
        let entries: Vec<_> = cli.ids.iter().map(|&id| (id, [value])).collect();
        bus.sync_write(TorqueEnable::ADDRESS, &entries)?;
        log::info!("Torque {:?} on {:?}", cli.state, cli.ids);
    }
    Ok(())
}
