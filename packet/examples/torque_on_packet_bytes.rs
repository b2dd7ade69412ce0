use ax_packet::{
    Instruction, constants,
    control_table::{Item, ax12},
    packet,
};

fn main() {
    // Every actuator at once: no reply comes back from a broadcast.
    let parameters = [ax12::TorqueEnable::ADDRESS, 1];
    let packet = match packet::new(constants::BROADCAST_ID, Instruction::Write.into(), &parameters) {
        Ok(ok) => ok,
        Err(e) => panic!("{e}"),
    };
    println!("{:02X?}", packet.as_buffer());
}
