use ax_packet::{
    Instruction,
    control_table::{Item, U16, Width, ax12},
    packet,
};

const ID: u8 = 1;

fn main() {
    let mut parameters = vec![ax12::GoalPosition::ADDRESS];
    parameters.extend_from_slice(&U16::to_le_bytes(512));
    let packet = match packet::new(ID, Instruction::Write.into(), &parameters) {
        Ok(ok) => ok,
        Err(e) => panic!("{e}"),
    };
    println!("{:02X?}", packet.as_buffer());
}
