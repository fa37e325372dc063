use super::alu::{
    rotate_left_circular, rotate_left_through, rotate_right_circular, rotate_right_through,
};
use super::table::CB_TICKS;
use super::{Bus, Cpu, Flags};

impl Cpu {
    /// CB-prefixed instructions: rotates, shifts, SWAP, BIT, RES and SET.
    ///
    /// `0xCB` itself costs nothing in `TICKS`; the full cost of the prefixed
    /// instruction is charged here from [`CB_TICKS`].
    pub(in crate::cpu) fn exec_cb(&mut self, bus: &mut dyn Bus, _opcode: u8, cb: u8) {
        let bit = (cb >> 3) & 0x07;
        let reg = cb & 0x07;
        let value = self.read_reg8(bus, reg);

        match cb >> 6 {
            0 => {
                let result = self.shift(bit, value);
                self.write_reg8(bus, reg, result);
            }
            1 => {
                // BIT b, r: Z from the tested bit, H set, C preserved.
                self.regs.set_flag(Flags::ZERO, value & (1 << bit) == 0);
                self.regs.clear_flag(Flags::NEGATIVE);
                self.regs.set_flag(Flags::HALF_CARRY, true);
            }
            2 => self.write_reg8(bus, reg, value & !(1 << bit)),
            _ => self.write_reg8(bus, reg, value | (1 << bit)),
        }

        self.add_ticks(CB_TICKS[cb as usize] as u32);
    }

    /// RLC/RRC/RL/RR/SLA/SRA/SWAP/SRL. Z from the result, N and H cleared.
    fn shift(&mut self, kind: u8, value: u8) -> u8 {
        let carry = self.regs.is_set(Flags::CARRY);
        let (result, carry_out) = match kind {
            0 => rotate_left_circular(value),
            1 => rotate_right_circular(value),
            2 => rotate_left_through(value, carry),
            3 => rotate_right_through(value, carry),
            4 => (value << 1, value & 0x80 != 0),
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            6 => (value.rotate_left(4), false),
            _ => (value >> 1, value & 0x01 != 0),
        };

        let mut flags = Flags::empty();
        flags.set(Flags::ZERO, result == 0);
        flags.set(Flags::CARRY, carry_out);
        self.regs.set_flags(flags);
        result
    }
}
