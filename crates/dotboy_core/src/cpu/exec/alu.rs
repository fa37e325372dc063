use crate::cpu::alu::{
    rotate_left_circular, rotate_left_through, rotate_right_circular, rotate_right_through,
};
use crate::cpu::{Bus, Cpu, Flags};

impl Cpu {
    /// Dispatch one of the eight accumulator operations encoded in bits 3-5
    /// of both the register group and the immediate group.
    fn alu_op(&mut self, operation: u8, value: u8) {
        match operation & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A, r across 0x80..=0xBF.
    pub(in crate::cpu) fn exec_alu_reg(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let value = self.read_reg8(bus, opcode & 0x07);
        self.alu_op(opcode >> 3, value);
    }

    /// The same eight operations with an immediate operand (0xC6, 0xCE .. 0xFE).
    pub(in crate::cpu) fn exec_alu_imm(&mut self, _bus: &mut dyn Bus, opcode: u8, value: u8) {
        self.alu_op(opcode >> 3, value);
    }

    /// RLCA, RRCA, RLA, RRA. Unlike their CB forms these always clear Z.
    pub(in crate::cpu) fn exec_rotate_a(&mut self, _bus: &mut dyn Bus, opcode: u8) {
        let a = self.regs.a();
        let carry = self.regs.is_set(Flags::CARRY);
        let (result, carry_out) = match opcode {
            0x07 => rotate_left_circular(a),
            0x0F => rotate_right_circular(a),
            0x17 => rotate_left_through(a, carry),
            _ => rotate_right_through(a, carry),
        };
        self.regs.set_a(result);

        let mut flags = Flags::empty();
        flags.set(Flags::CARRY, carry_out);
        self.regs.set_flags(flags);
    }

    pub(in crate::cpu) fn exec_add_hl_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) {
        let value = match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.sp,
        };
        self.alu_add16_hl(value);
    }

    pub(in crate::cpu) fn exec_add_sp_r8(&mut self, _bus: &mut dyn Bus, _opcode: u8, offset: u8) {
        self.regs.sp = self.alu_add16_signed(self.regs.sp, offset);
    }

    pub(in crate::cpu) fn exec_daa(&mut self, _bus: &mut dyn Bus, _opcode: u8) {
        self.alu_daa();
    }

    /// CPL: A = !A, sets N and H.
    pub(in crate::cpu) fn exec_cpl(&mut self, _bus: &mut dyn Bus, _opcode: u8) {
        self.regs.set_a(!self.regs.a());
        self.regs.set_flag(Flags::NEGATIVE, true);
        self.regs.set_flag(Flags::HALF_CARRY, true);
    }

    /// SCF: set carry, clear N and H.
    pub(in crate::cpu) fn exec_scf(&mut self, _bus: &mut dyn Bus, _opcode: u8) {
        self.regs.clear_flag(Flags::NEGATIVE);
        self.regs.clear_flag(Flags::HALF_CARRY);
        self.regs.set_flag(Flags::CARRY, true);
    }

    /// CCF: complement carry, clear N and H.
    pub(in crate::cpu) fn exec_ccf(&mut self, _bus: &mut dyn Bus, _opcode: u8) {
        let carry = self.regs.is_set(Flags::CARRY);
        self.regs.clear_flag(Flags::NEGATIVE);
        self.regs.clear_flag(Flags::HALF_CARRY);
        self.regs.set_flag(Flags::CARRY, !carry);
    }
}
