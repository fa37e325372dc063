use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// INC r and INC (HL).
    pub(in crate::cpu) fn exec_inc8_reg(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let reg = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, reg);
        let result = self.alu_inc8(value);
        self.write_reg8(bus, reg, result);
    }

    /// DEC r and DEC (HL).
    pub(in crate::cpu) fn exec_dec8_reg(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let reg = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, reg);
        let result = self.alu_dec8(value);
        self.write_reg8(bus, reg, result);
    }

    pub(in crate::cpu) fn exec_inc16_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) {
        let value = self.reg16(opcode).wrapping_add(1);
        self.set_reg16(opcode, value);
    }

    pub(in crate::cpu) fn exec_dec16_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) {
        let value = self.reg16(opcode).wrapping_sub(1);
        self.set_reg16(opcode, value);
    }

    /// BC, DE, HL or SP selected by bits 4-5. 16-bit INC/DEC touch no flags.
    fn reg16(&self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.sp,
        }
    }

    fn set_reg16(&mut self, opcode: u8, value: u16) {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.sp = value,
        }
    }
}
