use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// PUSH BC/DE/HL/AF.
    pub(in crate::cpu) fn exec_push_rr(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let value = match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.af(),
        };
        self.push_u16(bus, value);
    }

    /// POP BC/DE/HL/AF. The low nibble of F always reads back as zero.
    pub(in crate::cpu) fn exec_pop_rr(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let value = self.pop_u16(bus);
        match (opcode >> 4) & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.set_af(value),
        }
    }
}
