use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// LD rr, d16 for BC, DE, HL and SP.
    pub(in crate::cpu) fn exec_ld_rr_d16(&mut self, _bus: &mut dyn Bus, opcode: u8, value: u16) {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.sp = value,
        }
    }

    /// LD r, d8 and LD (HL), d8.
    pub(in crate::cpu) fn exec_ld_r_d8(&mut self, bus: &mut dyn Bus, opcode: u8, value: u8) {
        let dst = (opcode >> 3) & 0x07;
        self.write_reg8(bus, dst, value);
    }

    /// LD r1, r2 across 0x40..=0x7F. 0x76 is bound to HALT instead.
    pub(in crate::cpu) fn exec_ld_r_r(&mut self, bus: &mut dyn Bus, opcode: u8) {
        debug_assert_ne!(opcode, 0x76);
        let dst = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);
        self.write_reg8(bus, dst, value);
    }

    /// LD (BC), A / LD (DE), A / LDI (HL), A / LDD (HL), A.
    pub(in crate::cpu) fn exec_ld_indirect_a(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let addr = self.indirect_address(opcode);
        bus.write8(addr, self.regs.a());
    }

    /// LD A, (BC) / LD A, (DE) / LDI A, (HL) / LDD A, (HL).
    pub(in crate::cpu) fn exec_ld_a_indirect(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let addr = self.indirect_address(opcode);
        let value = bus.read8(addr);
        self.regs.set_a(value);
    }

    /// Resolve the pointer of the `0x?2`/`0x?A` loads, stepping HL where the
    /// opcode post-increments or post-decrements it.
    fn indirect_address(&mut self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            _ => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(in crate::cpu) fn exec_ld_a16_sp(&mut self, bus: &mut dyn Bus, _opcode: u8, addr: u16) {
        bus.write16(addr, self.regs.sp);
    }

    /// LDH (a8), A (0xE0) and LDH A, (a8) (0xF0).
    pub(in crate::cpu) fn exec_ldh_a8(&mut self, bus: &mut dyn Bus, opcode: u8, offset: u8) {
        let addr = 0xFF00 | offset as u16;
        if opcode == 0xE0 {
            bus.write8(addr, self.regs.a());
        } else {
            let value = bus.read8(addr);
            self.regs.set_a(value);
        }
    }

    /// LD (C), A (0xE2) and LD A, (C) (0xF2), both relative to 0xFF00.
    pub(in crate::cpu) fn exec_ldh_c(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let addr = 0xFF00 | self.regs.c() as u16;
        if opcode == 0xE2 {
            bus.write8(addr, self.regs.a());
        } else {
            let value = bus.read8(addr);
            self.regs.set_a(value);
        }
    }

    /// LD (a16), A (0xEA) and LD A, (a16) (0xFA).
    pub(in crate::cpu) fn exec_ld_a16_a(&mut self, bus: &mut dyn Bus, opcode: u8, addr: u16) {
        if opcode == 0xEA {
            bus.write8(addr, self.regs.a());
        } else {
            let value = bus.read8(addr);
            self.regs.set_a(value);
        }
    }

    pub(in crate::cpu) fn exec_ld_sp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) {
        self.regs.sp = self.regs.hl();
    }

    /// LD HL, SP+r8. Flags as for ADD SP, r8.
    pub(in crate::cpu) fn exec_ld_hl_sp_r8(&mut self, _bus: &mut dyn Bus, _opcode: u8, offset: u8) {
        let value = self.alu_add16_signed(self.regs.sp, offset);
        self.regs.set_hl(value);
    }
}
