use super::{Bus, Cpu, Flags};

impl Cpu {
    /// Helper to read an 8-bit register or (HL) by index.
    ///
    /// The encoding matches the standard Game Boy register order used by
    /// opcode tables:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub(super) fn read_reg8(&mut self, bus: &mut dyn Bus, index: u8) -> u8 {
        match index & 0x07 {
            0 => self.regs.b(),
            1 => self.regs.c(),
            2 => self.regs.d(),
            3 => self.regs.e(),
            4 => self.regs.h(),
            5 => self.regs.l(),
            6 => bus.read8(self.regs.hl()),
            _ => self.regs.a(),
        }
    }

    /// Helper to write an 8-bit register or (HL) by index.
    ///
    /// The encoding matches `read_reg8`.
    #[inline]
    pub(super) fn write_reg8(&mut self, bus: &mut dyn Bus, index: u8, value: u8) {
        match index & 0x07 {
            0 => self.regs.set_b(value),
            1 => self.regs.set_c(value),
            2 => self.regs.set_d(value),
            3 => self.regs.set_e(value),
            4 => self.regs.set_h(value),
            5 => self.regs.set_l(value),
            6 => bus.write8(self.regs.hl(), value),
            _ => self.regs.set_a(value),
        }
    }

    /// Push a 16-bit value: `sp -= 2`, then a little-endian write at `sp`.
    #[inline]
    pub fn push_u16(&mut self, bus: &mut dyn Bus, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(2);
        bus.write16(self.regs.sp, value);
    }

    /// Pop a 16-bit value: little-endian read at `sp`, then `sp += 2`.
    #[inline]
    pub fn pop_u16(&mut self, bus: &mut dyn Bus) -> u16 {
        let value = bus.read16(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }

    /// Push the current `pc` and jump to `target`.
    ///
    /// Shared by CALL, RST and interrupt dispatch.
    #[inline]
    pub(crate) fn call(&mut self, bus: &mut dyn Bus, target: u16) {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = target;
    }

    /// Pop the return address into `pc`.
    #[inline]
    pub(super) fn ret(&mut self, bus: &mut dyn Bus) {
        self.regs.pc = self.pop_u16(bus);
    }

    /// Evaluate the two-bit condition field of JR/JP/CALL/RET cc.
    #[inline]
    pub(super) fn condition(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0x03 {
            0 => !self.regs.is_set(Flags::ZERO),  // NZ
            1 => self.regs.is_set(Flags::ZERO),   // Z
            2 => !self.regs.is_set(Flags::CARRY), // NC
            _ => self.regs.is_set(Flags::CARRY),  // C
        }
    }
}
