use super::{Cpu, Flags};

impl Cpu {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a();
        let carry_in = (use_carry && self.regs.is_set(Flags::CARRY)) as u8;

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = (a as u16) + (value as u16) + (carry_in as u16);
        let result = full as u8;

        self.regs.set_a(result);

        let mut flags = Flags::empty();
        flags.set(Flags::ZERO, result == 0);
        flags.set(Flags::HALF_CARRY, half > 0x0F);
        flags.set(Flags::CARRY, full > 0xFF);
        self.regs.set_flags(flags);
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a();
        let carry_in = (use_carry && self.regs.is_set(Flags::CARRY)) as i16;

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in;
        let full = a as i16 - value as i16 - carry_in;
        let result = full as u8;

        self.regs.set_a(result);

        let mut flags = Flags::NEGATIVE;
        flags.set(Flags::ZERO, result == 0);
        flags.set(Flags::HALF_CARRY, half < 0);
        flags.set(Flags::CARRY, full < 0);
        self.regs.set_flags(flags);
    }

    /// AND: H is always set, N and C always cleared.
    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a() & value;
        self.regs.set_a(result);

        let mut flags = Flags::HALF_CARRY;
        flags.set(Flags::ZERO, result == 0);
        self.regs.set_flags(flags);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a() | value;
        self.regs.set_a(result);
        self.set_zero_only(result);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a() ^ value;
        self.regs.set_a(result);
        self.set_zero_only(result);
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        let a = self.regs.a();

        let mut flags = Flags::NEGATIVE;
        flags.set(Flags::ZERO, a == value);
        flags.set(Flags::HALF_CARRY, (value & 0x0F) > (a & 0x0F));
        flags.set(Flags::CARRY, value > a);
        self.regs.set_flags(flags);
    }

    /// Z from `result`, N/H/C cleared.
    #[inline]
    pub(super) fn set_zero_only(&mut self, result: u8) {
        let mut flags = Flags::empty();
        flags.set(Flags::ZERO, result == 0);
        self.regs.set_flags(flags);
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// This follows the standard Game Boy DAA behaviour:
    /// - Uses C, H, N, and A to compute a correction value.
    /// - Updates A, Z, H, C; leaves N unchanged.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a();
        let subtract = self.regs.is_set(Flags::NEGATIVE);
        let mut adjust: u8 = if self.regs.is_set(Flags::CARRY) { 0x60 } else { 0x00 };
        if self.regs.is_set(Flags::HALF_CARRY) {
            adjust |= 0x06;
        }

        if !subtract {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        let mut flags = Flags::empty();
        flags.set(Flags::ZERO, a == 0);
        flags.set(Flags::NEGATIVE, subtract);
        flags.set(Flags::CARRY, adjust >= 0x60);
        self.regs.set_flags(flags);
        self.regs.set_a(a);
    }

    /// 8-bit increment helper used by INC r and INC (HL).
    ///
    /// H is set when the low nibble was `0xF`. C is unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.regs.set_flag(Flags::ZERO, result == 0);
        self.regs.clear_flag(Flags::NEGATIVE);
        self.regs.set_flag(Flags::HALF_CARRY, (value & 0x0F) == 0x0F);
        result
    }

    /// 8-bit decrement helper used by DEC r and DEC (HL).
    ///
    /// H is set when the low nibble was non-zero, i.e. when no borrow into
    /// bit 4 was needed. C is unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.regs.set_flag(Flags::ZERO, result == 0);
        self.regs.set_flag(Flags::NEGATIVE, true);
        self.regs.set_flag(Flags::HALF_CARRY, (value & 0x0F) != 0);
        result
    }

    /// 16-bit add helper for `ADD HL,rr`.
    ///
    /// Z is unaffected; N is cleared; H and C are updated based on the
    /// 16-bit addition.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);

        self.regs.clear_flag(Flags::NEGATIVE);
        self.regs
            .set_flag(Flags::HALF_CARRY, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.regs
            .set_flag(Flags::CARRY, (hl as u32) + (value as u32) > 0xFFFF);

        self.regs.set_hl(result);
    }

    /// 16-bit add helper for instructions that add a signed 8-bit immediate
    /// to a 16-bit base (ADD SP, r8 and LD HL, SP+r8).
    ///
    /// Z and N are cleared; H and C are computed from the low byte.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;

        let mut flags = Flags::empty();
        flags.set(Flags::HALF_CARRY, (base & 0x000F) + (offset & 0x000F) > 0x000F);
        flags.set(Flags::CARRY, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        self.regs.set_flags(flags);

        base.wrapping_add(offset)
    }
}

// Rotate primitives shared with the CB-prefixed shifts. Each returns the
// rotated value and the bit shifted out.

#[inline]
pub(super) fn rotate_left_circular(value: u8) -> (u8, bool) {
    (value.rotate_left(1), value & 0x80 != 0)
}

#[inline]
pub(super) fn rotate_right_circular(value: u8) -> (u8, bool) {
    (value.rotate_right(1), value & 0x01 != 0)
}

#[inline]
pub(super) fn rotate_left_through(value: u8, carry: bool) -> (u8, bool) {
    ((value << 1) | carry as u8, value & 0x80 != 0)
}

#[inline]
pub(super) fn rotate_right_through(value: u8, carry: bool) -> (u8, bool) {
    ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
}
