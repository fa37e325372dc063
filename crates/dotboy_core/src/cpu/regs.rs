use bitflags::bitflags;

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 are always zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const ZERO = 0b1000_0000;
        const NEGATIVE = 0b0100_0000;
        const HALF_CARRY = 0b0010_0000;
        const CARRY = 0b0001_0000;
    }
}

/// Registers for the Game Boy CPU (LR35902).
///
/// Each pair is stored once as a `u16`; the 8-bit registers are views over
/// the high and low byte of their pair, so a write through either view is
/// visible through the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    af: u16,
    bc: u16,
    de: u16,
    hl: u16,
    pub sp: u16,
    pub pc: u16,
}

macro_rules! register_pair {
    ($pair:ident, $set_pair:ident, $hi:ident, $set_hi:ident, $lo:ident, $set_lo:ident) => {
        #[inline]
        pub fn $pair(&self) -> u16 {
            self.$pair
        }

        #[inline]
        pub fn $set_pair(&mut self, value: u16) {
            self.$pair = value;
        }

        #[inline]
        pub fn $hi(&self) -> u8 {
            (self.$pair >> 8) as u8
        }

        #[inline]
        pub fn $set_hi(&mut self, value: u8) {
            self.$pair = (self.$pair & 0x00FF) | ((value as u16) << 8);
        }

        #[inline]
        pub fn $lo(&self) -> u8 {
            self.$pair as u8
        }

        #[inline]
        pub fn $set_lo(&mut self, value: u8) {
            self.$pair = (self.$pair & 0xFF00) | value as u16;
        }
    };
}

impl Registers {
    register_pair!(bc, set_bc, b, set_b, c, set_c);
    register_pair!(de, set_de, d, set_d, e, set_e);
    register_pair!(hl, set_hl, h, set_h, l, set_l);

    #[inline]
    pub fn af(&self) -> u16 {
        self.af
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        // Lower 4 bits of F are always zero.
        self.af = value & 0xFFF0;
    }

    #[inline]
    pub fn a(&self) -> u8 {
        (self.af >> 8) as u8
    }

    #[inline]
    pub fn set_a(&mut self, value: u8) {
        self.af = (self.af & 0x00FF) | ((value as u16) << 8);
    }

    #[inline]
    pub fn f(&self) -> u8 {
        self.af as u8
    }

    #[inline]
    pub fn set_f(&mut self, value: u8) {
        self.af = (self.af & 0xFF00) | (value & 0xF0) as u16;
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_truncate(self.f())
    }

    /// Replace all four flags at once.
    #[inline]
    pub fn set_flags(&mut self, flags: Flags) {
        self.set_f(flags.bits());
    }

    #[inline]
    pub fn is_set(&self, flag: Flags) -> bool {
        self.flags().contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        let mut flags = self.flags();
        flags.set(flag, value);
        self.set_flags(flags);
    }

    #[inline]
    pub fn clear_flag(&mut self, flag: Flags) {
        self.set_flag(flag, false);
    }
}
