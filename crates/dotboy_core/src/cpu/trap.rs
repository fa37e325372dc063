use std::fmt;

use super::Registers;

/// Fatal condition raised when the CPU fetches an opcode without semantics.
///
/// Carries everything needed for the diagnostic dump. The CPU stays locked
/// once a trap has been recorded; the driver loop surfaces it as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trap {
    pub opcode: u8,
    /// Address of the opcode byte. `regs.pc` has already been rewound to it.
    pub address: u16,
    pub regs: Registers,
}

impl fmt::Display for Trap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.regs;
        write!(
            f,
            "illegal instruction 0x{:02X} at 0x{:04X} (A=0x{:02X} F=0x{:02X} B=0x{:02X} C=0x{:02X} D=0x{:02X} E=0x{:02X} H=0x{:02X} L=0x{:02X} SP=0x{:04X} PC=0x{:04X})",
            self.opcode,
            self.address,
            r.a(),
            r.f(),
            r.b(),
            r.c(),
            r.d(),
            r.e(),
            r.h(),
            r.l(),
            r.sp,
            r.pc,
        )
    }
}

impl std::error::Error for Trap {}
