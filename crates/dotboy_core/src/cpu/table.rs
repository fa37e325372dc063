use lazy_static::lazy_static;

use super::{Bus, Cpu};

/// Handler for one primary opcode, tagged by operand width.
///
/// Every handler receives the opcode itself so grouped instructions can
/// decode their register fields, followed by the operand already fetched by
/// `Cpu::step` (`pc` points past it when the handler runs).
#[derive(Clone, Copy)]
pub enum Execute {
    Implied(fn(&mut Cpu, &mut dyn Bus, u8)),
    Byte(fn(&mut Cpu, &mut dyn Bus, u8, u8)),
    Word(fn(&mut Cpu, &mut dyn Bus, u8, u16)),
}

/// Decoded operand of one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    None,
    Byte(u8),
    Word(u16),
}

/// One entry of the primary opcode table.
#[derive(Clone, Copy)]
pub struct Instruction {
    /// Disassembly template. `d8`/`a8`/`r8` and `d16`/`a16` are replaced by
    /// the operand when rendering.
    pub disassembly: &'static str,
    pub execute: Execute,
}

impl Instruction {
    /// Operand width in bytes (0, 1 or 2).
    #[inline]
    pub fn width(&self) -> u16 {
        match self.execute {
            Execute::Implied(_) => 0,
            Execute::Byte(_) => 1,
            Execute::Word(_) => 2,
        }
    }

    /// Render the template with a decoded operand, e.g. `LD A, $42`.
    pub fn disassemble(&self, operand: Operand) -> String {
        let template = self.disassembly;
        match operand {
            Operand::None => template.to_string(),
            Operand::Byte(value) if template.starts_with("CB ") => cb_disassembly(value),
            Operand::Byte(value) if template.contains("r8") => template
                .replace("+r8", "r8")
                .replace("r8", &format!("{:+}", value as i8)),
            Operand::Byte(value) => template
                .replace("d8", &format!("${value:02X}"))
                .replace("a8", &format!("$FF00+${value:02X}")),
            Operand::Word(value) => template
                .replace("d16", &format!("${value:04X}"))
                .replace("a16", &format!("${value:04X}")),
        }
    }
}

impl std::fmt::Debug for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instruction")
            .field("disassembly", &self.disassembly)
            .field("width", &self.width())
            .finish()
    }
}

/// Render a CB-prefixed instruction from its opcode fields.
pub fn cb_disassembly(cb: u8) -> String {
    const REGS: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];
    const SHIFTS: [&str; 8] = ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SWAP", "SRL"];
    let reg = REGS[(cb & 0x07) as usize];
    let y = (cb >> 3) & 0x07;
    match cb >> 6 {
        0 => format!("{} {reg}", SHIFTS[y as usize]),
        1 => format!("BIT {y}, {reg}"),
        2 => format!("RES {y}, {reg}"),
        _ => format!("SET {y}, {reg}"),
    }
}

lazy_static! {
    /// The primary opcode table, indexed directly by the fetched byte.
    pub static ref INSTRUCTIONS: [Instruction; 256] = std::array::from_fn(|op| Instruction {
        disassembly: DISASSEMBLY[op],
        execute: handler(op as u8),
    });
}

/// Bind each opcode to its handler. Opcode holes go to the trap.
fn handler(opcode: u8) -> Execute {
    use Execute::{Byte, Implied, Word};

    match opcode {
        0x00 => Implied(Cpu::exec_nop),
        0x01 | 0x11 | 0x21 | 0x31 => Word(Cpu::exec_ld_rr_d16),
        0x02 | 0x12 | 0x22 | 0x32 => Implied(Cpu::exec_ld_indirect_a),
        0x03 | 0x13 | 0x23 | 0x33 => Implied(Cpu::exec_inc16_rr),
        0x0B | 0x1B | 0x2B | 0x3B => Implied(Cpu::exec_dec16_rr),
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => Implied(Cpu::exec_inc8_reg),
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => Implied(Cpu::exec_dec8_reg),
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => Byte(Cpu::exec_ld_r_d8),
        0x07 | 0x0F | 0x17 | 0x1F => Implied(Cpu::exec_rotate_a),
        0x08 => Word(Cpu::exec_ld_a16_sp),
        0x09 | 0x19 | 0x29 | 0x39 => Implied(Cpu::exec_add_hl_rr),
        0x0A | 0x1A | 0x2A | 0x3A => Implied(Cpu::exec_ld_a_indirect),
        0x10 => Byte(Cpu::exec_stop),
        0x18 => Byte(Cpu::exec_jr),
        0x20 | 0x28 | 0x30 | 0x38 => Byte(Cpu::exec_jr_cc),
        0x27 => Implied(Cpu::exec_daa),
        0x2F => Implied(Cpu::exec_cpl),
        0x37 => Implied(Cpu::exec_scf),
        0x3F => Implied(Cpu::exec_ccf),
        0x76 => Implied(Cpu::exec_halt),
        0x40..=0x7F => Implied(Cpu::exec_ld_r_r),
        0x80..=0xBF => Implied(Cpu::exec_alu_reg),
        0xC0 | 0xC8 | 0xD0 | 0xD8 => Implied(Cpu::exec_ret_cc),
        0xC1 | 0xD1 | 0xE1 | 0xF1 => Implied(Cpu::exec_pop_rr),
        0xC5 | 0xD5 | 0xE5 | 0xF5 => Implied(Cpu::exec_push_rr),
        0xC2 | 0xCA | 0xD2 | 0xDA => Word(Cpu::exec_jp_cc),
        0xC3 => Word(Cpu::exec_jp_a16),
        0xC4 | 0xCC | 0xD4 | 0xDC => Word(Cpu::exec_call_cc),
        0xCD => Word(Cpu::exec_call_a16),
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => Byte(Cpu::exec_alu_imm),
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => Implied(Cpu::exec_rst),
        0xC9 => Implied(Cpu::exec_ret),
        0xD9 => Implied(Cpu::exec_reti),
        0xCB => Byte(Cpu::exec_cb),
        0xE0 | 0xF0 => Byte(Cpu::exec_ldh_a8),
        0xE2 | 0xF2 => Implied(Cpu::exec_ldh_c),
        0xE8 => Byte(Cpu::exec_add_sp_r8),
        0xF8 => Byte(Cpu::exec_ld_hl_sp_r8),
        0xE9 => Implied(Cpu::exec_jp_hl),
        0xF9 => Implied(Cpu::exec_ld_sp_hl),
        0xEA | 0xFA => Word(Cpu::exec_ld_a16_a),
        0xF3 => Implied(Cpu::exec_di),
        0xFB => Implied(Cpu::exec_ei),

        // Opcode holes: D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD.
        _ => Implied(Cpu::exec_undefined),
    }
}

/// Base T-cycle cost of each primary opcode.
///
/// Conditional jumps, calls and returns list their not-taken cost; the
/// handler charges the difference when the branch is taken. `0xCB` is 0
/// because the prefixed instruction charges its full cost from
/// [`CB_TICKS`]. Opcode holes cost nothing.
#[rustfmt::skip]
pub const TICKS: [u8; 256] = [
     4, 12,  8,  8,  4,  4,  8,  4, 20,  8,  8,  8,  4,  4,  8,  4, // 0x0_
     4, 12,  8,  8,  4,  4,  8,  4, 12,  8,  8,  8,  4,  4,  8,  4, // 0x1_
     8, 12,  8,  8,  4,  4,  8,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 0x2_
     8, 12,  8,  8, 12, 12, 12,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 0x3_
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0x4_
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0x5_
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0x6_
     8,  8,  8,  8,  8,  8,  4,  8,  4,  4,  4,  4,  4,  4,  8,  4, // 0x7_
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0x8_
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0x9_
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0xA_
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0xB_
     8, 12, 12, 16, 12, 16,  8, 16,  8, 16, 12,  0, 12, 24,  8, 16, // 0xC_
     8, 12, 12,  0, 12, 16,  8, 16,  8, 16, 12,  0, 12,  0,  8, 16, // 0xD_
    12, 12,  8,  0,  0, 16,  8, 16, 16,  4, 16,  0,  0,  0,  8, 16, // 0xE_
    12, 12,  8,  4,  0, 16,  8, 16, 12,  8, 16,  4,  0,  0,  8, 16, // 0xF_
];

/// T-cycle cost of each CB-prefixed opcode, prefix fetch included.
#[rustfmt::skip]
pub const CB_TICKS: [u8; 256] = [
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0x0_
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0x1_
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0x2_
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0x3_
     8,  8,  8,  8,  8,  8, 12,  8,  8,  8,  8,  8,  8,  8, 12,  8, // 0x4_
     8,  8,  8,  8,  8,  8, 12,  8,  8,  8,  8,  8,  8,  8, 12,  8, // 0x5_
     8,  8,  8,  8,  8,  8, 12,  8,  8,  8,  8,  8,  8,  8, 12,  8, // 0x6_
     8,  8,  8,  8,  8,  8, 12,  8,  8,  8,  8,  8,  8,  8, 12,  8, // 0x7_
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0x8_
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0x9_
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0xA_
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0xB_
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0xC_
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0xD_
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0xE_
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0xF_
];

#[rustfmt::skip]
const DISASSEMBLY: [&str; 256] = [
    "NOP",                 // 0x00
    "LD BC, d16",          // 0x01
    "LD (BC), A",          // 0x02
    "INC BC",              // 0x03
    "INC B",               // 0x04
    "DEC B",               // 0x05
    "LD B, d8",            // 0x06
    "RLCA",                // 0x07
    "LD (a16), SP",        // 0x08
    "ADD HL, BC",          // 0x09
    "LD A, (BC)",          // 0x0A
    "DEC BC",              // 0x0B
    "INC C",               // 0x0C
    "DEC C",               // 0x0D
    "LD C, d8",            // 0x0E
    "RRCA",                // 0x0F
    "STOP",                // 0x10
    "LD DE, d16",          // 0x11
    "LD (DE), A",          // 0x12
    "INC DE",              // 0x13
    "INC D",               // 0x14
    "DEC D",               // 0x15
    "LD D, d8",            // 0x16
    "RLA",                 // 0x17
    "JR r8",               // 0x18
    "ADD HL, DE",          // 0x19
    "LD A, (DE)",          // 0x1A
    "DEC DE",              // 0x1B
    "INC E",               // 0x1C
    "DEC E",               // 0x1D
    "LD E, d8",            // 0x1E
    "RRA",                 // 0x1F
    "JR NZ, r8",           // 0x20
    "LD HL, d16",          // 0x21
    "LDI (HL), A",         // 0x22
    "INC HL",              // 0x23
    "INC H",               // 0x24
    "DEC H",               // 0x25
    "LD H, d8",            // 0x26
    "DAA",                 // 0x27
    "JR Z, r8",            // 0x28
    "ADD HL, HL",          // 0x29
    "LDI A, (HL)",         // 0x2A
    "DEC HL",              // 0x2B
    "INC L",               // 0x2C
    "DEC L",               // 0x2D
    "LD L, d8",            // 0x2E
    "CPL",                 // 0x2F
    "JR NC, r8",           // 0x30
    "LD SP, d16",          // 0x31
    "LDD (HL), A",         // 0x32
    "INC SP",              // 0x33
    "INC (HL)",            // 0x34
    "DEC (HL)",            // 0x35
    "LD (HL), d8",         // 0x36
    "SCF",                 // 0x37
    "JR C, r8",            // 0x38
    "ADD HL, SP",          // 0x39
    "LDD A, (HL)",         // 0x3A
    "DEC SP",              // 0x3B
    "INC A",               // 0x3C
    "DEC A",               // 0x3D
    "LD A, d8",            // 0x3E
    "CCF",                 // 0x3F
    "LD B, B",             // 0x40
    "LD B, C",             // 0x41
    "LD B, D",             // 0x42
    "LD B, E",             // 0x43
    "LD B, H",             // 0x44
    "LD B, L",             // 0x45
    "LD B, (HL)",          // 0x46
    "LD B, A",             // 0x47
    "LD C, B",             // 0x48
    "LD C, C",             // 0x49
    "LD C, D",             // 0x4A
    "LD C, E",             // 0x4B
    "LD C, H",             // 0x4C
    "LD C, L",             // 0x4D
    "LD C, (HL)",          // 0x4E
    "LD C, A",             // 0x4F
    "LD D, B",             // 0x50
    "LD D, C",             // 0x51
    "LD D, D",             // 0x52
    "LD D, E",             // 0x53
    "LD D, H",             // 0x54
    "LD D, L",             // 0x55
    "LD D, (HL)",          // 0x56
    "LD D, A",             // 0x57
    "LD E, B",             // 0x58
    "LD E, C",             // 0x59
    "LD E, D",             // 0x5A
    "LD E, E",             // 0x5B
    "LD E, H",             // 0x5C
    "LD E, L",             // 0x5D
    "LD E, (HL)",          // 0x5E
    "LD E, A",             // 0x5F
    "LD H, B",             // 0x60
    "LD H, C",             // 0x61
    "LD H, D",             // 0x62
    "LD H, E",             // 0x63
    "LD H, H",             // 0x64
    "LD H, L",             // 0x65
    "LD H, (HL)",          // 0x66
    "LD H, A",             // 0x67
    "LD L, B",             // 0x68
    "LD L, C",             // 0x69
    "LD L, D",             // 0x6A
    "LD L, E",             // 0x6B
    "LD L, H",             // 0x6C
    "LD L, L",             // 0x6D
    "LD L, (HL)",          // 0x6E
    "LD L, A",             // 0x6F
    "LD (HL), B",          // 0x70
    "LD (HL), C",          // 0x71
    "LD (HL), D",          // 0x72
    "LD (HL), E",          // 0x73
    "LD (HL), H",          // 0x74
    "LD (HL), L",          // 0x75
    "HALT",                // 0x76
    "LD (HL), A",          // 0x77
    "LD A, B",             // 0x78
    "LD A, C",             // 0x79
    "LD A, D",             // 0x7A
    "LD A, E",             // 0x7B
    "LD A, H",             // 0x7C
    "LD A, L",             // 0x7D
    "LD A, (HL)",          // 0x7E
    "LD A, A",             // 0x7F
    "ADD A, B",            // 0x80
    "ADD A, C",            // 0x81
    "ADD A, D",            // 0x82
    "ADD A, E",            // 0x83
    "ADD A, H",            // 0x84
    "ADD A, L",            // 0x85
    "ADD A, (HL)",         // 0x86
    "ADD A, A",            // 0x87
    "ADC A, B",            // 0x88
    "ADC A, C",            // 0x89
    "ADC A, D",            // 0x8A
    "ADC A, E",            // 0x8B
    "ADC A, H",            // 0x8C
    "ADC A, L",            // 0x8D
    "ADC A, (HL)",         // 0x8E
    "ADC A, A",            // 0x8F
    "SUB B",               // 0x90
    "SUB C",               // 0x91
    "SUB D",               // 0x92
    "SUB E",               // 0x93
    "SUB H",               // 0x94
    "SUB L",               // 0x95
    "SUB (HL)",            // 0x96
    "SUB A",               // 0x97
    "SBC A, B",            // 0x98
    "SBC A, C",            // 0x99
    "SBC A, D",            // 0x9A
    "SBC A, E",            // 0x9B
    "SBC A, H",            // 0x9C
    "SBC A, L",            // 0x9D
    "SBC A, (HL)",         // 0x9E
    "SBC A, A",            // 0x9F
    "AND B",               // 0xA0
    "AND C",               // 0xA1
    "AND D",               // 0xA2
    "AND E",               // 0xA3
    "AND H",               // 0xA4
    "AND L",               // 0xA5
    "AND (HL)",            // 0xA6
    "AND A",               // 0xA7
    "XOR B",               // 0xA8
    "XOR C",               // 0xA9
    "XOR D",               // 0xAA
    "XOR E",               // 0xAB
    "XOR H",               // 0xAC
    "XOR L",               // 0xAD
    "XOR (HL)",            // 0xAE
    "XOR A",               // 0xAF
    "OR B",                // 0xB0
    "OR C",                // 0xB1
    "OR D",                // 0xB2
    "OR E",                // 0xB3
    "OR H",                // 0xB4
    "OR L",                // 0xB5
    "OR (HL)",             // 0xB6
    "OR A",                // 0xB7
    "CP B",                // 0xB8
    "CP C",                // 0xB9
    "CP D",                // 0xBA
    "CP E",                // 0xBB
    "CP H",                // 0xBC
    "CP L",                // 0xBD
    "CP (HL)",             // 0xBE
    "CP A",                // 0xBF
    "RET NZ",              // 0xC0
    "POP BC",              // 0xC1
    "JP NZ, a16",          // 0xC2
    "JP a16",              // 0xC3
    "CALL NZ, a16",        // 0xC4
    "PUSH BC",             // 0xC5
    "ADD A, d8",           // 0xC6
    "RST 0x00",            // 0xC7
    "RET Z",               // 0xC8
    "RET",                 // 0xC9
    "JP Z, a16",           // 0xCA
    "CB d8",               // 0xCB
    "CALL Z, a16",         // 0xCC
    "CALL a16",            // 0xCD
    "ADC A, d8",           // 0xCE
    "RST 0x08",            // 0xCF
    "RET NC",              // 0xD0
    "POP DE",              // 0xD1
    "JP NC, a16",          // 0xD2
    "UNKNOWN",             // 0xD3
    "CALL NC, a16",        // 0xD4
    "PUSH DE",             // 0xD5
    "SUB d8",              // 0xD6
    "RST 0x10",            // 0xD7
    "RET C",               // 0xD8
    "RETI",                // 0xD9
    "JP C, a16",           // 0xDA
    "UNKNOWN",             // 0xDB
    "CALL C, a16",         // 0xDC
    "UNKNOWN",             // 0xDD
    "SBC A, d8",           // 0xDE
    "RST 0x18",            // 0xDF
    "LDH (a8), A",         // 0xE0
    "POP HL",              // 0xE1
    "LD (C), A",           // 0xE2
    "UNKNOWN",             // 0xE3
    "UNKNOWN",             // 0xE4
    "PUSH HL",             // 0xE5
    "AND d8",              // 0xE6
    "RST 0x20",            // 0xE7
    "ADD SP, r8",          // 0xE8
    "JP (HL)",             // 0xE9
    "LD (a16), A",         // 0xEA
    "UNKNOWN",             // 0xEB
    "UNKNOWN",             // 0xEC
    "UNKNOWN",             // 0xED
    "XOR d8",              // 0xEE
    "RST 0x28",            // 0xEF
    "LDH A, (a8)",         // 0xF0
    "POP AF",              // 0xF1
    "LD A, (C)",           // 0xF2
    "DI",                  // 0xF3
    "UNKNOWN",             // 0xF4
    "PUSH AF",             // 0xF5
    "OR d8",               // 0xF6
    "RST 0x30",            // 0xF7
    "LD HL, SP+r8",        // 0xF8
    "LD SP, HL",           // 0xF9
    "LD A, (a16)",         // 0xFA
    "EI",                  // 0xFB
    "UNKNOWN",             // 0xFC
    "UNKNOWN",             // 0xFD
    "CP d8",               // 0xFE
    "RST 0x38",            // 0xFF
];
