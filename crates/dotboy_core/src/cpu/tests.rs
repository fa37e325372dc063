use super::table::cb_disassembly;
use super::*;
use crate::interrupts::{self, Interrupt, Interrupts};

/// Flat 64 KiB memory with an interrupt controller, no memory map.
struct TestBus {
    memory: Vec<u8>,
    irq: Interrupts,
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: vec![0; 0x10000],
            irq: Interrupts::default(),
        }
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    fn interrupts(&mut self) -> &mut Interrupts {
        &mut self.irq
    }
}

/// CPU in post-boot state with `program` placed at 0x0100.
fn setup(program: &[u8]) -> (Cpu, TestBus) {
    let cpu = Cpu::new();
    let mut bus = TestBus::default();
    bus.memory[0x0100..0x0100 + program.len()].copy_from_slice(program);
    (cpu, bus)
}

#[test]
fn boot_state_matches_dmg() {
    let cpu = Cpu::new();
    assert_eq!(cpu.regs.af(), 0x01B0);
    assert_eq!(cpu.regs.bc(), 0x0013);
    assert_eq!(cpu.regs.de(), 0x00D8);
    assert_eq!(cpu.regs.hl(), 0x014D);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert_eq!(cpu.ticks(), 0);
}

#[test]
fn register_pairs_share_storage_with_halves() {
    let mut regs = Registers::default();
    regs.set_bc(0x1234);
    assert_eq!((regs.b(), regs.c()), (0x12, 0x34));

    regs.set_l(0xCD);
    regs.set_h(0xAB);
    assert_eq!(regs.hl(), 0xABCD);

    // The low nibble of F does not exist in hardware.
    regs.set_af(0xFFFF);
    assert_eq!(regs.af(), 0xFFF0);
    regs.set_f(0x0F);
    assert_eq!(regs.f(), 0x00);
}

#[test]
fn ld_a_immediate() {
    let (mut cpu, mut bus) = setup(&[0x3E, 0x42]);
    let cycles = cpu.step(&mut bus);

    assert_eq!(cpu.regs.a(), 0x42);
    assert_eq!(cpu.regs.pc, 0x0102);
    assert_eq!(cycles, 8);
    assert_eq!(cpu.ticks(), 8);
}

#[test]
fn pc_advances_past_operands() {
    // Non-branching opcodes of every operand width.
    let cases: &[(&[u8], u16)] = &[
        (&[0x00], 1),             // NOP
        (&[0x06, 0x11], 2),       // LD B, d8
        (&[0x01, 0x34, 0x12], 3), // LD BC, d16
        (&[0xEA, 0x00, 0xC0], 3), // LD (a16), A
        (&[0xE0, 0x80], 2),       // LDH (a8), A
        (&[0x87], 1),             // ADD A, A
        (&[0xCB, 0x37], 2),       // SWAP A
    ];

    for (program, len) in cases {
        let (mut cpu, mut bus) = setup(program);
        let width = INSTRUCTIONS[program[0] as usize].width();
        assert_eq!(1 + width, *len, "width of 0x{:02X}", program[0]);

        cpu.step(&mut bus);
        assert_eq!(cpu.regs.pc, 0x0100 + len, "pc after 0x{:02X}", program[0]);
    }
}

#[test]
fn decoding_is_pure() {
    for opcode in 0..=255usize {
        let first = &INSTRUCTIONS[opcode];
        let again = &INSTRUCTIONS[opcode];
        assert_eq!(first.disassembly, again.disassembly);
        assert_eq!(first.width(), again.width());
    }
}

#[test]
fn xor_a_clears_everything_but_zero() {
    let (mut cpu, mut bus) = setup(&[0xAF]);
    cpu.step(&mut bus);

    assert_eq!(cpu.regs.a(), 0);
    assert_eq!(cpu.regs.flags(), Flags::ZERO);
}

#[test]
fn and_always_sets_half_carry() {
    let (mut cpu, mut bus) = setup(&[0xE6, 0x0F]);
    cpu.regs.set_a(0xF1);
    cpu.step(&mut bus);

    assert_eq!(cpu.regs.a(), 0x01);
    assert_eq!(cpu.regs.flags(), Flags::HALF_CARRY);
}

#[test]
fn or_clears_carry_negative_and_half_carry() {
    let (mut cpu, mut bus) = setup(&[0xB0]); // OR B
    cpu.regs.set_flags(Flags::all());
    cpu.regs.set_a(0x40);
    cpu.regs.set_b(0x02);
    cpu.step(&mut bus);

    assert_eq!(cpu.regs.a(), 0x42);
    assert_eq!(cpu.regs.flags(), Flags::empty());
}

#[test]
fn cp_with_larger_operand_sets_carry() {
    let (mut cpu, mut bus) = setup(&[0xFE, 0x20]);
    cpu.regs.set_a(0x10);
    cpu.step(&mut bus);

    assert_eq!(cpu.regs.a(), 0x10, "CP must not modify A");
    assert!(cpu.regs.is_set(Flags::CARRY));
    assert!(cpu.regs.is_set(Flags::NEGATIVE));
    assert!(!cpu.regs.is_set(Flags::ZERO));
    assert!(!cpu.regs.is_set(Flags::HALF_CARRY));
}

#[test]
fn cp_half_carry_compares_low_nibbles() {
    let (mut cpu, mut bus) = setup(&[0xFE, 0x0F]);
    cpu.regs.set_a(0x21);
    cpu.step(&mut bus);

    assert!(cpu.regs.is_set(Flags::HALF_CARRY));
    assert!(!cpu.regs.is_set(Flags::CARRY));
}

#[test]
fn add_and_sub_carries() {
    let (mut cpu, mut bus) = setup(&[0xC6, 0x01, 0xD6, 0x01]);
    cpu.regs.set_a(0xFF);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x00);
    assert_eq!(
        cpu.regs.flags(),
        Flags::ZERO | Flags::HALF_CARRY | Flags::CARRY
    );

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0xFF);
    assert_eq!(
        cpu.regs.flags(),
        Flags::NEGATIVE | Flags::HALF_CARRY | Flags::CARRY
    );
}

#[test]
fn adc_uses_carry_in() {
    let (mut cpu, mut bus) = setup(&[0xCE, 0x00]);
    cpu.regs.set_a(0x0F);
    cpu.regs.set_flags(Flags::CARRY);
    cpu.step(&mut bus);

    assert_eq!(cpu.regs.a(), 0x10);
    assert_eq!(cpu.regs.flags(), Flags::HALF_CARRY);
}

#[test]
fn inc_sets_half_carry_from_low_nibble_and_keeps_carry() {
    let (mut cpu, mut bus) = setup(&[0x04, 0x04]); // INC B twice
    cpu.regs.set_flags(Flags::CARRY);
    cpu.regs.set_b(0x0F);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.b(), 0x10);
    assert_eq!(cpu.regs.flags(), Flags::HALF_CARRY | Flags::CARRY);

    cpu.regs.set_b(0xFF);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.b(), 0x00);
    assert_eq!(
        cpu.regs.flags(),
        Flags::ZERO | Flags::HALF_CARRY | Flags::CARRY
    );
}

#[test]
fn dec_half_carry_tracks_nonzero_low_nibble() {
    let (mut cpu, mut bus) = setup(&[0x05, 0x05]); // DEC B twice
    cpu.regs.set_flags(Flags::empty());

    cpu.regs.set_b(0x10);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.b(), 0x0F);
    assert!(!cpu.regs.is_set(Flags::HALF_CARRY));
    assert!(cpu.regs.is_set(Flags::NEGATIVE));

    cpu.regs.set_b(0x01);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.b(), 0x00);
    assert!(cpu.regs.is_set(Flags::HALF_CARRY));
    assert!(cpu.regs.is_set(Flags::ZERO));
}

#[test]
fn inc_and_dec_through_hl() {
    let (mut cpu, mut bus) = setup(&[0x34, 0x35, 0x35]);
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0x41;

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(bus.memory[0xC000], 0x42);
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(bus.memory[0xC000], 0x40);
}

#[test]
fn sixteen_bit_inc_dec_leave_flags_alone() {
    let (mut cpu, mut bus) = setup(&[0x03, 0x1B, 0x33]);
    let flags = cpu.regs.flags();
    cpu.regs.set_bc(0xFFFF);
    cpu.regs.set_de(0x0000);

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    cpu.step(&mut bus);

    assert_eq!(cpu.regs.bc(), 0x0000);
    assert_eq!(cpu.regs.de(), 0xFFFF);
    assert_eq!(cpu.regs.sp, 0xFFFF);
    assert_eq!(cpu.regs.flags(), flags);
}

#[test]
fn add_hl_keeps_zero_flag() {
    let (mut cpu, mut bus) = setup(&[0x09]);
    cpu.regs.set_flags(Flags::ZERO | Flags::NEGATIVE);
    cpu.regs.set_hl(0x0FFF);
    cpu.regs.set_bc(0x0001);
    cpu.step(&mut bus);

    assert_eq!(cpu.regs.hl(), 0x1000);
    assert_eq!(cpu.regs.flags(), Flags::ZERO | Flags::HALF_CARRY);
}

#[test]
fn add_sp_signed_offset() {
    let (mut cpu, mut bus) = setup(&[0xE8, 0xFF, 0xF8, 0x02]);
    cpu.regs.sp = 0xD000;

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.sp, 0xCFFF);
    assert_eq!(cpu.regs.flags(), Flags::empty());

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.hl(), 0xD001);
    assert_eq!(cpu.regs.sp, 0xCFFF);
    assert_eq!(cpu.regs.flags(), Flags::HALF_CARRY | Flags::CARRY);
}

#[test]
fn ld_r_r_and_hl_indirect() {
    // LD B, A ; LD (HL), B ; LD C, (HL)
    let (mut cpu, mut bus) = setup(&[0x47, 0x70, 0x4E]);
    cpu.regs.set_a(0x5A);
    cpu.regs.set_hl(0xC123);

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(bus.memory[0xC123], 0x5A);
    assert_eq!(cpu.regs.c(), 0x5A);
}

#[test]
fn ldi_and_ldd_step_hl() {
    // LDI (HL), A ; LDD A, (HL)
    let (mut cpu, mut bus) = setup(&[0x22, 0x3A]);
    cpu.regs.set_a(0x99);
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC001] = 0x11;

    cpu.step(&mut bus);
    assert_eq!(bus.memory[0xC000], 0x99);
    assert_eq!(cpu.regs.hl(), 0xC001);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x11);
    assert_eq!(cpu.regs.hl(), 0xC000);
}

#[test]
fn ldh_uses_high_page() {
    // LDH (0x80), A ; LD C, 0x81 ; LD A, (C)
    let (mut cpu, mut bus) = setup(&[0xE0, 0x80, 0x0E, 0x81, 0xF2]);
    cpu.regs.set_a(0x77);
    bus.memory[0xFF81] = 0x33;

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(bus.memory[0xFF80], 0x77);
    cpu.step(&mut bus);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.a(), 0x33);
}

#[test]
fn ld_a16_sp_stores_little_endian() {
    let (mut cpu, mut bus) = setup(&[0x08, 0x00, 0xC0]);
    cpu.regs.sp = 0xBEEF;

    assert_eq!(cpu.step(&mut bus), 20);
    assert_eq!(bus.memory[0xC000], 0xEF);
    assert_eq!(bus.memory[0xC001], 0xBE);
}

#[test]
fn push_pop_round_trip() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();
    let sp = cpu.regs.sp;

    cpu.push_u16(&mut bus, 0xBEEF);
    assert_eq!(cpu.regs.sp, sp - 2);
    assert_eq!(bus.memory[(sp - 2) as usize], 0xEF);
    assert_eq!(bus.memory[(sp - 1) as usize], 0xBE);

    assert_eq!(cpu.pop_u16(&mut bus), 0xBEEF);
    assert_eq!(cpu.regs.sp, sp);
}

#[test]
fn pop_af_masks_low_flag_bits() {
    // PUSH BC ; POP AF
    let (mut cpu, mut bus) = setup(&[0xC5, 0xF1]);
    cpu.regs.set_bc(0x12FF);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.af(), 0x12F0);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn jr_cc_charges_extra_cycles_when_taken() {
    // JR NZ, +5 with Z set falls through.
    let (mut cpu, mut bus) = setup(&[0x20, 0x05]);
    cpu.regs.set_flags(Flags::ZERO);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x0102);

    let (mut cpu, mut bus) = setup(&[0x20, 0x05]);
    cpu.regs.set_flags(Flags::empty());
    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0107);
}

#[test]
fn jr_backwards() {
    let (mut cpu, mut bus) = setup(&[0x18, 0xFE]);
    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0100);
}

#[test]
fn jp_cc_and_jp_hl() {
    let (mut cpu, mut bus) = setup(&[0xDA, 0x00, 0x02]); // JP C, 0x0200
    cpu.regs.set_flags(Flags::CARRY);
    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0200);

    let (mut cpu, mut bus) = setup(&[0xE9]);
    cpu.regs.set_hl(0x4000);
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x4000);
}

#[test]
fn call_and_ret() {
    let (mut cpu, mut bus) = setup(&[0xCD, 0x00, 0x02]);
    bus.memory[0x0200] = 0xC9; // RET

    assert_eq!(cpu.step(&mut bus), 24);
    assert_eq!(cpu.regs.pc, 0x0200);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.read16(0xFFFC), 0x0103);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn call_cc_and_ret_cc_cycles() {
    // CALL NZ, 0x0200 ; the callee is RET Z.
    let (mut cpu, mut bus) = setup(&[0xC4, 0x00, 0x02]);
    bus.memory[0x0200] = 0xC8;

    cpu.regs.set_flags(Flags::ZERO);
    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0103);

    cpu.regs.pc = 0x0100;
    cpu.regs.set_flags(Flags::empty());
    assert_eq!(cpu.step(&mut bus), 24);
    assert_eq!(cpu.regs.pc, 0x0200);

    // RET Z not taken, then taken.
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x0201);
    cpu.regs.pc = 0x0200;
    cpu.regs.set_flags(Flags::ZERO);
    assert_eq!(cpu.step(&mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0103);
}

#[test]
fn rst_pushes_return_address() {
    let (mut cpu, mut bus) = setup(&[0xEF]); // RST 0x28
    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(bus.read16(cpu.regs.sp), 0x0101);
}

#[test]
fn reti_sets_master() {
    let (mut cpu, mut bus) = setup(&[0xD9]);
    bus.irq.master = false;
    cpu.push_u16(&mut bus, 0x1234);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x1234);
    assert!(bus.irq.master);
}

#[test]
fn di_and_ei_switch_master_immediately() {
    let (mut cpu, mut bus) = setup(&[0xF3, 0xFB]);
    cpu.step(&mut bus);
    assert!(!bus.irq.master);
    cpu.step(&mut bus);
    assert!(bus.irq.master);
}

#[test]
fn rotate_a_clears_zero() {
    let (mut cpu, mut bus) = setup(&[0x07, 0x17]); // RLCA ; RLA
    cpu.regs.set_a(0x80);
    cpu.regs.set_flags(Flags::ZERO);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x01);
    assert_eq!(cpu.regs.flags(), Flags::CARRY);

    cpu.regs.set_a(0x00);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x01, "RLA shifts the carry into bit 0");
    assert_eq!(cpu.regs.flags(), Flags::empty());
}

#[test]
fn daa_after_bcd_add() {
    // LD A, 0x09 ; ADD A, 0x01 ; DAA
    let (mut cpu, mut bus) = setup(&[0x3E, 0x09, 0xC6, 0x01, 0x27]);
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x0A);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x10);
    assert!(!cpu.regs.is_set(Flags::CARRY));
}

#[test]
fn cpl_scf_ccf() {
    let (mut cpu, mut bus) = setup(&[0x2F, 0x37, 0x3F]);
    cpu.regs.set_a(0x0F);
    cpu.regs.set_flags(Flags::empty());

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0xF0);
    assert_eq!(cpu.regs.flags(), Flags::NEGATIVE | Flags::HALF_CARRY);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.flags(), Flags::CARRY);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.flags(), Flags::empty());
}

#[test]
fn cb_swap_and_shifts() {
    // SWAP A ; SRL B ; SRA C ; RL D
    let (mut cpu, mut bus) = setup(&[0xCB, 0x37, 0xCB, 0x38, 0xCB, 0x29, 0xCB, 0x12]);
    cpu.regs.set_a(0xF0);
    cpu.regs.set_b(0x01);
    cpu.regs.set_c(0x81);
    cpu.regs.set_d(0x80);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.a(), 0x0F);
    assert_eq!(cpu.regs.flags(), Flags::empty());

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.b(), 0x00);
    assert_eq!(cpu.regs.flags(), Flags::ZERO | Flags::CARRY);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.c(), 0xC0);
    assert_eq!(cpu.regs.flags(), Flags::CARRY);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.d(), 0x01, "carry rotates into bit 0");
    assert_eq!(cpu.regs.flags(), Flags::CARRY);
}

#[test]
fn cb_bit_res_set_cycles() {
    // BIT 7, H ; BIT 0, (HL) ; SET 0, (HL) ; RES 0, (HL)
    let (mut cpu, mut bus) = setup(&[0xCB, 0x7C, 0xCB, 0x46, 0xCB, 0xC6, 0xCB, 0x86]);
    cpu.regs.set_hl(0xC000);
    cpu.regs.set_flags(Flags::CARRY);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(
        cpu.regs.flags(),
        Flags::HALF_CARRY | Flags::CARRY,
        "bit 7 of 0xC0 is set"
    );

    assert_eq!(cpu.step(&mut bus), 12);
    assert!(cpu.regs.is_set(Flags::ZERO));

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(bus.memory[0xC000], 0x01);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(bus.memory[0xC000], 0x00);
}

#[test]
fn illegal_opcode_traps_and_locks() {
    let (mut cpu, mut bus) = setup(&[0x00, 0xD3, 0x00]);
    cpu.step(&mut bus);

    let ticks = cpu.ticks();
    assert_eq!(cpu.step(&mut bus), 0);
    assert_eq!(cpu.regs.pc, 0x0101, "pc rewinds to the illegal opcode");
    assert_eq!(cpu.ticks(), ticks);

    let trap = cpu.trap().copied().expect("trap recorded");
    assert_eq!(trap.opcode, 0xD3);
    assert_eq!(trap.address, 0x0101);
    assert!(trap.to_string().contains("0xD3"));

    // Locked: further steps do nothing.
    assert_eq!(cpu.step(&mut bus), 0);
    assert_eq!(cpu.regs.pc, 0x0101);

    cpu.reset();
    assert!(cpu.trap().is_none());
}

#[test]
fn every_hole_traps() {
    for opcode in [0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD] {
        let (mut cpu, mut bus) = setup(&[opcode]);
        assert_eq!(cpu.step(&mut bus), 0);
        assert_eq!(cpu.trap().map(|t| t.opcode), Some(opcode));
        assert_eq!(INSTRUCTIONS[opcode as usize].disassembly, "UNKNOWN");
    }
}

#[test]
fn halt_idles_until_woken() {
    let (mut cpu, mut bus) = setup(&[0x76, 0x00]);
    assert_eq!(cpu.step(&mut bus), 4);
    assert!(cpu.is_halted());
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0101);

    // An enabled, pending source wakes the CPU even with master clear.
    bus.irq.master = false;
    bus.irq.enable = Interrupt::TIMER;
    bus.irq.request(Interrupt::TIMER);
    assert_eq!(interrupts::step(&mut cpu, &mut bus), 0);
    assert!(!cpu.is_halted());
    assert_eq!(bus.irq.pending, Interrupt::TIMER);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0102);
}

#[test]
fn stop_consumes_padding_and_waits() {
    let (mut cpu, mut bus) = setup(&[0x10, 0x00, 0x00]);
    assert_eq!(cpu.step(&mut bus), 4);
    assert!(cpu.is_stopped());
    assert_eq!(cpu.regs.pc, 0x0102);

    assert_eq!(cpu.step(&mut bus), 0);
    assert_eq!(cpu.regs.pc, 0x0102);

    cpu.resume();
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0103);
}

#[test]
fn interrupt_dispatch_prefers_lowest_bit() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();
    cpu.regs.pc = 0x1234;
    bus.irq.enable = Interrupt::all();
    bus.irq.pending = Interrupt::VBLANK | Interrupt::TIMER;

    assert_eq!(interrupts::step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(bus.read16(cpu.regs.sp), 0x1234);
    assert_eq!(bus.irq.pending, Interrupt::TIMER);
    assert!(!bus.irq.master);
    assert_eq!(cpu.ticks(), 12);

    // Master is now clear, so TIMER waits.
    assert_eq!(interrupts::step(&mut cpu, &mut bus), 0);
    assert_eq!(cpu.regs.pc, 0x0040);
}

#[test]
fn interrupt_ignores_disabled_sources() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();
    bus.irq.enable = Interrupt::JOYPAD;
    bus.irq.pending = Interrupt::VBLANK | Interrupt::JOYPAD;

    interrupts::step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.pc, 0x0060);
    assert_eq!(bus.irq.pending, Interrupt::VBLANK);
}

#[test]
fn interrupt_vectors() {
    assert_eq!(Interrupt::VBLANK.vector(), 0x40);
    assert_eq!(Interrupt::LCD_STAT.vector(), 0x48);
    assert_eq!(Interrupt::TIMER.vector(), 0x50);
    assert_eq!(Interrupt::SERIAL.vector(), 0x58);
    assert_eq!(Interrupt::JOYPAD.vector(), 0x60);
}

#[test]
fn disassembly_renders_operands() {
    assert_eq!(
        INSTRUCTIONS[0x3E].disassemble(Operand::Byte(0x42)),
        "LD A, $42"
    );
    assert_eq!(
        INSTRUCTIONS[0xC3].disassemble(Operand::Word(0x0150)),
        "JP $0150"
    );
    assert_eq!(INSTRUCTIONS[0x18].disassemble(Operand::Byte(0xFE)), "JR -2");
    assert_eq!(
        INSTRUCTIONS[0xF8].disassemble(Operand::Byte(0x05)),
        "LD HL, SP+5"
    );
    assert_eq!(
        INSTRUCTIONS[0xE0].disassemble(Operand::Byte(0x40)),
        "LDH ($FF00+$40), A"
    );
    assert_eq!(INSTRUCTIONS[0xCB].disassemble(Operand::Byte(0x7C)), "BIT 7, H");
    assert_eq!(INSTRUCTIONS[0x00].disassemble(Operand::None), "NOP");
    assert_eq!(cb_disassembly(0x37), "SWAP A");
    assert_eq!(cb_disassembly(0x86), "RES 0, (HL)");
}
