mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod regs;
mod table;
mod trap;

#[cfg(test)]
mod tests;

pub use bus::Bus;
pub use regs::{Flags, Registers};
pub use table::{Execute, Instruction, Operand, INSTRUCTIONS, TICKS};
pub use trap::Trap;

/// T-cycles charged for every step spent in HALT.
const HALT_CYCLES: u32 = 4;

/// Game Boy CPU core.
///
/// Holds the register file, the running T-cycle counter and the STOP/HALT
/// latches. Every instruction is decoded through the static
/// [`INSTRUCTIONS`] table; nothing else about an instruction is stored
/// between steps.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Total T-cycles consumed since reset, including interrupt dispatch.
    ticks: u64,
    /// STOP latch. While set, `step` is a no-op costing zero cycles.
    stopped: bool,
    /// HALT latch, cleared by the interrupt controller.
    halted: bool,
    /// Address of the opcode currently executing.
    opcode_pc: u16,
    /// Set once an illegal opcode has been fetched; the CPU stays locked.
    trap: Option<Trap>,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ticks: 0,
            stopped: false,
            halted: false,
            opcode_pc: 0,
            trap: None,
        };
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// Reset the CPU to the state the boot ROM hands over at 0x0100.
    pub fn reset(&mut self) {
        self.ticks = 0;
        self.stopped = false;
        self.halted = false;
        self.opcode_pc = 0;
        self.trap = None;
        self.apply_dmg_boot_state();
    }

    /// Post-boot register values for the DMG.
    fn apply_dmg_boot_state(&mut self) {
        self.regs.set_af(0x01B0);
        self.regs.set_bc(0x0013);
        self.regs.set_de(0x00D8);
        self.regs.set_hl(0x014D);
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// The illegal-opcode report, once the CPU has locked.
    #[inline]
    pub fn trap(&self) -> Option<&Trap> {
        self.trap.as_ref()
    }

    /// Release the STOP latch (joypad wake-up).
    pub fn resume(&mut self) {
        if self.stopped {
            log::debug!("GB CPU: leaving STOP at pc=0x{:04X}", self.regs.pc);
        }
        self.stopped = false;
    }

    #[inline]
    pub(crate) fn wake_from_halt(&mut self) {
        self.halted = false;
    }

    #[inline]
    pub(crate) fn add_ticks(&mut self, cycles: u32) {
        self.ticks += cycles as u64;
    }

    /// Execute a single instruction and return the number of T-cycles taken.
    ///
    /// Returns 0 while stopped or after an illegal opcode has locked the CPU.
    /// Conditional instructions charge their extra cycles from inside the
    /// handler, so the returned value is the full cost of this step.
    pub fn step(&mut self, bus: &mut dyn Bus) -> u32 {
        if self.trap.is_some() || self.stopped {
            return 0;
        }
        if self.halted {
            self.add_ticks(HALT_CYCLES);
            return HALT_CYCLES;
        }

        let start = self.ticks;

        self.opcode_pc = self.regs.pc;
        let opcode = bus.read8(self.opcode_pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);

        let instruction = &INSTRUCTIONS[opcode as usize];
        let operand = match instruction.execute {
            Execute::Implied(_) => Operand::None,
            Execute::Byte(_) => Operand::Byte(bus.read8(self.regs.pc)),
            Execute::Word(_) => Operand::Word(bus.read16(self.regs.pc)),
        };
        self.regs.pc = self.regs.pc.wrapping_add(instruction.width());

        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "GB CPU: {:04X}: {:02X} {:<16} AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X}",
                self.opcode_pc,
                opcode,
                instruction.disassemble(operand),
                self.regs.af(),
                self.regs.bc(),
                self.regs.de(),
                self.regs.hl(),
                self.regs.sp,
            );
        }

        match (instruction.execute, operand) {
            (Execute::Implied(handler), _) => handler(self, bus, opcode),
            (Execute::Byte(handler), Operand::Byte(value)) => handler(self, bus, opcode, value),
            (Execute::Word(handler), Operand::Word(value)) => handler(self, bus, opcode, value),
            _ => unreachable!("operand kind always follows the handler kind"),
        }

        self.add_ticks(TICKS[opcode as usize] as u32);
        (self.ticks - start) as u32
    }

    /// Trap handler shared by every opcode hole.
    ///
    /// Rewinds `pc` to the opcode byte, dumps the register file and locks the
    /// CPU. Costs zero cycles.
    pub(in crate::cpu) fn exec_undefined(&mut self, _bus: &mut dyn Bus, opcode: u8) {
        self.regs.pc = self.opcode_pc;
        let trap = Trap {
            opcode,
            address: self.opcode_pc,
            regs: self.regs,
        };
        log::error!("GB CPU locked: {trap}");
        self.trap = Some(trap);
    }
}
