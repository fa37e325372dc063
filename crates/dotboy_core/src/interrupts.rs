use bitflags::bitflags;

use crate::cpu::{Bus, Cpu};

/// Extra T-cycles charged to the cycle counter for one interrupt dispatch.
pub const DISPATCH_CYCLES: u32 = 12;

bitflags! {
    /// Interrupt sources as laid out in IE (`0xFFFF`) and IF (`0xFF0F`).
    ///
    /// The lowest bit has the highest priority.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Interrupt: u8 {
        const VBLANK = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

impl Interrupt {
    /// Handler address for a single source: 0x40, 0x48, 0x50, 0x58, 0x60.
    pub fn vector(self) -> u16 {
        debug_assert_eq!(self.bits().count_ones(), 1, "vector of {self:?}");
        0x0040 + (self.bits().trailing_zeros() as u16) * 8
    }
}

/// Interrupt controller state.
///
/// `master` is the CPU's IME flip-flop, `enable` mirrors IE and `pending`
/// mirrors IF. Both masks keep every bit written through the bus so reads
/// return what software stored; only the low five bits take part in dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interrupts {
    pub master: bool,
    pub enable: Interrupt,
    pub pending: Interrupt,
}

impl Default for Interrupts {
    fn default() -> Self {
        Self {
            master: true,
            enable: Interrupt::empty(),
            pending: Interrupt::empty(),
        }
    }
}

impl Interrupts {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Mark `source` as pending.
    #[inline]
    pub fn request(&mut self, source: Interrupt) {
        self.pending |= source;
    }

    /// Sources that are both enabled and pending, ignoring `master`.
    #[inline]
    pub fn active(&self) -> Interrupt {
        self.enable & self.pending & Interrupt::all()
    }

    /// Highest-priority source that would be serviced next, if any.
    pub fn highest_priority(&self) -> Option<Interrupt> {
        let active = self.active();
        if active.is_empty() {
            return None;
        }
        let lowest_bit = 1u8 << active.bits().trailing_zeros();
        Some(Interrupt::from_bits_truncate(lowest_bit))
    }
}

/// Run the interrupt controller once.
///
/// Services at most one source per call. Any enabled and pending source
/// wakes a halted CPU even while `master` is clear; dispatch itself requires
/// `master`. Returns the cycles charged (0 or [`DISPATCH_CYCLES`]).
pub fn step(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    if cpu.trap().is_some() || cpu.is_stopped() {
        return 0;
    }

    let state = *bus.interrupts();
    let Some(source) = state.highest_priority() else {
        return 0;
    };

    if cpu.is_halted() {
        log::debug!("GB IRQ: {source:?} wakes CPU from HALT");
        cpu.wake_from_halt();
    }

    if !state.master {
        return 0;
    }

    {
        let irq = bus.interrupts();
        irq.pending.remove(source);
        irq.master = false;
    }

    let return_pc = cpu.regs.pc;
    cpu.call(bus, source.vector());
    cpu.add_ticks(DISPATCH_CYCLES);

    log::debug!(
        "GB IRQ: dispatch {:?} pc=0x{:04X} -> 0x{:04X} sp=0x{:04X} IE=0x{:02X} IF=0x{:02X}",
        source,
        return_pc,
        source.vector(),
        cpu.regs.sp,
        state.enable.bits(),
        state.pending.bits(),
    );

    DISPATCH_CYCLES
}
