use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_nop(&mut self, _bus: &mut dyn Bus, _opcode: u8) {}

    /// STOP. The padding byte has already been consumed as the operand.
    ///
    /// The CPU stays idle until a joypad press calls [`Cpu::resume`].
    pub(in crate::cpu) fn exec_stop(&mut self, _bus: &mut dyn Bus, _opcode: u8, _padding: u8) {
        log::debug!("GB CPU: STOP at pc=0x{:04X}", self.opcode_pc);
        self.stopped = true;
        self.halted = false;
    }

    /// HALT. Left by the interrupt controller once any enabled source is
    /// pending, whether or not the master flag is set.
    pub(in crate::cpu) fn exec_halt(&mut self, _bus: &mut dyn Bus, _opcode: u8) {
        self.halted = true;
    }

    pub(in crate::cpu) fn exec_di(&mut self, bus: &mut dyn Bus, _opcode: u8) {
        bus.interrupts().master = false;
    }

    /// EI takes effect immediately.
    pub(in crate::cpu) fn exec_ei(&mut self, bus: &mut dyn Bus, _opcode: u8) {
        bus.interrupts().master = true;
    }
}
