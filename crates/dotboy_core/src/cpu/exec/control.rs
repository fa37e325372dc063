use crate::cpu::{Bus, Cpu};

/// Extra T-cycles of a taken JR cc / JP cc.
const JUMP_TAKEN_CYCLES: u32 = 4;
/// Extra T-cycles of a taken CALL cc / RET cc.
const CALL_TAKEN_CYCLES: u32 = 12;

impl Cpu {
    /// JR r8. The offset is relative to the address after the operand.
    pub(in crate::cpu) fn exec_jr(&mut self, _bus: &mut dyn Bus, _opcode: u8, offset: u8) {
        self.regs.pc = self.regs.pc.wrapping_add(offset as i8 as u16);
    }

    pub(in crate::cpu) fn exec_jr_cc(&mut self, bus: &mut dyn Bus, opcode: u8, offset: u8) {
        if self.condition(opcode) {
            self.exec_jr(bus, opcode, offset);
            self.add_ticks(JUMP_TAKEN_CYCLES);
        }
    }

    pub(in crate::cpu) fn exec_jp_a16(&mut self, _bus: &mut dyn Bus, _opcode: u8, addr: u16) {
        self.regs.pc = addr;
    }

    pub(in crate::cpu) fn exec_jp_cc(&mut self, _bus: &mut dyn Bus, opcode: u8, addr: u16) {
        if self.condition(opcode) {
            self.regs.pc = addr;
            self.add_ticks(JUMP_TAKEN_CYCLES);
        }
    }

    pub(in crate::cpu) fn exec_jp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) {
        self.regs.pc = self.regs.hl();
    }

    pub(in crate::cpu) fn exec_call_a16(&mut self, bus: &mut dyn Bus, _opcode: u8, addr: u16) {
        self.call(bus, addr);
    }

    pub(in crate::cpu) fn exec_call_cc(&mut self, bus: &mut dyn Bus, opcode: u8, addr: u16) {
        if self.condition(opcode) {
            self.call(bus, addr);
            self.add_ticks(CALL_TAKEN_CYCLES);
        }
    }

    pub(in crate::cpu) fn exec_ret(&mut self, bus: &mut dyn Bus, _opcode: u8) {
        self.ret(bus);
    }

    pub(in crate::cpu) fn exec_ret_cc(&mut self, bus: &mut dyn Bus, opcode: u8) {
        if self.condition(opcode) {
            self.ret(bus);
            self.add_ticks(CALL_TAKEN_CYCLES);
        }
    }

    /// RETI: return and re-enable the interrupt master flag.
    pub(in crate::cpu) fn exec_reti(&mut self, bus: &mut dyn Bus, _opcode: u8) {
        self.ret(bus);
        bus.interrupts().master = true;
    }

    /// RST n: call the fixed vector encoded in bits 3-5.
    pub(in crate::cpu) fn exec_rst(&mut self, bus: &mut dyn Bus, opcode: u8) {
        self.call(bus, (opcode & 0x38) as u16);
    }
}
