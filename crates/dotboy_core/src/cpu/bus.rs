use crate::interrupts::Interrupts;

/// Abstraction over the Game Boy bus (memory and IO) as seen by the CPU.
///
/// The trait is object safe: instruction handlers live in a static table and
/// receive the bus as `&mut dyn Bus`, so one table serves the machine bus and
/// the flat test bus alike.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Interrupt controller state (IME, IE and IF).
    ///
    /// Lives behind the bus because `0xFF0F` and `0xFFFF` alias the pending
    /// and enable masks.
    fn interrupts(&mut self) -> &mut Interrupts;

    /// Little-endian 16-bit read composed of two byte reads.
    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Little-endian 16-bit write composed of two byte writes.
    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }
}
