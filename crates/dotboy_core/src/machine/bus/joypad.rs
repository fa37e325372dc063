use bitflags::bitflags;

bitflags! {
    /// Held-button snapshot.
    ///
    /// The low nibble is the d-pad and the high nibble the action buttons,
    /// each in P1 (`0xFF00`) bit order.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        const RIGHT = 1 << 0;
        const LEFT = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
        const A = 1 << 4;
        const B = 1 << 5;
        const SELECT = 1 << 6;
        const START = 1 << 7;
    }
}

impl Buttons {
    #[inline]
    fn dpad(self) -> u8 {
        self.bits() & 0x0F
    }

    #[inline]
    fn action(self) -> u8 {
        self.bits() >> 4
    }
}

/// P1 selector latch and the buttons currently held.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct Joypad {
    /// Bits 5 (action) and 4 (d-pad); 0 selects the group.
    select: u8,
    held: Buttons,
}

impl Joypad {
    pub(super) fn read(&self) -> u8 {
        let mut low = 0x0F;
        if self.select & 0x10 == 0 {
            low &= !self.held.dpad();
        }
        if self.select & 0x20 == 0 {
            low &= !self.held.action();
        }
        0xC0 | self.select | (low & 0x0F)
    }

    /// Only the selector bits are writable.
    pub(super) fn write(&mut self, value: u8) {
        self.select = value & 0x30;
    }

    #[inline]
    pub(super) fn held(&self) -> Buttons {
        self.held
    }

    /// Replace the snapshot and return the buttons that went down.
    pub(super) fn set_held(&mut self, held: Buttons) -> Buttons {
        let pressed = held & !self.held;
        self.held = held;
        pressed
    }
}
