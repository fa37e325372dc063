//! Primary opcode handlers, grouped by instruction family.
//!
//! Each handler is bound to one or more opcodes in `table.rs` and receives
//! the opcode so it can decode register and condition fields. Base cycle
//! costs come from `TICKS`; handlers only add the extra cycles of a taken
//! branch.

mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;
