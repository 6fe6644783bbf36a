//! A cycle-counting emulation core for the MOS Technology 6502 microprocessor.
//!
//! http://www.6502.org/

pub mod arithmetic;
pub mod constants;
pub mod cpu;
pub mod emulator;
pub mod error;
pub mod memory;
pub mod opcodes;
pub mod opcodes_jump;
pub mod opcodes_logical;
pub mod opcodes_move;

pub use cpu::{Cpu, Registers, StatusFlag};
pub use emulator::Emulator;
pub use error::EmulatorError;
