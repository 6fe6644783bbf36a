use std::fmt;

use crate::constants::{InterruptVectors, STACK_PAGE};
use crate::error::EmulatorError;
use crate::memory::Memory;
use crate::opcodes::{self, Mode};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFlag {
    Carry            = 0b0000_0001,
    Zero             = 0b0000_0010,
    InterruptDisable = 0b0000_0100,
    Decimal          = 0b0000_1000,
    Break            = 0b0001_0000,
    Overflow         = 0b0100_0000,
    Negative         = 0b1000_0000,
}

/// Bit 5 of the status byte has no architectural meaning. Software-pushed
/// copies (PHP, BRK) conventionally set it; it is ignored on pull.
const UNUSED_BIT: u8 = 0b0010_0000;

/// This struct implements the MOS Technology 6502 central processing unit.
///
/// http://www.6502.org/
/// https://en.wikipedia.org/wiki/MOS_Technology_6502
pub struct Cpu {
    pub memory: Memory,

    /// "A" register, the accumulator.
    pub a: u8,
    /// "X" register.
    pub x: u8,
    /// "Y" register.
    pub y: u8,

    /// "PC" - Program counter.
    pub pc: u16,

    /// "SP" - Stack pointer. The stack lives at page 1 (`0x0100-0x01FF`);
    /// `sp` supplies the low byte. The stack grows downward.
    pub sp: u8,

    /// "SR" - Status register, bit-packed `N V _ B D I Z C`.
    pub sr: u8,

    /// Total cycles consumed since construction.
    pub cycles: u64,

    /// Cleared when the dispatcher lands on an undocumented opcode, or by
    /// `BRK`. Set back to true by `RTI`.
    pub running: bool,

    pub last_error: Option<EmulatorError>,
}

impl Cpu {
    pub fn new() -> Cpu {
        let mut cpu = Cpu {
            memory: Memory::new(),
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0xFF,
            sr: 0,
            cycles: 0,
            running: true,
            last_error: None,
        };
        cpu.reset();
        cpu
    }

    pub fn with_memory(memory: Memory) -> Cpu {
        let mut cpu = Cpu {
            memory,
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0xFF,
            sr: 0,
            cycles: 0,
            running: true,
            last_error: None,
        };
        cpu.reset();
        cpu
    }

    /// Restore the architectural reset state. Memory is left untouched; the
    /// program counter is set literally to the reset vector address rather
    /// than dereferencing it, matching the contract the harness relies on
    /// to place a bootstrap `JMP` directly at `0xFFFC`.
    pub fn reset(&mut self) {
        self.pc = InterruptVectors::ResetVector as u16;
        self.sp = 0xFF;
        self.sr = 0;
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.cycles = 0;
        self.running = true;
        self.last_error = None;
    }

    /// Read the byte at `pc` and advance `pc` by one.
    pub(crate) fn next_u8(&mut self) -> u8 {
        let value = self.memory.read_u8(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Read the word at `pc` and advance `pc` by two.
    fn next_u16(&mut self) -> u16 {
        let value = self.memory.read_u16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    /// Advance the emulator by exactly one instruction.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        let opcode = self.next_u8();
        let opcode_index = opcode as usize;

        match opcodes::OPERATION_FN_TABLE[opcode_index] {
            Some(operation) => {
                self.cycles += opcodes::CYCLES_TABLE[opcode_index] as u64;
                let mode = opcodes::ADDRESSING_MODE_TABLE[opcode_index];
                let page_cross_bonus = opcodes::PAGE_CROSS_TABLE[opcode_index];
                operation(self, mode, page_cross_bonus);
            }
            None => {
                self.running = false;
                self.last_error = Some(EmulatorError::IllegalOpcode(opcode));
            }
        }
    }

    /// Resolve the effective address for every mode except `Accumulator`,
    /// `Implied`, and `Relative`, which are handled by their own callers.
    /// Returns `(address, page_crossed)`.
    ///
    /// The source for the comments on the modes is
    /// http://www.emulator101.com/6502-addressing-modes.html
    fn get_operand_address(&mut self, mode: Mode) -> (u16, bool) {
        match mode {
            Mode::Immediate => {
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                (address, false)
            }
            Mode::ZeroPage => (self.next_u8() as u16, false),
            // 6502 bug preserved intentionally: zero-page indexed addresses
            // wrap within the zero page rather than carrying into page one.
            Mode::ZeroPageX => (self.next_u8().wrapping_add(self.x) as u16, false),
            Mode::ZeroPageY => (self.next_u8().wrapping_add(self.y) as u16, false),
            Mode::Absolute => (self.next_u16(), false),
            Mode::AbsoluteX => {
                let base = self.next_u16();
                let address = base.wrapping_add(self.x as u16);
                (address, page_crossed(base, address))
            }
            Mode::AbsoluteY => {
                let base = self.next_u16();
                let address = base.wrapping_add(self.y as u16);
                (address, page_crossed(base, address))
            }
            // The indirect JMP hardware bug: if the pointer's low byte sits
            // at the end of a page, the high byte is fetched from the start
            // of the *same* page rather than the next one.
            Mode::Indirect => {
                let pointer = self.next_u16();
                (self.read_u16_page_wrap_bugged(pointer), false)
            }
            Mode::IndirectX => {
                let zero_page = self.next_u8().wrapping_add(self.x);
                let address = self.read_u16_zero_page(zero_page);
                (address, false)
            }
            Mode::IndirectY => {
                let zero_page = self.next_u8();
                let base = self.read_u16_zero_page(zero_page);
                let address = base.wrapping_add(self.y as u16);
                (address, page_crossed(base, address))
            }
            Mode::Accumulator | Mode::Implied | Mode::Relative => {
                unreachable!("{:?} has no memory operand address", mode)
            }
        }
    }

    /// Read a little-endian word whose two bytes both live in zero page,
    /// wrapping the high-byte fetch back to `0x00` rather than leaving the
    /// page - this is what `(Indirect,X)`/`(Indirect),Y` depend on.
    fn read_u16_zero_page(&self, zero_page_address: u8) -> u16 {
        let lo = self.memory.read_u8(zero_page_address as u16);
        let hi = self.memory.read_u8(zero_page_address.wrapping_add(1) as u16);
        u16::from_le_bytes([lo, hi])
    }

    fn read_u16_page_wrap_bugged(&self, pointer: u16) -> u16 {
        let lo = self.memory.read_u8(pointer);
        let hi_address = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
        let hi = self.memory.read_u8(hi_address);
        u16::from_le_bytes([lo, hi])
    }

    /// Fetch the effective address and the byte it contains, charging the
    /// page-cross bonus when the decoder reports one.
    pub(crate) fn get_address_and_operand(&mut self, mode: Mode, page_cross_bonus: u8) -> (u16, u8) {
        let (address, crossed) = self.get_operand_address(mode);
        if crossed {
            self.cycles += page_cross_bonus as u64;
        }
        let value = self.memory.read_u8(address);
        (address, value)
    }

    /// Like `get_address_and_operand`, but used by opcodes that target
    /// either a memory location or, in `Accumulator` mode, the register
    /// itself: returns `None` for the address in the latter case.
    pub(crate) fn get_optional_address_and_operand(
        &mut self,
        mode: Mode,
        page_cross_bonus: u8,
    ) -> (Option<u16>, u8) {
        if mode == Mode::Accumulator {
            return (None, self.a);
        }
        let (address, operand) = self.get_address_and_operand(mode, page_cross_bonus);
        (Some(address), operand)
    }

    /// Resolve the jump/call target for `JMP`/`JSR`: the address itself,
    /// never the byte stored there.
    pub(crate) fn get_jump_target(&mut self, mode: Mode) -> u16 {
        self.get_operand_address(mode).0
    }

    pub(crate) fn is_flag_set(&self, flag: StatusFlag) -> bool {
        let mask = flag as u8;
        self.sr & mask == mask
    }

    pub(crate) fn set_flag(&mut self, flag: StatusFlag, value: bool) {
        let mask = flag as u8;
        if value {
            self.sr |= mask;
        } else {
            self.sr &= !mask;
        }
    }

    pub(crate) fn get_carry(&self) -> bool {
        self.is_flag_set(StatusFlag::Carry)
    }

    pub(crate) fn update_zero_and_negative(&mut self, value: u8) {
        self.set_flag(StatusFlag::Zero, value == 0);
        self.set_flag(StatusFlag::Negative, value & 0x80 == 0x80);
    }

    pub(crate) fn push_u8(&mut self, value: u8) {
        let address = STACK_PAGE | self.sp as u16;
        self.memory.write_u8(address, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull_u8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        let address = STACK_PAGE | self.sp as u16;
        self.memory.read_u8(address)
    }

    /// Pushes high byte first, then low byte, so the wire-level stack frame
    /// this produces matches what `pull_u16` below expects to find.
    pub(crate) fn push_u16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push_u8(hi);
        self.push_u8(lo);
    }

    pub(crate) fn pull_u16(&mut self) -> u16 {
        let lo = self.pull_u8();
        let hi = self.pull_u8();
        u16::from_le_bytes([lo, hi])
    }

    pub(crate) fn push_status_with_break_set(&mut self) {
        self.push_u8(self.sr | StatusFlag::Break as u8 | UNUSED_BIT);
    }

    pub(crate) fn pull_status(&mut self) {
        let pulled = self.pull_u8();
        self.sr = pulled & !(StatusFlag::Break as u8) & !UNUSED_BIT;
    }

    /// Valid but never invoked by the dispatcher: `BRK` halts rather than
    /// vectors (see `opcodes_jump::brk`). This is here so a caller stepping
    /// the core in lockstep with an external interrupt line can splice in
    /// real IRQ semantics between ticks.
    #[allow(dead_code)]
    pub fn vector_to_irq(&mut self) {
        self.push_u16(self.pc);
        self.push_u8(self.sr | UNUSED_BIT);
        self.set_flag(StatusFlag::InterruptDisable, true);
        self.pc = self.memory.read_u16(InterruptVectors::IrqBrkVector as u16);
        self.cycles += 7;
    }

    /// Decode, without mutating any state, the instruction at `address`
    /// into a short mnemonic + operand string for debugging.
    pub fn disassemble_at(&self, address: u16) -> String {
        let opcode = self.memory.read_u8(address) as usize;
        let mnemonic = opcodes::OPCODE_STRING_TABLE[opcode];
        if mnemonic == "???" {
            return format!(".byte ${:02X}", opcode);
        }

        let mode = opcodes::ADDRESSING_MODE_TABLE[opcode];
        let operand = match mode {
            Mode::Implied => String::new(),
            Mode::Accumulator => " a".to_string(),
            Mode::Immediate => format!(" #${:02X}", self.memory.read_u8(address.wrapping_add(1))),
            Mode::ZeroPage => format!(" ${:02X}", self.memory.read_u8(address.wrapping_add(1))),
            Mode::ZeroPageX => format!(" ${:02X},x", self.memory.read_u8(address.wrapping_add(1))),
            Mode::ZeroPageY => format!(" ${:02X},y", self.memory.read_u8(address.wrapping_add(1))),
            Mode::Absolute => format!(" ${:04X}", self.memory.read_u16(address.wrapping_add(1))),
            Mode::AbsoluteX => format!(" ${:04X},x", self.memory.read_u16(address.wrapping_add(1))),
            Mode::AbsoluteY => format!(" ${:04X},y", self.memory.read_u16(address.wrapping_add(1))),
            Mode::Indirect => format!(" (${:04X})", self.memory.read_u16(address.wrapping_add(1))),
            Mode::IndirectX => format!(" (${:02X},x)", self.memory.read_u8(address.wrapping_add(1))),
            Mode::IndirectY => format!(" (${:02X}),y", self.memory.read_u8(address.wrapping_add(1))),
            Mode::Relative => {
                let offset = self.memory.read_u8(address.wrapping_add(1)) as i8;
                let target = address.wrapping_add(2).wrapping_add(offset as u16);
                format!(" ${:04X}", target)
            }
        };

        format!("{}{}", mnemonic, operand)
    }
}

impl Default for Cpu {
    fn default() -> Cpu {
        Cpu::new()
    }
}

fn page_crossed(base: u16, offset: u16) -> bool {
    let [_, base_page] = base.to_le_bytes();
    let [_, offset_page] = offset.to_le_bytes();
    base_page != offset_page
}

/// A snapshot of the register file, used for compact debug output.
pub struct Registers {
    pub pc: u16,
    pub sp: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sr: u8,
}

impl From<&Cpu> for Registers {
    fn from(cpu: &Cpu) -> Registers {
        Registers {
            pc: cpu.pc,
            sp: cpu.sp,
            a: cpu.a,
            x: cpu.x,
            y: cpu.y,
            sr: cpu.sr,
        }
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |mask: u8, letter: char| {
            if self.sr & mask == mask {
                letter
            } else {
                letter.to_ascii_lowercase()
            }
        };
        write!(
            f,
            "PC:{:04X} SP:{:02X} A:{:02X} X:{:02X} Y:{:02X} [{}{}{}{}{}{}{}]",
            self.pc,
            self.sp,
            self.a,
            self.x,
            self.y,
            flag(StatusFlag::Negative as u8, 'N'),
            flag(StatusFlag::Overflow as u8, 'V'),
            flag(StatusFlag::Break as u8, 'B'),
            flag(StatusFlag::Decimal as u8, 'D'),
            flag(StatusFlag::InterruptDisable as u8, 'I'),
            flag(StatusFlag::Zero as u8, 'Z'),
            flag(StatusFlag::Carry as u8, 'C'),
        )
    }
}

#[cfg(test)]
pub(crate) mod test_helpers;

#[cfg(test)]
mod test;
