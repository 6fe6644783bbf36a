//! Opcode-indexed dispatch tables.
//!
//! Every documented 6502 opcode byte has an entry in each of these five
//! 256-element tables: its addressing mode, its base cycle cost, whether it
//! earns an extra cycle on a page cross, its handler function, and its
//! mnemonic for disassembly. Bytes with no documented instruction carry
//! `None` in `OPERATION_FN_TABLE`; hitting one halts the core (see
//! `Cpu::tick`).

use crate::cpu::Cpu;
use crate::opcodes_jump;
use crate::opcodes_logical;
use crate::opcodes_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
}

/// The third argument is the page-cross cycle bonus this opcode earns, looked
/// up once in `PAGE_CROSS_TABLE` and passed down so the handler doesn't need
/// to know its own opcode byte.
pub type OperationFn = fn(&mut Cpu, Mode, u8);

use Mode::*;

#[rustfmt::skip]
pub const ADDRESSING_MODE_TABLE: [Mode; 256] = [
    // 0x0_
    Implied, IndirectX, Implied, Implied, Implied, ZeroPage, ZeroPage, Implied,
    Implied, Immediate, Accumulator, Implied, Implied, Absolute, Absolute, Implied,
    // 0x1_
    Relative, IndirectY, Implied, Implied, Implied, ZeroPageX, ZeroPageX, Implied,
    Implied, AbsoluteY, Implied, Implied, Implied, AbsoluteX, AbsoluteX, Implied,
    // 0x2_
    Absolute, IndirectX, Implied, Implied, ZeroPage, ZeroPage, ZeroPage, Implied,
    Implied, Immediate, Accumulator, Implied, Absolute, Absolute, Absolute, Implied,
    // 0x3_
    Relative, IndirectY, Implied, Implied, Implied, ZeroPageX, ZeroPageX, Implied,
    Implied, AbsoluteY, Implied, Implied, Implied, AbsoluteX, AbsoluteX, Implied,
    // 0x4_
    Implied, IndirectX, Implied, Implied, Implied, ZeroPage, ZeroPage, Implied,
    Implied, Immediate, Accumulator, Implied, Absolute, Absolute, Absolute, Implied,
    // 0x5_
    Relative, IndirectY, Implied, Implied, Implied, ZeroPageX, ZeroPageX, Implied,
    Implied, AbsoluteY, Implied, Implied, Implied, AbsoluteX, AbsoluteX, Implied,
    // 0x6_
    Implied, IndirectX, Implied, Implied, Implied, ZeroPage, ZeroPage, Implied,
    Implied, Immediate, Accumulator, Implied, Indirect, Absolute, Absolute, Implied,
    // 0x7_
    Relative, IndirectY, Implied, Implied, Implied, ZeroPageX, ZeroPageX, Implied,
    Implied, AbsoluteY, Implied, Implied, Implied, AbsoluteX, AbsoluteX, Implied,
    // 0x8_
    Implied, IndirectX, Implied, Implied, ZeroPage, ZeroPage, ZeroPage, Implied,
    Implied, Implied, Implied, Implied, Absolute, Absolute, Absolute, Implied,
    // 0x9_
    Relative, IndirectY, Implied, Implied, ZeroPageX, ZeroPageX, ZeroPageY, Implied,
    Implied, AbsoluteY, Implied, Implied, Implied, AbsoluteX, Implied, Implied,
    // 0xA_
    Immediate, IndirectX, Immediate, Implied, ZeroPage, ZeroPage, ZeroPage, Implied,
    Implied, Immediate, Implied, Implied, Absolute, Absolute, Absolute, Implied,
    // 0xB_
    Relative, IndirectY, Implied, Implied, ZeroPageX, ZeroPageX, ZeroPageY, Implied,
    Implied, AbsoluteY, Implied, Implied, AbsoluteX, AbsoluteX, AbsoluteY, Implied,
    // 0xC_
    Immediate, IndirectX, Implied, Implied, ZeroPage, ZeroPage, ZeroPage, Implied,
    Implied, Immediate, Implied, Implied, Absolute, Absolute, Absolute, Implied,
    // 0xD_
    Relative, IndirectY, Implied, Implied, Implied, ZeroPageX, ZeroPageX, Implied,
    Implied, AbsoluteY, Implied, Implied, Implied, AbsoluteX, AbsoluteX, Implied,
    // 0xE_
    Immediate, IndirectX, Implied, Implied, ZeroPage, ZeroPage, ZeroPage, Implied,
    Implied, Immediate, Implied, Implied, Absolute, Absolute, Absolute, Implied,
    // 0xF_
    Relative, IndirectY, Implied, Implied, Implied, ZeroPageX, ZeroPageX, Implied,
    Implied, AbsoluteY, Implied, Implied, Implied, AbsoluteX, AbsoluteX, Implied,
];

#[rustfmt::skip]
pub const CYCLES_TABLE: [u8; 256] = [
    // 0x0_
    7, 6, 0, 0, 0, 3, 5, 0, 3, 2, 2, 0, 0, 4, 6, 0,
    // 0x1_
    2, 5, 0, 0, 0, 4, 6, 0, 2, 4, 0, 0, 0, 4, 7, 0,
    // 0x2_
    6, 6, 0, 0, 3, 3, 5, 0, 4, 2, 2, 0, 4, 4, 6, 0,
    // 0x3_
    2, 5, 0, 0, 0, 4, 6, 0, 2, 4, 0, 0, 0, 4, 7, 0,
    // 0x4_
    6, 6, 0, 0, 0, 3, 5, 0, 3, 2, 2, 0, 3, 4, 6, 0,
    // 0x5_
    2, 5, 0, 0, 0, 4, 6, 0, 2, 4, 0, 0, 0, 4, 7, 0,
    // 0x6_
    6, 6, 0, 0, 0, 3, 5, 0, 4, 2, 2, 0, 5, 4, 6, 0,
    // 0x7_
    2, 5, 0, 0, 0, 4, 6, 0, 2, 4, 0, 0, 0, 4, 7, 0,
    // 0x8_
    0, 6, 0, 0, 3, 3, 3, 0, 2, 0, 2, 0, 4, 4, 4, 0,
    // 0x9_
    2, 6, 0, 0, 4, 4, 4, 0, 2, 5, 2, 0, 0, 5, 0, 0,
    // 0xA_
    2, 6, 2, 0, 3, 3, 3, 0, 2, 2, 2, 0, 4, 4, 4, 0,
    // 0xB_
    2, 5, 0, 0, 4, 4, 4, 0, 2, 4, 2, 0, 4, 4, 4, 0,
    // 0xC_
    2, 6, 0, 0, 3, 3, 5, 0, 2, 2, 2, 0, 4, 4, 6, 0,
    // 0xD_
    2, 5, 0, 0, 0, 4, 6, 0, 2, 4, 0, 0, 0, 4, 7, 0,
    // 0xE_
    2, 6, 0, 0, 3, 3, 5, 0, 2, 2, 2, 0, 4, 4, 6, 0,
    // 0xF_
    2, 5, 0, 0, 0, 4, 6, 0, 2, 4, 0, 0, 0, 4, 7, 0,
];

/// Extra cycle earned when the effective address crosses a page boundary
/// (Absolute,X / Absolute,Y / (Indirect),Y read forms). Zero everywhere
/// else, including write forms, which always pay the fixed cost above.
#[rustfmt::skip]
pub const PAGE_CROSS_TABLE: [u8; 256] = [
    // 0x0_
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0x1_
    0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0,
    // 0x2_
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0x3_
    0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0,
    // 0x4_
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0x5_
    0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0,
    // 0x6_
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0x7_
    0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0,
    // 0x8_
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0x9_
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0xA_
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0xB_
    0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0,
    // 0xC_
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0xD_
    0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0,
    // 0xE_
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0xF_
    0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0,
];

#[rustfmt::skip]
pub const OPCODE_STRING_TABLE: [&str; 256] = [
    // 0x0_
    "brk", "ora", "???", "???", "???", "ora", "asl", "???", "php", "ora", "asl", "???", "???", "ora", "asl", "???",
    // 0x1_
    "bpl", "ora", "???", "???", "???", "ora", "asl", "???", "clc", "ora", "???", "???", "???", "ora", "asl", "???",
    // 0x2_
    "jsr", "and", "???", "???", "bit", "and", "rol", "???", "plp", "and", "rol", "???", "bit", "and", "rol", "???",
    // 0x3_
    "bmi", "and", "???", "???", "???", "and", "rol", "???", "sec", "and", "???", "???", "???", "and", "rol", "???",
    // 0x4_
    "rti", "eor", "???", "???", "???", "eor", "lsr", "???", "pha", "eor", "lsr", "???", "jmp", "eor", "lsr", "???",
    // 0x5_
    "bvc", "eor", "???", "???", "???", "eor", "lsr", "???", "cli", "eor", "???", "???", "???", "eor", "lsr", "???",
    // 0x6_
    "rts", "adc", "???", "???", "???", "adc", "ror", "???", "pla", "adc", "ror", "???", "jmp", "adc", "ror", "???",
    // 0x7_
    "bvs", "adc", "???", "???", "???", "adc", "ror", "???", "sei", "adc", "???", "???", "???", "adc", "ror", "???",
    // 0x8_
    "???", "sta", "???", "???", "sty", "sta", "stx", "???", "dey", "???", "txa", "???", "sty", "sta", "stx", "???",
    // 0x9_
    "bcc", "sta", "???", "???", "sty", "sta", "stx", "???", "tya", "sta", "txs", "???", "???", "sta", "???", "???",
    // 0xA_
    "ldy", "lda", "ldx", "???", "ldy", "lda", "ldx", "???", "tay", "lda", "tax", "???", "ldy", "lda", "ldx", "???",
    // 0xB_
    "bcs", "lda", "???", "???", "ldy", "lda", "ldx", "???", "clv", "lda", "tsx", "???", "ldy", "lda", "ldx", "???",
    // 0xC_
    "cpy", "cmp", "???", "???", "cpy", "cmp", "dec", "???", "iny", "cmp", "dex", "???", "cpy", "cmp", "dec", "???",
    // 0xD_
    "bne", "cmp", "???", "???", "???", "cmp", "dec", "???", "cld", "cmp", "???", "???", "???", "cmp", "dec", "???",
    // 0xE_
    "cpx", "sbc", "???", "???", "cpx", "sbc", "inc", "???", "inx", "sbc", "nop", "???", "cpx", "sbc", "inc", "???",
    // 0xF_
    "beq", "sbc", "???", "???", "???", "sbc", "inc", "???", "sed", "sbc", "???", "???", "???", "sbc", "inc", "???",
];

macro_rules! op {
    ($f:path) => {
        Some($f as OperationFn)
    };
}

#[rustfmt::skip]
pub const OPERATION_FN_TABLE: [Option<OperationFn>; 256] = [
    // 0x0_
    op!(opcodes_jump::brk), op!(opcodes_logical::ora), None, None, None, op!(opcodes_logical::ora), op!(opcodes_logical::asl), None,
    op!(opcodes_move::php), op!(opcodes_logical::ora), op!(opcodes_logical::asl), None, None, op!(opcodes_logical::ora), op!(opcodes_logical::asl), None,
    // 0x1_
    op!(opcodes_jump::bpl), op!(opcodes_logical::ora), None, None, None, op!(opcodes_logical::ora), op!(opcodes_logical::asl), None,
    op!(opcodes_jump::clc), op!(opcodes_logical::ora), None, None, None, op!(opcodes_logical::ora), op!(opcodes_logical::asl), None,
    // 0x2_
    op!(opcodes_jump::jsr), op!(opcodes_logical::and), None, None, op!(opcodes_logical::bit), op!(opcodes_logical::and), op!(opcodes_logical::rol), None,
    op!(opcodes_move::plp), op!(opcodes_logical::and), op!(opcodes_logical::rol), None, op!(opcodes_logical::bit), op!(opcodes_logical::and), op!(opcodes_logical::rol), None,
    // 0x3_
    op!(opcodes_jump::bmi), op!(opcodes_logical::and), None, None, None, op!(opcodes_logical::and), op!(opcodes_logical::rol), None,
    op!(opcodes_jump::sec), op!(opcodes_logical::and), None, None, None, op!(opcodes_logical::and), op!(opcodes_logical::rol), None,
    // 0x4_
    op!(opcodes_jump::rti), op!(opcodes_logical::eor), None, None, None, op!(opcodes_logical::eor), op!(opcodes_logical::lsr), None,
    op!(opcodes_move::pha), op!(opcodes_logical::eor), op!(opcodes_logical::lsr), None, op!(opcodes_jump::jmp), op!(opcodes_logical::eor), op!(opcodes_logical::lsr), None,
    // 0x5_
    op!(opcodes_jump::bvc), op!(opcodes_logical::eor), None, None, None, op!(opcodes_logical::eor), op!(opcodes_logical::lsr), None,
    op!(opcodes_jump::cli), op!(opcodes_logical::eor), None, None, None, op!(opcodes_logical::eor), op!(opcodes_logical::lsr), None,
    // 0x6_
    op!(opcodes_jump::rts), op!(opcodes_logical::adc), None, None, None, op!(opcodes_logical::adc), op!(opcodes_logical::ror), None,
    op!(opcodes_move::pla), op!(opcodes_logical::adc), op!(opcodes_logical::ror), None, op!(opcodes_jump::jmp), op!(opcodes_logical::adc), op!(opcodes_logical::ror), None,
    // 0x7_
    op!(opcodes_jump::bvs), op!(opcodes_logical::adc), None, None, None, op!(opcodes_logical::adc), op!(opcodes_logical::ror), None,
    op!(opcodes_jump::sei), op!(opcodes_logical::adc), None, None, None, op!(opcodes_logical::adc), op!(opcodes_logical::ror), None,
    // 0x8_
    None, op!(opcodes_move::sta), None, None, op!(opcodes_move::sty), op!(opcodes_move::sta), op!(opcodes_move::stx), None,
    op!(opcodes_logical::dey), None, op!(opcodes_move::txa), None, op!(opcodes_move::sty), op!(opcodes_move::sta), op!(opcodes_move::stx), None,
    // 0x9_
    op!(opcodes_jump::bcc), op!(opcodes_move::sta), None, None, op!(opcodes_move::sty), op!(opcodes_move::sta), op!(opcodes_move::stx), None,
    op!(opcodes_move::tya), op!(opcodes_move::sta), op!(opcodes_move::txs), None, None, op!(opcodes_move::sta), None, None,
    // 0xA_
    op!(opcodes_move::ldy), op!(opcodes_move::lda), op!(opcodes_move::ldx), None, op!(opcodes_move::ldy), op!(opcodes_move::lda), op!(opcodes_move::ldx), None,
    op!(opcodes_move::tay), op!(opcodes_move::lda), op!(opcodes_move::tax), None, op!(opcodes_move::ldy), op!(opcodes_move::lda), op!(opcodes_move::ldx), None,
    // 0xB_
    op!(opcodes_jump::bcs), op!(opcodes_move::lda), None, None, op!(opcodes_move::ldy), op!(opcodes_move::lda), op!(opcodes_move::ldx), None,
    op!(opcodes_jump::clv), op!(opcodes_move::lda), op!(opcodes_move::tsx), None, op!(opcodes_move::ldy), op!(opcodes_move::lda), op!(opcodes_move::ldx), None,
    // 0xC_
    op!(opcodes_logical::cpy), op!(opcodes_logical::cmp), None, None, op!(opcodes_logical::cpy), op!(opcodes_logical::cmp), op!(opcodes_logical::dec), None,
    op!(opcodes_logical::iny), op!(opcodes_logical::cmp), op!(opcodes_logical::dex), None, op!(opcodes_logical::cpy), op!(opcodes_logical::cmp), op!(opcodes_logical::dec), None,
    // 0xD_
    op!(opcodes_jump::bne), op!(opcodes_logical::cmp), None, None, None, op!(opcodes_logical::cmp), op!(opcodes_logical::dec), None,
    op!(opcodes_jump::cld), op!(opcodes_logical::cmp), None, None, None, op!(opcodes_logical::cmp), op!(opcodes_logical::dec), None,
    // 0xE_
    op!(opcodes_logical::cpx), op!(opcodes_logical::sbc), None, None, op!(opcodes_logical::cpx), op!(opcodes_logical::sbc), op!(opcodes_logical::inc), None,
    op!(opcodes_logical::inx), op!(opcodes_logical::sbc), op!(opcodes_jump::nop), None, op!(opcodes_logical::cpx), op!(opcodes_logical::sbc), op!(opcodes_logical::inc), None,
    // 0xF_
    op!(opcodes_jump::beq), op!(opcodes_logical::sbc), None, None, None, op!(opcodes_logical::sbc), op!(opcodes_logical::inc), None,
    op!(opcodes_jump::sed), op!(opcodes_logical::sbc), None, None, None, op!(opcodes_logical::sbc), op!(opcodes_logical::inc), None,
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn documented_opcode_count_is_151() {
        let documented = OPERATION_FN_TABLE.iter().filter(|op| op.is_some()).count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn every_documented_opcode_has_a_mnemonic_and_undocumented_ones_dont() {
        for (index, op) in OPERATION_FN_TABLE.iter().enumerate() {
            let has_mnemonic = OPCODE_STRING_TABLE[index] != "???";
            assert_eq!(
                op.is_some(),
                has_mnemonic,
                "opcode {:#04x} disagreement between dispatch and mnemonic tables",
                index
            );
        }
    }
}
