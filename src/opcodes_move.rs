//! Load, store, register-transfer, and stack opcodes.

use crate::cpu::{Cpu, StatusFlag};
use crate::opcodes::Mode;

pub fn lda(cpu: &mut Cpu, mode: Mode, extra: u8) {
    let (_, value) = cpu.get_address_and_operand(mode, extra);
    cpu.a = value;
    cpu.update_zero_and_negative(cpu.a);
}

pub fn ldx(cpu: &mut Cpu, mode: Mode, extra: u8) {
    let (_, value) = cpu.get_address_and_operand(mode, extra);
    cpu.x = value;
    cpu.update_zero_and_negative(cpu.x);
}

pub fn ldy(cpu: &mut Cpu, mode: Mode, extra: u8) {
    let (_, value) = cpu.get_address_and_operand(mode, extra);
    cpu.y = value;
    cpu.update_zero_and_negative(cpu.y);
}

pub fn sta(cpu: &mut Cpu, mode: Mode, _extra: u8) {
    let address = cpu.get_jump_target(mode);
    cpu.memory.write_u8(address, cpu.a);
}

pub fn stx(cpu: &mut Cpu, mode: Mode, _extra: u8) {
    let address = cpu.get_jump_target(mode);
    cpu.memory.write_u8(address, cpu.x);
}

pub fn sty(cpu: &mut Cpu, mode: Mode, _extra: u8) {
    let address = cpu.get_jump_target(mode);
    cpu.memory.write_u8(address, cpu.y);
}

pub fn tax(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.x = cpu.a;
    cpu.update_zero_and_negative(cpu.x);
}

pub fn tay(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.y = cpu.a;
    cpu.update_zero_and_negative(cpu.y);
}

pub fn txa(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.a = cpu.x;
    cpu.update_zero_and_negative(cpu.a);
}

pub fn tya(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.a = cpu.y;
    cpu.update_zero_and_negative(cpu.a);
}

pub fn tsx(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.x = cpu.sp;
    cpu.update_zero_and_negative(cpu.x);
}

/// Unlike every other transfer, TXS touches no flags.
pub fn txs(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.sp = cpu.x;
}

pub fn pha(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.push_u8(cpu.a);
}

pub fn pla(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.a = cpu.pull_u8();
    cpu.update_zero_and_negative(cpu.a);
}

pub fn php(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.push_status_with_break_set();
}

/// PLP replaces the whole status register; `B` and the unused bit are not
/// restored from the stack, matching `Cpu::pull_status`.
pub fn plp(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.pull_status();
}

#[cfg(test)]
mod test {
    use super::super::cpu::test_helpers::run_program;

    #[test]
    fn lda_immediate_sets_negative() {
        let cpu = run_program(&[0xA9, 0xFF]);
        assert_eq!(cpu.a, 0xFF);
        assert!(cpu.is_flag_set(super::StatusFlag::Negative));
        assert!(!cpu.is_flag_set(super::StatusFlag::Zero));
    }

    #[test]
    fn lda_zero_sets_zero_flag() {
        let cpu = run_program(&[0xA9, 0x00]);
        assert!(cpu.is_flag_set(super::StatusFlag::Zero));
    }

    #[test]
    fn sta_zero_page_writes_memory() {
        let cpu = run_program(&[0xA9, 0x42, 0x85, 0x10]);
        assert_eq!(cpu.memory.read_u8(0x10), 0x42);
    }

    #[test]
    fn txs_does_not_touch_flags() {
        let mut cpu = run_program(&[0xA9, 0x00]); // sets Z
        let before = cpu.sr;
        super::txs(&mut cpu, super::Mode::Implied, 0);
        assert_eq!(cpu.sr, before);
    }

    #[test]
    fn pha_pla_round_trips_accumulator() {
        let cpu = run_program(&[0xA9, 0x99, 0x48, 0xA9, 0x00, 0x68]);
        assert_eq!(cpu.a, 0x99);
    }
}
