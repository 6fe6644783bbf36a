//! Jumps, subroutine call/return, branches, BRK/RTI, and flag-control
//! opcodes.

use crate::constants::InterruptVectors;
use crate::cpu::{Cpu, StatusFlag};
use crate::opcodes::Mode;

pub fn jmp(cpu: &mut Cpu, mode: Mode, _extra: u8) {
    cpu.pc = cpu.get_jump_target(mode);
}

pub fn jsr(cpu: &mut Cpu, mode: Mode, _extra: u8) {
    let target = cpu.get_jump_target(mode);
    // `pc` now points past the two-byte operand; JSR pushes the address of
    // the JSR instruction's *last* byte, one less than that.
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_u16(return_address);
    cpu.pc = target;
}

pub fn rts(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    let return_address = cpu.pull_u16();
    cpu.pc = return_address.wrapping_add(1);
}

/// Halts the core rather than vectoring through the IRQ/BRK vector, per the
/// host contract this core is built for: software `BRK` is a stop signal,
/// not a resumable interrupt. `Cpu::vector_to_irq` implements the vectoring
/// half for a caller that wants it.
pub fn brk(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    // Skip the padding byte that follows a BRK opcode.
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.push_u16(cpu.pc);
    cpu.push_status_with_break_set();
    cpu.set_flag(StatusFlag::InterruptDisable, true);
    cpu.pc = cpu
        .memory
        .read_u16(InterruptVectors::IrqBrkVector as u16);
    cpu.running = false;
}

pub fn rti(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.pull_status();
    cpu.pc = cpu.pull_u16();
    cpu.running = true;
}

/// Read the signed branch offset and, if `condition` holds, take the
/// branch: add the base cycle, plus one more if the branch crosses a page.
fn branch(cpu: &mut Cpu, condition: bool) {
    let offset = cpu.next_u8() as i8;
    if !condition {
        return;
    }
    let base = cpu.pc;
    let target = base.wrapping_add(offset as u16);
    cpu.cycles += 1;
    if base & 0xFF00 != target & 0xFF00 {
        cpu.cycles += 1;
    }
    cpu.pc = target;
}

pub fn bcc(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    let taken = !cpu.is_flag_set(StatusFlag::Carry);
    branch(cpu, taken);
}

pub fn bcs(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    let taken = cpu.is_flag_set(StatusFlag::Carry);
    branch(cpu, taken);
}

pub fn beq(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    let taken = cpu.is_flag_set(StatusFlag::Zero);
    branch(cpu, taken);
}

pub fn bne(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    let taken = !cpu.is_flag_set(StatusFlag::Zero);
    branch(cpu, taken);
}

pub fn bmi(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    let taken = cpu.is_flag_set(StatusFlag::Negative);
    branch(cpu, taken);
}

pub fn bpl(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    let taken = !cpu.is_flag_set(StatusFlag::Negative);
    branch(cpu, taken);
}

pub fn bvc(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    let taken = !cpu.is_flag_set(StatusFlag::Overflow);
    branch(cpu, taken);
}

pub fn bvs(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    let taken = cpu.is_flag_set(StatusFlag::Overflow);
    branch(cpu, taken);
}

pub fn clc(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.set_flag(StatusFlag::Carry, false);
}

pub fn sec(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.set_flag(StatusFlag::Carry, true);
}

pub fn cld(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.set_flag(StatusFlag::Decimal, false);
}

pub fn sed(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.set_flag(StatusFlag::Decimal, true);
}

pub fn cli(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.set_flag(StatusFlag::InterruptDisable, false);
}

pub fn sei(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.set_flag(StatusFlag::InterruptDisable, true);
}

pub fn clv(cpu: &mut Cpu, _mode: Mode, _extra: u8) {
    cpu.set_flag(StatusFlag::Overflow, false);
}

pub fn nop(_cpu: &mut Cpu, _mode: Mode, _extra: u8) {}

#[cfg(test)]
mod test {
    use crate::cpu::{Cpu, StatusFlag};
    use crate::memory::Memory;

    #[test]
    fn jsr_rts_round_trip_restores_pc_and_sp() {
        // Reset starts execution literally at 0xFFFC, so the bootstrap needs
        // a real JMP there, not a bare pointer value.
        // 0800: JSR $0810 ; 0803: NOP
        // 0810: RTS
        let mut image = [0u8; 0x10000];
        image[0xFFFC] = 0x4C; // JMP
        image[0xFFFD] = 0x00;
        image[0xFFFE] = 0x08;
        image[0x0800] = 0x20; // JSR
        image[0x0801] = 0x10;
        image[0x0802] = 0x08;
        image[0x0803] = 0xEA; // NOP
        image[0x0810] = 0x60; // RTS

        let mut cpu = crate::cpu::Cpu::with_memory(crate::memory::Memory::from_image(image));
        cpu.tick(); // JMP into place
        let sp_before = cpu.sp;
        cpu.tick(); // JSR
        assert_eq!(cpu.sp, sp_before.wrapping_sub(2));
        assert_eq!(cpu.pc, 0x0810);
        cpu.tick(); // RTS
        assert_eq!(cpu.sp, sp_before);
        assert_eq!(cpu.pc, 0x0803);
    }

    #[test]
    fn brk_halts_and_vectors_through_irq_brk_vector() {
        // BRK sits directly at the reset vector; no bootstrap JMP is needed
        // since there's only the one instruction to run.
        let mut image = [0u8; 0x10000];
        image[0xFFFC] = 0x00; // BRK
        image[0xFFFE] = 0x34;
        image[0xFFFF] = 0x12;

        let mut cpu = crate::cpu::Cpu::with_memory(crate::memory::Memory::from_image(image));
        cpu.tick();
        assert!(!cpu.running);
        assert_eq!(cpu.pc, 0x1234);
        assert!(cpu.is_flag_set(StatusFlag::InterruptDisable));
    }

    fn cpu_with_program(program: &[u8]) -> Cpu {
        let mut image = [0u8; 0x10000];
        image[0xFFFC] = 0x4C; // JMP
        image[0xFFFD] = 0x00;
        image[0xFFFE] = 0x08;
        image[0x0800..0x0800 + program.len()].copy_from_slice(program);
        Cpu::with_memory(Memory::from_image(image))
    }

    #[test]
    fn branch_not_taken_costs_two_cycles() {
        // CLC, BEQ +4 (Z is clear after CLC, so the branch is not taken).
        let mut cpu = cpu_with_program(&[0x18, 0xF0, 0x04]);
        cpu.tick(); // JMP into place
        cpu.tick(); // CLC
        let cycles_before = cpu.cycles;
        cpu.tick(); // BEQ, not taken
        assert_eq!(cpu.cycles - cycles_before, 2);
    }

    #[test]
    fn branch_taken_same_page_costs_three_cycles() {
        // LDA #$00 sets Z; BEQ +2 taken, same page.
        let mut cpu = cpu_with_program(&[0xA9, 0x00, 0xF0, 0x02, 0xEA, 0xEA]);
        cpu.tick(); // JMP into place
        cpu.tick(); // LDA
        let cycles_before = cpu.cycles;
        cpu.tick(); // BEQ, taken
        assert_eq!(cpu.cycles - cycles_before, 3);
    }
}
