use crate::cpu::Cpu;
use crate::memory::Memory;

/// Build a memory image with `program` loaded at `0x0800`, a `JMP $0800`
/// bootstrap at the reset vector (reset starts execution literally at
/// `0xFFFC`, so a real instruction has to live there, not a bare pointer),
/// run the CPU until it halts (on `BRK` or an illegal opcode), and return
/// the final state.
pub(crate) fn run_program(program: &[u8]) -> Cpu {
    let mut image = [0u8; 0x10000];
    image[0xFFFC] = 0x4C; // JMP
    image[0xFFFD] = 0x00;
    image[0xFFFE] = 0x08;
    image[0x0800..0x0800 + program.len()].copy_from_slice(program);

    let mut cpu = Cpu::with_memory(Memory::from_image(image));
    let mut guard = 0;
    while cpu.running {
        cpu.tick();
        guard += 1;
        if guard > 10_000 {
            panic!("program ran too long without halting: {:?}", program);
        }
    }
    cpu
}
