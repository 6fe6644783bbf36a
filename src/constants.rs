//! Fixed memory layout constants for the 6502 address space.

/// The high byte of the hardcoded stack page. The stack pointer register
/// supplies the low byte; the full address is always `0x0100 | sp`.
pub const STACK_PAGE: u16 = 0x0100;

/// Vector addresses the CPU reads a 16-bit destination from on reset or BRK.
///
/// http://wiki.nesdev.com/w/index.php/CPU
#[rustfmt::skip]
pub enum InterruptVectors {
    ResetVector  = 0xFFFC,
    IrqBrkVector = 0xFFFE,
}
