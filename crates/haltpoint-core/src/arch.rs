//! # Trap Instructions
//!
//! Exactly one trap sequence is compiled in per target, chosen with
//! `#[cfg(target_arch)]`. There is no runtime architecture detection.
//!
//! | Target | Instruction | Encoding |
//! |---|---|---|
//! | AArch64 | `BRK #0xF000` | `0xD43E0000` |
//! | ARM (A32) | `UDF #0xFE` (the assembler's `trap` alias) | `0xE7FFDEFE` |
//! | ARM (T32) | `UDF #0xFE` | `0xDEFE` |
//! | x86 / x86-64 | `INT3` | `0xCC` |
//!
//! Any other architecture fails the build.

use core::arch::asm;

// ============================================================================
// AArch64
// ============================================================================

/// Mnemonic of the compiled-in trap instruction.
#[cfg(target_arch = "aarch64")]
pub const TRAP_MNEMONIC: &str = "brk #0xf000";

/// Little-endian encoding of the compiled-in trap instruction.
#[cfg(target_arch = "aarch64")]
pub const TRAP_OPCODE: &[u8] = &[0x00, 0x00, 0x3E, 0xD4];

// ============================================================================
// 32-bit ARM
// ============================================================================

#[cfg(all(target_arch = "arm", not(target_feature = "thumb-mode")))]
pub const TRAP_MNEMONIC: &str = "udf #0xfe";

#[cfg(all(target_arch = "arm", not(target_feature = "thumb-mode")))]
pub const TRAP_OPCODE: &[u8] = &[0xFE, 0xDE, 0xFF, 0xE7];

#[cfg(all(target_arch = "arm", target_feature = "thumb-mode"))]
pub const TRAP_MNEMONIC: &str = "udf #0xfe";

#[cfg(all(target_arch = "arm", target_feature = "thumb-mode"))]
pub const TRAP_OPCODE: &[u8] = &[0xFE, 0xDE];

// ============================================================================
// x86 family
// ============================================================================

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub const TRAP_MNEMONIC: &str = "int3";

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub const TRAP_OPCODE: &[u8] = &[0xCC];

#[cfg(not(any(
    target_arch = "aarch64",
    target_arch = "arm",
    target_arch = "x86",
    target_arch = "x86_64"
)))]
compile_error!("haltpoint-core has no trap instruction for this target architecture");

/// Execute the trap instruction.
///
/// Under a debugger the process stops right here. Without one the kernel
/// delivers `SIGTRAP` (or `SIGILL` for `UDF` on 32-bit ARM), which normally
/// terminates the process.
///
/// Inlined so the debugger lands in the caller's frame rather than in this
/// crate.
#[inline(always)]
pub fn trap()
{
    // SAFETY: the instruction only raises a debug exception. It touches no
    // memory and no registers the compiler relies on.
    unsafe {
        #[cfg(target_arch = "aarch64")]
        asm!("brk #0xf000", options(nostack));

        #[cfg(target_arch = "arm")]
        asm!("udf #0xfe", options(nostack));

        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        asm!("int3", options(nostack));
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_exactly_one_opcode_selected()
    {
        assert!(!TRAP_OPCODE.is_empty());
        assert!(!TRAP_MNEMONIC.is_empty());
    }

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    #[test]
    fn test_x86_uses_int3()
    {
        assert_eq!(TRAP_OPCODE, &[0xCC]);
        assert_eq!(TRAP_MNEMONIC, "int3");
    }

    #[cfg(target_arch = "aarch64")]
    #[test]
    fn test_aarch64_uses_brk()
    {
        let word = u32::from_le_bytes([TRAP_OPCODE[0], TRAP_OPCODE[1], TRAP_OPCODE[2], TRAP_OPCODE[3]]);
        // BRK is 0xD4200000 with imm16 in bits 5..21
        assert_eq!(word & 0xFFE0_001F, 0xD420_0000);
        assert_eq!((word >> 5) & 0xFFFF, 0xF000);
    }

    #[cfg(target_arch = "arm")]
    #[test]
    fn test_arm_uses_udf()
    {
        assert_eq!(TRAP_MNEMONIC, "udf #0xfe");
        assert_eq!(TRAP_OPCODE[0], 0xFE);
        assert_eq!(TRAP_OPCODE[1], 0xDE);
    }
}
