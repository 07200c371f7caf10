//! Register save area pushed by `__trap_entry`.
//!
//! The assembly in the binary hard-codes these offsets and the frame size.
//! The size stays a multiple of 16 so `sp` is still ABI-aligned when the
//! entry stub calls into Rust.

#[cfg(target_pointer_width = "64")]
use core::mem::size_of;

#[repr(C)]
pub struct TrapFrame {
    pub ra: usize,      // x1
    pub sp: usize,      // x2 (interrupted SP)
    pub t0: usize,      // x5
    pub t1: usize,      // x6
    pub t2: usize,      // x7
    pub a0: usize,      // x10
    pub a1: usize,      // x11
    pub a2: usize,      // x12
    pub a3: usize,      // x13
    pub a4: usize,      // x14
    pub a5: usize,      // x15
    pub a6: usize,      // x16
    pub a7: usize,      // x17
    pub t3: usize,      // x28
    pub t4: usize,      // x29
    pub t5: usize,      // x30
    pub t6: usize,      // x31
    pub sepc: usize,
    pub sstatus_bits: usize,
    _pad: usize,
}

/// Bytes `__trap_entry` reserves on the trap stack.
pub const FRAME_SIZE: usize = 160;

/// RISC-V psABI stack alignment at a call.
pub const STACK_ALIGN: usize = 16;

#[cfg(target_pointer_width = "64")]
const _: () = assert!(size_of::<TrapFrame>() == FRAME_SIZE);
const _: () = assert!(FRAME_SIZE % STACK_ALIGN == 0);

#[cfg(all(test, target_pointer_width = "64"))]
mod tests {
    use super::*;
    use core::mem::offset_of;

    #[test]
    fn test_frame_keeps_call_alignment() {
        // The trap stack top is 16-aligned; after reserving the frame the
        // stub's `call rust_trap` must see an aligned sp too.
        let top = 4096usize;
        assert_eq!((top - FRAME_SIZE) % STACK_ALIGN, 0);
        assert_eq!(size_of::<TrapFrame>(), 160);
    }

    #[test]
    fn test_offsets_match_entry_stub() {
        assert_eq!(offset_of!(TrapFrame, ra), 0);
        assert_eq!(offset_of!(TrapFrame, sp), 8);
        assert_eq!(offset_of!(TrapFrame, t0), 16);
        assert_eq!(offset_of!(TrapFrame, a0), 40);
        assert_eq!(offset_of!(TrapFrame, t6), 128);
        assert_eq!(offset_of!(TrapFrame, sepc), 136);
        assert_eq!(offset_of!(TrapFrame, sstatus_bits), 144);
    }
}
