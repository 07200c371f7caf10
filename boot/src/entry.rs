use core::arch::global_asm;

use boot_lib::vectors::VectorTable;

// The stack pointer is loaded before any Rust runs, so no prologue or
// spill code can execute on an unset sp. a0 (hart id) and a1 (device
// tree) from the firmware pass straight through to `reset_handler`.
global_asm!(
    r#"
    .section .text.entry, "ax"
    .globl _start
_start:
    /* Keep interrupts off until bring-up unmasks the vblank source */
    csrci sstatus, 0x2
    csrw  sie, zero

    la    sp, _estack
    tail  reset_handler
"#
);

extern "C" {
    static _estack: u8;
    fn _start() -> !;
}

/// Slot 0 is the stack top, slot 1 the reset entry. Placement and size are
/// checked by `memory.ld`.
#[used]
#[no_mangle]
#[link_section = ".isr_vector"]
pub static ISR_VECTOR: VectorTable =
    VectorTable::new(unsafe { core::ptr::addr_of!(_estack) }, _start);
