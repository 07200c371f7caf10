use core::arch::global_asm;

use boot_lib::trapframe::FRAME_SIZE;

// Interrupts only ever arrive from S-mode here, once bring-up has unmasked
// the vblank source. sscratch holds the trap stack top between traps.
//
// Only integer registers are saved. Bring-up leaves sstatus.FS on, so
// nothing reachable from rust_trap may use floating point.
global_asm!(
    r#"
    .section .text.trap
    .align 2
    .globl __trap_entry
__trap_entry:
    // Swap to the trap stack: sp <-> sscratch
    csrrw   sp, sscratch, sp

    // Make space for TrapFrame
    addi    sp, sp, -{frame}

    sd      ra,   0(sp)
    sd      t0,  16(sp)

    // Interrupted SP, parked in sscratch by the swap above
    csrr    t0, sscratch
    sd      t0,   8(sp)

    sd      t1,  24(sp)
    sd      t2,  32(sp)
    sd      a0,  40(sp)
    sd      a1,  48(sp)
    sd      a2,  56(sp)
    sd      a3,  64(sp)
    sd      a4,  72(sp)
    sd      a5,  80(sp)
    sd      a6,  88(sp)
    sd      a7,  96(sp)
    sd      t3, 104(sp)
    sd      t4, 112(sp)
    sd      t5, 120(sp)
    sd      t6, 128(sp)

    csrr    t0, sepc
    sd      t0, 136(sp)
    csrr    t0, sstatus
    sd      t0, 144(sp)

    // Call Rust handler: rust_trap(&mut TrapFrame)
    mv      a0, sp
    call    rust_trap

    // Restore CSRs from TrapFrame (may be modified by handler)
    ld      t0, 136(sp)
    csrw    sepc, t0
    ld      t0, 144(sp)
    csrw    sstatus, t0

    ld      ra,   0(sp)
    ld      t1,  24(sp)
    ld      t2,  32(sp)
    ld      a0,  40(sp)
    ld      a1,  48(sp)
    ld      a2,  56(sp)
    ld      a3,  64(sp)
    ld      a4,  72(sp)
    ld      a5,  80(sp)
    ld      a6,  88(sp)
    ld      a7,  96(sp)
    ld      t3, 104(sp)
    ld      t4, 112(sp)
    ld      t5, 120(sp)
    ld      t6, 128(sp)

    // Interrupted SP back into sscratch, then t0 itself
    ld      t0,   8(sp)
    csrw    sscratch, t0
    ld      t0,  16(sp)

    // Pop TrapFrame; sp is the trap stack top again
    addi    sp, sp, {frame}
    csrrw   sp, sscratch, sp

    sret
"#,
    frame = const FRAME_SIZE,
);
