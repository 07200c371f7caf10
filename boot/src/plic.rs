//! PLIC reset for this hart's S-mode context.

use boot_lib::virt::{
    plic_enable, plic_priority, plic_s_context, plic_threshold, PLIC_SOURCES,
};

#[inline(always)]
fn write32(addr: usize, value: u32) {
    unsafe { core::ptr::write_volatile(addr as *mut u32, value) }
}

/// Mask every external source: zero priorities (never delivered), clear
/// the context's enable bits and open the threshold. Sources are enabled
/// individually later, never here.
pub fn init(hart_id: usize) {
    for source in 1..PLIC_SOURCES {
        write32(plic_priority(source), 0);
    }

    let ctx = plic_s_context(hart_id);
    for word in 0..PLIC_SOURCES / 32 {
        write32(plic_enable(ctx, word), 0);
    }
    write32(plic_threshold(ctx), 0);

    kdebug!("plic: {} sources masked for context {}", PLIC_SOURCES - 1, ctx);
}
