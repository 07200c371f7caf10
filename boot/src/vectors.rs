//! Reset vector table layout.
//!
//! The table is two machine words: the initial stack pointer followed by
//! the reset entry address. The binary instantiates it once in the
//! `.isr_vector` section and the linker script pins that section's address
//! and size.

use core::mem::{offset_of, size_of};

/// Number of slots the reset-vector contract defines.
pub const SLOTS: usize = 2;

/// Entry point the table hands to the hardware. It never returns.
pub type ResetFn = unsafe extern "C" fn() -> !;

#[repr(C)]
pub struct VectorTable {
    /// Slot 0: top of the boot stack.
    pub initial_stack_pointer: *const u8,
    /// Slot 1: reset entry routine.
    pub reset: ResetFn,
}

// Only ever read; it lives in a read-only section.
unsafe impl Sync for VectorTable {}

const _: () = assert!(size_of::<VectorTable>() == SLOTS * size_of::<usize>());
const _: () = assert!(offset_of!(VectorTable, initial_stack_pointer) == 0);
const _: () = assert!(offset_of!(VectorTable, reset) == size_of::<usize>());

impl VectorTable {
    pub const fn new(initial_stack_pointer: *const u8, reset: ResetFn) -> Self {
        VectorTable {
            initial_stack_pointer,
            reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe extern "C" fn fake_reset() -> ! {
        loop {}
    }

    #[test]
    fn test_word_sized_slots() {
        assert_eq!(size_of::<VectorTable>(), 2 * size_of::<usize>());
        assert_eq!(core::mem::align_of::<VectorTable>(), core::mem::align_of::<usize>());
    }

    #[test]
    fn test_slot_order_in_memory() {
        let stack = [0u8; 64];
        let top = unsafe { stack.as_ptr().add(stack.len()) };
        let table = VectorTable::new(top, fake_reset);

        // Read the table back the way the hardware does: as raw words.
        let raw = unsafe { *(&table as *const VectorTable as *const [usize; SLOTS]) };
        assert_eq!(raw[0], top as usize);
        assert_eq!(raw[1], fake_reset as usize);
    }
}
