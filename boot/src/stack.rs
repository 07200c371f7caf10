const TRAP_STACK_SIZE: usize = 4096;

#[repr(align(16))]
struct TrapStack([u8; TRAP_STACK_SIZE]);
static mut TRAP_STACK: TrapStack = TrapStack([0; TRAP_STACK_SIZE]);

/// Point sscratch at the top of the trap stack. Lives in `.bss`, so only
/// valid after the reset handler has zeroed it.
pub fn init_trap_stack() {
    unsafe {
        let top = (&raw const TRAP_STACK.0 as *const u8 as usize) + TRAP_STACK_SIZE;
        riscv::register::sscratch::write(top);
    }
}
