// boot/src/sbi.rs
use core::arch::asm;

use boot_lib::virt::{SBI_EID_TIME, SBI_FID_SET_TIMER};

/// Program the next timer interrupt; also clears a pending one.
///
/// RV64 passes the whole deadline in a0. The SBI error in a0 is dropped:
/// there is nobody to report it to this early.
pub fn set_timer(stime_value: u64) {
    unsafe {
        asm!(
            "ecall",
            in("a7") SBI_EID_TIME,
            in("a6") SBI_FID_SET_TIMER,
            inlateout("a0") stime_value as usize => _,
            lateout("a1") _,
            options(nostack)
        );
    }
}
