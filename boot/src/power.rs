use core::arch::asm;

use boot_lib::hw::PowerDomains;

/* sstatus.FS = Initial (bits 14:13 = 01) */
const SSTATUS_FS_INITIAL: usize = 1 << 13;

/// Switch on the requested domains. Only the FPU is switchable from S-mode
/// on `virt`; the rest is always on and just noted.
pub fn on(domains: PowerDomains) {
    if domains.contains(PowerDomains::FPU) {
        unsafe { asm!("csrs sstatus, {0}", in(reg) SSTATUS_FS_INITIAL) };
        ktrace!("power: fpu on");
    }

    let always_on = domains.bits() & !PowerDomains::FPU.bits();
    if always_on != 0 {
        ktrace!("power: domains {:#x} always on", always_on);
    }
}
