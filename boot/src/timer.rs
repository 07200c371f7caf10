// boot/src/timer.rs
use core::sync::atomic::{AtomicU64, Ordering};
use riscv::register::time;

use boot_lib::config::vblank_interval;
use boot_lib::virt::TIMEBASE_HZ;

use crate::sbi;

/// Vblank interrupts seen since bring-up.
static TICKS: AtomicU64 = AtomicU64::new(0);

static INTERVAL: AtomicU64 = AtomicU64::new(0);

#[inline(always)]
fn now() -> u64 {
    time::read() as u64
}

/// Arm the first vblank. The source itself is unmasked by the caller.
pub fn init(vblank_hz: u32) {
    let interval = vblank_interval(TIMEBASE_HZ, vblank_hz);
    INTERVAL.store(interval, Ordering::Relaxed);
    sbi::set_timer(now() + interval);
    kdebug!("vblank: {} Hz, {} timebase ticks", vblank_hz, interval);
}

pub fn on_vblank() {
    // acknowledge and schedule next
    sbi::set_timer(now() + INTERVAL.load(Ordering::Relaxed));
    TICKS.fetch_add(1, Ordering::Relaxed);
}

pub fn ticks() -> u64 {
    TICKS.load(Ordering::Relaxed)
}
