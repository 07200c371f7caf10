#![no_std]
#![no_main]

#[macro_use]
mod logging;

mod app;
mod board;
mod entry;
mod plic;
mod power;
mod reset;
mod sbi;
mod stack;
mod stdio;
mod timer;
mod trap;
mod trap_entry;
mod uart;

use core::fmt::Write;
use uart::Uart;

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    let mut uart = Uart::new();
    let _ = writeln!(uart, "\n*** BOOT PANIC ***");
    if let Some(loc) = info.location() {
        let _ = writeln!(
            uart,
            "at {}:{}:{}",
            loc.file(),
            loc.line(),
            loc.column()
        );
    }

    let _ = writeln!(uart, "{}", info.message());

    reset::idle()
}
