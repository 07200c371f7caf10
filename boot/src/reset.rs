use boot_lib::hw::BringUp;
use boot_lib::memory::Region;
use boot_lib::start::{self, Layout, Startup};

use crate::board::QemuVirt;

extern "C" {
    // Linker script symbols; only their addresses are meaningful.
    static _sidata: u8;
    static mut _sdata: u8;
    static mut _edata: u8;
    static mut _sbss: u8;
    static mut _ebss: u8;

    /// Application entry point.
    fn bare_main();
}

static HARDWARE: BringUp = BringUp::new();

struct Boot {
    hart_id: usize,
}

impl Startup for Boot {
    fn bring_up(&mut self) {
        let mut board = QemuVirt::new(self.hart_id);
        HARDWARE.run(&mut board);
        board.report(&HARDWARE);
    }

    fn handoff(&mut self) {
        unsafe { bare_main() }
    }
}

/// Second half of `_start`, running on the boot stack.
///
/// Nothing here may read a static before `start::run` has set up `.data`
/// and `.bss`.
#[no_mangle]
unsafe extern "C" fn reset_handler(hart_id: usize, _dtb: usize) -> ! {
    let layout = Layout {
        data_image: &raw const _sidata,
        data: Region::new(&raw mut _sdata, &raw mut _edata),
        bss: Region::new(&raw mut _sbss, &raw mut _ebss),
    };
    start::run(&layout, &mut Boot { hart_id });

    idle()
}

/// Park the hart for good. The loop has no side effects and no way out.
#[inline(always)]
pub fn idle() -> ! {
    loop {
        unsafe { riscv::asm::wfi() }
    }
}
