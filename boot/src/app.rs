// Stand-in application. A real one replaces this file and provides its own
// `bare_main`, talking to the console through `stdout_tx_strn_cooked`.

use crate::stdio::stdout_tx_strn_cooked;
use crate::timer;

/// Vblanks to wait for before handing the hart back.
const WAIT_VBLANKS: u64 = 3;

fn puts(s: &str) {
    unsafe { stdout_tx_strn_cooked(s.as_ptr(), s.len()) }
}

#[no_mangle]
pub extern "C" fn bare_main() {
    puts("\nboot: hello from bare_main\n");

    let start = timer::ticks();
    while timer::ticks() - start < WAIT_VBLANKS {
        unsafe { riscv::asm::wfi() }
    }
    kinfo!("app: saw {} vblanks, returning", timer::ticks() - start);
}
