//! Console output exported to the application.

use boot_lib::cooked;

use crate::uart::Uart;

/// Send `len` bytes starting at `s` to the console, `\n` as `\r\n`.
///
/// Exported under the C symbol applications already link against.
///
/// # Safety
///
/// `s` must be readable for `len` bytes (or `len` must be 0).
#[export_name = "mp_hal_stdout_tx_strn_cooked"]
pub unsafe extern "C" fn stdout_tx_strn_cooked(s: *const u8, len: usize) {
    let mut uart = Uart::new();
    cooked::write_cooked_raw(&mut uart, s, len);
}
