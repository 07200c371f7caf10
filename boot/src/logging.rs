//! Boot logging with level filtering.
//!
//! Lines go to the UART as `[LEVEL] message`. The threshold and level tags
//! live in `boot_lib::level`; the threshold is set from the boot arguments
//! when the board is constructed.
//!
//! Nothing may log before the console bring-up step has run.

/// Internal macro for boot logging with level filtering.
#[macro_export]
macro_rules! klog {
    ($level:expr, $($arg:tt)*) => {{
        let level: boot_lib::level::LogLevel = $level;
        if boot_lib::level::should_log(level) {
            use core::fmt::Write;
            let mut uart = $crate::uart::Uart::new();
            let _ = uart.write_str(level.tag());
            let _ = write!(uart, $($arg)*);
            let _ = uart.write_str("\n");
        }
    }};
}

/// Log a trace-level message (finest granularity).
#[macro_export]
macro_rules! ktrace {
    ($($arg:tt)*) => {
        $crate::klog!(boot_lib::level::LogLevel::Trace, $($arg)*)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! kdebug {
    ($($arg:tt)*) => {
        $crate::klog!(boot_lib::level::LogLevel::Debug, $($arg)*)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! kinfo {
    ($($arg:tt)*) => {
        $crate::klog!(boot_lib::level::LogLevel::Info, $($arg)*)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! kwarn {
    ($($arg:tt)*) => {
        $crate::klog!(boot_lib::level::LogLevel::Warn, $($arg)*)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! kerror {
    ($($arg:tt)*) => {
        $crate::klog!(boot_lib::level::LogLevel::Error, $($arg)*)
    };
}
