//! Boot library - testable pieces of the reset path
//!
//! Everything here is free of hardware access so it can be unit-tested on the
//! host. The bare-metal binary (`main.rs`) supplies the linker symbols, the
//! register-level drivers and the `Board` implementation, then drives these
//! helpers from its reset handler.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod cooked;
pub mod hw;
pub mod memory;
pub mod start;
pub mod trapframe;
pub mod vectors;

/// Log levels and the global log threshold
pub mod level {
    use core::sync::atomic::{AtomicU8, Ordering};

    /// Severity of a log line, lowest first.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
    #[repr(u8)]
    pub enum LogLevel {
        Trace = 0,
        Debug = 1,
        Info = 2,
        Warn = 3,
        Error = 4,
    }

    impl LogLevel {
        /// Fixed-width prefix written in front of every log line.
        pub const fn tag(self) -> &'static str {
            match self {
                LogLevel::Trace => "[TRACE] ",
                LogLevel::Debug => "[DEBUG] ",
                LogLevel::Info => "[INFO]  ",
                LogLevel::Warn => "[WARN]  ",
                LogLevel::Error => "[ERROR] ",
            }
        }

        /// Parse a level name as used in boot arguments (`loglevel=debug`).
        pub fn parse(s: &str) -> Option<Self> {
            match s {
                "trace" => Some(LogLevel::Trace),
                "debug" => Some(LogLevel::Debug),
                "info" => Some(LogLevel::Info),
                "warn" => Some(LogLevel::Warn),
                "error" => Some(LogLevel::Error),
                _ => None,
            }
        }

        const fn from_u8(v: u8) -> Self {
            match v {
                0 => LogLevel::Trace,
                1 => LogLevel::Debug,
                2 => LogLevel::Info,
                3 => LogLevel::Warn,
                _ => LogLevel::Error,
            }
        }
    }

    /// Global log level filter. Messages below this level are suppressed.
    static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

    pub fn get_log_level() -> LogLevel {
        LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
    }

    pub fn set_log_level(level: LogLevel) {
        LOG_LEVEL.store(level as u8, Ordering::Relaxed);
    }

    #[inline]
    pub fn should_log(level: LogLevel) -> bool {
        level as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_tags_are_fixed_width() {
            for level in [
                LogLevel::Trace,
                LogLevel::Debug,
                LogLevel::Info,
                LogLevel::Warn,
                LogLevel::Error,
            ] {
                assert_eq!(level.tag().len(), 8);
                assert!(level.tag().starts_with('['));
            }
        }

        #[test]
        fn test_parse_names() {
            assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Trace));
            assert_eq!(LogLevel::parse("warn"), Some(LogLevel::Warn));
            assert_eq!(LogLevel::parse("WARN"), None);
            assert_eq!(LogLevel::parse(""), None);
        }

        #[test]
        fn test_threshold_filtering() {
            set_log_level(LogLevel::Warn);
            assert_eq!(get_log_level(), LogLevel::Warn);
            assert!(!should_log(LogLevel::Info));
            assert!(should_log(LogLevel::Warn));
            assert!(should_log(LogLevel::Error));

            set_log_level(LogLevel::Trace);
            assert!(should_log(LogLevel::Trace));

            set_log_level(LogLevel::Info);
        }

        #[test]
        fn test_from_u8_saturates() {
            assert_eq!(LogLevel::from_u8(2), LogLevel::Info);
            assert_eq!(LogLevel::from_u8(200), LogLevel::Error);
        }
    }
}

/// QEMU `virt` machine constants and PLIC register layout
pub mod virt {
    /// 16550 UART
    pub const UART0_BASE: usize = 0x1000_0000;

    /// Platform-level interrupt controller
    pub const PLIC_BASE: usize = 0x0c00_0000;
    pub const PLIC_SOURCES: usize = 96;

    const PLIC_ENABLE_BASE: usize = 0x2000;
    const PLIC_ENABLE_STRIDE: usize = 0x80;
    const PLIC_CONTEXT_BASE: usize = 0x20_0000;
    const PLIC_CONTEXT_STRIDE: usize = 0x1000;

    /// Timebase frequency in Hz (10 MHz on QEMU virt with OpenSBI)
    pub const TIMEBASE_HZ: u64 = 10_000_000;

    /// SBI v0.2 TIME extension ('TIME') and its set_timer function
    pub const SBI_EID_TIME: usize = 0x5449_4D45;
    pub const SBI_FID_SET_TIMER: usize = 0;

    /// PLIC context of a hart's S-mode (M-mode contexts are the even ones).
    #[inline]
    pub const fn plic_s_context(hart_id: usize) -> usize {
        2 * hart_id + 1
    }

    /// Address of a source's priority register. Source 0 does not exist.
    #[inline]
    pub const fn plic_priority(source: usize) -> usize {
        PLIC_BASE + 4 * source
    }

    /// Address of the enable word covering sources `32*word .. 32*word+31`.
    #[inline]
    pub const fn plic_enable(context: usize, word: usize) -> usize {
        PLIC_BASE + PLIC_ENABLE_BASE + context * PLIC_ENABLE_STRIDE + 4 * word
    }

    #[inline]
    pub const fn plic_threshold(context: usize) -> usize {
        PLIC_BASE + PLIC_CONTEXT_BASE + context * PLIC_CONTEXT_STRIDE
    }

}
