//! Boot arguments.
//!
//! The argument string is fixed at build time (`BOOT_ARGS`, forwarded by
//! `build.rs`) since nothing can be read from a device tree before the
//! console is up. Format: whitespace separated `key=value` pairs.
//! Unknown keys are skipped and bad values keep their default.

use core::ops::RangeInclusive;

use crate::level::LogLevel;

pub const DEFAULT_VBLANK_HZ: u32 = 60;
pub const VBLANK_HZ_RANGE: RangeInclusive<u32> = 1..=1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BootArgs {
    pub log_level: LogLevel,
    pub vblank_hz: u32,
}

impl Default for BootArgs {
    fn default() -> Self {
        BootArgs {
            log_level: LogLevel::Info,
            vblank_hz: DEFAULT_VBLANK_HZ,
        }
    }
}

impl BootArgs {
    pub fn parse(s: &str) -> Self {
        let mut args = BootArgs::default();
        for param in s.split_whitespace() {
            if let Some(v) = param.strip_prefix("loglevel=") {
                if let Some(level) = LogLevel::parse(v) {
                    args.log_level = level;
                }
            } else if let Some(v) = param.strip_prefix("vblank_hz=") {
                match v.parse::<u32>() {
                    Ok(hz) if VBLANK_HZ_RANGE.contains(&hz) => args.vblank_hz = hz,
                    _ => {}
                }
            }
        }
        args
    }
}

/// Timer ticks between two vblank interrupts.
pub const fn vblank_interval(timebase_hz: u64, vblank_hz: u32) -> u64 {
    let hz = if vblank_hz == 0 { 1 } else { vblank_hz as u64 };
    timebase_hz / hz
}
