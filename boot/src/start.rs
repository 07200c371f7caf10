//! The reset sequence after `sp` is set.
//!
//! Order is fixed: `.data` copy, `.bss` zero, bring-up, handoff. The caller
//! parks the hart once [`run`] returns, which only happens if the
//! application's entry point returned.

use crate::memory::{self, Region};

/// Linker-resolved ranges the sequence initializes.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    /// Load address of the `.data` image.
    pub data_image: *const u8,
    pub data: Region,
    pub bss: Region,
}

/// Steps after memory init; statics are valid by the time they run.
pub trait Startup {
    fn bring_up(&mut self);
    /// Application entry point. Normally never returns.
    fn handoff(&mut self);
}

/// Initialize memory, bring the hardware up, then hand off.
///
/// # Safety
///
/// The ranges in `layout` must satisfy [`memory::copy_data`] and
/// [`memory::zero_bss`]. Must run once, on the boot stack, before any
/// static is read.
pub unsafe fn run<S: Startup + ?Sized>(layout: &Layout, startup: &mut S) {
    memory::copy_data(layout.data_image, layout.data);
    memory::zero_bss(layout.bss);
    startup.bring_up();
    startup.handoff();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Event {
        BringUp { data: std::vec::Vec<u8>, bss: std::vec::Vec<u8> },
        Handoff,
    }

    /// Records steps plus the memory image seen by bring-up.
    struct Recorder {
        data: *const u8,
        data_len: usize,
        bss: *const u8,
        bss_len: usize,
        events: std::vec::Vec<Event>,
    }

    impl Startup for Recorder {
        fn bring_up(&mut self) {
            let (data, bss) = unsafe {
                (
                    core::slice::from_raw_parts(self.data, self.data_len).to_vec(),
                    core::slice::from_raw_parts(self.bss, self.bss_len).to_vec(),
                )
            };
            self.events.push(Event::BringUp { data, bss });
        }
        fn handoff(&mut self) {
            self.events.push(Event::Handoff);
        }
    }

    /// RAM laid out like `memory.ld`: `.data` then `.bss`.
    fn layout(image: &[u8], ram: &mut [u8], data_len: usize) -> Layout {
        let base = ram.as_mut_ptr();
        unsafe {
            Layout {
                data_image: image.as_ptr(),
                data: Region::new(base, base.add(data_len)),
                bss: Region::new(base.add(data_len), base.add(ram.len())),
            }
        }
    }

    fn recorder(layout: &Layout) -> Recorder {
        Recorder {
            data: layout.data.start,
            data_len: layout.data.len(),
            bss: layout.bss.start,
            bss_len: layout.bss.len(),
            events: std::vec::Vec::new(),
        }
    }

    #[test]
    fn test_memory_ready_before_bring_up_then_single_handoff() {
        let image = [0x12u8, 0x00, 0x34, b'\n'];
        let mut ram = [0xEEu8; 10];
        let layout = layout(&image, &mut ram, 4);
        let mut rec = recorder(&layout);

        unsafe { run(&layout, &mut rec) };

        assert_eq!(
            rec.events,
            [
                Event::BringUp {
                    data: vec![0x12, 0x00, 0x34, b'\n'],
                    bss: vec![0; 6],
                },
                Event::Handoff,
            ]
        );
    }

    #[test]
    fn test_empty_data_still_zeroes_bss() {
        let mut ram = [0xEEu8; 5];
        let layout = layout(&[], &mut ram, 0);
        let mut rec = recorder(&layout);

        unsafe { run(&layout, &mut rec) };

        assert_eq!(rec.events.len(), 2);
        assert_eq!(
            rec.events[0],
            Event::BringUp { data: vec![], bss: vec![0; 5] }
        );
        assert_eq!(rec.events[1], Event::Handoff);
    }

    #[test]
    fn test_empty_regions_touch_nothing() {
        let image = [0x55u8; 2];
        let mut ram = [0xEEu8; 4];
        let base = ram.as_mut_ptr();
        let layout = unsafe {
            Layout {
                data_image: image.as_ptr(),
                data: Region::new(base.add(2), base.add(2)),
                bss: Region::new(base.add(2), base.add(2)),
            }
        };
        let mut rec = recorder(&layout);

        unsafe { run(&layout, &mut rec) };

        assert_eq!(ram, [0xEE; 4]);
        assert_eq!(rec.events.last(), Some(&Event::Handoff));
    }

    #[test]
    fn test_bss_zeroed_after_data_copy() {
        // Overlapping ranges expose the order: zeroing must win.
        let image = [0xAAu8; 4];
        let mut ram = [0xEEu8; 4];
        let base = ram.as_mut_ptr();
        let layout = unsafe {
            Layout {
                data_image: image.as_ptr(),
                data: Region::new(base, base.add(4)),
                bss: Region::new(base.add(2), base.add(4)),
            }
        };
        let mut rec = recorder(&layout);

        unsafe { run(&layout, &mut rec) };

        assert_eq!(ram, [0xAA, 0xAA, 0, 0]);
    }
}
