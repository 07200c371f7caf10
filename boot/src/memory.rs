//! Raw initialization of linker-described memory.
//!
//! This is the only code on the boot path that writes through pointers
//! derived from link-time symbols. It runs before `.data` and `.bss` are
//! valid, so it must not touch any static itself.

use core::ptr;

/// Half-open byte range `[start, end)` whose bounds come from the linker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub start: *mut u8,
    pub end: *mut u8,
}

impl Region {
    #[inline(always)]
    pub const fn new(start: *mut u8, end: *mut u8) -> Self {
        Region { start, end }
    }

    /// Byte length; an inverted range counts as empty.
    #[inline(always)]
    pub fn len(&self) -> usize {
        (self.end as usize).saturating_sub(self.start as usize)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Copy the `.data` load image into its run-time location.
///
/// Exactly `dst.len()` bytes are read starting at `src`; an empty or
/// inverted destination performs no access at all.
///
/// # Safety
///
/// - `src` must be readable for `dst.len()` bytes.
/// - `dst` must be writable and must not overlap the source image.
/// - Must only be called once, before anything reads `.data`.
#[inline(always)]
pub unsafe fn copy_data(src: *const u8, dst: Region) {
    if dst.is_empty() {
        return;
    }

    let mut from = src;
    let mut to = dst.start;

    // Volatile keeps the loop from being lowered to a `memcpy` call.
    while to < dst.end {
        ptr::write_volatile(to, ptr::read_volatile(from));
        from = from.add(1);
        to = to.add(1);
    }
}

/// Clear the `.bss` range to all-zero bytes.
///
/// # Safety
///
/// - `dst` must be writable.
/// - Must only be called before anything reads `.bss`.
#[inline(always)]
pub unsafe fn zero_bss(dst: Region) {
    if dst.is_empty() {
        return;
    }

    let mut to = dst.start;

    while to < dst.end {
        ptr::write_volatile(to, 0);
        to = to.add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region_of(buf: &mut [u8], from: usize, to: usize) -> Region {
        let base = buf.as_mut_ptr();
        unsafe { Region::new(base.add(from), base.add(to)) }
    }

    #[test]
    fn test_region_len() {
        let mut buf = [0u8; 8];
        assert_eq!(region_of(&mut buf, 0, 8).len(), 8);
        assert_eq!(region_of(&mut buf, 3, 3).len(), 0);
        assert!(region_of(&mut buf, 3, 3).is_empty());
        // inverted bounds are a link-time defect; treat them as empty
        assert_eq!(region_of(&mut buf, 6, 2).len(), 0);
    }

    #[test]
    fn test_copy_reproduces_source_exactly() {
        let src: [u8; 12] = [0x00, 0xff, b'\n', b'\r', 0x7f, 0x01, 0x00, 0x80, b'A', 0x00, 0x1b, 0xfe];
        let mut dst = [0xAAu8; 12];
        unsafe { copy_data(src.as_ptr(), region_of(&mut dst, 0, 12)) };
        assert_eq!(dst, src);
    }

    #[test]
    fn test_copy_stays_inside_destination() {
        let src = [1u8, 2, 3, 4];
        let mut dst = [0xAAu8; 8];
        unsafe { copy_data(src.as_ptr(), region_of(&mut dst, 2, 6)) };
        assert_eq!(dst, [0xAA, 0xAA, 1, 2, 3, 4, 0xAA, 0xAA]);
    }

    #[test]
    fn test_copy_zero_length_writes_nothing() {
        let src = [0x11u8; 4];
        let mut dst = [0x5Au8; 4];
        unsafe { copy_data(src.as_ptr(), region_of(&mut dst, 2, 2)) };
        assert_eq!(dst, [0x5A; 4]);
    }

    #[test]
    fn test_copy_zero_length_never_reads_source() {
        let mut dst = [0x5Au8; 4];
        unsafe { copy_data(core::ptr::null(), region_of(&mut dst, 1, 1)) };
        assert_eq!(dst, [0x5A; 4]);
    }

    #[test]
    fn test_copy_inverted_range_writes_nothing() {
        let src = [0x11u8; 4];
        let mut dst = [0x5Au8; 4];
        unsafe { copy_data(src.as_ptr(), region_of(&mut dst, 3, 1)) };
        assert_eq!(dst, [0x5A; 4]);
    }

    #[test]
    fn test_zero_fill_lengths() {
        for len in [0usize, 1, 2, 7, 64, 4096] {
            let mut buf = vec![0xC3u8; len + 2];
            unsafe { zero_bss(region_of(&mut buf, 1, len + 1)) };
            assert_eq!(buf[0], 0xC3, "len {len}: wrote below range");
            assert!(buf[1..len + 1].iter().all(|&b| b == 0), "len {len}: not zeroed");
            assert_eq!(buf[len + 1], 0xC3, "len {len}: wrote past range");
        }
    }

    #[test]
    fn test_zero_fill_inverted_range_writes_nothing() {
        let mut buf = [0xC3u8; 4];
        unsafe { zero_bss(region_of(&mut buf, 4, 0)) };
        assert_eq!(buf, [0xC3; 4]);
    }
}
