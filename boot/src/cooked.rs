//! Cooked console output: `\n` goes out as `\r\n`.

/// Single-character output primitive supplied by the platform.
pub trait CharSink {
    fn put_char(&mut self, c: u8);
}

impl<F: FnMut(u8)> CharSink for F {
    #[inline]
    fn put_char(&mut self, c: u8) {
        self(c)
    }
}

/// Forward every byte of `bytes` to `sink`, inserting `\r` before each `\n`.
///
/// The whole slice is consumed; zero bytes are ordinary data.
pub fn write_cooked<S: CharSink + ?Sized>(sink: &mut S, bytes: &[u8]) {
    for &b in bytes {
        if b == b'\n' {
            sink.put_char(b'\r');
        }
        sink.put_char(b);
    }
}

/// Raw-pointer form of [`write_cooked`] for callers across the C ABI.
///
/// # Safety
///
/// `s` must be readable for `len` bytes. It may be null only if `len` is 0.
pub unsafe fn write_cooked_raw<S: CharSink + ?Sized>(sink: &mut S, s: *const u8, len: usize) {
    if len == 0 {
        return;
    }
    write_cooked(sink, core::slice::from_raw_parts(s, len));
}
