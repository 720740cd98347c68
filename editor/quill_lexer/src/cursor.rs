//! Byte cursor over a borrowed source buffer.
//!
//! Reads past the end of the buffer return `0x00` instead of faulting, so
//! scanning loops can test the current byte without a separate bounds check.
//! A `0x00` inside the buffer is an ordinary (invalid) byte; use
//! [`Cursor::is_eof`] to tell the two apart.

/// Cursor over a caller-owned byte buffer.
///
/// The cursor is [`Copy`], so a scanner can take cheap snapshots of it.
///
/// # Invariant
///
/// `pos <= buf.len()`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf.get(self.pos).copied().unwrap_or(0)
    }

    /// Returns the byte one position ahead, or `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf.get(self.pos + 1).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    ///
    /// # Contract
    ///
    /// Must not be called at EOF. Scanning logic checks [`is_eof`](Self::is_eof)
    /// first; advancing past the end is a scanner defect, not an input error.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(
            self.pos < self.buf.len(),
            "cursor advanced past end of content ({} >= {})",
            self.pos,
            self.buf.len()
        );
        self.pos += 1;
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the whole buffer.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.buf.len()
    }

    /// Bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Returns `true` if the unconsumed input begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Extract `start..end` from the buffer.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        debug_assert!(
            end <= self.buf.len(),
            "slice end {end} exceeds source length {}",
            self.buf.len()
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start..end]
    }

    /// Extract from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Distance to the next `byte`, or to EOF if there is none.
    ///
    /// SIMD-accelerated via `memchr`. Does not move the cursor.
    #[inline]
    pub fn distance_to(&self, byte: u8) -> usize {
        let rest = self.remaining();
        memchr::memchr(byte, rest).unwrap_or(rest.len())
    }

    /// Distance to the nearest of `a` or `b`, or to EOF.
    #[inline]
    pub fn distance_to2(&self, a: u8, b: u8) -> usize {
        let rest = self.remaining();
        memchr::memchr2(a, b, rest).unwrap_or(rest.len())
    }

    /// Distance to the nearest of `a`, `b` or `c`, or to EOF.
    #[inline]
    pub fn distance_to3(&self, a: u8, b: u8, c: u8) -> usize {
        let rest = self.remaining();
        memchr::memchr3(a, b, c, rest).unwrap_or(rest.len())
    }
}
