//! A single fixed-capacity block in an arena's region chain.

use crate::UNIT_SIZE;

/// One block of arena storage.
///
/// `count` and `capacity` are measured in units of [`UNIT_SIZE`] bytes.
/// The storage is obtained once at creation time and never resized.
///
/// # Invariant
///
/// `count <= capacity`, and `capacity * UNIT_SIZE <= data.len()`.
#[derive(Debug)]
pub struct Region {
    data: Box<[u8]>,
    count: usize,
    capacity: usize,
}

impl Region {
    /// Wrap a backend block. Trailing bytes that do not fill a whole unit
    /// are not addressable.
    pub(crate) fn new(data: Box<[u8]>) -> Self {
        let capacity = data.len() / UNIT_SIZE;
        Self {
            data,
            count: 0,
            capacity,
        }
    }

    /// Units currently occupied.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Units available in total.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if `units` more units fit behind the current offset.
    #[inline]
    pub fn fits(&self, units: usize) -> bool {
        self.count + units <= self.capacity
    }

    /// Occupy `units` units and return the byte offset of the first one.
    pub(crate) fn bump(&mut self, units: usize) -> usize {
        debug_assert!(self.fits(units), "bump past region capacity");
        let offset = self.count * UNIT_SIZE;
        self.count += units;
        offset
    }

    /// Roll the used-count back to `count` units.
    pub(crate) fn rewind_to(&mut self, count: usize) {
        debug_assert!(count <= self.capacity);
        self.count = count;
    }

    pub(crate) fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub(crate) fn into_data(self) -> Box<[u8]> {
        self.data
    }
}
