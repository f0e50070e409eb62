//! Tape segment allocation.
//!
//! The [`SegmentAllocator`] hands out contiguous, inclusive ranges of tape cells
//! and reclaims them on release. Placement is first-fit over the gaps between
//! live segments: the first gap (in ascending address order) that can hold the
//! request wins, otherwise the segment is appended after the highest live one.
//! It does not look for the smallest adequate gap.

use std::fmt;

use hashbrown::HashMap;

use super::error::AllocError;

/// Address of a single tape cell.
pub type CellAddress = usize;

/// Opaque identifier for a live segment.
///
/// Handles are issued from a monotonic counter and never reissued, even after
/// the segment they named has been released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentHandle(u32);

impl fmt::Display for SegmentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Inclusive range of cells `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment {
    pub start: CellAddress,
    pub end: CellAddress,
}

impl Segment {
    /// Segment of `size` cells beginning at `start`. `size` must be non-zero.
    pub(crate) const fn new(start: CellAddress, size: usize) -> Self {
        Self {
            start,
            end: start + size - 1,
        }
    }

    /// Number of cells covered.
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether two segments share at least one cell.
    pub const fn overlaps(&self, other: &Segment) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// First-fit allocator over a linear tape.
#[derive(Debug, Default)]
pub struct SegmentAllocator {
    /// Live segments by handle.
    segments: HashMap<SegmentHandle, Segment>,
    /// Next handle to issue.
    next_handle: u32,
}

impl SegmentAllocator {
    /// Create an allocator with no live segments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate `size` contiguous cells and return the handle of the new segment.
    pub fn alloc(&mut self, size: usize) -> Result<SegmentHandle, AllocError> {
        if size == 0 {
            return Err(AllocError::ZeroSize);
        }

        let start = self.find_start(size);
        let handle = self.issue_handle();
        let segment = Segment::new(start, size);
        self.segments.insert(handle, segment);

        log::debug!("alloc {handle}: {size} cell(s) at {segment}");
        Ok(handle)
    }

    /// Release the segment behind `handle`.
    pub fn dealloc(&mut self, handle: SegmentHandle) -> Result<(), AllocError> {
        let segment = self
            .segments
            .remove(&handle)
            .ok_or(AllocError::UnknownHandle { handle })?;

        log::debug!("dealloc {handle}: {segment}");
        Ok(())
    }

    /// Live segments ordered by ascending start address.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments: Vec<Segment> = self.segments.values().copied().collect();
        segments.sort_unstable();
        segments
    }

    /// Segment behind a live handle.
    pub fn segment(&self, handle: SegmentHandle) -> Option<Segment> {
        self.segments.get(&handle).copied()
    }

    /// Whether `handle` currently names a segment.
    pub fn is_live(&self, handle: SegmentHandle) -> bool {
        self.segments.contains_key(&handle)
    }

    /// Number of live segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no segment is live.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total cells covered by live segments.
    pub fn cells_in_use(&self) -> usize {
        self.segments.values().map(Segment::len).sum()
    }

    /// One past the highest live cell, or 0 when nothing is allocated.
    pub fn high_water(&self) -> CellAddress {
        self.segments.values().map(|s| s.end + 1).max().unwrap_or(0)
    }

    fn issue_handle(&mut self) -> SegmentHandle {
        let handle = SegmentHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    fn find_start(&self, size: usize) -> CellAddress {
        let sorted = self.segments();
        let Some(last) = sorted.last() else {
            return 0;
        };

        // Gaps are only considered between live segments, never before the first one.
        for pair in sorted.windows(2) {
            let (earlier, later) = (pair[0], pair[1]);
            let gap = later.start - earlier.end - 1;
            if gap >= size {
                log::trace!("reusing {gap}-cell gap after {earlier} for {size} cell(s)");
                return earlier.end + 1;
            }
        }

        last.end + 1
    }
}
