//! Lexical scope frames.
//!
//! Each frame records the segment handles declared while it was innermost, so
//! that popping it releases exactly those declarations. The root frame is
//! created with the stack and can never be popped.

use super::allocator::SegmentHandle;

/// Handles declared within one lexical block.
pub type ScopeFrame = Vec<SegmentHandle>;

/// Stack of scope frames with a permanent root.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    frames: Vec<ScopeFrame>,
}

impl ScopeStack {
    /// Stack holding only the root frame.
    pub fn new() -> Self {
        Self {
            frames: vec![ScopeFrame::new()],
        }
    }

    /// Open a new innermost frame.
    pub fn push(&mut self) {
        self.frames.push(ScopeFrame::new());
    }

    /// Close the innermost frame and hand back its handles.
    ///
    /// Returns `None` when only the root frame remains; the stack is left
    /// untouched in that case.
    pub fn pop(&mut self) -> Option<ScopeFrame> {
        if self.frames.len() <= 1 {
            return None;
        }
        self.frames.pop()
    }

    /// Record `handle` in the innermost frame.
    pub fn record(&mut self, handle: SegmentHandle) {
        if let Some(frame) = self.frames.last_mut() {
            frame.push(handle);
        }
    }

    /// Number of frames, root included.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}
