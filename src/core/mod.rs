// This module is the hub for tapegen's code generation core. It exports the two coupled
// subsystems: the segment allocator (first-fit placement of contiguous cell ranges behind
// monotonically issued handles) and the emission context (pointer tracking, name bindings
// and lexical scopes on top of the allocator). Scope frames and the error enums live in
// their own modules. The allocator is the leaf; the context owns one allocator and is the
// only writer of the instruction buffer.

//! Core code generation infrastructure.
//!
//! # Key Components
//!
//! ## Segment Allocation (`allocator`)
//! - First-fit placement with gap reuse
//! - Handles are never reissued
//!
//! ## Emission (`context`)
//! - Tracks the machine pointer while emitting
//! - Binds variable names to cells and releases them per scope
//!
//! ## Scopes (`scope`)
//! - Frame stack with a permanent root

pub mod allocator;
pub mod context;
pub mod error;
pub mod scope;
pub mod test_utils;

pub use allocator::{CellAddress, Segment, SegmentAllocator, SegmentHandle};
pub use context::{EmitContext, EmitStats};
pub use error::{AllocError, ConfigError, EmitError, EmitResult};
pub use scope::{ScopeFrame, ScopeStack};
