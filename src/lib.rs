//! tapegen - code generation for an eight-symbol tape machine.
//!
//! Lowers a small set of abstract operations (declare, print, read, zero,
//! add a constant, destructive move, scoped blocks) into `+ - > < . , [ ]`
//! code. The target machine can only step its pointer one cell at a time, so
//! the emitter tracks where the pointer will be and emits the exact number of
//! moves to reach each operand.
//!
//! # Primary Usage
//!
//! ```
//! use tapegen::{compile, demo_program, MachineConfig};
//!
//! let program = compile(&demo_program(), MachineConfig::default())?;
//! assert_eq!(
//!     program.to_string(),
//!     "[-]++++++++++>[-]++++++++++++++++++++[<+>-]<[>+<-]>"
//! );
//! # Ok::<(), tapegen::EmitError>(())
//! ```
//!
//! # Architecture
//!
//! - [`core`] - segment allocator, scopes and the pointer-tracking emitter
//! - [`tape`] - instruction set, program buffer and machine configuration
//! - [`codegen`] - lowering of [`Op`] sequences through the emitter

pub mod codegen;
pub mod core;
pub mod tape;

pub use crate::core::{
    AllocError, CellAddress, ConfigError, EmitContext, EmitError, EmitResult, EmitStats, Segment,
    SegmentAllocator, SegmentHandle,
};
pub use codegen::{compile, demo_program, lower, Op};
pub use tape::{CellBits, CellWidth, Instruction, MachineConfig, Program};
