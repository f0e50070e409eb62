//! Target tape machine support.
//!
//! - `instruction` - the eight-symbol instruction set and the emitted program buffer
//! - `machine` - cell width configuration

pub mod instruction;
pub mod machine;

pub use instruction::{Instruction, Program};
pub use machine::{CellBits, CellWidth, MachineConfig, MAX_CELL_BITS};
