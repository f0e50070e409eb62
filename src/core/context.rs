// This module implements EmitContext, the pointer-tracking emitter at the heart of tapegen.
// The target machine has no direct addressing: the only way to reach a cell is to step the
// pointer one cell at a time. EmitContext therefore keeps, at code-generation time, the
// address the machine's pointer will hold when the emitted code runs, and every primitive
// (print, input, zero, add, move) first relocates to its operand through `goto`, which emits
// the exact number of `>` or `<` needed and updates the tracked pointer. Variables are bound
// by name to single-cell segments from the SegmentAllocator; scope frames group declarations
// so that popping a frame releases their cells for reuse. EmitStats accumulates counters for
// the driver's `--stats` output, following the session statistics pattern.

//! Emission context: pointer tracking, variable bindings and scopes.
//!
//! ```
//! use tapegen::EmitContext;
//!
//! let mut ctx = EmitContext::new();
//! ctx.new_var("a")?;
//! ctx.new_var("b")?;
//! ctx.add(2, "b")?;
//! ctx.move_value("b", "a")?;
//! assert_eq!(ctx.code(), ">++[<+>-]<");
//! assert_eq!(ctx.pointer(), 0);
//! # Ok::<(), tapegen::EmitError>(())
//! ```

use std::fmt;

use hashbrown::HashMap;

use super::allocator::{CellAddress, SegmentAllocator, SegmentHandle};
use super::error::{AllocError, EmitError, EmitResult};
use super::scope::ScopeStack;
use crate::tape::{Instruction, MachineConfig, Program};

/// Emission statistics.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmitStats {
    /// Variables declared over the context's lifetime.
    pub variables_declared: usize,
    /// Scope frames pushed.
    pub scopes_opened: usize,
    /// Scope frames popped.
    pub scopes_closed: usize,
    /// Relocations that emitted at least one move.
    pub relocations: usize,
    /// Total `>` and `<` symbols emitted.
    pub pointer_moves: usize,
    /// Total `+` and `-` symbols emitted.
    pub cell_adjustments: usize,
    /// Loops opened by `zero` and `move`.
    pub loops: usize,
    /// `.` and `,` symbols emitted.
    pub io_operations: usize,
    /// Highest number of tape cells in use at once.
    pub peak_cells: usize,
}

impl fmt::Display for EmitStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Emission Statistics:")?;
        writeln!(f, "  Variables declared: {}", self.variables_declared)?;
        writeln!(
            f,
            "  Scopes opened/closed: {}/{}",
            self.scopes_opened, self.scopes_closed
        )?;
        writeln!(
            f,
            "  Pointer moves: {} over {} relocations",
            self.pointer_moves, self.relocations
        )?;
        writeln!(f, "  Cell adjustments: {}", self.cell_adjustments)?;
        writeln!(f, "  Loops: {}", self.loops)?;
        writeln!(f, "  I/O operations: {}", self.io_operations)?;
        write!(f, "  Peak cells: {}", self.peak_cells)
    }
}

/// Code generation state for one emitted program.
#[derive(Debug)]
pub struct EmitContext {
    config: MachineConfig,
    allocator: SegmentAllocator,
    scopes: ScopeStack,
    /// Declared variable names and their single-cell segments.
    bindings: HashMap<String, SegmentHandle>,
    program: Program,
    /// Address the machine pointer will hold at the current end of `program`.
    pointer: isize,
    stats: EmitStats,
}

impl EmitContext {
    /// Context for the default (unbounded cell) machine.
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    pub fn with_config(config: MachineConfig) -> Self {
        Self {
            config,
            allocator: SegmentAllocator::new(),
            scopes: ScopeStack::new(),
            bindings: HashMap::new(),
            program: Program::new(),
            pointer: 0,
            stats: EmitStats::default(),
        }
    }

    /// Declare `name` in the innermost scope, backed by one fresh cell.
    pub fn new_var(&mut self, name: &str) -> EmitResult<SegmentHandle> {
        if self.bindings.contains_key(name) {
            return Err(EmitError::DuplicateDeclaration {
                name: name.to_owned(),
            });
        }

        let handle = self.allocator.alloc(1)?;
        self.bindings.insert(name.to_owned(), handle);
        self.scopes.record(handle);

        self.stats.variables_declared += 1;
        self.stats.peak_cells = self.stats.peak_cells.max(self.allocator.cells_in_use());
        log::debug!(
            "declared {name} as {handle} at depth {}",
            self.scopes.depth()
        );
        Ok(handle)
    }

    /// Open a new scope frame.
    pub fn push_scope(&mut self) {
        self.scopes.push();
        self.stats.scopes_opened += 1;
        log::debug!("push scope -> depth {}", self.scopes.depth());
    }

    /// Close the innermost scope, releasing every variable declared in it.
    pub fn pop_scope(&mut self) -> EmitResult<()> {
        let frame = self.scopes.pop().ok_or(EmitError::PopRootScope)?;

        self.bindings.retain(|_, handle| !frame.contains(handle));
        for &handle in &frame {
            self.allocator.dealloc(handle)?;
        }

        self.stats.scopes_closed += 1;
        log::debug!(
            "pop scope: released {} variable(s), depth {}",
            frame.len(),
            self.scopes.depth()
        );
        Ok(())
    }

    /// Output the value of `dest`.
    pub fn print(&mut self, dest: &str) -> EmitResult<()> {
        self.goto(dest)?;
        self.program.push(Instruction::Output);
        self.stats.io_operations += 1;
        log::trace!("print {dest}");
        Ok(())
    }

    /// Read one input value into `dest`.
    pub fn input(&mut self, dest: &str) -> EmitResult<()> {
        self.goto(dest)?;
        self.program.push(Instruction::Input);
        self.stats.io_operations += 1;
        log::trace!("input {dest}");
        Ok(())
    }

    /// Clear `dest` with `[-]`.
    pub fn zero(&mut self, dest: &str) -> EmitResult<()> {
        self.goto(dest)?;
        self.program.push(Instruction::LoopStart);
        self.program.push(Instruction::Decrement);
        self.program.push(Instruction::LoopEnd);
        self.stats.loops += 1;
        self.stats.cell_adjustments += 1;
        log::trace!("zero {dest}");
        Ok(())
    }

    /// Add the constant `value` to `dest`.
    ///
    /// The pointer is relocated to `dest` even when nothing is added.
    pub fn add(&mut self, value: i64, dest: &str) -> EmitResult<()> {
        self.goto(dest)?;

        let value = self.config.cell_width.normalize(value);
        let count = value.unsigned_abs() as usize;
        let symbol = if value < 0 {
            Instruction::Decrement
        } else {
            Instruction::Increment
        };
        self.program.push_repeated(symbol, count);

        self.stats.cell_adjustments += count;
        log::trace!("add {value} to {dest}");
        Ok(())
    }

    /// Destructively transfer `from` into `to`: `to += from`, `from = 0`.
    ///
    /// The pointer is left on `to`. Both operands are resolved before anything
    /// is emitted.
    pub fn move_value(&mut self, from: &str, to: &str) -> EmitResult<()> {
        self.address_of(from)?;
        self.address_of(to)?;

        self.goto(from)?;
        self.program.push(Instruction::LoopStart);
        self.add(1, to)?;
        self.add(-1, from)?;
        self.program.push(Instruction::LoopEnd);
        self.goto(to)?;

        self.stats.loops += 1;
        log::trace!("move {from} -> {to}");
        Ok(())
    }

    /// Address the machine pointer will hold after the code emitted so far.
    pub fn pointer(&self) -> isize {
        self.pointer
    }

    /// Emitted instructions.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Emitted instructions rendered as symbols.
    pub fn code(&self) -> String {
        self.program.to_string()
    }

    pub fn into_program(self) -> Program {
        self.program
    }

    /// Cell address bound to `name`.
    pub fn address_of(&self, name: &str) -> EmitResult<CellAddress> {
        let handle = *self
            .bindings
            .get(name)
            .ok_or_else(|| EmitError::UnknownVariable {
                name: name.to_owned(),
            })?;
        let segment = self
            .allocator
            .segment(handle)
            .ok_or(AllocError::UnknownHandle { handle })?;
        Ok(segment.start)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of scope frames, root included.
    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }

    pub fn allocator(&self) -> &SegmentAllocator {
        &self.allocator
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn stats(&self) -> &EmitStats {
        &self.stats
    }

    /// Move the pointer onto `name`'s cell. The only place `pointer` changes.
    fn goto(&mut self, name: &str) -> EmitResult<()> {
        let target = self.address_of(name)? as isize;
        let delta = target - self.pointer;

        let symbol = if delta < 0 {
            Instruction::MoveLeft
        } else {
            Instruction::MoveRight
        };
        let steps = delta.unsigned_abs();
        self.program.push_repeated(symbol, steps);
        self.pointer += delta;

        if steps > 0 {
            self.stats.relocations += 1;
            self.stats.pointer_moves += steps;
            log::trace!("goto {name}: {delta:+} -> {}", self.pointer);
        }
        Ok(())
    }
}

impl Default for EmitContext {
    fn default() -> Self {
        Self::new()
    }
}
