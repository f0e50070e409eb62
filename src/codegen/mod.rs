//! Lowering of operation sequences into tape machine code.
//!
//! [`lower`] feeds [`Op`]s into an existing [`EmitContext`]; [`compile`] does
//! the same on a fresh context and returns the finished [`Program`]. Blocks
//! push a scope frame before their body and pop it afterwards.

pub mod ops;

pub use ops::Op;

use crate::core::{EmitContext, EmitResult};
use crate::tape::{MachineConfig, Program};

/// Emit `ops` into `ctx` in order, stopping at the first error.
pub fn lower(ctx: &mut EmitContext, ops: &[Op]) -> EmitResult<()> {
    for op in ops {
        match op {
            Op::Declare(name) => {
                ctx.new_var(name)?;
            }
            Op::Print(name) => ctx.print(name)?,
            Op::Read(name) => ctx.input(name)?,
            Op::Zero(name) => ctx.zero(name)?,
            Op::Add { value, dest } => ctx.add(*value, dest)?,
            Op::Move { from, to } => ctx.move_value(from, to)?,
            Op::Block(body) => {
                ctx.push_scope();
                lower(ctx, body)?;
                ctx.pop_scope()?;
            }
        }
    }
    Ok(())
}

/// Compile `ops` for a machine described by `config`.
pub fn compile(ops: &[Op], config: MachineConfig) -> EmitResult<Program> {
    let mut ctx = EmitContext::with_config(config);
    lower(&mut ctx, ops)?;
    log::debug!(
        "compiled {} op(s) into {} instruction(s)",
        ops.len(),
        ctx.program().len()
    );
    Ok(ctx.into_program())
}

/// Sample sequence: set `a` to 10 and `b` to 20, then move `b` into `a`
/// and `a` back into `b`, leaving 30 in `b`.
pub fn demo_program() -> Vec<Op> {
    vec![
        Op::declare("a"),
        Op::declare("b"),
        Op::zero("a"),
        Op::add(10, "a"),
        Op::zero("b"),
        Op::add(20, "b"),
        Op::move_value("b", "a"),
        Op::move_value("a", "b"),
    ]
}
