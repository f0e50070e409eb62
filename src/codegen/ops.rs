//! Abstract tape-machine operations.

/// One operation of the input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Declare a single-cell variable in the current block.
    Declare(String),
    /// Output a variable.
    Print(String),
    /// Read input into a variable.
    Read(String),
    /// Set a variable to zero.
    Zero(String),
    /// Add a constant to a variable.
    Add { value: i64, dest: String },
    /// Destructive transfer: `to += from`, `from = 0`.
    Move { from: String, to: String },
    /// Scoped block; its declarations are released when it ends.
    Block(Vec<Op>),
}

impl Op {
    pub fn declare(name: impl Into<String>) -> Self {
        Op::Declare(name.into())
    }

    pub fn print(name: impl Into<String>) -> Self {
        Op::Print(name.into())
    }

    pub fn read(name: impl Into<String>) -> Self {
        Op::Read(name.into())
    }

    pub fn zero(name: impl Into<String>) -> Self {
        Op::Zero(name.into())
    }

    pub fn add(value: i64, dest: impl Into<String>) -> Self {
        Op::Add {
            value,
            dest: dest.into(),
        }
    }

    pub fn move_value(from: impl Into<String>, to: impl Into<String>) -> Self {
        Op::Move {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn block(ops: impl IntoIterator<Item = Op>) -> Self {
        Op::Block(ops.into_iter().collect())
    }
}
