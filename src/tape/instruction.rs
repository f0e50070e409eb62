// This module defines the instruction set of the target tape machine and the append-only
// buffer that collects emitted code. Instruction enumerates the eight symbols (increment,
// decrement, move right, move left, output, input, loop start, loop end) together with their
// conventional characters `+ - > < . , [ ]`. Program is the ordered instruction sequence the
// emitter grows; callers only get read access, and the only mutators are crate-private
// appends, so emitted code is never truncated or rewritten. Program also provides the
// checks used by tests and the driver: symbol counts, net pointer displacement, and loop
// balance, plus rendering to and reading from the textual symbol form.

//! Tape machine instructions and the emitted program buffer.

use std::fmt;

/// One symbol of the tape machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `+` increment the current cell.
    Increment,
    /// `-` decrement the current cell.
    Decrement,
    /// `>` move the pointer one cell right.
    MoveRight,
    /// `<` move the pointer one cell left.
    MoveLeft,
    /// `.` output the current cell.
    Output,
    /// `,` read input into the current cell.
    Input,
    /// `[` skip past the matching `]` if the current cell is zero.
    LoopStart,
    /// `]` jump back to the matching `[` if the current cell is non-zero.
    LoopEnd,
}

impl Instruction {
    /// All eight instructions in symbol order.
    pub const ALL: [Instruction; 8] = [
        Instruction::Increment,
        Instruction::Decrement,
        Instruction::MoveRight,
        Instruction::MoveLeft,
        Instruction::Output,
        Instruction::Input,
        Instruction::LoopStart,
        Instruction::LoopEnd,
    ];

    /// Conventional character for this instruction.
    pub const fn symbol(self) -> char {
        match self {
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::MoveRight => '>',
            Instruction::MoveLeft => '<',
            Instruction::Output => '.',
            Instruction::Input => ',',
            Instruction::LoopStart => '[',
            Instruction::LoopEnd => ']',
        }
    }

    /// Instruction for a character, if it is one of the eight symbols.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Instruction::Increment),
            '-' => Some(Instruction::Decrement),
            '>' => Some(Instruction::MoveRight),
            '<' => Some(Instruction::MoveLeft),
            '.' => Some(Instruction::Output),
            ',' => Some(Instruction::Input),
            '[' => Some(Instruction::LoopStart),
            ']' => Some(Instruction::LoopEnd),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Ordered, append-only sequence of emitted instructions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a program from its textual form. Any character other than the
    /// eight symbols is treated as a comment.
    pub fn from_symbols(text: &str) -> Self {
        text.chars().filter_map(Instruction::from_symbol).collect()
    }

    pub(crate) fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub(crate) fn push_repeated(&mut self, instruction: Instruction, count: usize) {
        self.instructions
            .extend(std::iter::repeat(instruction).take(count));
    }

    /// Emitted instructions in order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of occurrences of `instruction`.
    pub fn count(&self, instruction: Instruction) -> usize {
        self.instructions
            .iter()
            .filter(|&&i| i == instruction)
            .count()
    }

    /// Right moves minus left moves over the whole program.
    pub fn net_displacement(&self) -> isize {
        self.count(Instruction::MoveRight) as isize - self.count(Instruction::MoveLeft) as isize
    }

    /// Whether every `[` has a matching `]` and loops nest properly.
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0usize;
        for instruction in &self.instructions {
            match instruction {
                Instruction::LoopStart => depth += 1,
                Instruction::LoopEnd => {
                    let Some(next) = depth.checked_sub(1) else {
                        return false;
                    };
                    depth = next;
                }
                _ => {}
            }
        }
        depth == 0
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            write!(f, "{instruction}")?;
        }
        Ok(())
    }
}
