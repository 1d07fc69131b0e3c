/// This module handles operation codes for the vm.
/// It's the byte representation of code for the VM to execute.
use crate::{constants::MAX_CALL_ARITY, value::Value};

#[derive(Debug)]
/// Error thrown when an invalid opcode byte gets decoded.
pub enum ChunkError {
    InvalidOpCode(u8),
}

/// `#[repr(u8)]` tells that each `OpCode` variant takes only one byte,
/// consistently across all platforms.
///
/// `OpCall0`..`OpCall8` form a contiguous family indexed by argument count:
/// a call with N arguments is encoded as `OpCall0 as u8 + N`, rather than a
/// single opcode plus an operand byte. `MAX_CALL_ARITY` bounds N.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpCode {
    OpReturn = 0,
    /// Reads a constant from the constant pool and pushes it on the stack.
    OpConstant = 1,
    /// Negates the top of the stack. Only valid for numbers.
    OpNegate = 2,
    /// Pops two values, adds them, pushes the result. Numbers and strings.
    OpAdd = 3,
    /// Pops two values, subtracts them, pushes the result. Numbers only.
    OpSubtract = 4,
    /// Pops two values, multiplies them, pushes the result. Numbers only.
    OpMultiply = 5,
    /// Pops two values, divides them, pushes the result. Numbers only.
    OpDivide = 6,
    /// Pushes the `Null` value onto the stack.
    OpNull = 7,
    /// Inverts a truthy value.
    OpNot = 8,
    /// Pops two values, pushes whether they're equal.
    OpEqual = 9,
    /// Pops two values, pushes whether the first is greater than the second.
    OpGreater = 10,
    /// Pops two values, pushes whether the first is less than the second.
    OpLess = 11,
    /// Pops the top of the stack and discards it.
    OpPop = 12,
    /// Reads a name constant and a value from the stack, inserts both into `globals`.
    OpDefineGlobal = 13,
    /// Reads a name constant, looks the value up in `globals`.
    OpGetGlobal = 14,
    /// Reads a name constant, stores the top of the stack under that name in `globals`.
    OpSetGlobal = 15,
    /// Reads a one-byte local slot index, pushes the local's value.
    OpGetLocal = 16,
    /// Reads a one-byte local slot index, stores the top of the stack there.
    OpSetLocal = 17,
    /// Reads a two-byte forward offset, jumps unconditionally.
    OpJump = 18,
    /// Reads a two-byte forward offset, jumps if the top of the stack is falsey.
    OpJumpIfFalse = 19,
    /// Reads a two-byte backward offset, jumps back (loop).
    OpLoop = 20,
    OpCall0 = 21,
    OpCall1 = 22,
    OpCall2 = 23,
    OpCall3 = 24,
    OpCall4 = 25,
    OpCall5 = 26,
    OpCall6 = 27,
    OpCall7 = 28,
    OpCall8 = 29,
}

impl OpCode {
    /// Returns the `OpCall` opcode for `arg_count` arguments, or `None` if
    /// `arg_count` exceeds `MAX_CALL_ARITY`.
    pub fn call_opcode(arg_count: u8) -> Option<Self> {
        if arg_count > MAX_CALL_ARITY {
            return None;
        }
        Self::try_from(Self::OpCall0 as u8 + arg_count).ok()
    }

    /// The argument count encoded by a `OpCall0..=OpCall8` opcode.
    pub fn call_arity(self) -> Option<u8> {
        let byte = self as u8;
        let base = Self::OpCall0 as u8;
        if (base..=base + MAX_CALL_ARITY).contains(&byte) {
            Some(byte - base)
        } else {
            None
        }
    }
}

/// We need to convert `u8` to `OpCode`. Implementing `TryFrom` makes sense
/// because a `u8` can have a value for which no `OpCode` exists.
impl TryFrom<u8> for OpCode {
    type Error = ChunkError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::OpReturn),
            1 => Ok(Self::OpConstant),
            2 => Ok(Self::OpNegate),
            3 => Ok(Self::OpAdd),
            4 => Ok(Self::OpSubtract),
            5 => Ok(Self::OpMultiply),
            6 => Ok(Self::OpDivide),
            7 => Ok(Self::OpNull),
            8 => Ok(Self::OpNot),
            9 => Ok(Self::OpEqual),
            10 => Ok(Self::OpGreater),
            11 => Ok(Self::OpLess),
            12 => Ok(Self::OpPop),
            13 => Ok(Self::OpDefineGlobal),
            14 => Ok(Self::OpGetGlobal),
            15 => Ok(Self::OpSetGlobal),
            16 => Ok(Self::OpGetLocal),
            17 => Ok(Self::OpSetLocal),
            18 => Ok(Self::OpJump),
            19 => Ok(Self::OpJumpIfFalse),
            20 => Ok(Self::OpLoop),
            21 => Ok(Self::OpCall0),
            22 => Ok(Self::OpCall1),
            23 => Ok(Self::OpCall2),
            24 => Ok(Self::OpCall3),
            25 => Ok(Self::OpCall4),
            26 => Ok(Self::OpCall5),
            27 => Ok(Self::OpCall6),
            28 => Ok(Self::OpCall7),
            29 => Ok(Self::OpCall8),
            _ => Err(ChunkError::InvalidOpCode(value)),
        }
    }
}

/// A data structure to hold a series of bytes: instructions, their inline
/// operands, a parallel line table, and the function's constant pool.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// Code stored on a chunk. It's the read-only part executed by the VM.
    pub code: Vec<u8>,
    /// List of constants defined in the code.
    pub constants: Vec<Value>,
    /// Line number of each code byte being written. `lines.len() == code.len()` always.
    pub lines: Vec<i32>,
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunk {
    /// Returns a fresh, empty `Chunk`.
    pub fn new() -> Self {
        Self {
            code: vec![],
            constants: vec![],
            lines: vec![],
        }
    }

    /// Appends a byte to the code vector, alongside its source line number.
    pub fn write_chunk(&mut self, byte: u8, line: i32) {
        self.code.push(byte);
        self.lines.push(line);
    }

    /// Adds a constant to the constant pool. Returns the index it now occupies.
    pub fn add_constant(&mut self, value: Value) -> usize {
        self.constants.push(value);
        self.constants.len() - 1
    }
}
