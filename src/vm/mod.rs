/// This module handles all the stuff a VM is supposed to do
/// It takes source code, compiles it, gets bytecode (stored in chunk) from compiler
/// and then execute that bytecode
mod call_frame;
mod debug;
pub mod errors;
mod functions;
mod garbage_collection;
mod native;
mod operations;
mod variables;

use std::collections::HashMap;

use crate::{
    chunk::OpCode,
    compiler::CompilationContext,
    constants::FRAMES_MAX,
    value::{Value, objects::ObjectNode},
    vm::{
        call_frame::CallFrame,
        errors::VMError,
        native::{clock_native, println},
    },
};

#[cfg(test)]
mod tests;

/// Data structure to handle a stack based virtual machine
pub struct VM {
    /// Stack to handle variables. Fixed stack size for simplicity, but has some limitations
    pub stack: Vec<Value>,
    /// A linked list to track Objects stored on heap, mainly used for garbage collection. Linked list is not the best data structure used for garbage collection. Just keeping it simple for now.
    pub objects: ObjectNode,
    /// A Datastructure, also known as `HashTable`, to store global variables for faster insertion and lookup.
    globals: HashMap<String, Value>,
    pub frames: Vec<CallFrame>,
}

impl Default for VM {
    fn default() -> Self {
        Self::new()
    }
}

impl VM {
    /// Returns a new instance of the VM
    #[must_use]
    pub fn new() -> Self {
        Self {
            // All values should be nil/empty by default
            stack: Vec::new(),
            // No objects when vm is initialized
            objects: None,
            // No global variables when vm is initialized.
            globals: HashMap::new(),
            frames: Vec::with_capacity(FRAMES_MAX),
        }
    }

    /// Defines the native globals and runs whatever is already loaded into
    /// `self.frames`/`self.stack` (see `interpret_source`, which sets both
    /// up from source text).
    ///
    /// # Errors
    ///
    /// Returns `VMError` if there's any runtime error
    pub fn interpret(&mut self) -> Result<(), VMError> {
        self.define_native("clock", clock_native)?;
        self.define_native("println", println)?;
        self.run()
    }

    /// Compiles `source` and runs it to completion: the same
    /// compile-then-call-then-run sequence the teacher's REPL driver used,
    /// minus the line-editing loop around it. The compiler borrows this
    /// VM's own value stack for the duration of the compile
    /// (`CompilationContext::with_vm_stack`), so a constant being interned
    /// is rooted against the one real stack a collector would trace, not a
    /// stand-in.
    ///
    /// # Errors
    ///
    /// Returns `VMError::CompileError` if compilation recorded any
    /// diagnostics, or a runtime error from execution otherwise.
    pub fn interpret_source(&mut self, source: &str) -> Result<(), VMError> {
        let function = {
            let mut context = CompilationContext::with_vm_stack(source, &mut self.stack);
            context.compile().map_err(VMError::CompileError)?
        };

        let function_value: Value = function.into();
        // The function itself is a heap object and belongs on the stack
        // like any other value while it's being called, at the slot the
        // about-to-be-pushed call frame expects as its callee.
        let stack_value = function_value.clone();
        self.replace_or_push(stack_value, 0);
        self.call(function_value, 0)?;

        self.interpret()
    }

    pub fn replace_or_push(&mut self, value: Value, index: usize) {
        if self.stack.len() <= index {
            self.push(value);
        } else {
            self.stack[index] = value;
        }
    }
    // Push the value to stack, and increments the top
    pub fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    // Pop the value from stack, and decrements the top
    pub fn pop(&mut self) -> Option<Value> {
        self.stack.pop()
    }

    pub fn current_frame(&mut self) -> &mut CallFrame {
        let top_index = self.frames.len() - 1;
        &mut self.frames[top_index]
    }

    /// # Errors
    ///
    /// Returns `VMError` if there's any runtime error
    pub fn run(&mut self) -> Result<(), VMError> {
        loop {
            #[cfg(feature = "debug_trace_execution")]
            self.debug();

            let instruction_byte = self.current_frame().read_byte();
            // Try to convert that byte to `OpCode` enum
            if let Ok(opcode) = OpCode::try_from(instruction_byte) {
                // Conversion successful. Match opcode with different arms
                // to execute instruction
                match opcode {
                    // It means this is final instruction in the byte code
                    OpCode::OpReturn => {
                        // If it's end of bytecode, just return.
                        if self.op_return() {
                            return Ok(());
                        }
                    }
                    // Usually used for expression statements. These statements may produce a result but this result will be popped because expression statements are only used for side effects.
                    OpCode::OpPop => {
                        self.pop().ok_or_else(||
                            // Return error if value on stack is not found
                            self.construct_runtime_error(format_args!("Expected value on the stack")))?;
                    }
                    OpCode::OpGetLocal => self.op_get_local(),
                    OpCode::OpSetLocal => self.op_set_local(),
                    OpCode::OpDefineGlobal => self.op_define_global()?,
                    OpCode::OpGetGlobal => self.op_get_global()?,
                    OpCode::OpSetGlobal => self.op_set_global()?,
                    // Read constant from the constant pool
                    OpCode::OpConstant => {
                        // Get constant value from constant pool
                        let constant = self.current_frame().read_constant();
                        // Push that constant onto the stack
                        self.push(constant);
                    }
                    // Negate the top value
                    OpCode::OpNegate => {
                        self.op_negate()?;
                    }
                    // Only match binary operators
                    // These all needs two number operands, so these are combined
                    // in a separate function
                    OpCode::OpAdd
                    | OpCode::OpSubtract
                    | OpCode::OpMultiply
                    | OpCode::OpDivide
                    | OpCode::OpGreater
                    | OpCode::OpLess => self.binary_op(opcode)?,

                    // Push `Null` onto the stack
                    OpCode::OpNull => {
                        self.push(Value::new_nil());
                    }

                    // Handles '!' operation
                    OpCode::OpNot => self.op_not()?,
                    // Compares two values
                    OpCode::OpEqual => self.op_equal()?,
                    OpCode::OpJumpIfFalse => {
                        // Reads the two bytes of distance being jumped
                        let offset = self.current_frame().read_u16();
                        // Result of the condition
                        let if_condition = &self.stack[self.stack.len() - 1];
                        // If condition is false, then perform the jump, other wise continue executing the statements
                        if if_condition.clone().is_falsey() {
                            self.current_frame().ip_offset += offset as usize;
                        }
                    }
                    OpCode::OpJump => {
                        // Read distance to jump
                        let offset = self.current_frame().read_u16();
                        // We don't check condition before jumping because else doesn't have any condition. If this instruction gets executed, just perform jump. When generating bytecode for if condition, when if condition is false, jump has to be immediately after this opcode (total 3 bytes). Otherwise it will get messy.
                        self.current_frame().ip_offset += offset as usize;
                    }
                    OpCode::OpLoop => {
                        let offset = self.current_frame().read_u16();
                        self.current_frame().ip_offset -= offset as usize;
                    }
                    OpCode::OpCall0
                    | OpCode::OpCall1
                    | OpCode::OpCall2
                    | OpCode::OpCall3
                    | OpCode::OpCall4
                    | OpCode::OpCall5
                    | OpCode::OpCall6
                    | OpCode::OpCall7
                    | OpCode::OpCall8 => {
                        // Every member of the `OpCall0..=OpCall8` family encodes
                        // its own argument count; there is no separate operand byte.
                        let arg_count = opcode.call_arity().unwrap();
                        self.op_call(arg_count)?;
                    }
                }
            }
        }
    }
}
