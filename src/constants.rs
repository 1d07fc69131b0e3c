/// Capacity of the per-compiler locals table. Named after the single-byte
/// operand width that indexes into it.
pub const UINT8_COUNT: usize = 256;

/// Highest argument count a single `OP_CALL_N` opcode can encode. Argument
/// counts beyond this are a fatal compile error.
pub const MAX_CALL_ARITY: u8 = 8;

/// Maximum depth of the VM's call-frame stack.
pub const FRAMES_MAX: usize = 64;
