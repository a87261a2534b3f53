use std::io;

use thiserror::Error;

/// Everything that can stop a Chip-8 cycle.
///
/// None of these are recoverable from inside the machine; the host decides
/// whether to stop, reset or load another ROM.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("unrecognised instruction {opcode:#06X} at {pc:#05X}")]
    DecodeError { opcode: u16, pc: u16 },

    #[error("instruction {opcode:#06X} at {pc:#05X} calls machine code and can't be interpreted")]
    UnsupportedInstruction { opcode: u16, pc: u16 },

    #[error("stack overflow: CALL at {pc:#05X} with all 16 stack slots in use")]
    StackOverflow { pc: u16 },

    #[error("stack underflow: RET at {pc:#05X} with an empty stack")]
    StackUnderflow { pc: u16 },

    #[error("memory access out of bounds at address {address:#06X}")]
    MemoryOutOfBounds { address: usize },

    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },

    #[error("keyboard input closed while waiting for a key press")]
    InputClosed,

    #[error("unable to read ROM")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Chip8Error>;
