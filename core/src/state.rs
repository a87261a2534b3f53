use crate::constants::{MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET, STACK_DEPTH};
use crate::error::{Chip8Error, Result};

/// The Chip-8 architectural state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) an 8-bit stack pointer, the number of occupied stack slots
///
/// Timers
/// - 2 8-bit timers (delay & sound), decremented at 60Hz while non-zero
///
/// ## Memory
/// - 16 slot stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the hexadecimal font sprites
///     - 0x000..0x200 is otherwise reserved for the interpreter
///     - 0x200.. is where ROMs are loaded
#[derive(Clone)]
pub struct CpuState {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_DEPTH],
    pub memory: [u8; MEMORY_SIZE],
}

impl CpuState {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        memory[0..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        CpuState {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_DEPTH],
            memory,
        }
    }

    /// Gets the opcode at `address`.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn word(&self, address: u16) -> Result<u16> {
        let bytes = self.read(address as usize, 2)?;
        Ok(u16::from(bytes[0]) << 8 | u16::from(bytes[1]))
    }

    /// Borrows `len` bytes of memory starting at `address`.
    pub fn read(&self, address: usize, len: usize) -> Result<&[u8]> {
        let end = Self::bounds(address, len)?;
        Ok(&self.memory[address..end])
    }

    /// Copies `data` into memory starting at `address`.
    /// Nothing is written if any byte would land outside memory.
    pub fn write(&mut self, address: usize, data: &[u8]) -> Result<()> {
        let end = Self::bounds(address, data.len())?;
        self.memory[address..end].copy_from_slice(data);
        Ok(())
    }

    /// STACK.push(addr)
    pub fn push(&mut self, address: u16) -> Result<()> {
        let sp = self.sp as usize;
        if sp >= STACK_DEPTH {
            return Err(Chip8Error::StackOverflow { pc: self.pc });
        }
        self.stack[sp] = address;
        self.sp += 1;
        Ok(())
    }

    /// STACK.pop()
    pub fn pop(&mut self) -> Result<u16> {
        if self.sp == 0 {
            return Err(Chip8Error::StackUnderflow { pc: self.pc });
        }
        self.sp -= 1;
        Ok(self.stack[self.sp as usize])
    }

    /// Returns the exclusive end of `address..address + len`, if it fits in memory.
    fn bounds(address: usize, len: usize) -> Result<usize> {
        let end = address + len;
        if end > MEMORY_SIZE {
            // report the first byte that falls outside memory
            let address = address.max(MEMORY_SIZE);
            return Err(Chip8Error::MemoryOutOfBounds { address });
        }
        Ok(end)
    }
}

impl Default for CpuState {
    fn default() -> Self {
        Self::new()
    }
}
