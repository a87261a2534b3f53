use crate::opcode::Opcode;

/// A decoded Chip-8 instruction and its operands.
///
/// `x` and `y` are register indices, `kk` an immediate byte, `addr` a 12-bit
/// address and `n` a sprite height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 0nnn: call machine code at addr
    Sys { addr: u16 },
    /// 00E0: clear the display
    Cls,
    /// 00EE: return from a subroutine
    Ret,
    /// 1nnn: PC = addr
    Jp { addr: u16 },
    /// 2nnn: STACK.push(PC); PC = addr
    Call { addr: u16 },
    /// 3xkk: skip if Vx == kk
    SeByte { x: usize, kk: u8 },
    /// 4xkk: skip if Vx != kk
    SneByte { x: usize, kk: u8 },
    /// 5xy0: skip if Vx == Vy
    SeReg { x: usize, y: usize },
    /// 6xkk: Vx = kk
    LdByte { x: usize, kk: u8 },
    /// 7xkk: Vx += kk
    AddByte { x: usize, kk: u8 },
    /// 8xy0: Vx = Vy
    LdReg { x: usize, y: usize },
    /// 8xy1: Vx |= Vy
    Or { x: usize, y: usize },
    /// 8xy2: Vx &= Vy
    And { x: usize, y: usize },
    /// 8xy3: Vx ^= Vy
    Xor { x: usize, y: usize },
    /// 8xy4: Vx += Vy; VF = carry
    AddReg { x: usize, y: usize },
    /// 8xy5: Vx -= Vy; VF = !borrow
    Sub { x: usize, y: usize },
    /// 8xy6: Vx >>= 1; VF = lsb
    Shr { x: usize },
    /// 8xy7: Vx = Vy - Vx; VF = !borrow
    Subn { x: usize, y: usize },
    /// 8xyE: Vx <<= 1; VF = msb
    Shl { x: usize },
    /// 9xy0: skip if Vx != Vy
    SneReg { x: usize, y: usize },
    /// Annn: I = addr
    LdI { addr: u16 },
    /// Bnnn: PC = V0 + addr
    JpV0 { addr: u16 },
    /// Cxkk: Vx = rand_byte & kk
    Rnd { x: usize, kk: u8 },
    /// Dxyn: draw an n byte sprite from mem[I..I+n] at (Vx, Vy)
    Drw { x: usize, y: usize, n: u8 },
    /// Ex9E: skip if key Vx is down
    Skp { x: usize },
    /// ExA1: skip if key Vx is up
    Sknp { x: usize },
    /// Fx07: Vx = DT
    LdFromDelay { x: usize },
    /// Fx0A: Vx = await keypress
    LdKey { x: usize },
    /// Fx15: DT = Vx
    LdDelay { x: usize },
    /// Fx18: ST = Vx
    LdSound { x: usize },
    /// Fx1E: I += Vx
    AddI { x: usize },
    /// Fx29: I = address of the font sprite for Vx
    LdFont { x: usize },
    /// Fx33: mem[I..I+3] = bcd(Vx)
    LdBcd { x: usize },
    /// Fx55: mem[I..=I+x] = V0..=Vx
    StoreRegisters { x: usize },
    /// Fx65: V0..=Vx = mem[I..=I+x]
    LoadRegisters { x: usize },
}

/// An opcode matches a pattern when `op & mask == bits`; the unmasked nibbles are operands.
struct Pattern {
    mask: u16,
    bits: u16,
    decode: fn(u16) -> Instruction,
}

/// Patterns in priority order; exact matches come before the masks that would also match them.
#[rustfmt::skip]
const PATTERNS: [Pattern; 35] = [
    Pattern { mask: 0xFFFF, bits: 0x00E0, decode: |_| Instruction::Cls },
    Pattern { mask: 0xFFFF, bits: 0x00EE, decode: |_| Instruction::Ret },

    Pattern { mask: 0xF00F, bits: 0x5000, decode: |op| Instruction::SeReg { x: op.x(), y: op.y() } },
    Pattern { mask: 0xF00F, bits: 0x8000, decode: |op| Instruction::LdReg { x: op.x(), y: op.y() } },
    Pattern { mask: 0xF00F, bits: 0x8001, decode: |op| Instruction::Or { x: op.x(), y: op.y() } },
    Pattern { mask: 0xF00F, bits: 0x8002, decode: |op| Instruction::And { x: op.x(), y: op.y() } },
    Pattern { mask: 0xF00F, bits: 0x8003, decode: |op| Instruction::Xor { x: op.x(), y: op.y() } },
    Pattern { mask: 0xF00F, bits: 0x8004, decode: |op| Instruction::AddReg { x: op.x(), y: op.y() } },
    Pattern { mask: 0xF00F, bits: 0x8005, decode: |op| Instruction::Sub { x: op.x(), y: op.y() } },
    Pattern { mask: 0xF00F, bits: 0x8006, decode: |op| Instruction::Shr { x: op.x() } },
    Pattern { mask: 0xF00F, bits: 0x8007, decode: |op| Instruction::Subn { x: op.x(), y: op.y() } },
    Pattern { mask: 0xF00F, bits: 0x800E, decode: |op| Instruction::Shl { x: op.x() } },
    Pattern { mask: 0xF00F, bits: 0x9000, decode: |op| Instruction::SneReg { x: op.x(), y: op.y() } },

    Pattern { mask: 0xF0FF, bits: 0xE09E, decode: |op| Instruction::Skp { x: op.x() } },
    Pattern { mask: 0xF0FF, bits: 0xE0A1, decode: |op| Instruction::Sknp { x: op.x() } },
    Pattern { mask: 0xF0FF, bits: 0xF007, decode: |op| Instruction::LdFromDelay { x: op.x() } },
    Pattern { mask: 0xF0FF, bits: 0xF00A, decode: |op| Instruction::LdKey { x: op.x() } },
    Pattern { mask: 0xF0FF, bits: 0xF015, decode: |op| Instruction::LdDelay { x: op.x() } },
    Pattern { mask: 0xF0FF, bits: 0xF018, decode: |op| Instruction::LdSound { x: op.x() } },
    Pattern { mask: 0xF0FF, bits: 0xF01E, decode: |op| Instruction::AddI { x: op.x() } },
    Pattern { mask: 0xF0FF, bits: 0xF029, decode: |op| Instruction::LdFont { x: op.x() } },
    Pattern { mask: 0xF0FF, bits: 0xF033, decode: |op| Instruction::LdBcd { x: op.x() } },
    Pattern { mask: 0xF0FF, bits: 0xF055, decode: |op| Instruction::StoreRegisters { x: op.x() } },
    Pattern { mask: 0xF0FF, bits: 0xF065, decode: |op| Instruction::LoadRegisters { x: op.x() } },

    Pattern { mask: 0xF000, bits: 0x1000, decode: |op| Instruction::Jp { addr: op.addr() } },
    Pattern { mask: 0xF000, bits: 0x2000, decode: |op| Instruction::Call { addr: op.addr() } },
    Pattern { mask: 0xF000, bits: 0x3000, decode: |op| Instruction::SeByte { x: op.x(), kk: op.kk() } },
    Pattern { mask: 0xF000, bits: 0x4000, decode: |op| Instruction::SneByte { x: op.x(), kk: op.kk() } },
    Pattern { mask: 0xF000, bits: 0x6000, decode: |op| Instruction::LdByte { x: op.x(), kk: op.kk() } },
    Pattern { mask: 0xF000, bits: 0x7000, decode: |op| Instruction::AddByte { x: op.x(), kk: op.kk() } },
    Pattern { mask: 0xF000, bits: 0xA000, decode: |op| Instruction::LdI { addr: op.addr() } },
    Pattern { mask: 0xF000, bits: 0xB000, decode: |op| Instruction::JpV0 { addr: op.addr() } },
    Pattern { mask: 0xF000, bits: 0xC000, decode: |op| Instruction::Rnd { x: op.x(), kk: op.kk() } },
    Pattern { mask: 0xF000, bits: 0xD000, decode: |op| Instruction::Drw { x: op.x(), y: op.y(), n: op.n() } },

    Pattern { mask: 0xF000, bits: 0x0000, decode: |op| Instruction::Sys { addr: op.addr() } },
];

/// Selects the correct Instruction for a given opcode.
/// Returns `None` if the opcode isn't part of the Chip-8 instruction set.
pub fn decode(op: u16) -> Option<Instruction> {
    PATTERNS
        .iter()
        .find(|pattern| op & pattern.mask == pattern.bits)
        .map(|pattern| (pattern.decode)(op))
}
