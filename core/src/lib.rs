pub use chip8::Chip8;
pub use clock::{InstantClock, TimerClock};
pub use constants::CLOCK_SPEED;
pub use error::{Chip8Error, Result};
pub use framebuffer::{Frame, Framebuffer};
pub use instruction::{decode, Instruction};
pub use keyboard::{Keyboard, Keypad};
pub use random::{Randomizer, StdRandomizer};
pub use state::CpuState;

pub mod bcd;
mod chip8;
mod clock;
pub mod constants;
mod error;
mod framebuffer;
mod instruction;
mod keyboard;
mod opcode;
mod operations;
mod random;
pub mod state;
#[cfg(test)]
mod testing;
