use std::io::Read;

use log::{debug, trace};

use crate::clock::{InstantClock, TimerClock};
use crate::constants::{MAX_ROM_SIZE, PROGRAM_START, TIMER_PERIOD};
use crate::error::{Chip8Error, Result};
use crate::framebuffer::{Frame, Framebuffer};
use crate::instruction::{self, Instruction};
use crate::keyboard::Keyboard;
use crate::operations::*;
use crate::random::{Randomizer, StdRandomizer};
use crate::state::CpuState;

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns:
///  - the current architectural `state`
///  - the `framebuffer` that sprites are drawn to
///  - the `randomizer`, `keyboard` and `clock` peripherals
///
/// Supplies interfaces for:
/// - loading roms
/// - advancing the CPU by a single cycle, including its 60Hz timers
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8<R = StdRandomizer, K = crate::keyboard::Keypad, C = InstantClock> {
    state: CpuState,
    framebuffer: Framebuffer,
    randomizer: R,
    keyboard: K,
    clock: C,
}

impl<K: Keyboard> Chip8<StdRandomizer, K, InstantClock> {
    /// A Chip-8 reading from `keyboard`, with an entropy seeded randomizer and the wall clock
    pub fn with_keyboard(keyboard: K) -> Self {
        Chip8::new(StdRandomizer::new(), keyboard, InstantClock::new())
    }
}

impl<R: Randomizer, K: Keyboard, C: TimerClock> Chip8<R, K, C> {
    pub fn new(randomizer: R, keyboard: K, clock: C) -> Self {
        Chip8 {
            state: CpuState::new(),
            framebuffer: Framebuffer::new(),
            randomizer,
            keyboard,
            clock,
        }
    }

    /// Resets the machine and loads a rom
    ///
    /// # Arguments
    /// * `rom` the raw program, copied verbatim to `PROGRAM_START`
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }

        self.state = CpuState::new();
        self.state.write(PROGRAM_START as usize, rom)?;
        self.framebuffer.clear();
        self.clock.reset();
        debug!("loaded {} byte ROM at {:#05X}", rom.len(), PROGRAM_START);
        Ok(())
    }

    /// Resets the machine and loads a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a reader that contains a ROM
    pub fn load_rom_from(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        self.load_rom(&rom)
    }

    /// Advances the CPU by a single cycle
    /// - gets the opcode pointed at by the pc
    /// - decodes and executes it
    /// - ticks the timers if a 60th of a second has passed
    pub fn cycle(&mut self) -> Result<()> {
        let pc = self.state.pc;
        let op = self.state.word(pc)?;
        let instruction =
            instruction::decode(op).ok_or(Chip8Error::DecodeError { opcode: op, pc })?;
        trace!(
            "{:03X}: {:04X} {:?} v{:02X?} i{:03X}",
            pc,
            op,
            instruction,
            self.state.v,
            self.state.i
        );

        self.execute(instruction)?;
        self.cycle_timers();
        Ok(())
    }

    /// Executes one decoded instruction against the current state
    pub fn execute(&mut self, instruction: Instruction) -> Result<()> {
        let state = &mut self.state;
        match instruction {
            Instruction::Sys { addr } => {
                return Err(Chip8Error::UnsupportedInstruction {
                    opcode: addr,
                    pc: state.pc,
                })
            }
            Instruction::Cls => cls(state, &mut self.framebuffer),
            Instruction::Ret => ret(state)?,
            Instruction::Jp { addr } => jp(state, addr),
            Instruction::Call { addr } => call(state, addr)?,
            Instruction::SeByte { x, kk } => se_byte(state, x, kk),
            Instruction::SneByte { x, kk } => sne_byte(state, x, kk),
            Instruction::SeReg { x, y } => se_reg(state, x, y),
            Instruction::LdByte { x, kk } => ld_byte(state, x, kk),
            Instruction::AddByte { x, kk } => add_byte(state, x, kk),
            Instruction::LdReg { x, y } => ld_reg(state, x, y),
            Instruction::Or { x, y } => or(state, x, y),
            Instruction::And { x, y } => and(state, x, y),
            Instruction::Xor { x, y } => xor(state, x, y),
            Instruction::AddReg { x, y } => add_reg(state, x, y),
            Instruction::Sub { x, y } => sub(state, x, y),
            Instruction::Shr { x } => shr(state, x),
            Instruction::Subn { x, y } => subn(state, x, y),
            Instruction::Shl { x } => shl(state, x),
            Instruction::SneReg { x, y } => sne_reg(state, x, y),
            Instruction::LdI { addr } => ld_i(state, addr),
            Instruction::JpV0 { addr } => jp_v0(state, addr),
            Instruction::Rnd { x, kk } => rnd(state, &mut self.randomizer, x, kk),
            Instruction::Drw { x, y, n } => drw(state, &mut self.framebuffer, x, y, n)?,
            Instruction::Skp { x } => skp(state, &self.keyboard, x),
            Instruction::Sknp { x } => sknp(state, &self.keyboard, x),
            Instruction::LdFromDelay { x } => ld_from_delay(state, x),
            Instruction::LdKey { x } => ld_key(state, &mut self.keyboard, x)?,
            Instruction::LdDelay { x } => ld_delay(state, x),
            Instruction::LdSound { x } => ld_sound(state, x),
            Instruction::AddI { x } => add_i(state, x),
            Instruction::LdFont { x } => ld_font(state, x),
            Instruction::LdBcd { x } => ld_bcd(state, x)?,
            Instruction::StoreRegisters { x } => store_registers(state, x)?,
            Instruction::LoadRegisters { x } => load_registers(state, x)?,
        }
        Ok(())
    }

    /// Handles the delay and sound timers
    /// - once more than a 60th of a second has passed, resets the clock
    ///   and decrements each timer that is still running
    fn cycle_timers(&mut self) {
        if self.clock.elapsed_seconds() <= TIMER_PERIOD {
            return;
        }
        self.clock.reset();

        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }

        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
        }
        trace!(
            "timers ticked dt{:02X} st{:02X}",
            self.state.delay_timer,
            self.state.sound_timer
        );
    }

    pub fn state(&self) -> &CpuState {
        &self.state
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Returns the frame if the display should be redrawn, clearing the draw flag
    pub fn take_frame(&mut self) -> Option<Frame> {
        self.framebuffer.take_frame()
    }

    /// Whether a tone should be playing; the sound timer is still running
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    pub fn keyboard(&self) -> &K {
        &self.keyboard
    }
}
