use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Context};
use log::{error, info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8_core::{Chip8, Chip8Error, Frame, Keypad, CLOCK_SPEED};
use chip8_display::Display;

use crate::keymap::keymap;

/// Time between polls of the SDL event queue (~60Hz)
const FRAME_TIME: Duration = Duration::from_millis(16);

pub fn run(rom_path: &Path, scale: u32) -> anyhow::Result<()> {
    let keypad = Keypad::new();
    let mut chip8 = Chip8::with_keyboard(keypad.clone());

    // Load ROM
    let rom = fs::read(rom_path)
        .with_context(|| format!("unable to read ROM {}", rom_path.display()))?;
    chip8
        .load_rom(&rom)
        .with_context(|| format!("unable to load ROM {}", rom_path.display()))?;
    info!("loaded {} ({} bytes)", rom_path.display(), rom.len());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut display = Display::new(&sdl, scale).map_err(|e| anyhow!(e))?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    let running = Arc::new(AtomicBool::new(true));
    let (frames_tx, frames_rx) = mpsc::channel();
    let cpu = spawn_cpu(chip8, frames_tx, Arc::clone(&running));

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match keymap(key) {
                    Some(kc) => keypad.key_press(kc),
                    None => warn!("no keypad mapping for {:?}", key),
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        keypad.key_release(kc)
                    }
                }
                _ => continue,
            };
        }

        // Render the most recent frame, skipping any the display couldn't keep up with
        if let Some(frame) = latest_frame(&frames_rx) {
            display.render(&frame).map_err(|e| anyhow!(e))?;
        }

        if cpu.is_finished() {
            break;
        }
        thread::sleep(FRAME_TIME);
    }

    // Stop the CPU between cycles, waking it if it's blocked waiting for a key
    running.store(false, Ordering::Relaxed);
    keypad.close();
    match cpu.join() {
        Ok(result) => result.context("emulation stopped"),
        Err(_) => bail!("CPU thread panicked"),
    }
}

/// Runs the CPU on its own thread, sending every changed frame back over `frames`.
/// Cycles until `running` is cleared, the keypad is closed or a cycle fails.
fn spawn_cpu(
    mut chip8: Chip8,
    frames: Sender<Frame>,
    running: Arc<AtomicBool>,
) -> JoinHandle<Result<(), Chip8Error>> {
    thread::spawn(move || {
        // Set initial timing
        let cycle_time = Duration::from_nanos(CLOCK_SPEED);
        let mut last_cycle = Instant::now();

        while running.load(Ordering::Relaxed) {
            match chip8.cycle() {
                Ok(()) => {}
                Err(Chip8Error::InputClosed) => break,
                Err(e) => {
                    error!("{}", e);
                    return Err(e);
                }
            }

            if let Some(frame) = chip8.take_frame() {
                if frames.send(frame).is_err() {
                    break;
                }
            }

            // Handle timing
            let elapsed_cycle_time = last_cycle.elapsed();
            if cycle_time > elapsed_cycle_time {
                thread::sleep(cycle_time - elapsed_cycle_time);
            }
            last_cycle = Instant::now();
        }
        Ok(())
    })
}

fn latest_frame(frames: &Receiver<Frame>) -> Option<Frame> {
    frames.try_iter().last()
}
