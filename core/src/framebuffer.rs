use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// A snapshot of every pixel, row-major and indexed as `y * DISPLAY_WIDTH + x`
pub type Frame = [u8; DISPLAY_WIDTH * DISPLAY_HEIGHT];

/// # Framebuffer
/// The Chip-8 display is composed of 64x32 black/white pixels, stored one byte per pixel.
///
/// Sprites are XORed onto the buffer and wrap around both edges of the screen.
/// Any change sets the dirty flag, which stays set until a frame is taken for rendering.
#[derive(Clone)]
pub struct Framebuffer {
    pixels: Frame,
    dirty: bool,
}

impl Framebuffer {
    pub fn new() -> Self {
        Framebuffer {
            pixels: [0; DISPLAY_WIDTH * DISPLAY_HEIGHT],
            dirty: false,
        }
    }

    /// Turns every pixel off
    pub fn clear(&mut self) {
        self.pixels = [0; DISPLAY_WIDTH * DISPLAY_HEIGHT];
        self.dirty = true;
    }

    /// XORs a sprite onto the buffer with its top-left corner at `x`, `y`.
    ///
    /// Each byte of `sprite` is one row of 8 pixels, most significant bit leftmost.
    /// Returns 1 if any pixel was erased (went from 1 to 0), otherwise 0.
    ///
    /// # Arguments
    /// * `x` the column of the sprite's left edge
    /// * `y` the row of the sprite's top edge
    /// * `sprite` the rows of the sprite
    pub fn draw(&mut self, x: u8, y: u8, sprite: &[u8]) -> u8 {
        let mut erased = 0;

        for (row, byte) in sprite.iter().enumerate() {
            let py = (y as usize + row) % DISPLAY_HEIGHT;
            for bit in 0..8 {
                let px = (x as usize + bit) % DISPLAY_WIDTH;
                let pixel = &mut self.pixels[py * DISPLAY_WIDTH + px];
                let value = (byte >> (7 - bit)) & 1;
                erased |= value & *pixel;
                *pixel ^= value;
            }
        }

        self.dirty = true;
        erased
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * DISPLAY_WIDTH + x]
    }

    pub fn pixels(&self) -> &Frame {
        &self.pixels
    }

    /// Whether the buffer changed since the last frame was taken
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns a copy of the pixels if the display should be redrawn, and clears the dirty flag
    pub fn take_frame(&mut self) -> Option<Frame> {
        if self.dirty {
            self.dirty = false;
            Some(self.pixels)
        } else {
            None
        }
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}
