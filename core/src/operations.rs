use crate::bcd;
use crate::constants::{FLAG_REGISTER, SPRITE_SIZE};
use crate::error::{Chip8Error, Result};
use crate::framebuffer::Framebuffer;
use crate::keyboard::Keyboard;
use crate::random::Randomizer;
use crate::state::CpuState;

/// pc += 2
fn next(state: &mut CpuState) {
    state.pc = state.pc.wrapping_add(0x2);
}

/// if condition then pc += 4 else pc += 2
fn skip_if(state: &mut CpuState, condition: bool) {
    let step = if condition { 0x4 } else { 0x2 };
    state.pc = state.pc.wrapping_add(step);
}

/// Vx = result; VF = flag
/// The flag is written last so that it wins when x is VF.
fn set_with_flag(state: &mut CpuState, x: usize, result: u8, flag: bool) {
    state.v[x] = result;
    state.v[FLAG_REGISTER] = flag as u8;
}

/// clear
pub fn cls(state: &mut CpuState, framebuffer: &mut Framebuffer) {
    framebuffer.clear();
    next(state);
}

/// PC = STACK.pop() + 2
/// The stack holds the address of the CALL itself, so step over it.
pub fn ret(state: &mut CpuState) -> Result<()> {
    let address = state.pop()?;
    state.pc = address.wrapping_add(0x2);
    Ok(())
}

/// PC = addr
pub fn jp(state: &mut CpuState, addr: u16) {
    state.pc = addr;
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut CpuState, addr: u16) -> Result<()> {
    state.push(state.pc)?;
    state.pc = addr;
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn se_byte(state: &mut CpuState, x: usize, kk: u8) {
    let equal = state.v[x] == kk;
    skip_if(state, equal);
}

/// if Vx != kk then pc += 2
pub fn sne_byte(state: &mut CpuState, x: usize, kk: u8) {
    let unequal = state.v[x] != kk;
    skip_if(state, unequal);
}

/// if Vx == Vy then pc += 2
pub fn se_reg(state: &mut CpuState, x: usize, y: usize) {
    let equal = state.v[x] == state.v[y];
    skip_if(state, equal);
}

/// Vx = kk
pub fn ld_byte(state: &mut CpuState, x: usize, kk: u8) {
    state.v[x] = kk;
    next(state);
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add_byte(state: &mut CpuState, x: usize, kk: u8) {
    state.v[x] = state.v[x].wrapping_add(kk);
    next(state);
}

/// Vx = Vy
pub fn ld_reg(state: &mut CpuState, x: usize, y: usize) {
    state.v[x] = state.v[y];
    next(state);
}

/// Vx |= Vy
pub fn or(state: &mut CpuState, x: usize, y: usize) {
    state.v[x] |= state.v[y];
    next(state);
}

/// Vx &= Vy
pub fn and(state: &mut CpuState, x: usize, y: usize) {
    state.v[x] &= state.v[y];
    next(state);
}

/// Vx ^= Vy
pub fn xor(state: &mut CpuState, x: usize, y: usize) {
    state.v[x] ^= state.v[y];
    next(state);
}

/// Vx += Vy; VF = overflow
pub fn add_reg(state: &mut CpuState, x: usize, y: usize) {
    let (res, over) = state.v[x].overflowing_add(state.v[y]);
    set_with_flag(state, x, res, over);
    next(state);
}

/// Vx -= Vy; VF = !underflow
pub fn sub(state: &mut CpuState, x: usize, y: usize) {
    let (res, under) = state.v[x].overflowing_sub(state.v[y]);
    set_with_flag(state, x, res, !under);
    next(state);
}

/// Vx >>= 1; VF = lsb
pub fn shr(state: &mut CpuState, x: usize) {
    let lsb = state.v[x] & 0x1;
    let res = state.v[x] >> 1;
    set_with_flag(state, x, res, lsb == 1);
    next(state);
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(state: &mut CpuState, x: usize, y: usize) {
    let (res, under) = state.v[y].overflowing_sub(state.v[x]);
    set_with_flag(state, x, res, !under);
    next(state);
}

/// Vx <<= 1; VF = msb
pub fn shl(state: &mut CpuState, x: usize) {
    let msb = (state.v[x] >> 7) & 0x1;
    let res = state.v[x] << 1;
    set_with_flag(state, x, res, msb == 1);
    next(state);
}

/// if Vx != Vy then pc += 2
pub fn sne_reg(state: &mut CpuState, x: usize, y: usize) {
    let unequal = state.v[x] != state.v[y];
    skip_if(state, unequal);
}

/// I = addr
pub fn ld_i(state: &mut CpuState, addr: u16) {
    state.i = addr & 0x0FFF;
    next(state);
}

/// PC = V0 + addr
pub fn jp_v0(state: &mut CpuState, addr: u16) {
    state.pc = (addr & 0x0FFF) + u16::from(state.v[0x0]);
}

/// Vx = rand_byte & kk
pub fn rnd(state: &mut CpuState, randomizer: &mut dyn Randomizer, x: usize, kk: u8) {
    state.v[x] = randomizer.next_byte() & kk;
    next(state);
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position Vx, Vy on the Framebuffer with wrapping.
/// Sets VF if any pixels were erased
pub fn drw(
    state: &mut CpuState,
    framebuffer: &mut Framebuffer,
    x: usize,
    y: usize,
    n: u8,
) -> Result<()> {
    let (px, py) = (state.v[x], state.v[y]);
    let sprite = state.read(state.i as usize, n as usize)?;
    let erased = framebuffer.draw(px, py, sprite);
    state.v[FLAG_REGISTER] = erased;
    next(state);
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skp(state: &mut CpuState, keyboard: &dyn Keyboard, x: usize) {
    let pressed = keyboard.is_key_down(state.v[x]);
    skip_if(state, pressed);
}

/// if !Vx.pressed then pc += 2
pub fn sknp(state: &mut CpuState, keyboard: &dyn Keyboard, x: usize) {
    let pressed = keyboard.is_key_down(state.v[x]);
    skip_if(state, !pressed);
}

/// Vx = DT
pub fn ld_from_delay(state: &mut CpuState, x: usize) {
    state.v[x] = state.delay_timer;
    next(state);
}

/// Vx = await keypress
/// Blocks until the keyboard reports a key
pub fn ld_key(state: &mut CpuState, keyboard: &mut dyn Keyboard, x: usize) -> Result<()> {
    let key = keyboard
        .wait_for_key_press()
        .ok_or(Chip8Error::InputClosed)?;
    state.v[x] = key;
    next(state);
    Ok(())
}

/// DT = Vx
pub fn ld_delay(state: &mut CpuState, x: usize) {
    state.delay_timer = state.v[x];
    next(state);
}

/// ST = Vx
pub fn ld_sound(state: &mut CpuState, x: usize) {
    state.sound_timer = state.v[x];
    next(state);
}

/// I += Vx
pub fn add_i(state: &mut CpuState, x: usize) {
    state.i = state.i.wrapping_add(u16::from(state.v[x]));
    next(state);
}

/// I = Vx * 5
/// Set I to the memory address of the sprite for Vx
/// See constants::SPRITE_SHEET for more details
pub fn ld_font(state: &mut CpuState, x: usize) {
    state.i = u16::from(state.v[x]) * SPRITE_SIZE;
    next(state);
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn ld_bcd(state: &mut CpuState, x: usize) -> Result<()> {
    let digits = bcd::convert(state.v[x]);
    state.write(state.i as usize, &digits)?;
    next(state);
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx
/// Fill memory starting at address i with V0..=Vx
pub fn store_registers(state: &mut CpuState, x: usize) -> Result<()> {
    let v = state.v;
    state.write(state.i as usize, &v[..=x])?;
    next(state);
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]
/// Fill V0..=Vx with memory starting at address i
pub fn load_registers(state: &mut CpuState, x: usize) -> Result<()> {
    let mut v = state.v;
    v[..=x].copy_from_slice(state.read(state.i as usize, x + 1)?);
    state.v = v;
    next(state);
    Ok(())
}

#[cfg(test)]
mod test_operations {
    use super::*;
    use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
    use crate::testing::{FixedRandomizer, ScriptedKeyboard};

    #[test]
    fn test_00e0_cls() {
        let mut state = CpuState::new();
        let mut fb = Framebuffer::new();
        fb.draw(0, 0, &[0x80]);
        cls(&mut state, &mut fb);
        assert_eq!(fb.pixel(0, 0), 0);
        assert_eq!(state.pc, 0x202);
    }

    #[test]
    fn test_00ee_ret() {
        let mut state = CpuState::new();
        state.sp = 0x1;
        state.stack[0] = 0xABC;
        ret(&mut state).unwrap();
        assert_eq!(state.sp, 0x0);
        // Add 2 to step past the CALL that pushed the address
        assert_eq!(state.pc, 0xABC + 0x2);
    }

    #[test]
    fn test_00ee_ret_underflows() {
        let mut state = CpuState::new();
        assert!(matches!(
            ret(&mut state),
            Err(Chip8Error::StackUnderflow { pc: 0x200 })
        ));
        assert_eq!(state.pc, 0x200);
    }

    #[test]
    fn test_1nnn_jp() {
        let mut state = CpuState::new();
        jp(&mut state, 0xABC);
        assert_eq!(state.pc, 0x0ABC);
    }

    #[test]
    fn test_2nnn_call_then_ret() {
        let mut state = CpuState::new();
        state.pc = 0x600;
        call(&mut state, 0x300).unwrap();
        assert_eq!(state.pc, 0x300);
        assert_eq!(state.sp, 0x1);
        assert_eq!(state.stack[0], 0x600);

        ret(&mut state).unwrap();
        assert_eq!(state.pc, 0x602);
        assert_eq!(state.sp, 0x0);
    }

    #[test]
    fn test_2nnn_call_overflows() {
        let mut state = CpuState::new();
        state.sp = 16;
        assert!(matches!(
            call(&mut state, 0x300),
            Err(Chip8Error::StackOverflow { pc: 0x200 })
        ));
        assert_eq!(state.pc, 0x200);
    }

    #[test]
    fn test_3xkk_se_skips() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x11;
        se_byte(&mut state, 0x1, 0x11);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_3xkk_se_doesntskip() {
        let mut state = CpuState::new();
        se_byte(&mut state, 0x1, 0x11);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_4xkk_sne_skips() {
        let mut state = CpuState::new();
        sne_byte(&mut state, 0x1, 0x11);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_4xkk_sne_doesntskip() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x11;
        sne_byte(&mut state, 0x1, 0x11);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_5xy0_se_skips() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x11;
        se_reg(&mut state, 0x1, 0x2);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_5xy0_se_doesntskip() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x11;
        se_reg(&mut state, 0x1, 0x2);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_6xkk_ld() {
        let mut state = CpuState::new();
        ld_byte(&mut state, 0x1, 0x22);
        assert_eq!(state.v[0x1], 0x22);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_7xkk_add_wraps_without_flag() {
        let mut state = CpuState::new();
        state.v[0x1] = 0xFF;
        add_byte(&mut state, 0x1, 0x02);
        assert_eq!(state.v[0x1], 0x01);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy0_ld() {
        let mut state = CpuState::new();
        state.v[0x2] = 0x1;
        ld_reg(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 0x1);
    }

    #[test]
    fn test_8xy1_or() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x6;
        state.v[0x2] = 0x3;
        or(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 0x7);
    }

    #[test]
    fn test_8xy2_and() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x6;
        state.v[0x2] = 0x3;
        and(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 0x2);
    }

    #[test]
    fn test_8xy3_xor() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x6;
        state.v[0x2] = 0x3;
        xor(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 0x5);
    }

    #[test]
    fn test_8xy4_add_nocarry() {
        let mut state = CpuState::new();
        state.v[0x1] = 100;
        state.v[0x2] = 100;
        add_reg(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 200);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy4_add_carry() {
        let mut state = CpuState::new();
        state.v[0x1] = 200;
        state.v[0x2] = 200;
        add_reg(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 144);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy4_add_into_vf_keeps_flag() {
        let mut state = CpuState::new();
        state.v[0xF] = 0xFF;
        state.v[0x2] = 0x02;
        add_reg(&mut state, 0xF, 0x2);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy5_sub_noborrow() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x33;
        state.v[0x2] = 0x11;
        sub(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 0x22);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy5_sub_equal_sets_flag() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x11;
        sub(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 0x0);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy5_sub_borrow() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x12;
        sub(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 0xFF);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy6_shr_lsb() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x5;
        shr(&mut state, 0x1);
        assert_eq!(state.v[0x1], 0x2);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy6_shr_nolsb() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x4;
        shr(&mut state, 0x1);
        assert_eq!(state.v[0x1], 0x2);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy7_subn_noborrow() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x33;
        subn(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 0x22);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy7_subn_borrow() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x12;
        state.v[0x2] = 0x11;
        subn(&mut state, 0x1, 0x2);
        assert_eq!(state.v[0x1], 0xFF);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xye_shl_msb() {
        let mut state = CpuState::new();
        state.v[0x1] = 0xFF;
        shl(&mut state, 0x1);
        // 0xFF * 2 = 0x01FE
        assert_eq!(state.v[0x1], 0xFE);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xye_shl_nomsb() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x4;
        shl(&mut state, 0x1);
        assert_eq!(state.v[0x1], 0x8);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_9xy0_sne_skips() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x11;
        sne_reg(&mut state, 0x1, 0x2);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_9xy0_sne_doesntskip() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x11;
        sne_reg(&mut state, 0x1, 0x2);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_annn_ld() {
        let mut state = CpuState::new();
        ld_i(&mut state, 0xFABC);
        assert_eq!(state.i, 0xABC);
    }

    #[test]
    fn test_bnnn_jp() {
        let mut state = CpuState::new();
        state.v[0x0] = 0x2;
        jp_v0(&mut state, 0xABC);
        assert_eq!(state.pc, 0xABE);
    }

    #[test]
    fn test_cxkk_rnd_masks() {
        let mut state = CpuState::new();
        let mut randomizer = FixedRandomizer(0b1010_1100);
        rnd(&mut state, &mut randomizer, 0x3, 0x0F);
        assert_eq!(state.v[0x3], 0b0000_1100);
        assert_eq!(state.pc, 0x202);
    }

    #[test]
    fn test_dxyn_drw_draws() {
        let mut state = CpuState::new();
        let mut fb = Framebuffer::new();
        state.v[0x0] = 0x1;
        // Draw the 0x0 sprite with a 1x 1y offset
        drw(&mut state, &mut fb, 0x0, 0x0, 5).unwrap();
        let mut expected = [0u8; DISPLAY_WIDTH * DISPLAY_HEIGHT];
        let rows: [[u8; 4]; 5] = [[1, 1, 1, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 1, 1, 1]];
        for (row, bits) in rows.iter().enumerate() {
            let start = (row + 1) * DISPLAY_WIDTH + 1;
            expected[start..start + 4].copy_from_slice(bits);
        }
        assert_eq!(fb.pixels()[..], expected[..]);
        assert_eq!(state.v[0xF], 0x0);
        assert_eq!(state.pc, 0x202);
    }

    #[test]
    fn test_dxyn_drw_collides() {
        let mut state = CpuState::new();
        let mut fb = Framebuffer::new();
        fb.draw(0, 0, &[0x80]);
        drw(&mut state, &mut fb, 0x0, 0x0, 1).unwrap();
        assert_eq!(state.v[0xF], 0x1)
    }

    #[test]
    fn test_dxyn_drw_out_of_bounds() {
        let mut state = CpuState::new();
        let mut fb = Framebuffer::new();
        state.i = 0xFFD;
        assert!(matches!(
            drw(&mut state, &mut fb, 0x0, 0x0, 5),
            Err(Chip8Error::MemoryOutOfBounds { address: 0x1000 })
        ));
        assert!(!fb.is_dirty());
        assert_eq!(state.pc, 0x200);
    }

    #[test]
    fn test_ex9e_skp_skips() {
        let mut state = CpuState::new();
        let keyboard = ScriptedKeyboard::holding(&[0xE]);
        state.v[0x1] = 0xE;
        skp(&mut state, &keyboard, 0x1);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_ex9e_skp_doesntskip() {
        let mut state = CpuState::new();
        let keyboard = ScriptedKeyboard::holding(&[]);
        skp(&mut state, &keyboard, 0x1);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_exa1_sknp_skips() {
        let mut state = CpuState::new();
        let keyboard = ScriptedKeyboard::holding(&[]);
        sknp(&mut state, &keyboard, 0x1);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_exa1_sknp_doesntskip() {
        let mut state = CpuState::new();
        let keyboard = ScriptedKeyboard::holding(&[0xE]);
        state.v[0x1] = 0xE;
        sknp(&mut state, &keyboard, 0x1);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_fx07_ld() {
        let mut state = CpuState::new();
        state.delay_timer = 0xF;
        ld_from_delay(&mut state, 0x1);
        assert_eq!(state.v[0x1], 0xF);
    }

    #[test]
    fn test_fx0a_ld_waits_for_key() {
        let mut state = CpuState::new();
        let mut keyboard = ScriptedKeyboard::pressing(&[0x7]);
        ld_key(&mut state, &mut keyboard, 0x1).unwrap();
        assert_eq!(state.v[0x1], 0x7);
        assert_eq!(state.pc, 0x202);
    }

    #[test]
    fn test_fx0a_ld_input_closed() {
        let mut state = CpuState::new();
        let mut keyboard = ScriptedKeyboard::pressing(&[]);
        assert!(matches!(
            ld_key(&mut state, &mut keyboard, 0x1),
            Err(Chip8Error::InputClosed)
        ));
        assert_eq!(state.pc, 0x200);
    }

    #[test]
    fn test_fx15_ld() {
        let mut state = CpuState::new();
        state.v[0x1] = 0xF;
        ld_delay(&mut state, 0x1);
        assert_eq!(state.delay_timer, 0xF);
    }

    #[test]
    fn test_fx18_ld() {
        let mut state = CpuState::new();
        state.v[0x1] = 0xF;
        ld_sound(&mut state, 0x1);
        assert_eq!(state.sound_timer, 0xF);
    }

    #[test]
    fn test_fx1e_add() {
        let mut state = CpuState::new();
        state.i = 0x1;
        state.v[0x1] = 0x1;
        add_i(&mut state, 0x1);
        assert_eq!(state.i, 0x2);
    }

    #[test]
    fn test_fx29_ld() {
        let mut state = CpuState::new();
        state.v[0x1] = 0x2;
        ld_font(&mut state, 0x1);
        assert_eq!(state.i, 0xA);
        assert_eq!(state.memory[0xA..0xF], [0xF0, 0x10, 0xF0, 0x80, 0xF0]);
    }

    #[test]
    fn test_fx33_ld() {
        let mut state = CpuState::new();
        // 0x7B -> 123
        state.v[0x1] = 0x7B;
        state.i = 0x200;
        ld_bcd(&mut state, 0x1).unwrap();
        assert_eq!(state.memory[0x200..0x203], [0x1, 0x2, 0x3]);
    }

    #[test]
    fn test_fx33_ld_out_of_bounds() {
        let mut state = CpuState::new();
        state.i = 0xFFE;
        assert!(ld_bcd(&mut state, 0x1).is_err());
        assert_eq!(state.pc, 0x200);
    }

    #[test]
    fn test_fx55_ld() {
        let mut state = CpuState::new();
        state.i = 0x300;
        state.v[0x0..0x6].copy_from_slice(&[0x1, 0x2, 0x3, 0x4, 0x5, 0x6]);
        store_registers(&mut state, 0x4).unwrap();
        assert_eq!(state.memory[0x300..0x306], [0x1, 0x2, 0x3, 0x4, 0x5, 0x0]);
        assert_eq!(state.i, 0x300);
    }

    #[test]
    fn test_fx65_ld() {
        let mut state = CpuState::new();
        state.i = 0x300;
        state.memory[0x300..0x306].copy_from_slice(&[0x1, 0x2, 0x3, 0x4, 0x5, 0x6]);
        load_registers(&mut state, 0x4).unwrap();
        assert_eq!(state.v[0x0..0x6], [0x1, 0x2, 0x3, 0x4, 0x5, 0x0]);
    }

    #[test]
    fn test_fx65_ld_out_of_bounds() {
        let mut state = CpuState::new();
        state.i = 0xFFC;
        assert!(load_registers(&mut state, 0xF).is_err());
        assert_eq!(state.v, [0; 16]);
    }
}
