use std::ops::Range;

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, MEMORY_SIZE, SPRITE_SHEET_ADDRESS, STACK_DEPTH,
};
use crate::fault::Fault;
use crate::opcode::Opcode;
use crate::quirks::Quirks;
use crate::state::State;

/// Checks that len bytes starting at start stay inside memory
fn mem_range(start: usize, len: usize) -> Result<Range<usize>, Fault> {
    let end = start + len;
    if end > MEMORY_SIZE {
        Err(Fault::OutOfBounds { address: end - 1 })
    } else {
        Ok(start..end)
    }
}

/// clear
pub fn clr(_op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    state.frame_buffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    state.draw_flag = true;
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(_op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    if state.sp == 0x0 {
        return Err(Fault::StackUnderflow { pc: state.pc - 0x2 });
    }
    state.sp -= 0x1;
    state.pc = state.stack[state.sp as usize];
    Ok(())
}

/// PC = addr
pub fn jump(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    state.pc = op.addr();
    Ok(())
}

/// STACK.push(PC); PC = addr
pub fn call(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    if state.sp as usize == STACK_DEPTH {
        return Err(Fault::StackOverflow { pc: state.pc - 0x2 });
    }
    state.stack[state.sp as usize] = state.pc;
    state.sp += 0x1;
    state.pc = op.addr();
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    if state.v[op.x() as usize] == op.kk() {
        state.pc += 0x2;
    }
    Ok(())
}

/// if Vx != kk then pc += 2
pub fn skne(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    if state.v[op.x() as usize] != op.kk() {
        state.pc += 0x2;
    }
    Ok(())
}

/// if Vx == Vy then pc += 2
pub fn skre(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    if state.v[op.x() as usize] == state.v[op.y() as usize] {
        state.pc += 0x2;
    }
    Ok(())
}

/// Vx = kk
pub fn load(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    state.v[op.x() as usize] = op.kk();
    Ok(())
}

/// Vx += kk
/// Overflow wraps and leaves the carry flag alone
pub fn add(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    let x = op.x() as usize;
    state.v[x] = state.v[x].wrapping_add(op.kk());
    Ok(())
}

/// Vx = Vy
pub fn mv(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    state.v[op.x() as usize] = state.v[op.y() as usize];
    Ok(())
}

/// Vx |= Vy
pub fn or(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    state.v[op.x() as usize] |= state.v[op.y() as usize];
    Ok(())
}

/// Vx &= Vy
pub fn and(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    state.v[op.x() as usize] &= state.v[op.y() as usize];
    Ok(())
}

/// Vx ^= Vy
pub fn xor(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    state.v[op.x() as usize] ^= state.v[op.y() as usize];
    Ok(())
}

/// Vx += Vy; VF = carry
pub fn addr(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    let (res, over) = state.v[op.x() as usize].overflowing_add(state.v[op.y() as usize]);
    state.v[0xF] = if over { 0x1 } else { 0x0 };
    state.v[op.x() as usize] = res;
    Ok(())
}

/// Vx -= Vy; VF = !borrow
pub fn sub(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    let (res, under) = state.v[op.x() as usize].overflowing_sub(state.v[op.y() as usize]);
    state.v[0xF] = if under { 0x0 } else { 0x1 };
    state.v[op.x() as usize] = res;
    Ok(())
}

/// Vx >>= 1; VF = the dropped bit
/// The legacy_shift quirk shifts Vy into Vx instead
pub fn shr(op: &dyn Opcode, state: &mut State, quirks: Quirks) -> Result<(), Fault> {
    let src = if quirks.legacy_shift {
        state.v[op.y() as usize]
    } else {
        state.v[op.x() as usize]
    };
    state.v[0xF] = src & 0x1;
    state.v[op.x() as usize] = src >> 0x1;
    Ok(())
}

/// Vx = Vy - Vx; VF = !borrow
pub fn subn(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    let (res, under) = state.v[op.y() as usize].overflowing_sub(state.v[op.x() as usize]);
    state.v[0xF] = if under { 0x0 } else { 0x1 };
    state.v[op.x() as usize] = res;
    Ok(())
}

/// Vx <<= 1; VF = the dropped bit
/// The legacy_shift quirk shifts Vy into Vx instead
pub fn shl(op: &dyn Opcode, state: &mut State, quirks: Quirks) -> Result<(), Fault> {
    let src = if quirks.legacy_shift {
        state.v[op.y() as usize]
    } else {
        state.v[op.x() as usize]
    };
    state.v[0xF] = src >> 0x7;
    state.v[op.x() as usize] = src << 0x1;
    Ok(())
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    if state.v[op.x() as usize] != state.v[op.y() as usize] {
        state.pc += 0x2;
    }
    Ok(())
}

/// I = addr
pub fn loadi(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    state.i = op.addr();
    Ok(())
}

/// PC = V0 + addr
pub fn jumpi(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    state.pc = u16::from(state.v[0x0]) + op.addr();
    Ok(())
}

/// Vx = rand_byte & kk
pub fn rand(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    let rand_byte: u8 = rand::random();
    state.v[op.x() as usize] = rand_byte & op.kk();
    Ok(())
}

/// draw_sprite(x=Vx y=Vy rows=n)
/// XORs the sprite at memory[I..I+n] onto the frame buffer. The anchor
/// wraps around the display edges but individual pixels past the right
/// or bottom edge are clipped, unless the wrap_sprites quirk puts them
/// back on the opposite side. VF = 1 if any lit pixel is erased.
pub fn draw(op: &dyn Opcode, state: &mut State, quirks: Quirks) -> Result<(), Fault> {
    let rows = mem_range(state.i as usize, op.n() as usize)?;
    let origin_x = state.v[op.x() as usize] as usize % DISPLAY_WIDTH;
    let origin_y = state.v[op.y() as usize] as usize % DISPLAY_HEIGHT;

    state.v[0xF] = 0x0;
    for (row, addr) in rows.enumerate() {
        let byte = state.memory[addr];
        for bit in 0..8 {
            let mut x = origin_x + bit;
            let mut y = origin_y + row;
            if x >= DISPLAY_WIDTH || y >= DISPLAY_HEIGHT {
                if !quirks.wrap_sprites {
                    continue;
                }
                x %= DISPLAY_WIDTH;
                y %= DISPLAY_HEIGHT;
            }
            let pixel = (byte >> (7 - bit)) & 0x1;
            state.v[0xF] |= pixel & state.frame_buffer[y][x];
            state.frame_buffer[y][x] ^= pixel;
        }
    }
    state.draw_flag = true;
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    if state.pressed_key == Some(state.v[op.x() as usize] & 0xF) {
        state.pc += 0x2;
    }
    Ok(())
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    if state.pressed_key != Some(state.v[op.x() as usize] & 0xF) {
        state.pc += 0x2;
    }
    Ok(())
}

/// Vx = DT
pub fn moved(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    state.v[op.x() as usize] = state.delay_timer;
    Ok(())
}

/// halt until a key is pressed; Vx = that key
pub fn keyd(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    state.register_needing_key = Some(op.x());
    Ok(())
}

/// DT = Vx
pub fn loads(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    state.delay_timer = state.v[op.x() as usize];
    Ok(())
}

/// ST = Vx
pub fn ld(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    state.sound_timer = state.v[op.x() as usize];
    Ok(())
}

/// I += Vx
/// 16-bit overflow wraps and leaves the carry flag alone
pub fn addi(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    state.i = state.i.wrapping_add(u16::from(state.v[op.x() as usize]));
    Ok(())
}

/// I = sprite_sheet(Vx)
/// Points I at the builtin sprite for the low nibble of Vx
pub fn ldspr(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    state.i = SPRITE_SHEET_ADDRESS + u16::from(state.v[op.x() as usize] & 0xF) * 0x5;
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
/// Stores the decimal digits of Vx at I, hundreds first
pub fn bcd(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    let range = mem_range(state.i as usize, 0x3)?;
    let vx = state.v[op.x() as usize];
    state.memory[range].copy_from_slice(&[vx / 100, vx / 10 % 10, vx % 10]);
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    let count = op.x() as usize + 0x1;
    let range = mem_range(state.i as usize, count)?;
    state.memory[range].copy_from_slice(&state.v[..count]);
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: &dyn Opcode, state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    let count = op.x() as usize + 0x1;
    let range = mem_range(state.i as usize, count)?;
    state.v[..count].copy_from_slice(&state.memory[range]);
    Ok(())
}

/// 0NNN machine code calls and any encoding with no assigned operation
/// are ignored
pub fn noop(_op: &dyn Opcode, _state: &mut State, _quirks: Quirks) -> Result<(), Fault> {
    Ok(())
}
