use std::time::Instant;

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, MEMORY_SIZE, PROGRAM_ADDRESS, SPRITE_SHEET,
    SPRITE_SHEET_ADDRESS, STACK_DEPTH,
};

/// The Chip-8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) doubles as the carry/borrow/collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter, advanced past an opcode when it is
///   fetched
///
/// Pointer
/// - (sp) an 8-bit stack pointer; points at the next free slot
///
/// Timers
/// - 2 8-bit timers (delay & sound) decremented at 60Hz of wall-clock
///   time, independent of how fast the CPU is cycled
/// - (last_tick) when the timers last consumed a 60Hz tick
///
/// ## Memory
/// - a 16 entry stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x50..0xA0 holds the builtin sprite sheet
///     - 0x200 is where programs are loaded
/// - a 64x32 frame buffer of on/off pixels
///     - (draw_flag) set whenever the frame buffer changes
///
/// ## Input
/// - (pressed_key) the most recently pressed key while it is held
/// - (register_needing_key) set while execution is halted until a key
///   press supplies that register
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub last_tick: Instant,
    pub stack: [u16; STACK_DEPTH],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub pressed_key: Option<u8>,
    pub register_needing_key: Option<u8>,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        let sprites = SPRITE_SHEET_ADDRESS as usize;
        memory[sprites..sprites + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_ADDRESS,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            last_tick: Instant::now(),
            stack: [0; STACK_DEPTH],
            memory,
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
            pressed_key: None,
            register_needing_key: None,
        }
    }
}

/// The FrameBuffer is indexed as [y][x]
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
