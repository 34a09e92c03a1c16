use std::time::Duration;

/// Horizontal display resolution in pixels
pub const DISPLAY_WIDTH: usize = 64;

/// Vertical display resolution in pixels
pub const DISPLAY_HEIGHT: usize = 32;

/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Maximum number of in-flight subroutine calls
pub const STACK_DEPTH: usize = 16;

/// The address that roms are loaded at and that the pc starts from
pub const PROGRAM_ADDRESS: u16 = 0x200;

/// The address the builtin sprite sheet is installed at
pub const SPRITE_SHEET_ADDRESS: u16 = 0x50;

/// How long a 60Hz timer tick lasts
pub const TIMER_INTERVAL: Duration = Duration::from_micros(16_667);

/// How many cpu cycles to run per 60Hz frame
pub const INSTRUCTIONS_PER_FRAME: usize = 15;

/// Sprites for the hexadecimal digits 0..F
///
/// Each sprite is 8x5 pixels with one byte per row; only the high
/// nibble of each row is drawn. They live in memory so that programs
/// can point I at them (directly or via Fx29) and draw them like any
/// other sprite.
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
