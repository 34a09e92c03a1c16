use std::io::Read;

use log::{debug, trace};

use crate::constants::{MEMORY_SIZE, PROGRAM_ADDRESS, TIMER_INTERVAL};
use crate::fault::Fault;
use crate::instruction;
use crate::quirks::Quirks;
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// A machine owns its State and steps it one instruction or one timer
/// tick at a time. Any fault an instruction raises is handed back to
/// the caller and the machine makes no further progress on its own.
pub struct Chip8 {
    state: State,
    quirks: Quirks,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_quirks(Quirks::default())
    }

    pub fn with_quirks(quirks: Quirks) -> Self {
        Chip8 {
            state: State::new(),
            quirks,
        }
    }

    /// Loads a program image into memory at the program address
    ///
    /// Hands back the number of bytes loaded.
    ///
    /// # Arguments
    /// * `reader` the source of the program image
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<usize, Fault> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        let start = PROGRAM_ADDRESS as usize;
        let max = MEMORY_SIZE - start;
        if rom.len() > max {
            return Err(Fault::OversizedImage {
                size: rom.len(),
                max,
            });
        }
        self.state.memory[start..start + rom.len()].copy_from_slice(&rom);
        debug!("loaded a {} byte rom", rom.len());
        Ok(rom.len())
    }

    /// Takes the frame buffer if an instruction has drawn since the
    /// last take
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Records a key press, completing a pending key wait if one is
    /// blocking the cpu
    ///
    /// # Arguments
    /// * `key` the hex key being pressed
    pub fn key_press(&mut self, key: u8) {
        self.state.pressed_key = Some(key);
        if let Some(register) = self.state.register_needing_key.take() {
            self.state.v[register as usize] = key;
        }
    }

    /// Records a key release
    ///
    /// Only the currently held key can be released; a stale release
    /// for some other key is ignored.
    ///
    /// # Arguments
    /// * `key` the hex key being released
    pub fn key_release(&mut self, key: u8) {
        if self.state.pressed_key == Some(key) {
            self.state.pressed_key = None;
        }
    }

    /// Runs a single cpu cycle: fetch one opcode and execute it
    ///
    /// Does nothing while a key wait is blocking the cpu.
    pub fn advance_cpu(&mut self) -> Result<(), Fault> {
        if self.state.register_needing_key.is_some() {
            return Ok(());
        }
        let op: u16 = self.fetch()?;
        trace!(
            "op {:04X} i {:04X} pc {:04X} v {:02X?}",
            op,
            self.state.i,
            self.state.pc,
            self.state.v
        );
        instruction::from_op(&op)(&op, &mut self.state, self.quirks)
    }

    /// Runs a single timer cycle if one is due
    ///
    /// Timers tick at 60hz regardless of cpu speed. Each call consumes
    /// at most one tick, so callers that fall behind catch up by
    /// calling again. Hands back true if the sound timer was running
    /// this tick and the tone should sound.
    pub fn advance_timers(&mut self) -> bool {
        if self.state.last_tick.elapsed() < TIMER_INTERVAL {
            return false;
        }
        self.state.last_tick += TIMER_INTERVAL;
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }
        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
            return true;
        }
        false
    }

    /// Fetches the big-endian opcode at the program counter and
    /// advances the program counter past it
    fn fetch(&mut self) -> Result<u16, Fault> {
        let pc = self.state.pc as usize;
        if pc + 1 >= MEMORY_SIZE {
            return Err(Fault::OutOfBounds { address: pc });
        }
        let left = u16::from(self.state.memory[pc]);
        let right = u16::from(self.state.memory[pc + 1]);
        self.state.pc += 0x2;
        Ok(left << 8 | right)
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
