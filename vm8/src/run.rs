use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8::constants::{INSTRUCTIONS_PER_FRAME, TIMER_INTERVAL};
use chip8::{Chip8, Quirks};
use display::Display;

use crate::audio::Audio;
use crate::keymap::keymap;

/// Runs a rom until the window is closed or the machine faults
///
/// The loop paces itself against the 60hz timer interval: each pass
/// pumps input, runs a frame's worth of instructions with timer ticks
/// interleaved, renders if anything was drawn, and sleeps off the rest
/// of the interval. Holding space skips the sleep.
///
/// # Arguments
/// * `rom` the path of the rom to run
/// * `scale` the size multiplier for each display pixel
/// * `quirks` the interpreter quirks to run with
pub fn run(rom: PathBuf, scale: u32, quirks: Quirks) -> Result<(), Box<dyn Error>> {
    let mut chip8 = Chip8::with_quirks(quirks);

    let file = File::open(&rom)?;
    let mut reader = BufReader::new(file);
    let size = chip8.load_rom(&mut reader)?;
    info!("loaded {} byte rom from {}", size, rom.display());

    let sdl = sdl2::init()?;
    let mut display = Display::new(&sdl, scale)?;
    let mut audio = Audio::new(&sdl)?;
    let mut events = sdl.event_pump()?;

    let mut fast_forward = false;
    let mut last_frame = Instant::now();

    'frame: loop {
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'frame,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'frame,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        for _ in 0..INSTRUCTIONS_PER_FRAME {
            if chip8.advance_timers() {
                audio.tone();
            }
            chip8.advance_cpu()?;
        }

        if let Some(frame) = chip8.take_frame() {
            display.render(&frame)?;
        }

        let elapsed = last_frame.elapsed();
        if !fast_forward && TIMER_INTERVAL > elapsed {
            thread::sleep(TIMER_INTERVAL - elapsed);
        }
        last_frame = Instant::now();
    }

    Ok(())
}
