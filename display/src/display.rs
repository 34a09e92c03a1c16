use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use chip8::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chip8::state::FrameBuffer;

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// The on/off state of these pixels is encoded as 1/0 respectively in a
/// 2d array. The display only gets a call to `render` when the Chip-8
/// FrameBuffer is updated.
pub struct Display {
    canvas: WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Creates a new display window bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                "VM-8",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }

    /// Formats a Chip-8 FrameBuffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 RGB24 texture is a 1D array of bytes that represents
    /// concatenated rows of RGB pixels.
    ///
    /// This creates a black and white rendering by:
    /// - Flattening the 2D frame buffer into a 1D array by concatenating its rows
    /// - Triplicating each element of that 1D array to represent the RGB values of each pixel
    /// - Multiplying each value by 255 to convert from a binary state to 0-255 intensity
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    fn frame_to_sdl_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|a| a.iter())
            .flat_map(|a| std::iter::repeat(a).take(3))
            .map(|a| a * 255)
            .collect()
    }

    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .map_err(|e| e.to_string())?;

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&Display::frame_to_sdl_texture(frame));
            })
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
