pub use chip8::Chip8;
pub use fault::Fault;
pub use quirks::Quirks;

mod chip8;
pub mod constants;
mod fault;
mod instruction;
mod opcode;
mod operations;
mod quirks;
pub mod state;
