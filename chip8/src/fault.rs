use std::io;

use thiserror::Error;

/// # Faults
/// Every fault is fatal: execution stops at the operation that raised
/// it and the error is handed to the caller. The `pc` carried by the
/// stack faults is the address of the faulting instruction.
#[derive(Debug, Error)]
pub enum Fault {
    /// The program image couldn't be read at all
    #[error("program image unreadable: {0}")]
    UnreadableImage(#[from] io::Error),
    /// The program image doesn't fit in memory above the load address
    #[error("program image is {size} bytes but only {max} fit")]
    OversizedImage { size: usize, max: usize },
    /// A memory access landed outside the addressable 4096 bytes
    #[error("memory access out of bounds at {address:#06X}")]
    OutOfBounds { address: usize },
    /// A subroutine call was made with every stack slot in use
    #[error("call at {pc:#06X} overflowed the stack")]
    StackOverflow { pc: u16 },
    /// A return was executed with no call outstanding
    #[error("return at {pc:#06X} with an empty stack")]
    StackUnderflow { pc: u16 },
}
