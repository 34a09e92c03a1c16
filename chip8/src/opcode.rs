/// # Opcodes
///
/// Every Chip-8 opcode is a single 16-bit word. Dispatch cases on some
/// combination of its nibbles:
/// - `(n, _, _, _)` the group; meaningful for every opcode
/// - `(_, _, _, n)` the specific operation within a group
/// - `(_, _, n, n)` a narrower operation selector
/// - `(_, n, n, n)` a fixed operation with no operands (e.g. 00E0)
///
/// The nibbles that don't select the operation carry its operands:
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` a byte assigned to and/or compared with Vx
/// - `(_, n, _, _)` the register Vx or the register range V0..Vx
/// - `(_, _, n, _)` the register Vy
///
/// Extraction is pure bit fiddling; any 16-bit value decodes.
pub trait Opcode {
    /// Splits the Opcode into its four nibbles, high to low.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// The Vx register selector.
    /// `[_x__]`
    fn x(&self) -> u8;

    /// The Vy register selector.
    /// `[__y_]`
    fn y(&self) -> u8;

    /// The immediate nibble.
    /// `[___n]`
    fn n(&self) -> u8;

    /// The immediate byte.
    /// `[__kk]`
    fn kk(&self) -> u8;

    /// The 12-bit address immediate.
    /// `[_adr]`
    fn addr(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (((self & 0xF000) >> 12) as u8, self.x(), self.y(), self.n())
    }

    fn x(&self) -> u8 {
        ((self & 0x0F00) >> 8) as u8
    }

    fn y(&self) -> u8 {
        ((self & 0x00F0) >> 4) as u8
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn kk(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn addr(&self) -> u16 {
        self & 0x0FFF
    }
}
