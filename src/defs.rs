//! Definitions.

use thiserror::Error;

/// Integer type used where bit buffers meet plain numbers.
pub type Value = u128;

/// Smallest register width the engine can work with.
///
/// The initial subtraction addresses the four most significant bits of the
/// residual register and the four least significant bits of the working register.
pub const MIN_WIDTH: usize = 4;

/// Largest width that can be converted to and from a `Value`.
pub const MAX_WIDTH: usize = Value::BITS as usize;

/// Number of bits a bit buffer stores without allocating; covers `MAX_WIDTH`.
pub const INLINE_BITS: usize = 128;

/// Order of bits in a buffer when it is converted to or from an integer.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum BitOrder {
    /// Index 0 holds the least significant bit.
    LsbFirst,

    /// Index 0 holds the most significant bit.
    MsbFirst,
}

impl BitOrder {
    /// Returns the opposite order.
    pub fn invert(&self) -> Self {
        match *self {
            BitOrder::LsbFirst => BitOrder::MsbFirst,
            BitOrder::MsbFirst => BitOrder::LsbFirst,
        }
    }
}

/// Possible errors.
#[derive(Error, PartialEq, Eq, Copy, Clone, Debug)]
pub enum Error {
    /// Register width is odd, too small, too large, or cannot hold the input.
    #[error("invalid register width {0}")]
    InvalidWidth(usize),

    /// Bit index or bit range lies outside of the register.
    #[error("bit index {index} is out of range for a register of {len} bits")]
    IndexOutOfRange { index: usize, len: usize },

    /// Invalid argument.
    #[error("invalid argument")]
    InvalidArgument,

    /// Engine phase requested out of order.
    #[error("engine phase requested out of order")]
    InvalidState,
}
