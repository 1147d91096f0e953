//! Register storage and conversions between registers and integers.

pub mod buf;
pub mod util;
