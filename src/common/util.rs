//! Auxiliary functions.

use super::buf::BitBuf;
use crate::defs::BitOrder;
use crate::defs::Error;
use crate::defs::Value;
use crate::defs::MAX_WIDTH;
use crate::defs::MIN_WIDTH;

/// Number of bits required to represent `a`, i.e. ceil(log2(a + 1)).
#[inline]
pub fn log2_ceil_inc(a: u64) -> usize {
    (u64::BITS - a.leading_zeros()) as usize
}

/// Register width for the input `a`.
///
/// The width is even, at least `MIN_WIDTH`, and leaves the most significant bit
/// clear so that it can serve as the sign of the residual.
pub fn compute_width(a: u64) -> usize {
    let mut n = log2_ceil_inc(a);

    if n % 2 == 1 {
        n += 1;
    } else if n > 0 && (a >> (n - 1)) & 1 == 1 {
        n += 2;
    }

    n.max(MIN_WIDTH)
}

/// Converts bits to an integer; `order` tells which end of `bits` is the least significant.
///
/// ## Errors
///
///  - InvalidWidth: `bits` is longer than the number of bits in `Value`.
pub fn bits_to_integer(bits: &[bool], order: BitOrder) -> Result<Value, Error> {
    if bits.len() > MAX_WIDTH {
        return Err(Error::InvalidWidth(bits.len()));
    }

    let push = |acc: Value, b: &bool| (acc << 1) | *b as Value;

    let v = match order {
        BitOrder::LsbFirst => bits.iter().rev().fold(0, push),
        BitOrder::MsbFirst => bits.iter().fold(0, push),
    };

    Ok(v)
}

/// Converts an integer to a buffer of `width` bits laid out according to `order`.
///
/// ## Errors
///
///  - InvalidWidth: `width` is greater than the number of bits in `Value`.
///  - InvalidArgument: `value` does not fit in `width` bits.
#[inline]
pub fn integer_to_bits(value: Value, width: usize, order: BitOrder) -> Result<BitBuf, Error> {
    BitBuf::from_integer(value, width, order)
}
