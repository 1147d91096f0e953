//! Buffer for holding register bits.

use crate::defs::BitOrder;
use crate::defs::Error;
use crate::defs::Value;
use crate::defs::INLINE_BITS;
use crate::defs::MAX_WIDTH;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::ops::Range;
use core::slice::SliceIndex;
use smallvec::SmallVec;

/// Fixed-length buffer of bits, least significant bit at index 0.
///
/// The length is set at creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitBuf {
    inner: SmallVec<[bool; INLINE_BITS]>,
}

impl BitBuf {
    /// Creates a buffer of `width` cleared bits.
    #[inline]
    pub fn new(width: usize) -> Self {
        BitBuf {
            inner: SmallVec::from_elem(false, width),
        }
    }

    /// Creates a buffer of `width` bits holding `value`.
    ///
    /// `order` describes how the resulting buffer is indexed: `LsbFirst` gives the
    /// canonical layout used by all arithmetic in the crate.
    ///
    /// ## Errors
    ///
    ///  - InvalidWidth: `width` is greater than the number of bits in `Value`.
    ///  - InvalidArgument: `value` does not fit in `width` bits.
    pub fn from_integer(value: Value, width: usize, order: BitOrder) -> Result<Self, Error> {
        if width > MAX_WIDTH {
            return Err(Error::InvalidWidth(width));
        }

        if width < MAX_WIDTH && value >> width != 0 {
            return Err(Error::InvalidArgument);
        }

        let mut buf = Self::new(width);
        for (i, bit) in buf.inner.iter_mut().enumerate() {
            *bit = (value >> i) & 1 == 1;
        }

        if order == BitOrder::MsbFirst {
            buf.inner.reverse();
        }

        Ok(buf)
    }

    /// Reads the buffer as an integer, interpreting index 0 according to `order`.
    ///
    /// ## Errors
    ///
    ///  - InvalidWidth: the buffer is wider than the number of bits in `Value`.
    pub fn to_integer(&self, order: BitOrder) -> Result<Value, Error> {
        super::util::bits_to_integer(&self.inner, order)
    }

    /// Returns the number of bits in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the buffer holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> bool {
        self.inner[i]
    }

    #[inline]
    pub fn set(&mut self, i: usize, bit: bool) {
        self.inner[i] = bit;
    }

    /// Toggles bit `i`.
    #[inline]
    pub fn flip(&mut self, i: usize) {
        self.inner[i] ^= true;
    }

    /// Exchanges bits `i` and `j`.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.inner.swap(i, j);
    }

    /// Returns the bits in `rng`.
    ///
    /// ## Errors
    ///
    ///  - IndexOutOfRange: `rng` is reversed or extends past the end of the buffer.
    pub fn window(&self, rng: Range<usize>) -> Result<&[bool], Error> {
        self.check_range(&rng)?;
        Ok(&self.inner[rng])
    }

    /// Returns the bits in `rng` for modification.
    ///
    /// ## Errors
    ///
    ///  - IndexOutOfRange: `rng` is reversed or extends past the end of the buffer.
    pub fn window_mut(&mut self, rng: Range<usize>) -> Result<&mut [bool], Error> {
        self.check_range(&rng)?;
        Ok(&mut self.inner[rng])
    }

    fn check_range(&self, rng: &Range<usize>) -> Result<(), Error> {
        let len = self.len();
        if rng.end > len {
            Err(Error::IndexOutOfRange {
                index: rng.end - 1,
                len,
            })
        } else if rng.start > rng.end {
            Err(Error::IndexOutOfRange {
                index: rng.start,
                len,
            })
        } else {
            Ok(())
        }
    }

    /// Returns a buffer of `width` random bits.
    #[cfg(feature = "random")]
    pub fn random(width: usize) -> Self {
        let mut buf = Self::new(width);
        for bit in buf.inner.iter_mut() {
            *bit = rand::random::<bool>();
        }
        buf
    }
}

impl<I: SliceIndex<[bool]>> IndexMut<I> for BitBuf {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl<I: SliceIndex<[bool]>> Index<I> for BitBuf {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.inner.index(index)
    }
}

impl Deref for BitBuf {
    type Target = [bool];

    #[inline]
    fn deref(&self) -> &[bool] {
        self.inner.deref()
    }
}

impl DerefMut for BitBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [bool] {
        self.inner.deref_mut()
    }
}
