//! Square root and remainder by a reversible non-restoring digit recurrence.
//!
//! The engine owns three registers: the residual `R`, the working register `F`
//! and the sign flag `z`. `R` starts as the input and `F` as the constant 1.
//! The computation runs in three phases, each a fixed sequence of invertible
//! gates, after which `F` holds the root shifted up by two bits and `R` holds
//! the remainder. Every phase has an inverse, so a finished engine can be
//! returned to its initial state.

mod initial;
mod recurrence;
mod restore;

use crate::common::buf::BitBuf;
use crate::common::util::bits_to_integer;
use crate::common::util::compute_width;
use crate::defs::BitOrder;
use crate::defs::Error;
use crate::defs::Value;
use crate::defs::MAX_WIDTH;
use crate::defs::MIN_WIDTH;

/// Offset of the root digits in the working register.
const ROOT_OFFSET: usize = 2;

/// Phase the engine has completed.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Stage {
    /// Registers hold the initial values.
    Loaded,

    /// Initial subtraction is done.
    Subtracted,

    /// All recurrence steps are done.
    Recurred,

    /// Remainder is restored; the result can be read.
    Restored,
}

/// Reversible square root engine for a single input.
#[derive(Debug, Clone)]
pub struct SqrtEngine {
    r: BitBuf,
    f: BitBuf,
    z: bool,
    n: usize,
    stage: Stage,
}

impl SqrtEngine {
    /// Creates an engine for `a` with the width derived by `compute_width`.
    pub fn new(a: u64) -> Result<Self, Error> {
        Self::with_width(a, compute_width(a))
    }

    /// Creates an engine for `a` with registers of `width` bits.
    ///
    /// ## Errors
    ///
    ///  - InvalidWidth: `width` is odd, less than `MIN_WIDTH`, greater than `MAX_WIDTH`,
    ///    or `a` does not fit below the most significant bit.
    pub fn with_width(a: u64, width: usize) -> Result<Self, Error> {
        if width % 2 != 0 || !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
            return Err(Error::InvalidWidth(width));
        }

        if (a as Value) >> (width - 1) != 0 {
            return Err(Error::InvalidWidth(width));
        }

        let r = BitBuf::from_integer(a as Value, width, BitOrder::LsbFirst)?;

        let mut f = BitBuf::new(width);
        f.set(0, true);

        Ok(SqrtEngine {
            r,
            f,
            z: false,
            n: width,
            stage: Stage::Loaded,
        })
    }

    /// Runs all three phases.
    pub fn run(&mut self) -> Result<(), Error> {
        self.initial_subtraction()?;
        self.conditional_add_sub()?;
        self.remainder_restoration()?;

        log::debug!(
            "sqrt: width {}, root {}, remainder {}",
            self.n,
            self.root()?,
            self.remainder()?
        );

        Ok(())
    }

    /// Applies the inverse of all three phases, returning the registers to their initial values.
    pub fn uncompute(&mut self) -> Result<(), Error> {
        self.undo_remainder_restoration()?;
        self.undo_conditional_add_sub()?;
        self.undo_initial_subtraction()?;
        Ok(())
    }

    /// Returns the square root. Available after the remainder restoration.
    pub fn root(&self) -> Result<u64, Error> {
        self.expect_stage(Stage::Restored)?;

        let digits = self.f.window(ROOT_OFFSET..self.n / 2 + ROOT_OFFSET)?;
        let v = bits_to_integer(digits, BitOrder::LsbFirst)?;

        u64::try_from(v).map_err(|_| Error::InvalidArgument)
    }

    /// Returns the remainder. Available after the remainder restoration.
    pub fn remainder(&self) -> Result<u64, Error> {
        self.expect_stage(Stage::Restored)?;

        let v = self.r.to_integer(BitOrder::LsbFirst)?;

        u64::try_from(v).map_err(|_| Error::InvalidArgument)
    }

    /// Register width.
    pub fn width(&self) -> usize {
        self.n
    }

    /// Last completed phase.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Residual register.
    pub fn residual(&self) -> &BitBuf {
        &self.r
    }

    /// Working register.
    pub fn working(&self) -> &BitBuf {
        &self.f
    }

    /// Sign flag.
    pub fn sign_flag(&self) -> bool {
        self.z
    }

    fn expect_stage(&self, stage: Stage) -> Result<(), Error> {
        if self.stage != stage {
            return Err(Error::InvalidState);
        }
        Ok(())
    }

    // Most significant bit of the residual, i.e. its sign.
    #[inline]
    fn r_top(&self) -> bool {
        self.r[self.n - 1]
    }

    // Top `2k` bits of R and bottom `2k` bits of F.
    fn windows(&mut self, k: usize) -> Result<(&mut [bool], &mut [bool]), Error> {
        let n = self.n;
        let lo = n.checked_sub(2 * k).ok_or(Error::IndexOutOfRange {
            index: 2 * k - 1,
            len: n,
        })?;

        let f = self.f.window_mut(0..2 * k)?;
        let r = self.r.window_mut(lo..n)?;

        Ok((f, r))
    }
}

/// Computes the square root and the remainder of `a` with the reversible engine.
pub fn sqrt_rem(a: u64) -> Result<(u64, u64), Error> {
    let mut engine = SqrtEngine::new(a)?;
    engine.run()?;
    Ok((engine.root()?, engine.remainder()?))
}
