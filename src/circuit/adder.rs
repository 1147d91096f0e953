//! Ancilla-free reversible ripple-carry adder.
//!
//! The sum is formed in the second operand while the first operand temporarily
//! holds the carries and is restored before returning. No carry bit is kept
//! unless the caller supplies one explicitly.

use super::gates::{cnot, not, peres, toffoli};
use crate::defs::Error;
use itertools::izip;

/// Reversible adder and subtractor over two registers of equal width.
pub struct ReversibleAdder;

impl ReversibleAdder {
    /// Computes `b := (b + a) mod 2^n` leaving `a` unchanged.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `a` and `b` differ in width.
    pub fn add(a: &mut [bool], b: &mut [bool]) -> Result<(), Error> {
        Self::check_widths(a, b)?;
        Self::add_gated(true, a, b);
        Ok(())
    }

    /// Computes `b := (b - a) mod 2^n` leaving `a` unchanged. Exact inverse of `add`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `a` and `b` differ in width.
    pub fn sub(a: &mut [bool], b: &mut [bool]) -> Result<(), Error> {
        Self::check_widths(a, b)?;
        Self::sub_gated(true, a, b);
        Ok(())
    }

    /// Computes `b := (b + a) mod 2^n` and toggles `carry` if the addition overflows.
    /// `a` is left unchanged.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `a` and `b` differ in width.
    pub fn add_carry(a: &mut [bool], b: &mut [bool], carry: &mut bool) -> Result<(), Error> {
        Self::check_widths(a, b)?;
        Self::add_carry_gated(true, a, b, carry);
        Ok(())
    }

    /// Computes `b := (a - b) mod 2^n` and toggles `sign` if the difference is negative.
    /// `a` is left unchanged.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `a` and `b` differ in width.
    pub fn sub_sign(a: &mut [bool], b: &mut [bool], sign: &mut bool) -> Result<(), Error> {
        Self::check_widths(a, b)?;

        // b + !a = b - a - 1, and it carries out exactly when b > a
        a.iter_mut().for_each(|x| not(true, x));
        Self::add_carry_gated(true, a, b, sign);
        a.iter_mut().for_each(|x| not(true, x));

        // !(b - a - 1) = a - b
        b.iter_mut().for_each(|x| not(true, x));

        Ok(())
    }

    #[inline]
    pub(crate) fn check_widths(a: &[bool], b: &[bool]) -> Result<(), Error> {
        if a.len() != b.len() {
            return Err(Error::InvalidArgument);
        }
        Ok(())
    }

    /// Wraparound addition, every gate enabled by `ctrl`.
    pub(crate) fn add_gated(ctrl: bool, a: &mut [bool], b: &mut [bool]) {
        debug_assert!(a.len() == b.len());

        let n = a.len();
        if n == 0 {
            return;
        }

        Self::xor_tail(ctrl, a, b);

        for i in (1..n - 1).rev() {
            let c = a[i];
            cnot(ctrl, c, &mut a[i + 1]);
        }

        Self::generate_carries(ctrl, a, b);

        // top bit has no carry line above it
        cnot(ctrl, a[n - 1], &mut b[n - 1]);

        for i in (0..n - 1).rev() {
            let c = a[i];
            peres(ctrl, c, &mut b[i], &mut a[i + 1]);
        }

        for i in 1..n - 1 {
            let c = a[i];
            cnot(ctrl, c, &mut a[i + 1]);
        }

        Self::xor_tail(ctrl, a, b);
    }

    /// Wraparound subtraction as the complement of adding to the complement.
    pub(crate) fn sub_gated(ctrl: bool, a: &mut [bool], b: &mut [bool]) {
        b.iter_mut().for_each(|x| not(ctrl, x));
        Self::add_gated(ctrl, a, b);
        b.iter_mut().for_each(|x| not(ctrl, x));
    }

    /// Addition with the carry out toggled into `carry`, which acts as `a[n]`.
    fn add_carry_gated(ctrl: bool, a: &mut [bool], b: &mut [bool], carry: &mut bool) {
        let n = a.len();
        if n == 0 {
            return;
        }

        Self::xor_tail(ctrl, a, b);

        if n > 1 {
            cnot(ctrl, a[n - 1], carry);
        }
        for i in (1..n - 1).rev() {
            let c = a[i];
            cnot(ctrl, c, &mut a[i + 1]);
        }

        Self::generate_carries(ctrl, a, b);

        let c = a[n - 1];
        peres(ctrl, c, &mut b[n - 1], carry);
        for i in (0..n - 1).rev() {
            let c = a[i];
            peres(ctrl, c, &mut b[i], &mut a[i + 1]);
        }

        for i in 1..n - 1 {
            let c = a[i];
            cnot(ctrl, c, &mut a[i + 1]);
        }

        Self::xor_tail(ctrl, a, b);
    }

    // b[i] ^= a[i] for every i above 0.
    #[inline]
    fn xor_tail(ctrl: bool, a: &[bool], b: &mut [bool]) {
        for (x, y) in izip!(a.iter().skip(1), b.iter_mut().skip(1)) {
            cnot(ctrl, *x, y);
        }
    }

    // a[i + 1] ^= a[i] & b[i], low to high.
    #[inline]
    fn generate_carries(ctrl: bool, a: &mut [bool], b: &[bool]) {
        for i in 0..a.len() - 1 {
            let c = a[i];
            toffoli(ctrl, c, b[i], &mut a[i + 1]);
        }
    }
}
