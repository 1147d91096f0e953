//! Adder blocks predicated on a single control bit.

use super::adder::ReversibleAdder;
use crate::defs::Error;

/// Add-or-subtract selected by a control bit, without branching on the control.
///
/// Both predicated blocks are always applied. For any concrete control value
/// exactly one of them has an effect and the other acts as identity.
pub struct ControlledSelector;

impl ControlledSelector {
    /// Computes `b := b + a` if `z` is clear and `b := b - a` if `z` is set, modulo 2^n.
    ///
    /// Applying it with `z` and then with `!z` restores `b`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `a` and `b` differ in width.
    pub fn add_or_sub(z: bool, a: &mut [bool], b: &mut [bool]) -> Result<(), Error> {
        ReversibleAdder::check_widths(a, b)?;

        ReversibleAdder::add_gated(!z, a, b);
        ReversibleAdder::sub_gated(z, a, b);

        Ok(())
    }

    /// Computes `b := b + a` if `z` is set, otherwise leaves `b` unchanged.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `a` and `b` differ in width.
    pub fn add_if(z: bool, a: &mut [bool], b: &mut [bool]) -> Result<(), Error> {
        ReversibleAdder::check_widths(a, b)?;
        ReversibleAdder::add_gated(z, a, b);
        Ok(())
    }

    /// Inverse of `add_if`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `a` and `b` differ in width.
    pub fn sub_if(z: bool, a: &mut [bool], b: &mut [bool]) -> Result<(), Error> {
        ReversibleAdder::check_widths(a, b)?;
        ReversibleAdder::sub_gated(z, a, b);
        Ok(())
    }
}
