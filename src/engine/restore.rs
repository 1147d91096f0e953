//! Remainder restoration.

use super::{SqrtEngine, Stage};
use crate::circuit::gates::{cnot, cnot_inv, not, swap_down, swap_up};
use crate::circuit::select::ControlledSelector;
use crate::defs::Error;

impl SqrtEngine {
    /// Records the last root digit, adds `F` back to `R` if the last residual
    /// went negative, moves the last digit into the chain, and clears `z`.
    pub fn remainder_restoration(&mut self) -> Result<(), Error> {
        self.expect_stage(Stage::Recurred)?;
        let (n, h) = (self.n, self.n / 2 + 1);

        self.clear_digit_marker();

        let top = self.r_top();
        cnot_inv(true, top, &mut self.z);
        cnot_inv(true, top, &mut self.f[h]);

        // z is clear here exactly when the residual is negative
        not(true, &mut self.z);
        let z = self.z;
        let (f, r) = self.windows(n / 2)?;
        ControlledSelector::add_if(z, f, r)?;
        not(true, &mut self.z);

        swap_down(true, &mut self.f, h, 2);

        let d = self.f[2];
        cnot(true, d, &mut self.z);

        log::trace!("remainder restoration: z = {}", self.z);

        self.stage = Stage::Restored;
        Ok(())
    }

    /// Inverse of `remainder_restoration`.
    pub fn undo_remainder_restoration(&mut self) -> Result<(), Error> {
        self.expect_stage(Stage::Restored)?;
        let (n, h) = (self.n, self.n / 2 + 1);

        let d = self.f[2];
        cnot(true, d, &mut self.z);

        swap_up(true, &mut self.f, 2, h);

        not(true, &mut self.z);
        let z = self.z;
        let (f, r) = self.windows(n / 2)?;
        ControlledSelector::sub_if(z, f, r)?;
        not(true, &mut self.z);

        let top = self.r_top();
        cnot_inv(true, top, &mut self.f[h]);
        cnot_inv(true, top, &mut self.z);

        self.restore_digit_marker();

        self.stage = Stage::Recurred;
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::BitOrder;

    #[test]
    fn test_remainder_restoration() {
        for a in 0..3000 {
            let mut e = SqrtEngine::new(a).unwrap();
            e.initial_subtraction().unwrap();
            e.conditional_add_sub().unwrap();

            let before = e.clone();
            e.remainder_restoration().unwrap();

            // remainder is never negative
            assert!(!e.r_top());
            assert!(!e.sign_flag());

            e.undo_remainder_restoration().unwrap();
            assert_eq!(e.residual(), before.residual());
            assert_eq!(e.working(), before.working());
            assert_eq!(e.sign_flag(), before.sign_flag());
        }
    }

    #[test]
    fn test_restoration_adds_back() {
        // 8 = 00 10 00: the last step leaves 100 - 101 = -1, then 2 * 2 + 1 is added back
        let mut e = SqrtEngine::new(8).unwrap();
        e.initial_subtraction().unwrap();
        e.conditional_add_sub().unwrap();
        assert!(e.r_top());
        assert_eq!(e.residual().to_integer(BitOrder::LsbFirst).unwrap(), 0b111111);

        e.remainder_restoration().unwrap();
        assert_eq!(e.residual().to_integer(BitOrder::LsbFirst).unwrap(), 4);
        assert_eq!(e.root().unwrap(), 2);

        // 15 = 00 11 11: the last residual is already non-negative
        let mut e = SqrtEngine::new(15).unwrap();
        e.initial_subtraction().unwrap();
        e.conditional_add_sub().unwrap();
        assert!(!e.r_top());
        assert_eq!(e.residual().to_integer(BitOrder::LsbFirst).unwrap(), 6);

        e.remainder_restoration().unwrap();
        assert_eq!(e.residual().to_integer(BitOrder::LsbFirst).unwrap(), 6);
        assert_eq!(e.root().unwrap(), 3);
    }
}
