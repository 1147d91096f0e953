//! Conditional addition or subtraction, one root digit per step.

use super::{SqrtEngine, Stage};
use crate::circuit::gates::{cnot, cnot_inv, swap_down, swap_up};
use crate::circuit::select::ControlledSelector;
use crate::defs::Error;

impl SqrtEngine {
    /// Main loop of the recurrence.
    ///
    /// Step `i` runs from 2 up to `n/2 - 1`. Each step records the digit resolved
    /// by the previous step, slides it into the digit chain of `F`, and adds or
    /// subtracts `F` over the top `2i + 2` bits of `R` depending on `z`.
    pub fn conditional_add_sub(&mut self) -> Result<(), Error> {
        self.expect_stage(Stage::Subtracted)?;

        for i in 2..self.n / 2 {
            self.recurrence_step(i)?;
        }

        self.stage = Stage::Recurred;
        Ok(())
    }

    /// Inverse of `conditional_add_sub`.
    pub fn undo_conditional_add_sub(&mut self) -> Result<(), Error> {
        self.expect_stage(Stage::Recurred)?;

        for i in (2..self.n / 2).rev() {
            self.undo_recurrence_step(i)?;
        }

        self.stage = Stage::Subtracted;
        Ok(())
    }

    fn recurrence_step(&mut self, i: usize) -> Result<(), Error> {
        self.clear_digit_marker();

        let top = self.r_top();
        cnot(true, top, &mut self.f[1]);
        cnot_inv(true, top, &mut self.z);

        // new digit enters above the chain and is moved down to position 3
        cnot_inv(true, top, &mut self.f[i + 1]);
        swap_down(true, &mut self.f, i + 1, 2);

        let z = self.z;
        let (f, r) = self.windows(i + 1)?;
        ControlledSelector::add_or_sub(z, f, r)?;

        log::trace!("recurrence step {}: z = {}", i, self.z);

        Ok(())
    }

    fn undo_recurrence_step(&mut self, i: usize) -> Result<(), Error> {
        let z = self.z;
        let (f, r) = self.windows(i + 1)?;
        ControlledSelector::add_or_sub(!z, f, r)?;

        swap_up(true, &mut self.f, 2, i + 1);

        let top = self.r_top();
        cnot_inv(true, top, &mut self.f[i + 1]);
        cnot_inv(true, top, &mut self.z);
        cnot(true, top, &mut self.f[1]);

        self.restore_digit_marker();

        Ok(())
    }

    // F[1] and z are reset from the previous digit held in F[2]:
    // F[1] ^= !z, then z ^= F[2].
    pub(super) fn clear_digit_marker(&mut self) {
        let z = self.z;
        cnot_inv(true, z, &mut self.f[1]);
        let d = self.f[2];
        cnot(true, d, &mut self.z);
    }

    pub(super) fn restore_digit_marker(&mut self) {
        let d = self.f[2];
        cnot(true, d, &mut self.z);
        let z = self.z;
        cnot_inv(true, z, &mut self.f[1]);
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    #[test]
    fn test_recurrence_steps() {
        for _ in 0..1000 {
            let a = random::<u64>() >> (random::<u32>() % 64);
            let mut e = SqrtEngine::new(a).unwrap();
            e.initial_subtraction().unwrap();

            let before = e.clone();
            for i in 2..e.width() / 2 {
                e.recurrence_step(i).unwrap();

                // the digit chain grows by one bit per step
                assert!(e.working()[i + 2..].iter().all(|x| !*x));
            }

            e.stage = Stage::Recurred;
            e.undo_conditional_add_sub().unwrap();

            assert_eq!(e.residual(), before.residual());
            assert_eq!(e.working(), before.working());
            assert_eq!(e.sign_flag(), before.sign_flag());
        }
    }

    #[test]
    fn test_digit_marker() {
        let mut e = SqrtEngine::new(100).unwrap();
        let cases = [
            (false, false, false),
            (true, true, false),
            (false, true, true),
            (true, false, true),
        ];
        for (z, f1, f2) in cases {
            e.z = z;
            e.f.set(1, f1);
            e.f.set(2, f2);

            e.clear_digit_marker();
            e.restore_digit_marker();

            assert_eq!((e.z, e.f.get(1), e.f.get(2)), (z, f1, f2));
        }
    }
}
