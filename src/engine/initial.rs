//! Initial subtraction.

use super::{SqrtEngine, Stage};
use crate::circuit::gates::{cnot, cnot_inv, not};
use crate::circuit::select::ControlledSelector;
use crate::defs::Error;

impl SqrtEngine {
    /// First recurrence step on the two most significant bits of the input.
    ///
    /// Subtracts 1 from the leading digit pair, derives the first root digit
    /// and the sign flag from the result, and applies the first conditional
    /// add-or-subtract over the top four bits of `R`.
    pub fn initial_subtraction(&mut self) -> Result<(), Error> {
        self.expect_stage(Stage::Loaded)?;
        let n = self.n;

        not(true, &mut self.r[n - 2]);
        let c = self.r[n - 2];
        cnot(true, c, &mut self.r[n - 1]);

        let top = self.r_top();
        cnot(true, top, &mut self.f[1]);
        cnot_inv(true, top, &mut self.z);
        cnot_inv(true, top, &mut self.f[2]);

        let z = self.z;
        let (f, r) = self.windows(2)?;
        ControlledSelector::add_or_sub(z, f, r)?;

        log::trace!("initial subtraction: z = {}", self.z);

        self.stage = Stage::Subtracted;
        Ok(())
    }

    /// Inverse of `initial_subtraction`.
    pub fn undo_initial_subtraction(&mut self) -> Result<(), Error> {
        self.expect_stage(Stage::Subtracted)?;
        let n = self.n;

        let z = self.z;
        let (f, r) = self.windows(2)?;
        ControlledSelector::add_or_sub(!z, f, r)?;

        let top = self.r_top();
        cnot_inv(true, top, &mut self.f[2]);
        cnot_inv(true, top, &mut self.z);
        cnot(true, top, &mut self.f[1]);

        let c = self.r[n - 2];
        cnot(true, c, &mut self.r[n - 1]);
        not(true, &mut self.r[n - 2]);

        self.stage = Stage::Loaded;
        Ok(())
    }
}
