//! Integer square root with remainder computed by a reversible circuit.
//!
//! The non-restoring square root recurrence is carried out entirely with
//! elementary invertible bit operations (NOT, controlled NOT, Toffoli, Peres and
//! swap gates) over fixed-width registers. No scratch bits are used and no
//! information is discarded, so the whole computation can be run backwards.
//!
//! ```
//! use revsqrt::sqrt_rem;
//!
//! assert_eq!(sqrt_rem(26).unwrap(), (5, 1));
//! assert_eq!(sqrt_rem(121).unwrap(), (11, 0));
//! ```
//!
//! The engine can also be driven phase by phase and returned to its initial state:
//!
//! ```
//! use revsqrt::{SqrtEngine, BitOrder};
//!
//! let mut engine = SqrtEngine::new(48).unwrap();
//! engine.run().unwrap();
//! assert_eq!(engine.root().unwrap(), 6);
//! assert_eq!(engine.remainder().unwrap(), 12);
//!
//! engine.uncompute().unwrap();
//! assert_eq!(engine.residual().to_integer(BitOrder::LsbFirst).unwrap(), 48);
//! ```

#![deny(clippy::suspicious)]

mod circuit;
mod common;
mod defs;
mod engine;

/// Plain integer implementations used as a reference.
pub mod reference;

pub use crate::circuit::adder::ReversibleAdder;
pub use crate::circuit::gates;
pub use crate::circuit::select::ControlledSelector;
pub use crate::common::buf::BitBuf;
pub use crate::common::util::bits_to_integer;
pub use crate::common::util::compute_width;
pub use crate::common::util::integer_to_bits;
pub use crate::defs::BitOrder;
pub use crate::defs::Error;
pub use crate::defs::Value;
pub use crate::defs::MAX_WIDTH;
pub use crate::defs::MIN_WIDTH;
pub use crate::engine::sqrt_rem;
pub use crate::engine::SqrtEngine;
pub use crate::engine::Stage;
