//! Reversible building blocks: gates, the ripple-carry adder, and the controlled selector.

pub mod adder;
pub mod gates;
pub mod select;
