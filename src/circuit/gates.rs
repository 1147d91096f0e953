//! Elementary invertible gates.
//!
//! Each gate takes an enable line `ctrl`. A gate whose enable line is clear leaves
//! its target untouched, which lets a whole block of gates be predicated on one
//! control bit without branching on register contents.
//! All gates except Peres are their own inverse.

/// Toggles `t` if `predicate` holds.
#[inline]
pub fn toggle_if(t: &mut bool, predicate: bool) {
    *t ^= predicate;
}

/// Inverts `t`.
#[inline]
pub fn not(ctrl: bool, t: &mut bool) {
    toggle_if(t, ctrl);
}

/// Toggles `t` if `c` is set.
#[inline]
pub fn cnot(ctrl: bool, c: bool, t: &mut bool) {
    toggle_if(t, ctrl & c);
}

/// Toggles `t` if `c` is clear.
#[inline]
pub fn cnot_inv(ctrl: bool, c: bool, t: &mut bool) {
    toggle_if(t, ctrl & !c);
}

/// Toggles `t` if both `c1` and `c2` are set.
#[inline]
pub fn toffoli(ctrl: bool, c1: bool, c2: bool, t: &mut bool) {
    toggle_if(t, ctrl & c1 & c2);
}

/// Peres gate: `c ^= a & b`, then `b ^= a`.
#[inline]
pub fn peres(ctrl: bool, a: bool, b: &mut bool, c: &mut bool) {
    toffoli(ctrl, a, *b, c);
    cnot(ctrl, a, b);
}

/// Inverse of the Peres gate.
#[inline]
pub fn peres_inv(ctrl: bool, a: bool, b: &mut bool, c: &mut bool) {
    cnot(ctrl, a, b);
    toffoli(ctrl, a, *b, c);
}

/// Exchanges `x` and `y`, built from three controlled toggles.
#[inline]
pub fn swap(ctrl: bool, x: &mut bool, y: &mut bool) {
    cnot(ctrl, *x, y);
    cnot(ctrl, *y, x);
    cnot(ctrl, *x, y);
}

/// Moves the bit at `from` down to `to` by exchanging adjacent pairs, highest pair first.
///
/// Bits in `to..from` move one position up.
pub fn swap_down(ctrl: bool, bits: &mut [bool], from: usize, to: usize) {
    for j in (to + 1..=from).rev() {
        let (lo, hi) = bits.split_at_mut(j);
        swap(ctrl, &mut lo[j - 1], &mut hi[0]);
    }
}

/// Inverse of `swap_down`: moves the bit at `to` up to `from`, lowest pair first.
pub fn swap_up(ctrl: bool, bits: &mut [bool], to: usize, from: usize) {
    for j in to + 1..=from {
        let (lo, hi) = bits.split_at_mut(j);
        swap(ctrl, &mut lo[j - 1], &mut hi[0]);
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const BOOLS: [bool; 2] = [false, true];

    #[test]
    fn test_gates_truth_tables() {
        for ctrl in BOOLS {
            for c1 in BOOLS {
                for c2 in BOOLS {
                    for t in BOOLS {
                        let mut x = t;
                        not(ctrl, &mut x);
                        assert_eq!(x, t ^ ctrl);

                        let mut x = t;
                        cnot(ctrl, c1, &mut x);
                        assert_eq!(x, t ^ (ctrl && c1));

                        let mut x = t;
                        cnot_inv(ctrl, c1, &mut x);
                        assert_eq!(x, t ^ (ctrl && !c1));

                        let mut x = t;
                        toffoli(ctrl, c1, c2, &mut x);
                        assert_eq!(x, t ^ (ctrl && c1 && c2));

                        let (mut b, mut c) = (c2, t);
                        peres(ctrl, c1, &mut b, &mut c);
                        if ctrl {
                            assert_eq!(c, t ^ (c1 && c2));
                            assert_eq!(b, c2 ^ c1);
                        } else {
                            assert_eq!((b, c), (c2, t));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_gates_inverse() {
        for ctrl in BOOLS {
            for a in BOOLS {
                for b in BOOLS {
                    for c in BOOLS {
                        let (mut x, mut y) = (b, c);
                        peres(ctrl, a, &mut x, &mut y);
                        peres_inv(ctrl, a, &mut x, &mut y);
                        assert_eq!((x, y), (b, c));

                        swap(ctrl, &mut x, &mut y);
                        if ctrl {
                            assert_eq!((x, y), (c, b));
                        } else {
                            assert_eq!((x, y), (b, c));
                        }
                        swap(ctrl, &mut x, &mut y);
                        assert_eq!((x, y), (b, c));

                        let mut x = c;
                        toffoli(ctrl, a, b, &mut x);
                        toffoli(ctrl, a, b, &mut x);
                        assert_eq!(x, c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_swap_chain() {
        let orig = [false, true, false, false, true, true, false];

        let mut bits = orig;
        swap_down(true, &mut bits, 4, 1);
        assert_eq!(bits, [false, true, true, false, false, true, false]);

        swap_up(true, &mut bits, 1, 4);
        assert_eq!(bits, orig);

        swap_down(false, &mut bits, 6, 0);
        assert_eq!(bits, orig);

        // empty chain
        swap_down(true, &mut bits, 3, 3);
        assert_eq!(bits, orig);
    }
}
