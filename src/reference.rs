//! Plain integer versions of the square root, used to check the reversible engine.

use crate::defs::Error;

/// Non-restoring square root on native integers.
///
/// Works through `width / 2` digit pairs of `a`, most significant first. A
/// non-negative residual subtracts `4q + 1`, a negative one adds `4q + 3`, and a
/// negative final residual is corrected by adding `2q + 1`.
///
/// ## Errors
///
///  - InvalidWidth: `width` is odd.
///  - InvalidArgument: `a` does not fit in `width` bits.
pub fn non_restoring_sqrt(a: u64, width: usize) -> Result<(u64, u64), Error> {
    if width % 2 != 0 {
        return Err(Error::InvalidWidth(width));
    }

    if width < 64 && a >> width != 0 {
        return Err(Error::InvalidArgument);
    }

    let mut q: i128 = 0;
    let mut r: i128 = 0;

    for i in (0..width / 2).rev() {
        let pair = if 2 * i < 64 { ((a >> (2 * i)) & 3) as i128 } else { 0 };

        r = if r >= 0 {
            (r << 2 | pair) - (q << 2 | 1)
        } else {
            (r << 2 | pair) + (q << 2 | 3)
        };

        q = q << 1 | (r >= 0) as i128;
    }

    if r < 0 {
        r += q << 1 | 1;
    }

    Ok((q as u64, r as u64))
}

/// Integer square root, one result bit per iteration.
pub fn isqrt(a: u64) -> u64 {
    let mut x = a;
    let mut res = 0u64;
    let mut bit = 1u64 << 62;

    while bit > a {
        bit >>= 2;
    }

    while bit != 0 {
        if x >= res + bit {
            x -= res + bit;
            res = (res >> 1) + bit;
        } else {
            res >>= 1;
        }
        bit >>= 2;
    }

    res
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::util::compute_width;
    use rand::random;

    #[test]
    fn test_isqrt() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(u64::MAX), u32::MAX as u64);

        for _ in 0..10000 {
            let a = random::<u64>() >> (random::<u32>() % 64);
            let s = isqrt(a) as u128;
            assert!(s * s <= a as u128);
            assert!((s + 1) * (s + 1) > a as u128);
        }
    }

    #[test]
    fn test_non_restoring_sqrt() {
        assert_eq!(non_restoring_sqrt(26, 6).unwrap(), (5, 1));
        assert_eq!(non_restoring_sqrt(121, 8).unwrap(), (11, 0));
        assert_eq!(non_restoring_sqrt(0, 0).unwrap(), (0, 0));
        assert_eq!(non_restoring_sqrt(321131, 20).unwrap(), (566, 775));

        for a in 0..70000 {
            let s = isqrt(a);
            assert_eq!(non_restoring_sqrt(a, compute_width(a)).unwrap(), (s, a - s * s));

            // the oracle does not need a free sign bit
            let n = (64 - a.leading_zeros() as usize + 1) & !1;
            assert_eq!(non_restoring_sqrt(a, n).unwrap(), (s, a - s * s));
        }

        for _ in 0..10000 {
            let a = random::<u64>();
            let s = isqrt(a);
            assert_eq!(non_restoring_sqrt(a, 64).unwrap(), (s, a - s * s));
            assert_eq!(non_restoring_sqrt(a, 66).unwrap(), (s, a - s * s));
        }
    }

    #[test]
    fn test_non_restoring_sqrt_args() {
        assert_eq!(non_restoring_sqrt(26, 5), Err(Error::InvalidWidth(5)));
        assert_eq!(non_restoring_sqrt(64, 6), Err(Error::InvalidArgument));
        assert_eq!(non_restoring_sqrt(1, 0), Err(Error::InvalidArgument));
    }
}
