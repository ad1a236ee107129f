// Copyright 2025 The Decint Developers
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

/*!
 * This module provides the low-level operations for working with arbitrary
 * precision numbers stored as base-10^18 limbs.
 *
 * ## Overview
 *
 * This module forms the core of the library. The functions in here operate
 * on magnitudes only: little-endian slices of `Limb` with no sign attached.
 * Sign dispatch, shortcut cases and error reporting are the concern of the
 * high-level `Int` type.
 *
 * ## Limbs
 *
 * A `Limb` is a single "digit" in an arbitrary-precision integer. The
 * standard written number system is base-10: the number 251 is
 * 2 x 10^2 + 5 x 10^1 + 1 x 10^0. A `Limb` works the same way with a much
 * larger digit, holding eighteen decimal digits in one `u64` so that the
 * base is still a power of ten. That keeps conversion to and from decimal
 * text a matter of chunking, while a limb product still fits the widest
 * native integer. The word "Limb" is used by GMP to distinguish it from a
 * regular numerical digit, and there is no obvious reason to use different
 * terminology.
 *
 * ## Integer representation
 *
 * Magnitudes are passed around as slices of `Limb`s, least-significant
 * first. Producers return freshly allocated `Vec<Limb>`s that are always
 * *normalized*: no zero limbs in the highest positions, and the zero value
 * is the empty sequence. Consumers state their expectations with debug
 * assertions rather than checks; inputs are assumed valid.
 */

use std::cmp::Ordering;

mod addsub;
mod div;
mod mul;

pub mod base;
pub mod limb;
pub mod pow;

use self::limb::Limb;

pub use self::addsub::{add, add_1, add_n, sub, sub_1, sub_n};
pub use self::div::{divrem, divrem_1};
pub use self::mul::{addmul_1, mul, mul_1, submul_1};

/**
 * Called when a divide by zero occurs.
 *
 * Division by zero is a domain error with no representable result, so it
 * unwinds rather than returning a value. The `checked_*` operations on
 * `Int` are the non-panicking route.
 */
#[cold]
#[inline(never)]
pub fn divide_by_zero() -> ! {
    panic!("divide by zero")
}

/// Strips high zero limbs so the most significant limb is non-zero.
#[inline]
pub fn normalized(mut x: Vec<Limb>) -> Vec<Limb> {
    while x.last() == Some(&Limb::ZERO) {
        x.pop();
    }
    x
}

/// Borrows `x` with its high zero limbs stripped.
#[inline]
pub fn trimmed(mut x: &[Limb]) -> &[Limb] {
    while x.last() == Some(&Limb::ZERO) {
        x = &x[..x.len() - 1];
    }
    x
}

/// Checks whether the magnitude is zero.
#[inline]
pub fn is_zero(x: &[Limb]) -> bool {
    x.iter().all(|l| l.is_zero())
}

/**
 * Compares the magnitudes `x` and `y` numerically. Zero limbs in the
 * highest positions are ignored, so unnormalized inputs compare correctly.
 */
pub fn cmp(x: &[Limb], y: &[Limb]) -> Ordering {
    let x = trimmed(x);
    let y = trimmed(y);

    if x.len() != y.len() {
        return x.len().cmp(&y.len());
    }
    for (xl, yl) in x.iter().rev().zip(y.iter().rev()) {
        if xl != yl {
            return xl.cmp(yl);
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod test {
    use super::limb::Limb;
    use super::*;

    // A limb sequence from plain integers, least-significant first.
    macro_rules! limbs {
        ($($d:expr),*) => ( vec![$(Limb($d)),*] )
    }

    const B1: u64 = Limb::BASE - 1;

    #[test]
    fn test_cmp() {
        assert_eq!(cmp(&limbs![1], &limbs![2]), Ordering::Less);
        assert_eq!(cmp(&limbs![5, 1], &limbs![2]), Ordering::Greater);
        assert_eq!(cmp(&limbs![5, 1], &limbs![5, 1]), Ordering::Equal);
        assert_eq!(cmp(&limbs![9, 1], &limbs![5, 2]), Ordering::Less);
        // unnormalized operands compare by value
        assert_eq!(cmp(&limbs![5, 0], &limbs![5]), Ordering::Equal);
        assert_eq!(cmp(&[], &limbs![0]), Ordering::Equal);
    }

    #[test]
    fn test_add() {
        assert_eq!(add(&limbs![1], &limbs![2]), limbs![3]);
        // carry into a fresh top limb
        assert_eq!(add(&limbs![B1], &limbs![5]), limbs![4, 1]);
        // carry absorbed by a longer operand
        assert_eq!(add(&limbs![B1, 0, 1], &limbs![5]), limbs![4, 1, 1]);
        // carry chain across every column
        assert_eq!(add(&limbs![B1, B1], &limbs![1]), limbs![0, 0, 1]);
        assert_eq!(add(&[], &limbs![7]), limbs![7]);

        assert_eq!(add_1(&limbs![B1], Limb(1)), limbs![0, 1]);
        assert_eq!(add_1(&[], Limb(3)), limbs![3]);
    }

    #[test]
    fn test_sub() {
        assert_eq!(sub(&limbs![3], &limbs![1]), limbs![2]);
        // borrow from the next column
        assert_eq!(sub(&limbs![0, 2], &limbs![1]), limbs![B1, 1]);
        // borrow cascades across a run of zero limbs
        assert_eq!(sub(&limbs![0, 0, 0, 1], &limbs![1]), limbs![B1, B1, B1]);
        // exact cancellation normalizes to the empty magnitude
        assert!(sub(&limbs![5, 1], &limbs![5, 1]).is_empty());

        assert_eq!(sub_1(&limbs![0, 1], Limb(1)), limbs![B1]);
        assert!(sub_1(&limbs![3], Limb(3)).is_empty());
    }

    #[test]
    fn test_mul_1() {
        assert_eq!(mul_1(&limbs![10], Limb(20)), limbs![200]);
        // (BASE - 1) * 2 = BASE + (BASE - 2)
        assert_eq!(mul_1(&limbs![B1], Limb(2)), limbs![B1 - 1, 1]);
        assert_eq!(mul_1(&limbs![10, 10], Limb(2)), limbs![20, 20]);
    }

    #[test]
    fn test_mul() {
        assert_eq!(mul(&limbs![2], &limbs![2]), limbs![4]);
        // (BASE - 1)^2 = (BASE - 2)*BASE + 1
        assert_eq!(mul(&limbs![B1], &limbs![B1]), limbs![1, B1 - 1]);
        // multiplying by BASE shifts up one limb
        assert_eq!(mul(&limbs![7, 3], &limbs![0, 1]), limbs![0, 7, 3]);
        assert!(mul(&limbs![7, 3], &[]).is_empty());
    }

    #[test]
    fn test_mul_cutover() {
        // (BASE^n - 1) * (BASE^m - 1), the all-nines product, has the
        // closed form BASE^(n+m) - BASE^n - BASE^m + 1. Check it on both
        // sides of the Karatsuba threshold so the basecase and the
        // recursion agree: dispatch goes by the shorter operand, so
        // (21, 20) is the last basecase shape and (21, 21) the first
        // recursive one.
        for &(xn, yn) in &[
            (4usize, 3usize),
            (19, 19),
            (21, 20),
            (21, 21),
            (22, 21),
            (43, 30),
        ] {
            let x = vec![Limb(B1); xn];
            let y = vec![Limb(B1); yn];

            // With n = max, m = min, the digits are: 1, then m-1 zeros,
            // then nines up to position n, which drops one extra for the
            // BASE^n term, then nines to the top.
            let n = xn.max(yn);
            let m = xn.min(yn);
            let mut expected = vec![Limb(B1); n + m];
            expected[0] = Limb(1);
            for l in &mut expected[1..m] {
                *l = Limb::ZERO;
            }
            expected[n] = Limb(B1 - 1);

            assert_eq!(mul(&x, &y), expected, "{}x{} limbs", xn, yn);
        }
    }

    #[test]
    fn test_divrem_1() {
        let (q, r) = divrem_1(&limbs![7], Limb(2));
        assert_eq!((q, r), (limbs![3], Limb(1)));

        let (q, r) = divrem_1(&limbs![7], Limb(1));
        assert_eq!((q, r), (limbs![7], Limb(0)));

        // BASE / 4 reaches into the upper limb
        let (q, r) = divrem_1(&limbs![0, 1], Limb(4));
        assert_eq!((q, r), (limbs![Limb::BASE / 4], Limb(0)));

        let (q, r) = divrem_1(&limbs![1, 1], Limb(2));
        assert_eq!((q, r), (limbs![Limb::HALF_BASE], Limb(1)));
    }

    #[test]
    fn test_divrem() {
        // two-limb divisor, quotient a single limb
        let (q, r) = divrem(&limbs![4, 3, 4], &limbs![1, B1]);
        assert_eq!(q, limbs![4]);
        assert_eq!(r, limbs![0, 7]);

        // divisor top limb far below BASE/2 exercises the scaling step
        let (q, r) = divrem(&limbs![0, 4, 3, 4, 2], &limbs![0, 3]);
        assert_eq!(q, limbs![1, 1, 666_666_666_666_666_668]);
        assert_eq!(r, limbs![0, 1]);

        // divisor of BASE^2 shifts down two limbs
        let (q, r) = divrem(&limbs![8, 1, 3, 4, 1], &limbs![0, 0, 1]);
        assert_eq!(q, limbs![3, 4, 1]);
        assert_eq!(r, limbs![8, 1]);

        // (BASE^4 - 1)(BASE^8 - 1) / (BASE^4 - 1) = BASE^8 - 1 exactly
        let x = mul(&vec![Limb(B1); 4], &vec![Limb(B1); 8]);
        let (q, r) = divrem(&x, &vec![Limb(B1); 4]);
        assert_eq!(q, vec![Limb(B1); 8]);
        assert!(r.is_empty());
    }

    #[test]
    fn test_divrem_identity() {
        // n = q*d + r with r < d, across assorted shapes
        let cases: &[(Vec<Limb>, Vec<Limb>)] = &[
            (limbs![5, 4, 3, 2, 1], limbs![9, 8]),
            (limbs![B1, B1, B1, B1, B1], limbs![1, 0, 1]),
            (limbs![0, 0, 0, 0, 1], limbs![1, 1]),
            (limbs![123, 456, 789, 1], limbs![B1, 2]),
        ];

        for (n, d) in cases {
            let (q, r) = divrem(n, d);
            assert_eq!(cmp(&r, d), Ordering::Less);
            let back = add(&mul(&q, d), &r);
            assert_eq!(cmp(&back, n), Ordering::Equal);
        }
    }

    #[test]
    fn test_pow() {
        assert_eq!(pow::pow(&limbs![2], 10), limbs![1024]);
        // 10^18 squared is one limb shifted up twice
        assert_eq!(pow::pow(&limbs![0, 1], 2), limbs![0, 0, 1]);
        assert_eq!(pow::pow(&limbs![3], 1), limbs![3]);
    }
}
