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

use std::fmt;

/**
 * Helper newtype for limb operations.
 *
 * A `Limb` is a single digit in base 10^18. Unlike a machine-word limb, the
 * base is not the natural overflow boundary of the storage type, so the
 * basic operations are expressed as explicit carry/borrow methods rather
 * than wrapping arithmetic: a column sum is reduced modulo `BASE` and the
 * overflow is reported alongside the digit.
 *
 * `BASE` is chosen so that a column sum `a + b + 1` fits in a `u64`
 * (`2 * BASE < 2^64`) and a limb product fits in a `u128`.
 */
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Limb(pub u64);

impl Limb {
    /// The limb base, 10^18.
    pub const BASE: u64 = 1_000_000_000_000_000_000;
    /// Decimal digits stored per limb.
    pub const DIGITS: usize = 18;
    /// Divisors whose top limb is at least this are normalized for
    /// the trial-quotient estimate in division.
    pub const HALF_BASE: u64 = Limb::BASE / 2;
    /// Largest value a limb can hold, `BASE - 1`.
    pub const MAX: Limb = Limb(Limb::BASE - 1);

    pub const ZERO: Limb = Limb(0);
    pub const ONE: Limb = Limb(1);

    #[inline(always)]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /**
     * Performs the column sum `self + other + carry`, returning the
     * resulting digit and whether the column overflowed the base.
     */
    #[inline(always)]
    pub fn add_carry(self, other: Limb, carry: bool) -> (Limb, bool) {
        debug_assert!(self.0 < Limb::BASE && other.0 < Limb::BASE);
        // At most 2*BASE - 1, which fits comfortably in a u64.
        let sum = self.0 + other.0 + carry as u64;
        if sum >= Limb::BASE {
            (Limb(sum - Limb::BASE), true)
        } else {
            (Limb(sum), false)
        }
    }

    /**
     * Performs the column difference `self - other - borrow`, returning the
     * resulting digit and whether the column borrowed from the base.
     */
    #[inline(always)]
    pub fn sub_borrow(self, other: Limb, borrow: bool) -> (Limb, bool) {
        debug_assert!(self.0 < Limb::BASE && other.0 < Limb::BASE);
        let rhs = other.0 + borrow as u64;
        if self.0 >= rhs {
            (Limb(self.0 - rhs), false)
        } else {
            (Limb(self.0 + Limb::BASE - rhs), true)
        }
    }

    /**
     * Performs `self * other`, returning the two-limb result as
     * (high, low) base-`BASE` digits.
     */
    #[inline(always)]
    pub fn mul_hilo(self, other: Limb) -> (Limb, Limb) {
        let prod = self.0 as u128 * other.0 as u128;
        (
            Limb((prod / Limb::BASE as u128) as u64),
            Limb((prod % Limb::BASE as u128) as u64),
        )
    }

    /**
     * Divides the two-limb numerator `hi * BASE + lo` by `d`, returning
     * the quotient and remainder.
     *
     * Requires `hi < d` so that the quotient fits in a single limb.
     */
    #[inline]
    pub fn div(hi: Limb, lo: Limb, d: Limb) -> (Limb, Limb) {
        debug_assert!(d.0 != 0);
        debug_assert!(hi < d);
        let num = hi.0 as u128 * Limb::BASE as u128 + lo.0 as u128;
        let d = d.0 as u128;
        (Limb((num / d) as u64), Limb((num % d) as u64))
    }

    /// Whether a divisor limb is large enough for the two-word
    /// trial-quotient estimate to be accurate to within two units.
    #[inline(always)]
    pub fn is_normalized(self) -> bool {
        self.0 >= Limb::HALF_BASE
    }
}

impl fmt::Debug for Limb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Limb({})", self.0)
    }
}

impl fmt::Display for Limb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::Limb;

    #[test]
    fn add_carry() {
        assert_eq!(Limb(1).add_carry(Limb(2), false), (Limb(3), false));
        assert_eq!(Limb::MAX.add_carry(Limb(1), false), (Limb(0), true));
        assert_eq!(Limb::MAX.add_carry(Limb::MAX, true), (Limb::MAX, true));
        assert_eq!(Limb(0).add_carry(Limb(0), true), (Limb(1), false));
    }

    #[test]
    fn sub_borrow() {
        assert_eq!(Limb(3).sub_borrow(Limb(2), false), (Limb(1), false));
        assert_eq!(Limb(0).sub_borrow(Limb(1), false), (Limb::MAX, true));
        assert_eq!(Limb(0).sub_borrow(Limb::MAX, true), (Limb(0), true));
    }

    #[test]
    fn mul_hilo() {
        assert_eq!(Limb(10).mul_hilo(Limb(20)), (Limb(0), Limb(200)));
        // (BASE - 1)^2 = (BASE - 2) * BASE + 1
        assert_eq!(
            Limb::MAX.mul_hilo(Limb::MAX),
            (Limb(Limb::BASE - 2), Limb(1))
        );
        assert_eq!(
            Limb(500_000_000_000_000_000).mul_hilo(Limb(2)),
            (Limb(1), Limb(0))
        );
    }

    #[test]
    fn div() {
        assert_eq!(Limb::div(Limb(0), Limb(7), Limb(2)), (Limb(3), Limb(1)));
        // (BASE/2) * BASE / (BASE/2 + 1) has a full-width quotient
        let (q, r) = Limb::div(
            Limb(Limb::HALF_BASE),
            Limb(0),
            Limb(Limb::HALF_BASE + 1),
        );
        assert!(q.0 < Limb::BASE);
        assert_eq!(
            q.0 as u128 * (Limb::HALF_BASE + 1) as u128 + r.0 as u128,
            Limb::HALF_BASE as u128 * Limb::BASE as u128
        );
    }
}
