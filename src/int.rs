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

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::error::Error;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
    SubAssign,
};
use std::str::FromStr;

use num_traits::{One, Pow, Zero};
use rand::Rng;

use crate::ll;
use crate::ll::limb::Limb;

/// Sign of an `Int`. Zero is always `Positive`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Sign of a product or quotient of two nonzero values.
    #[inline]
    fn of_product(a: Sign, b: Sign) -> Sign {
        if a == b {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/**
 * An arbitrary-precision signed integer.
 *
 * The value is stored as a sign and a little-endian sequence of base-10^18
 * limbs, growing to whatever size the result of an operation needs. Values
 * are immutable from the outside: every arithmetic operator returns a
 * freshly constructed `Int`.
 *
 * The canonical form has no zero limbs in the highest positions, represents
 * zero by the empty limb sequence and gives zero a positive sign; every
 * constructor and operator re-establishes it, so equality, ordering and
 * hashing can rely on it.
 */
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Int {
    sign: Sign,
    limbs: Vec<Limb>,
}

impl Int {
    /// Creates a zero-value Int.
    #[inline]
    pub fn zero() -> Int {
        Int {
            sign: Sign::Positive,
            limbs: Vec::new(),
        }
    }

    /// Creates an Int with the value 1.
    #[inline]
    pub fn one() -> Int {
        Int {
            sign: Sign::Positive,
            limbs: vec![Limb::ONE],
        }
    }

    /// Builds an Int from a sign and an unnormalized magnitude,
    /// re-establishing the canonical form.
    fn from_raw(sign: Sign, limbs: Vec<Limb>) -> Int {
        let limbs = ll::normalized(limbs);
        let sign = if limbs.is_empty() {
            Sign::Positive
        } else {
            sign
        };
        Int { sign, limbs }
    }

    /**
     * Creates a new Int from a decimal string: an optional leading `-`
     * followed by one or more digits. Redundant leading zeros are
     * accepted and stripped.
     */
    pub fn from_dec_str(mut src: &str) -> Result<Int, ParseIntError> {
        let mut sign = Sign::Positive;
        if let Some(rest) = src.strip_prefix('-') {
            sign = Sign::Negative;
            src = rest;
        }
        if src.is_empty() {
            return Err(ParseIntError {
                kind: ErrorKind::Empty,
            });
        }
        if !src.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseIntError {
                kind: ErrorKind::InvalidDigit,
            });
        }

        Ok(Int::from_raw(sign, ll::base::from_dec_str(src.as_bytes())))
    }

    /**
     * Returns the sign of the Int as either -1, 0 or 1 for self being
     * negative, zero or positive, respectively.
     */
    #[inline]
    pub fn sign(&self) -> i32 {
        if self.limbs.is_empty() {
            0
        } else if self.sign == Sign::Negative {
            -1
        } else {
            1
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Consumes self and returns the absolute value.
    #[inline]
    pub fn abs(mut self) -> Int {
        self.sign = Sign::Positive;
        self
    }

    /**
     * Compares the absolute value of self to the absolute value of other,
     * returning an Ordering with the result.
     */
    #[inline]
    pub fn abs_cmp(&self, other: &Int) -> Ordering {
        ll::cmp(&self.limbs, &other.limbs)
    }

    /**
     * Divides self by other, returning the quotient, Q, and remainder, R,
     * as (Q, R).
     *
     * With N = self, D = other, Q and R satisfy `N = QD + R` with
     * `|R| < |D|`; a nonzero quotient takes the product of the operand
     * signs and a nonzero remainder takes the sign of the dividend.
     *
     * Panics when `other` is zero; `checked_divmod` is the fallible form.
     */
    pub fn divmod(&self, other: &Int) -> (Int, Int) {
        match self.checked_divmod(other) {
            Some(qr) => qr,
            None => ll::divide_by_zero(),
        }
    }

    /// `divmod` returning `None` for a zero divisor.
    pub fn checked_divmod(&self, other: &Int) -> Option<(Int, Int)> {
        debug_assert!(self.well_formed() && other.well_formed());
        if other.is_zero() {
            return None;
        }
        if self.is_zero() {
            return Some((Int::zero(), Int::zero()));
        }

        let q_sign = Sign::of_product(self.sign, other.sign);

        let (q, r) = match self.abs_cmp(other) {
            // the divisor doesn't fit even once
            Ordering::Less => return Some((Int::zero(), self.clone())),
            Ordering::Equal => (vec![Limb::ONE], Vec::new()),
            Ordering::Greater => {
                if other.limbs.len() == 1 {
                    let (q, r) = ll::divrem_1(&self.limbs, other.limbs[0]);
                    (q, if r.is_zero() { Vec::new() } else { vec![r] })
                } else {
                    ll::divrem(&self.limbs, &other.limbs)
                }
            }
        };

        Some((Int::from_raw(q_sign, q), Int::from_raw(self.sign, r)))
    }

    /// Division returning `None` for a zero divisor.
    #[inline]
    pub fn checked_div(&self, other: &Int) -> Option<Int> {
        self.checked_divmod(other).map(|(q, _)| q)
    }

    /// Remainder returning `None` for a zero divisor.
    #[inline]
    pub fn checked_rem(&self, other: &Int) -> Option<Int> {
        self.checked_divmod(other).map(|(_, r)| r)
    }

    /**
     * Raises self to the power of `exp`.
     *
     * `exp == 0` yields 1 for every base, including zero; a negative base
     * yields a negative result exactly when `exp` is odd. Negative
     * exponents are unrepresentable in the parameter type.
     */
    pub fn pow(&self, exp: u32) -> Int {
        if exp == 0 {
            return Int::one();
        }
        if self.is_zero() {
            return Int::zero();
        }

        let sign = if self.sign == Sign::Negative && exp % 2 == 1 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Int::from_raw(sign, ll::pow::pow(&self.limbs, exp))
    }

    /// Checks that the canonical-form invariants hold.
    fn well_formed(&self) -> bool {
        match self.limbs.last() {
            None => self.sign == Sign::Positive,
            Some(top) => !top.is_zero(),
        }
    }
}

impl Default for Int {
    #[inline]
    fn default() -> Int {
        Int::zero()
    }
}

impl PartialOrd for Int {
    #[inline]
    fn partial_cmp(&self, other: &Int) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Int {
    fn cmp(&self, other: &Int) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Positive) => self.abs_cmp(other),
            // both negative: the larger magnitude is the smaller value
            (Sign::Negative, Sign::Negative) => other.abs_cmp(self),
        }
    }
}

impl<'a, 'b> Add<&'a Int> for &'b Int {
    type Output = Int;

    fn add(self, other: &'a Int) -> Int {
        debug_assert!(self.well_formed() && other.well_formed());

        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        if self.sign == other.sign {
            // same signs: add the magnitudes, keep the common sign
            return Int {
                sign: self.sign,
                limbs: ll::add(&self.limbs, &other.limbs),
            };
        }

        // Mixed signs reduce to a magnitude subtract of the smaller from
        // the larger; the larger magnitude decides the sign.
        match self.abs_cmp(other) {
            Ordering::Equal => Int::zero(),
            Ordering::Greater => {
                Int::from_raw(self.sign, ll::sub(&self.limbs, &other.limbs))
            }
            Ordering::Less => {
                Int::from_raw(other.sign, ll::sub(&other.limbs, &self.limbs))
            }
        }
    }
}

impl<'a, 'b> Sub<&'a Int> for &'b Int {
    type Output = Int;

    fn sub(self, other: &'a Int) -> Int {
        debug_assert!(self.well_formed() && other.well_formed());

        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return -other.clone();
        }

        if self.sign != other.sign {
            // a - (-b) = a + b and (-a) - b = -(a + b)
            return Int {
                sign: self.sign,
                limbs: ll::add(&self.limbs, &other.limbs),
            };
        }

        match self.abs_cmp(other) {
            Ordering::Equal => Int::zero(),
            Ordering::Greater => {
                Int::from_raw(self.sign, ll::sub(&self.limbs, &other.limbs))
            }
            Ordering::Less => Int::from_raw(
                self.sign.flip(),
                ll::sub(&other.limbs, &self.limbs),
            ),
        }
    }
}

impl<'a, 'b> Mul<&'a Int> for &'b Int {
    type Output = Int;

    fn mul(self, other: &'a Int) -> Int {
        debug_assert!(self.well_formed() && other.well_formed());

        // 0 * x = 0
        if self.is_zero() || other.is_zero() {
            return Int::zero();
        }

        Int::from_raw(
            Sign::of_product(self.sign, other.sign),
            ll::mul(&self.limbs, &other.limbs),
        )
    }
}

impl<'a, 'b> Div<&'a Int> for &'b Int {
    type Output = Int;

    #[inline]
    fn div(self, other: &'a Int) -> Int {
        self.divmod(other).0
    }
}

impl<'a, 'b> Rem<&'a Int> for &'b Int {
    type Output = Int;

    #[inline]
    fn rem(self, other: &'a Int) -> Int {
        self.divmod(other).1
    }
}

// The by-value and mixed-reference operator impls all forward to the
// by-reference workhorses above.
macro_rules! forward_binop {
    ($tr:ident, $f:ident) => {
        impl $tr<Int> for Int {
            type Output = Int;

            #[inline]
            fn $f(self, other: Int) -> Int {
                (&self).$f(&other)
            }
        }

        impl<'a> $tr<&'a Int> for Int {
            type Output = Int;

            #[inline]
            fn $f(self, other: &'a Int) -> Int {
                (&self).$f(other)
            }
        }

        impl<'a> $tr<Int> for &'a Int {
            type Output = Int;

            #[inline]
            fn $f(self, other: Int) -> Int {
                self.$f(&other)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
forward_binop!(Rem, rem);

macro_rules! impl_op_assign {
    ($tr:ident, $f:ident, $op:tt) => {
        impl $tr<Int> for Int {
            #[inline]
            fn $f(&mut self, other: Int) {
                *self = &*self $op &other;
            }
        }

        impl<'a> $tr<&'a Int> for Int {
            #[inline]
            fn $f(&mut self, other: &'a Int) {
                *self = &*self $op other;
            }
        }
    };
}

impl_op_assign!(AddAssign, add_assign, +);
impl_op_assign!(SubAssign, sub_assign, -);
impl_op_assign!(MulAssign, mul_assign, *);
impl_op_assign!(DivAssign, div_assign, /);
impl_op_assign!(RemAssign, rem_assign, %);

impl Neg for Int {
    type Output = Int;

    #[inline]
    fn neg(mut self) -> Int {
        if !self.is_zero() {
            self.sign = self.sign.flip();
        }
        self
    }
}

impl<'a> Neg for &'a Int {
    type Output = Int;

    #[inline]
    fn neg(self) -> Int {
        self.clone().neg()
    }
}

// Operators against the common primitive operand types. The primitive is
// widened into an `Int` first; with decimal limbs there is no cheaper
// in-limb shortcut for a u64 that may straddle the base.
macro_rules! impl_arith_prim {
    ($($t:ty),*) => {$(
        impl Add<$t> for Int {
            type Output = Int;

            #[inline]
            fn add(self, other: $t) -> Int {
                &self + &Int::from(other)
            }
        }

        impl<'a> Add<$t> for &'a Int {
            type Output = Int;

            #[inline]
            fn add(self, other: $t) -> Int {
                self + &Int::from(other)
            }
        }

        impl Add<Int> for $t {
            type Output = Int;

            #[inline]
            fn add(self, other: Int) -> Int {
                other + self
            }
        }

        impl<'a> Add<&'a Int> for $t {
            type Output = Int;

            #[inline]
            fn add(self, other: &'a Int) -> Int {
                other + self
            }
        }

        impl Sub<$t> for Int {
            type Output = Int;

            #[inline]
            fn sub(self, other: $t) -> Int {
                &self - &Int::from(other)
            }
        }

        impl<'a> Sub<$t> for &'a Int {
            type Output = Int;

            #[inline]
            fn sub(self, other: $t) -> Int {
                self - &Int::from(other)
            }
        }

        impl Sub<Int> for $t {
            type Output = Int;

            #[inline]
            fn sub(self, other: Int) -> Int {
                &Int::from(self) - &other
            }
        }

        impl<'a> Sub<&'a Int> for $t {
            type Output = Int;

            #[inline]
            fn sub(self, other: &'a Int) -> Int {
                &Int::from(self) - other
            }
        }

        impl Mul<$t> for Int {
            type Output = Int;

            #[inline]
            fn mul(self, other: $t) -> Int {
                &self * &Int::from(other)
            }
        }

        impl<'a> Mul<$t> for &'a Int {
            type Output = Int;

            #[inline]
            fn mul(self, other: $t) -> Int {
                self * &Int::from(other)
            }
        }

        impl Mul<Int> for $t {
            type Output = Int;

            #[inline]
            fn mul(self, other: Int) -> Int {
                other * self
            }
        }

        impl<'a> Mul<&'a Int> for $t {
            type Output = Int;

            #[inline]
            fn mul(self, other: &'a Int) -> Int {
                other * self
            }
        }

        impl Div<$t> for Int {
            type Output = Int;

            #[inline]
            fn div(self, other: $t) -> Int {
                &self / &Int::from(other)
            }
        }

        impl<'a> Div<$t> for &'a Int {
            type Output = Int;

            #[inline]
            fn div(self, other: $t) -> Int {
                self / &Int::from(other)
            }
        }

        impl Div<Int> for $t {
            type Output = Int;

            #[inline]
            fn div(self, other: Int) -> Int {
                &Int::from(self) / &other
            }
        }

        impl<'a> Div<&'a Int> for $t {
            type Output = Int;

            #[inline]
            fn div(self, other: &'a Int) -> Int {
                &Int::from(self) / other
            }
        }

        impl Rem<$t> for Int {
            type Output = Int;

            #[inline]
            fn rem(self, other: $t) -> Int {
                &self % &Int::from(other)
            }
        }

        impl<'a> Rem<$t> for &'a Int {
            type Output = Int;

            #[inline]
            fn rem(self, other: $t) -> Int {
                self % &Int::from(other)
            }
        }

        impl Rem<Int> for $t {
            type Output = Int;

            #[inline]
            fn rem(self, other: Int) -> Int {
                &Int::from(self) % &other
            }
        }

        impl<'a> Rem<&'a Int> for $t {
            type Output = Int;

            #[inline]
            fn rem(self, other: &'a Int) -> Int {
                &Int::from(self) % other
            }
        }
    )*};
}

// i32 is the literal fallback type; usize and u64 cover sizes and limbs.
impl_arith_prim!(i32, usize, u64);

impl PartialEq<i32> for Int {
    #[inline]
    fn eq(&self, other: &i32) -> bool {
        *self == Int::from(*other)
    }
}

impl PartialEq<Int> for i32 {
    #[inline]
    fn eq(&self, other: &Int) -> bool {
        other == self
    }
}

impl PartialOrd<i32> for Int {
    #[inline]
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        self.partial_cmp(&Int::from(*other))
    }
}

impl PartialOrd<Int> for i32 {
    #[inline]
    fn partial_cmp(&self, other: &Int) -> Option<Ordering> {
        Int::from(*self).partial_cmp(other)
    }
}

/// Splits a magnitude into little-endian base-BASE limbs.
fn limbs_from_u128(mut val: u128) -> Vec<Limb> {
    let mut limbs = Vec::with_capacity(3);
    while val > 0 {
        limbs.push(Limb((val % Limb::BASE as u128) as u64));
        val /= Limb::BASE as u128;
    }
    limbs
}

macro_rules! impl_from_prim {
    (signed $($t:ty),*) => {
        $(impl From<$t> for Int {
            fn from(val: $t) -> Int {
                let sign = if val < 0 {
                    Sign::Negative
                } else {
                    Sign::Positive
                };
                Int::from_raw(sign, limbs_from_u128(val.unsigned_abs() as u128))
            }
        })*
    };
    (unsigned $($t:ty),*) => {
        $(impl From<$t> for Int {
            fn from(val: $t) -> Int {
                Int::from_raw(Sign::Positive, limbs_from_u128(val as u128))
            }
        })*
    };
}

impl_from_prim!(signed i8, i16, i32, i64, i128, isize);
impl_from_prim!(unsigned u8, u16, u32, u64, u128, usize);

/// Error produced when an `Int` does not fit the requested primitive type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryFromIntError {
    _priv: (),
}

impl TryFromIntError {
    fn new() -> TryFromIntError {
        TryFromIntError { _priv: () }
    }
}

impl fmt::Display for TryFromIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        "value out of range for the target integer type".fmt(f)
    }
}

impl Error for TryFromIntError {}

impl Int {
    /// The magnitude as a u128, if it fits.
    fn magnitude_u128(&self) -> Option<u128> {
        let mut acc = 0u128;
        for limb in self.limbs.iter().rev() {
            acc = acc
                .checked_mul(Limb::BASE as u128)?
                .checked_add(limb.0 as u128)?;
        }
        Some(acc)
    }
}

macro_rules! impl_try_from_int {
    (signed $($t:ty),*) => {
        $(impl<'a> TryFrom<&'a Int> for $t {
            type Error = TryFromIntError;

            fn try_from(i: &'a Int) -> Result<$t, TryFromIntError> {
                let mag = i.magnitude_u128().ok_or_else(TryFromIntError::new)?;
                if i.sign == Sign::Negative {
                    if mag == <$t>::MAX as u128 + 1 {
                        return Ok(<$t>::MIN);
                    }
                    let val =
                        <$t>::try_from(mag).map_err(|_| TryFromIntError::new())?;
                    Ok(-val)
                } else {
                    <$t>::try_from(mag).map_err(|_| TryFromIntError::new())
                }
            }
        })*
    };
    (unsigned $($t:ty),*) => {
        $(impl<'a> TryFrom<&'a Int> for $t {
            type Error = TryFromIntError;

            fn try_from(i: &'a Int) -> Result<$t, TryFromIntError> {
                if i.sign == Sign::Negative {
                    return Err(TryFromIntError::new());
                }
                let mag = i.magnitude_u128().ok_or_else(TryFromIntError::new)?;
                <$t>::try_from(mag).map_err(|_| TryFromIntError::new())
            }
        })*
    };
}

impl_try_from_int!(signed i64, i128);
impl_try_from_int!(unsigned u64, u128);

// Number formatting. Only the decimal forms exist; the limbs have no
// natural rendering in any other base.
macro_rules! impl_fmt {
    ($t:path) => {
        impl $t for Int {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let s = ll::base::to_dec_string(&self.limbs);
                f.pad_integral(self.sign() >= 0, "", &s)
            }
        }
    };
}

impl_fmt!(fmt::Display);
impl_fmt!(fmt::Debug);

// String parsing

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIntError {
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ErrorKind {
    Empty,
    InvalidDigit,
}

impl fmt::Display for ParseIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::Empty => "cannot parse empty string",
            ErrorKind::InvalidDigit => "invalid digit found in string",
        }
        .fmt(f)
    }
}

impl Error for ParseIntError {}

impl FromStr for Int {
    type Err = ParseIntError;

    #[inline]
    fn from_str(src: &str) -> Result<Int, ParseIntError> {
        Int::from_dec_str(src)
    }
}

impl Zero for Int {
    #[inline]
    fn zero() -> Int {
        Int::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }
}

impl One for Int {
    #[inline]
    fn one() -> Int {
        Int::one()
    }
}

impl Pow<u32> for Int {
    type Output = Int;

    #[inline]
    fn pow(self, exp: u32) -> Int {
        Int::pow(&self, exp)
    }
}

impl<'a> Pow<u32> for &'a Int {
    type Output = Int;

    #[inline]
    fn pow(self, exp: u32) -> Int {
        Int::pow(self, exp)
    }
}

/**
 * Generation of random `Int`s, used heavily by the property tests.
 *
 * Lengths are given in decimal digits: `gen_uint(40)` draws a uniform
 * non-negative value below 10^40.
 */
pub trait RandomInt {
    /// Generate a random non-negative Int with at most `digits` decimal
    /// digits.
    fn gen_uint(&mut self, digits: usize) -> Int;

    /// Generate a random Int with at most `digits` decimal digits and a
    /// random sign.
    fn gen_int(&mut self, digits: usize) -> Int;
}

impl<R: Rng> RandomInt for R {
    fn gen_uint(&mut self, digits: usize) -> Int {
        let mut limbs = Vec::with_capacity(digits / Limb::DIGITS + 1);
        for _ in 0..digits / Limb::DIGITS {
            limbs.push(Limb(self.gen_range(0..Limb::BASE)));
        }
        let top = digits % Limb::DIGITS;
        if top > 0 {
            limbs.push(Limb(self.gen_range(0..10u64.pow(top as u32))));
        }
        Int::from_raw(Sign::Positive, limbs)
    }

    fn gen_int(&mut self, digits: usize) -> Int {
        let i = self.gen_uint(digits);
        if !i.is_zero() && self.gen::<bool>() {
            -i
        } else {
            i
        }
    }
}
