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

use crate::ll::limb::Limb;
use crate::ll::{cmp, normalized};
use std::cmp::Ordering;

/**
 * Adds the limbs of `y` into the `y.len()` least-significant limbs of `w`
 * elementwise, returning whether a carry left the top limb.
 *
 * `w` must be at least as long as `y`; the carry propagates through the
 * remaining limbs of `w`.
 */
pub fn add_n(w: &mut [Limb], y: &[Limb]) -> bool {
    debug_assert!(w.len() >= y.len());

    let mut carry = false;
    for i in 0..y.len() {
        let (l, c) = w[i].add_carry(y[i], carry);
        w[i] = l;
        carry = c;
    }
    for wl in &mut w[y.len()..] {
        if !carry {
            break;
        }
        let (l, c) = wl.add_carry(Limb::ZERO, true);
        *wl = l;
        carry = c;
    }
    carry
}

/**
 * Subtracts the limbs of `y` from the `y.len()` least-significant limbs of
 * `w` elementwise, returning whether a borrow left the top limb.
 *
 * `w` must be at least as long as `y`; the borrow cascades through runs of
 * zero limbs above the subtracted columns, filling them with `BASE - 1`.
 */
pub fn sub_n(w: &mut [Limb], y: &[Limb]) -> bool {
    debug_assert!(w.len() >= y.len());

    let mut borrow = false;
    for i in 0..y.len() {
        let (l, b) = w[i].sub_borrow(y[i], borrow);
        w[i] = l;
        borrow = b;
    }
    for wl in &mut w[y.len()..] {
        if !borrow {
            break;
        }
        let (l, b) = wl.sub_borrow(Limb::ZERO, true);
        *wl = l;
        borrow = b;
    }
    borrow
}

/**
 * Adds the magnitudes `x` and `y`, returning the normalized sum.
 */
pub fn add(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

    let mut sum = Vec::with_capacity(long.len() + 1);
    let mut carry = false;

    for i in 0..short.len() {
        let (l, c) = long[i].add_carry(short[i], carry);
        sum.push(l);
        carry = c;
    }
    // carry down the columns the short operand no longer contributes to
    for &l in &long[short.len()..] {
        let (l, c) = l.add_carry(Limb::ZERO, carry);
        sum.push(l);
        carry = c;
    }
    if carry {
        sum.push(Limb::ONE);
    }

    normalized(sum)
}

/// Adds a single limb to the magnitude `x`.
pub fn add_1(x: &[Limb], y: Limb) -> Vec<Limb> {
    add(x, &[y])
}

/**
 * Subtracts the magnitude `y` from the magnitude `x`, returning the
 * normalized difference. Requires `x >= y`; both inputs normalized.
 */
pub fn sub(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    debug_assert!(cmp(x, y) != Ordering::Less);

    let mut diff = Vec::with_capacity(x.len());
    let mut borrow = false;

    for i in 0..y.len() {
        let (l, b) = x[i].sub_borrow(y[i], borrow);
        diff.push(l);
        borrow = b;
    }
    for &l in &x[y.len()..] {
        let (l, b) = l.sub_borrow(Limb::ZERO, borrow);
        diff.push(l);
        borrow = b;
    }
    debug_assert!(!borrow);

    normalized(diff)
}

/// Subtracts a single limb from the magnitude `x`. Requires `x >= y`.
pub fn sub_1(x: &[Limb], y: Limb) -> Vec<Limb> {
    sub(x, &[y])
}
