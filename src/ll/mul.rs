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

use crate::ll;
use crate::ll::limb::Limb;
use crate::ll::{normalized, trimmed};

/// Operands with fewer limbs than this multiply by the schoolbook rows;
/// larger ones recurse by Karatsuba. Tuning parameter, not a correctness
/// knob.
const KARATSUBA_THRESHOLD: usize = 20;

/**
 * Multiplies the limbs of `x` by the single limb `v`, adding the partial
 * products into the `x.len()` least-significant limbs of `w` and returning
 * the carry limb.
 */
pub fn addmul_1(w: &mut [Limb], x: &[Limb], v: Limb) -> Limb {
    debug_assert!(w.len() >= x.len());

    let mut carry = 0u64;
    for i in 0..x.len() {
        // Column total is at most (BASE-1)^2 + 2*(BASE-1) < BASE^2, so the
        // outgoing carry is always a single limb.
        let col = x[i].0 as u128 * v.0 as u128 + w[i].0 as u128 + carry as u128;
        w[i] = Limb((col % Limb::BASE as u128) as u64);
        carry = (col / Limb::BASE as u128) as u64;
    }
    Limb(carry)
}

/**
 * Multiplies the limbs of `x` by the single limb `v`, subtracting the
 * partial products from the `x.len()` least-significant limbs of `w` and
 * returning the borrow limb owed by the next limb up.
 */
pub fn submul_1(w: &mut [Limb], x: &[Limb], v: Limb) -> Limb {
    debug_assert!(w.len() >= x.len());

    let mut borrow = 0u64;
    for i in 0..x.len() {
        let sub = x[i].0 as u128 * v.0 as u128 + borrow as u128;
        let sub_lo = (sub % Limb::BASE as u128) as u64;
        let sub_hi = (sub / Limb::BASE as u128) as u64;
        if w[i].0 >= sub_lo {
            w[i] = Limb(w[i].0 - sub_lo);
            borrow = sub_hi;
        } else {
            w[i] = Limb(w[i].0 + Limb::BASE - sub_lo);
            borrow = sub_hi + 1;
        }
    }
    Limb(borrow)
}

/// Multiplies the magnitude `x` by a single limb, returning the
/// normalized product.
pub fn mul_1(x: &[Limb], v: Limb) -> Vec<Limb> {
    let mut w = vec![Limb::ZERO; x.len() + 1];
    let last = w.len() - 1;
    w[last] = addmul_1(&mut w[..last], x, v);
    normalized(w)
}

/**
 * Multiplies the magnitudes `x` and `y`, returning the normalized product.
 *
 * Single-limb operands use the row primitive directly; short operands use
 * the schoolbook basecase; anything larger recurses by Karatsuba.
 */
pub fn mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let x = trimmed(x);
    let y = trimmed(y);

    if x.is_empty() || y.is_empty() {
        return Vec::new();
    }
    if x.len() == 1 {
        return mul_1(y, x[0]);
    }
    if y.len() == 1 {
        return mul_1(x, y[0]);
    }
    if x.len().min(y.len()) <= KARATSUBA_THRESHOLD {
        return mul_basecase(x, y);
    }
    karatsuba(x, y)
}

fn mul_basecase(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let mut w = vec![Limb::ZERO; x.len() + y.len()];
    for (j, &yl) in y.iter().enumerate() {
        // The slot above the row is still zero, so the carry can be stored
        // rather than added.
        w[j + x.len()] = addmul_1(&mut w[j..j + x.len()], x, yl);
    }
    normalized(w)
}

/**
 * Karatsuba recursion on limb sequences.
 *
 * Splitting both operands at `n = max(|x|, |y|) / 2` limbs as
 * `x = x1*BASE^n + x0`, `y = y1*BASE^n + y0`, three half-size products
 * recombine as
 *
 *    x*y = P2*BASE^(2n) + P1*BASE^n + P0
 *
 * where P2 = x1*y1, P0 = x0*y0 and P1 = (x1+x0)*(y1+y0) - P2 - P0. The
 * shifts prepend zero limbs; both subtractions stay non-negative because
 * (x1+x0)*(y1+y0) = P2 + P0 + x1*y0 + x0*y1.
 */
fn karatsuba(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let n = x.len().max(y.len()) / 2;

    let (x0, x1) = split(x, n);
    let (y0, y1) = split(y, n);

    let p2 = mul(x1, y1);
    let p0 = mul(x0, y0);
    let p1 = {
        let xsum = ll::add(x1, x0);
        let ysum = ll::add(y1, y0);
        let cross = mul(&xsum, &ysum);
        ll::sub(&ll::sub(&cross, &p2), &p0)
    };

    let mut w = shifted(p2, 2 * n);
    w = ll::add(&w, &shifted(p1, n));
    ll::add(&w, &p0)
}

/// Splits a magnitude into its `n` low limbs and the rest, trimming each
/// half so the recursion always sees normalized operands.
fn split(x: &[Limb], n: usize) -> (&[Limb], &[Limb]) {
    let at = x.len().min(n);
    let (lo, hi) = x.split_at(at);
    (trimmed(lo), hi)
}

/// Prepends `k` zero limbs, multiplying the magnitude by `BASE^k`.
fn shifted(x: Vec<Limb>, k: usize) -> Vec<Limb> {
    if x.is_empty() {
        return x;
    }
    let mut w = vec![Limb::ZERO; k + x.len()];
    w[k..].copy_from_slice(&x);
    w
}
