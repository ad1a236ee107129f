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
use crate::ll::mul::{mul_1, submul_1};
use crate::ll::normalized;
use std::cmp::Ordering;

/**
 * Divides the magnitude `n` by the single limb `d`, returning the
 * normalized quotient and the remainder limb.
 *
 * The two-limb-by-one-limb primitive needs no normalization scale here:
 * the running remainder is always smaller than `d`, so every partial
 * quotient fits in a limb regardless of where `d`'s top digit falls.
 */
pub fn divrem_1(n: &[Limb], d: Limb) -> (Vec<Limb>, Limb) {
    debug_assert!(!d.is_zero());

    let mut q = vec![Limb::ZERO; n.len()];
    let mut r = Limb::ZERO;
    for i in (0..n.len()).rev() {
        let (qi, ri) = Limb::div(r, n[i], d);
        q[i] = qi;
        r = ri;
    }
    (normalized(q), r)
}

/**
 * Divides the magnitude `n` by the magnitude `d` using base-BASE long
 * division with a two-word trial-quotient estimate, returning the
 * normalized (quotient, remainder).
 *
 * Requires `d` normalized with at least two limbs and `n >= d`; smaller
 * dividends and single-limb divisors are the caller's shortcut cases.
 */
pub fn divrem(n: &[Limb], d: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    debug_assert!(d.len() >= 2);
    debug_assert!(!d.last().unwrap().is_zero());
    debug_assert!(ll::cmp(n, d) != Ordering::Less);

    // Scale both operands so the divisor's top limb is at least BASE/2,
    // which bounds the trial-quotient error to two units. The scale never
    // lengthens the divisor.
    let scale = Limb(Limb::BASE / (d.last().unwrap().0 + 1));
    let mut a = mul_1(n, scale);
    let b = mul_1(d, scale);
    debug_assert_eq!(b.len(), d.len());
    debug_assert!(b.last().unwrap().is_normalized());

    let bn = b.len();
    let bh = *b.last().unwrap();
    let m = a.len() - bn;
    let mut q = vec![Limb::ZERO; m + 1];

    // Leading quotient digit: 1 exactly when the top window holds the
    // divisor at least once.
    if ll::cmp(&a[m..], &b) != Ordering::Less {
        let borrowed = ll::sub_n(&mut a[m..], &b);
        debug_assert!(!borrowed);
        q[m] = Limb::ONE;
    }

    for j in (0..m).rev() {
        // Trial digit from the two-word numerator A[n+j]*BASE + A[n+j-1],
        // clamped to BASE - 1 when the estimate would overflow a limb.
        let num_hi = a[bn + j];
        let num_lo = a[bn + j - 1];
        let mut qhat = if num_hi >= bh {
            Limb::MAX
        } else {
            Limb::div(num_hi, num_lo, bh).0
        };

        if !qhat.is_zero() {
            let borrow = submul_1(&mut a[j..j + bn], &b, qhat);
            if borrow <= num_hi {
                // The window stayed non-negative; its remainder is smaller
                // than the divisor, so the top limb must cancel exactly.
                a[bn + j] = Limb(num_hi.0 - borrow.0);
                debug_assert!(a[bn + j].is_zero());
            } else {
                // qhat overshot. Under normalization the deficit is at most
                // two divisor multiples; each add-back whose carry reaches
                // the window top repays one of them.
                let mut deficit = borrow.0 - num_hi.0;
                while deficit > 0 {
                    qhat = Limb(qhat.0 - 1);
                    deficit -= ll::add_n(&mut a[j..j + bn], &b) as u64;
                }
                a[bn + j] = Limb::ZERO;
            }
        }
        q[j] = qhat;
    }

    let rem = normalized(a[..bn].to_vec());
    let rem = if scale.0 > 1 {
        let (unscaled, r) = divrem_1(&rem, scale);
        debug_assert!(r.is_zero());
        unscaled
    } else {
        rem
    };

    (normalized(q), rem)
}
