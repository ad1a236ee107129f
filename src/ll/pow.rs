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

/**
 * Raises the magnitude `x` to the power `exp` by binary
 * square-and-multiply, returning the normalized result.
 *
 * `x` must be nonzero and `exp` at least 1; the trivial exponents are the
 * caller's concern.
 */
pub fn pow(x: &[Limb], mut exp: u32) -> Vec<Limb> {
    debug_assert!(!ll::is_zero(x));
    debug_assert!(exp >= 1);

    let mut base = x.to_vec();
    let mut acc = vec![Limb::ONE];

    while exp > 0 {
        if exp & 1 == 1 {
            acc = ll::mul(&acc, &base);
        }
        exp >>= 1;
        // skip the final squaring once the accumulator holds the result
        if exp == 0 {
            break;
        }
        base = ll::mul(&base, &base);
    }

    acc
}
