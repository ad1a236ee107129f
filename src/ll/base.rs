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
 * Conversion between decimal digit strings and limb sequences.
 *
 * Because the limb base is itself a power of ten, conversion in either
 * direction is chunking rather than arithmetic: a limb is exactly
 * `Limb::DIGITS` consecutive decimal digits.
 */

use crate::ll::limb::Limb;
use crate::ll::normalized;
use std::fmt::Write;

/**
 * Converts a run of ASCII decimal digits into a normalized little-endian
 * limb sequence.
 *
 * The digits are chunked from the right: the last `Limb::DIGITS` digits
 * form the least-significant limb, and the leftmost chunk may be short.
 * The caller validates the digits; sign handling also lives there.
 */
pub fn from_dec_str(digits: &[u8]) -> Vec<Limb> {
    debug_assert!(!digits.is_empty());
    debug_assert!(digits.iter().all(u8::is_ascii_digit));

    let mut limbs = Vec::with_capacity(digits.len() / Limb::DIGITS + 1);
    let mut rest = digits;
    while !rest.is_empty() {
        let at = rest.len().saturating_sub(Limb::DIGITS);
        let (head, chunk) = rest.split_at(at);
        let mut limb = 0u64;
        for &d in chunk {
            limb = limb * 10 + (d - b'0') as u64;
        }
        limbs.push(Limb(limb));
        rest = head;
    }

    // leading zeros in the input become trailing zero limbs
    normalized(limbs)
}

/**
 * Converts a normalized limb sequence into its shortest decimal string.
 *
 * The most-significant limb prints unpadded; every limb below it prints as
 * a full `Limb::DIGITS`-wide zero-padded group.
 */
pub fn to_dec_string(limbs: &[Limb]) -> String {
    let mut iter = limbs.iter().rev();
    let top = match iter.next() {
        Some(top) => top,
        None => return "0".to_string(),
    };

    let mut s = String::with_capacity(limbs.len() * Limb::DIGITS);
    write!(s, "{}", top.0).unwrap();
    for limb in iter {
        write!(s, "{:018}", limb.0).unwrap();
    }
    s
}

#[cfg(test)]
mod test {
    use super::{from_dec_str, to_dec_string};
    use crate::ll::limb::Limb;

    #[test]
    fn chunks_from_the_right() {
        // 21 digits: a 3-digit top chunk over one full limb
        let limbs = from_dec_str(b"123000000000000000456");
        assert_eq!(limbs, [Limb(456), Limb(123)]);
    }

    #[test]
    fn leading_zeros_strip() {
        assert!(from_dec_str(b"000").is_empty());
        assert_eq!(from_dec_str(b"007"), [Limb(7)]);
        assert_eq!(
            from_dec_str(b"0000000000000000001000000000000000000"),
            [Limb(0), Limb(1)]
        );
    }

    #[test]
    fn round_trip_pads_interior_limbs() {
        let limbs = from_dec_str(b"1000000000000000000");
        assert_eq!(limbs, [Limb(0), Limb(1)]);
        assert_eq!(to_dec_string(&limbs), "1000000000000000000");

        assert_eq!(to_dec_string(&[]), "0");
        assert_eq!(to_dec_string(&[Limb(42)]), "42");
    }
}
