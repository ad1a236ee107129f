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

use decint::Int;

#[derive(Debug, Clone, PartialEq, Eq)]
struct GcdResult {
    /// Greatest common divisor.
    gcd: Int,
    /// Coefficients such that: gcd(a, b) = c1*a + c2*b
    c1: Int,
    c2: Int,
}

/// Calculate greatest common divisor and the corresponding coefficients.
fn extended_gcd(a: Int, b: Int) -> GcdResult {
    // Euclid's extended algorithm
    let (mut s, mut old_s) = (Int::zero(), Int::one());
    let (mut t, mut old_t) = (Int::one(), Int::zero());
    let (mut r, mut old_r) = (b, a);

    while r != 0 {
        let (quotient, rem) = old_r.divmod(&r);
        old_r = r;
        r = rem;
        let tmp = &old_s - &quotient * &s;
        old_s = s;
        s = tmp;
        let tmp = &old_t - &quotient * &t;
        old_t = t;
        t = tmp;
    }

    GcdResult {
        gcd: old_r,
        c1: old_s,
        c2: old_t,
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (a, b) = if args.len() == 3 {
        (
            args[1].parse().expect("first argument is not an integer"),
            args[2].parse().expect("second argument is not an integer"),
        )
    } else {
        (
            "123456789012345678901234567890".parse::<Int>().unwrap(),
            Int::from(987654321098765432i64),
        )
    };

    let GcdResult { gcd, c1, c2 } = extended_gcd(a.clone(), b.clone());
    println!(
        "gcd({}, {}) = {}*{} + {}*{} = {}",
        &a, &b, &c1, &a, &c2, &b, &gcd
    );
}
