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

fn main() {
    // 20! = 2432902008176640000 is the first factorial past 10^18, so it
    // is also the first one stored in more than one limb.
    for n in [5usize, 19, 20, 25, 100, 1000] {
        let f = factorial(n);
        let s = f.to_string();
        println!("{:4}! has {:4} digits: {}", n, s.len(), brief(&s));
    }

    // Dividing a factorial back down is exact at every step, so the
    // remainder from divmod must vanish the whole way.
    let mut rest = factorial(50);
    for i in (2..=50usize).rev() {
        let (q, r) = rest.divmod(&Int::from(i));
        assert_eq!(r.sign(), 0, "{} does not divide evenly", i);
        rest = q;
    }
    assert_eq!(rest, 1);
    println!("50! divided back down by 50, 49, .., 2 leaves {}", rest);
}

/// Calculates n!
fn factorial(n: usize) -> Int {
    (2..=n).fold(Int::one(), |acc, i| acc * i)
}

/// Elides the middle of long decimal strings.
fn brief(s: &str) -> String {
    if s.len() <= 40 {
        return s.to_string();
    }
    format!("{}..{}", &s[..20], &s[s.len() - 18..])
}
