//! Property tests for `Int`, cross-checked against `num_bigint` as the
//! reference implementation.

use num_bigint::BigInt;
use num_traits::Pow;
use quickcheck::TestResult;

use decint::Int;

#[cfg(feature = "full-quickcheck")]
const QUICKCHECK_THOROUGNESS: u64 = 100;
#[cfg(not(feature = "full-quickcheck"))]
const QUICKCHECK_THOROUGNESS: u64 = 1;

macro_rules! quickcheck {
    (@as_items $($i:item)*) => ($($i)*);
    {
        $(
            fn $fn_name:ident($($arg_name:ident : $arg_ty:ty),*) -> $ret:ty {
                $($code:tt)*
            }
        )*
    } => (
        quickcheck! {
            @as_items
            $(
                #[test]
                fn $fn_name() {
                    fn prop($($arg_name: $arg_ty),*) -> $ret {
                        $($code)*
                    }
                    quickcheck::QuickCheck::new()
                        .tests(QUICKCHECK_THOROUGNESS*10_000)
                        .max_tests(QUICKCHECK_THOROUGNESS*100_000)
                        .quickcheck(prop as fn($($arg_ty),*) -> $ret);
                }
            )*
        }
    )
}

// Both implementations parse the same decimal string, so each pair holds
// the same mathematical value. Chaining the pieces as digit blocks
// produces values that regularly straddle several limb boundaries.
fn pair(hi: u64, mid: u64, lo: u64, neg: bool) -> (Int, BigInt) {
    let s = format!(
        "{}{}{:019}{:019}",
        if neg { "-" } else { "" },
        hi,
        mid,
        lo
    );
    (s.parse().unwrap(), s.parse().unwrap())
}

fn small_pair(val: u64, neg: bool) -> (Int, BigInt) {
    let s = format!("{}{}", if neg { "-" } else { "" }, val);
    (s.parse().unwrap(), s.parse().unwrap())
}

fn agree(i: &Int, b: &BigInt) -> bool {
    i.to_string() == b.to_string()
}

quickcheck! {
    fn check_round_trip(hi: u64, mid: u64, lo: u64, neg: bool) -> bool {
        // to_string(parse(s)) == s for every canonical decimal string
        let (_, oracle) = pair(hi, mid, lo, neg);
        let s = oracle.to_string();
        s.parse::<Int>().unwrap().to_string() == s
    }
}

quickcheck! {
    fn check_add(ah: u64, al: u64, an: bool, bh: u64, bl: u64, bn: bool) -> bool {
        let (x, xo) = pair(ah, 0, al, an);
        let (y, yo) = pair(bh, 0, bl, bn);

        agree(&(&x + &y), &(&xo + &yo)) && &x + &y == &y + &x
    }
}

quickcheck! {
    fn check_sub(ah: u64, al: u64, an: bool, bh: u64, bl: u64, bn: bool) -> bool {
        let (x, xo) = pair(ah, 0, al, an);
        let (y, yo) = pair(bh, 0, bl, bn);

        // also pins a - b == a + (-b)
        agree(&(&x - &y), &(&xo - &yo)) && &x - &y == &x + &(-&y)
    }
}

quickcheck! {
    fn check_mul(ah: u64, al: u64, an: bool, bh: u64, bl: u64, bn: bool) -> bool {
        let (x, xo) = pair(ah, 0, al, an);
        let (y, yo) = pair(bh, 0, bl, bn);

        agree(&(&x * &y), &(&xo * &yo)) && &x * &y == &y * &x
    }
}

quickcheck! {
    fn check_ring_axioms(a: u64, an: bool, b: u64, bn: bool, c: u64, cn: bool) -> bool {
        let (a, _) = small_pair(a, an);
        let (b, _) = small_pair(b, bn);
        let (c, _) = small_pair(c, cn);

        let zero = Int::zero();
        let one = Int::from(1);

        (&a + &b) + &c == &a + &(&b + &c)
            && (&a * &b) * &c == &a * &(&b * &c)
            && &a * &(&b + &c) == &(&a * &b) + &(&a * &c)
            && &a + &zero == a
            && &a * &one == a
            && (&a * &zero).sign() == 0
            && &a + &(-&a) == zero
    }
}

quickcheck! {
    fn check_divmod(ah: u64, am: u64, al: u64, an: bool,
                    bh: u64, bl: u64, bn: bool) -> TestResult {
        let (x, xo) = pair(ah, am, al, an);
        let (y, yo) = pair(bh, 0, bl, bn);
        if y.sign() == 0 {
            return TestResult::discard();
        }

        let (q, r) = x.divmod(&y);

        // num_bigint's division also truncates toward zero
        if !agree(&q, &(&xo / &yo)) || !agree(&r, &(&xo % &yo)) {
            return TestResult::failed();
        }

        // the defining identity, directly
        let identity = &q * &y + &r == x;
        let bounded = r.clone().abs() < y.clone().abs();
        let r_sign = r.sign() == 0 || r.sign() == x.sign();
        TestResult::from_bool(identity && bounded && r_sign)
    }
}

quickcheck! {
    fn check_divrem_1_path(ah: u64, am: u64, al: u64, an: bool, d: u64) -> TestResult {
        // single-limb divisors take the short-division path
        let d = d % 999_999_999_999_999_999 + 1;
        let (x, xo) = pair(ah, am, al, an);
        let (y, yo) = small_pair(d, false);

        let (q, r) = x.divmod(&y);
        TestResult::from_bool(
            agree(&q, &(&xo / &yo)) && agree(&r, &(&xo % &yo)),
        )
    }
}

quickcheck! {
    fn check_cmp(ah: u64, al: u64, an: bool, bh: u64, bl: u64, bn: bool) -> bool {
        let (x, xo) = pair(ah, 0, al, an);
        let (y, yo) = pair(bh, 0, bl, bn);

        // total order agrees with the oracle and with subtraction
        x.cmp(&y) == xo.cmp(&yo)
            && (&x - &y).sign().cmp(&0) == x.cmp(&y)
    }
}

quickcheck! {
    fn check_normalized_output(hi: u64, lo: u64, neg: bool, zeros: u8) -> bool {
        // parsing any amount of redundant leading zeros (and -0) yields
        // the canonical form back
        let (_, oracle) = pair(hi, 0, lo, neg);
        let canonical = oracle.to_string();
        let sign = if canonical.starts_with('-') { "-" } else { "" };
        let mag = canonical.trim_start_matches('-');
        let padded =
            format!("{}{}{}", sign, "0".repeat(zeros as usize % 40), mag);

        let i: Int = padded.parse().unwrap();
        let s = i.to_string();
        s == canonical && !s.starts_with("-0") && (s == "0" || !s.starts_with('0'))
    }
}

quickcheck! {
    fn check_pow(base: u64, neg: bool, exp: u8) -> bool {
        let exp = (exp % 24) as u32;
        let (x, xo) = small_pair(base % 100_000, neg);

        agree(&x.pow(exp), &Pow::pow(&xo, exp))
    }
}
