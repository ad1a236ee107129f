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
 * Arbitrary-precision signed integers stored in base-10^18 limbs.
 *
 * The decimal base keeps conversion to and from decimal text a matter of
 * chunking eighteen digits per limb, while carries, products and the
 * division trial quotients still fit native integers. The [`Int`] type
 * carries the public arithmetic surface; the [`ll`] module holds the
 * slice-level kernel it is built on.
 *
 * ```
 * use decint::Int;
 *
 * let a: Int = "123456789012345678901234567890".parse().unwrap();
 * let b = Int::from(7);
 * let (q, r) = a.divmod(&b);
 * assert_eq!(&q * &b + &r, a);
 * ```
 */

pub mod ll;

pub mod int;

// Re-exports

pub use crate::int::Int;
pub use crate::int::ParseIntError;
pub use crate::int::RandomInt;
pub use crate::int::TryFromIntError;
