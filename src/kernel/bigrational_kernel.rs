// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::geometry::Point2;
use crate::kernel::Kernel2;
use crate::kernel::orientation::{Lifted, diametral_expr, incircle_expr, orient2d_expr};
use crate::numeric::{ExactRational, Sign};

/// Kernel using rug::Rational (arbitrary-precision rationals backed by GMP).
/// Always exact and always slow; the filtered kernel falls back to it.
#[derive(Clone, Copy, Debug, Default)]
pub struct BigRationalKernel;

#[inline]
fn lift(p: &Point2) -> Lifted<ExactRational> {
    // non-finite coordinates never reach the kernel through the triangulator
    [
        ExactRational::from_f64(p.x).unwrap_or_default(),
        ExactRational::from_f64(p.y).unwrap_or_default(),
    ]
}

impl Kernel2 for BigRationalKernel {
    fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> Sign {
        orient2d_expr(&lift(a), &lift(b), &lift(c)).sign()
    }

    fn incircle(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> Sign {
        incircle_expr(&lift(a), &lift(b), &lift(c), &lift(d)).sign()
    }

    fn diametral(a: &Point2, b: &Point2, p: &Point2) -> Sign {
        diametral_expr(&lift(a), &lift(b), &lift(p)).sign()
    }
}
