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
use crate::kernel::orientation::{Lifted, diametral_expr, incircle_expr, orient2d_expr};
use crate::kernel::{BigRationalKernel, Kernel2};
use crate::numeric::{Ball, Sign};

/// Exact predicates, inexact constructions: each determinant is first
/// evaluated in ball arithmetic and only recomputed with rationals when the
/// enclosure touches zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct FilteredKernel;

#[inline]
fn lift(p: &Point2) -> Lifted<Ball> {
    [Ball::from_f64(p.x), Ball::from_f64(p.y)]
}

impl Kernel2 for FilteredKernel {
    fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> Sign {
        orient2d_expr(&lift(a), &lift(b), &lift(c))
            .sign_if_certain()
            .unwrap_or_else(|| BigRationalKernel::orient2d(a, b, c))
    }

    fn incircle(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> Sign {
        incircle_expr(&lift(a), &lift(b), &lift(c), &lift(d))
            .sign_if_certain()
            .unwrap_or_else(|| BigRationalKernel::incircle(a, b, c, d))
    }

    fn diametral(a: &Point2, b: &Point2, p: &Point2) -> Sign {
        diametral_expr(&lift(a), &lift(b), &lift(p))
            .sign_if_certain()
            .unwrap_or_else(|| BigRationalKernel::diametral(a, b, p))
    }
}
