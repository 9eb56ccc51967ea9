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
use crate::numeric::Sign;

/// In-circle test with symbolic perturbation.
///
/// `p0 p1 p2` must be counter-clockwise. Returns `Positive` when `p` is inside
/// their circle. Exactly cocircular configurations are resolved by perturbing
/// the points in xy-lexicographic order, so for four distinct points the
/// answer is never `Zero` and both diagonals of a cocircular quadrilateral
/// agree on which one is Delaunay.
pub fn side_of_oriented_circle<K: Kernel2>(
    p0: &Point2,
    p1: &Point2,
    p2: &Point2,
    p: &Point2,
) -> Sign {
    let s = K::incircle(p0, p1, p2, p);
    if !s.is_zero() {
        return s;
    }

    // 0, 1, 2 name the triangle corners, 3 names the query point
    let mut order = [(0usize, p0), (1, p1), (2, p2), (3, p)];
    order.sort_by(|a, b| a.1.lex_cmp(b.1));

    // the leading monomial decides; two terms always suffice for a proper triangle
    for i in (1..4).rev() {
        let o = match order[i].0 {
            3 => return Sign::Negative,
            2 => K::orient2d(p0, p1, p),
            1 => K::orient2d(p0, p, p2),
            _ => K::orient2d(p, p1, p2),
        };
        if !o.is_zero() {
            return o;
        }
    }
    Sign::Negative
}

/// For collinear `a`, `p`, `b`: whether `p` lies strictly between `a` and `b`.
pub fn collinear_between(a: &Point2, p: &Point2, b: &Point2) -> bool {
    if a.x != b.x {
        (a.x < p.x && p.x < b.x) || (b.x < p.x && p.x < a.x)
    } else {
        (a.y < p.y && p.y < b.y) || (b.y < p.y && p.y < a.y)
    }
}
