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

//! Inexact constructions used by the alpha classifier.
//!
//! Each function orders its input points lexicographically before computing,
//! so the same simplex yields bit-identical radii however its vertices are
//! listed.

use std::cmp::Ordering;

use crate::geometry::Point2;

#[inline]
fn sorted3<'a>(a: &'a Point2, b: &'a Point2, c: &'a Point2) -> [&'a Point2; 3] {
    let mut v = [a, b, c];
    v.sort_by(|p, q| p.lex_cmp(q));
    v
}

/// `x · 2^k`, in two steps so that neither factor leaves the `f64` range.
#[inline]
fn scale_by_pow2(x: f64, k: i32) -> f64 {
    let h = k / 2;
    x * 2f64.powi(h) * 2f64.powi(k - h)
}

/// Squared circumradius of `abc`: `|ab|² |bc|² |ca|² / (4 · cross²)`.
///
/// The edge vectors are first rescaled by a power of two (exact) so that the
/// products can neither overflow nor underflow. Returns `f64::INFINITY` when
/// the computed cross product vanishes or the radius exceeds the `f64` range.
pub fn circumradius_squared(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let [p, q, r] = sorted3(a, b, c);
    let (ux, uy) = (q.x - p.x, q.y - p.y);
    let (vx, vy) = (r.x - p.x, r.y - p.y);
    let m = ux.abs().max(uy.abs()).max(vx.abs()).max(vy.abs());
    if m == 0.0 || !m.is_finite() {
        return f64::INFINITY;
    }
    let k = m.log2().floor() as i32;
    let [ux, uy, vx, vy, wx, wy] =
        [ux, uy, vx, vy, r.x - q.x, r.y - q.y].map(|t| scale_by_pow2(t, -k));

    let cross = ux * vy - uy * vx;
    if cross == 0.0 {
        return f64::INFINITY;
    }
    let lu = ux * ux + uy * uy;
    let lv = vx * vx + vy * vy;
    let lw = wx * wx + wy * wy;
    let scaled = lu * lv * lw / (4.0 * cross * cross);
    let r2 = scale_by_pow2(scaled, 2 * k);
    if r2.is_finite() { r2 } else { f64::INFINITY }
}

/// Squared radius of the smallest circle through `a` and `b`.
pub fn edge_radius_squared(a: &Point2, b: &Point2) -> f64 {
    let (p, q) = if b.lex_cmp(a) == Ordering::Less {
        (b, a)
    } else {
        (a, b)
    };
    p.distance_squared_to(q) / 4.0
}

/// Center of the circle through `a`, `b`, `c`; `None` for collinear input.
pub fn circumcenter(a: &Point2, b: &Point2, c: &Point2) -> Option<Point2> {
    let [p, q, r] = sorted3(a, b, c);
    let (ux, uy) = (q.x - p.x, q.y - p.y);
    let (vx, vy) = (r.x - p.x, r.y - p.y);
    let d = 2.0 * (ux * vy - uy * vx);
    if d == 0.0 {
        return None;
    }
    let lu = ux * ux + uy * uy;
    let lv = vx * vx + vy * vy;
    let cx = (vy * lu - uy * lv) / d;
    let cy = (ux * lv - vx * lu) / d;
    Some(Point2::new(p.x + cx, p.y + cy))
}
