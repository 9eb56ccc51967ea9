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

use alpha_shape::kernel::{
    BigRationalKernel, FilteredKernel, Kernel2, collinear_between, side_of_oriented_circle,
};
use alpha_shape::numeric::Sign;
use alpha_shape::Point2;

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

#[test]
fn test_orient2d_basic() {
    let a = p(0.0, 0.0);
    let b = p(1.0, 0.0);
    let c = p(0.0, 1.0);
    assert_eq!(FilteredKernel::orient2d(&a, &b, &c), Sign::Positive);
    assert_eq!(FilteredKernel::orient2d(&a, &c, &b), Sign::Negative);
    assert_eq!(FilteredKernel::orient2d(&a, &b, &p(7.0, 0.0)), Sign::Zero);
}

#[test]
fn test_orient2d_near_degenerate_matches_exact() {
    // Points within a few ulps of the line y = x
    let q = p(12.0, 12.0);
    let r = p(24.0, 24.0);
    let ulp = f64::EPSILON / 2.0;
    for i in 0..16 {
        for j in 0..16 {
            let s = p(0.5 + i as f64 * ulp, 0.5 + j as f64 * ulp);
            let filtered = FilteredKernel::orient2d(&s, &q, &r);
            let exact = BigRationalKernel::orient2d(&s, &q, &r);
            assert_eq!(filtered, exact, "i = {i}, j = {j}");
            assert_eq!(exact == Sign::Zero, i == j);
        }
    }
}

#[test]
fn test_incircle_matches_exact() {
    let a = p(0.0, 0.0);
    let b = p(1.0, 0.0);
    let c = p(1.0, 1.0);
    let tiny = 1e-17;
    for d in [
        p(0.0, 1.0),
        p(0.0, 1.0 + tiny),
        p(0.0, 1.0 - 1e-16),
        p(0.5, 0.5),
        p(3.0, 3.0),
        p(-1e-300, 1.0),
    ] {
        assert_eq!(
            FilteredKernel::incircle(&a, &b, &c, &d),
            BigRationalKernel::incircle(&a, &b, &c, &d),
            "d = {d}"
        );
    }
    assert_eq!(FilteredKernel::incircle(&a, &b, &c, &p(0.0, 1.0)), Sign::Zero);
    assert_eq!(FilteredKernel::incircle(&a, &b, &c, &p(0.5, 0.5)), Sign::Positive);
}

#[test]
fn test_diametral() {
    let a = p(0.0, 0.0);
    let b = p(4.0, 0.0);
    assert_eq!(FilteredKernel::diametral(&a, &b, &p(2.0, 1.0)), Sign::Negative);
    assert_eq!(FilteredKernel::diametral(&a, &b, &p(2.0, 2.0)), Sign::Zero);
    assert_eq!(FilteredKernel::diametral(&a, &b, &p(2.0, 3.0)), Sign::Positive);
}

#[test]
fn test_perturbed_incircle_picks_one_diagonal() {
    // Unit square corners in counter-clockwise order, every rotation
    let corners = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
    for k in 0..4 {
        let q: Vec<Point2> = (0..4).map(|i| corners[(i + k) % 4]).collect();
        let s0 = side_of_oriented_circle::<FilteredKernel>(&q[0], &q[1], &q[2], &q[3]);
        let s1 = side_of_oriented_circle::<FilteredKernel>(&q[0], &q[2], &q[3], &q[1]);
        let t0 = side_of_oriented_circle::<FilteredKernel>(&q[1], &q[2], &q[3], &q[0]);
        assert_ne!(s0, Sign::Zero);
        assert_eq!(s0, s1, "rotation {k}");
        assert_ne!(s0, t0, "rotation {k}");
    }
}

#[test]
fn test_collinear_between() {
    let a = p(0.0, 0.0);
    let b = p(2.0, 2.0);
    assert!(collinear_between(&a, &p(1.0, 1.0), &b));
    assert!(!collinear_between(&a, &p(3.0, 3.0), &b));
    assert!(!collinear_between(&a, &p(-1.0, -1.0), &b));
}
