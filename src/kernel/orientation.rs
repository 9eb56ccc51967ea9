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

//! Predicate determinants written once over any ring-like number type, so
//! the floating filter and the exact fallback evaluate the same expression.

use std::ops::{Add, Mul, Sub};

pub(crate) type Lifted<T> = [T; 2];

/// `(b - a) × (c - a)`
pub(crate) fn orient2d_expr<T>(a: &Lifted<T>, b: &Lifted<T>, c: &Lifted<T>) -> T
where
    for<'x> &'x T: Add<&'x T, Output = T> + Sub<&'x T, Output = T> + Mul<&'x T, Output = T>,
{
    &(&(&b[0] - &a[0]) * &(&c[1] - &a[1])) - &(&(&b[1] - &a[1]) * &(&c[0] - &a[0]))
}

/// Lifted 3x3 in-circle determinant with `d` moved to the origin.
pub(crate) fn incircle_expr<T>(a: &Lifted<T>, b: &Lifted<T>, c: &Lifted<T>, d: &Lifted<T>) -> T
where
    for<'x> &'x T: Add<&'x T, Output = T> + Sub<&'x T, Output = T> + Mul<&'x T, Output = T>,
{
    let adx = &a[0] - &d[0];
    let ady = &a[1] - &d[1];
    let bdx = &b[0] - &d[0];
    let bdy = &b[1] - &d[1];
    let cdx = &c[0] - &d[0];
    let cdy = &c[1] - &d[1];

    let alift = &(&adx * &adx) + &(&ady * &ady);
    let blift = &(&bdx * &bdx) + &(&bdy * &bdy);
    let clift = &(&cdx * &cdx) + &(&cdy * &cdy);

    let bc = &(&bdx * &cdy) - &(&cdx * &bdy);
    let ca = &(&cdx * &ady) - &(&adx * &cdy);
    let ab = &(&adx * &bdy) - &(&bdx * &ady);

    &(&(&alift * &bc) + &(&blift * &ca)) + &(&clift * &ab)
}

/// `(a - p) · (b - p)`
pub(crate) fn diametral_expr<T>(a: &Lifted<T>, b: &Lifted<T>, p: &Lifted<T>) -> T
where
    for<'x> &'x T: Add<&'x T, Output = T> + Sub<&'x T, Output = T> + Mul<&'x T, Output = T>,
{
    &(&(&a[0] - &p[0]) * &(&b[0] - &p[0])) + &(&(&a[1] - &p[1]) * &(&b[1] - &p[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Ball;

    fn lift(x: f64, y: f64) -> Lifted<Ball> {
        [Ball::from_f64(x), Ball::from_f64(y)]
    }

    #[test]
    fn ccw_test() {
        let a = lift(0.0, 0.0);
        let b = lift(1.0, 0.0);
        let c = lift(0.0, 1.0);

        assert!(orient2d_expr(&a, &b, &c).m > 0.0); // Counter-clockwise
        assert!(orient2d_expr(&a, &c, &b).m < 0.0);
    }

    #[test]
    fn incircle_center_is_inside() {
        let a = lift(0.0, 0.0);
        let b = lift(2.0, 0.0);
        let c = lift(0.0, 2.0);
        assert!(incircle_expr(&a, &b, &c, &lift(1.0, 1.0)).m > 0.0);
        assert!(incircle_expr(&a, &b, &c, &lift(5.0, 5.0)).m < 0.0);
    }

    #[test]
    fn diametral_midpoint_is_inside() {
        let a = lift(0.0, 0.0);
        let b = lift(4.0, 0.0);
        assert!(diametral_expr(&a, &b, &lift(2.0, 1.0)).m < 0.0);
        assert!(diametral_expr(&a, &b, &lift(2.0, 3.0)).m > 0.0);
    }
}
