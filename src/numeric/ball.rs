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

use std::ops::{Add, Mul, Neg, Sub};

use crate::numeric::Sign;

/// Midpoint-radius enclosure of a real value: the value lies in `[m - r, m + r]`.
///
/// Every operation keeps the rounding error of the midpoint (recovered exactly
/// with error-free transforms) plus the propagated input radii, and widens the
/// result so that the rounding of the radius computation itself is covered.
/// A ball whose radius does not reach zero certifies the sign of the value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ball {
    pub m: f64,
    pub r: f64,
}

// Covers the handful of roundings in each radius update.
const WIDEN: f64 = 1.0 + 8.0 * f64::EPSILON;

#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

#[inline]
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let err = f64::mul_add(a, b, -p);
    (p, err)
}

impl Ball {
    #[inline]
    pub fn from_f64(x: f64) -> Self {
        Ball { m: x, r: 0.0 }
    }

    #[inline]
    pub fn unknown() -> Self {
        Ball {
            m: 0.0,
            r: f64::INFINITY,
        }
    }

    #[inline]
    pub fn add(self, o: Self) -> Self {
        let (s, e) = two_sum(self.m, o.m);
        Ball {
            m: s,
            r: (self.r + o.r + e.abs()) * WIDEN,
        }
    }

    #[inline]
    pub fn sub(self, o: Self) -> Self {
        self.add(o.neg())
    }

    #[inline]
    pub fn neg(self) -> Self {
        Ball {
            m: -self.m,
            r: self.r,
        }
    }

    #[inline]
    pub fn mul(self, o: Self) -> Self {
        let (p, e) = two_prod(self.m, o.m);
        // MIN_POSITIVE absorbs the inexact error term of a product that underflows.
        let r = self.m.abs() * o.r + o.m.abs() * self.r + self.r * o.r + e.abs();
        Ball {
            m: p,
            r: r * WIDEN + f64::MIN_POSITIVE,
        }
    }

    /// `Some(sign)` when the enclosure excludes zero, `None` when only an exact
    /// evaluation can decide.
    #[inline]
    pub fn sign_if_certain(self) -> Option<Sign> {
        if !self.m.is_finite() || !self.r.is_finite() {
            return None;
        }
        if self.m > self.r {
            Some(Sign::Positive)
        } else if self.m < -self.r {
            Some(Sign::Negative)
        } else {
            None
        }
    }
}

impl<'a, 'b> Add<&'b Ball> for &'a Ball {
    type Output = Ball;
    fn add(self, rhs: &'b Ball) -> Ball {
        Ball::add(*self, *rhs)
    }
}

impl<'a, 'b> Sub<&'b Ball> for &'a Ball {
    type Output = Ball;
    fn sub(self, rhs: &'b Ball) -> Ball {
        Ball::sub(*self, *rhs)
    }
}

impl<'a, 'b> Mul<&'b Ball> for &'a Ball {
    type Output = Ball;
    fn mul(self, rhs: &'b Ball) -> Ball {
        Ball::mul(*self, *rhs)
    }
}

impl Neg for Ball {
    type Output = Ball;
    fn neg(self) -> Ball {
        Ball::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_leaf_has_certain_sign() {
        assert_eq!(Ball::from_f64(2.5).sign_if_certain(), Some(Sign::Positive));
        assert_eq!(Ball::from_f64(-1e-300).sign_if_certain(), Some(Sign::Negative));
        assert_eq!(Ball::from_f64(0.0).sign_if_certain(), None);
    }

    #[test]
    fn enclosure_contains_true_value_under_cancellation() {
        let a = Ball::from_f64(0.1);
        let b = Ball::from_f64(0.2);
        let c = Ball::from_f64(0.3);
        let d = &(&a + &b) - &c;
        // binary 0.1 + 0.2 - 0.3 is exactly 2^-55, while the rounded midpoint is 2^-54
        let truth = 2f64.powi(-55);
        assert!(d.m - d.r <= truth && truth <= d.m + d.r);
        assert_eq!(d.sign_if_certain(), Some(Sign::Positive));
    }

    #[test]
    fn product_of_separated_values() {
        let a = Ball::from_f64(3.0).sub(Ball::from_f64(1.0));
        let b = Ball::from_f64(-2.0).add(Ball::from_f64(0.5));
        assert_eq!((&a * &b).sign_if_certain(), Some(Sign::Negative));
    }

    #[test]
    fn overflow_defers_to_exact() {
        let big = Ball::from_f64(f64::MAX);
        assert_eq!((&big * &big).sign_if_certain(), None);
        assert_eq!(Ball::unknown().sign_if_certain(), None);
    }
}
