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

use std::cmp::Ordering;
use std::fmt;

use crate::geometry::Point2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub a: Point2,
    pub b: Point2,
}

impl Segment2 {
    pub fn new(a: &Point2, b: &Point2) -> Self {
        Self { a: *a, b: *b }
    }

    pub fn length_squared(&self) -> f64 {
        self.a.distance_squared_to(&self.b)
    }

    pub fn length(&self) -> f64 {
        self.a.distance_to(&self.b)
    }

    pub fn midpoint(&self) -> Point2 {
        self.a.midpoint(&self.b)
    }

    pub fn inverse(&self) -> Self {
        Self::new(&self.b, &self.a)
    }

    /// Same segment with the lexicographically smaller endpoint first.
    pub fn canonical(&self) -> Self {
        if self.b.lex_cmp(&self.a) == Ordering::Less {
            self.inverse()
        } else {
            *self
        }
    }

    pub fn lex_cmp(&self, other: &Self) -> Ordering {
        self.a
            .lex_cmp(&other.a)
            .then_with(|| self.b.lex_cmp(&other.b))
    }
}

/// `x1 y1 x2 y2`, one segment per line in edge files.
impl fmt::Display for Segment2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.a, self.b)
    }
}
