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
use crate::numeric::Sign;

/// The narrow predicate interface the triangulator and the classifier are
/// written against. Implementations choose the arithmetic; every answer must
/// be the exact sign for the given `f64` coordinates.
pub trait Kernel2 {
    /// Sign of the oriented area of `abc` (CCW > 0, CW < 0, 0 if collinear).
    fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> Sign;

    /// For a counter-clockwise `abc`: positive when `d` lies strictly inside
    /// the circle through `a`, `b`, `c`, zero when the four are cocircular.
    fn incircle(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> Sign;

    /// Sign of `(a - p) · (b - p)`: negative when `p` lies strictly inside the
    /// circle with diameter `ab`.
    fn diametral(a: &Point2, b: &Point2, p: &Point2) -> Sign;
}
