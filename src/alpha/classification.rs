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

use std::fmt;

/// Position of a simplex relative to the alpha shape.
///
/// Variants are ordered by how deep inside the shape they are, so that for a
/// fixed simplex the class is non-decreasing in alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    Exterior,
    /// On the boundary but not attached to any shape triangle.
    Singular,
    /// On the boundary of exactly one shape triangle.
    Regular,
    Interior,
}

impl Classification {
    #[inline]
    pub fn is_boundary(self) -> bool {
        matches!(self, Classification::Regular | Classification::Singular)
    }

    #[inline]
    pub fn in_shape(self) -> bool {
        self != Classification::Exterior
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::Exterior => "EXTERIOR",
            Classification::Singular => "SINGULAR",
            Classification::Regular => "REGULAR",
            Classification::Interior => "INTERIOR",
        };
        f.write_str(name)
    }
}
