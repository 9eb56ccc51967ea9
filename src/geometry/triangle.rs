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

use crate::geometry::Edge;

/// Counter-clockwise triple of vertex indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triangle(pub usize, pub usize, pub usize);

impl Triangle {
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.0, self.1, self.2]
    }

    #[inline]
    pub fn as_sorted_indices(&self) -> (usize, usize, usize) {
        let mut v = [self.0, self.1, self.2];
        v.sort_unstable();
        (v[0], v[1], v[2])
    }

    /// Rotation that starts at the smallest index; keeps the orientation.
    pub fn canonical(&self) -> Self {
        let Triangle(a, b, c) = *self;
        if a < b && a < c {
            Triangle(a, b, c)
        } else if b < c {
            Triangle(b, c, a)
        } else {
            Triangle(c, a, b)
        }
    }

    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.0, self.1),
            Edge::new(self.1, self.2),
            Edge::new(self.2, self.0),
        ]
    }

    #[inline]
    pub fn has_vertex(&self, v: usize) -> bool {
        self.0 == v || self.1 == v || self.2 == v
    }

    /// Vertex opposite the edge `(u, v)`, if the edge belongs to the triangle.
    #[inline]
    pub fn third_vertex(&self, u: usize, v: usize) -> Option<usize> {
        let mut count = 0;
        let mut other = None;
        for w in self.vertices() {
            if w != u && w != v {
                other = Some(w);
            } else {
                count += 1;
            }
        }
        if count == 2 { other } else { None }
    }
}
