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

use crate::error::Result;
use crate::geometry::{Edge, Point2, Segment2, Triangle};

pub mod delaunay;

pub use delaunay::{Delaunay, INFINITE};

/// Affine dimension spanned by the distinct vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Empty,
    Point,
    /// Two or more vertices, all collinear: a chain of edges, no faces.
    Line,
    Plane,
}

pub trait Triangulate2D {
    fn triangulate(points: &[Point2]) -> Result<Triangulation>;
}

/// Immutable snapshot of a triangulation: distinct vertices, counter-clockwise
/// triangles, and every edge, all referring to indices into `points`.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangulation {
    pub points: Vec<Point2>,
    /// Canonical rotation, sorted.
    pub triangles: Vec<Triangle>,
    /// Sorted; includes chain edges when `dimension` is `Line`.
    pub edges: Vec<Edge>,
    /// Convex hull edges (the chain itself for collinear input).
    pub hull: Vec<Edge>,
    pub dimension: Dimension,
    pub(crate) sources: Vec<usize>,
    pub(crate) input_to_vertex: Vec<usize>,
}

impl Triangulation {
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty() && self.edges.is_empty()
    }

    /// Index of the first input point that created vertex `v`.
    pub fn source_of(&self, v: usize) -> Option<usize> {
        self.sources.get(v).copied()
    }

    /// Vertex that input point `i` was merged into.
    pub fn vertex_of_input(&self, i: usize) -> Option<usize> {
        self.input_to_vertex.get(i).copied()
    }

    pub fn segment(&self, e: Edge) -> Segment2 {
        Segment2::new(&self.points[e.0], &self.points[e.1])
    }

    pub fn edge_index(&self, e: Edge) -> Option<usize> {
        self.edges.binary_search(&e).ok()
    }

    /// Edges as canonical coordinate segments in lexicographic order. Two
    /// triangulations of the same point set built in different orders number
    /// their vertices differently but agree on this list.
    pub fn geometric_edges(&self) -> Vec<Segment2> {
        let mut out: Vec<Segment2> = self
            .edges
            .iter()
            .map(|&e| self.segment(e).canonical())
            .collect();
        out.sort_by(|a, b| a.lex_cmp(b));
        out
    }

    /// Triangles as coordinate triples starting at their lexicographically
    /// smallest corner (orientation kept), in lexicographic order.
    pub fn geometric_triangles(&self) -> Vec<[Point2; 3]> {
        let mut out: Vec<[Point2; 3]> = self
            .triangles
            .iter()
            .map(|t| {
                let mut corners = [self.points[t.0], self.points[t.1], self.points[t.2]];
                let first = (0..3)
                    .min_by(|&i, &j| corners[i].lex_cmp(&corners[j]))
                    .unwrap_or(0);
                corners.rotate_left(first);
                corners
            })
            .collect();
        out.sort_by(|a, b| {
            a.iter()
                .zip(b.iter())
                .map(|(p, q)| p.lex_cmp(q))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
        out
    }
}
