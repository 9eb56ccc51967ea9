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

use std::marker::PhantomData;

use ahash::{AHashMap, AHashSet};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::error::{AlphaError, Result};
use crate::geometry::{Edge, Point2, Triangle};
use crate::kernel::{FilteredKernel, Kernel2, collinear_between, side_of_oriented_circle};
use crate::numeric::Sign;
use crate::operations::triangulation::{Dimension, Triangulate2D, Triangulation};

/// Symbolic vertex at infinity. Every convex hull edge is closed by a ghost
/// face made of the edge and this vertex.
pub const INFINITE: usize = usize::MAX;

const NO_FACE: usize = usize::MAX;
const SHUFFLE_SEED: u64 = 0x5eed_a1fa_0000_0002;

#[derive(Clone, Copy, Debug)]
struct Face {
    // counter-clockwise; n[i] is the face across the edge opposite v[i]
    v: [usize; 3],
    n: [usize; 3],
}

impl Face {
    #[inline]
    fn is_ghost(&self) -> bool {
        self.v.contains(&INFINITE)
    }

    /// Directed edge opposite `v[i]`.
    #[inline]
    fn edge(&self, i: usize) -> (usize, usize) {
        (self.v[(i + 1) % 3], self.v[(i + 2) % 3])
    }

    #[inline]
    fn index_of(&self, v: usize) -> Option<usize> {
        self.v.iter().position(|&w| w == v)
    }
}

enum Location {
    /// The point coincides with an existing vertex.
    Vertex(usize),
    /// Insertion position in the collinear chain.
    Chain(usize),
    /// A face whose circumcircle (or outer half-plane) contains the point.
    Face(usize),
}

/// Incremental Delaunay triangulation (Bowyer-Watson over faces with
/// neighbour links and a symbolic infinite vertex).
///
/// Predicates come from `K`; cocircular ties are broken by symbolic
/// perturbation, so the result does not depend on insertion order.
#[derive(Clone, Debug)]
pub struct Delaunay<K: Kernel2 = FilteredKernel> {
    points: Vec<Point2>,
    sources: Vec<usize>,
    input_to_vertex: Vec<usize>,
    faces: Vec<Face>,
    alive: Vec<bool>,
    free: Vec<usize>,
    // collinear vertices in lexicographic order while dimension < Plane
    chain: Vec<usize>,
    hint: usize,
    dimension: Dimension,
    rng: StdRng,
    _kernel: PhantomData<K>,
}

impl<K: Kernel2> Default for Delaunay<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kernel2> Triangulate2D for Delaunay<K> {
    fn triangulate(points: &[Point2]) -> Result<Triangulation> {
        Ok(Self::build(points)?.to_triangulation())
    }
}

impl<K: Kernel2> Delaunay<K> {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            sources: Vec::new(),
            input_to_vertex: Vec::new(),
            faces: Vec::new(),
            alive: Vec::new(),
            free: Vec::new(),
            chain: Vec::new(),
            hint: NO_FACE,
            dimension: Dimension::Empty,
            rng: StdRng::seed_from_u64(SHUFFLE_SEED),
            _kernel: PhantomData,
        }
    }

    /// Build the Delaunay triangulation of `pts`. Coincident points are merged
    /// into one vertex; vertices are numbered by first occurrence.
    pub fn build(pts: &[Point2]) -> Result<Self> {
        let mut dt = Self::new();

        // 1) Register distinct vertices in input order
        let mut seen: AHashMap<(u64, u64), usize> = AHashMap::with_capacity(pts.len());
        for (i, p) in pts.iter().enumerate() {
            if !p.is_finite() {
                return Err(AlphaError::NonFinitePoint { index: i });
            }
            let p = p.normalized();
            let v = match seen.get(&p.bits_key()) {
                Some(&v) => v,
                None => {
                    let v = dt.points.len();
                    dt.points.push(p);
                    dt.sources.push(i);
                    seen.insert(p.bits_key(), v);
                    v
                }
            };
            dt.input_to_vertex.push(v);
        }

        // 2) Insert them in a shuffled order; the result is order independent,
        //    the walk lengths are not
        let mut order: Vec<usize> = (0..dt.points.len()).collect();
        order.shuffle(&mut dt.rng);
        for v in order {
            let p = dt.points[v];
            match dt.locate(&p) {
                Location::Vertex(_) => {}
                loc => dt.link_vertex(v, loc),
            }
        }

        tracing::debug!(
            points = pts.len(),
            vertices = dt.points.len(),
            triangles = dt.number_of_triangles(),
            dimension = ?dt.dimension,
            "built delaunay triangulation"
        );
        Ok(dt)
    }

    /// Insert one point and return its vertex id. A point equal to an existing
    /// vertex returns that vertex and leaves the triangulation unchanged.
    pub fn insert(&mut self, p: Point2) -> Result<usize> {
        let index = self.input_to_vertex.len();
        if !p.is_finite() {
            return Err(AlphaError::NonFinitePoint { index });
        }
        let p = p.normalized();
        let v = match self.locate(&p) {
            Location::Vertex(v) => v,
            loc => {
                let v = self.points.len();
                self.points.push(p);
                self.sources.push(index);
                self.link_vertex(v, loc);
                v
            }
        };
        self.input_to_vertex.push(v);
        Ok(v)
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn number_of_vertices(&self) -> usize {
        self.points.len()
    }

    pub fn number_of_triangles(&self) -> usize {
        self.finite_faces().count()
    }

    /// Index of the first inserted point that created vertex `v`.
    pub fn source_of(&self, v: usize) -> Option<usize> {
        self.sources.get(v).copied()
    }

    /// Vertex that the `i`-th inserted point was merged into.
    pub fn vertex_of_input(&self, i: usize) -> Option<usize> {
        self.input_to_vertex.get(i).copied()
    }

    /// Counter-clockwise triangles in canonical rotation, sorted.
    pub fn triangles(&self) -> Vec<Triangle> {
        let mut out: Vec<Triangle> = self
            .finite_faces()
            .map(|f| {
                let [a, b, c] = self.faces[f].v;
                Triangle(a, b, c).canonical()
            })
            .collect();
        out.sort_unstable();
        out
    }

    /// Every edge of the triangulation, sorted.
    pub fn edges(&self) -> Vec<Edge> {
        let mut out = match self.dimension {
            Dimension::Plane => {
                let mut out = Vec::with_capacity(self.faces.len() * 3 / 2);
                for f in self.finite_faces() {
                    let face = &self.faces[f];
                    for i in 0..3 {
                        let g = face.n[i];
                        if self.faces[g].is_ghost() || f < g {
                            let (u, w) = face.edge(i);
                            out.push(Edge::new(u, w));
                        }
                    }
                }
                out
            }
            _ => self.chain_edges(),
        };
        out.sort_unstable();
        out
    }

    /// Edges on the convex hull; the whole chain for collinear input.
    pub fn convex_hull_edges(&self) -> Vec<Edge> {
        let mut out = match self.dimension {
            Dimension::Plane => (0..self.faces.len())
                .filter(|&f| self.alive[f] && self.faces[f].is_ghost())
                .filter_map(|f| {
                    let face = &self.faces[f];
                    let i = face.index_of(INFINITE)?;
                    let (u, w) = face.edge(i);
                    Some(Edge::new(u, w))
                })
                .collect(),
            _ => self.chain_edges(),
        };
        out.sort_unstable();
        out
    }

    /// Checks orientation, neighbour symmetry and the local Delaunay property
    /// of every interior edge (which implies the global one).
    pub fn is_delaunay(&self) -> bool {
        for f in self.finite_faces() {
            let face = &self.faces[f];
            let [a, b, c] = face.v.map(|v| &self.points[v]);
            if !K::orient2d(a, b, c).is_positive() {
                return false;
            }
            for i in 0..3 {
                let g = face.n[i];
                if g == NO_FACE || !self.alive[g] || !self.faces[g].n.contains(&f) {
                    return false;
                }
                let other = &self.faces[g];
                if other.is_ghost() {
                    continue;
                }
                let (u, w) = face.edge(i);
                let Some(y) = Triangle(other.v[0], other.v[1], other.v[2]).third_vertex(u, w)
                else {
                    return false;
                };
                if side_of_oriented_circle::<K>(a, b, c, &self.points[y]).is_positive() {
                    return false;
                }
            }
        }
        true
    }

    pub fn to_triangulation(&self) -> Triangulation {
        Triangulation {
            points: self.points.clone(),
            triangles: self.triangles(),
            edges: self.edges(),
            hull: self.convex_hull_edges(),
            dimension: self.dimension,
            sources: self.sources.clone(),
            input_to_vertex: self.input_to_vertex.clone(),
        }
    }

    fn finite_faces(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.faces.len()).filter(move |&f| self.alive[f] && !self.faces[f].is_ghost())
    }

    fn chain_edges(&self) -> Vec<Edge> {
        self.chain.windows(2).map(|w| Edge::new(w[0], w[1])).collect()
    }

    fn locate(&mut self, p: &Point2) -> Location {
        match self.dimension {
            Dimension::Plane => self.walk(p),
            _ => match self
                .chain
                .binary_search_by(|&v| self.points[v].lex_cmp(p))
            {
                Ok(pos) => Location::Vertex(self.chain[pos]),
                Err(pos) => Location::Chain(pos),
            },
        }
    }

    /// Stochastic visibility walk from the last created face. Ends in the
    /// finite face whose closure holds `p`, or in the ghost face beyond the
    /// hull edge that sees `p`.
    fn walk(&mut self, p: &Point2) -> Location {
        let mut f = self.start_face();
        loop {
            let face = self.faces[f];
            let start = self.rng.random_range(0..3);
            let mut next = None;
            for k in 0..3 {
                let i = (start + k) % 3;
                let (u, w) = face.edge(i);
                if K::orient2d(&self.points[u], &self.points[w], p).is_negative() {
                    next = Some(face.n[i]);
                    break;
                }
            }
            match next {
                Some(g) if self.faces[g].is_ghost() => return Location::Face(g),
                Some(g) => f = g,
                None => {
                    return match face.v.iter().find(|&&v| self.points[v] == *p) {
                        Some(&v) => Location::Vertex(v),
                        None => Location::Face(f),
                    };
                }
            }
        }
    }

    fn start_face(&self) -> usize {
        if self.hint != NO_FACE && self.alive[self.hint] && !self.faces[self.hint].is_ghost() {
            return self.hint;
        }
        self.finite_faces().next().unwrap_or(0)
    }

    fn link_vertex(&mut self, v: usize, loc: Location) {
        match loc {
            Location::Vertex(_) => {}
            Location::Chain(pos) => {
                if self.chain.len() >= 2 {
                    let a = &self.points[self.chain[0]];
                    let b = &self.points[self.chain[self.chain.len() - 1]];
                    if !K::orient2d(a, b, &self.points[v]).is_zero() {
                        self.lift_to_plane(v);
                        return;
                    }
                }
                self.chain.insert(pos, v);
                self.dimension = if self.chain.len() == 1 {
                    Dimension::Point
                } else {
                    Dimension::Line
                };
            }
            Location::Face(f) => self.insert_in_cavity(v, f),
        }
    }

    /// First vertex off the line: fan the chain to `apex`, then close the hull
    /// with ghost faces.
    fn lift_to_plane(&mut self, apex: usize) {
        let chain = std::mem::take(&mut self.chain);
        let ccw = K::orient2d(&self.points[chain[0]], &self.points[chain[1]], &self.points[apex])
            .is_positive();

        let mut created = Vec::with_capacity(2 * chain.len() + 2);
        for w in chain.windows(2) {
            let (a, b) = if ccw { (w[0], w[1]) } else { (w[1], w[0]) };
            created.push(self.alloc_face([a, b, apex]));
        }

        let mut directed: AHashSet<(usize, usize)> = AHashSet::with_capacity(created.len() * 3);
        for &f in &created {
            for i in 0..3 {
                directed.insert(self.faces[f].edge(i));
            }
        }
        let finite = created.clone();
        for f in finite {
            for i in 0..3 {
                let (u, w) = self.faces[f].edge(i);
                if !directed.contains(&(w, u)) {
                    created.push(self.alloc_face([w, u, INFINITE]));
                }
            }
        }

        self.link_faces(&created);
        self.hint = created[0];
        self.dimension = Dimension::Plane;
    }

    fn in_conflict(&self, f: usize, p: &Point2) -> bool {
        let face = &self.faces[f];
        match face.index_of(INFINITE) {
            Some(i) => {
                let (u, w) = face.edge(i);
                let (a, b) = (&self.points[u], &self.points[w]);
                match K::orient2d(a, b, p) {
                    Sign::Positive => true,
                    Sign::Negative => false,
                    Sign::Zero => collinear_between(a, p, b),
                }
            }
            None => {
                let [a, b, c] = face.v.map(|v| &self.points[v]);
                side_of_oriented_circle::<K>(a, b, c, p).is_positive()
            }
        }
    }

    /// Bowyer-Watson step: remove every face in conflict with vertex `v`
    /// (a connected region containing `start`) and star the hole from `v`.
    fn insert_in_cavity(&mut self, v: usize, start: usize) {
        let p = self.points[v];

        // 1) Grow the conflict region by depth-first search
        let mut cavity = vec![start];
        let mut in_cavity: AHashSet<usize> = AHashSet::default();
        in_cavity.insert(start);
        let mut stack = vec![start];
        // (u, w, outside face) with (u, w) directed as in the cavity face
        let mut boundary: SmallVec<[(usize, usize, usize); 16]> = SmallVec::new();
        while let Some(f) = stack.pop() {
            for i in 0..3 {
                let g = self.faces[f].n[i];
                if in_cavity.contains(&g) {
                    continue;
                }
                if self.in_conflict(g, &p) {
                    in_cavity.insert(g);
                    cavity.push(g);
                    stack.push(g);
                } else {
                    let (u, w) = self.faces[f].edge(i);
                    boundary.push((u, w, g));
                }
            }
        }

        // 2) Drop the cavity
        for &f in &cavity {
            self.alive[f] = false;
            self.free.push(f);
        }

        // 3) Star the hole from v
        let mut created: SmallVec<[usize; 16]> = SmallVec::with_capacity(boundary.len());
        let mut by_first: AHashMap<usize, usize> = AHashMap::with_capacity(boundary.len());
        for &(u, w, g) in &boundary {
            let nf = self.alloc_face([u, w, v]);
            self.faces[nf].n[2] = g;
            if let Some(j) = self.faces[g].v.iter().position(|&x| x != u && x != w) {
                self.faces[g].n[j] = nf;
            }
            by_first.insert(u, nf);
            created.push(nf);
        }
        for &nf in &created {
            let w = self.faces[nf].v[1];
            let next = by_first.get(&w).copied();
            debug_assert!(next.is_some(), "cavity boundary is not a closed cycle");
            if let Some(g) = next {
                self.faces[nf].n[0] = g;
                self.faces[g].n[1] = nf;
            }
        }

        if let Some(&f) = created.iter().find(|&&f| !self.faces[f].is_ghost()) {
            self.hint = f;
        }
    }

    fn alloc_face(&mut self, v: [usize; 3]) -> usize {
        let face = Face { v, n: [NO_FACE; 3] };
        match self.free.pop() {
            Some(f) => {
                self.faces[f] = face;
                self.alive[f] = true;
                f
            }
            None => {
                self.faces.push(face);
                self.alive.push(true);
                self.faces.len() - 1
            }
        }
    }

    /// Wire neighbour links among `ids` by matching opposite directed edges.
    fn link_faces(&mut self, ids: &[usize]) {
        let mut by_edge: AHashMap<(usize, usize), usize> = AHashMap::with_capacity(ids.len() * 3);
        for &f in ids {
            for i in 0..3 {
                by_edge.insert(self.faces[f].edge(i), f);
            }
        }
        for &f in ids {
            for i in 0..3 {
                let (u, w) = self.faces[f].edge(i);
                if let Some(&g) = by_edge.get(&(w, u)) {
                    self.faces[f].n[i] = g;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&c| Point2::from(c)).collect()
    }

    #[test]
    fn ghost_faces_close_the_hull() {
        let dt = Delaunay::<FilteredKernel>::build(&pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]))
            .unwrap();
        let ghosts = (0..dt.faces.len())
            .filter(|&f| dt.alive[f] && dt.faces[f].is_ghost())
            .count();
        assert_eq!(ghosts, 3);
        assert_eq!(dt.number_of_triangles(), 1);
        assert!(dt.is_delaunay());
    }

    #[test]
    fn faces_are_recycled() {
        let mut dt = Delaunay::<FilteredKernel>::new();
        for (x, y) in [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (3.0, 3.0), (2.0, 1.0)] {
            dt.insert(Point2::new(x, y)).unwrap();
        }
        let live = dt.alive.iter().filter(|&&a| a).count();
        assert_eq!(live + dt.free.len(), dt.faces.len());
        // Euler: 2n - 2 faces (finite + ghost) on the sphere
        assert_eq!(live, 2 * dt.number_of_vertices() - 2);
    }
}
