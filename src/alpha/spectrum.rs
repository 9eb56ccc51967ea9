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

use crate::alpha::{AlphaShape, validate_alpha};
use crate::error::Result;

/// Union-find with path halving and union by rank.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, x: usize, y: usize) -> bool {
        let px = self.find(x);
        let py = self.find(y);
        if px == py {
            return false;
        }
        match self.rank[px].cmp(&self.rank[py]) {
            std::cmp::Ordering::Less => self.parent[px] = py,
            std::cmp::Ordering::Greater => self.parent[py] = px,
            std::cmp::Ordering::Equal => {
                self.parent[py] = px;
                self.rank[px] += 1;
            }
        }
        true
    }
}

impl AlphaShape {
    /// Distinct triangle alphas in increasing order: the values at which the
    /// set of shape triangles changes.
    pub fn alpha_spectrum(&self) -> Vec<f64> {
        let mut out = self.triangle_alpha.clone();
        out.sort_by(f64::total_cmp);
        out.dedup();
        out
    }

    /// Number of connected groups of shape triangles, two triangles being
    /// connected when they share an edge.
    pub fn solid_components(&self, alpha: f64) -> Result<usize> {
        let alpha = validate_alpha(alpha)?;
        Ok(self.components_at(alpha))
    }

    /// Smallest alpha at which every vertex lies on a shape triangle, or
    /// `None` when some vertex has no incident triangle at all.
    pub fn alpha_solid(&self) -> Option<f64> {
        let mut lowest = vec![f64::INFINITY; self.triangulation.points.len()];
        for (t, tri) in self.triangulation.triangles.iter().enumerate() {
            for v in tri.vertices() {
                lowest[v] = lowest[v].min(self.triangle_alpha[t]);
            }
        }
        let mut solid = 0.0_f64;
        for a in lowest {
            if a == f64::INFINITY {
                return None;
            }
            solid = solid.max(a);
        }
        (!self.triangle_alpha.is_empty()).then_some(solid)
    }

    /// Smallest spectrum value, at or above `alpha_solid`, for which the shape
    /// has at most `max_components` solid components. The search is binary,
    /// so when the component count is not monotone in alpha the result is a
    /// satisfying value rather than the smallest.
    pub fn find_optimal_alpha(&self, max_components: usize) -> Option<f64> {
        if max_components == 0 {
            return None;
        }
        let solid = self.alpha_solid()?;
        let spectrum = self.alpha_spectrum();
        let start = spectrum.partition_point(|&a| a < solid);
        if start == spectrum.len() {
            return None;
        }
        if self.components_at(spectrum[start]) <= max_components {
            return Some(spectrum[start]);
        }

        // the full triangulation is one component
        let (mut lo, mut hi) = (start, spectrum.len() - 1);
        if self.components_at(spectrum[hi]) > max_components {
            return None;
        }
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if self.components_at(spectrum[mid]) <= max_components {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        tracing::debug!(alpha = spectrum[hi], max_components, "optimal alpha");
        Some(spectrum[hi])
    }

    fn components_at(&self, alpha: f64) -> usize {
        let n = self.triangle_alpha.len();
        let mut uf = UnionFind::new(n);
        let mut solids = (0..n).filter(|&t| self.triangle_alpha[t] <= alpha).count();
        for incident in &self.edge_triangles {
            if let [s, t] = incident.as_slice() {
                if self.triangle_alpha[*s] <= alpha
                    && self.triangle_alpha[*t] <= alpha
                    && uf.union(*s, *t)
                {
                    solids -= 1;
                }
            }
        }
        solids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_find_counts_merges() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1));
        assert!(uf.union(3, 4));
        assert!(uf.union(1, 4));
        assert!(!uf.union(0, 3));
        assert_eq!(uf.find(0), uf.find(4));
        assert_ne!(uf.find(2), uf.find(0));
    }
}
