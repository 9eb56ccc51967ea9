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

use smallvec::SmallVec;

use crate::alpha::{BoundaryMode, Classification, ClassifierConfig, validate_alpha};
use crate::error::Result;
use crate::geometry::{Edge, Point2, Segment2, circumradius_squared, edge_radius_squared};
use crate::kernel::{FilteredKernel, Kernel2};
use crate::operations::triangulation::{Delaunay, Triangulation};

/// A Delaunay triangulation annotated with the alpha value at which each
/// simplex enters the shape. Classifying for a given alpha only compares
/// against the stored values, so one `AlphaShape` serves any number of
/// queries.
#[derive(Clone, Debug)]
pub struct AlphaShape {
    pub(super) triangulation: Triangulation,
    /// Squared circumradius, parallel to `triangulation.triangles`.
    pub(super) triangle_alpha: Vec<f64>,
    /// Squared half length, parallel to `triangulation.edges`.
    pub(super) edge_alpha: Vec<f64>,
    pub(super) edge_triangles: Vec<SmallVec<[usize; 2]>>,
    /// Diametral circle strictly contains the apex of an incident triangle.
    pub(super) attached: Vec<bool>,
    pub(super) config: ClassifierConfig,
}

/// Per-simplex classes for one alpha, parallel to the triangulation's
/// `edges`, `triangles` and `points`.
#[derive(Clone, Debug, PartialEq)]
pub struct AlphaClassification {
    pub alpha: f64,
    pub edges: Vec<Classification>,
    pub triangles: Vec<Classification>,
    pub vertices: Vec<Classification>,
}

impl AlphaClassification {
    pub fn count_edges(&self, class: Classification) -> usize {
        self.edges.iter().filter(|&&c| c == class).count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryEdge {
    pub edge: Edge,
    pub segment: Segment2,
    pub class: Classification,
}

/// Boundary edges kept by a `BoundaryMode`, in no particular geometric order.
#[derive(Clone, Debug, PartialEq)]
pub struct AlphaShapeResult {
    pub alpha: f64,
    pub mode: BoundaryMode,
    pub edges: Vec<BoundaryEdge>,
}

impl AlphaShapeResult {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoundaryEdge> {
        self.edges.iter()
    }

    pub fn segments(&self) -> Vec<Segment2> {
        self.edges.iter().map(|b| b.segment).collect()
    }
}

impl AlphaShape {
    pub fn new(points: &[Point2]) -> Result<Self> {
        Self::with_kernel::<FilteredKernel>(points)
    }

    pub fn with_kernel<K: Kernel2>(points: &[Point2]) -> Result<Self> {
        let dt = Delaunay::<K>::build(points)?;
        Ok(Self::from_triangulation::<K>(dt.to_triangulation()))
    }

    /// `K` only decides the attachment test; the triangulation is taken as is.
    pub fn from_triangulation<K: Kernel2>(triangulation: Triangulation) -> Self {
        let pts = &triangulation.points;
        let n_edges = triangulation.edges.len();

        let edge_alpha: Vec<f64> = triangulation
            .edges
            .iter()
            .map(|e| edge_radius_squared(&pts[e.0], &pts[e.1]))
            .collect();

        let mut triangle_alpha = Vec::with_capacity(triangulation.triangles.len());
        let mut edge_triangles = vec![SmallVec::<[usize; 2]>::new(); n_edges];
        let mut attached = vec![false; n_edges];

        for (t, tri) in triangulation.triangles.iter().enumerate() {
            let (a, b, c) = (tri.0, tri.1, tri.2);
            triangle_alpha.push(circumradius_squared(&pts[a], &pts[b], &pts[c]));

            for (u, w, apex) in [(a, b, c), (b, c, a), (c, a, b)] {
                let Some(e) = triangulation.edge_index(Edge::new(u, w)) else {
                    continue;
                };
                edge_triangles[e].push(t);
                if K::diametral(&pts[u], &pts[w], &pts[apex]).is_negative() {
                    attached[e] = true;
                }
            }
        }

        tracing::debug!(
            triangles = triangle_alpha.len(),
            edges = n_edges,
            attached = attached.iter().filter(|&&a| a).count(),
            "computed simplex alphas"
        );

        Self {
            triangulation,
            triangle_alpha,
            edge_alpha,
            edge_triangles,
            attached,
            config: ClassifierConfig::default(),
        }
    }

    pub fn with_classifier(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_gabriel_singular(mut self, enabled: bool) -> Self {
        self.config.gabriel_singular = enabled;
        self
    }

    pub fn classifier(&self) -> ClassifierConfig {
        self.config
    }

    pub fn triangulation(&self) -> &Triangulation {
        &self.triangulation
    }

    pub fn triangle_alphas(&self) -> &[f64] {
        &self.triangle_alpha
    }

    pub fn edge_alphas(&self) -> &[f64] {
        &self.edge_alpha
    }

    /// Class of one edge of the triangulation; `None` if it is not an edge.
    pub fn classify_edge(&self, edge: Edge, alpha: f64) -> Result<Option<Classification>> {
        let alpha = validate_alpha(alpha)?;
        Ok(self
            .triangulation
            .edge_index(edge)
            .map(|e| self.edge_class(e, alpha)))
    }

    pub fn classify(&self, alpha: f64) -> Result<AlphaClassification> {
        let alpha = validate_alpha(alpha)?;

        let triangles: Vec<Classification> = (0..self.triangle_alpha.len())
            .map(|t| self.triangle_class(t, alpha))
            .collect();
        let edges: Vec<Classification> = (0..self.edge_alpha.len())
            .map(|e| self.edge_class(e, alpha))
            .collect();

        // A vertex on a boundary edge is REGULAR; otherwise it is INTERIOR
        // when covered by a shape triangle (then every incident edge is
        // INTERIOR and it is off the hull) and SINGULAR when it stands alone.
        let mut on_boundary = vec![false; self.triangulation.points.len()];
        let mut covered = vec![false; self.triangulation.points.len()];
        for (e, class) in edges.iter().enumerate() {
            if class.is_boundary() {
                let Edge(u, w) = self.triangulation.edges[e];
                on_boundary[u] = true;
                on_boundary[w] = true;
            }
        }
        for (t, class) in triangles.iter().enumerate() {
            if *class == Classification::Interior {
                for v in self.triangulation.triangles[t].vertices() {
                    covered[v] = true;
                }
            }
        }
        let vertices = on_boundary
            .iter()
            .zip(&covered)
            .map(|(&b, &c)| match (b, c) {
                (true, _) => Classification::Regular,
                (false, true) => Classification::Interior,
                (false, false) => Classification::Singular,
            })
            .collect();

        let out = AlphaClassification {
            alpha,
            edges,
            triangles,
            vertices,
        };
        tracing::debug!(
            alpha,
            regular = out.count_edges(Classification::Regular),
            singular = out.count_edges(Classification::Singular),
            interior = out.count_edges(Classification::Interior),
            "classified edges"
        );
        Ok(out)
    }

    pub fn boundary(&self, alpha: f64, mode: BoundaryMode) -> Result<AlphaShapeResult> {
        let alpha = validate_alpha(alpha)?;
        let edges = (0..self.edge_alpha.len())
            .filter_map(|e| {
                let class = self.edge_class(e, alpha);
                mode.accepts(class).then(|| {
                    let edge = self.triangulation.edges[e];
                    BoundaryEdge {
                        edge,
                        segment: self.triangulation.segment(edge),
                        class,
                    }
                })
            })
            .collect();
        Ok(AlphaShapeResult { alpha, mode, edges })
    }

    pub fn boundary_edges(&self, alpha: f64, mode: BoundaryMode) -> Result<Vec<Edge>> {
        Ok(self.boundary(alpha, mode)?.iter().map(|b| b.edge).collect())
    }

    pub fn boundary_segments(&self, alpha: f64, mode: BoundaryMode) -> Result<Vec<Segment2>> {
        Ok(self.boundary(alpha, mode)?.segments())
    }

    #[inline]
    pub(super) fn triangle_class(&self, t: usize, alpha: f64) -> Classification {
        if self.triangle_alpha[t] <= alpha {
            Classification::Interior
        } else {
            Classification::Exterior
        }
    }

    pub(super) fn edge_class(&self, e: usize, alpha: f64) -> Classification {
        let in_shape = self.edge_triangles[e]
            .iter()
            .filter(|&&t| self.triangle_alpha[t] <= alpha)
            .count();
        match in_shape {
            2 => Classification::Interior,
            1 => Classification::Regular,
            _ => {
                let blocked = self.config.gabriel_singular && self.attached[e];
                if self.edge_alpha[e] <= alpha && !blocked {
                    Classification::Singular
                } else {
                    Classification::Exterior
                }
            }
        }
    }
}
