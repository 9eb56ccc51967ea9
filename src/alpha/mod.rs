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

//! Alpha shapes over a Delaunay triangulation.
//!
//! Alpha is a squared radius throughout: a triangle belongs to the shape
//! when its squared circumradius is `<= alpha`, and an edge is small enough
//! to stand on its own when `(|ab| / 2)^2 <= alpha`.

pub mod classification;
pub mod config;
pub mod shape;
pub mod spectrum;

pub use classification::Classification;
pub use config::{AlphaShapeConfig, BoundaryMode, ClassifierConfig, validate_alpha};
pub use shape::{AlphaClassification, AlphaShape, AlphaShapeResult, BoundaryEdge};

use crate::error::Result;
use crate::geometry::Point2;
use crate::kernel::{FilteredKernel, Kernel2};

/// Triangulate `points`, classify for `config.alpha` and extract the
/// boundary edges selected by `config.mode`.
pub fn alpha_shape(points: &[Point2], config: &AlphaShapeConfig) -> Result<AlphaShapeResult> {
    alpha_shape_with::<FilteredKernel>(points, config)
}

pub fn alpha_shape_with<K: Kernel2>(
    points: &[Point2],
    config: &AlphaShapeConfig,
) -> Result<AlphaShapeResult> {
    // fail on a bad alpha before any geometry work
    let alpha = validate_alpha(config.alpha)?;
    AlphaShape::with_kernel::<K>(points)?
        .with_classifier(config.classifier)
        .boundary(alpha, config.mode)
}
