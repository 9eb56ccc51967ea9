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

//! Alpha shapes of planar point sets.
//!
//! Points are triangulated with an incremental Delaunay triangulator built on
//! exact predicates, every simplex is annotated with the squared radius at
//! which it enters the shape, and the boundary for a given alpha is read off
//! as an unordered set of segments.

pub mod alpha;
pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod numeric;
pub mod operations;

pub use alpha::{
    AlphaClassification, AlphaShape, AlphaShapeConfig, AlphaShapeResult, BoundaryEdge,
    BoundaryMode, Classification, ClassifierConfig, alpha_shape, alpha_shape_with,
};
pub use error::{AlphaError, Result};
pub use geometry::{Edge, Point2, Segment2, Triangle};
pub use kernel::{BigRationalKernel, FilteredKernel, Kernel2};
pub use operations::triangulation::{Delaunay, Dimension, Triangulate2D, Triangulation};
