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

use thiserror::Error;

/// Errors surfaced by the alpha-shape pipeline and its file adapters.
///
/// Geometric degeneracy (coincident points, collinear input, fewer than three
/// points) is never an error: it yields a smaller triangulation instead.
#[derive(Debug, Error)]
pub enum AlphaError {
    /// Alpha is a squared radius and cannot be negative.
    #[error("alpha must be non-negative, got {0}")]
    NegativeAlpha(f64),

    #[error("alpha must be a number, got {0}")]
    InvalidAlpha(f64),

    /// Input point `index` (0-based, in insertion order) is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    /// Strict reading hit a line that is not two finite numbers (1-based).
    #[error("line {line} is not a pair of finite numbers")]
    Parse { line: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AlphaError>;
