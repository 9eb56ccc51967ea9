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

use crate::alpha::Classification;
use crate::error::{AlphaError, Result};

/// Which edge classes make up the extracted boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryMode {
    /// REGULAR edges only.
    #[default]
    Regular,
    /// REGULAR and SINGULAR edges.
    RegularAndSingular,
}

impl BoundaryMode {
    #[inline]
    pub fn accepts(self, class: Classification) -> bool {
        match self {
            BoundaryMode::Regular => class == Classification::Regular,
            BoundaryMode::RegularAndSingular => class.is_boundary(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Never report an edge as SINGULAR when its diametral circle strictly
    /// contains the apex of an incident triangle.
    pub gabriel_singular: bool,
}

/// Everything one pipeline run needs besides the points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlphaShapeConfig {
    /// Squared radius.
    pub alpha: f64,
    pub mode: BoundaryMode,
    pub classifier: ClassifierConfig,
}

impl AlphaShapeConfig {
    pub fn new(alpha: f64) -> Result<Self> {
        Ok(Self {
            alpha: validate_alpha(alpha)?,
            mode: BoundaryMode::default(),
            classifier: ClassifierConfig::default(),
        })
    }

    pub fn with_mode(mut self, mode: BoundaryMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_gabriel_singular(mut self, enabled: bool) -> Self {
        self.classifier.gabriel_singular = enabled;
        self
    }
}

/// Rejects NaN and negative alpha. `+inf` is accepted and puts every
/// triangle in the shape.
pub fn validate_alpha(alpha: f64) -> Result<f64> {
    if alpha.is_nan() {
        Err(AlphaError::InvalidAlpha(alpha))
    } else if alpha < 0.0 {
        Err(AlphaError::NegativeAlpha(alpha))
    } else {
        Ok(alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_validation() {
        assert!(validate_alpha(0.0).is_ok());
        assert!(validate_alpha(-0.0).is_ok());
        assert!(validate_alpha(f64::INFINITY).is_ok());
        assert!(matches!(validate_alpha(-1e-300), Err(AlphaError::NegativeAlpha(_))));
        assert!(matches!(validate_alpha(f64::NAN), Err(AlphaError::InvalidAlpha(_))));
        assert!(AlphaShapeConfig::new(-2.0).is_err());
    }

    #[test]
    fn modes_filter_classes() {
        use Classification::*;
        assert!(BoundaryMode::Regular.accepts(Regular));
        assert!(!BoundaryMode::Regular.accepts(Singular));
        assert!(BoundaryMode::RegularAndSingular.accepts(Singular));
        assert!(!BoundaryMode::RegularAndSingular.accepts(Interior));
        assert!(!BoundaryMode::RegularAndSingular.accepts(Exterior));
    }
}
