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

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::Result;
use crate::geometry::Segment2;

/// Write one segment per line as `x1 y1 x2 y2`, in shortest round-trip
/// `f64` notation.
pub fn write_segments<P: AsRef<Path>>(path: P, segments: &[Segment2]) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    for s in segments {
        writeln!(out, "{s}")?;
    }
    out.flush()?;
    Ok(())
}

pub fn format_segments(segments: &[Segment2]) -> String {
    let mut out = String::with_capacity(segments.len() * 32);
    for s in segments {
        out.push_str(&s.to_string());
        out.push('\n');
    }
    out
}
