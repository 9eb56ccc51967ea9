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
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::{AlphaError, Result};
use crate::geometry::Point2;

/// Points read from a text file, one `x y` pair per line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointFile {
    pub points: Vec<Point2>,
    /// 1-based number of the first line that was not a pair of finite
    /// numbers. Reading stops there; `None` when the whole file was read.
    pub truncated_at: Option<usize>,
}

impl PointFile {
    pub fn is_truncated(&self) -> bool {
        self.truncated_at.is_some()
    }
}

/// Read points until the first malformed line. Tokens after the second on a
/// line are ignored. A truncated read is not an error; it is logged and
/// reported in `truncated_at`.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<PointFile> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let parsed = parse_points(BufReader::new(file))?;
    if let Some(line) = parsed.truncated_at {
        tracing::warn!(
            path = %path.display(),
            line,
            kept = parsed.points.len(),
            "stopped reading points at malformed line"
        );
    }
    Ok(parsed)
}

/// Like `read_points`, but a malformed line is an `AlphaError::Parse`.
pub fn read_points_strict<P: AsRef<Path>>(path: P) -> Result<Vec<Point2>> {
    let file = File::open(path)?;
    let parsed = parse_points(BufReader::new(file))?;
    match parsed.truncated_at {
        Some(line) => Err(AlphaError::Parse { line }),
        None => Ok(parsed.points),
    }
}

/// Lines are split on `\n` as raw bytes; a line that is not UTF-8 counts as
/// malformed rather than as an I/O failure.
pub fn parse_points<R: BufRead>(reader: R) -> Result<PointFile> {
    let mut points = Vec::new();
    for (i, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        match std::str::from_utf8(&line).ok().and_then(parse_pair) {
            Some(p) => points.push(p),
            None => {
                return Ok(PointFile {
                    points,
                    truncated_at: Some(i + 1),
                });
            }
        }
    }
    Ok(PointFile {
        points,
        truncated_at: None,
    })
}

/// Two numbers read like a formatted stream: each is the longest numeric
/// prefix after leading whitespace. `1 2abc` gives `(1, 2)`, `1-2` gives
/// `(1, -2)`, and `1 abc` fails.
fn parse_pair(line: &str) -> Option<Point2> {
    let (x, rest) = take_number(line)?;
    let (y, _) = take_number(rest)?;
    let p = Point2::new(x, y);
    p.is_finite().then_some(p)
}

fn take_number(s: &str) -> Option<(f64, &str)> {
    let s = s.trim_start();
    let span = s
        .bytes()
        .take_while(|&b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        .count();
    (1..=span)
        .rev()
        .find_map(|end| s[..end].parse::<f64>().ok().map(|v| (v, &s[end..])))
}
