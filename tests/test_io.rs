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

use std::fs;

use alpha_shape::io::{format_segments, read_points, read_points_strict, write_segments};
use alpha_shape::{AlphaError, AlphaShapeConfig, Point2, Segment2, alpha_shape};
use tempfile::tempdir;

#[test]
fn test_read_points() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("points.txt");
    fs::write(&path, "0 0\n1.5 -2\n  3e2\t4  \n").unwrap();

    let parsed = read_points(&path).unwrap();
    assert!(!parsed.is_truncated());
    assert_eq!(
        parsed.points,
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.5, -2.0),
            Point2::new(300.0, 4.0)
        ]
    );
}

#[test]
fn test_read_stops_at_malformed_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("points.txt");
    fs::write(&path, "0 0\n1 0\n1 x\n0 1\n").unwrap();

    let parsed = read_points(&path).unwrap();
    assert_eq!(parsed.points.len(), 2);
    assert_eq!(parsed.truncated_at, Some(3));

    let err = read_points_strict(&path).unwrap_err();
    assert!(matches!(err, AlphaError::Parse { line: 3 }));
}

#[test]
fn test_blank_line_truncates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("points.txt");
    fs::write(&path, "0 0\n\n1 1\n").unwrap();
    let parsed = read_points(&path).unwrap();
    assert_eq!(parsed.points, vec![Point2::new(0.0, 0.0)]);
    assert_eq!(parsed.truncated_at, Some(2));
}

#[test]
fn test_non_utf8_line_truncates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("points.txt");
    fs::write(&path, b"0 0\n1 0\n\xff\xfe garbage\n0 1\n").unwrap();

    let parsed = read_points(&path).unwrap();
    assert_eq!(parsed.points.len(), 2);
    assert_eq!(parsed.truncated_at, Some(3));
    assert!(matches!(
        read_points_strict(&path),
        Err(AlphaError::Parse { line: 3 })
    ));
}

#[test]
fn test_trailing_garbage_after_second_number() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("points.txt");
    fs::write(&path, "0 0\n1 2abc\n3 4\n").unwrap();
    let parsed = read_points(&path).unwrap();
    assert!(!parsed.is_truncated());
    assert_eq!(parsed.points[1], Point2::new(1.0, 2.0));
    assert_eq!(parsed.points.len(), 3);
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = read_points(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, AlphaError::Io(_)));
}

#[test]
fn test_write_segments() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edges.txt");
    let segments = vec![
        Segment2::new(&Point2::new(0.0, 0.0), &Point2::new(1.0, 0.5)),
        Segment2::new(&Point2::new(-2.25, 3.0), &Point2::new(0.1, 1e-7)),
    ];
    write_segments(&path, &segments).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "0 0 1 0.5\n-2.25 3 0.1 0.0000001\n");
    assert_eq!(text, format_segments(&segments));
}

#[test]
fn test_file_to_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("square.txt");
    let output = dir.path().join("square_edges.txt");
    fs::write(&input, "0 0\n1 0\n1 1\n0 1\n").unwrap();

    let points = read_points(&input).unwrap().points;
    let result = alpha_shape(&points, &AlphaShapeConfig::new(2.0).unwrap()).unwrap();
    write_segments(&output, &result.segments()).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 4);
    for line in text.lines() {
        let coords: Vec<f64> = line
            .split_whitespace()
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(coords.len(), 4);
        assert!(coords.iter().all(|&c| c == 0.0 || c == 1.0));
    }
}
