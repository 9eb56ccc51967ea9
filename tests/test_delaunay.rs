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

use alpha_shape::operations::triangulation::Triangulate2D;
use alpha_shape::{
    AlphaError, BigRationalKernel, Delaunay, Dimension, Edge, FilteredKernel, Point2, Segment2,
};
use proptest::prelude::*;

fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
    coords.iter().map(|&c| Point2::from(c)).collect()
}

fn grid(n: usize) -> Vec<Point2> {
    let mut out = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            out.push(Point2::new(i as f64, j as f64));
        }
    }
    out
}

fn seg(a: (f64, f64), b: (f64, f64)) -> Segment2 {
    Segment2::new(&Point2::from(a), &Point2::from(b)).canonical()
}

#[test]
fn test_empty_and_single_point() {
    let dt = Delaunay::<FilteredKernel>::build(&[]).unwrap();
    assert_eq!(dt.dimension(), Dimension::Empty);
    assert!(dt.edges().is_empty());
    assert!(dt.triangles().is_empty());

    let dt = Delaunay::<FilteredKernel>::build(&pts(&[(3.0, 4.0)])).unwrap();
    assert_eq!(dt.dimension(), Dimension::Point);
    assert_eq!(dt.number_of_vertices(), 1);
    assert!(dt.edges().is_empty());
}

#[test]
fn test_two_points_make_one_edge() {
    let dt = Delaunay::<FilteredKernel>::build(&pts(&[(0.0, 0.0), (1.0, 2.0)])).unwrap();
    assert_eq!(dt.dimension(), Dimension::Line);
    assert_eq!(dt.edges(), vec![Edge(0, 1)]);
    assert!(dt.triangles().is_empty());
}

#[test]
fn test_duplicates_are_merged() {
    let input = pts(&[(1.0, 1.0), (2.0, 0.0), (1.0, 1.0), (0.0, 0.0), (-0.0, 0.0)]);
    let tri = Delaunay::<FilteredKernel>::triangulate(&input).unwrap();
    assert_eq!(tri.points.len(), 3);
    assert_eq!(tri.triangles.len(), 1);
    assert_eq!(tri.vertex_of_input(2), Some(0));
    assert_eq!(tri.vertex_of_input(4), Some(2));
    assert_eq!(tri.source_of(2), Some(3));
    assert_eq!(tri.source_of(3), None);
}

#[test]
fn test_all_points_coincide() {
    let input = pts(&[(5.0, 5.0); 10]);
    let tri = Delaunay::<FilteredKernel>::triangulate(&input).unwrap();
    assert_eq!(tri.dimension, Dimension::Point);
    assert_eq!(tri.points.len(), 1);
    assert!(tri.is_empty());
}

#[test]
fn test_collinear_points_form_a_chain() {
    let input = pts(&[(2.0, 0.0), (0.0, 0.0), (1.0, 0.0)]);
    let tri = Delaunay::<FilteredKernel>::triangulate(&input).unwrap();
    assert_eq!(tri.dimension, Dimension::Line);
    assert!(tri.triangles.is_empty());
    assert_eq!(
        tri.geometric_edges(),
        vec![seg((0.0, 0.0), (1.0, 0.0)), seg((1.0, 0.0), (2.0, 0.0))]
    );
    assert_eq!(tri.hull, tri.edges);
}

#[test]
fn test_chain_lifts_to_fan() {
    let input = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (1.0, 1.0)]);
    let dt = Delaunay::<FilteredKernel>::build(&input).unwrap();
    assert_eq!(dt.dimension(), Dimension::Plane);
    assert_eq!(dt.number_of_triangles(), 3);
    assert_eq!(dt.edges().len(), 7);
    assert_eq!(dt.convex_hull_edges().len(), 5);
    assert!(dt.is_delaunay());
}

#[test]
fn test_unit_square_diagonal() {
    let input = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let tri = Delaunay::<FilteredKernel>::triangulate(&input).unwrap();
    assert_eq!(tri.triangles.len(), 2);
    assert_eq!(tri.edges.len(), 5);
    assert_eq!(tri.hull.len(), 4);
    assert!(tri.geometric_edges().contains(&seg((1.0, 0.0), (0.0, 1.0))));
    assert!(!tri.geometric_edges().contains(&seg((0.0, 0.0), (1.0, 1.0))));
}

#[test]
fn test_point_on_hull_edge() {
    let input = pts(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0), (1.0, 0.0)]);
    let dt = Delaunay::<FilteredKernel>::build(&input).unwrap();
    assert_eq!(dt.number_of_triangles(), 2);
    assert_eq!(dt.edges().len(), 5);
    assert_eq!(dt.convex_hull_edges().len(), 4);
    assert!(dt.is_delaunay());
}

#[test]
fn test_point_on_interior_edge() {
    let input = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)]);
    let dt = Delaunay::<FilteredKernel>::build(&input).unwrap();
    assert_eq!(dt.number_of_triangles(), 4);
    assert_eq!(dt.edges().len(), 8);
    assert!(dt.is_delaunay());
}

#[test]
fn test_cocircular_grid() {
    let input = grid(5);
    let dt = Delaunay::<FilteredKernel>::build(&input).unwrap();
    // 16 vertices on the boundary of the grid
    assert_eq!(dt.number_of_triangles(), 2 * 25 - 2 - 16);
    assert_eq!(dt.edges().len(), 3 * 25 - 3 - 16);
    assert_eq!(dt.convex_hull_edges().len(), 16);
    assert!(dt.is_delaunay());

    let mut reversed = input.clone();
    reversed.reverse();
    let a = Delaunay::<FilteredKernel>::triangulate(&input).unwrap();
    let b = Delaunay::<FilteredKernel>::triangulate(&reversed).unwrap();
    assert_eq!(a.geometric_edges(), b.geometric_edges());
    assert_eq!(a.geometric_triangles(), b.geometric_triangles());
}

#[test]
fn test_incremental_matches_batch() {
    let input = pts(&[
        (0.0, 0.0),
        (4.0, 0.5),
        (1.0, 3.0),
        (2.0, 1.0),
        (5.0, 5.0),
        (-1.0, 2.0),
        (3.0, -2.0),
        (2.0, 1.0),
        (0.5, 0.25),
    ]);
    let mut dt = Delaunay::<FilteredKernel>::new();
    let ids: Vec<usize> = input.iter().map(|&p| dt.insert(p).unwrap()).collect();
    assert_eq!(ids[7], ids[3]);
    assert!(dt.is_delaunay());

    let batch = Delaunay::<FilteredKernel>::triangulate(&input).unwrap();
    assert_eq!(dt.to_triangulation().geometric_edges(), batch.geometric_edges());
}

#[test]
fn test_non_finite_point_is_rejected() {
    let input = pts(&[(0.0, 0.0), (f64::NAN, 1.0), (1.0, 1.0)]);
    let err = Delaunay::<FilteredKernel>::build(&input).unwrap_err();
    assert!(matches!(err, AlphaError::NonFinitePoint { index: 1 }));

    let mut dt = Delaunay::<FilteredKernel>::new();
    dt.insert(Point2::new(0.0, 0.0)).unwrap();
    assert!(dt.insert(Point2::new(f64::INFINITY, 0.0)).is_err());
    assert_eq!(dt.number_of_vertices(), 1);
}

#[test]
fn test_exact_kernel_agrees() {
    let mut input = grid(4);
    input.push(Point2::new(1.5, 1.5));
    input.push(Point2::new(0.1 + 0.2, 0.3));
    let a = Delaunay::<FilteredKernel>::triangulate(&input).unwrap();
    let b = Delaunay::<BigRationalKernel>::triangulate(&input).unwrap();
    assert_eq!(a, b);
}

fn point_sets() -> impl Strategy<Value = (Vec<Point2>, Vec<Point2>)> {
    // small integer lattice: plenty of duplicates, collinear and cocircular sets
    prop::collection::vec((-6i32..6, -6i32..6), 0..40).prop_flat_map(|v| {
        let points: Vec<Point2> = v
            .into_iter()
            .map(|(x, y)| Point2::new(x as f64 * 0.5, y as f64 * 0.5))
            .collect();
        (Just(points.clone()), Just(points).prop_shuffle())
    })
}

proptest! {
    #[test]
    fn prop_order_invariant((points, shuffled) in point_sets()) {
        let a = Delaunay::<FilteredKernel>::triangulate(&points).unwrap();
        let b = Delaunay::<FilteredKernel>::triangulate(&shuffled).unwrap();
        prop_assert_eq!(a.geometric_edges(), b.geometric_edges());
        prop_assert_eq!(a.geometric_triangles(), b.geometric_triangles());
    }

    #[test]
    fn prop_delaunay_and_euler((points, _) in point_sets()) {
        let dt = Delaunay::<FilteredKernel>::build(&points).unwrap();
        prop_assert!(dt.is_delaunay());
        let n = dt.number_of_vertices();
        let h = dt.convex_hull_edges().len();
        match dt.dimension() {
            Dimension::Plane => {
                prop_assert_eq!(dt.number_of_triangles(), 2 * n - 2 - h);
                prop_assert_eq!(dt.edges().len(), 3 * n - 3 - h);
            }
            Dimension::Line => prop_assert_eq!(dt.edges().len(), n - 1),
            _ => prop_assert!(dt.edges().is_empty()),
        }
    }
}
