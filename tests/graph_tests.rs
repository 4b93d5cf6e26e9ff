// Host-side tests for the neighbor graph builder.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use trigslink_globe::core::sphere::generate;
use trigslink_globe::core::NeighborGraph;

fn assert_graph_invariants(points: &[Vec3], graph: &NeighborGraph, max_distance: f32, k: usize) {
    assert_eq!(graph.len(), points.len());
    for i in 0..points.len() {
        let neighbors = graph.neighbors(i);
        assert!(neighbors.len() <= k, "point {i} has {} neighbors", neighbors.len());
        let mut prev: Option<(f32, usize)> = None;
        for &j in neighbors {
            assert_ne!(i, j, "point {i} references itself");
            let d = points[i].distance(points[j]);
            assert!(d < max_distance, "neighbor {j} of {i} at {d} >= {max_distance}");
            if let Some((pd, pj)) = prev {
                assert!(
                    pd < d || (pd == d && pj < j),
                    "neighbors of {i} out of order: ({pd}, {pj}) then ({d}, {j})"
                );
            }
            prev = Some((d, j));
        }
    }
}

#[test]
fn landing_page_scenario_respects_limits() {
    let points = generate(600, 380.0).unwrap();
    let graph = NeighborGraph::build(&points, 95.0, 5);
    let first = graph.neighbors(0);
    assert!(first.len() <= 5);
    for &j in first {
        assert!(points[0].distance(points[j]) < 95.0);
    }
    assert_graph_invariants(&points, &graph, 95.0, 5);
    assert!(graph.edge_count() > 0);
}

#[test]
fn build_is_deterministic() {
    let points = generate(600, 380.0).unwrap();
    let a = NeighborGraph::build(&points, 95.0, 5);
    let b = NeighborGraph::build(&points, 95.0, 5);
    assert_eq!(a, b);
}

#[test]
fn grid_build_matches_exhaustive_scan_on_spheres() {
    for &(n, r, d) in &[(600usize, 380.0f32, 95.0f32), (200, 320.0, 95.0), (200, 280.0, 400.0)] {
        let points = generate(n, r).unwrap();
        let grid = NeighborGraph::build(&points, d, 5);
        let exhaustive = NeighborGraph::build_exhaustive(&points, d, 5);
        assert_eq!(grid, exhaustive, "mismatch for n={n} r={r} d={d}");
    }
}

#[test]
fn grid_build_matches_exhaustive_scan_on_random_clouds() {
    let mut rng = StdRng::seed_from_u64(9);
    for round in 0..5 {
        let points: Vec<Vec3> = (0..300)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-200.0..200.0),
                    rng.gen_range(-200.0..200.0),
                    rng.gen_range(-200.0..200.0),
                )
            })
            .collect();
        let d = 20.0 + 15.0 * round as f32;
        let grid = NeighborGraph::build(&points, d, 4);
        let exhaustive = NeighborGraph::build_exhaustive(&points, d, 4);
        assert_eq!(grid, exhaustive, "round {round}");
        assert_graph_invariants(&points, &grid, d, 4);
    }
}

#[test]
fn ties_break_by_index() {
    let points = vec![
        Vec3::ZERO,
        Vec3::X,
        -Vec3::X,
        Vec3::Y,
        -Vec3::Y,
    ];
    let graph = NeighborGraph::build(&points, 1.5, 5);
    assert_eq!(graph.neighbors(0), &[1, 2, 3, 4]);
    let graph = NeighborGraph::build(&points, 1.5, 2);
    assert_eq!(graph.neighbors(0), &[1, 2]);
}

#[test]
fn collinear_chain_neighbors_and_edges() {
    let points = vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)];
    let graph = NeighborGraph::build(&points, 1.5, 5);
    assert_eq!(graph.neighbors(0), &[1]);
    assert_eq!(graph.neighbors(1), &[0, 2]);
    assert_eq!(graph.neighbors(2), &[1]);
    assert_eq!(graph.edges(), &[(0, 1), (1, 2)]);
}

#[test]
fn distance_threshold_is_exclusive() {
    let points = vec![Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)];
    let graph = NeighborGraph::build(&points, 2.0, 5);
    assert!(graph.neighbors(0).is_empty());
    assert!(graph.neighbors(1).is_empty());
}

#[test]
fn edges_cover_every_relation_exactly_once() {
    let points = generate(600, 380.0).unwrap();
    let graph = NeighborGraph::build(&points, 95.0, 5);
    let mut seen = HashSet::new();
    for &(a, b) in graph.edges() {
        assert!(a < b, "edge ({a}, {b}) not ordered");
        assert!(seen.insert((a, b)), "edge ({a}, {b}) drawn twice");
    }
    for i in 0..graph.len() {
        for &j in graph.neighbors(i) {
            assert!(seen.contains(&(i.min(j), i.max(j))), "relation {i}->{j} has no edge");
        }
    }
}

#[test]
fn degenerate_parameters_leave_points_unconnected() {
    let points = generate(50, 100.0).unwrap();
    for (d, k) in [(0.0f32, 5usize), (-1.0, 5), (f32::NAN, 5), (95.0, 0)] {
        let graph = NeighborGraph::build(&points, d, k);
        assert_eq!(graph.len(), 50);
        assert_eq!(graph.edge_count(), 0);
        assert!((0..50).all(|i| graph.neighbors(i).is_empty()));
    }
}

#[test]
fn out_of_range_lookup_is_empty() {
    let graph = NeighborGraph::build(&[], 95.0, 5);
    assert!(graph.is_empty());
    assert!(graph.neighbors(3).is_empty());
}

#[test]
fn tiny_connection_distance_matches_exhaustive_scan() {
    let points = [
        Vec3::new(380.0, 0.0, 0.0),
        Vec3::new(-380.0, 0.0, 0.0),
        Vec3::new(380.0, 0.0, 0.0),
        Vec3::new(0.0, -380.0, 380.0),
    ];
    for d in [1e-7f32, f32::MIN_POSITIVE] {
        let graph = NeighborGraph::build(&points, d, 5);
        assert_eq!(graph, NeighborGraph::build_exhaustive(&points, d, 5));
        assert_eq!(graph.neighbors(0), &[2]);
        assert_eq!(graph.edges(), &[(0, 2)]);
        assert!(graph.neighbors(1).is_empty());
    }
}
