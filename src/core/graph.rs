//! One-shot k-nearest-neighbor graph over the sphere points.
//!
//! Built at mount and again on resize, never per frame. Lookups go through a
//! uniform hash grid whose cells are at least as wide as the connection
//! distance, so a point's candidates all sit in the 27 surrounding cells and
//! the result matches an exhaustive scan exactly.

use super::constants::MAX_NEIGHBORS;
use fnv::FnvHashMap;
use glam::Vec3;
use smallvec::SmallVec;
use std::cmp::Ordering;

pub type Neighbors = SmallVec<[usize; MAX_NEIGHBORS]>;

// Widen cells a hair so rounding in the division cannot push a point that is
// strictly within range two cells away.
const CELL_SLACK: f32 = 1.0 + 1e-4;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NeighborGraph {
    adjacency: Vec<Neighbors>,
    edges: Vec<(usize, usize)>,
}

/// A point within range of the one being resolved; only lives during a build.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    index: usize,
    distance: f32,
}

impl NeighborGraph {
    /// For each point, keep up to `max_neighbors` other points strictly closer
    /// than `max_distance`, ascending by distance then by index.
    pub fn build(points: &[Vec3], max_distance: f32, max_neighbors: usize) -> Self {
        if !usable(max_distance, max_neighbors) {
            return Self::unconnected(points.len());
        }
        let grid = SpatialGrid::new(points, max_distance * CELL_SLACK);
        let adjacency = points
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let mut candidates = Vec::new();
                grid.visit_near(p, |j| {
                    if j != i {
                        let distance = p.distance(points[j]);
                        if distance < max_distance {
                            candidates.push(Candidate { index: j, distance });
                        }
                    }
                });
                nearest(candidates, max_neighbors)
            })
            .collect();
        Self::from_adjacency(adjacency)
    }

    /// Reference O(N²) builder; same output as [`NeighborGraph::build`].
    pub fn build_exhaustive(points: &[Vec3], max_distance: f32, max_neighbors: usize) -> Self {
        if !usable(max_distance, max_neighbors) {
            return Self::unconnected(points.len());
        }
        let adjacency = points
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let candidates = points
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(j, &q)| Candidate {
                        index: j,
                        distance: p.distance(q),
                    })
                    .filter(|c| c.distance < max_distance)
                    .collect();
                nearest(candidates, max_neighbors)
            })
            .collect();
        Self::from_adjacency(adjacency)
    }

    fn unconnected(len: usize) -> Self {
        Self {
            adjacency: vec![Neighbors::new(); len],
            edges: Vec::new(),
        }
    }

    fn from_adjacency(adjacency: Vec<Neighbors>) -> Self {
        // Storage is directional; a pair is drawn once. Take (i, j) when i < j,
        // or when i > j and j did not already claim i.
        let mut edges = Vec::new();
        for (i, list) in adjacency.iter().enumerate() {
            for &j in list {
                if i < j {
                    edges.push((i, j));
                } else if !adjacency[j].contains(&i) {
                    edges.push((j, i));
                }
            }
        }
        Self { adjacency, edges }
    }

    #[inline]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.adjacency.get(index).map(|n| n.as_slice()).unwrap_or(&[])
    }

    /// Unordered render edges `(lo, hi)`, each pair exactly once.
    #[inline]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[inline]
fn usable(max_distance: f32, max_neighbors: usize) -> bool {
    max_distance.is_finite() && max_distance > 0.0 && max_neighbors > 0
}

fn nearest(mut candidates: Vec<Candidate>, max_neighbors: usize) -> Neighbors {
    candidates.sort_by(|a, b| match a.distance.total_cmp(&b.distance) {
        Ordering::Equal => a.index.cmp(&b.index),
        other => other,
    });
    candidates
        .into_iter()
        .take(max_neighbors)
        .map(|c| c.index)
        .collect()
}

// Wide keys: a tiny cell size puts coordinates far outside the i32 range.
type CellKey = (i64, i64, i64);

struct SpatialGrid {
    cell_size: f32,
    cells: FnvHashMap<CellKey, Vec<usize>>,
}

impl SpatialGrid {
    fn new(points: &[Vec3], cell_size: f32) -> Self {
        let mut cells: FnvHashMap<CellKey, Vec<usize>> = FnvHashMap::default();
        for (i, &p) in points.iter().enumerate() {
            cells.entry(cell_of(p, cell_size)).or_default().push(i);
        }
        Self { cell_size, cells }
    }

    fn visit_near(&self, p: Vec3, mut visit: impl FnMut(usize)) {
        let (cx, cy, cz) = cell_of(p, self.cell_size);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if let Some(bucket) = self.cells.get(&(
                        cx.saturating_add(dx),
                        cy.saturating_add(dy),
                        cz.saturating_add(dz),
                    )) {
                        bucket.iter().copied().for_each(&mut visit);
                    }
                }
            }
        }
    }
}

#[inline]
fn cell_of(p: Vec3, cell_size: f32) -> CellKey {
    let c = (p / cell_size).floor();
    (c.x as i64, c.y as i64, c.z as i64)
}
