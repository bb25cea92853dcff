//! Seeded graph cases for tests and benches.

use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::graph::AdjacencyGraph;

const MAX_WEIGHT: u64 = 1_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    Line,
    Grid,
    SplitComponents,
}

impl GraphCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::Line => "line",
            Self::Grid => "grid",
            Self::SplitComponents => "split_components",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: AdjacencyGraph<u64>,
    pub source: u32,
    pub target: u32,
}

pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> GeneratedGraph {
    match case {
        GraphCase::SparseRandom => sparse_random_case(size.max(16), seed, 4),
        GraphCase::DenseRandom => dense_random_case(size.max(64), seed),
        GraphCase::Line => line_case(size.max(8), seed),
        GraphCase::Grid => grid_case(size.max(64), seed),
        GraphCase::SplitComponents => split_components_case(size.max(16), seed),
    }
}

fn empty_graph(vertex_count: usize) -> AdjacencyGraph<u64> {
    let mut graph = AdjacencyGraph::new();
    for _ in 0..vertex_count {
        graph.add_vertex();
    }
    graph
}

fn connect(graph: &mut AdjacencyGraph<u64>, from: usize, to: usize, weight: u64) {
    graph
        .add_edge(from as u32, to as u32, weight)
        .expect("generator only emits ids it created");
}

fn sparse_random_case(size: usize, seed: u64, edge_factor: usize) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(2);
    let m_target = n.saturating_mul(edge_factor).min(n * (n - 1));
    let mut graph = empty_graph(n);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    let mut added = 0;
    while added < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u == v {
            continue;
        }
        let key = ((u as u64) << 32) | v as u64;
        if used.insert(key) {
            connect(&mut graph, u, v, rng.random_range(0..=MAX_WEIGHT));
            added += 1;
        }
    }

    let source = rng.random_range(0..n);
    let mut target = rng.random_range(0..n);
    if source == target {
        target = (target + 1) % n;
    }

    GeneratedGraph {
        graph,
        source: source as u32,
        target: target as u32,
    }
}

fn dense_random_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(8);
    let mut graph = empty_graph(n);

    for u in 0..n {
        for v in 0..n {
            if u == v {
                continue;
            }
            connect(&mut graph, u, v, rng.random_range(0..=MAX_WEIGHT));
        }
    }

    let source = rng.random_range(0..n);
    let mut target = rng.random_range(0..n);
    if source == target {
        target = (target + 1) % n;
    }

    GeneratedGraph {
        graph,
        source: source as u32,
        target: target as u32,
    }
}

/// A chain 0 -> 1 -> ... -> n-1 with a sprinkling of forward skip edges, so
/// paths are long but not unique.
fn line_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(2);
    let mut graph = empty_graph(n);

    for v in 0..n - 1 {
        connect(&mut graph, v, v + 1, rng.random_range(1..=MAX_WEIGHT / 64));
    }
    for _ in 0..n / 8 {
        let u = rng.random_range(0..n - 1);
        let v = rng.random_range(u + 1..n);
        connect(&mut graph, u, v, rng.random_range(0..=MAX_WEIGHT));
    }

    GeneratedGraph {
        graph,
        source: 0,
        target: (n - 1) as u32,
    }
}

/// A side x side grid with right and down edges, source top-left, target
/// bottom-right.
fn grid_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let side = floor_sqrt(size).max(2);
    let n = side * side;
    let mut graph = empty_graph(n);

    for row in 0..side {
        for col in 0..side {
            let at = row * side + col;
            if col + 1 < side {
                connect(&mut graph, at, at + 1, rng.random_range(0..=MAX_WEIGHT));
            }
            if row + 1 < side {
                connect(&mut graph, at, at + side, rng.random_range(0..=MAX_WEIGHT));
            }
        }
    }

    GeneratedGraph {
        graph,
        source: 0,
        target: (n - 1) as u32,
    }
}

/// Two internally connected halves with no edges across, so the target is
/// never reachable from the source.
fn split_components_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(4);
    let half = n / 2;
    let mut graph = empty_graph(n);

    for v in 0..half - 1 {
        connect(&mut graph, v, v + 1, rng.random_range(0..=MAX_WEIGHT));
    }
    for v in half..n - 1 {
        connect(&mut graph, v, v + 1, rng.random_range(0..=MAX_WEIGHT));
    }

    GeneratedGraph {
        graph,
        source: 0,
        target: half as u32,
    }
}

fn floor_sqrt(value: usize) -> usize {
    let mut root = (value as f64).sqrt() as usize;
    while root.saturating_mul(root) > value {
        root -= 1;
    }
    while (root + 1).saturating_mul(root + 1) <= value {
        root += 1;
    }
    root
}
