use tracing::debug;
use tracing::trace;

use crate::error::GraphError;
use crate::error::Result;
use crate::graph::AdjacencyGraph;
use crate::heap::IndexedMinHeap;
use crate::weight::Weight;

/// A minimum-weight route: the visited vertex ids in order, source first,
/// and the summed edge weight.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPath<W> {
    pub vertices: Vec<u32>,
    pub weight: W,
}

/// Dijkstra's algorithm from `source` to `target` over a borrowed graph.
///
/// Returns `Ok(None)` when `target` cannot be reached from `source`.
/// `source == target` yields the single-vertex path with weight zero.
/// Edge weights must be non-negative, which every [`Weight`] type is.
pub fn shortest_path<W: Weight>(
    graph: &AdjacencyGraph<W>,
    source: u32,
    target: u32,
) -> Result<Option<ShortestPath<W>>> {
    let vertex_count = graph.vertex_count();
    for vertex in [source, target] {
        if vertex as usize >= vertex_count {
            return Err(GraphError::unknown_vertex(vertex, vertex_count));
        }
    }

    trace!(source, target, "shortest-path query");

    let mut heap = IndexedMinHeap::with_capacity(vertex_count);
    for vertex in 0..vertex_count as u32 {
        heap.insert(vertex)?;
    }
    heap.decrease_key(source, W::ZERO)?;

    let mut predecessor: Vec<Option<u32>> = vec![None; vertex_count];

    while !heap.is_empty() {
        let (current, distance) = heap.extract_min()?;

        if distance == W::INFINITY {
            // Everything still queued is cut off from the source.
            debug!(source, target, "target unreachable");
            return Ok(None);
        }
        if current == target {
            let vertices = trace_back(&predecessor, target);
            debug!(source, target, weight = ?distance, hops = vertices.len(), "path found");
            return Ok(Some(ShortestPath {
                vertices,
                weight: distance,
            }));
        }

        for edge in graph.neighbors(current)? {
            if !heap.contains(edge.to) {
                continue;
            }
            let candidate = distance.saturating_add(edge.weight);
            if candidate == W::INFINITY {
                continue;
            }
            heap.decrease_key(edge.to, candidate)?;
            // The relaxation won exactly when the stored priority now equals
            // the candidate; priorities only ever decrease while queued.
            if heap.priority(edge.to)? == candidate {
                predecessor[edge.to as usize] = Some(current);
            }
        }
    }

    Ok(None)
}

/// Walks the predecessor trace from `target` back to the source, then
/// reverses into source-first order. Iterative: a path can be as long as the
/// vertex count.
fn trace_back(predecessor: &[Option<u32>], target: u32) -> Vec<u32> {
    let mut vertices = vec![target];
    let mut current = target;
    while let Some(previous) = predecessor[current as usize] {
        vertices.push(previous);
        current = previous;
    }
    vertices.reverse();
    vertices
}
