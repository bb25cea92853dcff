use crate::error::GraphError;
use crate::error::Result;
use crate::weight::Weight;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge<W> {
    pub to: u32,
    pub weight: W,
}

/// Directed weighted graph over dense vertex ids, one out-edge list per
/// vertex. Ids are assigned in creation order starting at 0 and never reused.
///
/// At most one edge exists per ordered vertex pair: inserting a duplicate
/// keeps the minimum of the old and new weight.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<W> {
    out_edges: Vec<Vec<Edge<W>>>,
    edge_count: usize,
}

impl<W> AdjacencyGraph<W> {
    pub fn new() -> Self {
        Self {
            out_edges: Vec::new(),
            edge_count: 0,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.out_edges.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Appends a new vertex with no outgoing edges and returns its id.
    pub fn add_vertex(&mut self) -> u32 {
        let id = self.out_edges.len() as u32;
        self.out_edges.push(Vec::new());
        id
    }

    /// Read-only view of `vertex`'s outgoing edges, in insertion order.
    pub fn neighbors(&self, vertex: u32) -> Result<&[Edge<W>]> {
        self.out_edges
            .get(vertex as usize)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::unknown_vertex(vertex, self.out_edges.len()))
    }
}

impl<W: Weight> AdjacencyGraph<W> {
    /// Inserts the edge `from -> to`, or lowers its weight if it already
    /// exists and `weight` is smaller.
    pub fn add_edge(&mut self, from: u32, to: u32, weight: W) -> Result<()> {
        let vertex_count = self.out_edges.len();
        if from as usize >= vertex_count {
            return Err(GraphError::unknown_vertex(from, vertex_count));
        }
        if to as usize >= vertex_count {
            return Err(GraphError::unknown_vertex(to, vertex_count));
        }

        let list = &mut self.out_edges[from as usize];
        if let Some(edge) = list.iter_mut().find(|e| e.to == to) {
            edge.weight = edge.weight.min(weight);
        } else {
            list.push(Edge { to, weight });
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Weight of the edge `from -> to`. Scans `from`'s out-list.
    pub fn weight(&self, from: u32, to: u32) -> Result<W> {
        if to as usize >= self.out_edges.len() {
            return Err(GraphError::unknown_vertex(to, self.out_edges.len()));
        }
        self.neighbors(from)?
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.weight)
            .ok_or(GraphError::EdgeNotFound { from, to })
    }
}

impl<W> Default for AdjacencyGraph<W> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::AdjacencyGraph;
    use super::Edge;
    use crate::error::GraphError;

    #[test]
    fn vertices_get_dense_ids_in_creation_order() {
        let mut graph = AdjacencyGraph::<u64>::new();
        assert_eq!(graph.add_vertex(), 0);
        assert_eq!(graph.add_vertex(), 1);
        assert_eq!(graph.add_vertex(), 2);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn duplicate_edge_keeps_the_minimum_weight() {
        let mut graph = AdjacencyGraph::new();
        let a = graph.add_vertex();
        let b = graph.add_vertex();

        graph.add_edge(a, b, 9_u64).unwrap();
        graph.add_edge(a, b, 4).unwrap();
        assert_eq!(graph.weight(a, b), Ok(4));

        // A worse duplicate changes nothing.
        graph.add_edge(a, b, 30).unwrap();
        assert_eq!(graph.weight(a, b), Ok(4));
        assert_eq!(graph.edge_count(), 1);

        graph.add_edge(a, b, 2).unwrap();
        assert_eq!(graph.weight(a, b), Ok(2));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn edges_are_directed() {
        let mut graph = AdjacencyGraph::new();
        let a = graph.add_vertex();
        let b = graph.add_vertex();
        graph.add_edge(a, b, 1_u64).unwrap();

        assert_eq!(graph.weight(a, b), Ok(1));
        assert_eq!(
            graph.weight(b, a),
            Err(GraphError::EdgeNotFound { from: b, to: a })
        );
    }

    #[test]
    fn out_of_range_ids_are_rejected() {
        let mut graph = AdjacencyGraph::new();
        let a = graph.add_vertex();

        assert_eq!(
            graph.add_edge(a, 5, 1_u64),
            Err(GraphError::UnknownVertex {
                vertex: 5,
                vertex_count: 1
            })
        );
        assert_eq!(
            graph.add_edge(7, a, 1),
            Err(GraphError::UnknownVertex {
                vertex: 7,
                vertex_count: 1
            })
        );
        assert!(matches!(
            graph.weight(3, a),
            Err(GraphError::UnknownVertex { vertex: 3, .. })
        ));
        assert!(graph.neighbors(2).is_err());
    }

    #[test]
    fn neighbors_views_the_out_list() {
        let mut graph = AdjacencyGraph::new();
        let a = graph.add_vertex();
        let b = graph.add_vertex();
        let c = graph.add_vertex();
        graph.add_edge(a, b, 3_u64).unwrap();
        graph.add_edge(a, c, 8).unwrap();

        assert_eq!(
            graph.neighbors(a).unwrap(),
            &[Edge { to: b, weight: 3 }, Edge { to: c, weight: 8 }]
        );
        assert!(graph.neighbors(b).unwrap().is_empty());
    }
}
