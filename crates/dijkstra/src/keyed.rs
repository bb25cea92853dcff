use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use crate::dijkstra::shortest_path;
use crate::error::GraphError;
use crate::error::Result;
use crate::graph::AdjacencyGraph;
use crate::weight::Weight;

/// Directed weighted graph addressed by arbitrary hashable keys.
///
/// A bijective key <-> id table around an [`AdjacencyGraph`]: every key gets
/// the next dense id at insertion, and since core ids are creation-ordered
/// and never reassigned, the reverse direction is a plain `Vec` indexed by
/// id. All operations translate their arguments and delegate to the core.
#[derive(Clone, Debug)]
pub struct KeyedGraph<K, W> {
    ids: HashMap<K, u32>,
    keys: Vec<K>,
    graph: AdjacencyGraph<W>,
}

impl<K, W> KeyedGraph<K, W> {
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            keys: Vec::new(),
            graph: AdjacencyGraph::new(),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.keys.len()
    }

    /// The integer-indexed core this façade translates into.
    #[inline]
    pub fn graph(&self) -> &AdjacencyGraph<W> {
        &self.graph
    }
}

impl<K, W> KeyedGraph<K, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Weight,
{
    /// Registers `key` and returns its assigned dense id.
    pub fn add_vertex(&mut self, key: K) -> Result<u32> {
        if self.ids.contains_key(&key) {
            return Err(GraphError::duplicate_key(&key));
        }
        let id = self.graph.add_vertex();
        self.ids.insert(key.clone(), id);
        self.keys.push(key);
        Ok(id)
    }

    pub fn add_edge(&mut self, from: &K, to: &K, weight: W) -> Result<()> {
        let from_id = self.id_of(from)?;
        let to_id = self.id_of(to)?;
        self.graph.add_edge(from_id, to_id, weight)
    }

    pub fn weight(&self, from: &K, to: &K) -> Result<W> {
        self.graph.weight(self.id_of(from)?, self.id_of(to)?)
    }

    /// Minimum-weight path between two keyed vertices, as keys.
    ///
    /// `Ok(None)` when `to` is unreachable from `from`.
    pub fn shortest_path(&self, from: &K, to: &K) -> Result<Option<(Vec<K>, W)>> {
        let from_id = self.id_of(from)?;
        let to_id = self.id_of(to)?;
        trace!(from = ?from, to = ?to, "keyed shortest-path query");

        let Some(found) = shortest_path(&self.graph, from_id, to_id)? else {
            return Ok(None);
        };
        let keys = found
            .vertices
            .iter()
            .map(|&id| self.keys[id as usize].clone())
            .collect();
        Ok(Some((keys, found.weight)))
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.ids.contains_key(key)
    }

    /// Dense id assigned to `key` at insertion.
    pub fn id_of(&self, key: &K) -> Result<u32> {
        self.ids
            .get(key)
            .copied()
            .ok_or_else(|| GraphError::unknown_key(key))
    }

    /// Key that was assigned `id`, if `id` was ever assigned.
    pub fn key_of(&self, id: u32) -> Option<&K> {
        self.keys.get(id as usize)
    }
}

impl<K, W> Default for KeyedGraph<K, W> {
    fn default() -> Self {
        Self::new()
    }
}
