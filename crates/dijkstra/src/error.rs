//! Typed failures for heap and graph operations.

use std::fmt::Debug;

use thiserror::Error;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by [`crate::IndexedMinHeap`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// Peek or extract on an empty heap.
    #[error("heap is empty")]
    Empty,

    /// Decrease-key or priority lookup on an id that is not currently queued.
    #[error("vertex {vertex} is not queued in the heap")]
    NotTracked { vertex: u32 },

    /// Insert of an id that was already inserted, queued or extracted.
    #[error("vertex {vertex} was already inserted into the heap")]
    AlreadyTracked { vertex: u32 },

    /// Insert of an id beyond the capacity fixed at construction.
    #[error("vertex {vertex} is outside the heap capacity of {capacity}")]
    OutOfRange { vertex: u32, capacity: usize },
}

/// Errors raised by graph mutation, queries, and shortest-path runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An id was never assigned by this graph.
    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    UnknownVertex { vertex: u32, vertex_count: usize },

    /// Weight query for an edge that does not exist.
    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: u32, to: u32 },

    /// A keyed vertex was added twice.
    #[error("duplicate vertex key {key}")]
    DuplicateKey { key: String },

    /// A keyed operation referenced a key that was never added.
    #[error("unknown vertex key {key}")]
    UnknownKey { key: String },

    #[error(transparent)]
    Heap(#[from] HeapError),
}

impl GraphError {
    /// Creates an unknown-vertex error for an id outside `0..vertex_count`.
    pub fn unknown_vertex(vertex: u32, vertex_count: usize) -> Self {
        Self::UnknownVertex {
            vertex,
            vertex_count,
        }
    }

    /// Creates a duplicate-key error from any debuggable key.
    pub fn duplicate_key(key: &impl Debug) -> Self {
        Self::DuplicateKey {
            key: format!("{key:?}"),
        }
    }

    /// Creates an unknown-key error from any debuggable key.
    pub fn unknown_key(key: &impl Debug) -> Self {
        Self::UnknownKey {
            key: format!("{key:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GraphError;
    use super::HeapError;

    #[test]
    fn display_strings_name_the_offender() {
        let err = GraphError::unknown_vertex(7, 3);
        assert_eq!(
            err.to_string(),
            "vertex 7 is out of range for a graph of 3 vertices"
        );

        let err = GraphError::EdgeNotFound { from: 1, to: 2 };
        assert_eq!(err.to_string(), "no edge from 1 to 2");

        let err = GraphError::duplicate_key(&"hub");
        assert_eq!(err.to_string(), "duplicate vertex key \"hub\"");
    }

    #[test]
    fn heap_errors_nest_transparently() {
        let err = GraphError::from(HeapError::Empty);
        assert_eq!(err.to_string(), "heap is empty");
        assert_eq!(err, GraphError::Heap(HeapError::Empty));
    }
}
