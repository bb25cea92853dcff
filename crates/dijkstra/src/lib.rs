mod dijkstra;
mod error;
mod graph;
mod heap;
mod keyed;
mod weight;

pub mod generator;

pub use dijkstra::ShortestPath;
pub use dijkstra::shortest_path;
pub use error::GraphError;
pub use error::HeapError;
pub use error::Result;
pub use graph::AdjacencyGraph;
pub use graph::Edge;
pub use heap::IndexedMinHeap;
pub use keyed::KeyedGraph;
pub use weight::Weight;
