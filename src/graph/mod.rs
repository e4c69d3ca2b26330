pub mod generators;
pub mod road;
pub mod traits;
pub mod types;

pub use road::RoadGraph;
pub use traits::Graph;
pub use types::{Coordinates, Edge, Node, NodeId};
