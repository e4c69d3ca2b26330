pub mod dijkstra;
pub mod limits;
pub mod reconstruct;
pub mod traits;

pub use limits::{CancellationToken, SearchLimits};
pub use reconstruct::reconstruct_path;
pub use traits::{Route, SearchState, ShortestPathAlgorithm};
