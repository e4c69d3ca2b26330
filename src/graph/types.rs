use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Road network node identifier (OSM-style integer id).
pub type NodeId = u64;

/// Geographic position of a node, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinates { lat, lon }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// A node of the road network
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub lat: f64,
    pub lon: f64,
}

impl Node {
    pub fn new(id: NodeId, lat: f64, lon: f64) -> Self {
        Node { id, lat, lon }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }
}

/// A directed, weighted road segment. `source -> target` says nothing about
/// `target -> source`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: W,
}

impl<W> Edge<W>
where
    W: Copy + Debug,
{
    pub fn new(source: NodeId, target: NodeId, weight: W) -> Self {
        Edge { source, target, weight }
    }
}
