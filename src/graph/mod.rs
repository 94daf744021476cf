//! Core network data structures

mod edge;
mod network;
mod node;


pub use edge::Edge;
pub use network::Network;
pub use node::{AttributeValue, Attributes, Node, NodeId};
