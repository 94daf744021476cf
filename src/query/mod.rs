//! Evaluation engines for compiled rule sets
//!
//! Provides the two filter strategies, which reduce a network to its
//! matching sub-network, and the boolean network query.

mod fast_filter;
mod filter;
mod network_query;
mod trim;

pub use fast_filter::{compile_fast_filter, FastFilter};
pub use filter::{compile_filter, Filter};
pub use network_query::{compile_query, NetworkQuery};
pub use trim::trim_orphans;
