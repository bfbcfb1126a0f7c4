//! Graph algorithms (components, betweenness, Girvan-Newman, centrality)
//!
//! The community pipeline is betweenness + components composed by the
//! refiner; the centrality measures are standalone primitives.

pub mod betweenness;
pub mod centrality;
pub mod components;
pub mod girvan_newman;
pub mod modularity;

pub use betweenness::edge_betweenness;
pub use centrality::{betweenness_centrality, closeness_centrality, degree_centrality};
pub use components::{connected_components, Partition};
pub use girvan_newman::{girvan_newman, girvan_newman_best, GirvanNewman};
pub use modularity::modularity;
