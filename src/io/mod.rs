//! Edge-list ingestion and partition emission

mod edgelist;

pub use edgelist::{parse_edge_list, write_partition, ParseError};
