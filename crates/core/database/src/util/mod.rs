pub mod bridge;
pub mod idgen;
