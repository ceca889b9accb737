//! Live adapters for real external interactions.

pub mod forge;
pub mod graph;
pub mod shell;
pub mod vcs;
pub mod verifier;
