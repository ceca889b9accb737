//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the checker and an external
//! system (build metadata, code forge, version control, verification).
//! Implementations live in `src/adapters/`.

pub mod forge;
pub mod graph;
pub mod shell;
pub mod vcs;
pub mod verifier;

pub use forge::{ChangeForge, ChangeStatus};
pub use graph::GraphSource;
pub use shell::{ShellExecutor, ShellOutput};
pub use vcs::Vcs;
pub use verifier::Verifier;
