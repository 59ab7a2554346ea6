//! Domain logic - pure version rules independent of files and CI plumbing

pub mod version;

pub use version::{BumpKind, Version};
