//! Merge rules for layered config sources.

pub mod merge_policy;
