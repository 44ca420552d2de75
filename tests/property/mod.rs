//! Property-based tests for naming and pagination unification

mod naming;
mod unification;
