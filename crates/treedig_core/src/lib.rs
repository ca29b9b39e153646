//! Path-based traversal of dynamically typed value trees.
//!
//! Walks nested maps and sequences along a path of keys and indices, coerces the terminal value
//! into a caller-chosen type, and can create missing map levels on the way down.

/// Value model, path walking, coercion, and typed accessors.
pub mod tree;
