//! Core types for SceneTree.
//!
//! This crate holds the output model shared by the parser and the facade:
//! the [`node::Node`] tree produced from a scene file.

pub mod node;
