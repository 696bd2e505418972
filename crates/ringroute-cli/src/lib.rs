//! Ring route CLI library.
//!
//! This crate provides the result sink and the planning command used by the
//! `ringroute` binary.

pub mod plan;
pub mod sink;
