//! Shared utilities for kubeplan.
//!
//! This crate provides the error type shared by every other
//! kubeplan crate.

pub mod errors;
