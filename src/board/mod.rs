//! Task board management for Trestle.
//!
//! This module owns the canonical three-column task collection and its
//! mutation protocol: creating tasks with fresh identity, merging partial
//! updates, moving tasks between status buckets, and deleting them, with
//! every mutation followed by a persistence write before any dependent
//! render. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
