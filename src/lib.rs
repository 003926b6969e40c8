//! Trestle: a task board core.
//!
//! This crate owns the canonical task collection of a three-column board
//! (todo, in progress, done), enforces its status transitions, assigns task
//! identity, and keeps the in-memory model and the persisted copy aligned
//! after every mutation. Presentation concerns (card rendering, modals,
//! drag-and-drop plumbing) live outside the crate and talk to it through
//! ports.
//!
//! # Architecture
//!
//! Trestle follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and presentation
//! - **Adapters**: Concrete implementations of ports (file blob, memory)
//!
//! # Modules
//!
//! - [`board`]: Task collection, mutation protocol, filtering, and the
//!   command-driven application controller

pub mod board;
