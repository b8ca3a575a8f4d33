//! Version tracking layer
//!
//! This module resolves the latest published version of an artifact, compares
//! it against the locally persisted baseline, and commits the new baseline.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Resolver   │────▶│  Reconcile  │────▶│    Store    │
//! │  (fetch)    │     │  (compare)  │     │  (baseline) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │  Resolvers  │                         │  Database   │
//! │   (maven)   │                         │  (sqlite)   │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`database`]: SQLite-based baseline store
//! - [`error`]: Error types for resolver and store operations
//! - [`reconcile`]: Change detection and the [`reconcile::Transition`] outcome
//! - [`resolver`]: Resolver trait for fetching the latest version from remote sources
//! - [`resolvers`]: Concrete resolver implementations (Maven)
//! - [`store`]: Store trait for reading and writing baselines
//! - [`types`]: Common types like `ArtifactId` and `VersionRecord`

pub mod database;
pub mod error;
pub mod reconcile;
pub mod resolver;
pub mod resolvers;
pub mod store;
pub mod types;
