//! Resolver implementations for fetching artifact versions

pub mod maven;

pub use maven::MavenResolver;
