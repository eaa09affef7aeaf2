//! Shared test utilities
//!
//! This crate provides reusable test infrastructure for the domain crates:
//! - `TestDatabase`: PostgreSQL container with migrations applied and
//!   automatic cleanup
//! - `TestDataBuilder`: deterministic test data generation
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! let builder = TestDataBuilder::from_test_name("my_test");
//!
//! let title = builder.name("task", "main");
//! # }
//! ```

mod postgres;

pub use postgres::TestDatabase;

/// Builder for test data with deterministic naming
///
/// Derives a seed from the test name so concurrently running tests produce
/// distinct but reproducible data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with an explicit seed
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from a test name (seed = hash of the name)
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self {
            seed: hasher.finish(),
        }
    }

    /// A name unique to this builder: "{prefix}-{suffix}-{seed}"
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("{}-{}-{:x}", prefix, suffix, self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_is_deterministic_per_test_name() {
        let a = TestDataBuilder::from_test_name("some_test");
        let b = TestDataBuilder::from_test_name("some_test");
        assert_eq!(a.name("task", "x"), b.name("task", "x"));

        let c = TestDataBuilder::from_test_name("other_test");
        assert_ne!(a.name("task", "x"), c.name("task", "x"));
    }
}
