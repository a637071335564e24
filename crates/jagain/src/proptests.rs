//! Property-based tests for the container laws.
