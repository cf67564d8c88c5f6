//! Test utilities shared by unit and integration tests
