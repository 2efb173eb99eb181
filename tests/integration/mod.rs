//! Integration test suite for ordo.
//!
//! These tests exercise the full pipeline from a task table file to a
//! finished report: validation, exhaustive ordering search, exact
//! scoring, and Monte Carlo simulation of the winning ordering.
//!
//! # Test Categories
//!
//! - `optimizer_e2e`: end-to-end optimization scenarios
//! - `simulation`: statistical checks on the failure-time sampler
//! - `table_io`: file round-trip and validation at the boundary


mod simulation;
mod table_io;
