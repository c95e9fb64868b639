//! Integration test harness.
//!
//! These tests exercise the full router against a real PostgreSQL
//! database and are marked `#[ignore]`; run them with
//! `cargo test -- --ignored` once `config/test.toml` points at a
//! disposable database.

mod helpers;

mod health_test;
mod movie_test;
mod user_test;
