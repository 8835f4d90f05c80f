//! Test Module
//!
//! Test suite for the veritext client.
//!
//! ## Test Categories
//! - `client_tests`: request shaping and response handling against a mock service
//! - `retry_tests`: retry policy bounds and delay accounting
//! - `validation_tests`: pre-flight input validation
//! - `config_tests`: environment-driven configuration
//! - `metrics_tests`: structural text metrics properties

pub mod support;

pub mod metrics_tests;
