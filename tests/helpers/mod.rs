//! Test helpers module
//!
//! This module provides utilities and helpers for testing the InfluenceHub
//! client: a mock backend server and payload builders.

#![allow(dead_code)]

pub mod mock_backend;
pub mod test_data;

pub use mock_backend::*;
pub use test_data::*;
