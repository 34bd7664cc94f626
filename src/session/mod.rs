//! Local session module
//!
//! This module keeps the bearer token and user profile between runs

pub mod storage;
pub mod manager;

pub use storage::{SessionStorage, MemoryStore, FileStore, RedisStore};
pub use manager::{Session, SessionManager};
