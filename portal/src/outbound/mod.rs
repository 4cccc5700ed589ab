//! Outbound adapters implementing domain ports.
//!
//! - **http**: `reqwest` client for the remote profile API
//! - **storage**: durable key-value stores (in-memory and directory-backed)
//! - **location**: fixed entry location for non-browser hosts and tests
//!
//! Adapters translate between domain types and transport representations.
//! They contain no navigation or session logic.

pub mod http;
pub mod location;
pub mod storage;
