//! # blogmonk-api - REST Client
//!
//! HTTP access to the blog backend. Exposes [`BlogClient`] with the three
//! operations the application consumes:
//!
//! | Operation  | Method | Path          |
//! |------------|--------|---------------|
//! | List posts | GET    | `/blogs`      |
//! | Get one    | GET    | `/blogs/{id}` |
//! | Create     | POST   | `/blogs`      |
//!
//! Response decoding is split into pure `decode_*` helpers so status mapping
//! and JSON parsing are unit-testable without a network. A single automatic
//! retry on transient transport failure is built into the client.

pub mod client;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::BlogClient;
