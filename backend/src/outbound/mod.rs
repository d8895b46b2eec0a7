//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local, insertion-ordered course store.
//!
//! Adapters translate between domain types and their storage
//! representation. They contain no business logic.

pub mod memory;
