//!
//! # In-Memory Registries
//!
//! Concurrency-safe collections of domain records, injected into the
//! application as `web::Data` and living for the lifetime of the process.
//! Each registry guards its state with a single lock so id assignment and
//! uniqueness checks are atomic; nothing here survives a restart, which is
//! the accepted tradeoff of this system.

pub mod tasks;
pub mod users;

pub use tasks::TaskRegistry;
pub use users::UserRegistry;
