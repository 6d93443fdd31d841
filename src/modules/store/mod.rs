//! Data-access layer for categories and questions
//!
//! Handlers never touch a connection directly: services receive an
//! `Arc<dyn TriviaStore>` at startup. Production uses PostgreSQL, tests
//! use the in-memory store.

#[cfg(test)]
mod memory;
mod postgres;
mod trivia_store;

#[cfg(test)]
pub use memory::MemoryTriviaStore;
pub use postgres::PgTriviaStore;
pub use trivia_store::TriviaStore;
