//! In-memory persistence adapters.
//!
//! Each store is an explicitly constructed object with process lifetime,
//! shared through `Arc` with the services that use it. Records live in a
//! `Vec` so listings keep insertion order. Nothing survives a restart.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use agenda_backend::outbound::persistence::{
//!     InMemoryContactRepository, InMemoryUserRepository,
//! };
//!
//! let users = Arc::new(InMemoryUserRepository::new());
//! let contacts = Arc::new(InMemoryContactRepository::new());
//! # let _ = (users, contacts);
//! ```

mod memory_contact_repository;
mod memory_user_repository;

pub use memory_contact_repository::InMemoryContactRepository;
pub use memory_user_repository::InMemoryUserRepository;
