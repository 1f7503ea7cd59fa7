//! Concrete repository implementations.

mod memory_user_repository;

pub use memory_user_repository::InMemoryUserRepository;
