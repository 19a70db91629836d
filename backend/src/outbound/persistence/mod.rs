//! Storage adapters implementing the domain ports.

mod in_memory_user_store;

pub use in_memory_user_store::InMemoryUserStore;
