//! In-memory store adapters for development and testing.

mod in_memory_fitness_store;

pub use in_memory_fitness_store::{InMemoryFitnessStore, StoreCall};
