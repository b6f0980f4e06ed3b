//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the voice engine and the outside world. Adapters implement these ports.
//!
//! - `FitnessStore` - hosted data store (workouts, exercises, plans)
//! - `Navigator` - page routing
//! - `RecognitionProvider` - platform speech recognition

mod fitness_store;
mod navigator;
mod recognition_provider;

pub use fitness_store::{FitnessStore, StoreError};
pub use navigator::Navigator;
pub use recognition_provider::{
    RecognitionError, RecognitionEvent, RecognitionEventSink, RecognitionOptions,
    RecognitionProvider,
};
