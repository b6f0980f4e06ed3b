//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the voice engine to external systems:
//! - `memory` - In-memory fitness store
//! - `navigation` - Recording navigator
//! - `recognition` - Scripted speech recognition provider

pub mod memory;
pub mod navigation;
pub mod recognition;

pub use memory::{InMemoryFitnessStore, StoreCall};
pub use navigation::RecordingNavigator;
pub use recognition::ScriptedRecognitionProvider;
