//! Recognition provider adapters.

mod scripted_provider;

pub use scripted_provider::ScriptedRecognitionProvider;
