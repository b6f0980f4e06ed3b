//! Navigator adapters.

mod recording_navigator;

pub use recording_navigator::RecordingNavigator;
