//! FitTrack Voice - spoken command interpretation and dispatch.
//!
//! A finalized speech transcript is matched against an ordered catalogue of
//! command patterns, turned into a typed intent, and executed against the
//! fitness store and the navigator. The session controller owns the
//! recognition lifecycle and publishes a status surface for the UI.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
