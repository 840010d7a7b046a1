//! Assemble full-day e-Callisto spectrograms and align burst labels.
//!
//! The e-Callisto network publishes many short, individually time-stamped
//! recordings per station per day, plus a monthly text table of announced
//! bursts. This crate determines the circular playback order of a day's
//! files from a local-day UTC offset, concatenates them into one continuous
//! series while tracking a running sample cursor, and projects the
//! human-readable burst time ranges onto that cursor's index space.

pub mod cli;
pub mod data;
pub mod error;
pub mod output;
pub mod remote;
