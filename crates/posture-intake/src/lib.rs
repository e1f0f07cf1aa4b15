//! # posture-intake
//!
//! Turns free-text inventory lines into classified assets.
//! Classification is an ordered list of keyword rules: first match wins,
//! unmatched lines fall back to `Device`. No inference model is involved.

pub mod classifier;
pub mod import;

pub use classifier::{Classification, CrownRule, KeywordClassifier, KeywordRule};
pub use import::{ImportSummary, Intake};
