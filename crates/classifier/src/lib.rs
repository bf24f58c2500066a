//! Colour-heuristic waste image classifier.
//!
//! Labels an image biodegradable or non-biodegradable from its average colour,
//! with a deliberate uniform noise term drawn from an injectable random
//! source. See [`classify`] for the decision rule.

pub mod classifier_rng;
pub mod classify;
pub mod constants;
pub mod error;
pub mod features;

pub use classifier_rng::ClassifierRng;
pub use classify::{ClassificationResult, ColorHeuristicClassifier, WasteCategory};
pub use error::{ClassifyError, Result};
pub use features::ColorFeatures;
