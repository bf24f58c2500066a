//! Biodegradable / non-biodegradable decision from colour features.
//!
//! This is a heuristic stand-in for a trained model. Green tones, brown tones
//! and darkness push an image towards "biodegradable"; a small uniform noise
//! term simulates model uncertainty, so repeated calls on an image near the
//! decision threshold may disagree. No state survives between calls apart
//! from the position of the random stream.

use std::fmt;
use std::path::Path;

use image::DynamicImage;
use rand::Rng;
use serde::Serialize;

use crate::classifier_rng::ClassifierRng;
use crate::constants::*;
use crate::error::{ClassifyError, Result};
use crate::features::ColorFeatures;


// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WasteCategory {
    #[serde(rename = "Biodegradable")]
    Biodegradable,
    #[serde(rename = "Non-Biodegradable")]
    NonBiodegradable,
}

impl WasteCategory {
    pub fn label(self) -> &'static str {
        match self {
            WasteCategory::Biodegradable => "Biodegradable",
            WasteCategory::NonBiodegradable => "Non-Biodegradable",
        }
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub label: WasteCategory,
    /// Percent, always within `MIN_CONFIDENCE..=MAX_CONFIDENCE`.
    pub confidence: f64,
    /// Final score (noise included) that produced the label.
    pub bio_score: f64,
}

impl ClassificationResult {
    /// Map a bio-score to a label and a clamped confidence. The further the
    /// score is from the threshold, the higher the confidence.
    pub fn from_score(bio_score: f64) -> Self {
        let (label, raw_confidence) = if bio_score > DECISION_THRESHOLD {
            (
                WasteCategory::Biodegradable,
                BASE_CONFIDENCE + (bio_score - DECISION_THRESHOLD) * 100.0,
            )
        } else {
            (
                WasteCategory::NonBiodegradable,
                BASE_CONFIDENCE + (DECISION_THRESHOLD - bio_score) * 100.0,
            )
        };
        Self {
            label,
            confidence: raw_confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE),
            bio_score,
        }
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Colour-heuristic classifier. Holds nothing but its noise source.
#[derive(Debug, Clone)]
pub struct ColorHeuristicClassifier<R = ClassifierRng> {
    rng: R,
}

impl ColorHeuristicClassifier<ClassifierRng> {
    /// Free-running classifier seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(ClassifierRng::from_entropy())
    }

    /// Reproducible classifier: the same seed yields the same noise sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ClassifierRng::from_seed_u64(seed))
    }
}

impl Default for ColorHeuristicClassifier<ClassifierRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ColorHeuristicClassifier<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Classify a decoded image.
    pub fn classify(&mut self, image: &DynamicImage) -> Result<ClassificationResult> {
        if image.width() == 0 || image.height() == 0 {
            return Err(ClassifyError::EmptyImage);
        }
        let features = ColorFeatures::from_image(image);
        let result = ClassificationResult::from_score(self.score(&features));
        tracing::debug!(
            avg_r = features.avg_r,
            avg_g = features.avg_g,
            avg_b = features.avg_b,
            bio_score = result.bio_score,
            label = %result.label,
            confidence = result.confidence,
            "classified image"
        );
        Ok(result)
    }

    /// Decode and classify an image file (PNG, JPEG or BMP).
    pub fn classify_path(&mut self, path: impl AsRef<Path>) -> Result<ClassificationResult> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| ClassifyError::ImageFile {
            path: path.to_path_buf(),
            source,
        })?;
        self.classify(&image)
    }

    /// Decode and classify an in-memory image buffer.
    pub fn classify_bytes(&mut self, bytes: &[u8]) -> Result<ClassificationResult> {
        let image = image::load_from_memory(bytes)?;
        self.classify(&image)
    }

    /// Heuristic score plus one noise draw. All-black images skip the noise
    /// and stay at the degenerate score.
    fn score(&mut self, features: &ColorFeatures) -> f64 {
        if features.is_black() {
            return DEGENERATE_SCORE;
        }
        features.heuristic_score() + self.rng.gen_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE)
    }
}
