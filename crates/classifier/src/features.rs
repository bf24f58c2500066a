//! Average-colour features and the deterministic part of the score.

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use serde::Serialize;

use crate::constants::*;

/// Per-channel means of an image, each in `0.0..=255.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorFeatures {
    pub avg_r: f64,
    pub avg_g: f64,
    pub avg_b: f64,
}

impl ColorFeatures {
    pub fn new(avg_r: f64, avg_g: f64, avg_b: f64) -> Self {
        Self {
            avg_r,
            avg_g,
            avg_b,
        }
    }

    /// Convert to RGB (dropping alpha), resample the whole frame to the
    /// analysis resolution, then average. Nothing is cropped, so colour
    /// proportions of the full image are kept.
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        let resized =
            image::imageops::resize(&rgb, ANALYSIS_SIZE, ANALYSIS_SIZE, FilterType::Triangle);
        Self::from_rgb(&resized)
    }

    /// Channel means of `image` as-is. An image with no pixels averages to
    /// black.
    pub fn from_rgb(image: &RgbImage) -> Self {
        let count = u64::from(image.width()) * u64::from(image.height());
        if count == 0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        let (r, g, b) = image.pixels().fold((0u64, 0u64, 0u64), |(r, g, b), p| {
            let [pr, pg, pb] = p.0;
            (r + u64::from(pr), g + u64::from(pg), b + u64::from(pb))
        });
        let n = count as f64;
        Self::new(r as f64 / n, g as f64 / n, b as f64 / n)
    }

    pub fn total(&self) -> f64 {
        self.avg_r + self.avg_g + self.avg_b
    }

    /// All channels zero: ratios are undefined.
    pub fn is_black(&self) -> bool {
        self.total() == 0.0
    }

    pub fn green_ratio(&self) -> f64 {
        self.avg_g / self.total()
    }

    pub fn brown_score(&self) -> f64 {
        self.avg_r.min(self.avg_g) / self.avg_b.max(BLUE_FLOOR)
    }

    pub fn brightness(&self) -> f64 {
        self.total() / 3.0
    }

    /// Bio-score before noise.
    ///
    /// Green tones, brown tones and darkness each add a fixed bonus. An
    /// all-black image scores exactly [`DEGENERATE_SCORE`].
    pub fn heuristic_score(&self) -> f64 {
        if self.is_black() {
            return DEGENERATE_SCORE;
        }
        let mut score = 0.0;
        if self.green_ratio() > GREEN_RATIO_THRESHOLD {
            score += GREEN_BONUS;
        }
        if self.brown_score() > BROWN_SCORE_THRESHOLD {
            score += BROWN_BONUS;
        }
        if self.brightness() < DARKNESS_THRESHOLD {
            score += DARKNESS_BONUS;
        }
        score
    }
}
