//! Tunables for the colour heuristic.

/// Images are resampled to `ANALYSIS_SIZE` x `ANALYSIS_SIZE` before averaging.
pub const ANALYSIS_SIZE: u32 = 224;

/// Green share of the summed channel means above which green tones count.
pub const GREEN_RATIO_THRESHOLD: f64 = 0.35;

/// `min(r, g) / max(b, 1)` above which brown tones count.
pub const BROWN_SCORE_THRESHOLD: f64 = 1.2;

/// Mean brightness (0..255) below which the image counts as dark.
pub const DARKNESS_THRESHOLD: f64 = 120.0;

/// Floor for the blue channel in the brown-score denominator.
pub const BLUE_FLOOR: f64 = 1.0;

/// Score contributions of each cue.
pub const GREEN_BONUS: f64 = 0.3;
pub const BROWN_BONUS: f64 = 0.3;
pub const DARKNESS_BONUS: f64 = 0.2;

/// Half-width of the uniform noise added to every non-degenerate score.
pub const NOISE_AMPLITUDE: f64 = 0.1;

/// Scores strictly above this are biodegradable.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Score assigned to an all-black image, where colour ratios are undefined.
pub const DEGENERATE_SCORE: f64 = 0.5;

/// Confidence (percent) at the decision threshold, before clamping.
pub const BASE_CONFIDENCE: f64 = 50.0;

/// Reported confidence is clamped to this range (percent).
pub const MIN_CONFIDENCE: f64 = 55.0;
pub const MAX_CONFIDENCE: f64 = 95.0;
