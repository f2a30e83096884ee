//! Key detection
//!
//! Correlates the duration-weighted pitch-class profile against all 24
//! scale templates and keeps the best match. Correlation is Pearson's r,
//! so the score compares the shape of the distribution, not its scale.

use super::templates::KeyTemplates;
use super::KeyDetectionResult;

/// Detect the musical key of a pitch-class profile
///
/// Scans the template catalog in its fixed order and keeps the first
/// strictly-greatest Pearson correlation, so ties resolve to the earlier
/// catalog entry. A degenerate correlation (all-zero or constant profile)
/// scores 0.0; when every score degenerates the result is the first
/// catalog entry ("C") with confidence 0.0 — undetermined, not C major.
///
/// # Arguments
///
/// * `profile` - 12-bin pitch-class profile
/// * `templates` - the 24-entry key template catalog
///
/// # Returns
///
/// Best-matching key name and its correlation in [-1, 1]. Confidence near
/// zero or negative marks an unreliable guess; callers surface it as-is.
pub fn detect_key(profile: &[f32; 12], templates: &KeyTemplates) -> KeyDetectionResult {
    let mut best_name = "C";
    let mut best_score = -1.0f32;

    for template in templates.iter() {
        let score = pearson_correlation(profile, &template.vector);
        if score > best_score {
            best_score = score;
            best_name = template.name;
        }
    }

    log::debug!("Detected key: {} (correlation {:.4})", best_name, best_score);

    KeyDetectionResult {
        name: best_name.to_string(),
        confidence: best_score,
    }
}

/// Pearson correlation between two 12-bin vectors
///
/// Returns 0.0 when either side has zero variance, standing in for the
/// undefined correlation of a constant series.
fn pearson_correlation(x: &[f32; 12], y: &[f32; 12]) -> f32 {
    let n = 12.0f32;
    let mean_x = x.iter().sum::<f32>() / n;
    let mean_y = y.iter().sum::<f32>() / n;

    let mut cov = 0.0f32;
    let mut var_x = 0.0f32;
    let mut var_y = 0.0f32;
    for i in 0..12 {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom > 1e-10 {
        cov / denom
    } else {
        0.0
    }
}
