use crate::config::TierFloors;
use crate::types::{Color, ContrastRating, ContrastReport, ThresholdLevel, TierResult};

use super::wcag::{contrast_ratio_with, LuminanceWeights};

/// Evaluate a color pair against a threshold table using WCAG weights.
///
/// Total over its domain: any two colors produce a report.
pub fn evaluate_contrast(a: Color, b: Color, thresholds: &[ThresholdLevel]) -> ContrastReport {
    evaluate_contrast_with(a, b, thresholds, LuminanceWeights::WCAG)
}

pub fn evaluate_contrast_with(
    a: Color,
    b: Color,
    thresholds: &[ThresholdLevel],
    weights: LuminanceWeights,
) -> ContrastReport {
    let ratio = contrast_ratio_with(a, b, weights);
    let report = classify(ratio, thresholds);
    tracing::debug!(
        first = %a,
        second = %b,
        ratio,
        rating = %report.rating,
        "evaluated contrast"
    );
    report
}

/// Map a ratio to pass flags and a rating.
///
/// AA/AAA floors come from the "AA (Minimum)" and "AAA (Enhanced)" tiers.
/// The rating checks run from the strictest floor down, so exactly one label
/// applies.
pub fn classify(ratio: f64, thresholds: &[ThresholdLevel]) -> ContrastReport {
    let floors = TierFloors::resolve(thresholds);

    let pass_aa = ratio >= floors.aa_normal;
    let pass_aa_large = ratio >= floors.aa_large;
    let pass_aaa = ratio >= floors.aaa_normal;

    let rating = if pass_aaa {
        ContrastRating::Excellent
    } else if pass_aa {
        ContrastRating::Good
    } else if pass_aa_large {
        ContrastRating::Poor
    } else {
        ContrastRating::Fail
    };

    let tiers = thresholds
        .iter()
        .map(|tier| TierResult {
            level: tier.level.clone(),
            pass_normal: ratio >= tier.normal_text,
            pass_large: ratio >= tier.large_text,
        })
        .collect();

    ContrastReport {
        ratio,
        is_fail: !pass_aa,
        pass_aa,
        pass_aa_large,
        pass_aaa,
        rating,
        tiers,
    }
}
