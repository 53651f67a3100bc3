use crate::display;
use crate::models::{DisplayResult, SearchHit};

/// Keeps the hits scoring at least `threshold` and renders each into a
/// [`DisplayResult`], preserving the provider's order.
///
/// `threshold` must be finite and within `0..=100`.
pub fn process(hits: &[SearchHit], threshold: f32) -> Vec<DisplayResult> {
    debug_assert!(
        threshold.is_finite() && (0.0..=100.0).contains(&threshold),
        "threshold out of range: {}",
        threshold
    );

    log::debug!(
        "Similarities: {}",
        hits.iter()
            .map(|hit| hit.similarity.to_string())
            .collect::<Vec<String>>()
            .join(", ")
    );

    let results: Vec<DisplayResult> = hits
        .iter()
        .filter(|hit| hit.similarity >= threshold)
        .map(|hit| DisplayResult {
            photo_url: hit.thumbnail.clone(),
            text: display::result::format(hit),
        })
        .collect();

    log::info!(
        "{} hits left from {} with threshold {}",
        results.len(),
        hits.len(),
        threshold
    );

    results
}
