use rand::Rng;

use crate::config::TrackedTerm;
use crate::layout::{normalized_height, scatter_batch};
use crate::text::{find_occurrences, tokenize};
use crate::types::MarkerData;

/// Builds the term-scatter scene from raw source text.
///
/// One-shot pure pipeline: tokenize once, then for each tracked term locate
/// every occurrence, map its index to a height, and scatter a batch of
/// markers there. Markers are only ever appended; the scene never shrinks.
///
/// An empty token sequence short-circuits to an empty scene so the height
/// mapping is never evaluated against a zero token count.
pub fn create_term_scene(
    text: &str,
    terms: &[TrackedTerm],
    rng: &mut impl Rng,
) -> Vec<MarkerData> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        log::warn!("Source text produced no tokens; scene is empty");
        return Vec::new();
    }

    let mut markers = Vec::new();
    for (term_id, term) in terms.iter().enumerate() {
        let occurrences = find_occurrences(&tokens, &term.word);
        for &index in &occurrences {
            let height = normalized_height(index, tokens.len());
            markers.extend(scatter_batch(height, term_id as u32, term.color, rng));
        }
        println!(
            "  \"{}\": {} occurrences -> {} markers",
            term.word,
            occurrences.len(),
            occurrences.len() * crate::layout::MARKERS_PER_OCCURRENCE
        );
    }

    println!(
        "Scene created: {} markers from {} tokens",
        markers.len(),
        tokens.len()
    );
    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MARKERS_PER_OCCURRENCE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn terms() -> Vec<TrackedTerm> {
        vec![
            TrackedTerm::new("emma", [1.0, 0.75, 0.8]),
            TrackedTerm::new("knightley", [0.0, 1.0, 1.0]),
            TrackedTerm::new("churchill", [0.5, 0.0, 0.5]),
        ]
    }

    #[test]
    fn one_batch_per_occurrence() {
        let text = "Emma met emma. Knightley saw EMMA near churchill";
        let mut rng = StdRng::seed_from_u64(11);
        let markers = create_term_scene(text, &terms(), &mut rng);

        // 3 "emma" + 1 "knightley" + 1 "churchill" occurrences
        assert_eq!(markers.len(), 5 * MARKERS_PER_OCCURRENCE);
        let emma_markers = markers.iter().filter(|m| m.term_id() == 0).count();
        assert_eq!(emma_markers, 3 * MARKERS_PER_OCCURRENCE);
    }

    #[test]
    fn empty_document_yields_empty_scene() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(create_term_scene("", &terms(), &mut rng).is_empty());
        assert!(create_term_scene(" ,. ;; ", &terms(), &mut rng).is_empty());
    }

    #[test]
    fn absent_terms_yield_zero_markers() {
        let mut rng = StdRng::seed_from_u64(5);
        let markers = create_term_scene("nothing matches here", &terms(), &mut rng);
        assert!(markers.is_empty());
    }

    #[test]
    fn marker_heights_stay_in_band() {
        let text = "emma ".repeat(200);
        let mut rng = StdRng::seed_from_u64(42);
        let markers = create_term_scene(&text, &terms(), &mut rng);

        assert!(!markers.is_empty());
        for marker in &markers {
            assert!(
                marker.center[1] >= -10.0 && marker.center[1] < 10.0,
                "marker y {} outside the dropped band",
                marker.center[1]
            );
        }
    }
}
