use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

use crate::types::MarkerData;

/// Markers spawned per term occurrence
pub const MARKERS_PER_OCCURRENCE: usize = 5;

/// Half-extent of the random x/z jitter around the scene axis
pub const JITTER_EXTENT: f32 = 5.0;

/// Shifts the [0, 20) height band down to roughly [-10, 10)
pub const BAND_DROP: f32 = 10.0;

pub const MARKER_RADIUS: f32 = 0.5;

/// Drift applied to low markers while the animate toggle is on,
/// in world units per second (~0.1 per frame at 60 fps)
pub const DRIFT_SPEED: f32 = 6.0;

/// Maps an occurrence index to its vertical seed in [0, 20).
///
/// The height is proportional to where in the document the occurrence sits,
/// so a term's vertical spread mirrors its distribution across the text.
/// `token_count` must be nonzero; callers guard the empty-document case.
pub fn normalized_height(index: usize, token_count: usize) -> f32 {
    debug_assert!(token_count > 0, "height is undefined for an empty document");
    (100.0 / token_count as f32) * index as f32 * 0.2
}

/// Spawns one batch of jittered markers clustered around `height`.
///
/// x and z are uniform in the jitter extent, y is the height dropped into
/// the centered band, and each marker gets a random rotation and a random
/// scalar tag for later animation variation.
pub fn scatter_batch(
    height: f32,
    term_id: u32,
    color: [f32; 3],
    rng: &mut impl Rng,
) -> [MarkerData; MARKERS_PER_OCCURRENCE] {
    std::array::from_fn(|_| {
        let center = Vec3::new(
            rng.gen_range(-JITTER_EXTENT..JITTER_EXTENT),
            height - BAND_DROP,
            rng.gen_range(-JITTER_EXTENT..JITTER_EXTENT),
        );
        let rotation = Vec3::new(
            rng.gen_range(0.0..TAU),
            rng.gen_range(0.0..TAU),
            rng.gen_range(0.0..TAU),
        );
        MarkerData::new(center, MARKER_RADIUS, rotation, color, term_id, rng.gen::<f32>())
    })
}

/// Drifts markers below the midline along +z.
///
/// Mirrors the bubble animation: only markers in the lower half of the band
/// move, and the drift accumulates for as long as the toggle stays on.
pub fn drift_markers(markers: &mut [MarkerData], dt: f32) {
    for marker in markers {
        if marker.center[1] < 0.0 {
            marker.center[2] += DRIFT_SPEED * dt;
        }
    }
}
