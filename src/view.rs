use crate::config::TRACKED_TERM_COUNT;
use crate::types::ViewSettingsUniform;

/// Render-loop state the overlay mutates: per-term visibility, the bubble
/// animation, and the camera orbit. Passed by reference into the renderer
/// each frame rather than living in ambient globals.
#[derive(Debug, Clone, Copy)]
pub struct ViewToggles {
    pub term_visible: [bool; TRACKED_TERM_COUNT],
    pub animate_markers: bool,
    pub rotate_camera: bool,
}

impl Default for ViewToggles {
    fn default() -> Self {
        Self {
            term_visible: [true; TRACKED_TERM_COUNT],
            animate_markers: false,
            rotate_camera: false,
        }
    }
}

impl ViewToggles {
    pub fn to_uniform(&self, marker_count: u32) -> ViewSettingsUniform {
        let mut term_visible = [0u32; TRACKED_TERM_COUNT];
        for (flag, visible) in term_visible.iter_mut().zip(self.term_visible) {
            *flag = visible as u32;
        }
        ViewSettingsUniform {
            term_visible,
            marker_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_everything_static() {
        let toggles = ViewToggles::default();
        assert_eq!(toggles.term_visible, [true; TRACKED_TERM_COUNT]);
        assert!(!toggles.animate_markers);
        assert!(!toggles.rotate_camera);
    }

    #[test]
    fn uniform_packs_flags_and_count() {
        let mut toggles = ViewToggles::default();
        toggles.term_visible[1] = false;

        let uniform = toggles.to_uniform(120);
        assert_eq!(uniform.term_visible, [1, 0, 1]);
        assert_eq!(uniform.marker_count, 120);
    }
}
