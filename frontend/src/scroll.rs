use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// How far the window has scrolled through a tall section, in `[0, 1]`.
/// The section is "done" once its bottom edge reaches the viewport bottom.
pub fn section_progress(scroll_y: f64, section_top: f64, section_height: f64, viewport_height: f64) -> f64 {
    let distance = section_height - viewport_height;
    if distance <= 0.0 {
        return 0.0;
    }
    ((scroll_y - section_top) / distance).clamp(0.0, 1.0)
}

pub fn chapter_index(progress: f64, chapters: usize) -> usize {
    if chapters == 0 {
        return 0;
    }
    let index = (progress.clamp(0.0, 1.0) * chapters as f64).floor() as usize;
    index.min(chapters - 1)
}

/// Progress inside the current chapter, in `[0, 1]`.
pub fn chapter_local_progress(progress: f64, chapters: usize) -> f64 {
    if chapters == 0 {
        return 0.0;
    }
    let scaled = progress.clamp(0.0, 1.0) * chapters as f64;
    (scaled - chapter_index(progress, chapters) as f64).clamp(0.0, 1.0)
}

/// Horizontal translation of the filmstrip track, in pixels (zero or negative).
pub fn filmstrip_offset(progress: f64, track_width: f64, viewport_width: f64) -> f64 {
    let overflow = (track_width - viewport_width).max(0.0);
    -progress.clamp(0.0, 1.0) * overflow
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LensTransform {
    pub scale: f64,
    pub rotate_deg: f64,
    pub aperture_opacity: f64,
}

impl LensTransform {
    pub fn barrel_style(&self) -> String {
        format!(
            "transform: rotateX(18deg) rotateZ({:.2}deg) scale({:.3});",
            self.rotate_deg, self.scale
        )
    }

    pub fn aperture_style(&self) -> String {
        format!("opacity: {:.3};", self.aperture_opacity)
    }
}

pub fn lens_transform(progress: f64) -> LensTransform {
    let p = progress.clamp(0.0, 1.0);
    LensTransform {
        scale: 1.0 + 0.6 * p,
        rotate_deg: 90.0 * p,
        aperture_opacity: 1.0 - p,
    }
}

/// Scroll progress through the element behind `node`. Re-renders on every
/// window scroll or resize; reads `0` until the element is mounted.
#[hook]
pub fn use_section_progress(node: NodeRef) -> f64 {
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();

    node.cast::<Element>()
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            section_progress(scroll_y, rect.top() + scroll_y, rect.height(), viewport_height)
        })
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_progress_clamps() {
        // section 3000px tall starting at 1000, viewport 1000
        assert_eq!(section_progress(0.0, 1000.0, 3000.0, 1000.0), 0.0);
        assert_eq!(section_progress(1000.0, 1000.0, 3000.0, 1000.0), 0.0);
        assert_eq!(section_progress(2000.0, 1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(section_progress(3000.0, 1000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(section_progress(9000.0, 1000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_section_shorter_than_viewport() {
        assert_eq!(section_progress(500.0, 0.0, 800.0, 1000.0), 0.0);
        assert_eq!(section_progress(500.0, 0.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_chapter_index_in_range() {
        assert_eq!(chapter_index(0.0, 4), 0);
        assert_eq!(chapter_index(0.24, 4), 0);
        assert_eq!(chapter_index(0.25, 4), 1);
        assert_eq!(chapter_index(0.99, 4), 3);
        assert_eq!(chapter_index(1.0, 4), 3);
        assert_eq!(chapter_index(1.5, 4), 3);
        assert_eq!(chapter_index(-1.0, 4), 0);
        assert_eq!(chapter_index(0.7, 0), 0);
    }

    #[test]
    fn test_chapter_local_progress() {
        assert!((chapter_local_progress(0.375, 4) - 0.5).abs() < 1e-9);
        assert_eq!(chapter_local_progress(1.0, 4), 1.0);
        assert_eq!(chapter_local_progress(0.5, 0), 0.0);
    }

    #[test]
    fn test_filmstrip_never_overshoots() {
        assert_eq!(filmstrip_offset(0.0, 4000.0, 1000.0), 0.0);
        assert_eq!(filmstrip_offset(0.5, 4000.0, 1000.0), -1500.0);
        assert_eq!(filmstrip_offset(1.0, 4000.0, 1000.0), -3000.0);
        assert_eq!(filmstrip_offset(2.0, 4000.0, 1000.0), -3000.0);
        // track fits in the viewport: nothing to scroll
        assert_eq!(filmstrip_offset(0.8, 600.0, 1000.0), 0.0);
    }

    #[test]
    fn test_lens_transform_endpoints() {
        let start = lens_transform(0.0);
        assert_eq!(start.scale, 1.0);
        assert_eq!(start.rotate_deg, 0.0);
        assert_eq!(start.aperture_opacity, 1.0);

        let end = lens_transform(1.0);
        assert!((end.scale - 1.6).abs() < 1e-9);
        assert_eq!(end.rotate_deg, 90.0);
        assert_eq!(end.aperture_opacity, 0.0);

        assert_eq!(lens_transform(3.0), end);
    }

    #[test]
    fn test_lens_styles() {
        let lens = lens_transform(0.5);
        assert_eq!(lens.barrel_style(), "transform: rotateX(18deg) rotateZ(45.00deg) scale(1.300);");
        assert_eq!(lens.aperture_style(), "opacity: 0.500;");
    }
}
