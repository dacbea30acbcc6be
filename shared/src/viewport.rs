/// Pan/zoom applied to the map group, in viewbox units.
///
/// Rendered as `translate(pan) scale(zoom)`, so the pan offset is applied
/// after scaling and is not itself scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 4.0;
pub const ZOOM_STEP: f64 = 1.2;

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: MIN_ZOOM,
        }
    }
}

impl Viewport {
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < MAX_ZOOM
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > MIN_ZOOM
    }

    pub fn pan_to(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Stroke width that stays visually constant under zoom.
    pub fn stroke_width(&self, base: f64) -> f64 {
        base / self.zoom
    }

    /// SVG `transform` attribute for the map group.
    pub fn transform(&self) -> String {
        format!(
            "translate({}, {}) scale({})",
            self.pan_x, self.pan_y, self.zoom
        )
    }
}
