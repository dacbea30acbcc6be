use crate::country;
use crate::stats::CountryIndex;
use crate::viewport::Viewport;

/// Pointer position. Tooltip positions are container pixels; pan positions
/// are viewbox units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What a pan gesture started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Feature,
    Background,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub x: f64,
    pub y: f64,
    pub country: String,
    pub count: usize,
    pub code: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    HoverStart { country: String, at: Point },
    HoverMove { at: Point },
    HoverEnd,
    PanStart { at: Point, target: PointerTarget },
    PanMove { at: Point },
    PanEnd,
    ZoomIn,
    ZoomOut,
    Reset,
}

/// Transient hover/tooltip/pan/zoom state of one mounted map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapInteraction {
    pub hovered_country: Option<String>,
    pub tooltip: Option<Tooltip>,
    pub viewport: Viewport,
    pub is_panning: bool,
    /// Pointer position minus pan offset at pan start.
    pan_anchor: Point,
}

impl MapInteraction {
    pub fn apply(&mut self, event: MapEvent, index: &CountryIndex) {
        match event {
            MapEvent::HoverStart { country, at } => self.hover_start(country, at, index),
            MapEvent::HoverMove { at } => self.hover_move(at),
            MapEvent::HoverEnd => self.hover_end(),
            MapEvent::PanStart { at, target } => self.pan_start(at, target),
            MapEvent::PanMove { at } => self.pan_move(at),
            MapEvent::PanEnd => self.pan_end(),
            MapEvent::ZoomIn => self.viewport.zoom_in(),
            MapEvent::ZoomOut => self.viewport.zoom_out(),
            MapEvent::Reset => self.viewport.reset(),
        }
    }

    /// The hovered country is tracked even without data so the outline can
    /// highlight; the tooltip only appears for countries in the index and
    /// shows the name as written in the collection.
    pub fn hover_start(&mut self, country: String, at: Point, index: &CountryIndex) {
        self.tooltip = index.get(&country).map(|entry| Tooltip {
            x: at.x,
            y: at.y,
            country: entry.original_name.clone(),
            count: entry.count,
            code: country::code_for(&country),
        });
        self.hovered_country = Some(country);
    }

    pub fn hover_move(&mut self, at: Point) {
        if let Some(tooltip) = self.tooltip.as_mut() {
            tooltip.x = at.x;
            tooltip.y = at.y;
        }
    }

    pub fn hover_end(&mut self) {
        self.hovered_country = None;
        self.tooltip = None;
    }

    pub fn pan_start(&mut self, at: Point, target: PointerTarget) {
        if target != PointerTarget::Background {
            return;
        }
        self.is_panning = true;
        self.pan_anchor = Point::new(at.x - self.viewport.pan_x, at.y - self.viewport.pan_y);
    }

    pub fn pan_move(&mut self, at: Point) {
        if !self.is_panning {
            return;
        }
        self.viewport
            .pan_to(at.x - self.pan_anchor.x, at.y - self.pan_anchor.y);
    }

    pub fn pan_end(&mut self) {
        self.is_panning = false;
    }
}
