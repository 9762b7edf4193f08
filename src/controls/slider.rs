//! Drag-to-seek translation.
//!
//! Maps a pointer position on a horizontal track to a fraction in `[0, 1]`.
//! The same slider drives the scrubber (fraction × duration) and the volume
//! bar (fraction × 1.0).

/// Bounding geometry of a track at the moment of an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub left: f64,
    pub width: f64,
}

impl TrackGeometry {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Whether `x` lies on the track.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.left && x < self.left + self.width
    }
}

/// `(pointer_x - left) / width`, clamped to `[0, 1]`.
///
/// The pointer may be outside the track during a drag. A degenerate track
/// (zero or negative width) maps everything to 0.
pub fn fraction_at(pointer_x: f64, geometry: TrackGeometry) -> f64 {
    if geometry.width <= 0.0 || !geometry.width.is_finite() {
        return 0.0;
    }
    let value = (pointer_x - geometry.left) / geometry.width;
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Pointer interaction state of one track.
#[derive(Debug, Clone)]
pub struct Slider {
    geometry: TrackGeometry,
    dragging: bool,
}

impl Slider {
    pub fn new(geometry: TrackGeometry) -> Self {
        Self {
            geometry,
            dragging: false,
        }
    }

    /// Update geometry after a layout change.
    pub fn set_geometry(&mut self, geometry: TrackGeometry) {
        self.geometry = geometry;
    }

    pub fn geometry(&self) -> TrackGeometry {
        self.geometry
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer pressed on the track: start dragging.
    pub fn press(&mut self, x: f64) -> f64 {
        self.dragging = true;
        fraction_at(x, self.geometry)
    }

    /// Pointer moved while pressed. `None` when no drag is in progress.
    pub fn drag(&mut self, x: f64) -> Option<f64> {
        self.dragging.then(|| fraction_at(x, self.geometry))
    }

    /// Pointer released. `None` when no drag is in progress.
    pub fn release(&mut self, x: f64) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        Some(fraction_at(x, self.geometry))
    }
}
