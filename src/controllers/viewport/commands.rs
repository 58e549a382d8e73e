use crate::controllers::viewport::explicit_view::ExplicitView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zoom {
    In,
    Out,
}

impl Zoom {
    /// Multiplier applied to the scale.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::In => 0.5,
            Self::Out => 2.0,
        }
    }
}

/// A single user action, as delivered by whatever front end drives the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewportCommand {
    /// Pointer moved by `(dx, dy)` pixels while dragging; the image follows it.
    Pan { dx: f64, dy: f64 },
    /// Recentre on pixel `(x, y)` and zoom.
    ZoomAt { x: f64, y: f64, zoom: Zoom },
    SetExplicit(ExplicitView),
    Reset,
    SelectCoordinatePreset(usize),
    SelectPalettePreset(usize),
    SelectColourMode(usize),
    Resize { width: u32, height: u32 },
}
