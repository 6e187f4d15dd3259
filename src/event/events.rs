use crate::path::Point;

/// Observable side effects of the signature pad
#[derive(Debug, Clone, PartialEq)]
pub enum PadEvent {
    /// The pointer went down and a new stroke began
    StrokeStarted {
        origin: Point,
    },
    /// A move passed the jitter threshold and grew the live path
    StrokeExtended {
        segments: usize,
    },
    /// The live path was baked into the raster surface
    StrokeCommitted {
        segments: usize,
    },
    Cleared,
    Resized {
        width: u32,
        height: u32,
    },
    /// The visible frame may have changed and should be redrawn
    RepaintRequested,
}
