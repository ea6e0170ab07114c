//! Shared numeric constants.

/// Exact length of one international foot in metres.
pub const METRES_PER_FOOT: f64 = 0.3048;

/// Exact length of one international inch in metres.
pub const METRES_PER_INCH: f64 = 0.0254;

/// Default grid cell (50 cm).
pub const DEFAULT_GRID_CELL_M: f64 = 0.5;

/// Pixel density at 100% zoom.
pub const DEFAULT_PIXELS_PER_METRE: f64 = 60.0;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 5.0;
pub const ZOOM_IN_STEP: f64 = 1.2;
pub const ZOOM_OUT_STEP: f64 = 0.8;

/// Startup room: 16 ft wide.
pub const DEFAULT_ROOM_WIDTH_M: f64 = 16.0 * METRES_PER_FOOT;

/// Startup room: 12 ft deep.
pub const DEFAULT_ROOM_DEPTH_M: f64 = 12.0 * METRES_PER_FOOT;

pub const DEFAULT_ROOM_NAME: &str = "My Room";

/// Pointer travel (in pixels) before a press becomes a drag.
pub const DRAG_THRESHOLD_PX: f64 = 3.0;

/// Offset applied to pasted items so they do not sit exactly on the source.
pub const DEFAULT_PASTE_OFFSET_M: f64 = 0.25;

/// Padding (fraction of the viewport) used when fitting the room into view.
pub const VIEW_PADDING: f64 = 0.05;
