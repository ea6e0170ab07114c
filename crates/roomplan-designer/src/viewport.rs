//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between pixel coordinates (screen space) and room
//! coordinates (metres). Both spaces have their origin at the top-left with
//! y growing downwards, so the transform is a uniform scale plus pan.

use std::fmt;

use roomplan_core::constants::{
    DEFAULT_PIXELS_PER_METRE, MAX_ZOOM, MIN_ZOOM, VIEW_PADDING, ZOOM_IN_STEP, ZOOM_OUT_STEP,
};
use roomplan_core::units::pixels_per_unit;

use crate::model::{Bounds, Point};

/// Margin (pixels) between the canvas edge and the room origin.
const MARGIN: f64 = 20.0;

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
    pixels_per_metre: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport at 100% zoom with the room origin near the top-left.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: MARGIN,
            pan_y: MARGIN,
            canvas_width,
            canvas_height,
            pixels_per_metre: DEFAULT_PIXELS_PER_METRE,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }

    /// Overrides the base density and zoom bounds (from editor config).
    pub fn with_scale(mut self, pixels_per_metre: f64, min_zoom: f64, max_zoom: f64) -> Self {
        self.pixels_per_metre = pixels_per_metre;
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
        self
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the configured bounds.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        }
    }

    /// Zooms in one step; no-op once at the upper bound.
    pub fn zoom_in(&mut self) {
        if self.zoom < self.max_zoom {
            self.set_zoom(self.zoom * ZOOM_IN_STEP);
        }
    }

    /// Zooms out one step; no-op once at the lower bound.
    pub fn zoom_out(&mut self) {
        if self.zoom > self.min_zoom {
            self.set_zoom(self.zoom * ZOOM_OUT_STEP);
        }
    }

    /// Resets zoom to 1.0 (100%).
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0_f64.clamp(self.min_zoom, self.max_zoom);
    }

    /// Pixels per metre at the current zoom.
    pub fn scale(&self) -> f64 {
        pixels_per_unit(self.zoom, self.pixels_per_metre)
    }

    /// Converts a screen distance to metres.
    pub fn pixels_to_metres(&self, pixels: f64) -> f64 {
        pixels / self.scale()
    }

    /// Gets the pan offset (X coordinate).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta amount.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Resets pan to the default margin.
    pub fn reset_pan(&mut self) {
        self.pan_x = MARGIN;
        self.pan_y = MARGIN;
    }

    /// Converts pixel coordinates to room coordinates.
    ///
    /// ```text
    /// world = (pixel - pan) / (zoom * pixels_per_metre)
    /// ```
    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> Point {
        let scale = self.scale();
        Point::new((pixel_x - self.pan_x) / scale, (pixel_y - self.pan_y) / scale)
    }

    /// Converts room coordinates to pixel coordinates.
    pub fn world_to_pixel(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        let scale = self.scale();
        (world_x * scale + self.pan_x, world_y * scale + self.pan_y)
    }

    /// Converts room coordinates to pixel coordinates (using Point).
    pub fn world_point_to_pixel(&self, point: &Point) -> (f64, f64) {
        self.world_to_pixel(point.x, point.y)
    }

    /// Fits the given bounds into the viewport with padding (fraction of the
    /// canvas reserved on each side) and centres them.
    pub fn fit_to_bounds(&mut self, bounds: &Bounds, padding: f64) {
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return;
        }

        let padding_factor = 1.0 - (padding * 2.0);
        let scale_x = (self.canvas_width * padding_factor) / bounds.width();
        let scale_y = (self.canvas_height * padding_factor) / bounds.height();
        let new_zoom = (scale_x.min(scale_y) / self.pixels_per_metre)
            .clamp(self.min_zoom, self.max_zoom);
        self.zoom = new_zoom;

        let scale = self.scale();
        let content_width = bounds.width() * scale;
        let content_height = bounds.height() * scale;
        self.pan_x = (self.canvas_width - content_width) / 2.0 - bounds.min_x * scale;
        self.pan_y = (self.canvas_height - content_height) / 2.0 - bounds.min_y * scale;
    }

    /// Fits the viewport to show the bounds with the default padding.
    pub fn fit_to_view(&mut self, bounds: &Bounds) {
        self.fit_to_bounds(bounds, VIEW_PADDING);
    }

    /// Zooms while keeping `world_point` at the same screen position.
    pub fn zoom_to_point(&mut self, world_point: &Point, new_zoom: f64) {
        if !new_zoom.is_finite() {
            return;
        }
        let (pixel_x, pixel_y) = self.world_point_to_pixel(world_point);
        self.set_zoom(new_zoom);
        let scale = self.scale();
        self.pan_x = pixel_x - world_point.x * scale;
        self.pan_y = pixel_y - world_point.y * scale;
    }

    /// Resets viewport to default state (1:1 zoom, default pan).
    pub fn reset(&mut self) {
        self.reset_zoom();
        self.reset_pan();
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
