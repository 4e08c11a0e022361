//! Camera module for pan/zoom transforms.

use crate::config::{CanvasConfig, ConfigError};
use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Zoom level that corresponds to "100%".
pub const BASE_ZOOM: f64 = 1.0;

/// Direction of a single wheel notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelDirection {
    /// Zoom in (scale grows).
    In,
    /// Zoom out (scale shrinks).
    Out,
}

impl WheelDirection {
    /// Map a vertical wheel delta to a zoom direction.
    ///
    /// Scrolling up (negative delta) zooms in. A zero delta, as sent by
    /// purely horizontal scrolls, is not a zoom.
    pub fn from_delta(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(WheelDirection::In)
        } else if delta_y > 0.0 {
            Some(WheelDirection::Out)
        } else {
            None
        }
    }
}

/// Camera manages the view transform for the canvas.
///
/// `screen = world * zoom + offset`. The zoom is always kept inside
/// `[min_zoom, max_zoom]` with a positive minimum, so the transform stays
/// invertible. Deserialized cameras are checked the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CameraState")]
pub struct Camera {
    /// Current translation offset (pan), in screen units.
    pub offset: Vec2,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
}

/// Unchecked camera fields as they appear on the wire.
#[derive(Deserialize)]
struct CameraState {
    offset: Vec2,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
}

impl TryFrom<CameraState> for Camera {
    type Error = ConfigError;

    fn try_from(state: CameraState) -> Result<Self, Self::Error> {
        let config = CanvasConfig {
            zoom_step: state.zoom_step,
            min_zoom: state.min_zoom,
            max_zoom: state.max_zoom,
            ..CanvasConfig::default()
        };
        let mut camera = Camera::from_config(&config)?;
        if !(state.offset.x.is_finite() && state.offset.y.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "camera offset must be finite, got {:?}",
                state.offset
            )));
        }
        if !camera.set_zoom(state.zoom) {
            return Err(ConfigError::Invalid(format!(
                "camera zoom must be positive, got {}",
                state.zoom
            )));
        }
        camera.offset = state.offset;
        Ok(camera)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::with_bounds(&CanvasConfig::default())
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera using the zoom settings of a config.
    pub fn from_config(config: &CanvasConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_bounds(config))
    }

    /// Build from a config that already passed [`CanvasConfig::validate`].
    pub(crate) fn with_bounds(config: &CanvasConfig) -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: BASE_ZOOM.clamp(config.min_zoom, config.max_zoom),
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            zoom_step: config.zoom_step,
        }
    }

    /// Current zoom level.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Factor applied per wheel notch.
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Set the zoom level directly, clamped to the zoom bounds.
    ///
    /// Returns `false` and leaves the camera untouched for non-finite or
    /// non-positive values.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        if !zoom.is_finite() || zoom <= 0.0 {
            log::warn!("Ignoring invalid zoom level {}", zoom);
            return false;
        }
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        true
    }

    /// Get the affine transform for rendering (world to screen).
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Get the inverse transform for input handling (screen to world).
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.offset)
    }

    /// Convert a screen point to world coordinates.
    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    /// Convert a world point to screen coordinates.
    pub fn world_to_screen(&self, world_point: Point) -> Point {
        self.transform() * world_point
    }

    /// Pan the camera by a delta in screen coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Zoom one wheel notch, keeping the given screen point fixed.
    pub fn zoom_at(&mut self, screen_point: Point, direction: WheelDirection) {
        let factor = match direction {
            WheelDirection::In => self.zoom_step,
            WheelDirection::Out => 1.0 / self.zoom_step,
        };
        self.zoom_by(screen_point, factor);
    }

    /// Zoom by an arbitrary factor, keeping the given screen point fixed.
    pub fn zoom_by(&mut self, screen_point: Point, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            log::warn!("Ignoring invalid zoom factor {}", factor);
            return;
        }

        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        // World point under the cursor before the zoom
        let world_point = self.screen_to_world(screen_point);

        self.zoom = new_zoom;

        // Shift so that world_point maps back to screen_point
        let new_screen = self.world_to_screen(world_point);
        self.offset += screen_point - new_screen;
    }

    /// Reset camera to default position and zoom.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.zoom = BASE_ZOOM.clamp(self.min_zoom, self.max_zoom);
    }

    /// Fit the camera to show the given bounding box centered in the viewport.
    pub fn fit_to_bounds(&mut self, bounds: kurbo::Rect, viewport: kurbo::Size, padding: f64) {
        if bounds.is_zero_area() {
            self.reset();
            return;
        }

        let padded_viewport = kurbo::Size::new(
            (viewport.width - padding * 2.0).max(1.0),
            (viewport.height - padding * 2.0).max(1.0),
        );

        let scale_x = padded_viewport.width / bounds.width();
        let scale_y = padded_viewport.height / bounds.height();
        self.zoom = scale_x.min(scale_y).clamp(self.min_zoom, self.max_zoom);

        let bounds_center = bounds.center();
        let viewport_center = Point::new(viewport.width / 2.0, viewport.height / 2.0);

        self.offset = Vec2::new(
            viewport_center.x - bounds_center.x * self.zoom,
            viewport_center.y - bounds_center.y * self.zoom,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point_eq(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-9, "{:?} != {:?}", a, b);
        assert!((a.y - b.y).abs() < 1e-9, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_default_camera() {
        let camera = Camera::new();
        assert_eq!(camera.offset, Vec2::ZERO);
        assert!((camera.zoom - BASE_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_world_identity() {
        let camera = Camera::new();
        let screen = Point::new(100.0, 200.0);
        assert_point_eq(camera.screen_to_world(screen), screen);
    }

    #[test]
    fn test_screen_to_world_with_offset() {
        let mut camera = Camera::new();
        camera.offset = Vec2::new(50.0, 100.0);
        let world = camera.screen_to_world(Point::new(100.0, 200.0));
        assert_point_eq(world, Point::new(50.0, 100.0));
    }

    #[test]
    fn test_screen_to_world_with_zoom() {
        let mut camera = Camera::new();
        camera.zoom = 2.0;
        let world = camera.screen_to_world(Point::new(100.0, 200.0));
        assert_point_eq(world, Point::new(50.0, 100.0));
    }

    #[test]
    fn test_roundtrip_conversion() {
        let mut camera = Camera::new();
        camera.offset = Vec2::new(30.0, -20.0);
        camera.zoom = 1.5;

        let original = Point::new(123.0, 456.0);
        let back = camera.world_to_screen(camera.screen_to_world(original));
        assert_point_eq(back, original);
    }

    #[test]
    fn test_wheel_direction() {
        assert_eq!(WheelDirection::from_delta(-3.0), Some(WheelDirection::In));
        assert_eq!(WheelDirection::from_delta(120.0), Some(WheelDirection::Out));
        assert_eq!(WheelDirection::from_delta(0.0), None);
    }

    #[test]
    fn test_zoom_step() {
        let mut camera = Camera::new();
        camera.zoom_at(Point::ZERO, WheelDirection::In);
        assert!((camera.zoom - 1.1).abs() < 1e-12);
        camera.zoom_at(Point::ZERO, WheelDirection::Out);
        assert!((camera.zoom - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_keeps_point_under_cursor() {
        let mut camera = Camera::new();
        camera.offset = Vec2::new(-40.0, 75.0);
        let cursors = [
            Point::new(0.0, 0.0),
            Point::new(450.0, 300.0),
            Point::new(899.0, 12.5),
            Point::new(-20.0, 640.0),
        ];
        let directions = [
            WheelDirection::In,
            WheelDirection::In,
            WheelDirection::Out,
            WheelDirection::In,
            WheelDirection::Out,
            WheelDirection::Out,
            WheelDirection::Out,
        ];

        for &cursor in &cursors {
            for &direction in &directions {
                let before = camera.screen_to_world(cursor);
                camera.zoom_at(cursor, direction);
                let after = camera.screen_to_world(cursor);
                assert_point_eq(before, after);
            }
        }
    }

    #[test]
    fn test_zoom_clamp() {
        let mut camera = Camera::new();
        camera.zoom_by(Point::ZERO, 0.001);
        assert!((camera.zoom - camera.min_zoom).abs() < f64::EPSILON);

        camera.zoom = 1.0;
        camera.zoom_by(Point::ZERO, 1000.0);
        assert!((camera.zoom - camera.max_zoom).abs() < f64::EPSILON);
    }

    #[test]
    fn test_repeated_zoom_out_stays_positive() {
        let mut camera = Camera::new();
        let cursor = Point::new(320.0, 240.0);
        for _ in 0..500 {
            camera.zoom_at(cursor, WheelDirection::Out);
        }
        assert!(camera.zoom > 0.0);
        assert!((camera.zoom - camera.min_zoom).abs() < f64::EPSILON);

        // Still invertible at the bound
        let world = camera.screen_to_world(cursor);
        assert_point_eq(camera.world_to_screen(world), cursor);
    }

    #[test]
    fn test_invalid_factor_ignored() {
        let mut camera = Camera::new();
        camera.zoom_by(Point::ZERO, 0.0);
        camera.zoom_by(Point::ZERO, -2.0);
        camera.zoom_by(Point::ZERO, f64::NAN);
        assert!((camera.zoom - BASE_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pan() {
        let mut camera = Camera::new();
        camera.pan(Vec2::new(10.0, 20.0));
        assert!((camera.offset.x - 10.0).abs() < f64::EPSILON);
        assert!((camera.offset.y - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_config_rejects_inverted_bounds() {
        let config = CanvasConfig {
            min_zoom: 5.0,
            max_zoom: 2.0,
            ..CanvasConfig::default()
        };
        assert!(matches!(Camera::from_config(&config), Err(ConfigError::Invalid(_))));

        let camera = Camera::from_config(&CanvasConfig::default()).unwrap();
        assert!((camera.zoom() - BASE_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_zoom_rejects_non_positive() {
        let mut camera = Camera::new();
        assert!(!camera.set_zoom(0.0));
        assert!(!camera.set_zoom(-1.0));
        assert!(!camera.set_zoom(f64::INFINITY));
        assert!((camera.zoom() - BASE_ZOOM).abs() < f64::EPSILON);

        assert!(camera.set_zoom(50.0));
        assert!((camera.zoom() - camera.max_zoom()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_checks_zoom() {
        let json = r#"{"offset":{"x":10.0,"y":-5.0},"zoom":2.5,"min_zoom":0.1,"max_zoom":10.0,"zoom_step":1.1}"#;
        let camera: Camera = serde_json::from_str(json).unwrap();
        assert!((camera.zoom() - 2.5).abs() < f64::EPSILON);
        assert_eq!(camera.offset, Vec2::new(10.0, -5.0));

        let zero = r#"{"offset":{"x":0.0,"y":0.0},"zoom":0.0,"min_zoom":0.1,"max_zoom":10.0,"zoom_step":1.1}"#;
        assert!(serde_json::from_str::<Camera>(zero).is_err());

        let inverted = r#"{"offset":{"x":0.0,"y":0.0},"zoom":1.0,"min_zoom":5.0,"max_zoom":2.0,"zoom_step":1.1}"#;
        assert!(serde_json::from_str::<Camera>(inverted).is_err());
    }

    #[test]
    fn test_serialize_roundtrip_keeps_zoom() {
        let mut camera = Camera::new();
        camera.zoom_at(Point::new(40.0, 40.0), WheelDirection::In);
        let json = serde_json::to_string(&camera).unwrap();
        let back: Camera = serde_json::from_str(&json).unwrap();
        assert!((back.zoom() - camera.zoom()).abs() < f64::EPSILON);
        assert_eq!(back.offset, camera.offset);
    }

    #[test]
    fn test_fit_to_bounds_centers() {
        let mut camera = Camera::new();
        let bounds = kurbo::Rect::new(0.0, 0.0, 400.0, 200.0);
        let viewport = kurbo::Size::new(900.0, 600.0);
        camera.fit_to_bounds(bounds, viewport, 50.0);

        assert!((camera.zoom - 2.0).abs() < 1e-12);
        let center = camera.world_to_screen(bounds.center());
        assert_point_eq(center, Point::new(450.0, 300.0));
    }
}
