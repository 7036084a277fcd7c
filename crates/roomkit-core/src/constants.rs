//! Layout constants shared across crates.

/// Fraction of the viewport the room occupies when fitted (the rest is whitespace).
pub const FIT_MARGIN: f64 = 0.8;

/// Viewport used by the 2D canvas when the host reports no size.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;

/// Degrees applied by a single rotate-left / rotate-right action.
pub const ROTATION_STEP_DEGREES: f64 = 15.0;

/// Default range a placement's scale is limited to.
pub const MIN_ITEM_SCALE: f64 = 0.1;
pub const MAX_ITEM_SCALE: f64 = 2.0;

/// Upper bound of the shade intensity field.
pub const MAX_SHADE: f64 = 100.0;

/// Extra size (meters) of the 3D selection outline around a furniture box.
pub const SELECTION_OUTLINE_MARGIN: f64 = 0.05;

/// Stroke width (pixels) of the room walls on the 2D canvas.
pub const WALL_STROKE_WIDTH: f64 = 10.0;

/// Tolerance for floating point comparisons in layout math.
pub const EPSILON: f64 = 1e-9;

/// Scene lighting defaults of the 3D view.
pub const AMBIENT_INTENSITY: f64 = 0.5;
pub const DIRECTIONAL_INTENSITY: f64 = 1.0;
pub const MAX_DIRECTIONAL_INTENSITY: f64 = 1.5;
pub const LIGHT_COLOR: &str = "#ffffff";

/// Surface finish of a furniture box with no explicit material.
pub const DEFAULT_ROUGHNESS: f64 = 0.7;
pub const DEFAULT_METALNESS: f64 = 0.3;
