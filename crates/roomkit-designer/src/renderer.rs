//! Render adapters.
//!
//! An adapter turns the store's state into a backend-neutral frame: a list of
//! primitives in view space that a 2D canvas or a 3D scene graph can draw
//! directly. Adapters only read the store. Placements whose template is not
//! in the catalog are skipped and reported in the frame; a render pass never
//! fails because of one bad item.
//!
//! Both adapters go through the same [`ViewTransform`], so for every drawn
//! placement the 2D rectangle center maps back to the 3D node's x/z.

use roomkit_core::constants::{
    DEFAULT_METALNESS, DEFAULT_ROUGHNESS, SELECTION_OUTLINE_MARGIN, WALL_STROKE_WIDTH,
};
use roomkit_core::{
    FurnitureTemplate, LayoutError, LightingOptions, ModelSource, PlacedFurniture, Room,
};
use uuid::Uuid;

use crate::placement::PlacementStore;
use crate::selection::Selection;
use crate::viewport::{resolve_scale, RoomPoint, ViewPoint, ViewTransform, ViewportSize};

/// Produces frames for one rendering backend.
pub trait RenderAdapter {
    type Frame;

    /// The room-to-view mapping this backend uses for `room`.
    fn transform(&self, room: &Room) -> Result<ViewTransform, LayoutError>;

    /// Builds a frame for the store's current state.
    fn frame(
        &self,
        store: &PlacementStore,
        selection: &Selection,
    ) -> Result<Self::Frame, LayoutError>;
}

/// A placement left out of a frame because its template is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedItem {
    pub index: usize,
    pub placement_id: Uuid,
    pub furniture_id: String,
}

/// Walks the placements, pairing each with its template. Missing templates
/// are logged and collected instead.
fn resolve_items<'a>(
    store: &'a PlacementStore,
) -> (
    Vec<(usize, &'a PlacedFurniture, &'a FurnitureTemplate)>,
    Vec<SkippedItem>,
) {
    let mut drawable = Vec::with_capacity(store.len());
    let mut skipped = Vec::new();
    for (index, item) in store.placed_furniture().iter().enumerate() {
        match store.catalog().get(&item.furniture_id) {
            Some(template) => drawable.push((index, item, template)),
            None => {
                tracing::warn!(
                    "Skipping placement {} with unknown template '{}'",
                    index,
                    item.furniture_id
                );
                skipped.push(SkippedItem {
                    index,
                    placement_id: item.placement_id,
                    furniture_id: item.furniture_id.clone(),
                });
            }
        }
    }
    (drawable, skipped)
}

fn fill_color(item: &PlacedFurniture, template: &FurnitureTemplate) -> String {
    if item.color.is_empty() {
        template.default_color.clone()
    } else {
        item.color.clone()
    }
}

/// The room outline on the canvas, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub floor_color: String,
    pub wall_color: String,
    pub wall_stroke: f64,
}

/// One placement drawn as a rotated rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRect {
    pub index: usize,
    pub placement_id: Uuid,
    pub furniture_id: String,
    pub label: String,
    pub center: ViewPoint,
    pub width: f64,
    pub height: f64,
    /// Clockwise, in degrees.
    pub angle: f64,
    pub fill: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame2d {
    pub transform: ViewTransform,
    pub room: RoomRect,
    pub items: Vec<ItemRect>,
    pub skipped: Vec<SkippedItem>,
}

/// Top-down canvas backend. The room is fitted into the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas2dAdapter {
    viewport: ViewportSize,
    fit_margin: f64,
}

impl Canvas2dAdapter {
    pub fn new(viewport: ViewportSize, fit_margin: f64) -> Self {
        Self {
            viewport,
            fit_margin,
        }
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
    }

    /// Converts a pointer position on the canvas into room coordinates.
    pub fn view_to_room(&self, room: &Room, point: ViewPoint) -> Result<RoomPoint, LayoutError> {
        Ok(self.transform(room)?.to_room(point))
    }
}

impl Default for Canvas2dAdapter {
    fn default() -> Self {
        Self::new(ViewportSize::default(), roomkit_core::constants::FIT_MARGIN)
    }
}

impl RenderAdapter for Canvas2dAdapter {
    type Frame = Frame2d;

    fn transform(&self, room: &Room) -> Result<ViewTransform, LayoutError> {
        resolve_scale(room, self.viewport, self.fit_margin)
    }

    fn frame(&self, store: &PlacementStore, selection: &Selection) -> Result<Frame2d, LayoutError> {
        let room = store.room();
        let transform = self.transform(room)?;
        let corner = transform.to_view(RoomPoint::new(0.0, 0.0));

        let (drawable, skipped) = resolve_items(store);
        let items = drawable
            .into_iter()
            .map(|(index, item, template)| ItemRect {
                index,
                placement_id: item.placement_id,
                furniture_id: item.furniture_id.clone(),
                label: template.name.clone(),
                center: transform.to_view(RoomPoint::new(item.x, item.z)),
                width: transform.length_to_view(template.width * item.scale),
                height: transform.length_to_view(template.length * item.scale),
                angle: item.rotation,
                fill: fill_color(item, template),
                selected: selection.is_selected(item.placement_id),
            })
            .collect();

        Ok(Frame2d {
            transform,
            room: RoomRect {
                x: corner.x,
                y: corner.y,
                width: transform.length_to_view(room.width),
                height: transform.length_to_view(room.length),
                floor_color: room.floor_color.clone(),
                wall_color: room.wall_color.clone(),
                wall_stroke: WALL_STROKE_WIDTH,
            },
            items,
            skipped,
        })
    }
}

/// Floor and walls of the room, in meters.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomBox {
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub floor_color: String,
    pub wall_color: String,
}

/// One placement as a scene graph node.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub index: usize,
    pub placement_id: Uuid,
    pub furniture_id: String,
    /// `[x, y, z]`; `y` is the node's vertical center (zero for GLB models,
    /// whose origin sits on the floor).
    pub position: [f64; 3],
    /// Rotation about the vertical axis, in radians.
    pub rotation_y: f64,
    pub scale: f64,
    /// Unscaled model size `[width, height, length]`.
    pub size: [f64; 3],
    pub model: ModelSource,
    pub color: String,
    pub shade: f64,
    /// Surface finish; items without one get the default box material.
    pub roughness: f64,
    pub metalness: f64,
    /// Size of the selection box when this node is selected.
    pub outline: Option<[f64; 3]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame3d {
    pub room: RoomBox,
    pub lighting: LightingOptions,
    pub nodes: Vec<SceneNode>,
    pub skipped: Vec<SkippedItem>,
}

/// Perspective scene backend. Room meters map 1:1 to scene units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene3dAdapter {
    lighting: LightingOptions,
}

impl Scene3dAdapter {
    /// Adapter with the default scene lighting.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lighting(lighting: LightingOptions) -> Self {
        Self { lighting }
    }

    pub fn lighting(&self) -> &LightingOptions {
        &self.lighting
    }

    pub fn set_lighting(&mut self, lighting: LightingOptions) -> Result<(), LayoutError> {
        lighting.validate()?;
        self.lighting = lighting;
        Ok(())
    }
}

impl RenderAdapter for Scene3dAdapter {
    type Frame = Frame3d;

    fn transform(&self, _room: &Room) -> Result<ViewTransform, LayoutError> {
        Ok(ViewTransform::identity())
    }

    fn frame(&self, store: &PlacementStore, selection: &Selection) -> Result<Frame3d, LayoutError> {
        let room = store.room();
        let transform = self.transform(room)?;

        let (drawable, skipped) = resolve_items(store);
        let nodes = drawable
            .into_iter()
            .map(|(index, item, template)| {
                let model = template.model_source();
                let floor = transform.to_view(RoomPoint::new(item.x, item.z));
                let y = match model {
                    ModelSource::Glb(_) => 0.0,
                    _ => item.y + template.height * item.scale / 2.0,
                };
                let selected = selection.is_selected(item.placement_id);
                SceneNode {
                    index,
                    placement_id: item.placement_id,
                    furniture_id: item.furniture_id.clone(),
                    position: [floor.x, y, floor.y],
                    rotation_y: item.rotation.to_radians(),
                    scale: item.scale,
                    size: [template.width, template.height, template.length],
                    model,
                    color: fill_color(item, template),
                    shade: item.shade,
                    roughness: item.roughness.unwrap_or(DEFAULT_ROUGHNESS),
                    metalness: item.metalness.unwrap_or(DEFAULT_METALNESS),
                    outline: selected.then(|| {
                        [
                            template.width * item.scale + SELECTION_OUTLINE_MARGIN,
                            template.height * item.scale + SELECTION_OUTLINE_MARGIN,
                            template.length * item.scale + SELECTION_OUTLINE_MARGIN,
                        ]
                    }),
                }
            })
            .collect();

        Ok(Frame3d {
            room: RoomBox {
                width: room.width,
                length: room.length,
                height: room.height,
                floor_color: room.floor_color.clone(),
                wall_color: room.wall_color.clone(),
            },
            lighting: self.lighting.clone(),
            nodes,
            skipped,
        })
    }
}
