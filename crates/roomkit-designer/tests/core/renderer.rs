use roomkit_core::{
    FurnitureTemplate, FurnitureType, LightingOptions, MaterialPreset, ModelSource,
    PlacedFurniture, PlacementPatch,
};
use roomkit_designer::placement::PlacementStore;
use roomkit_designer::renderer::{Canvas2dAdapter, RenderAdapter, Scene3dAdapter};
use roomkit_designer::selection::Selection;
use roomkit_designer::viewport::ViewportSize;

fn templates() -> Vec<FurnitureTemplate> {
    let table = FurnitureTemplate::new(
        "table",
        "Table",
        FurnitureType::Table,
        (1.2, 0.8, 0.75),
        "#DEB887",
    );
    let mut lamp = FurnitureTemplate::new(
        "lamp",
        "Lamp",
        FurnitureType::Other,
        (0.3, 0.3, 1.6),
        "#FFFF00",
    );
    lamp.glb_model_path = Some("/models/lamp.glb".to_string());
    vec![table, lamp]
}

fn store() -> PlacementStore {
    let mut store = PlacementStore::new();
    store.load_catalog(templates());
    store.add_furniture("table").unwrap();
    store.add_furniture("lamp").unwrap();
    store
        .update_furniture(
            0,
            PlacementPatch::new().position(1.0, 4.0).rotation(30.0).scale(1.5),
        )
        .unwrap();
    store
}

#[test]
fn test_canvas_frame_geometry() {
    let store = store();
    let adapter = Canvas2dAdapter::new(ViewportSize::new(800.0, 600.0), 0.8);
    let frame = adapter.frame(&store, &Selection::new()).unwrap();

    assert!((frame.room.x - 160.0).abs() < 1e-9);
    assert!((frame.room.y - 60.0).abs() < 1e-9);
    assert!((frame.room.width - 480.0).abs() < 1e-9);
    assert!((frame.room.height - 480.0).abs() < 1e-9);
    assert_eq!(frame.room.floor_color, "#D2B48C");

    let table = &frame.items[0];
    assert!((table.center.x - (160.0 + 96.0)).abs() < 1e-9);
    assert!((table.center.y - (60.0 + 384.0)).abs() < 1e-9);
    assert!((table.width - 1.2 * 96.0 * 1.5).abs() < 1e-9);
    assert!((table.height - 0.8 * 96.0 * 1.5).abs() < 1e-9);
    assert_eq!(table.angle, 30.0);
    assert_eq!(table.fill, "#DEB887");
    assert!(!table.selected);
}

#[test]
fn test_scene_frame_nodes() {
    let store = store();
    let mut selection = Selection::new();
    selection.select(&store, 0);
    let frame = Scene3dAdapter::new().frame(&store, &selection).unwrap();

    let table = &frame.nodes[0];
    assert_eq!(table.position[0], 1.0);
    assert!((table.position[1] - 0.75 * 1.5 / 2.0).abs() < 1e-12);
    assert_eq!(table.position[2], 4.0);
    assert!((table.rotation_y - 30f64.to_radians()).abs() < 1e-12);
    assert_eq!(table.model, ModelSource::Box);
    let outline = table.outline.unwrap();
    assert!((outline[0] - (1.2 * 1.5 + 0.05)).abs() < 1e-12);

    assert_eq!(table.roughness, 0.7);
    assert_eq!(table.metalness, 0.3);
    assert_eq!(frame.lighting, LightingOptions::default());

    let lamp = &frame.nodes[1];
    assert_eq!(lamp.position[1], 0.0);
    assert_eq!(lamp.model, ModelSource::Glb("/models/lamp.glb".to_string()));
    assert!(lamp.outline.is_none());
}

#[test]
fn test_both_adapters_agree_on_position() {
    let store = store();
    let canvas = Canvas2dAdapter::new(ViewportSize::new(1024.0, 700.0), 0.8);
    let frame2d = canvas.frame(&store, &Selection::new()).unwrap();
    let frame3d = Scene3dAdapter::new().frame(&store, &Selection::new()).unwrap();

    for (rect, node) in frame2d.items.iter().zip(&frame3d.nodes) {
        assert_eq!(rect.placement_id, node.placement_id);
        let back = frame2d.transform.to_room(rect.center);
        assert!((back.x - node.position[0]).abs() < 1e-9);
        assert!((back.z - node.position[2]).abs() < 1e-9);

        let via_adapter = canvas.view_to_room(store.room(), rect.center).unwrap();
        assert!((via_adapter.x - back.x).abs() < 1e-12);
    }
}

#[test]
fn test_unknown_template_is_skipped_not_fatal() {
    let mut store = store();
    let mut design = store.serialize_design("With ghost");
    design
        .furniture
        .push(PlacedFurniture::new("ghost", 1.0, 1.0, "#000000"));
    store.load_design(&design).unwrap();
    assert_eq!(store.len(), 3);

    let frame2d = Canvas2dAdapter::default().frame(&store, &Selection::new()).unwrap();
    assert_eq!(frame2d.items.len(), 2);
    assert_eq!(frame2d.skipped.len(), 1);
    assert_eq!(frame2d.skipped[0].index, 2);
    assert_eq!(frame2d.skipped[0].furniture_id, "ghost");

    let frame3d = Scene3dAdapter::new().frame(&store, &Selection::new()).unwrap();
    assert_eq!(frame3d.nodes.len(), 2);
    assert_eq!(frame3d.skipped.len(), 1);
}

#[test]
fn test_selection_flag_on_canvas() {
    let store = store();
    let mut selection = Selection::new();
    selection.toggle(&store, 1);
    let frame = Canvas2dAdapter::default().frame(&store, &selection).unwrap();
    assert!(!frame.items[0].selected);
    assert!(frame.items[1].selected);
}

#[test]
fn test_scene_frame_carries_lighting_and_materials() {
    let mut store = store();
    store
        .update_furniture(1, PlacementPatch::new().material(MaterialPreset::Metal, "#D4AF37"))
        .unwrap();
    let lighting = LightingOptions {
        ambient_intensity: 0.2,
        directional_intensity: 1.5,
        shadows_enabled: false,
        light_color: "#ffe0b0".to_string(),
    };
    let frame = Scene3dAdapter::with_lighting(lighting.clone())
        .frame(&store, &Selection::new())
        .unwrap();

    assert_eq!(frame.lighting, lighting);
    assert_eq!(frame.lighting.fill_intensity(), 0.75);
    let lamp = &frame.nodes[1];
    assert_eq!(lamp.color, "#D4AF37");
    assert_eq!(lamp.roughness, 0.2);
    assert_eq!(lamp.metalness, 0.8);
}
