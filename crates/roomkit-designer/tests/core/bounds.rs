use roomkit_core::{ClampPolicy, FurnitureTemplate, FurnitureType, PlacedFurniture, Room};
use roomkit_designer::bounds::{BoundsEnforcer, Footprint};
use roomkit_designer::viewport::RoomPoint;

fn room() -> Room {
    Room::new("Bedroom", 4.0, 3.0, 2.5)
}

#[test]
fn test_center_only_ignores_footprint() {
    let enforcer = BoundsEnforcer::new(ClampPolicy::CenterOnly);
    let p = enforcer.clamp(
        RoomPoint::new(-1.0, 3.5),
        &room(),
        Some((Footprint::new(1.0, 1.0), 0.0)),
    );
    assert_eq!(p, RoomPoint::new(0.0, 3.0));
}

#[test]
fn test_inside_point_is_untouched() {
    let enforcer = BoundsEnforcer::default();
    let p = RoomPoint::new(1.2, 2.7);
    assert!(enforcer.contains(p, &room(), None));
    assert_eq!(enforcer.clamp(p, &room(), None), p);
}

#[test]
fn test_footprint_clamps_to_half_extents() {
    let enforcer = BoundsEnforcer::new(ClampPolicy::Footprint);
    let fp = Footprint::new(1.0, 0.6);
    let p = enforcer.clamp(RoomPoint::new(3.9, 0.0), &room(), Some((fp, 0.0)));
    assert!((p.x - 3.5).abs() < 1e-9);
    assert!((p.z - 0.3).abs() < 1e-9);
}

#[test]
fn test_footprint_at_45_degrees_uses_rotated_box() {
    let fp = Footprint::new(1.0, 1.0);
    let (hx, hz) = fp.half_extents(45.0);
    let expected = std::f64::consts::SQRT_2 / 2.0;
    assert!((hx - expected).abs() < 1e-9);
    assert!((hz - expected).abs() < 1e-9);
}

#[test]
fn test_footprint_without_template_falls_back_to_center() {
    let enforcer = BoundsEnforcer::new(ClampPolicy::Footprint);
    let mut item = PlacedFurniture::new("missing", -2.0, 9.0, "#000000");
    enforcer.clamp_placement(&mut item, &room(), None);
    assert_eq!((item.x, item.z), (0.0, 3.0));
}

#[test]
fn test_clamp_placement_uses_item_scale() {
    let enforcer = BoundsEnforcer::new(ClampPolicy::Footprint);
    let template =
        FurnitureTemplate::new("desk", "Desk", FurnitureType::Table, (1.0, 0.5, 0.7), "#FFFFFF");
    let mut item = PlacedFurniture::new("desk", 0.0, 0.0, "#FFFFFF");
    item.scale = 2.0;
    enforcer.clamp_placement(&mut item, &room(), Some(&template));
    assert!((item.x - 1.0).abs() < 1e-9);
    assert!((item.z - 0.5).abs() < 1e-9);
}

#[test]
fn test_oversized_axis_pins_to_room_middle() {
    let enforcer = BoundsEnforcer::new(ClampPolicy::Footprint);
    let p = enforcer.clamp(
        RoomPoint::new(0.2, 0.2),
        &room(),
        Some((Footprint::new(5.0, 0.5), 0.0)),
    );
    assert!((p.x - 2.0).abs() < 1e-9);
    assert!((p.z - 0.25).abs() < 1e-9);
}
