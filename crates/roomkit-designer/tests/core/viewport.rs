use proptest::prelude::*;
use roomkit_core::{LayoutError, Room};
use roomkit_designer::viewport::{resolve_scale, RoomPoint, ViewPoint, ViewTransform, ViewportSize};

#[test]
fn test_fit_square_room_in_default_viewport() {
    let room = Room::new("Square", 5.0, 5.0, 3.0);
    let t = resolve_scale(&room, ViewportSize::new(800.0, 600.0), 0.8).unwrap();
    assert!((t.scale() - 96.0).abs() < 1e-9);
    assert!((t.origin_x() - 160.0).abs() < 1e-9);
    assert!((t.origin_z() - 60.0).abs() < 1e-9);
}

#[test]
fn test_fit_is_limited_by_tighter_axis() {
    // 10 x 2 room: width limits (800/10 = 80 < 600/2 = 300)
    let room = Room::new("Hall", 10.0, 2.0, 3.0);
    let t = resolve_scale(&room, ViewportSize::new(800.0, 600.0), 0.8).unwrap();
    assert!((t.scale() - 64.0).abs() < 1e-9);
    // Room is centered on both axes
    assert!((t.origin_x() - 80.0).abs() < 1e-9);
    assert!((t.origin_z() - (600.0 - 128.0) / 2.0).abs() < 1e-9);
}

#[test]
fn test_room_corners_map_inside_viewport() {
    let room = Room::new("Office", 4.0, 7.0, 2.5);
    let vp = ViewportSize::new(1024.0, 768.0);
    let t = resolve_scale(&room, vp, 0.8).unwrap();
    let near = t.to_view(RoomPoint::new(0.0, 0.0));
    let far = t.to_view(RoomPoint::new(room.width, room.length));
    assert!(near.x >= 0.0 && near.y >= 0.0);
    assert!(far.x <= vp.width && far.y <= vp.height);
}

#[test]
fn test_zero_viewport_is_degenerate() {
    let room = Room::default();
    let err = resolve_scale(&room, ViewportSize::new(0.0, 600.0), 0.8).unwrap_err();
    assert!(matches!(err, LayoutError::DegenerateScale { .. }));
}

#[test]
fn test_invalid_fit_margin_is_rejected() {
    let room = Room::default();
    assert!(resolve_scale(&room, ViewportSize::default(), 0.0).is_err());
    assert!(resolve_scale(&room, ViewportSize::default(), 1.5).is_err());
    assert!(resolve_scale(&room, ViewportSize::default(), 1.0).is_ok());
}

#[test]
fn test_room_center_maps_to_viewport_center() {
    let room = Room::new("Den", 6.0, 3.0, 2.4);
    let t = resolve_scale(&room, ViewportSize::new(800.0, 600.0), 0.8).unwrap();
    let c = t.to_view(RoomPoint::new(3.0, 1.5));
    assert!((c.x - 400.0).abs() < 1e-9);
    assert!((c.y - 300.0).abs() < 1e-9);
}

#[test]
fn test_lengths_scale_both_ways() {
    let t = ViewTransform::new(50.0, 10.0, 20.0).unwrap();
    assert_eq!(t.length_to_view(2.0), 100.0);
    assert_eq!(t.length_to_room(25.0), 0.5);
}

#[test]
fn test_to_room_inverts_pointer_position() {
    let t = ViewTransform::new(96.0, 160.0, 60.0).unwrap();
    let p = t.to_room(ViewPoint::new(160.0 + 96.0, 60.0 + 192.0));
    assert!((p.x - 1.0).abs() < 1e-12);
    assert!((p.z - 2.0).abs() < 1e-12);
}

proptest! {
    #[test]
    fn prop_room_view_round_trip(
        width in 0.5f64..50.0,
        length in 0.5f64..50.0,
        fx in 0.0f64..=1.0,
        fz in 0.0f64..=1.0,
    ) {
        let room = Room::new("Any", width, length, 3.0);
        let t = resolve_scale(&room, ViewportSize::new(800.0, 600.0), 0.8).unwrap();
        let p = RoomPoint::new(fx * width, fz * length);
        let back = t.to_room(t.to_view(p));
        prop_assert!((back.x - p.x).abs() < 1e-9);
        prop_assert!((back.z - p.z).abs() < 1e-9);
    }
}
