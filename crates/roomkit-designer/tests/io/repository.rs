use roomkit_core::{
    Design, FurnitureTemplate, FurnitureType, LayoutError, PersistenceError, PlacedFurniture,
    PlacementPatch, Room,
};
use roomkit_designer::placement::PlacementStore;
use roomkit_designer::repository::{DesignRepository, InMemoryRepository, JsonDirRepository};
use tempfile::TempDir;

fn furnished_store() -> PlacementStore {
    let mut store = PlacementStore::new();
    store.load_catalog(vec![
        FurnitureTemplate::new("bed", "Bed", FurnitureType::Bed, (1.6, 2.0, 0.5), "#FFFFFF"),
        FurnitureTemplate::new("desk", "Desk", FurnitureType::Table, (1.2, 0.6, 0.75), "#654321"),
    ]);
    store.add_furniture("bed").unwrap();
    store.add_furniture("desk").unwrap();
    store
        .update_furniture(1, PlacementPatch::new().position(0.8, 4.2).rotation(90.0))
        .unwrap();
    store
}

#[test]
fn test_in_memory_crud() {
    let mut repo = InMemoryRepository::new();
    let created = repo
        .create(Design::new("Study", "room-1", "user1"))
        .unwrap();
    let id = created.id.clone().unwrap();
    assert!(id.starts_with("design-"));
    assert!(created.created_at.is_some());
    assert_eq!(repo.len(), 1);

    let mut renamed = created.clone();
    renamed.name = "Quiet study".to_string();
    let updated = repo.update(&id, renamed).unwrap();
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(repo.get(&id).unwrap().name, "Quiet study");

    repo.delete(&id).unwrap();
    assert!(repo.is_empty());
    assert!(matches!(
        repo.get(&id),
        Err(PersistenceError::DesignNotFound { .. })
    ));
}

#[test]
fn test_list_filters_by_user() {
    let mut repo = InMemoryRepository::new();
    repo.create(Design::new("A", "r", "alice")).unwrap();
    repo.create(Design::new("B", "r", "bob")).unwrap();
    repo.create(Design::new("C", "r", "alice")).unwrap();

    let names: Vec<_> = repo
        .list("alice")
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[test]
fn test_update_missing_design_fails() {
    let mut repo = InMemoryRepository::new();
    let err = repo
        .update("design-nope", Design::new("X", "r", "u"))
        .unwrap_err();
    assert!(matches!(err, PersistenceError::DesignNotFound { id } if id == "design-nope"));
}

#[test]
fn test_json_dir_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut repo = JsonDirRepository::open(dir.path().join("designs")).unwrap();
    let store = furnished_store();

    let saved = repo.create(store.serialize_design("Bedroom")).unwrap();
    let id = saved.id.clone().unwrap();
    assert!(repo.dir().join(format!("{id}.json")).exists());

    let loaded = repo.get(&id).unwrap();
    assert_eq!(loaded, saved);
    assert_eq!(repo.list("user1").unwrap().len(), 1);
    assert!(repo.list("someone-else").unwrap().is_empty());

    repo.delete(&id).unwrap();
    assert!(!repo.exists(&id));
}

#[test]
fn test_json_dir_rejects_path_like_ids() {
    let dir = TempDir::new().unwrap();
    let repo = JsonDirRepository::open(dir.path()).unwrap();
    assert!(matches!(
        repo.get("../escape"),
        Err(PersistenceError::Io(_))
    ));
}

#[test]
fn test_store_save_creates_then_updates() {
    let mut repo = InMemoryRepository::new();
    let mut store = furnished_store();

    let first = store.save_design(&mut repo, "Bedroom").unwrap();
    assert!(!store.is_modified());
    assert_eq!(store.display_name(), "Bedroom");

    store.rotate_right(0).unwrap();
    assert_eq!(store.display_name(), "Bedroom*");
    let second = store.save_design(&mut repo, "Bedroom v2").unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.get(first.id.as_deref().unwrap()).unwrap().name, "Bedroom v2");
}

#[test]
fn test_serialize_design_uses_temp_room_id() {
    let store = furnished_store();
    let design = store.serialize_design("Draft");
    assert_eq!(design.room_id, "temp-room-id");
    assert_eq!(design.user_id, "user1");
    assert_eq!(design.item_count(), 2);
    let details = design.room_details.unwrap();
    assert_eq!((details.width, details.length), (5.0, 5.0));
}

#[test]
fn test_load_design_restores_room_and_items() {
    let mut repo = InMemoryRepository::new();
    let mut source = furnished_store();
    source
        .set_room(Room::new("Loft", 8.0, 6.0, 3.2))
        .unwrap();
    let saved = source.save_design(&mut repo, "Loft plan").unwrap();

    let mut target = furnished_store();
    target.reset();
    target.load_design(&saved).unwrap();

    assert_eq!(target.room().width, 8.0);
    assert_eq!(target.room().id.as_deref(), Some("temp-room-id"));
    assert_eq!(target.placed_furniture(), source.placed_furniture());
    assert!(!target.is_modified());
    assert_eq!(target.current_design().unwrap().id, saved.id);
}

#[test]
fn test_load_design_normalizes_and_clamps() {
    let mut store = furnished_store();
    let mut design = store.serialize_design("Messy");
    design.furniture[0].x = 42.0;
    design.furniture[0].rotation = -30.0;
    let duplicate = design.furniture[0].placement_id;
    design.furniture[1].placement_id = duplicate;

    store.load_design(&design).unwrap();
    let items = store.placed_furniture();
    assert_eq!(items[0].x, 5.0);
    assert_eq!(items[0].rotation, 330.0);
    assert_ne!(items[0].placement_id, items[1].placement_id);
}

#[test]
fn test_load_design_with_invalid_room_is_rejected() {
    let mut store = furnished_store();
    let mut design = store.serialize_design("Broken");
    if let Some(details) = design.room_details.as_mut() {
        details.width = -4.0;
    }
    assert!(store.load_design(&design).is_err());
    assert_eq!(store.room().width, 5.0);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_load_design_rejects_invalid_placement_fields() {
    let mut store = furnished_store();
    let before = store.placed_furniture().to_vec();
    let mut design = store.serialize_design("Tampered");
    design.furniture[0].scale = -2.0;
    design.furniture[0].color = "red".to_string();
    design.furniture[0].shade = 500.0;
    design.furniture[0].roughness = Some(7.0);

    let err = store.load_design(&design).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidPlacement { ref field, .. } if field == "scale"));
    assert_eq!(store.placed_furniture(), &before[..]);
    assert!(store.current_design().is_none());

    let tampers: [fn(&mut PlacedFurniture); 4] = [
        |item| item.color = "red".to_string(),
        |item| item.shade = 500.0,
        |item| item.roughness = Some(7.0),
        |item| item.z = f64::NAN,
    ];
    for tamper in tampers {
        let mut design = store.serialize_design("Tampered");
        tamper(&mut design.furniture[1]);
        assert!(store.load_design(&design).is_err());
    }
    assert_eq!(store.placed_furniture(), &before[..]);
}

#[test]
fn test_load_design_limits_scale_to_range() {
    let mut store = furnished_store();
    let mut design = store.serialize_design("Oversized");
    design.furniture[0].scale = 50.0;
    store.load_design(&design).unwrap();
    assert_eq!(store.get(0).unwrap().scale, 2.0);
}

#[test]
fn test_delete_current_design_forgets_it() {
    let mut repo = InMemoryRepository::new();
    let mut store = furnished_store();
    let saved = store.save_design(&mut repo, "Temp").unwrap();

    store
        .delete_design(&mut repo, saved.id.as_deref().unwrap())
        .unwrap();
    assert!(store.current_design().is_none());
    assert!(repo.is_empty());

    let err = store.delete_design(&mut repo, "design-gone").unwrap_err();
    assert!(err.is_persistence_error());
}
