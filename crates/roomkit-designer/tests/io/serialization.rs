use roomkit_core::{Design, FurnitureType, PersistenceError};
use roomkit_designer::placement::PlacementStore;
use roomkit_designer::serialization::{
    load_catalog_file, load_design_file, parse_envelope, save_design_file, ApiEnvelope, ApiMessage,
};
use tempfile::TempDir;

const CATALOG_JSON: &str = r##"[
    {
        "_id": "64f0c1a2b3",
        "name": "Armchair",
        "type": "chair",
        "width": 0.8,
        "length": 0.8,
        "height": 1.0,
        "color": "#8B4513",
        "defaultColor": "#8B4513",
        "modelUrl": "/models/armchair.obj",
        "thumbnailUrl": "/thumbs/armchair.png",
        "objModelPath": "/models/armchair.obj"
    },
    {
        "_id": "64f0c1a2b4",
        "name": "Dining table",
        "type": "table",
        "width": 1.8,
        "length": 0.9,
        "height": 0.75,
        "defaultColor": "#DEB887"
    }
]"##;

#[test]
fn test_load_catalog_from_bare_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, CATALOG_JSON).unwrap();

    let templates = load_catalog_file(&path).unwrap();
    assert_eq!(templates.len(), 2);
    assert_eq!(templates[0].id, "64f0c1a2b3");
    assert_eq!(templates[0].category, FurnitureType::Chair);
    assert_eq!(templates[1].color, "");

    let mut store = PlacementStore::new();
    assert_eq!(store.load_catalog(templates), 2);
    store.add_furniture("64f0c1a2b4").unwrap();
    assert_eq!(store.get(0).unwrap().color, "#DEB887");
}

#[test]
fn test_load_catalog_from_envelope() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("furniture.json");
    let body = format!(r#"{{ "success": true, "count": 2, "data": {CATALOG_JSON} }}"#);
    std::fs::write(&path, body).unwrap();

    let templates = load_catalog_file(&path).unwrap();
    assert_eq!(templates.len(), 2);
}

#[test]
fn test_rejected_catalog_envelope_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("furniture.json");
    std::fs::write(&path, r#"{ "success": false, "message": "Server Error" }"#).unwrap();

    let err = load_catalog_file(&path).unwrap_err();
    let rejected = err.downcast_ref::<PersistenceError>().unwrap();
    assert!(
        matches!(rejected, PersistenceError::Rejected { message } if message == "Server Error")
    );
}

#[test]
fn test_design_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.json");

    let mut store = PlacementStore::new();
    store.load_catalog(load_catalog_str());
    store.add_furniture("64f0c1a2b3").unwrap();
    store.rotate_left(0).unwrap();
    let design = store.serialize_design("Living room");

    save_design_file(&design, &path).unwrap();
    let loaded = load_design_file(&path).unwrap();
    assert_eq!(loaded, design);

    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"furnitureId\""));
    assert!(json.contains("\"roomDetails\""));
    assert!(json.contains("\"placementId\""));
}

#[test]
fn test_load_design_from_backend_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("design.json");
    let body = r##"{
        "success": true,
        "data": {
            "_id": "65a1",
            "name": "Kids room",
            "roomId": "room-7",
            "userId": "user1",
            "furniture": [
                { "furnitureId": "64f0c1a2b3", "x": 1.0, "y": 0, "z": 2.0, "rotation": 45, "color": "#FF0000" }
            ],
            "roomDetails": { "width": 4, "length": 3.5, "height": 2.6, "wallColor": "#FFFFFF", "floorColor": "#D2B48C" },
            "createdAt": "2024-03-01T10:00:00Z"
        }
    }"##;
    std::fs::write(&path, body).unwrap();

    let design: Design = load_design_file(&path).unwrap();
    assert_eq!(design.id.as_deref(), Some("65a1"));
    assert_eq!(design.furniture[0].scale, 1.0);
    assert_eq!(design.furniture[0].shade, 0.0);

    let mut store = PlacementStore::new();
    store.load_catalog(load_catalog_str());
    store.load_design(&design).unwrap();
    assert_eq!(store.room().width, 4.0);
    assert_eq!(store.room().id.as_deref(), Some("room-7"));
    assert_eq!(store.get(0).unwrap().rotation, 45.0);
}

#[test]
fn test_missing_design_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let err = load_design_file(dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_envelope_message_list_is_joined() {
    let body = r#"{ "success": false, "message": ["Name is required", "Width must be positive"] }"#;
    let err = parse_envelope::<Design>(body).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Request rejected: Name is required; Width must be positive"
    );
}

#[test]
fn test_successful_envelope_without_data() {
    let err = parse_envelope::<Vec<Design>>(r#"{ "success": true }"#).unwrap_err();
    assert!(matches!(err, PersistenceError::MissingData));
}

#[test]
fn test_envelope_serializes_without_empty_fields() {
    let json = serde_json::to_string(&ApiEnvelope::ok(vec![1, 2])).unwrap();
    assert_eq!(json, r#"{"success":true,"data":[1,2]}"#);

    let msg: ApiMessage = serde_json::from_str(r#""Bad request""#).unwrap();
    assert_eq!(msg, ApiMessage::Text("Bad request".to_string()));
}

fn load_catalog_str() -> Vec<roomkit_core::FurnitureTemplate> {
    serde_json::from_str(CATALOG_JSON).unwrap()
}
