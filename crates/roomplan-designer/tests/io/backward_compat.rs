use roomplan_designer::serialization::{deserialize, serialize};
use roomplan_designer::{FurnitureSpec, OpeningSpec, Room, Scene};
use serde_json::Value;

fn strip(value: &mut Value, fields: &[&str]) {
    if let Some(items) = value["placeables"].as_array_mut() {
        for item in items {
            if let Some(object) = item.as_object_mut() {
                for field in fields {
                    object.remove(*field);
                }
            }
        }
    }
}

#[test]
fn test_missing_rotation_and_open_flag_default() {
    let mut scene = Scene::new(Room::new(4.0, 3.0).unwrap());
    scene
        .add_furniture(FurnitureSpec::new(2.0, 0.9).named("Sofa").at(1.0, 1.0))
        .unwrap();
    scene.add_door(OpeningSpec::door()).unwrap();
    scene.add_window(OpeningSpec::window()).unwrap();

    let mut document: Value = serde_json::from_str(&serialize(&scene).unwrap()).unwrap();
    strip(&mut document, &["rotation", "isOpen"]);
    let stripped = deserialize(&document.to_string()).unwrap();

    assert_eq!(stripped, scene);
    assert!(stripped.iter().all(|p| p.rotation.degrees() == 0));
    assert_eq!(stripped.placeables()[1].is_open(), Some(false));
}

#[test]
fn test_unknown_fields_ignored() {
    let scene = deserialize(
        r#"{
            "version": "1.0",
            "generator": "someone else",
            "room": { "width": 3, "depth": 3, "ceiling": 2.4 },
            "placeables": [
                { "kind": "window", "id": "w", "name": "Window 1",
                  "x": 0.5, "y": 0, "width": 1.5, "height": 0.2, "glazing": "double" }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(scene.len(), 1);
}

#[test]
fn test_missing_placeables_is_empty_scene() {
    let scene = deserialize(r#"{ "room": { "width": 3, "depth": 2 } }"#).unwrap();
    assert!(scene.is_empty());
    assert_eq!(scene.room().width(), 3.0);
}

#[test]
fn test_rotation_written_as_number() {
    let mut scene = Scene::default();
    let id = scene.add_window(OpeningSpec::window()).unwrap();
    scene.update(&id, |p| {
        p.rotate_cw();
    });
    let document: Value = serde_json::from_str(&serialize(&scene).unwrap()).unwrap();
    assert_eq!(document["placeables"][0]["rotation"], 90.0);
}
