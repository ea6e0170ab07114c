use roomplan_designer::serialization::{deserialize, serialize};
use roomplan_designer::{OpeningSpec, PlaceableKind, Room, Scene};
use std::collections::HashSet;

fn door_names(scene: &Scene) -> Vec<String> {
    scene
        .iter()
        .filter(|p| p.kind() == PlaceableKind::Door)
        .map(|p| p.name.clone())
        .collect()
}

#[test]
fn test_door_names_unique_after_delete() {
    let mut scene = Scene::new(Room::new(4.0, 3.0).unwrap());
    let ids: Vec<_> = (0..3)
        .map(|_| scene.add_door(OpeningSpec::door()).unwrap())
        .collect();
    assert_eq!(door_names(&scene), vec!["Door 1", "Door 2", "Door 3"]);

    scene.remove(&ids[1]);
    scene.add_door(OpeningSpec::door()).unwrap();

    let names = door_names(&scene);
    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(names.len(), 3);
    assert_eq!(unique.len(), 3);
    assert_eq!(names, vec!["Door 1", "Door 3", "Door 4"]);
}

#[test]
fn test_auto_name_skips_user_taken_name() {
    let mut scene = Scene::default();
    scene
        .add_window(OpeningSpec::window().named("Window 1"))
        .unwrap();
    let id = scene.add_window(OpeningSpec::window()).unwrap();
    assert_eq!(scene.get(&id).unwrap().name, "Window 2");
}

#[test]
fn test_counters_are_per_kind() {
    let mut scene = Scene::default();
    scene.add_door(OpeningSpec::door()).unwrap();
    scene.add_door(OpeningSpec::door()).unwrap();
    let window = scene.add_window(OpeningSpec::window()).unwrap();
    assert_eq!(scene.get(&window).unwrap().name, "Window 1");
}

#[test]
fn test_clear_resets_counters() {
    let mut scene = Scene::default();
    scene.add_door(OpeningSpec::door()).unwrap();
    scene.add_door(OpeningSpec::door()).unwrap();
    scene.clear();

    let id = scene.add_door(OpeningSpec::door()).unwrap();
    assert_eq!(scene.get(&id).unwrap().name, "Door 1");
}

#[test]
fn test_loaded_names_not_reused_after_delete() {
    let mut saved = Scene::default();
    for _ in 0..3 {
        saved.add_door(OpeningSpec::door()).unwrap();
    }
    saved.add_window(OpeningSpec::window()).unwrap();
    let json = serialize(&saved).unwrap();

    let mut scene = Scene::default();
    scene.replace_with(deserialize(&json).unwrap());
    let second = scene.placeables()[1].id.clone();
    scene.remove(&second);

    let door = scene.add_door(OpeningSpec::door()).unwrap();
    assert_eq!(scene.get(&door).unwrap().name, "Door 4");
    let window = scene.add_window(OpeningSpec::window()).unwrap();
    assert_eq!(scene.get(&window).unwrap().name, "Window 2");
}

#[test]
fn test_loaded_counter_ignores_non_numeric_names() {
    let mut saved = Scene::default();
    saved
        .add_door(OpeningSpec::door().named("Door to garden"))
        .unwrap();
    let mut scene = deserialize(&serialize(&saved).unwrap()).unwrap();
    let door = scene.add_door(OpeningSpec::door()).unwrap();
    assert_eq!(scene.get(&door).unwrap().name, "Door 1");
}
