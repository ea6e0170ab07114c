use roomplan_core::ValidationError;
use roomplan_designer::{
    Color, FurnitureSpec, OpeningSpec, PlaceableId, PlaceableKind, Point, Room, Scene,
    SceneEvent,
};

#[test]
fn test_add_and_get() {
    let mut scene = Scene::new(Room::new(4.0, 3.0).unwrap());
    let id = scene
        .add_furniture(
            FurnitureSpec::new(2.0, 0.9)
                .named("Sofa")
                .at(1.0, 1.0)
                .with_color(Color::rgb(0x33, 0x66, 0x99)),
        )
        .unwrap();

    let sofa = scene.get(&id).unwrap();
    assert_eq!(sofa.name, "Sofa");
    assert_eq!(sofa.position, Point::new(1.0, 1.0));
    assert_eq!(sofa.base_dimensions(), (2.0, 0.9));
    assert_eq!(sofa.color().unwrap().to_hex(), "#336699");
}

#[test]
fn test_user_supplied_id_kept() {
    let mut scene = Scene::default();
    let id = scene
        .add_window(OpeningSpec::window().with_id("north-window"))
        .unwrap();
    assert_eq!(id.as_str(), "north-window");
}

#[test]
fn test_validation_errors() {
    let mut scene = Scene::default();
    let err = scene
        .add_furniture(FurnitureSpec::new(-2.0, 1.0))
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::NonPositive {
            field: "width",
            value: -2.0
        }
    );
    assert!(matches!(
        scene.add_door(OpeningSpec::new(0.9, f64::INFINITY)),
        Err(ValidationError::NotFinite { field: "thickness" })
    ));
    assert!(scene.is_empty());
}

#[test]
fn test_remove_is_idempotent() {
    let mut scene = Scene::default();
    let id = scene.add_door(OpeningSpec::door()).unwrap();
    assert!(scene.remove(&id).is_some());
    assert!(scene.remove(&id).is_none());
    assert!(scene.remove(&PlaceableId::from("never-existed")).is_none());
    assert!(scene.is_empty());
}

#[test]
fn test_order_is_insertion_order() {
    let mut scene = Scene::default();
    let a = scene.add_furniture(FurnitureSpec::new(1.0, 1.0)).unwrap();
    let b = scene.add_door(OpeningSpec::door()).unwrap();
    let c = scene.add_window(OpeningSpec::window()).unwrap();
    let order: Vec<_> = scene.iter().map(|p| p.id.clone()).collect();
    assert_eq!(order, vec![a.clone(), b, c]);
    assert_eq!(scene.index_of(&a), Some(0));
}

#[test]
fn test_resize_room() {
    let mut scene = Scene::default();
    scene.resize_room(6.0, 5.0).unwrap();
    assert_eq!(scene.room().width(), 6.0);
    assert!(scene.resize_room(6.0, 0.0).is_err());
    assert_eq!(scene.room().depth(), 5.0);
}

#[test]
fn test_clear_restores_default_room() {
    let mut scene = Scene::default();
    scene.resize_room(1.0, 1.0).unwrap();
    scene.set_room_name("Attic");
    scene.add_window(OpeningSpec::window()).unwrap();
    scene.drain_events();

    scene.clear();
    assert_eq!(scene.room(), &Room::default());
    assert!(scene.is_empty());
    assert_eq!(scene.drain_events(), vec![SceneEvent::Cleared]);
}

#[test]
fn test_items_may_extend_outside_room() {
    let mut scene = Scene::new(Room::new(2.0, 2.0).unwrap());
    let id = scene
        .add_furniture(FurnitureSpec::new(1.0, 1.0).at(5.0, -3.0))
        .unwrap();
    assert_eq!(scene.get(&id).unwrap().position, Point::new(5.0, -3.0));
}

#[test]
fn test_count_of_kind() {
    let mut scene = Scene::default();
    scene.add_door(OpeningSpec::door()).unwrap();
    scene.add_window(OpeningSpec::window()).unwrap();
    let door = scene.add_door(OpeningSpec::door()).unwrap();
    assert_eq!(scene.count_of(PlaceableKind::Door), 2);
    assert_eq!(scene.count_of(PlaceableKind::Window), 1);
    assert_eq!(scene.count_of(PlaceableKind::Furniture), 0);

    scene.remove(&door);
    assert_eq!(scene.count_of(PlaceableKind::Door), 1);
}
