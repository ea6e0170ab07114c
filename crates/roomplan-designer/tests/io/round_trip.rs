use proptest::prelude::*;
use roomplan_designer::serialization::{deserialize, serialize};
use roomplan_designer::{Color, FurnitureSpec, OpeningSpec, PlaceableKind, Room, Rotation, Scene};

#[derive(Debug, Clone)]
struct ItemPlan {
    kind: PlaceableKind,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    quarter_turns: u8,
    is_open: bool,
    color: (u8, u8, u8),
}

fn coordinate() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::ZERO
}

fn length() -> impl Strategy<Value = f64> {
    prop::num::f64::POSITIVE | prop::num::f64::NORMAL
}

fn item_plan() -> impl Strategy<Value = ItemPlan> {
    (
        prop_oneof![
            Just(PlaceableKind::Furniture),
            Just(PlaceableKind::Door),
            Just(PlaceableKind::Window),
        ],
        coordinate(),
        coordinate(),
        length(),
        length(),
        0u8..4,
        any::<bool>(),
        any::<(u8, u8, u8)>(),
    )
        .prop_map(
            |(kind, x, y, width, height, quarter_turns, is_open, color)| ItemPlan {
                kind,
                x,
                y,
                width,
                height,
                quarter_turns,
                is_open,
                color,
            },
        )
}

fn build_scene(width: f64, depth: f64, items: &[ItemPlan]) -> Scene {
    let mut scene = Scene::new(Room::new(width, depth).unwrap());
    for item in items {
        let rotation = Rotation::from_degrees(f64::from(item.quarter_turns) * 90.0).unwrap();
        let id = match item.kind {
            PlaceableKind::Furniture => scene.add_furniture(
                FurnitureSpec::new(item.width, item.height)
                    .at(item.x, item.y)
                    .with_rotation(rotation)
                    .with_color(Color::rgb(item.color.0, item.color.1, item.color.2)),
            ),
            PlaceableKind::Door => scene.add_door(
                OpeningSpec::new(item.width, item.height)
                    .at(item.x, item.y)
                    .with_rotation(rotation),
            ),
            PlaceableKind::Window => scene.add_window(
                OpeningSpec::new(item.width, item.height)
                    .at(item.x, item.y)
                    .with_rotation(rotation),
            ),
        }
        .unwrap();
        if item.kind == PlaceableKind::Door && item.is_open {
            scene.update(&id, |p| {
                p.toggle_open();
            });
        }
    }
    scene
}

proptest! {
    #[test]
    fn scene_survives_round_trip(
        width in length(),
        depth in length(),
        items in prop::collection::vec(item_plan(), 0..12),
    ) {
        let scene = build_scene(width, depth, &items);
        let json = serialize(&scene).unwrap();
        let restored = deserialize(&json).unwrap();
        prop_assert_eq!(restored, scene);
    }
}

#[test]
fn test_default_room_round_trip() {
    // 12 ft is 3.6576000000000004 m, which must come back bit for bit
    let scene = Scene::default();
    let restored = deserialize(&serialize(&scene).unwrap()).unwrap();
    assert_eq!(
        restored.room().depth().to_bits(),
        scene.room().depth().to_bits()
    );
    assert_eq!(restored, scene);
}

#[test]
fn test_room_settings_round_trip() {
    let mut scene = Scene::default();
    scene.set_room_name("Studio");
    scene.set_show_border(false);
    scene.set_floor_texture("Tile");

    let restored = deserialize(&serialize(&scene).unwrap()).unwrap();
    assert_eq!(restored.room().name, "Studio");
    assert!(!restored.room().show_border);
    assert_eq!(restored.room().texture, "Tile");
    assert_eq!(restored, scene);
}
