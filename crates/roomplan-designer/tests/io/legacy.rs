use roomplan_designer::serialization::deserialize;
use roomplan_designer::{Color, FloorTexture, PlaceableKind, Point};

const V04_LAYOUT: &str = r##"{
  "room": {
    "name": "Bedroom",
    "width_m": 4.2672,
    "depth_m": 3.6576,
    "floor_texture": "Hardwood",
    "show_border": true
  },
  "furniture": [
    {
      "name": "Bed",
      "width_m": 1.524,
      "depth_m": 2.032,
      "colour": "#4a90e2",
      "x_m": 0.5,
      "y_m": 0.75,
      "rotation": 0
    },
    {
      "name": "Dresser",
      "width_m": 1.2,
      "depth_m": 0.5,
      "colour": "#8b4513",
      "x_m": 3.0,
      "y_m": 2.5,
      "rotation": 270.0
    }
  ]
}"##;

#[test]
fn test_v04_layout_loads() {
    let scene = deserialize(V04_LAYOUT).unwrap();

    assert_eq!(scene.room().name, "Bedroom");
    assert!((scene.room().width() - 4.2672).abs() < 1e-12);
    assert_eq!(scene.room().floor_texture(), FloorTexture::Hardwood);
    assert_eq!(scene.len(), 2);
    assert!(scene.iter().all(|p| p.kind() == PlaceableKind::Furniture));

    let dresser = &scene.placeables()[1];
    assert_eq!(dresser.name, "Dresser");
    assert_eq!(dresser.position, Point::new(3.0, 2.5));
    assert_eq!(dresser.rotation.degrees(), 270);
    assert_eq!(dresser.color(), Some(Color::rgb(0x8b, 0x45, 0x13)));
}

#[test]
fn test_v04_bad_colour_rejected() {
    let bad = V04_LAYOUT.replace("#8b4513", "brown");
    assert!(deserialize(&bad).is_err());
}

#[test]
fn test_v04_items_get_distinct_ids() {
    let scene = deserialize(V04_LAYOUT).unwrap();
    assert_ne!(scene.placeables()[0].id, scene.placeables()[1].id);
}
