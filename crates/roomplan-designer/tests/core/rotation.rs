use roomplan_designer::{
    door_swing_arc, DesignerState, FurnitureSpec, OpeningSpec, Rotation, SelectionManager,
};

#[test]
fn test_four_rotations_restore_original() {
    let mut state = DesignerState::default();
    let id = state
        .add_furniture(FurnitureSpec::new(2.0, 0.9).at(1.0, 1.0))
        .unwrap();
    let original = state.scene().get(&id).unwrap().clone();

    for _ in 0..4 {
        state.rotate(&id).unwrap();
    }
    let after = state.scene().get(&id).unwrap();
    assert_eq!(after.rotation, original.rotation);
    assert_eq!(after.footprint(), original.footprint());
}

#[test]
fn test_rotation_keeps_centre_and_swaps_footprint() {
    let mut state = DesignerState::default();
    let id = state
        .add_furniture(FurnitureSpec::new(2.0, 0.9).at(1.0, 1.0))
        .unwrap();
    let centre = state.scene().get(&id).unwrap().center();

    let rotation = state.rotate(&id).unwrap();
    assert_eq!(rotation, Rotation::from_degrees(90.0).unwrap());
    let item = state.scene().get(&id).unwrap();
    assert_eq!(item.center(), centre);
    assert!((item.footprint().width() - 0.9).abs() < 1e-12);
    assert!((item.footprint().height() - 2.0).abs() < 1e-12);
}

#[test]
fn test_rotate_unknown_id_is_noop() {
    let mut state = DesignerState::default();
    assert_eq!(state.rotate(&"ghost".into()), None);
    assert!(!state.is_modified);
}

#[test]
fn test_door_arc_rotates_with_door() {
    let mut scene = roomplan_designer::Scene::default();
    let door = scene
        .add_door(OpeningSpec::door().at(1.0, 1.0))
        .unwrap();
    let mut manager = SelectionManager::new();
    scene.update(&door, |p| {
        p.toggle_open();
    });

    let before = door_swing_arc(scene.get(&door).unwrap());
    manager.rotate(&mut scene, &door);
    let after = door_swing_arc(scene.get(&door).unwrap());
    assert_eq!(before.len(), after.len());
    assert_ne!(before[0], after[0]);

    // Arc radius stays the unrotated door width.
    let hinge = after[0];
    let furthest = after
        .iter()
        .map(|p| p.distance_to(&hinge))
        .fold(0.0_f64, f64::max);
    assert!((furthest - 1.0).abs() < 1e-9);
}
