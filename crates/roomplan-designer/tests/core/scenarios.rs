use roomplan_designer::{
    DesignerState, FurnitureSpec, InteractionState, OpeningSpec, PlaceableKind, Point,
};

#[test]
fn test_build_save_clear_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("living-room.json");

    let mut state = DesignerState::default();
    state.resize_room(4.0, 3.0).unwrap();
    state
        .add_furniture(FurnitureSpec::new(2.0, 0.9).named("Sofa").at(1.0, 1.0))
        .unwrap();
    state
        .add_door(OpeningSpec::new(0.9, 0.1).at(0.0, 1.5))
        .unwrap();
    state.save_to_file(&path).unwrap();

    state.new_room();
    assert!(state.scene().is_empty());

    state.load_from_file(&path).unwrap();
    let scene = state.scene();
    assert_eq!(scene.room().width(), 4.0);
    assert_eq!(scene.room().depth(), 3.0);
    assert_eq!(scene.len(), 2);

    let sofa = &scene.placeables()[0];
    assert_eq!(sofa.kind(), PlaceableKind::Furniture);
    assert_eq!(sofa.name, "Sofa");
    assert_eq!(sofa.position, Point::new(1.0, 1.0));
    assert_eq!(sofa.rotation.degrees(), 0);

    let door = &scene.placeables()[1];
    assert_eq!(door.kind(), PlaceableKind::Door);
    assert_eq!(door.name, "Door 1");
    assert_eq!(door.position, Point::new(0.0, 1.5));
    assert_eq!(door.rotation.degrees(), 0);
}

#[test]
fn test_snapped_drag() {
    let mut state = DesignerState::default();
    state.set_snap_enabled(true);
    let id = state
        .add_furniture(FurnitureSpec::new(1.0, 1.0).at(3.0, 2.0))
        .unwrap();

    // Grab the item at its top-left corner so the raw drag position equals
    // the pointer position.
    let (gx, gy) = state.viewport().world_to_pixel(3.0, 2.0);
    state.pointer_down(gx, gy);
    let (px, py) = state.viewport().world_to_pixel(1.23, 0.77);
    state.pointer_move(px, py);
    state.pointer_up(px, py);

    let position = state.scene().get(&id).unwrap().position;
    assert!((position.x - 1.0).abs() < 1e-9);
    assert!((position.y - 1.0).abs() < 1e-9);
    assert_eq!(state.selection().state(), &InteractionState::Selected { id });
}

#[test]
fn test_click_empty_canvas_leaves_no_affordance() {
    let mut state = DesignerState::default();
    let a = state
        .add_furniture(FurnitureSpec::new(1.0, 1.0).named("A").at(1.0, 1.0))
        .unwrap();

    let (px, py) = state.viewport().world_to_pixel(1.5, 1.5);
    state.pointer_down(px, py);
    state.pointer_up(px, py);
    assert!(state
        .selection()
        .affordances()
        .iter()
        .all(|affordance| affordance.owner == a));

    let (ex, ey) = state.viewport().world_to_pixel(4.0, 3.0);
    state.pointer_down(ex, ey);
    assert_eq!(state.selection().state(), &InteractionState::Idle);
    assert!(state.selection().affordances().is_empty());
    assert!(state.render_frame().affordances.is_empty());
}

#[test]
fn test_locked_drag_stays_inside_room() {
    let mut state = DesignerState::default();
    state.set_lock_to_room(true);
    state.resize_room(4.0, 3.0).unwrap();
    let id = state
        .add_furniture(FurnitureSpec::new(2.0, 1.0).at(1.0, 1.0))
        .unwrap();

    let (gx, gy) = state.viewport().world_to_pixel(1.5, 1.5);
    state.pointer_down(gx, gy);
    let (px, py) = state.viewport().world_to_pixel(-5.0, 10.0);
    state.pointer_move(px, py);
    state.pointer_up(px, py);

    let footprint = state.scene().get(&id).unwrap().footprint();
    assert!(footprint.min_x >= -1e-9);
    assert!(footprint.max_y <= 3.0 + 1e-9);
    assert_eq!(footprint.top_left(), Point::new(0.0, 2.0));
}
