use roomplan_designer::{
    DesignerState, EditorAction, FurnitureSpec, OpeningSpec, PlaceableKind, Point,
};

#[test]
fn test_copy_paste_via_actions() {
    let mut state = DesignerState::default();
    let id = state
        .add_furniture(FurnitureSpec::new(1.0, 0.5).named("Desk").at(1.0, 2.0))
        .unwrap();
    state.select(&id);

    assert!(state.handle_action(EditorAction::Copy));
    assert!(state.handle_action(EditorAction::Paste));
    assert!(state.handle_action(EditorAction::Paste));

    let names: Vec<_> = state.scene().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Desk", "Desk (Copy)", "Desk (Copy)"]);

    let ids: std::collections::HashSet<_> = state.scene().iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_paste_survives_source_deletion() {
    let mut state = DesignerState::default();
    let id = state
        .add_furniture(FurnitureSpec::new(1.0, 0.5).named("Desk").at(1.0, 2.0))
        .unwrap();
    state.select(&id);
    state.copy_selected();
    state.delete_selected();
    assert!(state.scene().is_empty());

    let pasted = state.paste().unwrap();
    let copy = state.scene().get(&pasted).unwrap();
    assert_eq!(copy.position, Point::new(1.25, 2.25));
    assert_eq!(copy.kind(), PlaceableKind::Furniture);
}

#[test]
fn test_duplicate_window_is_renamed_and_keeps_rotation() {
    let mut state = DesignerState::default();
    let id = state.add_window(OpeningSpec::window()).unwrap();
    state.select(&id);
    state.rotate_selected();

    let copy = state.duplicate_selected().unwrap();
    let copy = state.scene().get(&copy).unwrap();
    assert_eq!(copy.name, "Window 2");
    assert_eq!(copy.rotation.degrees(), 90);
    assert_eq!(state.selected_id(), Some(&copy.id));
}

#[test]
fn test_paste_with_empty_clipboard() {
    let mut state = DesignerState::default();
    assert!(state.paste().is_none());
    assert!(state.scene().is_empty());
}

#[test]
fn test_repeated_paste_steps_away_from_previous_copy() {
    let mut state = DesignerState::default();
    let id = state
        .add_furniture(FurnitureSpec::new(0.5, 0.5).named("Chair").at(1.0, 1.0))
        .unwrap();
    state.select(&id);
    state.copy_selected();

    let first = state.paste().unwrap();
    let second = state.paste().unwrap();
    let first = state.scene().get(&first).unwrap().position;
    let second = state.scene().get(&second).unwrap().position;
    assert_eq!(first, Point::new(1.25, 1.25));
    assert_eq!(second, Point::new(1.5, 1.5));

    // A fresh copy starts over from the copied item.
    state.select(&id);
    state.copy_selected();
    let third = state.paste().unwrap();
    assert_eq!(state.scene().get(&third).unwrap().position, Point::new(1.25, 1.25));
}
