use roomplan_designer::{DesignerState, FurnitureSpec, LayoutFile, OpeningSpec};

#[test]
fn test_layout_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");

    let mut state = DesignerState::default();
    state
        .add_furniture(FurnitureSpec::new(1.0, 1.0).named("Chair"))
        .unwrap();
    state.add_door(OpeningSpec::door()).unwrap();
    state.save_to_file(&path).unwrap();

    let layout = LayoutFile::load_from_file(&path).unwrap();
    assert_eq!(layout.version, "1.0");
    assert_eq!(layout.metadata.name, "My Room");
    assert_eq!(layout.placeables.len(), 2);
    assert!(layout.metadata.created <= layout.metadata.modified);
}

#[test]
fn test_load_truncated_file_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");

    let mut state = DesignerState::default();
    state
        .add_furniture(FurnitureSpec::new(1.0, 1.0).named("Chair"))
        .unwrap();
    state.save_to_file(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, &content[..content.len() / 2]).unwrap();

    let mut other = DesignerState::default();
    let door = other.add_door(OpeningSpec::door()).unwrap();
    let err = other.load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("plan.json"));
    assert!(other.scene().get(&door).is_some());
    assert_eq!(other.current_file_path, None);
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("plan.json");

    let mut state = DesignerState::default();
    state.add_door(OpeningSpec::door()).unwrap();
    assert!(state.save_to_file(&path).is_err());
    assert!(state.is_modified);
    assert_eq!(state.current_file_path, None);
}

#[test]
fn test_load_then_edit_keeps_names_unique() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doors.json");

    let mut state = DesignerState::default();
    state.add_door(OpeningSpec::door()).unwrap();
    state.add_door(OpeningSpec::door()).unwrap();
    state.save_to_file(&path).unwrap();

    let mut reloaded = DesignerState::default();
    reloaded.load_from_file(&path).unwrap();
    let id = reloaded.add_door(OpeningSpec::door()).unwrap();
    assert_eq!(reloaded.scene().get(&id).unwrap().name, "Door 3");
}
