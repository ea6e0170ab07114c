//! # Room Planner Designer
//!
//! Editing core of the room planner: a single rectangular room populated
//! with furniture, doors and windows that can be placed, dragged, rotated,
//! deleted, copied and pasted, and saved to a JSON layout file.
//!
//! ## Core Components
//!
//! - **Model**: `Room`, `Placeable` and their geometry (footprints, rotation)
//! - **Scene**: ordered placeables plus naming counters and change events
//! - **Snap**: grid quantization and room-edge clamping
//! - **Selection Manager**: the `Idle`/`Selected`/`Dragging` state machine and
//!   its delete/rotate affordances
//! - **Clipboard**: single-slot copy/paste
//! - **Serialization**: layout files, including the 0.4 format
//! - **Viewport**: zoom/pan transform between pixels and metres
//! - **Renderer / Adapters**: frame data and the collaborator traits a host
//!   implements to draw and list the scene
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (facade, pointer events in pixels)
//!   ├── Viewport (pixels <-> metres)
//!   ├── SelectionManager (interaction state, affordances)
//!   │     └── Snap (drag positions)
//!   ├── Clipboard
//!   └── Scene (Room + Placeables, SceneEvents)
//!         └── Serialization (LayoutFile <-> JSON)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use roomplan_designer::{DesignerState, FurnitureSpec, OpeningSpec};
//!
//! let mut state = DesignerState::default();
//! let sofa = state
//!     .add_furniture(FurnitureSpec::new(2.0, 0.9).named("Sofa").at(1.0, 1.0))
//!     .unwrap();
//! state.add_door(OpeningSpec::door()).unwrap();
//!
//! state.select(&sofa);
//! state.rotate_selected();
//! assert_eq!(state.scene().get(&sofa).unwrap().rotation.degrees(), 90);
//! ```

pub mod adapters;
pub mod clipboard;
pub mod designer_state;
pub mod model;
pub mod renderer;
pub mod scene;
pub mod selection_manager;
pub mod serialization;
pub mod snap;
pub mod viewport;

pub use adapters::{ListViewAdapter, RenderAdapter, TextureResolver, UnitSource, ZoomSource};
pub use clipboard::Clipboard;
pub use designer_state::{DesignerState, EditorAction};
pub use model::{
    Bounds, Color, FloorTexture, Placeable, PlaceableDetails, PlaceableId, PlaceableKind, Point,
    Room, Rotation,
};
pub use renderer::{door_swing_arc, list_entries, DoorArc, FloorFill, ListEntry, RenderFrame};
pub use scene::{FurnitureSpec, OpeningSpec, Scene, SceneEvent};
pub use selection_manager::{
    Affordance, AffordanceKind, InteractionSettings, InteractionState, PointerOutcome,
    SelectionManager,
};
pub use serialization::{LayoutFile, LayoutMetadata, FILE_FORMAT_VERSION};
pub use snap::{clamp_to_room, grid_lines, snap, GridLine};
pub use viewport::Viewport;
