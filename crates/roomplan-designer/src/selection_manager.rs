use crate::model::{PlaceableId, Point, Rotation};
use crate::scene::{Scene, SceneEvent};
use crate::snap::{clamp_to_room, snap_point};
use roomplan_core::constants::{DEFAULT_GRID_CELL_M, DEFAULT_PIXELS_PER_METRE, DRAG_THRESHOLD_PX};

/// Radius (pixels) of the delete/rotate buttons.
pub const AFFORDANCE_RADIUS_PX: f64 = 9.0;

/// Where the pointer interaction currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Selected {
        id: PlaceableId,
    },
    Dragging {
        id: PlaceableId,
        /// Pointer position minus the item's position at the press.
        grab_offset: Point,
    },
}

impl InteractionState {
    pub fn selected_id(&self) -> Option<&PlaceableId> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Selected { id } | InteractionState::Dragging { id, .. } => Some(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffordanceKind {
    Delete,
    Rotate,
}

/// Transient on-canvas control attached to the selected placeable.
#[derive(Debug, Clone, PartialEq)]
pub struct Affordance {
    pub kind: AffordanceKind,
    pub owner: PlaceableId,
    /// Centre of the control in room space, diagonally outside the footprint
    /// corner so the control never covers the placeable.
    pub anchor: Point,
}

/// Per-event interaction parameters, already converted to metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSettings {
    pub snap_enabled: bool,
    pub grid_cell: f64,
    pub lock_to_room: bool,
    /// Pointer travel before a press turns into a drag.
    pub drag_threshold: f64,
    /// Hit radius of the affordance buttons.
    pub affordance_radius: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            snap_enabled: false,
            grid_cell: DEFAULT_GRID_CELL_M,
            lock_to_room: false,
            drag_threshold: DRAG_THRESHOLD_PX / DEFAULT_PIXELS_PER_METRE,
            affordance_radius: AFFORDANCE_RADIUS_PX / DEFAULT_PIXELS_PER_METRE,
        }
    }
}

/// Result of a pointer press.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerOutcome {
    Selected(PlaceableId),
    Deselected,
    Deleted(PlaceableId),
    Rotated(PlaceableId, Rotation),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Press {
    point: Point,
    grab_offset: Point,
}

/// Drives selection, dragging and the selection affordances.
///
/// `SelectionManager` is responsible for:
/// - Tracking the interaction state (`Idle`, `Selected`, `Dragging`)
/// - Owning the delete/rotate affordances of the selected placeable
/// - Turning pointer events (in room coordinates) into scene mutations
/// - Dropping a selection whose placeable left the scene
///
/// # Affordance lifetime
///
/// Affordances exist exactly while a placeable is selected or dragged.
/// They sit one hit radius out from the footprint corners, so a press on
/// the placeable itself always selects or drags it.
/// Every state change goes through a single transition path that tears the
/// previous affordances down before building new ones, so a control can
/// never outlive its owner.
///
/// # Examples
///
/// ```
/// use roomplan_designer::model::Point;
/// use roomplan_designer::scene::{FurnitureSpec, Scene};
/// use roomplan_designer::selection_manager::{InteractionSettings, SelectionManager};
///
/// let mut scene = Scene::default();
/// let id = scene.add_furniture(FurnitureSpec::new(1.0, 1.0)).unwrap();
/// let mut manager = SelectionManager::new();
/// let settings = InteractionSettings::default();
///
/// manager.pointer_down(&mut scene, Point::new(0.5, 0.5), &settings);
/// assert_eq!(manager.selected_id(), Some(&id));
/// assert_eq!(manager.affordances().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SelectionManager {
    state: InteractionState,
    affordances: Vec<Affordance>,
    press: Option<Press>,
    /// Hit radius in metres; also how far anchors sit outside the corners.
    affordance_radius: f64,
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self {
            state: InteractionState::Idle,
            affordances: Vec::new(),
            press: None,
            affordance_radius: InteractionSettings::default().affordance_radius,
        }
    }
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the hit radius (it changes with zoom) and re-anchors the
    /// current affordances.
    pub fn set_affordance_radius(&mut self, scene: &Scene, radius: f64) {
        if !(radius.is_finite() && radius > 0.0) || radius == self.affordance_radius {
            return;
        }
        self.affordance_radius = radius;
        self.rebuild_affordances(scene);
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Returns the ID of the selected placeable, if any.
    pub fn selected_id(&self) -> Option<&PlaceableId> {
        self.state.selected_id()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InteractionState::Dragging { .. })
    }

    /// Affordances currently shown (empty while `Idle`).
    pub fn affordances(&self) -> &[Affordance] {
        &self.affordances
    }

    /// Finds the affordance under `point`.
    pub fn affordance_at(&self, point: &Point, radius: f64) -> Option<&Affordance> {
        self.affordances
            .iter()
            .find(|a| a.anchor.distance_to(point) <= radius)
    }

    /// The single state-change path.
    ///
    /// Tears down the current affordances, switches state, then rebuilds
    /// affordances for the new selection (if any).
    fn transition(&mut self, next: InteractionState, scene: &Scene) {
        if self.state == next {
            return;
        }
        tracing::debug!("Interaction {:?} -> {:?}", self.state, next);
        self.affordances.clear();
        if next == InteractionState::Idle {
            self.press = None;
        }
        self.state = next;
        self.rebuild_affordances(scene);
    }

    fn rebuild_affordances(&mut self, scene: &Scene) {
        self.affordances.clear();
        let Some(id) = self.state.selected_id() else {
            return;
        };
        let Some(placeable) = scene.get(id) else {
            return;
        };

        let footprint = placeable.footprint();
        let gap = self.affordance_radius;
        self.affordances.push(Affordance {
            kind: AffordanceKind::Delete,
            owner: id.clone(),
            anchor: footprint.top_right().offset(gap, -gap),
        });
        self.affordances.push(Affordance {
            kind: AffordanceKind::Rotate,
            owner: id.clone(),
            anchor: footprint.top_left().offset(-gap, -gap),
        });
    }

    /// Selects `id` programmatically (e.g. from the list view).
    ///
    /// Returns false and leaves the state untouched when the id is unknown.
    pub fn select(&mut self, scene: &Scene, id: &PlaceableId) -> bool {
        if !scene.contains(id) {
            tracing::debug!("Select ignored, no placeable with id {}", id);
            return false;
        }
        self.press = None;
        self.transition(InteractionState::Selected { id: id.clone() }, scene);
        true
    }

    pub fn deselect(&mut self, scene: &Scene) {
        self.transition(InteractionState::Idle, scene);
    }

    /// Drops all state without consulting a scene (the scene is being replaced).
    pub fn reset(&mut self) {
        if self.state != InteractionState::Idle {
            tracing::debug!("Interaction {:?} -> Idle (reset)", self.state);
        }
        self.state = InteractionState::Idle;
        self.affordances.clear();
        self.press = None;
    }

    /// Handles a pointer press at `point` (room coordinates).
    ///
    /// Affordances take priority over placeables; a press on empty canvas
    /// deselects. Pressing a placeable arms a drag that starts once the
    /// pointer travels past the drag threshold.
    pub fn pointer_down(
        &mut self,
        scene: &mut Scene,
        point: Point,
        settings: &InteractionSettings,
    ) -> PointerOutcome {
        self.set_affordance_radius(scene, settings.affordance_radius);
        if let Some(affordance) = self
            .affordance_at(&point, settings.affordance_radius)
            .cloned()
        {
            self.press = None;
            return match affordance.kind {
                AffordanceKind::Delete => {
                    self.delete(scene, &affordance.owner);
                    PointerOutcome::Deleted(affordance.owner)
                }
                AffordanceKind::Rotate => match self.rotate(scene, &affordance.owner) {
                    Some(rotation) => PointerOutcome::Rotated(affordance.owner, rotation),
                    None => PointerOutcome::Deselected,
                },
            };
        }

        match scene.placeable_at(&point, 0.0) {
            Some(placeable) => {
                let id = placeable.id.clone();
                let grab_offset = point - placeable.position;
                self.transition(InteractionState::Selected { id: id.clone() }, scene);
                self.press = Some(Press { point, grab_offset });
                PointerOutcome::Selected(id)
            }
            None => {
                self.transition(InteractionState::Idle, scene);
                PointerOutcome::Deselected
            }
        }
    }

    /// Handles pointer motion; returns true when a placeable moved.
    pub fn pointer_move(
        &mut self,
        scene: &mut Scene,
        point: Point,
        settings: &InteractionSettings,
    ) -> bool {
        if let InteractionState::Selected { id } = &self.state {
            let Some(press) = self.press else {
                return false;
            };
            if point.distance_to(&press.point) <= settings.drag_threshold {
                return false;
            }
            let next = InteractionState::Dragging {
                id: id.clone(),
                grab_offset: press.grab_offset,
            };
            self.transition(next, scene);
        }

        let InteractionState::Dragging { id, grab_offset } = self.state.clone() else {
            return false;
        };
        let Some(placeable) = scene.get(&id) else {
            self.transition(InteractionState::Idle, scene);
            return false;
        };

        let mut candidate =
            snap_point(point - grab_offset, settings.snap_enabled, settings.grid_cell);
        if settings.lock_to_room {
            candidate = clamp_to_room(candidate, placeable, scene.room());
        }
        if placeable.position == candidate {
            return false;
        }

        let moved = scene.update(&id, |p| p.position = candidate);
        if moved {
            self.rebuild_affordances(scene);
        }
        moved
    }

    /// Handles pointer release; returns true when a drag was completed.
    pub fn pointer_up(
        &mut self,
        scene: &mut Scene,
        point: Point,
        settings: &InteractionSettings,
    ) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            self.pointer_move(scene, point, settings);
            if let InteractionState::Dragging { id, .. } = self.state.clone() {
                self.transition(InteractionState::Selected { id }, scene);
            }
        }
        self.press = None;
        was_dragging
    }

    /// Double-click toggles a door open/closed, selected or not.
    ///
    /// Returns the door and its new open state.
    pub fn double_click(&mut self, scene: &mut Scene, point: Point) -> Option<(PlaceableId, bool)> {
        self.press = None;
        let id = scene.placeable_at(&point, 0.0)?.id.clone();
        let is_open = self.toggle_door(scene, &id)?;
        Some((id, is_open))
    }

    /// Rotates a placeable a quarter turn clockwise about its centre.
    pub fn rotate(&mut self, scene: &mut Scene, id: &PlaceableId) -> Option<Rotation> {
        let mut rotation = None;
        scene.update(id, |p| rotation = Some(p.rotate_cw()));
        if rotation.is_some() && self.selected_id() == Some(id) {
            self.rebuild_affordances(scene);
        }
        rotation
    }

    pub fn rotate_selected(&mut self, scene: &mut Scene) -> Option<Rotation> {
        let id = self.selected_id()?.clone();
        self.rotate(scene, &id)
    }

    /// Removes a placeable; the selection goes `Idle` if it pointed at it.
    pub fn delete(&mut self, scene: &mut Scene, id: &PlaceableId) -> bool {
        let removed = scene.remove(id).is_some();
        if self.selected_id() == Some(id) {
            self.transition(InteractionState::Idle, scene);
        }
        removed
    }

    pub fn delete_selected(&mut self, scene: &mut Scene) -> bool {
        match self.selected_id().cloned() {
            Some(id) => self.delete(scene, &id),
            None => false,
        }
    }

    pub fn toggle_door(&mut self, scene: &mut Scene, id: &PlaceableId) -> Option<bool> {
        let mut state = None;
        scene.update(id, |p| state = p.toggle_open());
        state
    }

    /// Reconciles with a structural scene change.
    pub fn on_scene_event(&mut self, scene: &Scene, event: &SceneEvent) {
        match event {
            SceneEvent::Removed(id) if self.selected_id() == Some(id) => {
                self.transition(InteractionState::Idle, scene);
            }
            SceneEvent::Cleared => self.transition(InteractionState::Idle, scene),
            _ => self.reconcile(scene),
        }
    }

    /// Goes `Idle` if the selected placeable no longer exists, otherwise
    /// re-anchors the affordances.
    pub fn reconcile(&mut self, scene: &Scene) {
        match self.selected_id() {
            Some(id) if !scene.contains(id) => self.transition(InteractionState::Idle, scene),
            Some(_) => self.rebuild_affordances(scene),
            None => {}
        }
    }
}
