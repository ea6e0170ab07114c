//! Scene aggregate: the room plus its ordered placeables.
//!
//! The scene is the single mutable model of a layout. List order is also
//! z-order (last drawn on top, first hit by pointer queries). Structural
//! changes are recorded as [`SceneEvent`]s so the owner can reconcile
//! dependent state (the selection) right after each mutation.

use roomplan_core::ValidationError;

use crate::model::{
    Color, Placeable, PlaceableDetails, PlaceableId, PlaceableKind, Point, Room, Rotation,
};

/// Default door size (width along the wall, thickness into the room).
pub const DEFAULT_DOOR_SIZE: (f64, f64) = (1.0, 0.1);

/// Default window size.
pub const DEFAULT_WINDOW_SIZE: (f64, f64) = (1.5, 0.2);

/// Structural change notification.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    Added(PlaceableId),
    Removed(PlaceableId),
    RoomResized,
    /// Every placeable was dropped (new room or a loaded document).
    Cleared,
}

/// Parameters for a new furniture item.
#[derive(Debug, Clone, PartialEq)]
pub struct FurnitureSpec {
    pub id: Option<PlaceableId>,
    pub name: Option<String>,
    pub width: f64,
    pub depth: f64,
    pub color: Color,
    pub position: Point,
    pub rotation: Rotation,
}

impl FurnitureSpec {
    pub fn new(width: f64, depth: f64) -> Self {
        Self {
            id: None,
            name: None,
            width,
            depth,
            color: Color::default(),
            position: Point::default(),
            rotation: Rotation::ZERO,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = (!name.trim().is_empty()).then_some(name);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_id(mut self, id: impl Into<PlaceableId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_positive("width", self.width)?;
        ValidationError::check_positive("depth", self.depth)?;
        ValidationError::check_finite("x", self.position.x)?;
        ValidationError::check_finite("y", self.position.y)?;
        Ok(())
    }
}

/// Parameters for a new door or window.
///
/// Without an explicit position, doors sit centred on the bottom wall and
/// windows centred on the top wall.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningSpec {
    pub id: Option<PlaceableId>,
    pub name: Option<String>,
    pub width: f64,
    pub thickness: f64,
    pub position: Option<Point>,
    pub rotation: Rotation,
}

impl OpeningSpec {
    pub fn new(width: f64, thickness: f64) -> Self {
        Self {
            id: None,
            name: None,
            width,
            thickness,
            position: None,
            rotation: Rotation::ZERO,
        }
    }

    pub fn door() -> Self {
        Self::new(DEFAULT_DOOR_SIZE.0, DEFAULT_DOOR_SIZE.1)
    }

    pub fn window() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE.0, DEFAULT_WINDOW_SIZE.1)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = (!name.trim().is_empty()).then_some(name);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Point::new(x, y));
        self
    }

    pub fn with_id(mut self, id: impl Into<PlaceableId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_positive("width", self.width)?;
        ValidationError::check_positive("thickness", self.thickness)?;
        if let Some(position) = self.position {
            ValidationError::check_finite("x", position.x)?;
            ValidationError::check_finite("y", position.y)?;
        }
        Ok(())
    }
}

/// Room plus ordered placeables, with per-kind naming counters.
#[derive(Debug, Clone)]
pub struct Scene {
    room: Room,
    placeables: Vec<Placeable>,
    next_door: u32,
    next_window: u32,
    events: Vec<SceneEvent>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Room::default())
    }
}

/// Two scenes are equal when they describe the same layout; naming
/// counters and undrained events are session state.
impl PartialEq for Scene {
    fn eq(&self, other: &Self) -> bool {
        self.room == other.room && self.placeables == other.placeables
    }
}

impl Scene {
    pub fn new(room: Room) -> Self {
        Self {
            room,
            placeables: Vec::new(),
            next_door: 1,
            next_window: 1,
            events: Vec::new(),
        }
    }

    /// Builds a scene from already validated parts, rejecting duplicate ids.
    pub fn from_parts(room: Room, placeables: Vec<Placeable>) -> Result<Self, String> {
        let mut scene = Self::new(room);
        for placeable in placeables {
            if scene.contains(&placeable.id) {
                return Err(format!("duplicate placeable id '{}'", placeable.id));
            }
            scene.placeables.push(placeable);
        }
        scene.next_door = scene.counter_after_names(PlaceableKind::Door);
        scene.next_window = scene.counter_after_names(PlaceableKind::Window);
        Ok(scene)
    }

    /// One past the highest "Door N"/"Window N" already in the scene.
    fn counter_after_names(&self, kind: PlaceableKind) -> u32 {
        let prefix = format!("{} ", kind.label());
        self.placeables
            .iter()
            .filter_map(|p| p.name.strip_prefix(&prefix)?.parse::<u32>().ok())
            .max()
            .map_or(1, |highest| highest.saturating_add(1))
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn placeables(&self) -> &[Placeable] {
        &self.placeables
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placeable> {
        self.placeables.iter()
    }

    pub fn len(&self) -> usize {
        self.placeables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placeables.is_empty()
    }

    pub fn get(&self, id: &PlaceableId) -> Option<&Placeable> {
        self.placeables.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &PlaceableId) -> bool {
        self.get(id).is_some()
    }

    pub fn index_of(&self, id: &PlaceableId) -> Option<usize> {
        self.placeables.iter().position(|p| &p.id == id)
    }

    pub fn count_of(&self, kind: PlaceableKind) -> usize {
        self.placeables.iter().filter(|p| p.kind() == kind).count()
    }

    fn name_taken(&self, name: &str) -> bool {
        self.placeables.iter().any(|p| p.name == name)
    }

    fn fresh_id(&self, requested: Option<PlaceableId>) -> PlaceableId {
        match requested {
            Some(id) if !self.contains(&id) => id,
            Some(id) => {
                tracing::warn!("Placeable id '{}' already in use, generating a new one", id);
                PlaceableId::generate()
            }
            None => PlaceableId::generate(),
        }
    }

    /// Next "Door N"/"Window N", skipping names already in the scene.
    ///
    /// Counters only move forward; deleting "Door 2" never hands that name
    /// out again in the same session.
    pub fn next_auto_name(&mut self, kind: PlaceableKind) -> String {
        loop {
            let counter = match kind {
                PlaceableKind::Door => &mut self.next_door,
                PlaceableKind::Window => &mut self.next_window,
                PlaceableKind::Furniture => {
                    return format!("Item {}", self.placeables.len() + 1);
                }
            };
            let candidate = format!("{} {}", kind.label(), *counter);
            *counter += 1;
            if !self.name_taken(&candidate) {
                return candidate;
            }
        }
    }

    fn push(&mut self, placeable: Placeable) -> PlaceableId {
        let id = placeable.id.clone();
        tracing::debug!(
            "Added {} '{}' ({}) at ({:.2}, {:.2})",
            placeable.kind(),
            placeable.name,
            id,
            placeable.position.x,
            placeable.position.y
        );
        self.placeables.push(placeable);
        self.events.push(SceneEvent::Added(id.clone()));
        id
    }

    pub fn add_furniture(&mut self, spec: FurnitureSpec) -> Result<PlaceableId, ValidationError> {
        spec.validate()?;
        let name = match spec.name {
            Some(name) => name,
            None => self.next_auto_name(PlaceableKind::Furniture),
        };
        let placeable = Placeable {
            id: self.fresh_id(spec.id),
            name,
            position: spec.position,
            width: spec.width,
            height: spec.depth,
            rotation: spec.rotation,
            details: PlaceableDetails::Furniture { color: spec.color },
        };
        Ok(self.push(placeable))
    }

    pub fn add_door(&mut self, spec: OpeningSpec) -> Result<PlaceableId, ValidationError> {
        spec.validate()?;
        let position = spec.position.unwrap_or_else(|| {
            Point::new(
                (self.room.width() - spec.width) / 2.0,
                self.room.depth() - spec.thickness,
            )
        });
        self.add_opening(spec, position, PlaceableDetails::Door { is_open: false })
    }

    pub fn add_window(&mut self, spec: OpeningSpec) -> Result<PlaceableId, ValidationError> {
        spec.validate()?;
        let position = spec
            .position
            .unwrap_or_else(|| Point::new((self.room.width() - spec.width) / 2.0, 0.0));
        self.add_opening(spec, position, PlaceableDetails::Window)
    }

    fn add_opening(
        &mut self,
        spec: OpeningSpec,
        position: Point,
        details: PlaceableDetails,
    ) -> Result<PlaceableId, ValidationError> {
        let name = match spec.name {
            Some(name) => name,
            None => self.next_auto_name(details.kind()),
        };
        let placeable = Placeable {
            id: self.fresh_id(spec.id),
            name,
            position,
            width: spec.width,
            height: spec.thickness,
            rotation: spec.rotation,
            details,
        };
        Ok(self.push(placeable))
    }

    /// Appends an existing placeable (paste, load). Geometry is validated and
    /// a colliding id is replaced with a fresh one.
    pub fn insert(&mut self, mut placeable: Placeable) -> Result<PlaceableId, ValidationError> {
        placeable.validate()?;
        placeable.id = self.fresh_id(Some(placeable.id));
        Ok(self.push(placeable))
    }

    /// Removes a placeable. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &PlaceableId) -> Option<Placeable> {
        let Some(index) = self.index_of(id) else {
            tracing::debug!("Remove ignored, no placeable with id {}", id);
            return None;
        };
        let removed = self.placeables.remove(index);
        tracing::debug!("Removed {} '{}'", removed.kind(), removed.name);
        self.events.push(SceneEvent::Removed(id.clone()));
        Some(removed)
    }

    /// Applies `mutation` to a placeable in place.
    ///
    /// The id cannot be changed through a mutation, and a mutation that
    /// leaves invalid geometry is rolled back. Returns false when the id is
    /// unknown or the mutation was rejected.
    pub fn update<F>(&mut self, id: &PlaceableId, mutation: F) -> bool
    where
        F: FnOnce(&mut Placeable),
    {
        let Some(placeable) = self.placeables.iter_mut().find(|p| &p.id == id) else {
            tracing::debug!("Update ignored, no placeable with id {}", id);
            return false;
        };

        let before = placeable.clone();
        mutation(placeable);
        placeable.id = before.id.clone();

        if let Err(err) = placeable.validate() {
            tracing::warn!("Rejected update of '{}': {}", before.name, err);
            *placeable = before;
            return false;
        }
        true
    }

    pub fn resize_room(&mut self, width: f64, depth: f64) -> Result<(), ValidationError> {
        self.room.resize(width, depth)?;
        tracing::debug!("Room resized to {:.2} x {:.2} m", width, depth);
        self.events.push(SceneEvent::RoomResized);
        Ok(())
    }

    pub fn set_room_name(&mut self, name: impl Into<String>) {
        self.room.name = name.into();
    }

    pub fn set_show_border(&mut self, show: bool) {
        self.room.show_border = show;
    }

    pub fn set_floor_texture(&mut self, texture: impl Into<String>) {
        self.room.texture = texture.into();
    }

    /// Resets to the default room with no placeables and fresh counters.
    pub fn clear(&mut self) {
        self.room = Room::default();
        self.placeables.clear();
        self.next_door = 1;
        self.next_window = 1;
        self.events.push(SceneEvent::Cleared);
    }

    /// Swaps in the contents of `other` (a freshly loaded layout).
    ///
    /// Naming counters continue after the highest numbered door and window
    /// so deleted names are not handed out again.
    pub fn replace_with(&mut self, other: Scene) {
        self.room = other.room;
        self.placeables = other.placeables;
        self.next_door = self.counter_after_names(PlaceableKind::Door);
        self.next_window = self.counter_after_names(PlaceableKind::Window);
        self.events.push(SceneEvent::Cleared);
    }

    /// Topmost placeable whose rotated footprint contains `point`.
    pub fn placeable_at(&self, point: &Point, tolerance: f64) -> Option<&Placeable> {
        self.placeables
            .iter()
            .rev()
            .find(|p| p.contains_point(point, tolerance))
    }

    /// Takes the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}
