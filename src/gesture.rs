//! Transform gesture controller.
//!
//! Idle while no contact is down, active otherwise. Every membership change
//! is wrapped in commit (before) and recapture (after) so the observable
//! transform never jumps. Moves only update positions and arm the throttle
//! timer; start and end are emitted synchronously.

use crate::geometry::Point;
use crate::model::{GestureError, GestureEvent, GestureOptions, GesturePhase, PointerId, Transform};
use crate::sink::GestureSink;
use crate::state::{PointerSet, TransformState, snapshot};
use crate::timer::ChangeTimer;
use crate::util::cwarn;

pub type CoordinateTransformation = Box<dyn Fn(Point) -> Point>;

/// Construction-time configuration. Options are validated on the way in.
#[derive(Default)]
pub struct GestureConfig {
    options: GestureOptions,
    coordinate_transformation: Option<CoordinateTransformation>,
    sink: Option<Box<dyn GestureSink>>,
}

impl GestureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: GestureOptions) -> Result<Self, GestureError> {
        self.options = options.validate()?;
        Ok(self)
    }

    pub fn with_coordinate_transformation(mut self, f: impl Fn(Point) -> Point + 'static) -> Self {
        self.coordinate_transformation = Some(Box::new(f));
        self
    }

    pub fn with_sink(mut self, sink: impl GestureSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn options(&self) -> &GestureOptions {
        &self.options
    }
}

pub struct TransformGesture {
    options: GestureOptions,
    coordinate_transformation: Option<CoordinateTransformation>,
    sink: Option<Box<dyn GestureSink>>,
    timer: Box<dyn ChangeTimer>,
    change_pending: bool,
    pointers: PointerSet,
    state: TransformState,
    last_centroid: Option<Point>,
}

impl TransformGesture {
    pub fn new(config: GestureConfig, timer: Box<dyn ChangeTimer>) -> Self {
        let GestureConfig {
            options,
            coordinate_transformation,
            sink,
        } = config;
        Self {
            state: TransformState::new(&options),
            options,
            coordinate_transformation,
            sink,
            timer,
            change_pending: false,
            pointers: PointerSet::new(),
            last_centroid: None,
        }
    }

    // --- Pointer lifecycle ---

    pub fn add_pointer(&mut self, id: PointerId, raw: Point) {
        let position = self.map(raw);
        if self.pointers.contains(id) {
            cwarn(&GestureError::DuplicatePointer(id).to_string());
            return;
        }
        let first = self.pointers.is_empty();
        if first {
            self.state.reset();
        }

        self.state.commit(&self.pointers);
        if let Err(err) = self.pointers.add(id, position) {
            cwarn(&err.to_string());
        }
        self.state.recapture(&self.pointers);

        if first {
            self.notify(GesturePhase::Start);
        }
    }

    pub fn pointer_move(&mut self, id: PointerId, raw: Point) {
        let position = self.map(raw);
        if !self.pointers.update_position(id, position) {
            return;
        }
        if !self.change_pending {
            self.change_pending = true;
            self.timer.arm(self.options.throttle_ms);
        }
    }

    pub fn remove_pointer(&mut self, id: PointerId) {
        if !self.pointers.contains(id) {
            return;
        }
        self.last_centroid = snapshot::centroid(&self.pointers);

        self.state.commit(&self.pointers);
        self.pointers.remove(id);
        self.state.recapture(&self.pointers);

        if self.pointers.is_empty() {
            if self.change_pending {
                self.change_pending = false;
                self.timer.cancel();
            }
            self.notify(GesturePhase::End);
        }
    }

    pub fn pointer_up(&mut self, id: PointerId, _raw: Point) {
        self.remove_pointer(id);
    }

    pub fn pointer_cancel(&mut self, id: PointerId, _raw: Point) {
        self.remove_pointer(id);
    }

    /// Called by the host when the throttle timer elapses. A fire with
    /// nothing pending (e.g. after the session ended) is ignored.
    pub fn fire_change(&mut self) {
        if !self.change_pending {
            return;
        }
        self.change_pending = false;
        self.notify(GesturePhase::Change);
    }

    // --- Queries ---

    pub fn options(&self) -> &GestureOptions {
        &self.options
    }

    pub fn pointers(&self) -> &PointerSet {
        &self.pointers
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_active(&self) -> bool {
        !self.pointers.is_empty()
    }

    pub fn is_change_pending(&self) -> bool {
        self.change_pending
    }

    pub fn transform_state(&self) -> &TransformState {
        &self.state
    }

    pub fn translation(&self) -> Point {
        self.state.translation(&self.pointers)
    }

    pub fn scale(&self) -> f64 {
        self.state.scale(&self.pointers)
    }

    pub fn rotation(&self) -> f64 {
        self.state.rotation(&self.pointers)
    }

    pub fn transform(&self) -> Transform {
        self.state.current(&self.pointers)
    }

    pub fn centroid(&self) -> Option<Point> {
        snapshot::centroid(&self.pointers)
    }

    pub fn event(&self) -> GestureEvent {
        let t = self.transform();
        GestureEvent {
            pointer_count: self.pointers.len(),
            translation: t.translation,
            scale: t.scale,
            rotation: t.rotation,
            centroid: self.centroid().or(self.last_centroid),
        }
    }

    fn map(&self, raw: Point) -> Point {
        match &self.coordinate_transformation {
            Some(f) => f(raw),
            None => raw,
        }
    }

    fn notify(&mut self, phase: GesturePhase) {
        let event = self.event();
        if event.centroid.is_some() {
            self.last_centroid = event.centroid;
        }
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        match phase {
            GesturePhase::Start => sink.on_start(&event),
            GesturePhase::Change => sink.on_change(&event),
            GesturePhase::End => sink.on_end(&event),
        }
    }
}
