// Card transform folded from gesture notifications.
use std::rc::Rc;
use transform_gesture::{GestureEvent, GesturePhase, Point, Transform};
use yew::Reducible;

const RATE_WINDOW_MS: f64 = 1000.0;
pub const CARD_SIZE: f64 = 160.0;

#[derive(Clone, Debug, PartialEq)]
pub struct CardState {
    /// Transform accumulated over finished sessions.
    pub committed: Transform,
    /// Transform of the running session, if any.
    pub session: Option<Transform>,
    pub last_phase: Option<GesturePhase>,
    pub last_event: Option<GestureEvent>,
    pub changes_per_sec: f64,
    window_started_ms: f64,
    window_changes: u32,
}

impl CardState {
    pub fn new(origin: Point) -> Self {
        Self {
            committed: Transform {
                translation: origin,
                ..Transform::IDENTITY
            },
            session: None,
            last_phase: None,
            last_event: None,
            changes_per_sec: 0.0,
            window_started_ms: 0.0,
            window_changes: 0,
        }
    }

    pub fn displayed(&self) -> Transform {
        match &self.session {
            Some(session) => self.committed.then(session),
            None => self.committed,
        }
    }

    /// Session transform to show. Without translation the card turns and
    /// scales around its own center instead of following the contacts.
    fn session_transform(&self, event: &GestureEvent, can_translate: bool) -> Transform {
        let t = event.transform();
        if can_translate {
            return t;
        }
        let center = self
            .committed
            .apply(Point::new(CARD_SIZE / 2.0, CARD_SIZE / 2.0));
        let spun = Transform {
            translation: Point::ZERO,
            ..t
        }
        .apply(center);
        Transform {
            translation: center - spun,
            ..t
        }
    }

    pub fn css_transform(&self) -> String {
        let t = self.displayed();
        format!(
            "translate({:.2}px, {:.2}px) rotate({:.5}rad) scale({:.5})",
            t.translation.x, t.translation.y, t.rotation, t.scale
        )
    }
}

pub enum CardAction {
    Gesture {
        phase: GesturePhase,
        event: GestureEvent,
        can_translate: bool,
        now_ms: f64,
    },
    Reset { origin: Point },
}

impl Reducible for CardState {
    type Action = CardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut s = (*self).clone();
        match action {
            CardAction::Gesture {
                phase,
                event,
                can_translate,
                now_ms,
            } => {
                let session = s.session_transform(&event, can_translate);
                s.last_phase = Some(phase);
                s.last_event = Some(event);
                match phase {
                    GesturePhase::Start => {
                        s.session = Some(session);
                        s.window_started_ms = now_ms;
                        s.window_changes = 0;
                    }
                    GesturePhase::Change => {
                        s.session = Some(session);
                        s.window_changes += 1;
                        let elapsed = now_ms - s.window_started_ms;
                        if elapsed >= RATE_WINDOW_MS {
                            s.changes_per_sec = s.window_changes as f64 * 1000.0 / elapsed;
                            s.window_started_ms = now_ms;
                            s.window_changes = 0;
                        }
                    }
                    GesturePhase::End => {
                        s.committed = s.committed.then(&session);
                        s.session = None;
                    }
                }
            }
            CardAction::Reset { origin } => {
                s = CardState::new(origin);
            }
        }
        Rc::new(s)
    }
}
