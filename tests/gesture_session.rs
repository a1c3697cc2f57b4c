use std::cell::RefCell;
use std::f64::consts::FRAC_PI_4;
use std::rc::Rc;

use transform_gesture::{
    FnSink, GestureConfig, GestureEvent, GestureOptions, GesturePhase, ManualTimer, Point,
    Transform, TransformGesture,
};

type Log = Rc<RefCell<Vec<(GesturePhase, GestureEvent)>>>;

struct Harness {
    gesture: TransformGesture,
    timer: ManualTimer,
    log: Log,
}

impl Harness {
    fn new(can_rotate: bool, can_scale: bool) -> Self {
        let log: Log = Rc::default();
        let sink_log = log.clone();
        let options = GestureOptions {
            can_rotate,
            can_scale,
            ..Default::default()
        };
        let config = GestureConfig::new()
            .with_options(options)
            .unwrap()
            .with_sink(FnSink(move |phase, e: &GestureEvent| {
                sink_log.borrow_mut().push((phase, *e))
            }));
        let timer = ManualTimer::new();
        Self {
            gesture: TransformGesture::new(config, Box::new(timer.clone())),
            timer,
            log,
        }
    }

    /// Lets the host timer elapse, the way an event loop would.
    fn tick(&mut self) {
        if self.timer.elapse() {
            self.gesture.fire_change();
        }
    }

    fn phases(&self) -> Vec<GesturePhase> {
        self.log.borrow().iter().map(|(p, _)| *p).collect()
    }
}

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn assert_close(a: Transform, b: Transform) {
    let eps = 1e-9;
    assert!((a.translation.x - b.translation.x).abs() < eps, "{a:?} != {b:?}");
    assert!((a.translation.y - b.translation.y).abs() < eps, "{a:?} != {b:?}");
    assert!((a.scale - b.scale).abs() < eps, "{a:?} != {b:?}");
    assert!((a.rotation - b.rotation).abs() < eps, "{a:?} != {b:?}");
}

#[test]
fn pinch_example_reaches_double_scale() {
    let mut h = Harness::new(false, true);
    h.gesture.add_pointer(1, p(0.0, 0.0));
    h.gesture.add_pointer(2, p(100.0, 0.0));
    assert_eq!(h.gesture.transform_state().snapshot().sum_of_distances, Some(100.0));

    h.gesture.pointer_move(2, p(200.0, 0.0));
    assert_eq!(h.gesture.centroid(), Some(p(100.0, 0.0)));
    let ratio = h.gesture.transform_state().interim_scale_ratio(h.gesture.pointers());
    assert!((ratio - 2.0).abs() < 1e-12);
    assert!((h.gesture.scale() - 2.0).abs() < 1e-12);
}

#[test]
fn membership_changes_never_jump() {
    let mut h = Harness::new(true, true);
    h.gesture.add_pointer(1, p(10.0, 20.0));
    h.gesture.pointer_move(1, p(30.0, 25.0));

    let before = h.gesture.transform();
    h.gesture.add_pointer(2, p(130.0, 25.0));
    assert_close(before, h.gesture.transform());

    h.gesture.pointer_move(1, p(20.0, 60.0));
    h.gesture.pointer_move(2, p(180.0, -40.0));
    let before = h.gesture.transform();
    h.gesture.add_pointer(3, p(0.0, 0.0));
    assert_close(before, h.gesture.transform());

    h.gesture.pointer_move(3, p(-30.0, 10.0));
    let before = h.gesture.transform();
    h.gesture.remove_pointer(2);
    assert_close(before, h.gesture.transform());

    let before = h.gesture.transform();
    h.gesture.pointer_cancel(1, p(0.0, 0.0));
    assert_close(before, h.gesture.transform());

    let before = h.gesture.transform();
    h.gesture.pointer_up(3, p(0.0, 0.0));
    assert_close(before, h.gesture.transform());

    let end = h.log.borrow().last().copied().unwrap();
    assert_eq!(end.0, GesturePhase::End);
    assert_close(end.1.transform(), before);
}

#[test]
fn recapture_resets_interim_after_every_change() {
    let mut h = Harness::new(true, true);
    h.gesture.add_pointer(1, p(0.0, 0.0));
    h.gesture.add_pointer(2, p(50.0, 50.0));
    h.gesture.pointer_move(2, p(90.0, -10.0));
    h.gesture.add_pointer(3, p(20.0, 80.0));
    let state = h.gesture.transform_state();
    assert_eq!(state.interim_scale_ratio(h.gesture.pointers()), 1.0);
    assert_eq!(state.interim_rotation_delta(h.gesture.pointers()), 0.0);
}

#[test]
fn single_contact_tracks_displacement_only() {
    let mut h = Harness::new(true, true);
    h.gesture.add_pointer(7, p(100.0, 100.0));
    h.gesture.pointer_move(7, p(130.0, 60.0));
    assert_eq!(h.gesture.scale(), 1.0);
    assert_eq!(h.gesture.rotation(), 0.0);
    assert_eq!(h.gesture.translation(), p(30.0, -40.0));
}

#[test]
fn disabled_capabilities_never_change() {
    let mut h = Harness::new(false, false);
    h.gesture.add_pointer(1, p(0.0, 0.0));
    h.gesture.add_pointer(2, p(10.0, 0.0));
    for step in 1..=20 {
        let angle = step as f64 * 0.3;
        let r = 10.0 * step as f64;
        h.gesture.pointer_move(2, p(r * angle.cos(), r * angle.sin()));
        assert_eq!(h.gesture.scale(), 1.0);
        assert_eq!(h.gesture.rotation(), 0.0);
    }
}

#[test]
fn twist_reports_rotation() {
    let mut h = Harness::new(true, false);
    h.gesture.add_pointer(1, p(0.0, 0.0));
    h.gesture.add_pointer(2, p(100.0, 0.0));
    // 45 degrees about the centroid (50, 0)
    let d = 50.0 * FRAC_PI_4.cos();
    h.gesture.pointer_move(1, p(50.0 - d, -d));
    h.gesture.pointer_move(2, p(50.0 + d, d));
    assert!((h.gesture.rotation() - FRAC_PI_4).abs() < 1e-9);
    assert_eq!(h.gesture.scale(), 1.0);
    let t = h.gesture.translation();
    // the surface origin, 50 left of the centroid, swings with the fingers
    assert!((t.x - (50.0 - d)).abs() < 1e-9);
    assert!((t.y + d).abs() < 1e-9);
}

#[test]
fn burst_of_moves_yields_one_change_with_latest_state() {
    let mut h = Harness::new(false, true);
    h.gesture.add_pointer(1, p(0.0, 0.0));
    h.gesture.add_pointer(2, p(100.0, 0.0));
    for x in [110.0, 140.0, 170.0, 200.0] {
        h.gesture.pointer_move(2, p(x, 0.0));
    }
    assert_eq!(h.timer.arm_count(), 1);
    h.tick();
    h.tick();
    assert_eq!(h.phases(), vec![GesturePhase::Start, GesturePhase::Change]);
    let change = h.log.borrow()[1].1;
    assert_eq!(change.pointer_count, 2);
    assert!((change.scale - 2.0).abs() < 1e-12);
    assert_eq!(change.centroid, Some(p(100.0, 0.0)));

    // the next move re-arms
    h.gesture.pointer_move(2, p(300.0, 0.0));
    assert_eq!(h.timer.arm_count(), 2);
    h.tick();
    assert_eq!(h.phases().len(), 3);
    assert!((h.log.borrow()[2].1.scale - 3.0).abs() < 1e-12);
}

#[test]
fn sessions_are_framed_by_start_and_end() {
    let mut h = Harness::new(true, true);
    for session in 0..3 {
        h.gesture.add_pointer(1, p(0.0, 0.0));
        h.gesture.add_pointer(2, p(10.0, 10.0));
        h.gesture.pointer_move(1, p(5.0, 0.0));
        h.tick();
        h.gesture.pointer_move(2, p(40.0, 40.0));
        h.gesture.remove_pointer(1);
        h.gesture.remove_pointer(2);
        // a fire racing the end is swallowed
        h.gesture.fire_change();
        h.tick();

        let phases = h.phases();
        let this = &phases[session * 3..];
        assert_eq!(
            this,
            &[GesturePhase::Start, GesturePhase::Change, GesturePhase::End]
        );
    }
    assert!(!h.gesture.is_active());
    assert!(!h.gesture.is_change_pending());
    assert_eq!(h.timer.cancel_count(), 3);
}

#[test]
fn end_carries_last_known_centroid() {
    let mut h = Harness::new(false, false);
    h.gesture.add_pointer(1, p(0.0, 0.0));
    h.gesture.add_pointer(2, p(20.0, 0.0));
    h.gesture.remove_pointer(1);
    h.gesture.pointer_move(2, p(50.0, 50.0));
    h.gesture.remove_pointer(2);
    let end = h.log.borrow().last().copied().unwrap();
    assert_eq!(end.0, GesturePhase::End);
    assert_eq!(end.1.pointer_count, 0);
    assert_eq!(end.1.centroid, Some(p(50.0, 50.0)));
}

#[test]
fn duplicate_and_stale_events_do_not_disturb_the_session() {
    let mut h = Harness::new(true, true);
    h.gesture.add_pointer(1, p(0.0, 0.0));
    h.gesture.add_pointer(1, p(99.0, 99.0));
    h.gesture.pointer_move(2, p(5.0, 5.0));
    h.gesture.remove_pointer(2);
    assert_eq!(h.gesture.pointer_count(), 1);
    assert!(!h.gesture.is_change_pending());
    assert_eq!(h.phases(), vec![GesturePhase::Start]);
}
