use super::*;
use crate::path::rounded::CornerClamp;

const SCENARIO_PATH: &str = "M540,50 L540,50 Q550,50,550,60 L550,540 Q550,550,540,550 \
                             L260,550 Q250,550,250,540 L250,60 Q250,50,260,50 Z";

fn scenario_session() -> ClipPathSession {
    let mut s = ClipPathSession::new(800.0).unwrap();
    let t = s.transform_mut();
    t.position = Vec3::new(400.0, 300.0, 0.0);
    t.scale = Scale::from([300.0, 500.0, 1.0]);
    t.rotation = EulerRotation::IDENTITY;
    t.border_radius = 10.0;
    s
}

#[test]
fn new_session_has_defaults_and_empty_path() {
    let s = ClipPathSession::new(800.0).unwrap();
    assert_eq!(s.path(), "");
    assert!(s.projected().is_empty());
    assert_eq!(*s.transform(), Transform::default());
    assert_eq!(s.transform().border_radius, DEFAULT_BORDER_RADIUS);
    assert_eq!(s.config(), SessionConfig::default());
}

#[test]
fn non_positive_focal_length_fails_at_construction() {
    for f in [0.0, -800.0, f64::NAN] {
        let err = ClipPathSession::new(f).unwrap_err();
        assert!(matches!(err, ClipError::Config(_)), "{f}: {err}");
    }
}

#[test]
fn unit_square_scenario() {
    let mut s = scenario_session();
    let path = s.update().unwrap().to_string();
    assert_eq!(
        s.projected(),
        &[
            Point::new(550.0, 50.0),
            Point::new(550.0, 550.0),
            Point::new(250.0, 550.0),
            Point::new(250.0, 50.0),
        ]
    );
    assert_eq!(s.bounds(), Rect::new(250.0, 50.0, 550.0, 550.0));
    assert_eq!(path, SCENARIO_PATH);
    assert_eq!(s.path(), SCENARIO_PATH);
    assert_eq!(write_path_data(s.bez_path()), SCENARIO_PATH);
}

#[test]
fn update_is_deterministic() {
    let mut s = scenario_session();
    s.transform_mut().rotation = EulerRotation::new(0.21, -0.4, 0.05);
    let a = s.update().unwrap().to_string();
    let b = s.update().unwrap().to_string();
    assert_eq!(a, b);

    let mut other = scenario_session();
    other.transform_mut().rotation = EulerRotation::new(0.21, -0.4, 0.05);
    assert_eq!(other.update().unwrap(), a);
}

#[test]
fn mutations_only_apply_on_update() {
    let mut s = scenario_session();
    s.update().unwrap();
    s.transform_mut().position.x += 100.0;
    assert_eq!(s.path(), SCENARIO_PATH);
    s.update().unwrap();
    assert!(s.path().starts_with("M640,50 "), "{}", s.path());
}

#[test]
fn scale_is_applied_before_rotation() {
    let mut s = ClipPathSession::new(800.0).unwrap();
    let t = s.transform_mut();
    t.scale = Scale::from([200.0, 100.0, 1.0]);
    t.rotation = EulerRotation::new(0.0, 0.0, std::f64::consts::FRAC_PI_2);
    s.update().unwrap();
    // A 200 x 100 frame turned a quarter turn about Z is 100 wide and 200 tall.
    let b = s.bounds();
    assert!((b.width() - 100.0).abs() < 1e-9, "{b:?}");
    assert!((b.height() - 200.0).abs() < 1e-9, "{b:?}");
}

#[test]
fn y_rotation_foreshortens_the_far_edge() {
    let mut s = scenario_session();
    s.transform_mut().rotation = EulerRotation::new(0.0, 0.5, 0.0);
    s.update().unwrap();
    let p = s.projected();
    // Right edge (corners 0 and 1) swings towards the camera (negative z), left edge away.
    let right = p[1].y - p[0].y;
    let left = p[2].y - p[3].y;
    assert!(right > 500.0 && left < 500.0, "right {right}, left {left}");
}

#[test]
fn uniform_scale_gives_a_square() {
    let mut s = ClipPathSession::new(800.0).unwrap();
    s.transform_mut().scale = Scale::Uniform(64.0);
    s.update().unwrap();
    assert_eq!(s.bounds(), Rect::new(-32.0, -32.0, 32.0, 32.0));
}

#[test]
fn extreme_scale_clamps_to_half_the_short_edge() {
    let mut s = ClipPathSession::new(800.0).unwrap();
    let t = s.transform_mut();
    t.scale = Scale::from([20.0, 600.0, 1.0]);
    t.border_radius = 400.0;
    s.update().unwrap();
    let corners = s.projected().to_vec();
    for el in s.bez_path().elements() {
        if let kurbo::PathEl::QuadTo(corner, exit) = *el {
            assert!(corners.contains(&corner));
            assert!(corner.distance(exit) <= 10.0 + 1e-9);
        }
    }
}

#[test]
fn update_path_only_rebuilds_the_outline() {
    let mut s = scenario_session();
    s.update().unwrap();
    s.transform_mut().border_radius = 40.0;
    // Position changes are ignored until the next full update.
    s.transform_mut().position.x = 0.0;
    let d = s.update_path().unwrap().to_string();
    assert!(d.starts_with("M510,50 "), "{d}");
    assert_eq!(s.projected()[0], Point::new(550.0, 50.0));
}

#[test]
fn update_path_before_update_projects_first() {
    let mut s = scenario_session();
    assert_eq!(s.update_path().unwrap(), SCENARIO_PATH);
}

#[test]
fn failed_update_keeps_previous_output() {
    let mut s = scenario_session();
    s.update().unwrap();

    s.transform_mut().scale = Scale::from([0.0, 500.0, 1.0]);
    let err = s.update().unwrap_err();
    assert!(matches!(err, ClipError::Geometry(_)), "{err}");
    assert_eq!(s.path(), SCENARIO_PATH);
    assert_eq!(s.projected()[0], Point::new(550.0, 50.0));

    s.transform_mut().scale = Scale::from([300.0, 500.0, 1.0]);
    s.transform_mut().border_radius = -1.0;
    assert!(matches!(s.update().unwrap_err(), ClipError::Config(_)));
    assert!(matches!(s.update_path().unwrap_err(), ClipError::Config(_)));
    assert_eq!(s.path(), SCENARIO_PATH);
}

#[test]
fn carried_clamp_is_configurable() {
    let s = ClipPathSession::with_config(SessionConfig {
        corner_clamp: CornerClamp::Carried,
        ..SessionConfig::default()
    })
    .unwrap();
    assert_eq!(s.config().corner_clamp, CornerClamp::Carried);
}

#[derive(Clone, Default)]
struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn rebuilt_path_is_reported_at_debug_level() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        scenario_session().update().unwrap();
    });

    let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(text.contains("clip path rebuilt"), "{text}");
}
