//! Integration tests for action dispatch and relative mouse mode

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use input_actions::input::{
    ActionState, Behavior, CursorControl, CursorStyle, GameAction, InputError, InputManager,
    InputSurface, KeyCode, MouseCode, PhysicalButton, Point, Size,
};
use parking_lot::Mutex;

/// Host stand-in that records cursor moves
#[derive(Default)]
struct FakeSurface {
    origin: Point,
    size: Size,
    hidden: AtomicBool,
    minimized: AtomicBool,
    no_cursor_control: bool,
    reject_moves: Arc<AtomicBool>,
    moves: Arc<Mutex<Vec<Point>>>,
}

impl FakeSurface {
    fn window(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            ..Self::default()
        }
    }
}

struct FakeCursor {
    reject: Arc<AtomicBool>,
    moves: Arc<Mutex<Vec<Point>>>,
}

impl CursorControl for FakeCursor {
    fn move_cursor(&mut self, to: Point) -> Result<(), InputError> {
        if self.reject.load(Ordering::SeqCst) {
            return Err(InputError::CursorMoveRejected("denied".to_string()));
        }
        self.moves.lock().push(to);
        Ok(())
    }
}

impl InputSurface for FakeSurface {
    fn is_showing(&self) -> bool {
        !self.minimized.load(Ordering::SeqCst)
    }

    fn size(&self) -> Size {
        self.size
    }

    fn to_screen(&self, local: Point) -> Point {
        Point::new(local.x + self.origin.x, local.y + self.origin.y)
    }

    fn acquire_cursor_control(&self) -> Result<Box<dyn CursorControl>, InputError> {
        if self.no_cursor_control {
            return Err(InputError::CursorControlUnavailable("no robot".to_string()));
        }
        Ok(Box::new(FakeCursor {
            reject: Arc::clone(&self.reject_moves),
            moves: Arc::clone(&self.moves),
        }))
    }

    fn set_cursor(&self, style: CursorStyle) {
        self.hidden
            .store(style == CursorStyle::Hidden, Ordering::SeqCst);
    }
}

fn manager_with(surface: FakeSurface) -> (InputManager, Arc<FakeSurface>) {
    let surface = Arc::new(surface);
    let input = InputManager::new(Arc::clone(&surface) as Arc<dyn InputSurface>);
    (input, surface)
}

fn manager() -> InputManager {
    manager_with(FakeSurface::window(800, 600)).0
}

#[test]
fn test_held_key_scenario() {
    let input = manager();
    let action = Arc::new(GameAction::new("A"));
    input.map_to_key(&action, KeyCode::K);

    input.key_pressed(KeyCode::K);
    assert!(action.is_pressed());
    assert_eq!(action.amount(), 1);
    assert_eq!(action.amount(), 1);

    input.key_released(KeyCode::K);
    assert_eq!(action.amount(), 1);
    assert_eq!(action.amount(), 0);
}

#[test]
fn test_jump_scenario() {
    let input = manager();
    let jump = Arc::new(GameAction::with_behavior(
        "Jump",
        Behavior::DetectInitialPressOnly,
    ));
    input.map_to_key(&jump, KeyCode::J);

    input.key_pressed(KeyCode::J);
    let polls: Vec<u32> = (0..3).map(|_| jump.amount()).collect();
    assert_eq!(polls, [1, 0, 0]);

    input.key_released(KeyCode::J);
    input.key_pressed(KeyCode::J);
    assert_eq!(jump.amount(), 1);
    assert_eq!(jump.amount(), 0);
}

#[test]
fn test_unbound_and_typed_keys_have_no_effect() {
    let input = manager();
    let action = Arc::new(GameAction::new("fire"));
    input.map_to_key(&action, KeyCode::F);

    input.key_pressed(KeyCode::G);
    input.key_typed(KeyCode::F);
    assert_eq!(action.state(), ActionState::Released);
    assert!(!action.is_pressed());
}

#[test]
fn test_two_sources_accumulate() {
    let input = manager();
    let fire = Arc::new(GameAction::new("fire"));
    input.map_to_key(&fire, KeyCode::CONTROL_LEFT);
    input.map_to_mouse(&fire, MouseCode::Button1);

    input.key_pressed(KeyCode::CONTROL_LEFT);
    input.mouse_pressed(PhysicalButton::Primary);
    assert_eq!(fire.amount(), 2);
}

#[test]
fn test_mouse_buttons() {
    let input = manager();
    let middle = Arc::new(GameAction::new("middle"));
    let right = Arc::new(GameAction::new("right"));
    input.map_to_mouse(&middle, MouseCode::Button2);
    input.map_to_mouse(&right, MouseCode::Button3);

    input.mouse_pressed(PhysicalButton::Secondary);
    assert!(right.is_pressed());
    assert!(!middle.is_pressed());

    input.mouse_released(PhysicalButton::Secondary);
    input.mouse_pressed(PhysicalButton::Other(7));
    assert_eq!(right.amount(), 1);
    assert_eq!(right.amount(), 0);
    assert!(!middle.is_pressed());
}

#[test]
fn test_clear_map_removes_bindings_and_resets() {
    let input = manager();
    let fire = Arc::new(GameAction::new("fire"));
    let other = Arc::new(GameAction::new("other"));
    input.map_to_key(&fire, KeyCode::SPACE);
    input.map_to_key(&fire, KeyCode::ENTER);
    input.map_to_mouse(&fire, MouseCode::Button1);
    input.map_to_key(&other, KeyCode::Q);

    input.key_pressed(KeyCode::SPACE);
    input.clear_map(&fire);

    assert_eq!(fire.state(), ActionState::Released);
    assert_eq!(fire.amount(), 0);
    assert!(input.mappings(&fire).is_empty());
    assert_eq!(input.mappings(&other), ["Q"]);

    input.key_pressed(KeyCode::ENTER);
    input.mouse_pressed(PhysicalButton::Primary);
    assert!(!fire.is_pressed());
}

#[test]
fn test_motion_pulses_directions() {
    let input = manager();
    let left = Arc::new(GameAction::with_behavior(
        "left",
        Behavior::DetectInitialPressOnly,
    ));
    let right = Arc::new(GameAction::new("right"));
    let up = Arc::new(GameAction::new("up"));
    let down = Arc::new(GameAction::new("down"));
    input.map_to_mouse(&left, MouseCode::MoveLeft);
    input.map_to_mouse(&right, MouseCode::MoveRight);
    input.map_to_mouse(&up, MouseCode::MoveUp);
    input.map_to_mouse(&down, MouseCode::MoveDown);

    input.mouse_moved(Point::new(100, 50));
    assert_eq!(right.amount(), 100);
    assert_eq!(down.amount(), 50);

    input.mouse_moved(Point::new(95, 53));
    assert_eq!(left.state(), ActionState::Released);
    assert_eq!(left.amount(), 5);
    assert_eq!(left.amount(), 0);
    assert_eq!(down.amount(), 3);
    assert_eq!(up.amount(), 0);
    assert_eq!(right.amount(), 0);

    assert_eq!(input.mouse_position(), Point::new(95, 53));
    assert_eq!((input.mouse_x(), input.mouse_y()), (95, 53));
}

#[test]
fn test_drag_is_motion() {
    let input = manager();
    let right = Arc::new(GameAction::new("right"));
    input.map_to_mouse(&right, MouseCode::MoveRight);

    input.mouse_dragged(Point::new(7, 0));
    assert_eq!(right.amount(), 7);
}

#[test]
fn test_wheel_pulses() {
    let input = manager();
    let zoom_in = Arc::new(GameAction::new("zoom-in"));
    let zoom_out = Arc::new(GameAction::new("zoom-out"));
    input.map_to_mouse(&zoom_in, MouseCode::WheelUp);
    input.map_to_mouse(&zoom_out, MouseCode::WheelDown);

    input.mouse_wheel(-5);
    assert_eq!(zoom_in.state(), ActionState::Released);
    assert_eq!(zoom_in.amount(), 5);
    assert!(!zoom_in.is_pressed());

    input.mouse_wheel(2);
    input.mouse_wheel(0);
    assert_eq!(zoom_out.amount(), 2);
}

#[test]
fn test_relative_mode_recenters_and_drops_echo() {
    let (input, surface) = manager_with(FakeSurface {
        origin: Point::new(1000, 500),
        ..FakeSurface::window(800, 600)
    });
    let left = Arc::new(GameAction::new("left"));
    let right = Arc::new(GameAction::new("right"));
    let up = Arc::new(GameAction::new("up"));
    let down = Arc::new(GameAction::new("down"));
    input.map_to_mouse(&left, MouseCode::MoveLeft);
    input.map_to_mouse(&right, MouseCode::MoveRight);
    input.map_to_mouse(&up, MouseCode::MoveUp);
    input.map_to_mouse(&down, MouseCode::MoveDown);

    input.set_relative_mouse_mode(true);
    assert!(input.is_relative_mouse_mode());
    assert_eq!(surface.moves.lock().as_slice(), [Point::new(1400, 800)]);

    // Echo of the recenter: dropped, then recentered again
    input.mouse_moved(Point::new(400, 300));
    for action in [&left, &right, &up, &down] {
        assert_eq!(action.amount(), 0, "{} pulsed on echo", action.name());
    }
    assert_eq!(input.mouse_position(), Point::new(400, 300));
    assert_eq!(surface.moves.lock().len(), 2, "no recenter after echo");

    // Genuine motion away from the center
    input.mouse_moved(Point::new(410, 296));
    assert_eq!(right.amount(), 10);
    assert_eq!(up.amount(), 4);
    assert_eq!(surface.moves.lock().len(), 3);
    assert_eq!(surface.moves.lock().last(), Some(&Point::new(1400, 800)));

    // Its echo brings the cursor back without a reverse pulse
    input.mouse_moved(Point::new(400, 300));
    assert_eq!(left.amount(), 0);
    assert_eq!(down.amount(), 0);
    assert_eq!(surface.moves.lock().len(), 4, "no recenter after echo");
    assert!(
        surface
            .moves
            .lock()
            .iter()
            .all(|&p| p == Point::new(1400, 800))
    );
}

#[test]
fn test_hidden_surface_is_not_recentered() {
    let (input, surface) = manager_with(FakeSurface::window(800, 600));
    let right = Arc::new(GameAction::new("right"));
    input.map_to_mouse(&right, MouseCode::MoveRight);

    surface.minimized.store(true, Ordering::SeqCst);
    input.set_relative_mouse_mode(true);
    assert!(input.is_relative_mouse_mode());
    assert!(surface.moves.lock().is_empty());

    // Motion is still reported, but the cursor is left alone
    input.mouse_moved(Point::new(30, 0));
    assert_eq!(right.amount(), 30);
    assert!(surface.moves.lock().is_empty());
    assert!(input.is_relative_mouse_mode());

    // Recentering resumes once the surface is visible again
    surface.minimized.store(false, Ordering::SeqCst);
    input.mouse_moved(Point::new(35, 0));
    assert_eq!(surface.moves.lock().as_slice(), [Point::new(400, 300)]);
}

#[test]
fn test_center_position_is_genuine_without_pending_recenter() {
    let input = manager();
    let right = Arc::new(GameAction::new("right"));
    input.map_to_mouse(&right, MouseCode::MoveRight);

    // Absolute mode: nothing outstanding, so the center is ordinary motion
    input.mouse_moved(Point::new(400, 300));
    assert_eq!(right.amount(), 400);
}

#[test]
fn test_relative_mode_is_idempotent() {
    let (input, surface) = manager_with(FakeSurface::window(800, 600));

    input.set_relative_mouse_mode(true);
    input.set_relative_mouse_mode(true);
    assert_eq!(surface.moves.lock().len(), 1);

    input.set_relative_mouse_mode(false);
    input.set_relative_mouse_mode(false);
    assert!(!input.is_relative_mouse_mode());

    input.mouse_moved(Point::new(5, 5));
    assert_eq!(surface.moves.lock().len(), 1);
}

#[test]
fn test_relative_mode_unavailable_falls_back() {
    let (input, surface) = manager_with(FakeSurface {
        no_cursor_control: true,
        ..FakeSurface::window(800, 600)
    });

    input.set_relative_mouse_mode(true);
    assert!(!input.is_relative_mouse_mode());
    assert!(surface.moves.lock().is_empty());
}

#[test]
fn test_rejected_move_falls_back() {
    let (input, surface) = manager_with(FakeSurface::window(800, 600));
    input.set_relative_mouse_mode(true);
    assert!(input.is_relative_mouse_mode());

    surface.reject_moves.store(true, Ordering::SeqCst);
    input.mouse_moved(Point::new(420, 300));
    assert!(!input.is_relative_mouse_mode());
}

#[test]
fn test_rejected_first_recenter_leaves_mode_off() {
    let (input, surface) = manager_with(FakeSurface::window(800, 600));
    surface.reject_moves.store(true, Ordering::SeqCst);
    input.set_relative_mouse_mode(true);
    assert!(!input.is_relative_mouse_mode());
    assert!(surface.moves.lock().is_empty());
}

#[test]
fn test_set_cursor_reaches_surface() {
    let (input, surface) = manager_with(FakeSurface::window(800, 600));
    input.set_cursor(CursorStyle::Hidden);
    assert!(surface.hidden.load(Ordering::SeqCst));
    input.set_cursor(CursorStyle::Default);
    assert!(!surface.hidden.load(Ordering::SeqCst));
}

#[test]
fn test_set_surface_keeps_relative_mode() {
    let (input, _) = manager_with(FakeSurface::window(800, 600));
    input.set_relative_mouse_mode(true);

    let next = Arc::new(FakeSurface::window(200, 100));
    input.set_surface(Arc::clone(&next) as Arc<dyn InputSurface>);

    assert!(input.is_relative_mouse_mode());
    assert_eq!(next.moves.lock().as_slice(), [Point::new(100, 50)]);
}

#[test]
fn test_once_per_press_across_threads() {
    let input = Arc::new(manager());
    let jump = Arc::new(GameAction::with_behavior(
        "jump",
        Behavior::DetectInitialPressOnly,
    ));
    input.map_to_key(&jump, KeyCode::SPACE);

    const CYCLES: u32 = 2_000;

    let producer = {
        let input = Arc::clone(&input);
        std::thread::spawn(move || {
            for _ in 0..CYCLES {
                input.key_pressed(KeyCode::SPACE);
                input.key_pressed(KeyCode::SPACE);
                input.key_released(KeyCode::SPACE);
            }
        })
    };

    let mut total = 0u64;
    while !producer.is_finished() {
        total += u64::from(jump.amount());
    }
    producer.join().expect("producer panicked");
    total += u64::from(jump.amount());

    // Each cycle contributes at most two presses, and at least one
    assert!(total >= u64::from(CYCLES), "lost presses: {total}");
    assert!(total <= 2 * u64::from(CYCLES), "too many presses: {total}");
}

#[test]
fn test_debug_format_alongside_motion_and_remaps() {
    let (input, _) = manager_with(FakeSurface::window(800, 600));
    let input = Arc::new(input);
    input.set_relative_mouse_mode(true);

    const ROUNDS: i32 = 2_000;

    let workers: Vec<_> = (0..2)
        .flat_map(|_| {
            let debug = {
                let input = Arc::clone(&input);
                std::thread::spawn(move || {
                    for _ in 0..ROUNDS {
                        let text = format!("{:?}", input);
                        assert!(text.contains("InputManager"));
                    }
                })
            };
            let motion = {
                let input = Arc::clone(&input);
                std::thread::spawn(move || {
                    for i in 0..ROUNDS {
                        input.mouse_moved(Point::new(i % 800, (i * 7) % 600));
                    }
                })
            };
            let remap = {
                let input = Arc::clone(&input);
                std::thread::spawn(move || {
                    let action = Arc::new(GameAction::new("remapped"));
                    for _ in 0..ROUNDS {
                        input.map_to_mouse(&action, MouseCode::MoveRight);
                        input.map_to_key(&action, KeyCode::R);
                        input.clear_map(&action);
                    }
                })
            };
            [debug, motion, remap]
        })
        .collect();

    for worker in workers {
        worker.join().expect("worker panicked");
    }
}
