use cublet_notation::{Face, Move, invert_sequence, parse_moves};
use cublet_prefs::AnimationPreferences;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strum::VariantArray;
use web_time::Duration;

use crate::scramble::ScrambleParams;
use crate::*;

const FRAME: Duration = Duration::from_millis(16);
const MAX_FRAMES: usize = 100_000;

/// Runs frames until the engine is idle and returns the number of frames.
fn run_to_completion<S: RenderSink>(engine: &mut CubeEngine<S>, now: &mut Duration) -> usize {
    let mut frames = 0;
    while engine.is_running() {
        engine.frame(*now);
        *now += FRAME;
        frames += 1;
        assert!(frames < MAX_FRAMES, "engine never finished");
    }
    frames
}

fn play(tokens: &str) -> CubeEngine {
    let mut engine = CubeEngine::default();
    engine.enqueue(tokens.split_whitespace());
    run_to_completion(&mut engine, &mut Duration::ZERO);
    engine
}

fn instant_engine() -> CubeEngine {
    let prefs = AnimationPreferences {
        twist_duration: 0.0,
        ..Default::default()
    };
    CubeEngine::with_prefs((), &prefs)
}

fn is_exact(c: &Cublet) -> bool {
    *c.pose() == Pose::exact(c.grid(), c.orientation())
}

#[test]
fn test_move_touches_only_its_layer() {
    for &face in Face::VARIANTS {
        let solved = CubeState::new();
        let grip = select(&solved, face);
        assert_eq!(grip.len(), 9);

        let engine = play(&face.to_string());
        let moved: Vec<CubletId> = engine
            .cublets()
            .iter()
            .zip(solved.cublets())
            .filter(|(after, before)| after != before)
            .map(|(after, _)| after.id())
            .collect();
        // The center of the face stays put but still turns.
        assert_eq!(moved.len(), 9, "{face}");
        for id in moved {
            assert!(grip.contains(&id));
        }
    }
}

#[test]
fn test_four_quarter_turns_restore() {
    for &face in Face::VARIANTS {
        for suffix in ["", "'"] {
            let m = format!("{face}{suffix}");
            let engine = play(&[&*m; 4].join(" "));
            assert_eq!(engine.state(), &CubeState::new(), "{m}");
        }
    }
}

#[test]
fn test_move_then_inverse_restores() {
    assert_eq!(play("R R'").state(), &CubeState::new());
    assert_eq!(play("U' U").state(), &CubeState::new());
    assert_eq!(play("F2 F'2").state(), &CubeState::new());

    let before = play("L D");
    let after = play("L D B B'");
    assert_eq!(after.state(), before.state());
}

#[test]
fn test_half_turn_equals_two_quarter_turns() {
    for &face in Face::VARIANTS {
        let half = play(&format!("{face}2"));
        let quarters = play(&format!("{face} {face}"));
        assert_eq!(half.state(), quarters.state(), "{face}");
        assert_ne!(half.state(), &CubeState::new());
    }
}

#[test]
fn test_sequence_does_not_overlap() {
    let mut engine = CubeEngine::default();
    let mut now = Duration::ZERO;
    engine.enqueue(["F", "U", "F'", "U'"]);

    let mut started: Vec<Move> = vec![];
    while engine.is_running() {
        if let Some(mv) = engine.current_move() {
            if started.last() != Some(&mv) {
                started.push(mv);
            }
        }
        engine.frame(now);
        now += FRAME;

        // Only the layer being turned is ever between grid positions.
        let in_motion = engine.cublets().iter().filter(|c| !is_exact(c)).count();
        assert!(in_motion <= 9);
    }

    assert_eq!(started, parse_moves("F U F' U'").unwrap());
    assert_eq!(engine.history(), parse_moves("F U F' U'").unwrap());
    assert!(engine.cublets().iter().all(is_exact));
    assert_ne!(engine.state(), &CubeState::new());
    assert!(!engine.is_running());
}

#[test]
fn test_enqueue_while_running_appends() {
    let mut engine = CubeEngine::default();
    let mut now = Duration::ZERO;
    engine.enqueue(["R"]);
    engine.frame(now);
    now += Duration::from_millis(100);
    engine.frame(now);

    engine.enqueue(["U", "nonsense", "F"]);
    engine.operate("B2");
    engine.operate("Q");
    assert_eq!(engine.current_move(), Some(Move::quarter(Face::R, true)));
    assert_eq!(
        engine.pending_moves().collect::<Vec<_>>(),
        parse_moves("U F B2").unwrap(),
    );

    run_to_completion(&mut engine, &mut now);
    assert_eq!(engine.history(), parse_moves("R U F B2").unwrap());
    assert_eq!(engine.state(), play("R U F B2").state());
}

#[test]
fn test_reset() {
    let mut engine = CubeEngine::default();
    let mut now = Duration::ZERO;
    engine.enqueue(["R", "U"]);
    engine.frame(now);
    now += Duration::from_millis(200);
    engine.frame(now);
    assert!(engine.cublets().iter().any(|c| !is_exact(c)));

    let mid_move = engine.state().clone();
    assert!(!engine.reset());
    assert_eq!(engine.state(), &mid_move);
    assert_eq!(engine.history(), parse_moves("R").unwrap());
    assert!(engine.is_running());

    run_to_completion(&mut engine, &mut now);
    assert!(engine.reset());
    assert_eq!(engine.state(), &CubeState::new());
    assert!(engine.history().is_empty());
    for c in engine.cublets() {
        assert_eq!(c.grid(), c.home());
        assert_eq!(c.orientation(), Orientation::IDENTITY);
    }
}

#[test]
fn test_undo() {
    let mut engine = CubeEngine::default();
    let mut now = Duration::ZERO;
    assert!(!engine.undo());

    engine.enqueue(["R", "U2"]);
    assert!(!engine.undo());
    run_to_completion(&mut engine, &mut now);

    assert!(engine.undo());
    assert_eq!(engine.current_move(), Some(Move::half(Face::U, false)));
    run_to_completion(&mut engine, &mut now);
    assert_eq!(engine.history(), parse_moves("R").unwrap());
    assert_eq!(engine.state(), play("R").state());

    assert!(engine.undo());
    run_to_completion(&mut engine, &mut now);
    assert!(engine.history().is_empty());
    assert_eq!(engine.state(), &CubeState::new());
    assert!(!engine.undo());
}

#[test]
fn test_scramble() {
    let params = ScrambleParams {
        len: 20,
        seed: Some(42),
    };
    let mut engine = instant_engine();
    let mut now = Duration::ZERO;
    let scramble = engine.scramble(&params).unwrap();
    assert_eq!(scramble, params.generate());
    assert!(engine.scramble(&params).is_none());

    run_to_completion(&mut engine, &mut now);
    assert_eq!(engine.history(), scramble);
    assert_ne!(engine.state(), &CubeState::new());

    engine.enqueue_moves(invert_sequence(&scramble));
    run_to_completion(&mut engine, &mut now);
    assert_eq!(engine.state(), &CubeState::new());
}

#[test]
fn test_zero_duration_moves_take_one_frame_each() {
    let mut engine = instant_engine();
    engine.enqueue(["R", "U", "F"]);
    assert_eq!(run_to_completion(&mut engine, &mut Duration::ZERO), 3);
}

fn arb_move() -> impl Strategy<Value = Move> {
    (prop::sample::select(Face::VARIANTS), any::<bool>(), any::<bool>()).prop_map(
        |(face, clockwise, half)| match half {
            true => Move::half(face, clockwise),
            false => Move::quarter(face, clockwise),
        },
    )
}

proptest! {
    #[test]
    fn proptest_inverse_restores_solved(moves in prop::collection::vec(arb_move(), 0..30)) {
        let mut engine = instant_engine();
        let mut now = Duration::ZERO;
        engine.enqueue_moves(moves.iter().copied());
        run_to_completion(&mut engine, &mut now);
        prop_assert!(engine.cublets().iter().all(is_exact));

        engine.enqueue_moves(invert_sequence(&moves));
        run_to_completion(&mut engine, &mut now);
        prop_assert_eq!(engine.state(), &CubeState::new());
    }

    #[test]
    fn proptest_grid_and_orientation_agree(moves in prop::collection::vec(arb_move(), 1..30)) {
        let mut engine = instant_engine();
        engine.enqueue_moves(moves);
        run_to_completion(&mut engine, &mut Duration::ZERO);
        for c in engine.cublets() {
            prop_assert_eq!(c.orientation() * c.home(), c.grid());
        }
    }
}
