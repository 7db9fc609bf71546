use std::fs;

use solo_chess::agent::ai::{evaluation, get_best_move, search_root};
use solo_chess::agent::Engine;
use solo_chess::config::{EngineConfig, Variant};
use solo_chess::game_repr::{Position, Rules};

const POSITIONS: [&str; 5] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "4k3/1P6/8/8/8/8/6p1/4K3 b - - 0 1",
];

fn engine(depth: u32, seed: u64) -> Engine {
    Engine::new(EngineConfig {
        fixed_depth: Some(depth),
        seed: Some(seed),
        ..EngineConfig::default()
    })
}

#[test]
fn test_best_move_is_legal_and_position_is_restored() {
    for fen in POSITIONS {
        let mut position = Position::from_fen(fen).unwrap();
        let before = position.to_fen();
        let legal = position.legal_moves();

        let mut engine = engine(2, 11);
        let mv = get_best_move(&mut engine, &mut position, 2).unwrap();

        assert!(legal.contains(&mv), "{} is not legal in {}", mv, fen);
        assert_eq!(position.to_fen(), before);
        assert_eq!(position.ply_count(), 0);
    }
}

#[test]
fn test_search_statistics() {
    let mut position = Position::from_fen(POSITIONS[1]).unwrap();
    let mut engine = engine(2, 5);

    let result = search_root(&mut engine, &mut position, 2);
    assert!(result.best_move.is_some());
    assert_eq!(result.depth, 2);
    assert_eq!(result.moves_searched, position.legal_moves().len());
    assert!(result.candidates >= 1);
    assert!(result.evaluations > 0);
    assert!(result.nodes_searched >= result.evaluations);
    assert!(!result.timed_out);
    assert_eq!(engine.stats().evaluations, result.evaluations);
}

#[test]
fn test_jitter_stays_within_bound() {
    let position = Position::from_fen(POSITIONS[2]).unwrap();
    let mut engine = Engine::new(EngineConfig {
        jitter: 0.05,
        seed: Some(3),
        ..EngineConfig::default()
    });
    let exact = engine.evaluate_static(&position);

    for _ in 0..200 {
        let noisy = engine.evaluate_board(&position);
        assert!((noisy - exact).abs() < 0.05 + 1e-9);
    }
    assert_eq!(engine.stats().evaluations, 200);
}

#[test]
fn test_evaluation_is_symmetric_at_start() {
    let position = Position::default();
    let terms = evaluation::breakdown(&position).unwrap();
    assert_eq!(terms.material, 0.0);
    assert_eq!(terms.pawn_structure, 0.0);
    assert_eq!(terms.king_safety, 0.0);
    assert_eq!(terms.center_control, 0.0);
    assert_eq!(terms.development, 0.0);
}

#[test]
fn test_config_loads_from_file() {
    let path = std::env::temp_dir().join(format!("solo_chess_config_{}.toml", std::process::id()));
    fs::write(
        &path,
        r#"
variant = "simple"
jitter = 0.0
fixed_depth = 1
seed = 99

[weights]
mobility = 1.0
pawn_structure = 0.0
king_safety = 0.0
center_control = 0.0
development = 0.0
"#,
    )
    .unwrap();

    let config = EngineConfig::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.variant, Variant::Simple);
    assert_eq!(config.fixed_depth, Some(1));
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.weights.pawn_structure, 0.0);
    // unspecified fields keep their defaults
    assert_eq!(config.time_limit_ms, EngineConfig::default().time_limit_ms);

    let mut position = Position::default();
    let mut engine = Engine::new(config);
    assert!(get_best_move(&mut engine, &mut position, 1).is_some());
}

#[test]
fn test_missing_config_file_is_an_error() {
    let path = std::env::temp_dir().join("solo_chess_config_does_not_exist.toml");
    assert!(EngineConfig::load(&path).is_err());
}
