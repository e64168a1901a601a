//! Unit tests for the engine crate.

use std::io::Write as _;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::tempdir;

use cubik_core::{Axis, Color, Cube, Side};

use crate::{App, AppConfig, ConfigError, CubikConfig, Move, scramble};

#[test]
fn digit_keys_map_to_the_nine_layers() {
    let expected = [
        ('1', Axis::X, 0),
        ('2', Axis::X, 1),
        ('3', Axis::X, 2),
        ('4', Axis::Y, 0),
        ('5', Axis::Y, 1),
        ('6', Axis::Y, 2),
        ('7', Axis::Z, 0),
        ('8', Axis::Z, 1),
        ('9', Axis::Z, 2),
    ];
    for (digit, axis, layer) in expected {
        assert_eq!(Move::from_digit(digit), Some(Move { axis, layer }));
    }
}

#[test]
fn non_layer_keys_map_to_nothing() {
    for digit in ['0', 'a', ' ', 'x'] {
        assert_eq!(Move::from_digit(digit), None);
    }
}

#[test]
fn moves_display_as_axis_and_layer() {
    let mv = Move::from_digit('6').expect("6 is a layer key");
    assert_eq!(mv.to_string(), "Y2");
}

#[test]
fn scramble_leaves_a_valid_unsolved_cube() {
    let mut cube = Cube::solved();
    let mut rng = StdRng::seed_from_u64(7);
    scramble(&mut cube, 100, &mut rng);

    assert!(!cube.is_solved(), "100 random twists cannot land on solved");
    for side in Side::ALL {
        assert!(
            cube.face(side).iter().all(|&color| color != Color::Hidden),
            "{side} face must keep real colors through a scramble"
        );
    }
}

#[test]
fn zero_twist_scramble_changes_nothing() {
    let mut cube = Cube::solved();
    let mut rng = StdRng::seed_from_u64(7);
    scramble(&mut cube, 0, &mut rng);
    assert_eq!(cube, Cube::solved());
}

#[test]
fn fresh_app_uses_defaults() {
    let app = App::new(None);
    assert!(app.is_solved());
    assert_eq!(app.moves(), 0);
    assert_eq!(app.last_move(), None);
    assert!(!app.ui_options().ascii_only);
    assert!(!app.ui_options().high_contrast);
}

#[test]
fn app_resolves_options_from_config() {
    let config = CubikConfig {
        app: Some(AppConfig {
            ascii_only: true,
            high_contrast: true,
            scramble_moves: Some(5),
        }),
    };
    let app = App::new(Some(&config));
    assert!(app.ui_options().ascii_only);
    assert!(app.ui_options().high_contrast);
}

#[test]
fn twists_are_ignored_while_solved() {
    let mut app = App::new(None);
    app.twist(Move {
        axis: Axis::X,
        layer: 0,
    });
    assert!(app.is_solved());
    assert_eq!(app.moves(), 0);
}

#[test]
fn twists_count_once_scrambled() {
    let mut app = App::new(None);
    app.scramble();
    assert_eq!(app.moves(), 0);

    let mv = Move::from_digit('1').expect("1 is a layer key");
    app.twist(mv);
    assert_eq!(app.moves(), 1);
    assert_eq!(app.last_move(), Some(mv));
}

#[test]
fn missing_config_file_is_not_an_error() {
    let dir = tempdir().expect("temp dir for config test");
    let loaded = CubikConfig::load_from(&dir.path().join("config.toml"))
        .expect("missing file loads as None");
    assert!(loaded.is_none());
}

#[test]
fn config_file_round_trips_fields() {
    let dir = tempdir().expect("temp dir for config test");
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).expect("create config file");
    writeln!(
        file,
        "[app]\nascii_only = true\nhigh_contrast = false\nscramble_moves = 42"
    )
    .expect("write config file");

    let config = CubikConfig::load_from(&path)
        .expect("valid config parses")
        .expect("file exists");
    let app = config.app.expect("[app] section present");
    assert!(app.ascii_only);
    assert!(!app.high_contrast);
    assert_eq!(app.scramble_moves, Some(42));
}

#[test]
fn empty_config_file_parses_to_defaults() {
    let dir = tempdir().expect("temp dir for config test");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").expect("write empty config");

    let config = CubikConfig::load_from(&path)
        .expect("empty config parses")
        .expect("file exists");
    assert!(config.app.is_none());
}

#[test]
fn malformed_config_reports_a_parse_error() {
    let dir = tempdir().expect("temp dir for config test");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[app\nascii_only = ???").expect("write bad config");

    let err = CubikConfig::load_from(&path).expect_err("malformed toml must not parse");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &path);
}
