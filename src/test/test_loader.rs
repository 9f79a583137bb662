use std::path::PathBuf;

use crate::core::*;

fn record(id: i32, grid: Vec<Vec<i64>>) -> LevelRecord {
    LevelRecord {
        id,
        width: grid.first().map(|row| row.len() as i32).unwrap_or(0),
        height: grid.len() as i32,
        grid,
        player_start: PositionRecord { row: 0, col: 0 },
        box_positions: Vec::new(),
    }
}

#[test]
fn loads_level_from_json() {
    let catalog = LevelCatalog::from_json_str(
        r#"{ "levels": [ {
            "id": 1, "width": 3, "height": 2,
            "grid": [[0, 1, 2], [2, 1, 0]],
            "playerStart": { "row": 1, "col": 2 },
            "boxPositions": [ { "row": 0, "col": 1 }, { "row": 1, "col": 0 } ]
        } ] }"#,
    )
    .unwrap();

    let level = catalog.load(1).unwrap();
    assert_eq!(level.width(), 3);
    assert_eq!(level.height(), 2);
    assert_eq!(level.tile_at(Position::new(0, 0)), Ok(TileKind::Path));
    assert_eq!(level.tile_at(Position::new(0, 1)), Ok(TileKind::Wall));
    assert_eq!(level.tile_at(Position::new(0, 2)), Ok(TileKind::Target));
    assert_eq!(level.tile_at(Position::new(1, 0)), Ok(TileKind::Target));
    assert_eq!(level.tile_at(Position::new(1, 1)), Ok(TileKind::Wall));
    assert_eq!(level.tile_at(Position::new(1, 2)), Ok(TileKind::Path));
    assert_eq!(level.player_start(), Position::new(1, 2));
    assert_eq!(
        level.box_positions(),
        vec![Position::new(0, 1), Position::new(1, 0)]
    );
}

#[test]
fn box_positions_default_to_empty() {
    let catalog = LevelCatalog::from_json_str(
        r#"{ "levels": [ {
            "id": 4, "width": 1, "height": 1, "grid": [[0]],
            "playerStart": { "row": 0, "col": 0 }
        } ] }"#,
    )
    .unwrap();
    assert!(catalog.load(4).unwrap().box_positions().is_empty());
}

#[test]
fn missing_level_is_not_found() {
    let catalog = LevelCatalog::from_records(vec![record(1, vec![vec![0]])]);
    let err = catalog.load(999).unwrap_err();
    assert!(matches!(err, LevelError::NotFound(999)));
    assert_eq!(err.to_string(), "level 999 not found");
}

#[test]
fn duplicate_ids_use_the_first_record() {
    let catalog = LevelCatalog::from_records(vec![
        record(2, vec![vec![1, 0]]),
        record(2, vec![vec![0, 1]]),
    ]);
    let level = catalog.load(2).unwrap();
    assert_eq!(level.tile_at(Position::new(0, 0)), Ok(TileKind::Wall));
}

#[test]
fn unknown_tile_code_is_rejected() {
    let catalog = LevelCatalog::from_records(vec![record(1, vec![vec![0, 7]])]);
    let err = catalog.load(1).unwrap_err();
    assert!(matches!(
        err,
        LevelError::InvalidTileCode { level_id: 1, code: 7, position } if position == Position::new(0, 1)
    ));
}

#[test]
fn grid_must_match_declared_size() {
    let mut short_rows = record(1, vec![vec![0, 0], vec![0]]);
    short_rows.width = 2;
    assert!(matches!(
        short_rows.to_level(),
        Err(LevelError::DimensionMismatch { level_id: 1, .. })
    ));

    let mut missing_row = record(1, vec![vec![0, 0]]);
    missing_row.height = 2;
    assert!(matches!(
        missing_row.to_level(),
        Err(LevelError::DimensionMismatch { level_id: 1, .. })
    ));

    let mut negative = record(1, Vec::new());
    negative.width = -1;
    assert!(matches!(
        negative.to_level(),
        Err(LevelError::DimensionMismatch { level_id: 1, .. })
    ));

    let mut oversized = record(1, vec![Vec::new(), Vec::new()]);
    oversized.width = i32::MAX;
    assert!(matches!(
        oversized.to_level(),
        Err(LevelError::DimensionMismatch { level_id: 1, .. })
    ));
}

#[test]
fn huge_declared_size_fails_the_load() {
    let catalog = LevelCatalog::from_json_str(
        r#"{ "levels": [
            { "id": 1, "width": 2147483647, "height": 2, "grid": [[], []],
              "playerStart": { "row": 0, "col": 0 } },
            { "id": 2, "width": 2147483647, "height": 1, "grid": [[]],
              "playerStart": { "row": 0, "col": 0 } }
        ] }"#,
    )
    .unwrap();

    assert!(matches!(
        catalog.load(1),
        Err(LevelError::DimensionMismatch { level_id: 1, .. })
    ));
    assert!(matches!(
        catalog.load(2),
        Err(LevelError::DimensionMismatch { level_id: 2, .. })
    ));
}

#[test]
fn empty_catalog_has_no_levels() {
    let catalog = LevelCatalog::default();
    assert!(catalog.records().is_empty());
    assert!(matches!(catalog.load(1), Err(LevelError::NotFound(1))));
}

#[test]
fn placements_must_be_inside_the_grid() {
    let mut player_outside = record(1, vec![vec![0, 0]]);
    player_outside.player_start = PositionRecord { row: 1, col: 0 };
    assert!(matches!(
        player_outside.to_level(),
        Err(LevelError::PositionOutOfBounds { entity: "player start", .. })
    ));

    let mut box_outside = record(1, vec![vec![0, 0]]);
    box_outside.box_positions = vec![PositionRecord { row: 0, col: -1 }];
    assert!(matches!(
        box_outside.to_level(),
        Err(LevelError::PositionOutOfBounds { entity: "box", .. })
    ));
}

#[test]
fn corrupt_json_is_source_failure() {
    let err = LevelCatalog::from_json_str("{ \"levels\": [ { \"id\": ").unwrap_err();
    assert!(matches!(err, LevelError::SourceCorrupt { .. }));
    assert!(err.is_source_unavailable());

    let err = LevelCatalog::from_reader("{ \"rooms\": [] }".as_bytes()).unwrap_err();
    assert!(err.is_source_unavailable());
}

#[test]
fn missing_file_is_source_unavailable() {
    let path = PathBuf::from("this/file/does/not/exist/levels.json");
    let source = JsonLevelFile::new(&path);
    let err = source.load(1).unwrap_err();
    assert!(matches!(err, LevelError::SourceUnavailable { .. }));
    assert!(err.is_source_unavailable());
    assert!(err.to_string().contains("levels.json"));
}

#[test]
fn missing_file_propagates_through_the_engine() {
    let mut game = Game::new(JsonLevelFile::new("this/file/does/not/exist/levels.json"));
    let err = game.load_level(1).unwrap_err();
    assert!(err.is_source_unavailable());
    assert_eq!(game.current_state(), GameState::Loading);
    assert_eq!(game.current_level_id(), None);
}

#[test]
fn ascii_record_round_trips_through_json() {
    let record = parse_ascii_level(
        5,
        r#"
#####
#@$.#
#####
"#,
    );
    let json = serde_json::to_string(&LevelFile {
        levels: vec![record.clone()],
    })
    .unwrap();
    assert!(json.contains("\"playerStart\""));
    assert!(json.contains("\"boxPositions\""));

    let catalog = LevelCatalog::from_json_str(&json).unwrap();
    assert_eq!(catalog.records(), &[record]);
    assert_eq!(catalog.load(5).unwrap().player_start(), Position::new(1, 1));
}

#[test]
fn engine_accepts_a_boxed_source() {
    let catalog = LevelCatalog::from_records(vec![parse_ascii_level(8, "#@$.#")]);
    let source: Box<dyn LevelSource> = Box::new(catalog);
    let mut game = Game::new(source);
    game.load_level(8).unwrap();
    game.move_player(Direction::Right);
    assert_eq!(game.current_state(), GameState::LevelCompleted);
}
