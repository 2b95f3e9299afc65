//! Level loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable level files.
//! Documents are validated after parsing so a malformed or hostile file
//! fails loudly instead of producing a broken level mid-game.

use std::fs;
use std::path::{Path, PathBuf};

use super::data::LevelData;

/// Validation limits to prevent resource exhaustion from malicious files
pub mod limits {
    /// Maximum entities a single document may place (ground runs count as one each)
    pub const MAX_ENTITIES: usize = 512;
    /// Maximum length of a level name
    pub const MAX_NAME_LEN: usize = 64;
    /// Maximum coordinate value (prevents overflow issues)
    pub const MAX_COORD: f32 = 100_000.0;
}

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for LevelError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelError::ParseError(e)
    }
}

impl From<ron::Error> for LevelError {
    fn from(e: ron::Error) -> Self {
        LevelError::SerializeError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::IoError(e) => write!(f, "IO error: {}", e),
            LevelError::ParseError(e) => write!(f, "Parse error: {}", e),
            LevelError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            LevelError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for LevelError {}

/// Check if a float is valid (not NaN or Inf)
fn is_valid_float(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

fn validate_point(x: f32, y: f32, context: &str) -> Result<(), String> {
    if !is_valid_float(x) || !is_valid_float(y) {
        return Err(format!("{}: invalid coordinates ({}, {})", context, x, y));
    }
    Ok(())
}

/// Validate an entire level document
pub fn validate_level(data: &LevelData) -> Result<(), LevelError> {
    validate_level_inner(data).map_err(LevelError::ValidationError)
}

fn validate_level_inner(data: &LevelData) -> Result<(), String> {
    if data.name.is_empty() {
        return Err("level name is empty".to_string());
    }
    if data.name.len() > limits::MAX_NAME_LEN {
        return Err(format!(
            "level name too long ({} > {})",
            data.name.len(),
            limits::MAX_NAME_LEN
        ));
    }

    let placed = data.ground.len()
        + data.platforms.len()
        + data.coins.len()
        + data.enemies.len()
        + data.hazards.len()
        + 1; // goal
    if placed > limits::MAX_ENTITIES {
        return Err(format!(
            "too many entities ({} > {})",
            placed,
            limits::MAX_ENTITIES
        ));
    }

    validate_point(data.player_start.0, data.player_start.1, "player_start")?;
    validate_point(data.goal.0, data.goal.1, "goal")?;
    if !is_valid_float(data.kill_plane_y) {
        return Err(format!("invalid kill_plane_y {}", data.kill_plane_y));
    }

    for (i, run) in data.ground.iter().enumerate() {
        let context = format!("ground[{}]", i);
        validate_point(run.start_x, run.y, &context)?;
        if !is_valid_float(run.end_x) {
            return Err(format!("{}: invalid end_x {}", context, run.end_x));
        }
    }
    for (i, &(x, y)) in data.platforms.iter().enumerate() {
        validate_point(x, y, &format!("platforms[{}]", i))?;
    }
    for (i, &(x, y)) in data.coins.iter().enumerate() {
        validate_point(x, y, &format!("coins[{}]", i))?;
    }
    for (i, spec) in data.enemies.iter().enumerate() {
        let context = format!("enemies[{}]", i);
        validate_point(spec.x, spec.y, &context)?;
        if !is_valid_float(spec.patrol_min_x) || !is_valid_float(spec.patrol_max_x) {
            return Err(format!("{}: invalid patrol bounds", context));
        }
        if spec.patrol_min_x > spec.patrol_max_x {
            return Err(format!(
                "{}: patrol bounds inverted ({} > {})",
                context, spec.patrol_min_x, spec.patrol_max_x
            ));
        }
        if !is_valid_float(spec.speed) || spec.speed < 0.0 {
            return Err(format!("{}: invalid speed {}", context, spec.speed));
        }
    }
    for (i, spec) in data.hazards.iter().enumerate() {
        let context = format!("hazards[{}]", i);
        validate_point(spec.x, spec.y, &context)?;
        if !is_valid_float(spec.width) || spec.width <= 0.0 {
            return Err(format!("{}: invalid width {}", context, spec.width));
        }
    }

    Ok(())
}

/// Load a level document from a RON file
pub fn load_level<P: AsRef<Path>>(path: P) -> Result<LevelData, LevelError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let data: LevelData = match ron::from_str(&contents) {
        Ok(d) => d,
        Err(e) => {
            // Log detailed error with context
            eprintln!("RON parse error in {}: {}", path.display(), e);
            let pos = e.position;
            // Show context around the error
            let lines: Vec<&str> = contents.lines().collect();
            let line_idx = pos.line.saturating_sub(1);
            if line_idx < lines.len() {
                let line = lines[line_idx];
                eprintln!("  Line {}: {}", pos.line, line);
                // ron columns count characters, so window by chars not bytes
                let cols = line.chars().count();
                if pos.col > 0 && pos.col <= cols {
                    let start = pos.col.saturating_sub(20);
                    let end = (pos.col + 30).min(cols);
                    let context: String = line.chars().skip(start).take(end - start).collect();
                    eprintln!("  Context: ...{}...", context);
                }
            }
            return Err(e.into());
        }
    };

    validate_level(&data)?;
    Ok(data)
}

/// Load a level document from a RON string (for embedded levels or testing)
pub fn load_level_from_str(s: &str) -> Result<LevelData, LevelError> {
    let data: LevelData = ron::from_str(s)?;
    validate_level(&data)?;
    Ok(data)
}

/// Save a level document to a RON file
pub fn save_level<P: AsRef<Path>>(data: &LevelData, path: P) -> Result<(), LevelError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    let ron_string = ron::ser::to_string_pretty(data, config)?;
    fs::write(path, ron_string)?;
    Ok(())
}

/// List the level files in a directory, sorted by file name. The sort
/// gives the campaign its order, so files are named `01_...`, `02_...`.
pub fn discover_levels<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, LevelError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir.as_ref())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("ron"))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();
    Ok(paths)
}

/// Load every level in a directory, in campaign order.
pub fn load_campaign<P: AsRef<Path>>(dir: P) -> Result<Vec<LevelData>, LevelError> {
    let dir = dir.as_ref();
    let paths = discover_levels(dir)?;
    if paths.is_empty() {
        return Err(LevelError::ValidationError(format!(
            "no level files found in {}",
            dir.display()
        )));
    }
    paths.iter().map(load_level).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{EnemySpec, GroundRun, HazardSpec};
    use tempfile::TempDir;

    const MINIMAL: &str = r#"(
        name: "Test Level",
        player_start: (100.0, 200.0),
        ground: [(start_x: 0.0, end_x: 300.0, y: 100.0)],
        platforms: [(200.0, 150.0)],
        coins: [(250.0, 220.0)],
        goal: (950.0, 270.0),
    )"#;

    fn minimal() -> LevelData {
        load_level_from_str(MINIMAL).unwrap()
    }

    #[test]
    fn test_minimal_document_parses() {
        let data = minimal();
        assert_eq!(data.name, "Test Level");
        assert_eq!(data.coins.len(), 1);
        assert!(data.enemies.is_empty());
        assert!(data.hazards.is_empty());
        // Omitted kill plane falls back to the default
        assert!(data.kill_plane_y < 0.0);
    }

    #[test]
    fn test_missing_goal_is_a_parse_error() {
        let s = r#"(
            name: "Broken",
            player_start: (0.0, 0.0),
            ground: [],
            platforms: [],
            coins: [],
        )"#;
        match load_level_from_str(s) {
            Err(LevelError::ParseError(_)) => {}
            other => panic!("expected parse error, got {:?}", other.map(|d| d.name)),
        }
    }

    #[test]
    fn test_missing_player_start_is_a_parse_error() {
        let s = r#"(
            name: "Broken",
            ground: [],
            platforms: [],
            coins: [],
            goal: (0.0, 0.0),
        )"#;
        assert!(matches!(
            load_level_from_str(s),
            Err(LevelError::ParseError(_))
        ));
    }

    #[test]
    fn test_multibyte_name_parse_error_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("volcano.ron");
        // The bad token sits a few chars right of the emoji run, so the
        // diagnostic's context window starts inside that run
        let doc = r#"(
            name: "🌋🌋🌋🌋🌋🌋", player_start: (1.0, oops),
            ground: [], platforms: [], coins: [],
            goal: (0.0, 0.0),
        )"#;
        std::fs::write(&path, doc).unwrap();

        assert!(matches!(load_level(&path), Err(LevelError::ParseError(_))));
    }

    #[test]
    fn test_huge_coordinate_fails_validation() {
        let mut data = minimal();
        data.coins.push((1.0e9, 0.0));
        assert!(matches!(
            validate_level(&data),
            Err(LevelError::ValidationError(_))
        ));
    }

    #[test]
    fn test_nan_coordinate_fails_validation() {
        let mut data = minimal();
        data.player_start.1 = f32::NAN;
        assert!(validate_level(&data).is_err());
    }

    #[test]
    fn test_inverted_patrol_fails_validation() {
        let mut data = minimal();
        data.enemies.push(EnemySpec {
            x: 300.0,
            y: 170.0,
            patrol_min_x: 400.0,
            patrol_max_x: 200.0,
            speed: 120.0,
        });
        let err = validate_level(&data).unwrap_err();
        assert!(err.to_string().contains("patrol bounds inverted"));
    }

    #[test]
    fn test_zero_width_hazard_fails_validation() {
        let mut data = minimal();
        data.hazards.push(HazardSpec {
            x: 100.0,
            y: 50.0,
            width: 0.0,
            kind: crate::game::entity::HazardKind::Lava,
        });
        assert!(validate_level(&data).is_err());
    }

    #[test]
    fn test_entity_flood_fails_validation() {
        let mut data = minimal();
        data.coins = (0..limits::MAX_ENTITIES).map(|i| (i as f32, 0.0)).collect();
        let err = validate_level(&data).unwrap_err();
        assert!(err.to_string().contains("too many entities"));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roundtrip.ron");

        let mut data = minimal();
        data.ground.push(GroundRun {
            start_x: 400.0,
            end_x: 600.0,
            y: 100.0,
        });
        save_level(&data, &path).unwrap();

        let loaded = load_level(&path).unwrap();
        assert_eq!(loaded.name, data.name);
        assert_eq!(loaded.ground.len(), 2);
        assert_eq!(loaded.goal, data.goal);
    }

    #[test]
    fn test_discover_sorts_and_filters() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("02_second.ron"), MINIMAL).unwrap();
        std::fs::write(dir.path().join("01_first.ron"), MINIMAL).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a level").unwrap();

        let paths = discover_levels(dir.path()).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("01_first.ron"));
        assert!(paths[1].ends_with("02_second.ron"));
    }

    #[test]
    fn test_empty_campaign_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load_campaign(dir.path()).unwrap_err();
        assert!(err.to_string().contains("no level files found"));
    }

    #[test]
    fn test_shipped_levels_load() {
        let campaign = load_campaign("assets/levels").unwrap();
        assert_eq!(campaign.len(), 3);
        assert_eq!(campaign[0].name, "Forest Path");
        assert_eq!(campaign[1].name, "Mountain Climb");
        assert_eq!(campaign[2].name, "Volcano Challenge");
        for data in &campaign {
            assert!(data.coins.len() >= 3);
            let built = data.build(0);
            assert!(built.total_coins >= 3);
        }
    }
}
