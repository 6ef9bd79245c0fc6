use crate::config::TrajectoryConfig;
use crate::Result;

/// Public API: parse a stored trajectory JSON document into a validated
/// `TrajectoryConfig`.
///
/// Notes:
/// - `name`, `range` and `playback` are optional and fall back to defaults.
/// - Unknown envelope names load as the constant envelope.
/// - The result is validated before it is returned.
pub fn parse_trajectory_json(s: &str) -> Result<TrajectoryConfig> {
    let cfg: TrajectoryConfig = serde_json::from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Parse a JSON array of stored trajectories, validating each.
pub fn parse_trajectory_list_json(s: &str) -> Result<Vec<TrajectoryConfig>> {
    let list: Vec<TrajectoryConfig> = serde_json::from_str(s)?;
    for cfg in &list {
        cfg.validate()?;
    }
    Ok(list)
}

/// Serialize a trajectory in the same stored format.
pub fn to_json_pretty(cfg: &TrajectoryConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(cfg)?)
}
