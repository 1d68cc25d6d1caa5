//! `islimits parse`: evaluate one capability string.

use anyhow::{Result, bail};
use console::style;

use islimits_core::grammar::{format_capability, parse_capability};
use islimits_types::error::Rejection;
use islimits_types::resource::Grant;

use crate::state::AppState;

/// Parse a capability against a prefix and the configured resource catalog.
///
/// # Examples
///
/// ```bash
/// islimits parse bskyblock.island.limit.HOPPER.20 --game-mode BSkyBlock
/// islimits parse acid.island.limit.COW.4 --prefix acid.island.limit.
/// ```
pub fn parse_one(
    state: &AppState,
    capability: &str,
    prefix: Option<String>,
    game_mode: Option<String>,
    json: bool,
) -> Result<()> {
    let prefix = resolve_prefix(state, prefix, game_mode.as_deref())?;
    let result = parse_capability(capability, &prefix, state.catalog.as_ref());

    if json {
        let value = result_json(capability, &prefix, result.as_ref());
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!();
    match result {
        None => {
            println!(
                "  {} '{}' is not a limit capability (prefix {})",
                style("i").blue().bold(),
                capability,
                style(&prefix).dim()
            );
        }
        Some(Ok(grant)) => {
            println!("  {} Capability accepted", style("✓").green().bold());
            println!();
            println!("  {}  {}", style("Kind:").bold(), grant.resource.label());
            println!(
                "  {}  {}",
                style("Resource:").bold(),
                style(grant.resource.key()).cyan()
            );
            println!("  {}  {}", style("Limit:").bold(), grant.limit);
            println!(
                "  {}  {}",
                style("Canonical:").bold(),
                style(format_capability(&prefix, &grant)).dim()
            );
        }
        Some(Err(rejection)) => {
            println!("  {} Capability rejected", style("✗").red().bold());
            println!();
            println!("  {}  {}", style("Reason:").bold(), rejection.reason);
        }
    }
    println!();

    Ok(())
}

fn result_json(
    capability: &str,
    prefix: &str,
    result: Option<&Result<Grant, Rejection>>,
) -> serde_json::Value {
    match result {
        None => serde_json::json!({
            "capability": capability,
            "prefix": prefix,
            "status": "ignored",
        }),
        Some(Ok(grant)) => serde_json::json!({
            "capability": capability,
            "prefix": prefix,
            "status": "accepted",
            "grant": grant,
            "canonical": format_capability(prefix, grant),
        }),
        Some(Err(rejection)) => serde_json::json!({
            "capability": capability,
            "prefix": prefix,
            "status": "rejected",
            "reason": rejection.reason.to_string(),
        }),
    }
}

/// Pick the limit prefix: explicit `--prefix`, else the named game mode, else
/// the only configured game mode.
fn resolve_prefix(
    state: &AppState,
    prefix: Option<String>,
    game_mode: Option<&str>,
) -> Result<String> {
    if let Some(prefix) = prefix {
        return Ok(prefix);
    }
    if let Some(name) = game_mode {
        return match state.game_mode(name) {
            Some(gm) => Ok(gm.limit_prefix()),
            None => bail!("game mode '{name}' is not configured"),
        };
    }
    match state.config.game_modes.as_slice() {
        [only] => Ok(only.limit_prefix()),
        [] => bail!("no game modes configured; pass --prefix"),
        _ => bail!("several game modes configured; pass --game-mode or --prefix"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use islimits_types::config::{CatalogConfig, LimitsConfig};
    use islimits_types::game_mode::GameMode;
    use islimits_types::ids::WorldId;

    fn state_with(game_modes: Vec<GameMode>) -> AppState {
        let config = LimitsConfig {
            game_modes,
            ..LimitsConfig::default()
        };
        AppState::from_config(config)
    }

    fn bskyblock() -> GameMode {
        GameMode::new(
            "BSkyBlock",
            "bskyblock.",
            vec![WorldId::new("bskyblock_world")],
        )
    }

    fn acidisland() -> GameMode {
        GameMode::new("AcidIsland", "acidisland.", vec![WorldId::new("acid_world")])
    }

    #[test]
    fn explicit_prefix_wins() {
        let state = state_with(vec![bskyblock()]);
        let prefix = resolve_prefix(&state, Some("x.island.limit.".into()), None).unwrap();
        assert_eq!(prefix, "x.island.limit.");
    }

    #[test]
    fn game_mode_name_is_case_insensitive() {
        let state = state_with(vec![bskyblock(), acidisland()]);
        let prefix = resolve_prefix(&state, None, Some("acidisland")).unwrap();
        assert_eq!(prefix, "acidisland.island.limit.");
    }

    #[test]
    fn single_game_mode_is_the_default() {
        let state = state_with(vec![bskyblock()]);
        let prefix = resolve_prefix(&state, None, None).unwrap();
        assert_eq!(prefix, "bskyblock.island.limit.");
    }

    #[test]
    fn accepted_capability_reports_canonical_form() {
        let state = AppState::from_config(LimitsConfig {
            game_modes: vec![bskyblock()],
            catalog: CatalogConfig {
                materials: vec!["HOPPER".to_string()],
                ..CatalogConfig::default()
            },
        });
        let prefix = "bskyblock.island.limit.";
        let capability = "bskyblock.island.limit.hopper.020";
        let result = parse_capability(capability, prefix, state.catalog.as_ref());

        let json = result_json(capability, prefix, result.as_ref());
        assert_eq!(json["status"], "accepted");
        assert_eq!(json["grant"]["limit"], 20);
        assert_eq!(json["canonical"], "bskyblock.island.limit.HOPPER.20");
    }

    #[test]
    fn rejected_and_foreign_capabilities_have_no_canonical_form() {
        let state = state_with(vec![bskyblock()]);
        let prefix = "bskyblock.island.limit.";

        let rejected = parse_capability("bskyblock.island.limit.*", prefix, state.catalog.as_ref());
        let json = result_json("bskyblock.island.limit.*", prefix, rejected.as_ref());
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["reason"], "wildcards are not allowed");
        assert!(json.get("canonical").is_none());

        let json = result_json("essentials.fly", prefix, None);
        assert_eq!(json["status"], "ignored");
    }

    #[test]
    fn ambiguous_or_missing_game_mode_is_an_error() {
        assert!(resolve_prefix(&state_with(vec![]), None, None).is_err());
        assert!(resolve_prefix(&state_with(vec![bskyblock(), acidisland()]), None, None).is_err());
        assert!(resolve_prefix(&state_with(vec![bskyblock()]), None, Some("OneBlock")).is_err());
    }
}
