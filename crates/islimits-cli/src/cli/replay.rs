//! `islimits replay`: run a scenario's events through the limits controller.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use islimits_core::diagnostics::{RecordedRejection, RecordingDiagnostics};
use islimits_core::lifecycle::{ControllerPorts, LifecycleOutcome, LimitsController, dispatch};
use islimits_core::ports::OverrideStore;
use islimits_infra::islands::IslandRegistry;
use islimits_infra::roster::SessionRoster;
use islimits_infra::scenario::{Scenario, load_scenario};
use islimits_infra::store::{InMemoryOverrideStore, JsonFileOverrideStore};
use islimits_types::error::StoreError;
use islimits_types::event::LimitsEvent;
use islimits_types::record::OverrideRecord;

use super::output::{describe_outcome, records_table};
use crate::state::AppState;

/// Result of handling one scenario event.
#[derive(Debug, Serialize)]
pub struct EventReport {
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<LifecycleOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub events: Vec<EventReport>,
    pub records: Vec<OverrideRecord>,
    pub rejections: Vec<RecordedRejection>,
}

enum ReplayStore {
    Memory(Arc<InMemoryOverrideStore>),
    Json(Arc<JsonFileOverrideStore>),
}

impl ReplayStore {
    fn open(dir: Option<&Path>) -> Result<Self, StoreError> {
        Ok(match dir {
            Some(dir) => ReplayStore::Json(Arc::new(JsonFileOverrideStore::open(dir)?)),
            None => ReplayStore::Memory(Arc::new(InMemoryOverrideStore::new())),
        })
    }

    fn port(&self) -> Arc<dyn OverrideStore> {
        match self {
            ReplayStore::Memory(store) => store.clone(),
            ReplayStore::Json(store) => store.clone(),
        }
    }

    fn records(&self) -> Result<Vec<OverrideRecord>, StoreError> {
        match self {
            ReplayStore::Memory(store) => Ok(store.snapshot()),
            ReplayStore::Json(store) => store.list(),
        }
    }
}

/// Replay a scenario file and print what happened.
///
/// # Examples
///
/// ```bash
/// islimits replay demos/scenario.toml
/// islimits replay demos/scenario.toml --store ./records --json
/// ```
pub fn replay(state: &AppState, scenario: &Path, store: Option<&Path>, json: bool) -> Result<()> {
    let scenario = load_scenario(scenario)
        .with_context(|| format!("failed to load scenario {}", scenario.display()))?;
    let report = run_scenario(state, &scenario, store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    for (index, entry) in report.events.iter().enumerate() {
        let marker = match (&entry.outcome, &entry.error) {
            (_, Some(_)) => style("✗").red().bold(),
            (Some(outcome), _) if outcome.failures() > 0 => style("✗").red().bold(),
            (Some(LifecycleOutcome::Skipped { .. }), _) => style("-").dim(),
            _ => style("✓").green().bold(),
        };
        let detail = match (&entry.outcome, &entry.error) {
            (_, Some(error)) => style(error.clone()).red().to_string(),
            (Some(outcome), _) => describe_outcome(outcome),
            (None, None) => String::new(),
        };
        println!(
            "  {} {:>3}. {:<22} {}",
            marker,
            index + 1,
            style(entry.event).bold(),
            detail
        );
    }
    println!();

    if report.records.is_empty() {
        println!("  {} No override records stored.", style("i").blue().bold());
    } else {
        println!("{}", records_table(&report.records));
    }

    if !report.rejections.is_empty() {
        println!();
        println!("  {} Rejected capabilities:", style("!").yellow().bold());
        for rejection in &report.rejections {
            println!(
                "    {} {} {} {}",
                style("•").dim(),
                style(&rejection.occupant).cyan(),
                rejection.capability,
                style(format!("({})", rejection.reason)).dim()
            );
        }
    }
    println!();

    Ok(())
}

/// Run every event of `scenario` against fresh in-process adapters.
///
/// Events are handled in order; a failing event is reported and the replay
/// continues with the next one.
pub fn run_scenario(
    state: &AppState,
    scenario: &Scenario,
    store_dir: Option<&Path>,
) -> Result<ReplayReport> {
    let roster = Arc::new(SessionRoster::new());
    let islands = Arc::new(IslandRegistry::new());
    scenario.populate(&roster, &islands);

    let store = ReplayStore::open(store_dir).context("failed to open override store")?;
    let diagnostics = Arc::new(RecordingDiagnostics::new());

    let controller = LimitsController::new(ControllerPorts {
        game_modes: state.game_modes.clone(),
        islands: islands.clone(),
        connectivity: roster.clone(),
        capabilities: roster.clone(),
        resolver: state.catalog.clone(),
        store: store.port(),
        diagnostics: diagnostics.clone(),
    });

    let mut events = Vec::with_capacity(scenario.events.len());
    for event in &scenario.events {
        before_event(&roster, event);
        let report = match dispatch(&controller, event) {
            Ok(outcome) => EventReport {
                event: event.kind(),
                outcome: Some(outcome),
                error: None,
            },
            Err(e) => {
                tracing::warn!(event = event.kind(), error = %e, "Event failed during replay");
                EventReport {
                    event: event.kind(),
                    outcome: None,
                    error: Some(e.to_string()),
                }
            }
        };
        after_event(&islands, event);
        events.push(report);
    }

    Ok(ReplayReport {
        events,
        records: store.records().context("failed to list override records")?,
        rejections: diagnostics.entries(),
    })
}

/// A joining occupant is connected from then on, known or not.
fn before_event(roster: &SessionRoster, event: &LimitsEvent) {
    if let LimitsEvent::OccupantJoined(joined) = event {
        if !roster.connect(&joined.occupant.id) {
            roster.register(joined.occupant.clone(), true, Vec::new());
        }
    }
}

/// Keep island memberships in line with ownership changes.
fn after_event(islands: &IslandRegistry, event: &LimitsEvent) {
    match event {
        LimitsEvent::OwnershipTransferred(e) => {
            islands.assign(e.island.world.clone(), e.new_owner, e.island.id.clone());
        }
        LimitsEvent::IslandUnregistered(e) => {
            islands.remove_island(&e.island.id);
        }
        _ => {}
    }
}
