//! Shared rendering helpers for command output.

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use islimits_core::lifecycle::{LifecycleOutcome, SkipReason};
use islimits_types::record::OverrideRecord;

/// One-line description of what the controller did.
pub fn describe_outcome(outcome: &LifecycleOutcome) -> String {
    match outcome {
        LifecycleOutcome::Recomputed {
            island,
            changed,
            accepted,
            rejected,
            ..
        } => format!(
            "recomputed {island} ({accepted} accepted, {rejected} rejected, {})",
            if *changed { "written" } else { "unchanged" }
        ),
        LifecycleOutcome::Cleared { island, removed } => {
            format!("cleared {island} ({removed} limits removed)")
        }
        LifecycleOutcome::Skipped { reason } => format!("skipped: {}", describe_skip(*reason)),
        LifecycleOutcome::Failed { island, error } => format!("failed {island}: {error}"),
        LifecycleOutcome::Sequence { steps } => steps
            .iter()
            .map(describe_outcome)
            .collect::<Vec<_>>()
            .join("; "),
    }
}

fn describe_skip(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::UnmanagedWorld => "world is not managed by any game mode",
        SkipReason::IncompleteGameMode => "game mode has no name or permission prefix",
        SkipReason::OccupantOffline => "occupant is offline",
        SkipReason::NoIsland => "occupant has no island",
    }
}

/// Table of every limit in `records`, one row per limit.
pub fn records_table(records: &[OverrideRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Island").fg(Color::White),
        Cell::new("Game Mode").fg(Color::White),
        Cell::new("Kind").fg(Color::White),
        Cell::new("Resource").fg(Color::White),
        Cell::new("Limit").fg(Color::White),
    ]);

    for record in records {
        if record.is_empty() {
            table.add_row(vec![
                Cell::new(record.island_id.as_str()),
                Cell::new(&record.game_mode),
                Cell::new("-").fg(Color::DarkGrey),
                Cell::new("(no limits)").fg(Color::DarkGrey),
                Cell::new(""),
            ]);
            continue;
        }
        for (resource, limit) in record.limits() {
            table.add_row(vec![
                Cell::new(record.island_id.as_str()),
                Cell::new(&record.game_mode),
                Cell::new(resource.label()),
                Cell::new(resource.key()).fg(Color::Cyan),
                Cell::new(limit),
            ]);
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use islimits_types::ids::{IslandId, OccupantId};
    use islimits_types::resource::ResourceKind;

    #[test]
    fn recompute_description_mentions_counts() {
        let outcome = LifecycleOutcome::Recomputed {
            island: IslandId::new("isl-1"),
            occupant: OccupantId::new(),
            changed: true,
            accepted: 2,
            rejected: 1,
        };
        assert_eq!(
            describe_outcome(&outcome),
            "recomputed isl-1 (2 accepted, 1 rejected, written)"
        );
    }

    #[test]
    fn sequence_description_joins_steps() {
        let outcome = LifecycleOutcome::Sequence {
            steps: vec![
                LifecycleOutcome::Cleared {
                    island: IslandId::new("isl-1"),
                    removed: 3,
                },
                LifecycleOutcome::Skipped {
                    reason: SkipReason::OccupantOffline,
                },
            ],
        };
        assert_eq!(
            describe_outcome(&outcome),
            "cleared isl-1 (3 limits removed); skipped: occupant is offline"
        );
    }

    #[test]
    fn failed_step_names_island_and_error() {
        let outcome = LifecycleOutcome::Sequence {
            steps: vec![
                LifecycleOutcome::Failed {
                    island: IslandId::new("isl-sky"),
                    error: "store unavailable: disk full".to_string(),
                },
                LifecycleOutcome::Cleared {
                    island: IslandId::new("isl-acid"),
                    removed: 0,
                },
            ],
        };
        assert_eq!(
            describe_outcome(&outcome),
            "failed isl-sky: store unavailable: disk full; cleared isl-acid (0 limits removed)"
        );
    }

    #[test]
    fn table_has_one_row_per_limit() {
        let mut record = OverrideRecord::new(IslandId::new("isl-1"), "BSkyBlock");
        record.set_limit(ResourceKind::block("STONE"), 64);
        record.set_limit(ResourceKind::entity("COW"), 4);
        let empty = OverrideRecord::new(IslandId::new("isl-2"), "BSkyBlock");

        let table = records_table(&[record, empty]);
        assert_eq!(table.row_iter().count(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("STONE"));
        assert!(rendered.contains("(no limits)"));
    }
}
