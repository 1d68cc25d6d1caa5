//! Max-wins merging of grants into an override record.
//!
//! The stored limit for a resource only ever grows while the record is live:
//! each grant raises it to `max(current, grant.limit)`, and a resource with no
//! entry takes the grant's limit as its initial value. Because `max` is
//! commutative and associative, the merged record does not depend on the order
//! in which capabilities were listed.

use islimits_types::record::OverrideRecord;
use islimits_types::resource::Grant;

/// The merged record and whether any entry was inserted or raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub record: OverrideRecord,
    pub changed: bool,
}

/// Fold `grants` into `record`.
pub fn merge_grants<'a, I>(mut record: OverrideRecord, grants: I) -> MergeOutcome
where
    I: IntoIterator<Item = &'a Grant>,
{
    let mut changed = false;
    for grant in grants {
        changed |= raise_limit(&mut record, grant);
    }
    MergeOutcome { record, changed }
}

/// Apply one grant. Returns `true` if the record changed.
pub fn raise_limit(record: &mut OverrideRecord, grant: &Grant) -> bool {
    match record.limit(&grant.resource) {
        Some(current) if current >= grant.limit => false,
        _ => {
            record.set_limit(grant.resource.clone(), grant.limit);
            true
        }
    }
}
