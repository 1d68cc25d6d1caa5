//! Capability grammar for placement limits.
//!
//! A limit capability has exactly five dot-separated segments:
//!
//! ```text
//! bskyblock.island.limit.HOPPER.20
//! \_______ prefix _____/ \key/ \limit
//! ```
//!
//! The key names a block material or an entity type (case-insensitive) and
//! the limit is a non-negative integer. Strings outside the prefix are not
//! limit capabilities and are ignored. Malformed strings are rejected one at
//! a time; a rejection never stops evaluation of the remaining strings.

use islimits_types::error::{RejectReason, Rejection};
use islimits_types::resource::{Grant, ResourceKind};

use crate::ports::{DiagnosticsSink, ResourceResolver};

/// Number of dot-separated segments in a limit capability.
pub const SEGMENT_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// Single capability
// ---------------------------------------------------------------------------

/// Parse one capability string.
///
/// Returns `None` when the string does not start with `prefix` (not a limit
/// capability), otherwise the grant or the rejection.
pub fn parse_capability<R: ResourceResolver + ?Sized>(
    capability: &str,
    prefix: &str,
    resolver: &R,
) -> Option<Result<Grant, Rejection>> {
    if !capability.starts_with(prefix) {
        return None;
    }
    Some(parse_grant(capability, prefix, resolver).map_err(|reason| Rejection::new(capability, reason)))
}

fn parse_grant<R: ResourceResolver + ?Sized>(
    capability: &str,
    prefix: &str,
    resolver: &R,
) -> Result<Grant, RejectReason> {
    if capability.contains(&format!("{prefix}*")) {
        return Err(RejectReason::Wildcard);
    }

    let segments: Vec<&str> = capability.split('.').collect();
    let [_, _, _, key, amount] = segments.as_slice() else {
        return Err(RejectReason::WrongSegmentCount {
            prefix: prefix.to_string(),
            found: segments.len(),
        });
    };

    let limit = parse_limit(amount)?;
    let resource = resolve_resource(&key.to_ascii_uppercase(), resolver)?;
    Ok(Grant::new(resource, limit))
}

/// Parse the limit segment: ASCII digits only, and within range.
fn parse_limit(amount: &str) -> Result<u32, RejectReason> {
    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RejectReason::NonNumericLimit);
    }
    amount.parse().map_err(|_| RejectReason::LimitOutOfRange)
}

/// Resolve an upper-case key to a resource kind.
///
/// Block materials take precedence over entity types with the same name.
/// Entity types must pass the resolver's eligibility check.
pub fn resolve_resource<R: ResourceResolver + ?Sized>(
    key: &str,
    resolver: &R,
) -> Result<ResourceKind, RejectReason> {
    if let Some(material) = resolver.resolve_block(key) {
        return Ok(ResourceKind::Block(material));
    }
    match resolver.resolve_entity(key) {
        Some(entity) if resolver.is_eligible(&entity) => Ok(ResourceKind::Entity(entity)),
        Some(_) => Err(RejectReason::UnsupportedEntity {
            key: key.to_string(),
        }),
        None => Err(RejectReason::UnknownResource {
            key: key.to_string(),
        }),
    }
}

/// Render the canonical capability string for a grant.
pub fn format_capability(prefix: &str, grant: &Grant) -> String {
    format!("{prefix}{}.{}", grant.resource.key(), grant.limit)
}

// ---------------------------------------------------------------------------
// Capability sets
// ---------------------------------------------------------------------------

/// Result of parsing every capability of one occupant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCapabilities {
    /// Valid grants, in input order.
    pub grants: Vec<Grant>,
    /// Rejected limit capabilities, in input order.
    pub rejections: Vec<Rejection>,
}

impl ParsedCapabilities {
    /// Forward every rejection to a diagnostics sink.
    pub fn report(&self, occupant_name: &str, sink: &dyn DiagnosticsSink) {
        for rejection in &self.rejections {
            sink.log_rejection(occupant_name, &rejection.raw, &rejection.reason);
        }
    }
}

/// Parse a full capability set. Each string is handled independently.
pub fn parse_capability_set<S, R>(capabilities: &[S], prefix: &str, resolver: &R) -> ParsedCapabilities
where
    S: AsRef<str>,
    R: ResourceResolver + ?Sized,
{
    let mut parsed = ParsedCapabilities::default();
    for capability in capabilities {
        match parse_capability(capability.as_ref(), prefix, resolver) {
            Some(Ok(grant)) => parsed.grants.push(grant),
            Some(Err(rejection)) => parsed.rejections.push(rejection),
            None => {}
        }
    }
    parsed
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
