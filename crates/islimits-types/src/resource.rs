//! Resource kinds that a placement limit can apply to, and the grants that
//! raise them.
//!
//! A resource is either a block material or an entity type. Both are named by
//! upper-case keys (`STONE`, `ITEM_FRAME`) as published by the resource
//! registry.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Entity key that is always eligible for a limit, spawnable or not.
pub const PAINTING: &str = "PAINTING";

/// Entity key that is always eligible for a limit, spawnable or not.
pub const ITEM_FRAME: &str = "ITEM_FRAME";

/// Identifier of a block material (e.g. `STONE`, `HOPPER`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub String);

impl MaterialId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an entity type (e.g. `COW`, `ARMOR_STAND`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityTypeId(pub String);

impl EntityTypeId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Paintings and item frames are hanging entities that are never
    /// spawnable, yet may always carry a limit.
    pub fn is_hanging_exception(&self) -> bool {
        self.0 == PAINTING || self.0 == ITEM_FRAME
    }
}

impl fmt::Display for EntityTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The thing a limit applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum ResourceKind {
    Block(MaterialId),
    Entity(EntityTypeId),
}

impl ResourceKind {
    pub fn block(name: impl Into<String>) -> Self {
        ResourceKind::Block(MaterialId::new(name))
    }

    pub fn entity(name: impl Into<String>) -> Self {
        ResourceKind::Entity(EntityTypeId::new(name))
    }

    /// Short lowercase label for listings ("block" / "entity").
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Block(_) => "block",
            ResourceKind::Entity(_) => "entity",
        }
    }

    /// The registry key of the resource.
    pub fn key(&self) -> &str {
        match self {
            ResourceKind::Block(m) => m.as_str(),
            ResourceKind::Entity(e) => e.as_str(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.key())
    }
}

/// A validated capability: raise the limit for `resource` to at least `limit`.
///
/// Produced and consumed within one recompute pass; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    pub resource: ResourceKind,
    pub limit: u32,
}

impl Grant {
    pub fn new(resource: ResourceKind, limit: u32) -> Self {
        Self { resource, limit }
    }
}
