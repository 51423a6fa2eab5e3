//! Value enums for CLI arguments

use clap::ValueEnum;

use crate::api::AccountRelationship;

/// Relationship between the current account and another
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RelationshipKind {
    /// The related account bills to this one
    BillsTo,
    /// The related account is managed by this one
    Managed,
    /// The related account manages this one
    Managing,
}

impl From<RelationshipKind> for AccountRelationship {
    fn from(kind: RelationshipKind) -> Self {
        match kind {
            RelationshipKind::BillsTo => AccountRelationship::BillsTo,
            RelationshipKind::Managed => AccountRelationship::Managed,
            RelationshipKind::Managing => AccountRelationship::Managing,
        }
    }
}
