//! Admin set domain types.

use chrono::{DateTime, Utc};

use glossa_core::{AdminId, CallerId};

/// One admin-set membership (domain type).
///
/// Membership is a flat set: a caller identity is either present or absent.
/// The operator identity never appears here; it is configuration and is
/// evaluated as a distinct, superior tier.
#[derive(Debug, Clone)]
pub struct Admin {
    /// Database ID of this membership row.
    pub id: AdminId,
    /// The caller identity holding admin privilege.
    pub caller: CallerId,
    /// When the privilege was granted.
    pub created_at: DateTime<Utc>,
}
