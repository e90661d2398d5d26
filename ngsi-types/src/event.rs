//! The parsed notification.
//!
//! A [`NotificationEvent`] is created once per payload and is not modified
//! afterwards. It belongs entirely to whoever asked for the parse.

use crate::{CreationTime, Dialect, Entity};
use serde::{Deserialize, Serialize};

/// A notification decoded into the canonical model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEvent {
    /// When the payload entered the pipeline.
    pub creation_time: CreationTime,

    /// Which dialect the payload was parsed as.
    pub dialect: Dialect,

    /// The `fiware-service` the notification was scoped to.
    pub tenant: String,

    /// The `fiware-servicepath`. Only v2 notifications carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_path: Option<String>,

    /// Entities in payload order.
    pub entities: Vec<Entity>,
}

impl NotificationEvent {
    /// Assembles a v2 event, scoped to a tenant and tenant path.
    #[must_use]
    pub fn v2(
        creation_time: CreationTime,
        tenant: impl Into<String>,
        tenant_path: impl Into<String>,
        entities: Vec<Entity>,
    ) -> Self {
        Self {
            creation_time,
            dialect: Dialect::V2,
            tenant: tenant.into(),
            tenant_path: Some(tenant_path.into()),
            entities,
        }
    }

    /// Assembles an NGSI-LD event. LD has no tenant path.
    #[must_use]
    pub fn ld(creation_time: CreationTime, tenant: impl Into<String>, entities: Vec<Entity>) -> Self {
        Self {
            creation_time,
            dialect: Dialect::Ld,
            tenant: tenant.into(),
            tenant_path: None,
            entities,
        }
    }

    #[must_use]
    pub fn is_linked_data(&self) -> bool {
        self.dialect.is_linked_data()
    }

    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Finds the first entity with the given id.
    #[must_use]
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }
}
