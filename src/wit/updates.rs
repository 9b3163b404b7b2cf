//! Classification helpers for work item revision records.
//!
//! Each revision of a work item is reported as an update record that may
//! carry field changes, relation changes, or both. [`WorkItemUpdateExt`]
//! answers which kind a given record is, so callers can filter revision
//! streams without poking at the raw JSON themselves.

use azure_devops_rust_api::wit::models::WorkItemUpdate;

/// Classification of a single work item revision record.
pub trait WorkItemUpdateExt {
    /// Returns `true` if this revision changed at least one field value.
    fn has_field_updates(&self) -> bool;

    /// Returns `true` if this revision changed the work item's relations.
    fn has_relation_updates(&self) -> bool;
}

impl WorkItemUpdateExt for WorkItemUpdate {
    fn has_field_updates(&self) -> bool {
        self.fields
            .as_ref()
            .and_then(|fields| fields.as_object())
            .is_some_and(|map| !map.is_empty())
    }

    fn has_relation_updates(&self) -> bool {
        self.relations.is_some()
    }
}
