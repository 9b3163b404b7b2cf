//! Patch document builder for work item create and update calls.
//!
//! The work item tracking API applies partial updates as JSON-patch style
//! documents: an ordered list of add/remove operations against `/fields/*`
//! and `/relations/*` paths. [`WorkItemPatchBuilder`] accumulates those
//! operations and hands back the SDK's `JsonPatchOperation` list.
//!
//! Field adds have add-or-update semantics: a second add for the same
//! field path mutates the pending operation in place instead of appending
//! a duplicate, preserving the first-insertion position.
//!
//! No schema validation happens here; any field name and value the caller
//! supplies is accepted verbatim. Validating against the work item type
//! schema is the server's job.
//!
//! ## Example
//!
//! ```rust,no_run
//! use azdo_wit_extras::wit::{WorkItemPatchBuilder, reference_names::system};
//!
//! # fn demo() -> Result<(), azdo_wit_extras::error::PatchError> {
//! let patch = WorkItemPatchBuilder::create("Bug", "Crash on startup")?
//!     .add_or_update_field(system::STATE, "New")?
//!     .add_comment("Filed from the crash reporter")?
//!     .build();
//! assert_eq!(patch.len(), 4);
//! # Ok(())
//! # }
//! ```

use azure_devops_rust_api::wit::models::{JsonPatchOperation, json_patch_operation::Op};
use serde_json::json;
use url::Url;

use super::reference_names::system;
use crate::error::PatchError;

/// Base path for field operations in a patch document.
pub const FIELDS_BASE_PATH: &str = "/fields";
/// Base path for relation operations in a patch document.
pub const RELATIONS_BASE_PATH: &str = "/relations";
/// Suffix appended to a link type reference name for a forward relation.
pub const RELATIONS_FORWARD_SUFFIX: &str = "-forward";
/// Suffix appended to a link type reference name for a reverse relation.
pub const RELATIONS_REVERSE_SUFFIX: &str = "-reverse";

/// Relation reference name for attached files.
pub const RELATION_ATTACHED_FILE: &str = "AttachedFile";
/// Relation reference name for artifact links.
pub const RELATION_ARTIFACT_LINK: &str = "ArtifactLink";
/// Relation reference name for hyperlinks.
pub const RELATION_HYPERLINK: &str = "Hyperlink";

/// Builds the ordered operation list for a work item create or update call.
///
/// Methods consume and return the builder so operations chain with `?`:
/// blank required arguments fail immediately, before anything is recorded.
#[derive(Debug, Default)]
pub struct WorkItemPatchBuilder {
    operations: Vec<JsonPatchOperation>,
}

impl WorkItemPatchBuilder {
    /// Creates an empty builder, suitable for update calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder seeded for a work item creation: the work item
    /// type and title fields are mandatory on create.
    pub fn create(work_item_type: &str, title: &str) -> Result<Self, PatchError> {
        require_non_blank(work_item_type, "work_item_type")?;
        require_non_blank(title, "title")?;

        Self::new()
            .add_or_update_field(system::WORK_ITEM_TYPE, work_item_type)?
            .add_or_update_field(system::TITLE, title)
    }

    /// Adds the field value for `reference_name`, or updates the pending
    /// add operation for the same field path in place. Matching is
    /// case-insensitive; first-insertion order is preserved.
    pub fn add_or_update_field(
        mut self,
        reference_name: &str,
        value: impl Into<serde_json::Value>,
    ) -> Result<Self, PatchError> {
        require_non_blank(reference_name, "reference_name")?;

        let path = field_path(reference_name);
        let value = value.into();

        if let Some(existing) = self.operations.iter_mut().find(|operation| {
            matches!(operation.op, Some(Op::Add))
                && operation
                    .path
                    .as_deref()
                    .is_some_and(|p| p.eq_ignore_ascii_case(&path))
        }) {
            existing.value = Some(value);
        } else {
            self.operations.push(JsonPatchOperation {
                op: Some(Op::Add),
                path: Some(path),
                value: Some(value),
                from: None,
            });
        }

        Ok(self)
    }

    /// Adds a history entry for the provided comment.
    pub fn add_comment(self, comment: &str) -> Result<Self, PatchError> {
        require_non_blank(comment, "comment")?;
        self.add_or_update_field(system::HISTORY, comment)
    }

    /// Changes the work item type. Depending on the target type,
    /// additional field values may need to be set alongside.
    pub fn change_work_item_type(self, new_work_item_type: &str) -> Result<Self, PatchError> {
        require_non_blank(new_work_item_type, "new_work_item_type")?;
        self.add_or_update_field(system::WORK_ITEM_TYPE, new_work_item_type)
    }

    /// Adds a forward relation of the given link type pointing at the
    /// target work item URL.
    pub fn add_forward_relation(
        self,
        target_work_item_url: &str,
        link_type_reference_name: &str,
        comment: Option<&str>,
    ) -> Result<Self, PatchError> {
        require_non_blank(target_work_item_url, "target_work_item_url")?;
        require_non_blank(link_type_reference_name, "link_type_reference_name")?;

        Ok(self.push_relation(
            format!("{link_type_reference_name}{RELATIONS_FORWARD_SUFFIX}"),
            target_work_item_url,
            comment,
        ))
    }

    /// Adds a reverse relation of the given link type pointing at the
    /// target work item URL.
    pub fn add_reverse_relation(
        self,
        target_work_item_url: &str,
        link_type_reference_name: &str,
        comment: Option<&str>,
    ) -> Result<Self, PatchError> {
        require_non_blank(target_work_item_url, "target_work_item_url")?;
        require_non_blank(link_type_reference_name, "link_type_reference_name")?;

        Ok(self.push_relation(
            format!("{link_type_reference_name}{RELATIONS_REVERSE_SUFFIX}"),
            target_work_item_url,
            comment,
        ))
    }

    /// Attaches an uploaded file to the work item via its attachment URL
    /// (as returned by the attachment upload call).
    pub fn add_attachment(
        self,
        attachment_url: &str,
        comment: Option<&str>,
    ) -> Result<Self, PatchError> {
        require_non_blank(attachment_url, "attachment_url")?;
        Ok(self.push_relation(RELATION_ATTACHED_FILE.to_string(), attachment_url, comment))
    }

    /// Adds a hyperlink to the work item.
    pub fn add_hyperlink(self, hyperlink: &Url, comment: Option<&str>) -> Self {
        self.push_relation(RELATION_HYPERLINK.to_string(), hyperlink.as_str(), comment)
    }

    /// Adds an artifact link (e.g. a build or commit) to the work item.
    pub fn add_artifact_link(
        self,
        referenced_uri: &str,
        comment: Option<&str>,
    ) -> Result<Self, PatchError> {
        require_non_blank(referenced_uri, "referenced_uri")?;
        Ok(self.push_relation(RELATION_ARTIFACT_LINK.to_string(), referenced_uri, comment))
    }

    /// Removes all pending operations for the field path of
    /// `reference_name`, matching case-insensitively.
    pub fn remove_field_value(mut self, reference_name: &str) -> Result<Self, PatchError> {
        require_non_blank(reference_name, "reference_name")?;

        let path = field_path(reference_name);
        self.operations.retain(|operation| {
            !operation
                .path
                .as_deref()
                .is_some_and(|p| p.eq_ignore_ascii_case(&path))
        });

        Ok(self)
    }

    /// Emits a remove operation for the relation at `relation_index`
    /// (the index within the work item's relations, not a pending one).
    pub fn remove_relation(mut self, relation_index: usize) -> Self {
        self.operations.push(JsonPatchOperation {
            op: Some(Op::Remove),
            path: Some(format!("{RELATIONS_BASE_PATH}/{relation_index}")),
            value: None,
            from: None,
        });
        self
    }

    /// Number of pending operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if no operations are pending.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Hands back the operation list for the SDK's create/update calls.
    pub fn build(self) -> Vec<JsonPatchOperation> {
        self.operations
    }

    fn push_relation(mut self, rel: String, url: &str, comment: Option<&str>) -> Self {
        self.operations.push(JsonPatchOperation {
            op: Some(Op::Add),
            path: Some(format!("{RELATIONS_BASE_PATH}/-")),
            value: Some(json!({
                "rel": rel,
                "url": url,
                "attributes": {
                    "comment": comment.unwrap_or_default(),
                },
            })),
            from: None,
        });
        self
    }
}

impl From<WorkItemPatchBuilder> for Vec<JsonPatchOperation> {
    fn from(builder: WorkItemPatchBuilder) -> Self {
        builder.build()
    }
}

/// The patch document path for a field reference name.
fn field_path(reference_name: &str) -> String {
    format!("{FIELDS_BASE_PATH}/{reference_name}")
}

fn require_non_blank(value: &str, argument: &'static str) -> Result<(), PatchError> {
    if value.trim().is_empty() {
        Err(PatchError::BlankArgument { argument })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Add Or Update Field Dedupe
    ///
    /// Tests that a second add for the same field updates in place.
    ///
    /// ## Test Scenario
    /// - Adds two fields, then re-adds the first with a new value
    ///
    /// ## Expected Outcome
    /// - Two operations remain; the first keeps its position and carries
    ///   the latest value
    #[test]
    fn test_add_or_update_field_updates_in_place() {
        let builder = WorkItemPatchBuilder::new()
            .add_or_update_field(system::TITLE, "Old title")
            .unwrap()
            .add_or_update_field(system::STATE, "New")
            .unwrap()
            .add_or_update_field(system::TITLE, "New title")
            .unwrap();

        let operations = builder.build();
        assert_eq!(operations.len(), 2);
        assert_eq!(operations[0].path.as_deref(), Some("/fields/System.Title"));
        assert_eq!(operations[0].value, Some(json!("New title")));
        assert_eq!(operations[1].path.as_deref(), Some("/fields/System.State"));
    }

    /// # Case-Insensitive Field Matching
    ///
    /// Tests that field path matching ignores case.
    ///
    /// ## Test Scenario
    /// - Adds a field, then re-adds it with different casing
    ///
    /// ## Expected Outcome
    /// - A single operation remains, carrying the latest value
    #[test]
    fn test_add_or_update_field_is_case_insensitive() {
        let operations = WorkItemPatchBuilder::new()
            .add_or_update_field("System.Title", "first")
            .unwrap()
            .add_or_update_field("system.title", "second")
            .unwrap()
            .build();

        assert_eq!(operations.len(), 1);
        assert_eq!(operations[0].value, Some(json!("second")));
    }

    /// # Remove After Add
    ///
    /// Tests that removing a field leaves no pending operation for it.
    ///
    /// ## Test Scenario
    /// - Adds two fields, removes one (with different casing)
    ///
    /// ## Expected Outcome
    /// - Only the untouched field's operation remains
    #[test]
    fn test_remove_field_value_after_add() {
        let operations = WorkItemPatchBuilder::new()
            .add_or_update_field(system::TITLE, "Title")
            .unwrap()
            .add_or_update_field(system::STATE, "Active")
            .unwrap()
            .remove_field_value("SYSTEM.TITLE")
            .unwrap()
            .build();

        assert_eq!(operations.len(), 1);
        assert_eq!(operations[0].path.as_deref(), Some("/fields/System.State"));
    }

    /// # Relation Payload Shape
    ///
    /// Tests the fixed triple emitted for forward and reverse relations.
    ///
    /// ## Test Scenario
    /// - Adds a forward relation with a comment and a reverse one without
    ///
    /// ## Expected Outcome
    /// - Both target `/relations/-` with the direction-suffixed rel name
    ///   and a comment attribute (empty when none was given)
    #[test]
    fn test_relation_operations() {
        let operations = WorkItemPatchBuilder::new()
            .add_forward_relation(
                "https://dev.azure.com/org/_apis/wit/workItems/42",
                "System.LinkTypes.Hierarchy",
                Some("child of"),
            )
            .unwrap()
            .add_reverse_relation(
                "https://dev.azure.com/org/_apis/wit/workItems/7",
                "System.LinkTypes.Hierarchy",
                None,
            )
            .unwrap()
            .build();

        assert_eq!(operations.len(), 2);
        assert_eq!(operations[0].path.as_deref(), Some("/relations/-"));
        assert_eq!(
            operations[0].value,
            Some(json!({
                "rel": "System.LinkTypes.Hierarchy-forward",
                "url": "https://dev.azure.com/org/_apis/wit/workItems/42",
                "attributes": { "comment": "child of" },
            }))
        );
        assert_eq!(
            operations[1].value,
            Some(json!({
                "rel": "System.LinkTypes.Hierarchy-reverse",
                "url": "https://dev.azure.com/org/_apis/wit/workItems/7",
                "attributes": { "comment": "" },
            }))
        );
    }

    /// # Hyperlink, Attachment and Artifact Relations
    ///
    /// Tests the fixed relation reference names.
    ///
    /// ## Test Scenario
    /// - Adds one relation of each kind
    ///
    /// ## Expected Outcome
    /// - Each operation carries its well-known rel name
    #[test]
    fn test_special_relation_reference_names() {
        let hyperlink = Url::parse("https://example.com/docs").unwrap();

        let operations = WorkItemPatchBuilder::new()
            .add_hyperlink(&hyperlink, Some("docs"))
            .add_attachment("https://dev.azure.com/org/_apis/wit/attachments/abc", None)
            .unwrap()
            .add_artifact_link("vstfs:///Git/Commit/proj%2Frepo%2Fdeadbeef", None)
            .unwrap()
            .build();

        let rels: Vec<&str> = operations
            .iter()
            .map(|op| {
                op.value
                    .as_ref()
                    .and_then(|v| v.get("rel"))
                    .and_then(|v| v.as_str())
                    .unwrap()
            })
            .collect();
        assert_eq!(rels, vec!["Hyperlink", "AttachedFile", "ArtifactLink"]);
    }

    /// # Create Builder Seeds Type And Title
    ///
    /// Tests the creation constructor.
    ///
    /// ## Test Scenario
    /// - Creates a builder for a new Bug
    ///
    /// ## Expected Outcome
    /// - The first two operations set work item type and title in order
    #[test]
    fn test_create_seeds_type_and_title() {
        let operations = WorkItemPatchBuilder::create("Bug", "It broke")
            .unwrap()
            .build();

        assert_eq!(operations.len(), 2);
        assert_eq!(
            operations[0].path.as_deref(),
            Some("/fields/System.WorkItemType")
        );
        assert_eq!(operations[0].value, Some(json!("Bug")));
        assert_eq!(operations[1].path.as_deref(), Some("/fields/System.Title"));
        assert_eq!(operations[1].value, Some(json!("It broke")));
    }

    /// # Blank Arguments Rejected
    ///
    /// Tests immediate validation of required string arguments.
    ///
    /// ## Test Scenario
    /// - Calls builder methods with empty or whitespace-only arguments
    ///
    /// ## Expected Outcome
    /// - Each call fails with BlankArgument naming the offending argument
    #[test]
    fn test_blank_arguments_are_rejected() {
        assert_eq!(
            WorkItemPatchBuilder::new()
                .add_or_update_field("   ", "value")
                .unwrap_err(),
            PatchError::BlankArgument {
                argument: "reference_name"
            }
        );
        assert_eq!(
            WorkItemPatchBuilder::new().add_comment("").unwrap_err(),
            PatchError::BlankArgument { argument: "comment" }
        );
        assert_eq!(
            WorkItemPatchBuilder::create("", "Title").unwrap_err(),
            PatchError::BlankArgument {
                argument: "work_item_type"
            }
        );
        assert_eq!(
            WorkItemPatchBuilder::create("Bug", " ").unwrap_err(),
            PatchError::BlankArgument { argument: "title" }
        );
        assert_eq!(
            WorkItemPatchBuilder::new()
                .add_forward_relation("", "System.LinkTypes.Related", None)
                .unwrap_err(),
            PatchError::BlankArgument {
                argument: "target_work_item_url"
            }
        );
    }

    /// # Remove Relation By Index
    ///
    /// Tests the remove operation for an existing relation.
    ///
    /// ## Test Scenario
    /// - Emits a removal for relation index 3
    ///
    /// ## Expected Outcome
    /// - A remove operation at /relations/3 with no value
    #[test]
    fn test_remove_relation_by_index() {
        let operations = WorkItemPatchBuilder::new().remove_relation(3).build();

        assert_eq!(operations.len(), 1);
        assert!(matches!(operations[0].op, Some(Op::Remove)));
        assert_eq!(operations[0].path.as_deref(), Some("/relations/3"));
        assert_eq!(operations[0].value, None);
    }

    /// # Garbage In, Garbage Out
    ///
    /// Tests that arbitrary field names and values are accepted verbatim.
    ///
    /// ## Test Scenario
    /// - Adds a custom field with a structured value
    ///
    /// ## Expected Outcome
    /// - The operation carries the name and value unchanged
    #[test]
    fn test_no_schema_validation() {
        let operations = WorkItemPatchBuilder::new()
            .add_or_update_field("Custom.Whatever", json!({ "nested": [1, 2, 3] }))
            .unwrap()
            .build();

        assert_eq!(
            operations[0].path.as_deref(),
            Some("/fields/Custom.Whatever")
        );
        assert_eq!(operations[0].value, Some(json!({ "nested": [1, 2, 3] })));
    }
}
