//! Typed field value access on retrieved work items.
//!
//! Retrieved work items carry their field values as an untyped JSON map
//! keyed by field reference name. [`WorkItemFieldsExt`] layers typed
//! accessors on top: deserialize-based lookup, caller-supplied defaults
//! and custom conversion closures for fields whose wire shape does not
//! match the wanted type (identity refs, date strings and the like).
//!
//! A missing field is not an error. Accessors report it as `Ok(None)` or
//! hand back the supplied default; only blank reference names, work items
//! fetched without fields, and failed custom conversions are errors.
//!
//! ## Example
//!
//! ```rust,no_run
//! use azure_devops_rust_api::wit::models::WorkItem;
//! use azdo_wit_extras::wit::{WorkItemFieldsExt, reference_names::system};
//!
//! # fn demo(work_item: &WorkItem) -> Result<(), azdo_wit_extras::error::FieldError> {
//! let title: Option<String> = work_item.field_value(system::TITLE)?;
//! let priority: i64 = work_item.field_value_or("Microsoft.VSTS.Common.Priority", 2)?;
//! # Ok(())
//! # }
//! ```

use azure_devops_rust_api::wit::models::WorkItem;
use serde::de::DeserializeOwned;

use crate::error::FieldError;

/// Typed accessors over a work item's field map.
pub trait WorkItemFieldsExt {
    /// Reads the field value for `reference_name`, deserialized into `T`.
    ///
    /// Returns `Ok(None)` when the field is absent or its JSON value does
    /// not deserialize into `T`.
    fn field_value<T: DeserializeOwned>(
        &self,
        reference_name: &str,
    ) -> Result<Option<T>, FieldError>;

    /// Like [`field_value`](Self::field_value), but hands back `default`
    /// when the field is absent or does not deserialize into `T`.
    fn field_value_or<T: DeserializeOwned>(
        &self,
        reference_name: &str,
        default: T,
    ) -> Result<T, FieldError>;

    /// Reads the field value for `reference_name` through a caller-supplied
    /// converter, for fields whose wire shape needs custom interpretation.
    ///
    /// Returns `Ok(None)` when the field is absent. A present field the
    /// converter rejects is a [`FieldError::Conversion`] error.
    fn field_value_with<T, F>(
        &self,
        reference_name: &str,
        convert: F,
    ) -> Result<Option<T>, FieldError>
    where
        F: FnOnce(&serde_json::Value) -> Option<T>;

    /// Like [`field_value_with`](Self::field_value_with), but hands back
    /// `default` when the field is absent. A present field the converter
    /// rejects is still an error.
    fn field_value_with_or<T, F>(
        &self,
        reference_name: &str,
        convert: F,
        default: T,
    ) -> Result<T, FieldError>
    where
        F: FnOnce(&serde_json::Value) -> Option<T>;
}

impl WorkItemFieldsExt for WorkItem {
    fn field_value<T: DeserializeOwned>(
        &self,
        reference_name: &str,
    ) -> Result<Option<T>, FieldError> {
        let raw = raw_field_value(self, reference_name)?;
        Ok(raw.and_then(|value| serde_json::from_value(value.clone()).ok()))
    }

    fn field_value_or<T: DeserializeOwned>(
        &self,
        reference_name: &str,
        default: T,
    ) -> Result<T, FieldError> {
        Ok(self.field_value(reference_name)?.unwrap_or(default))
    }

    fn field_value_with<T, F>(
        &self,
        reference_name: &str,
        convert: F,
    ) -> Result<Option<T>, FieldError>
    where
        F: FnOnce(&serde_json::Value) -> Option<T>,
    {
        match raw_field_value(self, reference_name)? {
            None => Ok(None),
            Some(value) => match convert(value) {
                Some(converted) => Ok(Some(converted)),
                None => Err(FieldError::Conversion {
                    reference_name: reference_name.to_string(),
                }),
            },
        }
    }

    fn field_value_with_or<T, F>(
        &self,
        reference_name: &str,
        convert: F,
        default: T,
    ) -> Result<T, FieldError>
    where
        F: FnOnce(&serde_json::Value) -> Option<T>,
    {
        Ok(self
            .field_value_with(reference_name, convert)?
            .unwrap_or(default))
    }
}

/// Looks up the raw JSON value for a field, validating the reference name
/// and that the work item was fetched with its fields.
fn raw_field_value<'a>(
    work_item: &'a WorkItem,
    reference_name: &str,
) -> Result<Option<&'a serde_json::Value>, FieldError> {
    if reference_name.trim().is_empty() {
        return Err(FieldError::BlankReferenceName);
    }

    let fields = work_item
        .fields
        .as_object()
        .ok_or(FieldError::FieldsNotLoaded)?;

    Ok(fields.get(reference_name))
}
