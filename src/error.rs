//! Unified error handling for the azdo-wit-extras library.
//!
//! This module provides a small error hierarchy using `thiserror` for
//! programmatic error handling with informative messages.
//!
//! ## Error Categories
//!
//! - [`PagingError`]: Errors raised while draining paged query results
//! - [`PatchError`]: Errors raised while building a patch document
//! - [`FieldError`]: Errors raised while reading typed field values
//!
//! ## Example
//!
//! ```rust,no_run
//! use azdo_wit_extras::error::{WitExtrasError, FieldError};
//!
//! fn example() -> Result<(), WitExtrasError> {
//!     // Errors are automatically converted via From trait
//!     Err(FieldError::BlankReferenceName)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the azdo-wit-extras library.
///
/// This enum encompasses all errors that can occur while paginating query
/// results, assembling patch documents or accessing work item field values.
#[derive(Error, Debug)]
pub enum WitExtrasError {
    /// An error occurred while draining a paged query.
    #[error("paging error: {0}")]
    Paging(#[from] PagingError),

    /// An error occurred while building a patch document.
    #[error("patch document error: {0}")]
    Patch(#[from] PatchError),

    /// An error occurred while accessing a work item field value.
    #[error("field access error: {0}")]
    Field(#[from] FieldError),

    /// A generic error for cases not covered by specific error types.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Errors that can occur while draining a paged query into a stream.
#[derive(Error, Debug)]
pub enum PagingError {
    /// The cancellation token was signalled; no further pages are fetched.
    #[error("operation cancelled")]
    Cancelled,

    /// The page producer failed. Producer errors propagate unchanged,
    /// there is no retry or backoff.
    #[error(transparent)]
    Producer(#[from] anyhow::Error),
}

/// Errors that can occur while assembling a work item patch document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// A required string argument was empty or whitespace-only.
    #[error("value for '{argument}' cannot be empty or whitespace")]
    BlankArgument {
        /// Name of the offending argument.
        argument: &'static str,
    },
}

/// Errors that can occur while reading typed field values from a work item.
///
/// A missing field is deliberately *not* an error; accessors report it as
/// `Ok(None)` or by handing back the caller-supplied default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field reference name argument was empty or whitespace-only.
    #[error("field reference name cannot be empty or whitespace")]
    BlankReferenceName,

    /// The work item was retrieved without its field map, so no value
    /// lookup is possible.
    #[error("the work item must be retrieved including its fields before reading a value")]
    FieldsNotLoaded,

    /// The field is present but the supplied converter could not produce
    /// a value of the requested type.
    #[error("failed to convert field '{reference_name}' to the requested type")]
    Conversion {
        /// Reference name of the field that failed to convert.
        reference_name: String,
    },
}

/// Type alias for Results using WitExtrasError.
///
/// Note: This is not re-exported from the crate root to avoid shadowing `anyhow::Result`.
/// Use explicitly as `error::Result<T>` when needed.
pub type WitExtrasResult<T> = std::result::Result<T, WitExtrasError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// # Paging Error Display
    ///
    /// Tests that paging errors display correctly formatted messages.
    ///
    /// ## Test Scenario
    /// - Creates the PagingError variants
    /// - Tests their Display implementation
    ///
    /// ## Expected Outcome
    /// - Each error variant produces a clear, informative message
    #[test]
    fn test_paging_error_display() {
        let cancelled = PagingError::Cancelled;
        assert!(cancelled.to_string().contains("cancelled"));

        let producer = PagingError::Producer(anyhow::anyhow!("HTTP 503 from server"));
        assert!(producer.to_string().contains("HTTP 503"));
    }

    /// # Patch Error Display
    ///
    /// Tests that patch builder errors name the offending argument.
    ///
    /// ## Test Scenario
    /// - Creates a BlankArgument error
    /// - Tests its Display implementation
    ///
    /// ## Expected Outcome
    /// - The message names the argument that was blank
    #[test]
    fn test_patch_error_display() {
        let blank = PatchError::BlankArgument {
            argument: "reference_name",
        };
        assert!(blank.to_string().contains("reference_name"));
    }

    /// # Field Error Display
    ///
    /// Tests that field access errors display correctly formatted messages.
    ///
    /// ## Test Scenario
    /// - Creates the FieldError variants
    /// - Tests their Display implementation
    ///
    /// ## Expected Outcome
    /// - Each error variant produces a clear, informative message
    #[test]
    fn test_field_error_display() {
        assert!(
            FieldError::BlankReferenceName
                .to_string()
                .contains("empty or whitespace")
        );
        assert!(FieldError::FieldsNotLoaded.to_string().contains("fields"));

        let conversion = FieldError::Conversion {
            reference_name: "System.Title".to_string(),
        };
        assert!(conversion.to_string().contains("System.Title"));
    }

    /// # Error Conversion
    ///
    /// Tests that errors convert correctly through the From trait.
    ///
    /// ## Test Scenario
    /// - Creates specific error types
    /// - Converts them to WitExtrasError
    ///
    /// ## Expected Outcome
    /// - All error types convert seamlessly to WitExtrasError
    #[test]
    fn test_error_conversion() {
        let paging_error = PagingError::Cancelled;
        let extras_error: WitExtrasError = paging_error.into();
        assert!(matches!(extras_error, WitExtrasError::Paging(_)));

        let patch_error = PatchError::BlankArgument { argument: "title" };
        let extras_error: WitExtrasError = patch_error.into();
        assert!(matches!(extras_error, WitExtrasError::Patch(_)));

        let field_error = FieldError::FieldsNotLoaded;
        let extras_error: WitExtrasError = field_error.into();
        assert!(matches!(extras_error, WitExtrasError::Field(_)));
    }
}
