//! # Azure DevOps Work Item Tracking Extras
//!
//! Extension traits and builders layered over the Azure DevOps work item
//! tracking client. This library provides:
//!
//! - Pull-based pagination of paged, list-shaped and iterable producers
//!   into async streams
//! - Patch document building for work item create and update calls
//! - Typed field value access on retrieved work items
//! - Revision record classification and revision history streaming
//! - Well-known field reference name constants
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use azdo_wit_extras::{WitClientExt, WorkItemFieldsExt, WorkItemPatchBuilder};
//! use azdo_wit_extras::wit::reference_names::system;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! # let client: azure_devops_rust_api::wit::Client = unimplemented!();
//! // Fetch work items in batches of 200
//! let work_items = client
//!     .get_work_items_batched("my-org", "my-project", &[1, 2, 3], None)
//!     .await?;
//!
//! for work_item in &work_items {
//!     let title: Option<String> = work_item.field_value(system::TITLE)?;
//!     println!("#{}: {}", work_item.id, title.unwrap_or_default());
//! }
//!
//! // Move a work item to Active with a comment
//! let patch = WorkItemPatchBuilder::new()
//!     .add_or_update_field(system::STATE, "Active")?
//!     .add_comment("Picked up for the current sprint")?;
//! client
//!     .update_work_item_with("my-org", "my-project", 1, patch)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod paging;
pub mod utils;
pub mod wit;

// Re-export commonly used types for convenience
pub use error::{FieldError, PagingError, PatchError, WitExtrasError};
pub use paging::{Page, PageProducer, PageRequest, PagedQuery};
pub use wit::{
    WitClientExt, WorkItemFieldsExt, WorkItemPatchBuilder, WorkItemUpdateExt, extract_work_item_id,
};

/// Core result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
