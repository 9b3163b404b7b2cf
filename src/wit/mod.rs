//! Work item tracking conveniences: patch document building, typed field
//! access, revision record classification, well-known field reference
//! names and batched client operations.

pub mod client_ext;
pub mod fields;
pub mod patch;
pub mod reference_names;
pub mod updates;

pub use client_ext::{WORK_ITEM_BATCH_SIZE, WitClientExt, extract_work_item_id};
pub use fields::WorkItemFieldsExt;
pub use patch::WorkItemPatchBuilder;
pub use updates::WorkItemUpdateExt;
