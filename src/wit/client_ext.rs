//! Convenience operations layered over the work item tracking client.
//!
//! The raw client takes comma-joined ID strings, caps batch reads at 200
//! items per call and pages revision history manually. [`WitClientExt`]
//! wraps those call sites: batched reads over arbitrary ID slices, updates
//! driven by a [`WorkItemPatchBuilder`], and revision history as a paged
//! stream.
//!
//! ## Example
//!
//! ```rust,no_run
//! use azdo_wit_extras::wit::{WitClientExt, WorkItemPatchBuilder};
//! use futures::TryStreamExt;
//!
//! # async fn demo(client: azure_devops_rust_api::wit::Client) -> anyhow::Result<()> {
//! let work_items = client
//!     .get_work_items_batched("my-org", "my-project", &[1, 2, 3], Some("System.Title"))
//!     .await?;
//!
//! let bug = client
//!     .create_work_item_with(
//!         "my-org",
//!         "my-project",
//!         "Bug",
//!         WorkItemPatchBuilder::create("Bug", "Crash on startup")?,
//!     )
//!     .await?;
//!
//! let updates: Vec<_> = client
//!     .stream_work_item_updates("my-org", "my-project", bug.id, 50)
//!     .try_collect()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use async_trait::async_trait;
use azure_devops_rust_api::wit;
use azure_devops_rust_api::wit::models::{WorkItem, WorkItemUpdate};
use futures::stream::BoxStream;
use tracing::debug;

use super::patch::WorkItemPatchBuilder;
use crate::error::PagingError;
use crate::paging::{PageRequest, PagedQuery};

/// Maximum number of work items the batch read endpoint accepts per call.
pub const WORK_ITEM_BATCH_SIZE: usize = 200;

/// Convenience operations on the work item tracking client.
#[async_trait]
pub trait WitClientExt {
    /// Fetches work items by ID, transparently splitting the request into
    /// batches of [`WORK_ITEM_BATCH_SIZE`]. Results are returned in request
    /// order. Pass `fields` to restrict which field values are loaded.
    async fn get_work_items_batched(
        &self,
        organization: &str,
        project: &str,
        ids: &[i32],
        fields: Option<&str>,
    ) -> Result<Vec<WorkItem>>;

    /// Creates a work item of `work_item_type` from the builder's patch
    /// document and returns the created work item. Pair with
    /// [`WorkItemPatchBuilder::create`], which seeds the mandatory type
    /// and title fields.
    async fn create_work_item_with(
        &self,
        organization: &str,
        project: &str,
        work_item_type: &str,
        builder: WorkItemPatchBuilder,
    ) -> Result<WorkItem>;

    /// Applies the builder's patch document to a work item and returns the
    /// updated work item.
    async fn update_work_item_with(
        &self,
        organization: &str,
        project: &str,
        work_item_id: i32,
        builder: WorkItemPatchBuilder,
    ) -> Result<WorkItem>;

    /// Streams a work item's revision history, fetching `page_size` update
    /// records at a time as the stream is polled.
    fn stream_work_item_updates(
        &self,
        organization: &str,
        project: &str,
        work_item_id: i32,
        page_size: i32,
    ) -> BoxStream<'static, std::result::Result<WorkItemUpdate, PagingError>>;
}

#[async_trait]
impl WitClientExt for wit::Client {
    async fn get_work_items_batched(
        &self,
        organization: &str,
        project: &str,
        ids: &[i32],
        fields: Option<&str>,
    ) -> Result<Vec<WorkItem>> {
        let mut work_items = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(WORK_ITEM_BATCH_SIZE) {
            debug!(batch_len = chunk.len(), "fetching work item batch");

            let request = self
                .work_items_client()
                .list(organization, join_ids(chunk), project);
            let response = match fields {
                Some(fields) => request.fields(fields).await,
                None => request.await,
            }
            .context("Failed to fetch work item batch")?;

            work_items.extend(response.value);
        }

        Ok(work_items)
    }

    async fn create_work_item_with(
        &self,
        organization: &str,
        project: &str,
        work_item_type: &str,
        builder: WorkItemPatchBuilder,
    ) -> Result<WorkItem> {
        let work_item = self
            .work_items_client()
            .create(organization, builder.build(), project, work_item_type)
            .await
            .context("Failed to create work item")?;

        Ok(work_item)
    }

    async fn update_work_item_with(
        &self,
        organization: &str,
        project: &str,
        work_item_id: i32,
        builder: WorkItemPatchBuilder,
    ) -> Result<WorkItem> {
        let work_item = self
            .work_items_client()
            .update(organization, builder.build(), work_item_id, project)
            .await
            .context("Failed to update work item")?;

        Ok(work_item)
    }

    fn stream_work_item_updates(
        &self,
        organization: &str,
        project: &str,
        work_item_id: i32,
        page_size: i32,
    ) -> BoxStream<'static, std::result::Result<WorkItemUpdate, PagingError>> {
        let client = self.clone();
        let organization = organization.to_string();
        let project = project.to_string();

        PagedQuery::list(move |request: PageRequest| {
            let client = client.clone();
            let organization = organization.clone();
            let project = project.clone();
            async move {
                let skip = saturating_skip(request.skip);
                let updates = client
                    .updates_client()
                    .list(&organization, work_item_id, &project)
                    .top(page_size)
                    .skip(skip)
                    .await
                    .context("Failed to fetch work item updates page")?;
                Ok(updates.value)
            }
        })
        .into_stream()
    }
}

/// Extracts the numeric work item ID from a work item API URL, e.g.
/// `https://dev.azure.com/org/project/_apis/wit/workItems/12345`.
#[must_use]
pub fn extract_work_item_id(url: &str) -> Option<i32> {
    url.rsplit('/').next().and_then(|segment| segment.parse().ok())
}

/// Converts an accumulated skip offset into the `i32` the updates
/// endpoint takes, saturating instead of truncating.
fn saturating_skip(skip: Option<usize>) -> i32 {
    skip.map_or(0, |value| i32::try_from(value).unwrap_or(i32::MAX))
}

/// Comma-joins IDs the way the batch read endpoint expects them.
fn join_ids(ids: &[i32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
