//! Page-cursor streaming over paged Azure DevOps query results.
//!
//! The work item tracking REST API hands back results one page at a time,
//! either with an explicit continuation token or purely skip/top based.
//! This module turns a "fetch one page" callback into a uniform lazy
//! [`Stream`](futures::Stream) of items, so callers never deal with
//! skip offsets or continuation tokens themselves.
//!
//! The three producer shapes the API surface exposes (page with token,
//! plain list, arbitrary iterable that must be materialized first) are
//! folded into a single [`PageProducer`] so the cursor logic exists once.
//!
//! ## Example
//!
//! ```rust,no_run
//! use azdo_wit_extras::paging::{PagedQuery, PageRequest};
//!
//! # async fn demo() -> Result<(), azdo_wit_extras::error::PagingError> {
//! let items: Vec<i32> = PagedQuery::list(|request: PageRequest| async move {
//!     let skip = request.skip.unwrap_or(0);
//!     // fetch one page from the server here
//!     Ok((skip..skip + 10).map(|i| i as i32).collect::<Vec<_>>())
//! })
//! .take(25)
//! .collect()
//! .await?;
//! assert_eq!(items.len(), 25);
//! # Ok(())
//! # }
//! ```

use std::future::Future;

use futures::FutureExt;
use futures::future::BoxFuture;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::error::PagingError;

/// One page of query results: an ordered list of items plus the opaque
/// continuation token to echo back for the next page, if any.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The items of this page, in server order.
    pub items: Vec<T>,
    /// Opaque continuation token for the next page. `None` or a blank
    /// string means the sequence is complete.
    pub continuation_token: Option<String>,
}

impl<T> Page<T> {
    /// Creates a page without a continuation token.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            continuation_token: None,
        }
    }

    /// Creates a page carrying a continuation token.
    pub fn with_token(items: Vec<T>, continuation_token: impl Into<String>) -> Self {
        Self {
            items,
            continuation_token: Some(continuation_token.into()),
        }
    }

    /// Creates an empty, final page.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page carries no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if this page carries a non-blank continuation token.
    pub fn has_continuation(&self) -> bool {
        self.continuation_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }

    /// Drains this page and every following page into a single `Vec`,
    /// following continuation tokens via the supplied producer.
    ///
    /// Mirrors the one-shot "give me everything" pattern: the first page
    /// has already been fetched by the caller, `continuation` is invoked
    /// once per further token. An empty page or a missing token ends the
    /// sequence; cancellation is checked before every fetch.
    pub async fn collect_all<F, Fut>(
        self,
        mut continuation: F,
        cancellation: &CancellationToken,
    ) -> Result<Vec<T>, PagingError>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = anyhow::Result<Page<T>>>,
    {
        let mut items = Vec::new();
        let mut current = self;

        while !current.is_empty() {
            if cancellation.is_cancelled() {
                return Err(PagingError::Cancelled);
            }

            let token = current
                .continuation_token
                .take()
                .filter(|token| !token.trim().is_empty());
            items.extend(current.items);

            current = match token {
                Some(token) => continuation(token).await.map_err(PagingError::Producer)?,
                None => Page::empty(),
            };
        }

        Ok(items)
    }
}

/// The parameters handed to a page producer for a single fetch.
///
/// The very first fetch carries no continuation token; subsequent fetches
/// echo the token of the previous page (paged shape) or the accumulated
/// skip offset (list and materialized shapes).
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    /// The maximum total number of items the consumer asked for, if any.
    /// Passed through verbatim so producers can cap their page size.
    pub count: Option<usize>,
    /// How many items to skip, accumulated across previous pages.
    pub skip: Option<usize>,
    /// Continuation token of the previous page, if one was returned.
    pub continuation_token: Option<String>,
}

type PagedFetch<T> = Box<dyn FnMut(PageRequest) -> BoxFuture<'static, anyhow::Result<Page<T>>> + Send>;
type ListFetch<T> = Box<dyn FnMut(PageRequest) -> BoxFuture<'static, anyhow::Result<Vec<T>>> + Send>;
type IterFetch<T> = Box<
    dyn FnMut(PageRequest) -> BoxFuture<'static, anyhow::Result<Box<dyn Iterator<Item = T> + Send>>>
        + Send,
>;

/// The three fetch-callback shapes a paged API method can have, folded
/// into one variant so the cursor logic is written once.
pub enum PageProducer<T> {
    /// Returns a [`Page`] carrying an explicit continuation token.
    Paged(PagedFetch<T>),
    /// Returns a plain list; continuation is purely skip-based.
    List(ListFetch<T>),
    /// Returns an arbitrary iterable that is materialized into a list
    /// before indexed access.
    Materialized(IterFetch<T>),
}

impl<T> PageProducer<T> {
    async fn fetch_page(&mut self, request: PageRequest) -> anyhow::Result<Page<T>> {
        match self {
            Self::Paged(fetch) => fetch(request).await,
            Self::List(fetch) => Ok(Page::new(fetch(request).await?)),
            Self::Materialized(fetch) => Ok(Page::new(fetch(request).await?.collect())),
        }
    }

    fn token_based(&self) -> bool {
        matches!(self, Self::Paged(_))
    }
}

/// A lazy paged query: owns a [`PageProducer`] plus the optional maximum
/// item count, initial skip offset and cancellation token, and converts
/// into a forward-only, single-pass stream of items.
///
/// At most one fetch is in flight at any time; each consumer owns its own
/// cursor. Producer errors propagate unchanged and end the stream.
pub struct PagedQuery<T> {
    producer: PageProducer<T>,
    count: Option<usize>,
    initial_skip: Option<usize>,
    cancellation: CancellationToken,
}

impl<T: Send + 'static> PagedQuery<T> {
    fn from_producer(producer: PageProducer<T>) -> Self {
        Self {
            producer,
            count: None,
            initial_skip: None,
            cancellation: CancellationToken::new(),
        }
    }

    /// Creates a query over a producer returning pages with an explicit
    /// continuation token. The sequence ends when a page comes back empty
    /// or without a token.
    pub fn paged<F, Fut>(mut producer: F) -> Self
    where
        F: FnMut(PageRequest) -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<Page<T>>> + Send + 'static,
    {
        Self::from_producer(PageProducer::Paged(Box::new(move |request| {
            producer(request).boxed()
        })))
    }

    /// Creates a query over a producer returning a plain list per fetch;
    /// continuation is purely skip-based and the sequence ends on the
    /// first empty list.
    pub fn list<F, Fut>(mut producer: F) -> Self
    where
        F: FnMut(PageRequest) -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<Vec<T>>> + Send + 'static,
    {
        Self::from_producer(PageProducer::List(Box::new(move |request| {
            producer(request).boxed()
        })))
    }

    /// Creates a query over a producer returning an arbitrary iterable,
    /// which is materialized into a list before items are yielded.
    pub fn materialized<F, Fut, I>(mut producer: F) -> Self
    where
        F: FnMut(PageRequest) -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<I>> + Send + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        Self::from_producer(PageProducer::Materialized(Box::new(move |request| {
            let fetched = producer(request);
            async move {
                let items = fetched.await?;
                Ok(Box::new(items.into_iter()) as Box<dyn Iterator<Item = T> + Send>)
            }
            .boxed()
        })))
    }

    /// Caps the total number of items the stream yields.
    pub fn take(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Skips the first `skip` items server-side, before the first fetch.
    pub fn skip(mut self, skip: usize) -> Self {
        self.initial_skip = Some(skip);
        self
    }

    /// Ties the query to a cancellation token. Cancellation is cooperative:
    /// it is checked before every fetch and before every yielded item, and
    /// surfaces as [`PagingError::Cancelled`].
    pub fn cancel_with(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }

    /// Converts this query into a lazy stream of items.
    ///
    /// No fetch happens until the stream is polled for the first time.
    pub fn into_stream(self) -> BoxStream<'static, Result<T, PagingError>> {
        let cursor = PageCursor {
            producer: self.producer,
            max_count: self.count,
            received: 0,
            yielded: 0,
            next_skip: self.initial_skip.unwrap_or(0),
            continuation_token: None,
            current: Vec::new().into_iter(),
            started: false,
            done: false,
            cancellation: self.cancellation,
        };

        stream::unfold(cursor, |mut cursor| async move {
            cursor.next().await.map(|item| (item, cursor))
        })
        .boxed()
    }

    /// Drains the whole query into a `Vec`, honoring the configured
    /// maximum count and cancellation token.
    pub async fn collect(self) -> Result<Vec<T>, PagingError> {
        self.into_stream().try_collect().await
    }
}

/// Mutable cursor state owned by one stream instance: forward-only,
/// single-pass, no rewind.
struct PageCursor<T> {
    producer: PageProducer<T>,
    max_count: Option<usize>,
    received: usize,
    yielded: usize,
    next_skip: usize,
    continuation_token: Option<String>,
    current: std::vec::IntoIter<T>,
    started: bool,
    done: bool,
    cancellation: CancellationToken,
}

impl<T: Send> PageCursor<T> {
    /// Produces the next item, fetching a new page when the current one
    /// is drained. Termination checks, in order: cancellation, maximum
    /// count reached, empty page fetched.
    async fn next(&mut self) -> Option<Result<T, PagingError>> {
        if self.done {
            return None;
        }

        if self.cancellation.is_cancelled() {
            self.done = true;
            return Some(Err(PagingError::Cancelled));
        }

        if let Some(max) = self.max_count
            && self.yielded >= max
        {
            trace!(yielded = self.yielded, "maximum item count reached");
            self.done = true;
            return None;
        }

        if let Some(item) = self.current.next() {
            self.yielded += 1;
            return Some(Ok(item));
        }

        // Current page drained. For the token-based shape a missing token
        // ends the sequence without a further fetch.
        if self.started && self.producer.token_based() && self.continuation_token.is_none() {
            self.done = true;
            return None;
        }

        let request = PageRequest {
            count: self.max_count,
            skip: Some(self.next_skip),
            continuation_token: self.continuation_token.clone(),
        };
        debug!(
            skip = self.next_skip,
            continuation_token = request.continuation_token.as_deref(),
            "fetching next page"
        );

        let page = match self.producer.fetch_page(request).await {
            Ok(page) => page,
            Err(error) => {
                self.done = true;
                return Some(Err(PagingError::Producer(error)));
            }
        };

        self.started = true;
        self.received += page.len();
        self.next_skip += page.len();
        self.continuation_token = page
            .continuation_token
            .clone()
            .filter(|token| !token.trim().is_empty());

        if page.is_empty() {
            trace!(received = self.received, "empty page, sequence complete");
            self.done = true;
            return None;
        }

        self.current = page.items.into_iter();

        if self.cancellation.is_cancelled() {
            self.done = true;
            return Some(Err(PagingError::Cancelled));
        }

        let item = self.current.next()?;
        self.yielded += 1;
        Some(Ok(item))
    }
}
