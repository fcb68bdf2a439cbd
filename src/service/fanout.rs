//! Fan-Out Execution
//!
//! Runs one unit of work per item concurrently and joins on completion.
//! Service wrappers use this to query every in-scope project at once when
//! enumerating resources.
//!
//! Tasks are launched eagerly, one per item, with no cap by default; the
//! join returns only after every task has finished, and nothing here
//! cancels or times out a slow task. Work futures own their I/O and any
//! shared aggregation state (behind the caller's own synchronization). Every
//! outcome is collected and handed back: a work error or a task panic
//! becomes an `Err` entry rather than tearing down the process or the
//! sibling tasks.

use anyhow::{Context, Result};
use futures::future;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinError;

/// Run `work` once per item, all items concurrently, and join
///
/// Returns one result per launched task, in launch order. Invocations may
/// interleave arbitrarily; `work` must be safe to run concurrently with
/// itself.
pub async fn run_all<T, F, Fut>(items: impl IntoIterator<Item = T>, work: F) -> Vec<Result<()>>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    let handles: Vec<_> = items
        .into_iter()
        .map(|item| tokio::spawn(work(item)))
        .collect();

    collect_outcomes(future::join_all(handles).await)
}

/// Like [`run_all`], but at most `limit` tasks make progress at a time
///
/// Tasks are still spawned eagerly; the permit gate is inside each task, so
/// launch order and join semantics match `run_all`. A `limit` of zero is
/// treated as one.
pub async fn run_all_bounded<T, F, Fut>(
    limit: usize,
    items: impl IntoIterator<Item = T>,
    work: F,
) -> Vec<Result<()>>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    let semaphore = Arc::new(Semaphore::new(limit.max(1)));

    let handles: Vec<_> = items
        .into_iter()
        .map(|item| {
            let semaphore = Arc::clone(&semaphore);
            let fut = work(item);
            tokio::spawn(async move {
                let _permit = semaphore
                    .acquire()
                    .await
                    .context("scan semaphore closed")?;
                fut.await
            })
        })
        .collect();

    collect_outcomes(future::join_all(handles).await)
}

fn collect_outcomes(
    joined: Vec<std::result::Result<Result<()>, JoinError>>,
) -> Vec<Result<()>> {
    joined
        .into_iter()
        .map(|outcome| match outcome {
            Ok(result) => result,
            // A panicking scan task must not take the audit down with it
            Err(err) => Err(anyhow::anyhow!("scan task aborted: {}", err)),
        })
        .collect()
}
