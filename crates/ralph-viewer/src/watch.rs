use futures::stream::{self, Stream};
use ralph_core::watch::{FileWatch, Tick};
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};

/// Poll `watch` every `every` and yield the new size each time it changes.
///
/// The stream never ends on its own. It owns its timer and its tracker, so
/// dropping it (e.g. when an SSE client disconnects) stops the polling.
/// A failed stat counts as "no change" for that tick.
pub fn size_changes(watch: FileWatch, every: Duration) -> impl Stream<Item = u64> + Send + 'static {
    poll_sizes(watch, every, |path| async move {
        tokio::fs::metadata(path).await.ok().map(|m| m.len())
    })
}

fn poll_sizes<F, Fut>(
    watch: FileWatch,
    every: Duration,
    stat: F,
) -> impl Stream<Item = u64> + Send + 'static
where
    F: Fn(PathBuf) -> Fut + Send + 'static,
    Fut: Future<Output = Option<u64>> + Send + 'static,
{
    let mut ticker = tokio::time::interval_at(Instant::now() + every, every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    stream::unfold((watch, ticker, stat), |(mut watch, mut ticker, stat)| async move {
        loop {
            ticker.tick().await;
            let size = stat(watch.path().to_path_buf()).await;
            if let Tick::Changed { size } = watch.observe(size) {
                return Some((size, (watch, ticker, stat)));
            }
        }
    })
}
