use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::time::Duration;

use crate::foundation::core::{FrameRef, SlotId};
use crate::foundation::error::{FrameviewError, FrameviewResult};
use crate::source::decode::{frame_path, load_frame};
use crate::source::image_source::{ImageSource, LoadStatus, StatusChange};

/// Options for [`FileImageSource`].
#[derive(Clone, Debug)]
pub struct FileImageSourceOpts {
    /// Number of decode worker threads. Must be >= 1.
    pub threads: usize,
}

impl Default for FileImageSourceOpts {
    fn default() -> Self {
        // Two workers keep concurrent full-resolution decodes (and their memory) bounded.
        Self { threads: 2 }
    }
}

/// Image source that reads and decodes frame files on a dedicated worker pool.
///
/// Each slot carries a generation counter. Assigning or releasing a slot bumps it, and a load job
/// that finds its generation outdated drops its result instead of reporting it. A job can still
/// race past that check; the display discards such late completions on its own.
pub struct FileImageSource {
    pool: rayon::ThreadPool,
    tx: mpsc::Sender<StatusChange>,
    rx: mpsc::Receiver<StatusChange>,
    generations: [Arc<AtomicU64>; 2],
}

impl FileImageSource {
    /// Create a source with its own decode pool.
    pub fn new(opts: FileImageSourceOpts) -> FrameviewResult<Self> {
        let pool = build_thread_pool(opts.threads)?;
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            pool,
            tx,
            rx,
            generations: [Arc::new(AtomicU64::new(0)), Arc::new(AtomicU64::new(0))],
        })
    }

    /// Next queued notification, without blocking.
    pub fn try_recv(&self) -> Option<StatusChange> {
        self.rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next notification.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<StatusChange> {
        self.rx.recv_timeout(timeout).ok()
    }

    fn bump(&self, slot: SlotId) -> u64 {
        self.generations[slot.index()].fetch_add(1, Ordering::AcqRel) + 1
    }
}

impl ImageSource for FileImageSource {
    fn assign(&mut self, slot: SlotId, source: &FrameRef) {
        let generation = self.bump(slot);
        if source.is_empty() {
            return;
        }

        // Receiver lives in `self`, so sends cannot fail while we are alive.
        let _ = self.tx.send(StatusChange::loading(slot, source.clone()));

        let job = LoadJob {
            slot,
            source: source.clone(),
            generation,
            current: Arc::clone(&self.generations[slot.index()]),
            tx: self.tx.clone(),
        };
        self.pool.spawn(move || job.run());
    }

    fn release(&mut self, slot: SlotId) {
        self.bump(slot);
    }

    fn poll_status(&mut self) -> Option<StatusChange> {
        self.try_recv()
    }
}

struct LoadJob {
    slot: SlotId,
    source: FrameRef,
    generation: u64,
    current: Arc<AtomicU64>,
    tx: mpsc::Sender<StatusChange>,
}

impl LoadJob {
    fn is_current(&self) -> bool {
        self.current.load(Ordering::Acquire) == self.generation
    }

    #[tracing::instrument(skip(self), fields(slot = %self.slot, source = %self.source))]
    fn run(self) {
        if !self.is_current() {
            tracing::trace!("load superseded before decode");
            return;
        }

        let status = match load_frame(&frame_path(&self.source)) {
            Ok(image) => LoadStatus::Ready(image),
            Err(e) => LoadStatus::Error(e.to_string()),
        };

        if !self.is_current() {
            tracing::trace!("load superseded after decode; dropping result");
            return;
        }

        // The source may have been dropped mid-load; nobody is listening then.
        let _ = self.tx.send(StatusChange {
            slot: self.slot,
            source: self.source,
            status,
        });
    }
}

fn build_thread_pool(threads: usize) -> FrameviewResult<rayon::ThreadPool> {
    if threads == 0 {
        return Err(FrameviewError::validation(
            "file image source 'threads' must be >= 1",
        ));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("frameview-decode-{i}"))
        .build()
        .map_err(|e| FrameviewError::validation(format!("failed to build decode pool: {e}")))
}
