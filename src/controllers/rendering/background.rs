use crate::controllers::ports::frame_sink::FrameSink;
use crate::controllers::ports::render_scheduler::RenderScheduler;
use crate::controllers::rendering::data::frame_data::FrameData;
use crate::controllers::rendering::data::render_request::RenderRequest;
use crate::controllers::rendering::events::{RenderError, RenderEvent};
use crate::core::actions::cancellation::SupersededBy;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    sink: Arc<dyn FrameSink>,
}

/// Renders on a dedicated worker thread.
///
/// Only the newest request is kept. Scheduling a new request bumps the
/// generation counter, which cancels a render still in flight; results from
/// a superseded generation are never presented.
pub struct BackgroundRenderer {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl BackgroundRenderer {
    pub fn new(sink: Arc<dyn FrameSink>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            sink,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        // moving the counter on cancels whatever is rendering right now
        self.shared.generation.fetch_add(1, Ordering::SeqCst);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = SupersededBy::new(job_generation, &shared.generation);

            let start = Instant::now();
            let result = request.render(&cancel_token);
            let render_duration = start.elapsed();

            if job_generation != shared.generation.load(Ordering::Acquire) {
                debug!("dropping superseded generation {}", job_generation);
                continue;
            }

            match result {
                Ok(frame) => {
                    info!(
                        "generation {} rendered {}x{} in {:?}",
                        job_generation,
                        request.resolution.width(),
                        request.resolution.height(),
                        render_duration
                    );

                    shared.sink.present(RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        frame,
                        render_duration,
                    }));
                }
                Err(err) if err.is_cancelled() => {
                    debug!("generation {} cancelled", job_generation);
                    continue;
                }
                Err(err) => {
                    warn!("generation {} failed: {}", job_generation, err);

                    shared.sink.present(RenderEvent::Error(RenderError {
                        generation: job_generation,
                        message: err.to_string(),
                    }));
                }
            }

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }
}

impl RenderScheduler for BackgroundRenderer {
    fn schedule(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }
}

impl Drop for BackgroundRenderer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
