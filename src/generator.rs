//! Threaded trajectory generation.
//!
//! A generator runs on its own thread and pushes points into a bounded
//! queue. It blocks when the queue is full and only stops when its
//! `Producer` is cancelled or dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{sync_channel, Receiver};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

use crate::duffing::{Point, Trajectory, QUEUE_CAPACITY};
use crate::error::{Error, Result};

/// Consumer side of a running generator.
pub struct Producer {
    rx:     Option<Receiver<Point>>,
    stop:   Arc<AtomicBool>,
    worker: Option<JoinHandle<u64>>
}

/// Start a generator for the given initial state and forcing, using the
/// default queue capacity.
pub fn start(x0: f64, y0: f64, forcing: f64, dt: f64) -> Result<Producer> {
    start_with_capacity(x0, y0, forcing, dt, QUEUE_CAPACITY)
}

pub fn start_with_capacity(x0: f64, y0: f64, forcing: f64, dt: f64, capacity: usize)
 -> Result<Producer>
{
    let trajectory = Trajectory::new(x0, y0, forcing, dt)?;
    if capacity == 0 {
        return Err(Error::ZeroCapacity);
    }

    let (tx, rx) = sync_channel(capacity);
    let stop = Arc::new(AtomicBool::new(false));
    let token = stop.clone();

    let worker = thread::Builder::new()
        .name(format!("duffing-F{}", forcing))
        .spawn(move || {
            let mut sent = 0u64;
            for point in trajectory {
                if token.load(Ordering::Acquire) {
                    break;
                }
                // fails once the receiver is gone
                if tx.send(point).is_err() {
                    break;
                }
                sent += 1;
            }
            sent
        })
        .map_err(Error::Spawn)?;

    debug!(x0, y0, forcing, dt, capacity, "generator started");

    Ok(Producer {
        rx:     Some(rx),
        stop,
        worker: Some(worker)
    })
}

impl Producer {
    /// Stop the generator and wait for its thread to finish.
    ///
    /// Returns the number of points the generator handed to the queue.
    pub fn cancel(mut self) -> u64 {
        self.shutdown()
    }

    fn shutdown(&mut self) -> u64 {
        self.stop.store(true, Ordering::Release);

        // disconnecting wakes a worker blocked on a full queue
        drop(self.rx.take());

        match self.worker.take() {
            Some(worker) => match worker.join() {
                Ok(sent) => {
                    debug!(sent, "generator stopped");
                    sent
                }
                Err(_) => {
                    warn!("generator thread panicked");
                    0
                }
            },
            None => 0
        }
    }
}

impl Iterator for Producer {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        self.rx.as_ref()?.recv().ok()
    }
}

impl Drop for Producer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
