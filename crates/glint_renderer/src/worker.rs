//! Background rendering for hosts that keep a UI or event loop running.
//!
//! A single worker thread renders the frame in raster order and sends each
//! finished scanline over a channel. The host owns a [`RenderHandle`] and
//! pulls rows into its buffer whenever it polls, so the number of ready
//! pixels only ever grows and no row is touched after it arrives.
//!
//! There is no cancellation: dropping the handle stops delivery but the
//! worker still runs to the end of the frame.

use crate::renderer::{render_rows, PixelBuffer, RenderConfig, RenderError, RenderResult};
use crate::{Color, Scene};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Host-side end of a background render.
pub struct RenderHandle {
    rows: Receiver<Vec<Color>>,
    worker: Option<JoinHandle<RenderResult<()>>>,
    buffer: PixelBuffer,
    disconnected: bool,
}

/// Start rendering `scene` on a background thread.
pub fn spawn_render(
    scene: Arc<Scene>,
    width: u32,
    height: u32,
    config: RenderConfig,
) -> RenderResult<RenderHandle> {
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyFrame { width, height });
    }

    let (sender, rows) = mpsc::channel();
    let worker = thread::Builder::new()
        .name("glint-render".into())
        .spawn(move || {
            render_rows(&scene, width, height, &config, |_, row| {
                // Receiver gone means nobody is displaying the frame any more
                let _ = sender.send(row);
            })
        })
        .map_err(|e| RenderError::WorkerSpawn(e.to_string()))?;

    log::info!("Started background render of {}x{}", width, height);

    Ok(RenderHandle {
        rows,
        worker: Some(worker),
        buffer: PixelBuffer::new(width, height),
        disconnected: false,
    })
}

impl RenderHandle {
    /// Move every row the worker has finished into the buffer without
    /// blocking. Returns the number of pixels ready.
    pub fn poll(&mut self) -> usize {
        while !self.disconnected {
            match self.rows.try_recv() {
                Ok(row) => self.buffer.extend_row(&row),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => self.disconnected = true,
            }
        }
        self.buffer.len()
    }

    /// Block until at least one new row arrives or `timeout` elapses, then
    /// drain whatever else is ready. Returns the number of pixels ready.
    pub fn wait_for_progress(&mut self, timeout: Duration) -> usize {
        if !self.disconnected {
            match self.rows.recv_timeout(timeout) {
                Ok(row) => self.buffer.extend_row(&row),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => self.disconnected = true,
            }
        }
        self.poll()
    }

    /// Number of pixels received so far.
    pub fn pixels_ready(&self) -> usize {
        self.buffer.len()
    }

    /// Fraction of the frame received so far, in [0, 1].
    pub fn progress(&self) -> f64 {
        let total = self.buffer.width as f64 * self.buffer.height as f64;
        self.buffer.len() as f64 / total
    }

    /// True once the worker has stopped and every row it sent has been
    /// received. A worker that panics stops early, so check
    /// [`PixelBuffer::is_complete`] on [`buffer`](Self::buffer) or call
    /// [`finish`](Self::finish) to tell a full frame from a partial one.
    pub fn is_done(&self) -> bool {
        self.disconnected
    }

    /// The frame received so far.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Wait for the worker to finish and return the complete frame.
    pub fn finish(mut self) -> RenderResult<PixelBuffer> {
        let result = match self.worker.take() {
            Some(worker) => worker.join().map_err(|_| RenderError::WorkerPanicked)?,
            None => Ok(()),
        };
        result?;

        // The sender is dropped with the worker, so this drains to the end
        for row in self.rows.iter() {
            self.buffer.extend_row(&row);
        }
        self.disconnected = true;

        Ok(self.buffer)
    }
}
