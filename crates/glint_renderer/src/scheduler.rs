//! Parallel tile scheduling.
//!
//! A fixed pool of workers pulls tiles from a shared queue until it runs
//! dry. Each worker owns its random generator, so a render with a single
//! worker and a fixed seed is fully reproducible. Finished tiles are
//! composited in tile order once every worker has returned.

use crate::renderer::ImageBuffer;
use crate::tile::{generate_tiles, render_tile, Tile, TileResult};
use crate::{Camera, RenderConfig, RenderError, RenderResult, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Tiles waiting to be rendered. Claiming is lock-free; each tile is
/// handed out at most once.
#[derive(Debug)]
pub struct TileQueue {
    tiles: Vec<Tile>,
    next: AtomicUsize,
}

impl TileQueue {
    pub fn new(tiles: Vec<Tile>) -> RenderResult<Self> {
        if tiles.is_empty() {
            return Err(RenderError::EmptyTileList);
        }
        Ok(Self {
            tiles,
            next: AtomicUsize::new(0),
        })
    }

    /// Take the next unclaimed tile, or `None` once the queue is drained.
    pub fn claim(&self) -> Option<Tile> {
        let i = self.next.fetch_add(1, Ordering::Relaxed);
        self.tiles.get(i).copied()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Shared flag that asks running workers to stop after their current tile.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Counts finished tiles and logs every tenth of the way.
struct Progress {
    done: AtomicUsize,
    total: usize,
    step: usize,
}

impl Progress {
    fn new(total: usize) -> Self {
        Self {
            done: AtomicUsize::new(0),
            total,
            step: (total / 10).max(1),
        }
    }

    fn tile_done(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if done % self.step == 0 || done == self.total {
            log::info!(
                "Progress: {}% ({}/{} tiles)",
                done * 100 / self.total,
                done,
                self.total
            );
        }
    }
}

/// Render the scene into an encoded image.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    render_with_cancel(scene, camera, config, &CancelToken::new())
}

/// Render the scene, stopping early with [`RenderError::Cancelled`] once
/// `cancel` is set. No partial image is returned.
pub fn render_with_cancel(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    cancel: &CancelToken,
) -> RenderResult<ImageBuffer> {
    config.validate_with(camera)?;

    let tiles = generate_tiles(
        config.width,
        config.height,
        config.tile_width,
        config.tile_height,
        config.tile_order,
    );
    let queue = TileQueue::new(tiles)?;
    let workers = config.worker_count().min(queue.len());

    log::info!(
        "Rendering {}x{} at {} spp, {} bounces: {} tiles on {} workers",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_bounces,
        queue.len(),
        workers
    );
    let start = Instant::now();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("glint-worker-{i}"))
        .build()?;

    let progress = Progress::new(queue.len());
    let per_worker = pool.broadcast(|ctx| {
        run_worker(ctx.index(), &queue, scene, camera, config, cancel, &progress)
    });

    let mut results = Vec::with_capacity(queue.len());
    for worker_results in per_worker {
        results.extend(worker_results?);
    }
    results.sort_by_key(|r| r.tile.index);

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        image.write_tile(result)?;
    }

    log::info!(
        "Render complete: {} tiles in {:.2}s",
        results.len(),
        start.elapsed().as_secs_f32()
    );
    Ok(image)
}

/// Claim and render tiles until the queue is empty or the render is cancelled.
fn run_worker(
    worker: usize,
    queue: &TileQueue,
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    cancel: &CancelToken,
    progress: &Progress,
) -> RenderResult<Vec<TileResult>> {
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(worker as u64));
    let mut results = Vec::new();

    loop {
        if cancel.is_cancelled() {
            log::debug!("Worker {worker} cancelled after {} tiles", results.len());
            return Err(RenderError::Cancelled);
        }
        let Some(tile) = queue.claim() else {
            break;
        };

        log::trace!(
            "Worker {worker} rendering tile {} at ({}, {})",
            tile.index,
            tile.x,
            tile.y
        );
        results.push(render_tile(&tile, scene, camera, config, &mut rng));
        progress.tile_done();
    }

    log::debug!("Worker {worker} finished {} tiles", results.len());
    Ok(results)
}
