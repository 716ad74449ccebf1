use std::panic;
use std::thread;

use log::{debug, trace};

use crate::core::actions::errors::GeneratorError;
use crate::core::actions::generate_field::ports::field_generator::FieldGenerator;
use crate::core::actions::generate_field::residue_walk::ResidueWalk;
use crate::core::data::field::Field;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::data::viewport_params::ViewportParams;
use crate::core::fractals::mandelbrot::algorithm::evaluate;

fn evaluate_residue_class(
    worker: usize,
    workers: usize,
    grid: &SampleGrid,
    iteration_budget: u32,
    escape_radius_squared: f64,
) -> Vec<bool> {
    let total = grid.width() * grid.height();
    let mut verdicts = Vec::with_capacity(total.saturating_sub(worker).div_ceil(workers));

    for position in ResidueWalk::new(worker, workers, grid.width(), grid.height()) {
        let c = grid.coordinate(position.col, position.row);
        verdicts.push(evaluate(c, iteration_budget, escape_radius_squared));
    }

    trace!("worker {} evaluated {} samples", worker, verdicts.len());
    verdicts
}

/// Computes set membership for every sample of the viewport on exactly
/// `worker_count` threads.
///
/// Worker `w` owns the flat indices congruent to `w` modulo `worker_count`,
/// so the workers never touch the same cell and need no locking. All
/// workers are joined before the field is assembled; a panicking worker
/// takes the whole computation down with it.
pub fn compute_field(params: &ViewportParams, worker_count: usize) -> Result<Field, GeneratorError> {
    if worker_count < 1 {
        return Err(GeneratorError::InvalidConfiguration(
            "worker count cannot be less than 1".to_string(),
        ));
    }

    let grid = SampleGrid::new(params);
    let iteration_budget = params.iteration_budget();
    let escape_radius_squared = params.escape_radius_squared();

    debug!(
        "computing {}x{} field on {} workers, {} iterations",
        params.width(),
        params.height(),
        worker_count,
        iteration_budget
    );

    let residue_classes: Vec<Vec<bool>> = thread::scope(|scope| {
        let grid = &grid;
        let handles: Vec<_> = (0..worker_count)
            .map(|worker| {
                scope.spawn(move || {
                    evaluate_residue_class(
                        worker,
                        worker_count,
                        grid,
                        iteration_budget,
                        escape_radius_squared,
                    )
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    });

    let mut cells = vec![false; params.len()];
    for (worker, verdicts) in residue_classes.into_iter().enumerate() {
        for (index, verdict) in (worker..).step_by(worker_count).zip(verdicts) {
            cells[index] = verdict;
        }
    }

    Field::from_cells(params.width(), params.height(), cells)
        .map_err(|err| GeneratorError::InvalidConfiguration(err.to_string()))
}

/// Software backend that spreads each request over a fixed number of
/// threads.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotGenerator {
    workers: usize,
}

impl MandelbrotGenerator {
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl FieldGenerator for MandelbrotGenerator {
    fn compute_fractal(&self, params: &ViewportParams) -> Result<Field, GeneratorError> {
        compute_field(params, self.workers)
    }
}
