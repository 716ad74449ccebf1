use log::debug;
use rayon::prelude::*;

use crate::core::actions::errors::GeneratorError;
use crate::core::actions::generate_field::ports::field_generator::FieldGenerator;
use crate::core::data::field::Field;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::data::viewport_params::ViewportParams;
use crate::core::fractals::mandelbrot::algorithm::evaluate;

/// Computes the field on rayon's work-stealing pool, one row per task.
pub fn compute_field_rayon(params: &ViewportParams) -> Result<Field, GeneratorError> {
    let grid = SampleGrid::new(params);
    let iteration_budget = params.iteration_budget();
    let escape_radius_squared = params.escape_radius_squared();

    debug!(
        "computing {}x{} field on the rayon pool, {} iterations",
        params.width(),
        params.height(),
        iteration_budget
    );

    let mut cells = vec![false; params.len()];
    cells
        .par_chunks_mut(params.width())
        .enumerate()
        .for_each(|(row, row_cells)| {
            for (col, cell) in row_cells.iter_mut().enumerate() {
                *cell = evaluate(grid.coordinate(col, row), iteration_budget, escape_radius_squared);
            }
        });

    Field::from_cells(params.width(), params.height(), cells)
        .map_err(|err| GeneratorError::InvalidConfiguration(err.to_string()))
}

/// Software backend whose scheduling is left to rayon rather than a fixed
/// worker count. Produces the same fields as [`MandelbrotGenerator`], which
/// makes it a natural second contestant in a race.
///
/// [`MandelbrotGenerator`]: crate::core::actions::generate_field::generate_field::MandelbrotGenerator
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct MandelbrotRayonGenerator;

impl FieldGenerator for MandelbrotRayonGenerator {
    fn compute_fractal(&self, params: &ViewportParams) -> Result<Field, GeneratorError> {
        compute_field_rayon(params)
    }
}
