pub mod complex;
pub mod field;
pub mod sample_grid;
pub mod viewport_params;
