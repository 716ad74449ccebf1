mod controllers;
mod core;
mod presenters;

pub use controllers::cli::render::RenderController;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::admission::gate::AdmissionGate;
pub use crate::core::actions::admission::queue::{AdmissionPermit, AdmissionQueue};
pub use crate::core::actions::errors::{BackendError, GeneratorError};
pub use crate::core::actions::generate_field::generate_field::{MandelbrotGenerator, compute_field};
pub use crate::core::actions::generate_field::generate_field_rayon::{
    MandelbrotRayonGenerator, compute_field_rayon,
};
pub use crate::core::actions::generate_field::ports::field_generator::FieldGenerator;
pub use crate::core::actions::generate_field::residue_walk::{ResidueWalk, SamplePosition};
pub use crate::core::actions::marshal_bitmap::{marshal_bitmap, marshal_bitmap_parallel};
pub use crate::core::actions::race::Race;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::field::{Field, FieldError};
pub use crate::core::data::sample_grid::SampleGrid;
pub use crate::core::data::viewport_params::{ViewportParams, ViewportParamsError};
pub use crate::core::fractals::mandelbrot::algorithm::evaluate;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{MandelbrotConfig, zoom_scale};
pub use presenters::file::pbm::{PbmFilePresenter, write_pbm};
