use std::sync::Arc;

use crate::core::actions::errors::GeneratorError;
use crate::core::data::field::Field;
use crate::core::data::viewport_params::ViewportParams;

/// Anything that can turn viewport parameters into a complete field.
///
/// Concrete backends and the combinators wrapping them all implement this,
/// so they can be nested freely. A field is either returned whole or not at
/// all.
pub trait FieldGenerator: Send + Sync {
    fn compute_fractal(&self, params: &ViewportParams) -> Result<Field, GeneratorError>;
}

impl<G: FieldGenerator + ?Sized> FieldGenerator for &G {
    fn compute_fractal(&self, params: &ViewportParams) -> Result<Field, GeneratorError> {
        (**self).compute_fractal(params)
    }
}

impl<G: FieldGenerator + ?Sized> FieldGenerator for Box<G> {
    fn compute_fractal(&self, params: &ViewportParams) -> Result<Field, GeneratorError> {
        (**self).compute_fractal(params)
    }
}

impl<G: FieldGenerator + ?Sized> FieldGenerator for Arc<G> {
    fn compute_fractal(&self, params: &ViewportParams) -> Result<Field, GeneratorError> {
        (**self).compute_fractal(params)
    }
}
