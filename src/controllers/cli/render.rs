use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::errors::GeneratorError;
use crate::core::actions::generate_field::ports::field_generator::FieldGenerator;
use crate::core::data::field::Field;
use crate::core::data::viewport_params::ViewportParams;

pub struct RenderController<G: FieldGenerator, P: FilePresenterPort> {
    generator: G,
    presenter: P,
    field: Option<Field>,
}

impl<G: FieldGenerator, P: FilePresenterPort> RenderController<G, P> {
    pub fn new(generator: G, presenter: P) -> Self {
        Self {
            generator,
            presenter,
            field: None,
        }
    }

    pub fn generate(&mut self, params: &ViewportParams) -> Result<(), GeneratorError> {
        info!(
            "rendering {}x{} samples around ({}, {}) at zoom {}, {} iterations",
            params.width(),
            params.height(),
            params.center().real,
            params.center().imag,
            params.zoom(),
            params.iteration_budget()
        );

        let start = Instant::now();
        let field = self.generator.compute_fractal(params)?;
        info!(
            "computed in {:?}, {} of {} samples in the set",
            start.elapsed(),
            field.count_members(),
            field.len()
        );

        self.field = Some(field);
        Ok(())
    }

    #[must_use]
    pub fn field(&self) -> Option<&Field> {
        self.field.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(field) = &self.field {
            self.presenter.present(field, &filepath)?;
            info!("saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}
