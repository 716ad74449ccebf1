use log::debug;

use crate::core::actions::admission::queue::AdmissionQueue;
use crate::core::actions::errors::GeneratorError;
use crate::core::actions::generate_field::ports::field_generator::FieldGenerator;
use crate::core::data::field::Field;
use crate::core::data::viewport_params::ViewportParams;

/// Lets at most one request at a time through to the wrapped generator and
/// sheds load once `capacity` further requests are already waiting.
#[derive(Debug)]
pub struct AdmissionGate<G> {
    queue: AdmissionQueue,
    generator: G,
}

impl<G: FieldGenerator> AdmissionGate<G> {
    pub fn new(generator: G, capacity: usize) -> Result<Self, GeneratorError> {
        Ok(Self {
            queue: AdmissionQueue::new(capacity)?,
            generator,
        })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    #[must_use]
    pub fn waiting(&self) -> usize {
        self.queue.waiting()
    }

    #[must_use]
    pub fn inner(&self) -> &G {
        &self.generator
    }
}

impl<G: FieldGenerator> FieldGenerator for AdmissionGate<G> {
    fn compute_fractal(&self, params: &ViewportParams) -> Result<Field, GeneratorError> {
        let permit = self.queue.begin()?;
        debug!("gate admitted ticket {}", permit.ticket());

        self.generator.compute_fractal(params)
    }
}
