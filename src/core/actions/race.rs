use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use log::{debug, trace};

use crate::core::actions::errors::GeneratorError;
use crate::core::actions::generate_field::ports::field_generator::FieldGenerator;
use crate::core::data::field::Field;
use crate::core::data::viewport_params::ViewportParams;

/// Runs every branch on the same request at once and hands back the first
/// field to arrive.
///
/// Slower branches are left to finish on their own threads and whatever they
/// produce is thrown away. Branch failures are only reported when no branch
/// succeeds, as a single [`GeneratorError::RaceExhausted`].
pub struct Race {
    branches: Vec<Arc<dyn FieldGenerator>>,
}

impl Race {
    pub fn new(branches: Vec<Arc<dyn FieldGenerator>>) -> Result<Self, GeneratorError> {
        if branches.is_empty() {
            return Err(GeneratorError::InvalidConfiguration(
                "a race needs at least one generator".to_string(),
            ));
        }

        Ok(Self { branches })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

impl std::fmt::Debug for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Race")
            .field("branches", &self.branches.len())
            .finish()
    }
}

impl FieldGenerator for Race {
    fn compute_fractal(&self, params: &ViewportParams) -> Result<Field, GeneratorError> {
        let (sender, receiver) = mpsc::channel();

        for (branch, generator) in self.branches.iter().enumerate() {
            let generator = Arc::clone(generator);
            let sender = sender.clone();
            let params = *params;

            thread::spawn(move || {
                let outcome = generator.compute_fractal(&params);
                // The receiver is gone once a winner has been picked.
                if sender.send((branch, outcome)).is_err() {
                    trace!("race branch {} finished after the race was decided", branch);
                }
            });
        }
        drop(sender);

        let mut failures = Vec::new();
        for (branch, outcome) in receiver.iter() {
            match outcome {
                Ok(field) => {
                    debug!("race branch {} won", branch);
                    return Ok(field);
                }
                Err(err) => {
                    debug!("race branch {} failed: {}", branch, err);
                    failures.push(err);
                }
            }
        }

        // Branches that panicked never reported back.
        for _ in failures.len()..self.branches.len() {
            failures.push(GeneratorError::failure("race branch panicked"));
        }

        Err(GeneratorError::RaceExhausted(failures))
    }
}
