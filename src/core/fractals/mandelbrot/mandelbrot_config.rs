use std::sync::Arc;

use crate::core::actions::admission::gate::AdmissionGate;
use crate::core::actions::errors::GeneratorError;
use crate::core::actions::generate_field::generate_field::MandelbrotGenerator;
use crate::core::actions::generate_field::generate_field_rayon::MandelbrotRayonGenerator;
use crate::core::actions::generate_field::ports::field_generator::FieldGenerator;
use crate::core::actions::race::Race;
use crate::core::data::complex::Complex;
use crate::core::data::viewport_params::{ViewportParams, ViewportParamsError};

const DEFAULT_BASE_ITERATIONS: u32 = 100;
const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;
const DEFAULT_QUEUE_CAPACITY: usize = 5;
const DEFAULT_WIDTH: usize = 800;
const DEFAULT_HEIGHT: usize = 600;
const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
const DEFAULT_ZOOM_LEVEL: i32 = 0;
const UNITS_ACROSS_AT_LEVEL_ZERO: f64 = 3.0;
const ZOOM_STEP: f64 = 1.25;

/// Scale factor for a discrete zoom level; each level zooms in by 25%.
#[must_use]
pub fn zoom_scale(level: i32) -> f64 {
    ZOOM_STEP.powi(level)
}

fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub center: Complex,
    pub zoom_level: i32,
    pub width: usize,
    pub height: usize,
    pub base_iterations: u32,
    pub escape_radius: f64,
    pub workers: usize,
    pub queue_capacity: usize,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom_level: DEFAULT_ZOOM_LEVEL,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            base_iterations: DEFAULT_BASE_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            workers: available_workers(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl MandelbrotConfig {
    #[must_use]
    pub fn zoom(&self) -> f64 {
        // level 0 fits three units of the plane across the shorter side
        zoom_scale(self.zoom_level) * self.width.min(self.height) as f64 / UNITS_ACROSS_AT_LEVEL_ZERO
    }

    pub fn viewport(&self) -> Result<ViewportParams, ViewportParamsError> {
        ViewportParams::new(
            self.center,
            self.zoom(),
            self.width,
            self.height,
            self.base_iterations,
            self.escape_radius,
        )
    }

    /// The fixed-worker and rayon backends raced against each other behind a
    /// single admission gate.
    pub fn build_generator(&self) -> Result<AdmissionGate<Race>, GeneratorError> {
        let branches: Vec<Arc<dyn FieldGenerator>> = vec![
            Arc::new(MandelbrotGenerator::new(self.workers)),
            Arc::new(MandelbrotRayonGenerator),
        ];

        AdmissionGate::new(Race::new(branches)?, self.queue_capacity)
    }
}
