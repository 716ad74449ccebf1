use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportParamsError {
    EmptyGrid { width: usize, height: usize },
    InvalidZoom(f64),
    ZeroBaseIterations,
    InvalidEscapeRadius(f64),
    InvalidCenter(Complex),
}

impl fmt::Display for ViewportParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "sample grid must not be empty: {}x{}", width, height)
            }
            Self::InvalidZoom(zoom) => write!(f, "zoom must be positive and finite: {}", zoom),
            Self::ZeroBaseIterations => write!(f, "base iterations must be greater than zero"),
            Self::InvalidEscapeRadius(radius) => {
                write!(f, "escape radius must be positive and finite: {}", radius)
            }
            Self::InvalidCenter(center) => {
                write!(f, "center must be finite: ({}, {})", center.real, center.imag)
            }
        }
    }
}

impl Error for ViewportParamsError {}

/// Everything a generator needs to know about one request: where the
/// viewport sits, how finely it is sampled and how hard each sample is
/// iterated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportParams {
    center: Complex,
    zoom: f64,
    width: usize,
    height: usize,
    base_iterations: u32,
    escape_radius: f64,
}

impl ViewportParams {
    pub fn new(
        center: Complex,
        zoom: f64,
        width: usize,
        height: usize,
        base_iterations: u32,
        escape_radius: f64,
    ) -> Result<Self, ViewportParamsError> {
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(ViewportParamsError::EmptyGrid { width, height });
        }

        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(ViewportParamsError::InvalidZoom(zoom));
        }

        if base_iterations == 0 {
            return Err(ViewportParamsError::ZeroBaseIterations);
        }

        if !(escape_radius.is_finite() && escape_radius > 0.0) {
            return Err(ViewportParamsError::InvalidEscapeRadius(escape_radius));
        }

        if !center.is_finite() {
            return Err(ViewportParamsError::InvalidCenter(center));
        }

        Ok(Self {
            center,
            zoom,
            width,
            height,
            base_iterations,
            escape_radius,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn base_iterations(&self) -> u32 {
        self.base_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }

    #[must_use]
    pub fn escape_radius_squared(&self) -> f64 {
        self.escape_radius * self.escape_radius
    }

    /// Number of samples in the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Iterations granted to each sample: `1 + floor(base · ln(1 + zoom))`.
    /// Grows logarithmically so deep zooms resolve boundary detail without
    /// the cost running away.
    #[must_use]
    pub fn iteration_budget(&self) -> u32 {
        let scaled = (f64::from(self.base_iterations) * self.zoom.ln_1p()).floor();

        // `as` saturates for out of range floats
        (scaled as u32).saturating_add(1)
    }
}
