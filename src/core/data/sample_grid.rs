use crate::core::data::complex::Complex;
use crate::core::data::viewport_params::ViewportParams;

/// Maps grid positions onto the complex plane. Samples are `1 / zoom`
/// apart and the grid is centred on the viewport centre whatever the parity
/// of its width and height.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampleGrid {
    width: usize,
    height: usize,
    distance: f64,
    anchor: Complex,
}

impl SampleGrid {
    #[must_use]
    pub fn new(params: &ViewportParams) -> Self {
        let distance = 1.0 / params.zoom();
        let width = params.width() as f64;
        let height = params.height() as f64;
        let offset = Complex::new(
            -distance * width / 2.0 + distance / 2.0,
            distance * height / 2.0 - distance / 2.0,
        );

        Self {
            width: params.width(),
            height: params.height(),
            distance,
            anchor: params.center() + offset,
        }
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
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Coordinate of the top-left sample.
    #[must_use]
    pub fn anchor(&self) -> Complex {
        self.anchor
    }

    #[must_use]
    pub fn coordinate(&self, col: usize, row: usize) -> Complex {
        Complex::new(col as f64 * self.distance, -(row as f64) * self.distance) + self.anchor
    }

    #[must_use]
    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.width + col
    }

    #[must_use]
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }
}
