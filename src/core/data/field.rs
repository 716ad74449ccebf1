use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    SizeMismatch {
        width: usize,
        height: usize,
        cells: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                width,
                height,
                cells,
            } => {
                write!(
                    f,
                    "field of {}x{} samples cannot hold {} cells",
                    width, height, cells
                )
            }
        }
    }
}

impl Error for FieldError {}

/// Set membership of every sample in a grid, row-major: cell
/// `row * width + col` is `true` when the sample is in the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Field {
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, FieldError> {
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(FieldError::SizeMismatch {
                width,
                height,
                cells: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
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
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<bool> {
        if col >= self.width || row >= self.height {
            return None;
        }

        self.cells.get(row * self.width + col).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<bool> {
        self.cells
    }

    #[must_use]
    pub fn count_members(&self) -> usize {
        self.cells.iter().filter(|&&member| member).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells_checks_size() {
        let result = Field::from_cells(3, 2, vec![false; 5]);

        assert_eq!(
            result,
            Err(FieldError::SizeMismatch {
                width: 3,
                height: 2,
                cells: 5
            })
        );
    }

    #[test]
    fn test_get_is_row_major() {
        let field = Field::from_cells(3, 2, vec![false, false, true, true, false, false]).unwrap();

        assert_eq!(field.get(2, 0), Some(true));
        assert_eq!(field.get(0, 1), Some(true));
        assert_eq!(field.get(1, 1), Some(false));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let field = Field::from_cells(2, 2, vec![true; 4]).unwrap();

        assert_eq!(field.get(2, 0), None);
        assert_eq!(field.get(0, 2), None);
    }

    #[test]
    fn test_count_members_and_rows() {
        let field = Field::from_cells(2, 3, vec![true, false, true, true, false, false]).unwrap();
        let rows: Vec<&[bool]> = field.rows().collect();

        assert_eq!(field.count_members(), 3);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], &[true, true]);
    }

    #[test]
    fn test_error_display() {
        let err = FieldError::SizeMismatch {
            width: 2,
            height: 2,
            cells: 3,
        };

        assert_eq!(format!("{}", err), "field of 2x2 samples cannot hold 3 cells");
    }
}
