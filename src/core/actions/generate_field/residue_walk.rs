#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SamplePosition {
    pub index: usize,
    pub col: usize,
    pub row: usize,
}

/// Walks the flat indices `worker, worker + workers, worker + 2·workers, ..`
/// of a `width × height` grid in increasing order.
///
/// Columns advance by `workers`; whatever overflows the end of a row is
/// carried over as the starting column of the next one, so no division is
/// needed per sample.
#[derive(Debug, Clone)]
pub struct ResidueWalk {
    width: usize,
    height: usize,
    step: usize,
    col: usize,
    row: usize,
}

impl ResidueWalk {
    /// A `workers` of 0 is treated as 1.
    #[must_use]
    pub fn new(worker: usize, workers: usize, width: usize, height: usize) -> Self {
        let mut walk = Self {
            width,
            height,
            step: workers.max(1),
            col: worker,
            row: 0,
        };
        walk.carry();
        walk
    }

    fn carry(&mut self) {
        if self.width == 0 {
            self.row = self.height;
            return;
        }

        while self.col >= self.width && self.row < self.height {
            self.col -= self.width;
            self.row += 1;
        }
    }
}

impl Iterator for ResidueWalk {
    type Item = SamplePosition;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.height {
            return None;
        }

        let position = SamplePosition {
            index: self.row * self.width + self.col,
            col: self.col,
            row: self.row,
        };

        self.col += self.step;
        self.carry();

        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(worker: usize, workers: usize, width: usize, height: usize) -> Vec<usize> {
        ResidueWalk::new(worker, workers, width, height)
            .map(|p| p.index)
            .collect()
    }

    #[test]
    fn test_walk_matches_modular_arithmetic() {
        for (width, height) in [(1, 1), (2, 2), (3, 7), (7, 3), (10, 10), (1, 13)] {
            let len = width * height;
            for workers in 1..=len + 3 {
                for worker in 0..workers {
                    let expected: Vec<usize> = (0..len).filter(|i| i % workers == worker).collect();
                    assert_eq!(
                        indices(worker, workers, width, height),
                        expected,
                        "worker {} of {} on {}x{}",
                        worker,
                        workers,
                        width,
                        height
                    );
                }
            }
        }
    }

    #[test]
    fn test_positions_agree_with_index() {
        for position in ResidueWalk::new(2, 3, 5, 4) {
            assert_eq!(position.index, position.row * 5 + position.col);
            assert!(position.col < 5);
            assert!(position.row < 4);
        }
    }

    #[test]
    fn test_carry_crosses_rows() {
        // width 4, step 3 from column 2: (2,0) then 5 overflows to (1,1)
        let positions: Vec<(usize, usize)> = ResidueWalk::new(2, 3, 4, 2)
            .map(|p| (p.col, p.row))
            .collect();

        assert_eq!(positions, vec![(2, 0), (1, 1)]);
    }

    #[test]
    fn test_worker_beyond_grid_gets_nothing() {
        assert!(indices(5, 8, 2, 2).is_empty());
    }

    #[test]
    fn test_step_wider_than_row_skips_rows() {
        // width 2, step 5: indices 1, 6, 11 → rows 0, 3, 5
        let rows: Vec<usize> = ResidueWalk::new(1, 5, 2, 6).map(|p| p.row).collect();

        assert_eq!(rows, vec![0, 3, 5]);
    }
}
