// grid.rs - The character grid shown as the "book"

use rand::Rng;

use crate::alphabet::Alphabet;

/// Row-major rows × cols matrix of characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// A freshly sampled grid.
    pub fn random<R: Rng>(rows: usize, cols: usize, alphabet: &Alphabet, rng: &mut R) -> Self {
        let cells = (0..rows * cols).map(|_| alphabet.sample(rng)).collect();
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks(0) panics; a zero-width grid has no cells anyway
        self.cells.chunks(self.cols.max(1))
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// One line per row, cells separated by a single space, no trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 3);
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for (j, ch) in row.iter().enumerate() {
                if j > 0 {
                    out.push(' ');
                }
                out.push(*ch);
            }
        }
        out
    }
}

/// Replaces every cell with an independent uniform draw from `alphabet`.
pub fn resample<R: Rng>(grid: &mut Grid, alphabet: &Alphabet, rng: &mut R) {
    for cell in grid.cells.iter_mut() {
        *cell = alphabet.sample(rng);
    }
}
