//! Turning a puzzle image into symbol codes, as an injected capability.
//!
//! The search core never depends on this module: it only needs a
//! [`SymbolGrid`](crate::grid::SymbolGrid). Anything that can label pixel
//! samples implements [`SymbolClassifier`]; [`NearestNeighbor`] is the stock
//! implementation, and [`slice_cells`] cuts a square image into the per-cell
//! samples it expects.

use log::debug;

use crate::errors::InputError;
use crate::symbol::{is_valid_code, Symbol};

/// Labels feature vectors with symbol codes.
pub trait SymbolClassifier {
    /// Label every sample, returning one code per sample in the same order.
    ///
    /// # Errors
    ///
    /// Implementations report structurally invalid samples (for example a
    /// feature count that differs from the training data).
    fn classify(&self, samples: &[Vec<f64>]) -> Result<Vec<Symbol>, Box<InputError>>;
}

/// Nearest-neighbour classifier using cosine similarity.
///
/// Each sample gets the label of the training vector it has the highest cosine
/// similarity with. Ties go to the earliest training vector, and zero-norm
/// vectors are treated as similarity 0 to everything.
#[derive(Debug, Clone)]
pub struct NearestNeighbor {
    train: Vec<Vec<f64>>,
    labels: Vec<Symbol>,
    dimension: usize,
    /// When set, only these feature indices take part in the comparison.
    features: Option<Vec<usize>>,
}

impl NearestNeighbor {
    /// Build a classifier from training vectors and their labels.
    ///
    /// # Errors
    ///
    /// - [`InputError::EmptyTrainingSet`] if there are no training vectors.
    /// - [`InputError::TrainingLabelMismatch`] if the counts differ.
    /// - [`InputError::SampleDimensionMismatch`] if the vectors differ in length.
    /// - [`InputError::SymbolOutOfRange`] for a label outside `1..=26` (the
    ///   label index is reported as the column).
    pub fn new(train: Vec<Vec<f64>>, labels: Vec<Symbol>) -> Result<Self, Box<InputError>> {
        if train.is_empty() {
            return Err(Box::new(InputError::EmptyTrainingSet));
        }
        if train.len() != labels.len() {
            return Err(Box::new(InputError::TrainingLabelMismatch { samples: train.len(), labels: labels.len() }));
        }
        let dimension = train[0].len();
        check_dimensions(&train, dimension)?;
        if let Some(idx) = labels.iter().position(|&l| !is_valid_code(l)) {
            return Err(Box::new(InputError::SymbolOutOfRange { code: labels[idx], col: idx, row: 0 }));
        }

        Ok(NearestNeighbor { train, labels, dimension, features: None })
    }

    /// Restrict comparisons to a subset of feature indices. Indices past the
    /// sample dimension are ignored.
    #[must_use]
    pub fn with_features(mut self, features: Vec<usize>) -> Self {
        let dimension = self.dimension;
        self.features = Some(features.into_iter().filter(|&i| i < dimension).collect());
        self
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn similarity(&self, a: &[f64], b: &[f64]) -> f64 {
        let (dot, norm_a, norm_b) = match &self.features {
            Some(features) => features.iter().fold((0.0, 0.0, 0.0), |(d, na, nb), &i| {
                (d + a[i] * b[i], na + a[i] * a[i], nb + b[i] * b[i])
            }),
            None => a.iter().zip(b).fold((0.0, 0.0, 0.0), |(d, na, nb), (&x, &y)| {
                (d + x * y, na + x * x, nb + y * y)
            }),
        };
        let denom = norm_a.sqrt() * norm_b.sqrt();
        if denom == 0.0 { 0.0 } else { dot / denom }
    }

    fn nearest(&self, sample: &[f64]) -> Symbol {
        let mut best_idx = 0;
        let mut best_sim = f64::NEG_INFINITY;
        for (idx, train) in self.train.iter().enumerate() {
            let sim = self.similarity(sample, train);
            if sim > best_sim {
                best_sim = sim;
                best_idx = idx;
            }
        }
        self.labels[best_idx]
    }
}

impl SymbolClassifier for NearestNeighbor {
    fn classify(&self, samples: &[Vec<f64>]) -> Result<Vec<Symbol>, Box<InputError>> {
        check_dimensions(samples, self.dimension)?;
        debug!("classifying {} sample(s) against {} training vector(s)", samples.len(), self.train.len());
        Ok(samples.iter().map(|s| self.nearest(s)).collect())
    }
}

fn check_dimensions(samples: &[Vec<f64>], expected: usize) -> Result<(), Box<InputError>> {
    match samples.iter().position(|s| s.len() != expected) {
        Some(index) => Err(Box::new(InputError::SampleDimensionMismatch {
            index,
            len: samples[index].len(),
            expected,
        })),
        None => Ok(()),
    }
}

/// The per-cell samples cut from a puzzle image.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSamples {
    /// Cells per side, `image_side / cell_side`.
    pub grid_size: usize,
    /// One sample per cell, row-major over the grid.
    pub samples: Vec<Vec<f64>>,
}

/// Cut a square pixel image (`pixels[row][col]`) into `cell_side`-sized cells.
///
/// Cells come out row-major over the grid. Within a cell the pixels are
/// flattened column by column, which is the layout of the training data.
///
/// # Errors
///
/// - [`InputError::EmptyGrid`] if the image has no pixels.
/// - [`InputError::NonSquareImage`] if any row's length differs from the row count.
/// - [`InputError::InvalidCellSize`] if `cell_side` is 0 or does not divide the side.
pub fn slice_cells(pixels: &[Vec<f64>], cell_side: usize) -> Result<CellSamples, Box<InputError>> {
    let image_side = pixels.len();
    if image_side == 0 {
        return Err(Box::new(InputError::EmptyGrid));
    }
    if let Some(row) = pixels.iter().position(|r| r.len() != image_side) {
        return Err(Box::new(InputError::NonSquareImage { row, len: pixels[row].len(), expected: image_side }));
    }
    if cell_side == 0 || image_side % cell_side != 0 {
        return Err(Box::new(InputError::InvalidCellSize { image_side, cell_side }));
    }

    let grid_size = image_side / cell_side;
    let mut samples = Vec::with_capacity(grid_size * grid_size);
    for grid_row in 0..grid_size {
        for grid_col in 0..grid_size {
            let top = grid_row * cell_side;
            let left = grid_col * cell_side;
            let mut sample = Vec::with_capacity(cell_side * cell_side);
            for col in left..left + cell_side {
                for row in top..top + cell_side {
                    sample.push(pixels[row][col]);
                }
            }
            samples.push(sample);
        }
    }

    Ok(CellSamples { grid_size, samples })
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2x2 glyphs, flattened column-major
    fn glyph(code: Symbol) -> Vec<f64> {
        match code {
            1 => vec![1.0, 0.0, 0.0, 1.0],
            2 => vec![0.0, 1.0, 1.0, 0.0],
            3 => vec![1.0, 1.0, 0.0, 0.0],
            _ => vec![0.0, 0.0, 1.0, 1.0],
        }
    }

    fn classifier() -> NearestNeighbor {
        NearestNeighbor::new((1..=4).map(glyph).collect(), vec![1, 2, 3, 4]).unwrap()
    }

    #[test]
    fn test_classify_exact_glyphs() {
        let nn = classifier();
        let samples: Vec<_> = [3, 1, 4, 2].into_iter().map(glyph).collect();
        assert_eq!(nn.classify(&samples).unwrap(), vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_classify_is_scale_invariant() {
        let nn = classifier();
        let sample = vec![0.0, 5.0, 4.5, 0.2];
        assert_eq!(nn.classify(&[sample]).unwrap(), vec![2]);
    }

    #[test]
    fn test_zero_sample_goes_to_first_label() {
        let nn = classifier();
        assert_eq!(nn.classify(&[vec![0.0; 4]]).unwrap(), vec![1]);
    }

    #[test]
    fn test_feature_subset() {
        // on features 0 and 1 only, [1, 1, x, x] is closest to glyph 3
        let nn = classifier().with_features(vec![0, 1, 99]);
        assert_eq!(nn.classify(&[vec![1.0, 1.0, 1.0, 1.0]]).unwrap(), vec![3]);
    }

    #[test]
    fn test_new_rejects_bad_training_sets() {
        assert_eq!(*NearestNeighbor::new(vec![], vec![]).unwrap_err(), InputError::EmptyTrainingSet);
        assert_eq!(
            *NearestNeighbor::new(vec![glyph(1)], vec![1, 2]).unwrap_err(),
            InputError::TrainingLabelMismatch { samples: 1, labels: 2 }
        );
        assert_eq!(
            *NearestNeighbor::new(vec![glyph(1), vec![1.0]], vec![1, 2]).unwrap_err(),
            InputError::SampleDimensionMismatch { index: 1, len: 1, expected: 4 }
        );
        assert_eq!(NearestNeighbor::new(vec![glyph(1)], vec![30]).unwrap_err().code(), "E003");
    }

    #[test]
    fn test_classify_rejects_wrong_dimension() {
        let err = classifier().classify(&[glyph(1), vec![1.0; 9]]).unwrap_err();
        assert_eq!(*err, InputError::SampleDimensionMismatch { index: 1, len: 9, expected: 4 });
    }

    #[test]
    fn test_slice_cells_layout() {
        // 4x4 image, 2x2 cells; pixel value = row * 10 + col
        let pixels: Vec<Vec<f64>> = (0..4).map(|r| (0..4).map(|c| f64::from(r * 10 + c)).collect()).collect();
        let cells = slice_cells(&pixels, 2).unwrap();
        assert_eq!(cells.grid_size, 2);
        assert_eq!(cells.samples.len(), 4);
        // top-left cell, column-major: (0,0) (1,0) (0,1) (1,1)
        assert_eq!(cells.samples[0], vec![0.0, 10.0, 1.0, 11.0]);
        // top-right cell is second (row-major over cells)
        assert_eq!(cells.samples[1], vec![2.0, 12.0, 3.0, 13.0]);
        // bottom-left cell
        assert_eq!(cells.samples[2], vec![20.0, 30.0, 21.0, 31.0]);
    }

    #[test]
    fn test_slice_cells_validation() {
        let square = vec![vec![0.0; 4]; 4];
        assert_eq!(slice_cells(&square, 3).unwrap_err().code(), "E006");
        assert_eq!(slice_cells(&square, 0).unwrap_err().code(), "E006");
        assert_eq!(*slice_cells(&[], 2).unwrap_err(), InputError::EmptyGrid);
        let ragged = vec![vec![0.0; 4], vec![0.0; 3], vec![0.0; 4], vec![0.0; 4]];
        assert_eq!(
            *slice_cells(&ragged, 2).unwrap_err(),
            InputError::NonSquareImage { row: 1, len: 3, expected: 4 }
        );
    }
}
