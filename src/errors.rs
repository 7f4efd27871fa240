//! Input-validation errors with error codes and helpful messages.
//!
//! Search-level outcomes (an attempt running off the grid, a word exceeding the
//! tolerance, a word that is simply not in the grid) are never errors. Only
//! structurally invalid input ends up here.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E010) for documentation lookup:
//!
//! - E001: `EmptyGrid` (Grid has no cells)
//! - E002: `NonSquareGrid` (Grid row length differs from the row count)
//! - E003: `SymbolOutOfRange` (Cell code outside the alphabet)
//! - E004: `EmptyWord` (Zero-length target word)
//! - E005: `InvalidWordChar` (Target word contains a non-letter)
//! - E006: `InvalidCellSize` (Image side not divisible by the cell side)
//! - E007: `NonSquareImage` (Pixel image is not square)
//! - E008: `EmptyTrainingSet` (Classifier has no training samples)
//! - E009: `TrainingLabelMismatch` (Training samples and labels differ in count)
//! - E010: `SampleDimensionMismatch` (Feature vectors differ in length)
//!
//! # Examples
//!
//! ```
//! use wordgrid::errors::InputError;
//! use wordgrid::grid::SymbolGrid;
//!
//! match SymbolGrid::parse_from_str("ABC\nDE") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!         assert!(matches!(*e, InputError::NonSquareGrid { .. }));
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;

use crate::symbol::Symbol;

/// Structurally invalid input handed to the solver or one of its loaders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Grid has no cells")]
    EmptyGrid,

    #[error("Grid is not square: row {row} has {len} cells, expected {expected}")]
    NonSquareGrid { row: usize, len: usize, expected: usize },

    #[error("Symbol code {code} at ({col}, {row}) is outside the alphabet (1-26)")]
    SymbolOutOfRange { code: Symbol, col: usize, row: usize },

    #[error("Empty target word")]
    EmptyWord,

    #[error("Word \"{word}\" contains invalid character '{invalid_char}' (only A-Z allowed)")]
    InvalidWordChar { word: String, invalid_char: char },

    #[error("Image side {image_side} is not a positive multiple of cell side {cell_side}")]
    InvalidCellSize { image_side: usize, cell_side: usize },

    #[error("Image is not square: row {row} has {len} pixels, expected {expected}")]
    NonSquareImage { row: usize, len: usize, expected: usize },

    #[error("Classifier has no training samples")]
    EmptyTrainingSet,

    #[error("{samples} training samples but {labels} labels")]
    TrainingLabelMismatch { samples: usize, labels: usize },

    #[error("Sample {index} has {len} features, expected {expected}")]
    SampleDimensionMismatch { index: usize, len: usize, expected: usize },
}

impl From<InputError> for io::Error {
    fn from(ie: InputError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, ie)
    }
}

impl InputError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InputError::EmptyGrid => "E001",
            InputError::NonSquareGrid { .. } => "E002",
            InputError::SymbolOutOfRange { .. } => "E003",
            InputError::EmptyWord => "E004",
            InputError::InvalidWordChar { .. } => "E005",
            InputError::InvalidCellSize { .. } => "E006",
            InputError::NonSquareImage { .. } => "E007",
            InputError::EmptyTrainingSet => "E008",
            InputError::TrainingLabelMismatch { .. } => "E009",
            InputError::SampleDimensionMismatch { .. } => "E010",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            InputError::EmptyGrid => "Grid has no cells",
            InputError::NonSquareGrid { .. } => "Grid row length differs from the row count",
            InputError::SymbolOutOfRange { .. } => "Cell code outside the alphabet",
            InputError::EmptyWord => "Zero-length target word",
            InputError::InvalidWordChar { .. } => "Target word contains a non-letter",
            InputError::InvalidCellSize { .. } => "Image side not divisible by the cell side",
            InputError::NonSquareImage { .. } => "Pixel image is not square",
            InputError::EmptyTrainingSet => "Classifier has no training samples",
            InputError::TrainingLabelMismatch { .. } => "Training samples and labels differ in count",
            InputError::SampleDimensionMismatch { .. } => "Feature vectors differ in length",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            InputError::EmptyGrid => "The grid text or classifier output contained no cells. A puzzle needs at least one row.",
            InputError::NonSquareGrid { .. } => "Word-search grids are square: every row must hold exactly as many cells as there are rows.",
            InputError::SymbolOutOfRange { .. } => "Grid cells hold letter codes 1 (A) through 26 (Z). Any other value means the grid was built from something other than classifier output.",
            InputError::EmptyWord => "A target word must have at least one letter; there is nothing to place otherwise.",
            InputError::InvalidWordChar { .. } => "Target words are matched letter by letter against the grid alphabet, so only A-Z (either case) can ever match.",
            InputError::InvalidCellSize { .. } => "The image is cut into square cells of a fixed side; the image side must be a whole number of cells.",
            InputError::NonSquareImage { .. } => "The puzzle image must be square so that it slices into a square grid.",
            InputError::EmptyTrainingSet => "A nearest-neighbour classifier cannot label anything without at least one training sample.",
            InputError::TrainingLabelMismatch { .. } => "Every training sample needs exactly one label.",
            InputError::SampleDimensionMismatch { .. } => "Cosine similarity compares vectors feature by feature, so every training and test sample must have the same length.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::EmptyGrid => Some("Provide one line of letters per grid row, e.g. 'CAT\\nAXE\\nTEA'"),
            InputError::NonSquareGrid { .. } => Some("Check for a missing or extra letter in the reported row"),
            InputError::EmptyWord => Some("Remove blank entries from the word list"),
            InputError::InvalidWordChar { .. } => Some("Remove spaces, hyphens and digits from the word (e.g. 'ICE CREAM' becomes 'ICECREAM')"),
            InputError::InvalidCellSize { .. } => Some("For a 450-pixel image of a 15x15 puzzle use a cell side of 30"),
            InputError::TrainingLabelMismatch { .. } => Some("Pass one label per training sample, in the same order"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<InputError> {
        vec![
            InputError::EmptyGrid,
            InputError::NonSquareGrid { row: 1, len: 2, expected: 3 },
            InputError::SymbolOutOfRange { code: 0, col: 1, row: 2 },
            InputError::EmptyWord,
            InputError::InvalidWordChar { word: "A1".to_string(), invalid_char: '1' },
            InputError::InvalidCellSize { image_side: 100, cell_side: 30 },
            InputError::NonSquareImage { row: 0, len: 4, expected: 5 },
            InputError::EmptyTrainingSet,
            InputError::TrainingLabelMismatch { samples: 3, labels: 2 },
            InputError::SampleDimensionMismatch { index: 1, len: 8, expected: 9 },
        ]
    }

    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            assert!(codes.insert(err.code()), "Duplicate error code found: {}", err.code());
        }
        assert_eq!(codes.len(), 10);
    }

    #[test]
    fn test_error_code_format() {
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (E0XX)", code);
            assert!(code.starts_with("E0"), "Error code '{}' should start with 'E0'", code);
            assert!(code[1..].parse::<u16>().is_ok());
        }
    }

    #[test]
    fn test_help_text_adds_information() {
        for err in all_variants() {
            if let Some(help_text) = err.help() {
                assert!(help_text.len() > 10, "Help text for {:?} should be substantial", err);
                assert_ne!(help_text, err.to_string());
            }
            assert!(!err.description().is_empty());
            assert!(!err.details().is_empty());
        }
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let err = InputError::InvalidWordChar { word: "ICE CREAM".to_string(), invalid_char: ' ' };
        let detailed = err.display_detailed();
        assert!(detailed.contains("E005"));
        assert!(detailed.contains("ICE CREAM"));
        assert!(detailed.contains("ICECREAM"));
    }

    #[test]
    fn test_display_detailed_without_help() {
        let err = InputError::EmptyTrainingSet;
        assert_eq!(err.display_detailed(), "Classifier has no training samples (E008)");
    }

    #[test]
    fn test_non_square_message_reports_values() {
        let err = InputError::NonSquareGrid { row: 2, len: 4, expected: 5 };
        let msg = err.to_string();
        assert!(msg.contains("row 2") && msg.contains('4') && msg.contains('5'));
    }

    #[test]
    fn test_into_io_error() {
        let io_err: io::Error = InputError::EmptyWord.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(io_err.to_string(), "Empty target word");
    }
}
