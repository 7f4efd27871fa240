//! Generate error code documentation from the error enums themselves.
//!
//! Codes, descriptions, details and help text come straight from the
//! `code()`, `description()`, `details()` and `help()` methods of
//! `InputError` and `SolverError`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;

use wordgrid::errors::InputError;
use wordgrid::solver::SolverError;

/// Append documentation for a list of errors that expose `code()`,
/// `description()`, `details()`, `help()` and `display_detailed()`.
macro_rules! write_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            let _ = writeln!($out, "### {}: {}\n", error.code(), error.description());
            let _ = writeln!($out, "**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                let _ = writeln!($out, "**How to fix:**\n```\n{help_text}\n```\n");
            }

            let _ = writeln!($out, "**Example error message:**\n```\n{error}\n```\n");
            let _ = writeln!($out, "**Detailed format:**\n```\n{}\n```\n", error.display_detailed());
            let _ = writeln!($out, "---\n");
        }
    };
}

fn all_input_error_variants() -> Vec<InputError> {
    vec![
        InputError::EmptyGrid,
        InputError::NonSquareGrid { row: 2, len: 14, expected: 15 },
        InputError::SymbolOutOfRange { code: 27, col: 3, row: 0 },
        InputError::EmptyWord,
        InputError::InvalidWordChar { word: "ICE CREAM".to_string(), invalid_char: ' ' },
        InputError::InvalidCellSize { image_side: 450, cell_side: 28 },
        InputError::NonSquareImage { row: 0, len: 600, expected: 450 },
        InputError::EmptyTrainingSet,
        InputError::TrainingLabelMismatch { samples: 26, labels: 25 },
        InputError::SampleDimensionMismatch { index: 4, len: 784, expected: 900 },
    ]
}

fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::InvalidInput(Box::new(InputError::EmptyWord)),
        SolverError::ClassifierMismatch { expected: 225, actual: 224 },
    ]
}

fn generate_docs() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**This document is auto-generated from the source code. Do not edit manually.**\n");

    let _ = writeln!(out, "## Table of Contents\n");
    let _ = writeln!(out, "- [Solver Errors (S001-S002)](#solver-errors)");
    let _ = writeln!(out, "- [Input Errors (E001-E010)](#input-errors)");
    let _ = writeln!(out, "- [How to Use Error Codes](#how-to-use-error-codes)\n");

    let _ = writeln!(out, "## Solver Errors\n");
    let _ = writeln!(out, "Top-level errors from the solver. S001 wraps an input error.\n");
    write_error_docs!(&mut out, all_solver_error_variants());

    let _ = writeln!(out, "## Input Errors\n");
    let _ = writeln!(out, "Errors for malformed grids, words, images and training data.\n");
    write_error_docs!(&mut out, all_input_error_variants());

    let _ = writeln!(out, "\n## How to Use Error Codes\n");
    let _ = writeln!(out, "When you see an error like:\n");
    let _ = writeln!(out, "```\n{}\n```\n", InputError::EmptyWord.display_detailed());
    let _ = writeln!(out, "1. Note the error code (e.g., `E004`)");
    let _ = writeln!(out, "2. Look it up in this document for a detailed explanation");
    let _ = writeln!(out, "3. Follow the suggested fix\n");

    out
}

fn main() {
    print!("{}", generate_docs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_documented() {
        let docs = generate_docs();
        for e in all_input_error_variants() {
            assert!(docs.contains(&format!("### {}:", e.code())), "{} missing", e.code());
        }
        for e in all_solver_error_variants() {
            assert!(docs.contains(&format!("### {}:", e.code())), "{} missing", e.code());
        }
    }

    #[test]
    fn test_variant_lists_are_complete() {
        let input_codes: std::collections::HashSet<_> = all_input_error_variants().iter().map(InputError::code).collect();
        assert_eq!(input_codes.len(), 10);
        let solver_codes: std::collections::HashSet<_> = all_solver_error_variants().iter().map(SolverError::code).collect();
        assert_eq!(solver_codes.len(), 2);
    }
}
