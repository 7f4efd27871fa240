use crate::log::init_logger;
use crate::placement::Placement;
use crate::resolver::AmbiguityPolicy;
use crate::solver::{solve, SolverConfig, SolverError};
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E005", "S002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<SolverError> for WasmError {
    fn from(e: SolverError) -> Self {
        // surface the underlying input error's code rather than S001
        match &e {
            SolverError::InvalidInput(ie) => WasmError {
                code: ie.code().to_string(),
                message: ie.to_string(),
                description: ie.description().to_string(),
                details: ie.details().to_string(),
                help: ie.help().map(str::to_string),
            },
            SolverError::ClassifierMismatch { .. } => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(str::to_string),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Initialize panic reporting and logging.
///
/// Must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    placements: Vec<Placement>,
    ambiguous: Vec<String>,
    missing: Vec<String>,
}

/// JS entry: (grid_text: string, words: string[], tolerance: number, ambiguity?: string)
/// returns `{ placements, ambiguous, missing }`
///
/// `ambiguity` is `"earliest"` (default), `"keep"` or `"drop"`.
#[wasm_bindgen]
pub fn solve_grid_wasm(
    grid_text: &str,
    words: JsValue,
    tolerance: usize,
    ambiguity: Option<String>,
) -> Result<JsValue, JsValue> {
    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid word-list format".to_string(),
        details: "The words parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Pass a string array, e.g., ['cat', 'dog', 'emu']".to_string()),
    })?;

    let grid = crate::grid::SymbolGrid::parse_from_str(grid_text)
        .map_err(|ie| WasmError::from(SolverError::InvalidInput(ie)))?;

    let ambiguity = parse_ambiguity(ambiguity.as_deref())?;
    let config = SolverConfig::default().with_tolerance(tolerance).with_ambiguity(ambiguity);
    let result = solve(&grid, &words, &config).map_err(WasmError::from)?;

    let wasm_result = WasmSolveResult {
        ambiguous: result.ambiguous_words().into_iter().map(str::to_string).collect(),
        placements: result.placements,
        missing: result.missing,
    };

    serde_wasm_bindgen::to_value(&wasm_result).map_err(|e| {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            details: "The solver result could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

fn parse_ambiguity(name: Option<&str>) -> Result<AmbiguityPolicy, WasmError> {
    match name {
        None => Ok(AmbiguityPolicy::default()),
        Some(name) => AmbiguityPolicy::from_name(name).ok_or_else(|| WasmError {
            code: "WASM003".to_string(),
            message: format!("unknown ambiguity policy '{name}'"),
            description: "Invalid ambiguity policy".to_string(),
            details: "The ambiguity parameter selects how tied placements are reported.".to_string(),
            help: Some("Use 'earliest', 'keep' or 'drop', or omit it".to_string()),
        }),
    }
}

/// Build a plain-text report users can paste into a bug report.
#[wasm_bindgen]
pub fn get_debug_info(grid_text: &str, error_message: &str, word_count: usize, tolerance: usize) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // writing to a String never fails
    let _ = writeln!(&mut report, "=== WORDGRID DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(
        &mut report,
        "Generated: {}",
        js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string())
    );
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{error_message}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Grid Rows: {}", grid_text.lines().filter(|l| !l.trim().is_empty()).count());
    let _ = writeln!(&mut report, "Word Count: {word_count}");
    let _ = writeln!(&mut report, "Tolerance: {tolerance}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {user_agent}");
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}
