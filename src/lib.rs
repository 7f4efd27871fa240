// Search core, shared by the CLI and the WASM build
pub mod direction;
pub mod errors;
pub mod grid;
pub mod matcher;
pub mod placement;
pub mod resolver;
pub mod scanner;
pub mod solver;
pub mod symbol;
pub mod word_list;

// Image front end (injected classifier)
pub mod classifier;

pub mod log;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
