/// A module with error types
pub mod errors;

/// The fixed minification configuration
pub mod options;

/// The minifier interface and its oxc implementation
pub mod minifier;

/// A module to minify one source file into one destination file
pub mod runner;

pub use minifier::{JsMinifier, OxcMinifier};
pub use options::{MinifyOptions, MINIFY_OPTIONS};
pub use runner::{minify_file, MinifyReport};
