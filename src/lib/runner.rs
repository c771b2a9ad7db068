use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use log::{debug, info};

use crate::errors::*;
use crate::minifier::JsMinifier;
use crate::options::MinifyOptions;

/// Sizes of the source and the minified output of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinifyReport {
    pub input_bytes: u64,
    pub output_bytes: u64,
}

impl MinifyReport {
    /// Bytes removed by minification, zero if the output grew
    pub fn bytes_saved(&self) -> u64 {
        self.input_bytes.saturating_sub(self.output_bytes)
    }
}

/// Minify the JavaScript file at `source` into a file at `destination`, creating the
/// destination's directory if needed. Nothing is written unless minification succeeds.
pub fn minify_file<M: JsMinifier>(minifier: &M,
                                  source: &Path,
                                  destination: &Path,
                                  options: &MinifyOptions) -> Result<MinifyReport> {
    if let Some(dir) = destination.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            debug!("Creating output directory '{}'", dir.display());
            fs::create_dir_all(dir)
                .chain_err(|| ErrorKind::CreateDir(dir.display().to_string()))?;
        }
    }

    let code = fs::read_to_string(source)
        .chain_err(|| ErrorKind::Read(source.display().to_string()))?;
    debug!("Read {} bytes from '{}'", code.len(), source.display());

    let minified = contain_panic(|| minifier.minify(&code, options))?;

    fs::write(destination, &minified)
        .chain_err(|| ErrorKind::Write(destination.display().to_string()))?;

    let report = MinifyReport {
        input_bytes: code.len() as u64,
        output_bytes: minified.len() as u64,
    };
    info!("'{}': {} -> {} bytes ({} saved)", source.display(), report.input_bytes,
          report.output_bytes, report.bytes_saved());

    Ok(report)
}

// Run `minify` with the panic hook silenced, turning a panic into [ErrorKind::MinifierPanicked]
fn contain_panic<F: FnOnce() -> Result<String>>(minify: F) -> Result<String> {
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(AssertUnwindSafe(minify));
    panic::set_hook(hook);

    outcome.map_err(|payload| {
        let message = payload.downcast_ref::<&str>().map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".into());
        debug!("Minifier panicked: {message}");
        Error::from(ErrorKind::MinifierPanicked(message))
    })?
}
