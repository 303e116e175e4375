//! Go project detection.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::context::GoVersion;
use crate::error::Error;
use crate::exec::CommandRunner;

/// Marker file of a Go module.
pub const MARKER: &str = "go.mod";

/// `go version` output in neither known shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure;

/// Detect Go toolchain information.
///
/// `Ok(None)` when `dir` is not a Go module or the toolchain can't report a
/// version. Only an unreadable marker file is an error.
pub async fn detect(runner: &dyn CommandRunner, dir: &Path) -> Result<Option<GoVersion>, Error> {
    let marker = dir.join(MARKER);
    match fs::metadata(&marker) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(Error::Io {
                path: marker,
                source,
            });
        }
    }

    let output = match runner.output("go", &["version"], dir).await {
        Ok(out) => out,
        Err(e) if e.is_absence() => {
            debug!(error = %e, "go version unavailable");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let stdout = String::from_utf8_lossy(&output);
    match parse_version(&stdout) {
        Ok(version) => Ok(Some(version)),
        Err(ParseFailure) => {
            debug!(output = %stdout.trim(), "unrecognized go version output");
            Ok(None)
        }
    }
}

/// Parse `go version` output.
///
/// - `go version go1.21.5 darwin/arm64` -> `Release("1.21.5")`
/// - `go version devel go1.22-3f8f929d60 Tue Oct 3 ...` -> `Development("go1.22-3f8f929d60")`
pub fn parse_version(output: &str) -> Result<GoVersion, ParseFailure> {
    let mut fields = output.split_whitespace();
    if fields.next() != Some("go") || fields.next() != Some("version") {
        return Err(ParseFailure);
    }

    match fields.next() {
        Some("devel") => fields
            .next()
            .map(|token| GoVersion::Development(token.to_string()))
            .ok_or(ParseFailure),
        Some(token) => token
            .strip_prefix("go")
            .filter(|v| !v.is_empty())
            .map(|v| GoVersion::Release(v.to_string()))
            .ok_or(ParseFailure),
        None => Err(ParseFailure),
    }
}
