//! Response printing for the binary.

use std::io::Write;

use anyhow::{Context, Result};

/// Writes the status line, optionally the headers, then the body.
///
/// The body is decoded as text (lossy for non-UTF-8 content).
pub async fn write_response<W: Write>(
    response: reqwest::Response,
    include_headers: bool,
    out: &mut W,
) -> Result<()> {
    let status = response.status();
    writeln!(
        out,
        "{:?} {} {}",
        response.version(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status Code")
    )?;

    if include_headers {
        for (name, value) in response.headers() {
            writeln!(out, "{}: {}", name, value.to_str().unwrap_or_default())?;
        }
    }
    writeln!(out)?;

    let body = response.text().await.context("Failed to read response body")?;
    out.write_all(body.as_bytes())?;
    if !body.ends_with('\n') && !body.is_empty() {
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
