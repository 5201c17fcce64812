//! CLI support for searching the directory from a terminal.
//!
//! The binary delegates to these functions so the query loop can be
//! exercised in tests against in-memory readers and writers.

mod error;

use std::io::{BufRead, Write};

use tokio::runtime::Builder;

use crate::config::DirectorySettings;
use crate::session::SearchSession;

pub use error::CliError;

/// Loads the directory described by `settings`, waiting out the publication
/// delay on a current-thread runtime.
///
/// # Errors
///
/// Returns [`CliError::Runtime`] if the Tokio runtime cannot be built.
///
/// # Example
///
/// ```
/// use user_directory::DirectorySettings;
/// use user_directory::cli::load_session;
///
/// let settings = DirectorySettings {
///     record_count: 12,
///     load_delay_ms: 0,
///     ..DirectorySettings::default()
/// };
/// let session = load_session(&settings).expect("session loads");
///
/// assert_eq!(session.records().len(), 12);
/// ```
pub fn load_session(settings: &DirectorySettings) -> Result<SearchSession, CliError> {
    let runtime = Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|source| CliError::Runtime { source })?;
    let dataset = runtime.block_on(settings.loader().load());
    Ok(SearchSession::new(dataset))
}

/// Runs one query and writes its JSON summary as a single line.
///
/// # Errors
///
/// Returns [`CliError`] when the summary cannot be encoded or written.
///
/// # Example
///
/// ```
/// use user_directory::cli::write_report;
/// use user_directory::{SearchSession, generate};
///
/// let session = SearchSession::new(generate(30).into());
/// let mut out = Vec::new();
/// write_report(&session, "firstname3", 1, &mut out).expect("report written");
///
/// let line = String::from_utf8(out).expect("utf-8");
/// assert!(line.contains("\"resultCount\":2"));
/// ```
pub fn write_report<W>(
    session: &SearchSession,
    query: &str,
    limit: usize,
    out: &mut W,
) -> Result<usize, CliError>
where
    W: Write,
{
    let report = session.search(query);
    serde_json::to_writer(&mut *out, &report.summary(limit)).map_err(|err| {
        if err.is_io() {
            CliError::WriteReport { source: err.into() }
        } else {
            CliError::EncodeReport { source: err }
        }
    })?;
    writeln!(out).map_err(|source| CliError::WriteReport { source })?;
    Ok(report.result_count())
}

/// Reads queries line by line and writes one summary per line.
///
/// Every line, including an empty one, is a query. A line that is not valid
/// UTF-8 is answered as the empty query. Returns the number of queries
/// answered.
///
/// # Errors
///
/// Returns [`CliError`] when input cannot be read or output cannot be
/// written.
pub fn run_queries<R, W>(
    session: &SearchSession,
    mut input: R,
    out: &mut W,
    limit: usize,
) -> Result<usize, CliError>
where
    R: BufRead,
    W: Write,
{
    let mut answered = 0;
    while let Some(query) = read_query(&mut input)? {
        write_report(session, &query, limit, out)?;
        answered += 1;
    }
    out.flush()
        .map_err(|source| CliError::WriteReport { source })?;
    Ok(answered)
}

fn read_query<R>(input: &mut R) -> Result<Option<String>, CliError>
where
    R: BufRead,
{
    let mut buf = Vec::new();
    let read = input
        .read_until(b'\n', &mut buf)
        .map_err(|source| CliError::ReadQuery { source })?;
    if read == 0 {
        return Ok(None);
    }
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8(buf).unwrap_or_default()))
}

/// Runs the CLI against the supplied settings and streams.
///
/// A configured single query takes precedence over `input`.
///
/// # Errors
///
/// Returns [`CliError`] when loading, reading, or writing fails.
pub fn run<R, W>(settings: &DirectorySettings, input: R, out: &mut W) -> Result<usize, CliError>
where
    R: BufRead,
    W: Write,
{
    let session = load_session(settings)?;
    match settings.query.as_deref() {
        Some(query) => {
            write_report(&session, query, settings.result_limit, out)?;
            out.flush()
                .map_err(|source| CliError::WriteReport { source })?;
            Ok(1)
        }
        None => run_queries(&session, input, out, settings.result_limit),
    }
}

#[cfg(test)]
mod tests;
