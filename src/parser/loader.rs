use std::io::{BufRead, BufReader, ErrorKind, Read};

use propfile_error::{ErrorExt, LogLevel};
use tracing::{debug, error, warn};

use super::{
    decoder::{LoadSummary, Parser},
    sink::PropertySink,
};
use crate::{config::Settings, error::LoadError};

/// Reads `reader` to the end and deposits every definition into `sink`.
///
/// The reader is consumed through an internal buffer of
/// `settings.read_buffer_size` bytes; it is never closed. Reads interrupted
/// by a signal are retried, any other read error is returned unchanged.
/// On a syntax error the definitions committed before the bad line stay in
/// the sink.
pub fn load_from<R, S>(
    reader: R,
    sink: &mut S,
    settings: &Settings,
) -> Result<LoadSummary, LoadError>
where
    R: Read,
    S: PropertySink + ?Sized,
{
    let mut reader = BufReader::with_capacity(settings.read_buffer_size.max(1), reader);
    let mut parser = Parser::from_settings(settings);
    let mut bytes = 0usize;

    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                let err = LoadError::Io(e);
                report(&err, parser.line());
                return Err(err);
            }
        };
        if chunk.is_empty() {
            break;
        }
        let n = chunk.len();
        if let Err(e) = parser.feed(chunk, sink) {
            let line = e.line();
            let err = LoadError::Syntax(e);
            report(&err, line);
            return Err(err);
        }
        reader.consume(n);
        bytes += n;
    }

    let summary = match parser.finish(sink) {
        Ok(summary) => summary,
        Err(e) => {
            let line = e.line();
            let err = LoadError::Syntax(e);
            report(&err, line);
            return Err(err);
        }
    };
    debug!(
        entries = summary.entries,
        lines = summary.lines,
        bytes,
        "Properties loaded"
    );
    Ok(summary)
}

/// Logs a failed load at the level its status code calls for.
fn report(
    err: &LoadError,
    line: usize,
) {
    let code = err.status_code();
    match code.log_level() {
        LogLevel::Warn => warn!(line, code = code.code(), error = %err, "Invalid properties text"),
        LogLevel::Error => {
            error!(line, code = code.code(), error = %err, "Failed to load properties")
        }
    }
}
