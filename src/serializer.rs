//! Writes a property table back to `.properties` text.

use std::io::{self, Write};

use tracing::debug;

use crate::{
    config::Settings,
    escape::{escape_key, escape_value, EscapePolicy},
    properties::Properties,
};

/// Writes `key=value` lines to an underlying writer.
///
/// Each entry is encoded into a reusable line buffer and handed to the
/// writer with a single `write_all`.
pub struct Serializer<W: Write> {
    writer: W,
    policy: EscapePolicy,
    line: String,
    written: usize,
}

impl<W: Write> Serializer<W> {
    pub fn new(
        writer: W,
        policy: EscapePolicy,
    ) -> Self {
        Self {
            writer,
            policy,
            line: String::new(),
            written: 0,
        }
    }

    pub fn write_entry(
        &mut self,
        key: &str,
        value: &str,
    ) -> io::Result<()> {
        self.line.clear();
        encode_entry(self.policy, key, value, &mut self.line);
        self.writer.write_all(self.line.as_bytes())?;
        self.written += self.line.len();
        Ok(())
    }

    /// Bytes handed to the writer so far.
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Appends one escaped `key=value\n` line to `out`.
pub fn encode_entry(
    policy: EscapePolicy,
    key: &str,
    value: &str,
    out: &mut String,
) {
    escape_key(policy, key, out);
    out.push('=');
    escape_value(policy, value, out);
    out.push('\n');
}

/// Entries of `props` in output order.
pub(crate) fn ordered_entries(
    props: &Properties,
    sorted: bool,
) -> Vec<(&str, &str)> {
    let mut entries: Vec<_> = props.iter().collect();
    if sorted {
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    }
    entries
}

/// Writes every entry of `props` to `writer` and flushes it.
///
/// The first IO error stops the write and is returned as is; lines already
/// written stay written. Returns the number of bytes written.
pub fn store_to<W: Write>(
    props: &Properties,
    writer: W,
    settings: &Settings,
) -> io::Result<usize> {
    let mut serializer = Serializer::new(writer, settings.escape_policy);
    let entries = ordered_entries(props, settings.sorted_output);
    for (key, value) in &entries {
        serializer.write_entry(key, value)?;
    }
    serializer.flush()?;
    debug!(
        entries = entries.len(),
        bytes = serializer.bytes_written(),
        sorted = settings.sorted_output,
        "Properties stored"
    );
    Ok(serializer.bytes_written())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer that accepts `budget` bytes and then fails.
    struct Limited {
        out: Vec<u8>,
        budget: usize,
    }

    impl Write for Limited {
        fn write(
            &mut self,
            buf: &[u8],
        ) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "disk full"));
            }
            let n = buf.len().min(self.budget);
            self.out.extend_from_slice(&buf[..n]);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_entry_format() {
        let mut s = Serializer::new(Vec::new(), EscapePolicy::Extended);
        s.write_entry("key", "value").unwrap();
        s.write_entry("a=b", "c=d").unwrap();
        assert_eq!(s.bytes_written(), 19);
        assert_eq!(s.into_inner(), b"key=value\na\\=b=c=d\n");
    }

    #[test]
    fn test_encode_entry_strict_newline_is_continuation() {
        let mut out = String::new();
        encode_entry(EscapePolicy::Strict, "k", "one\ntwo", &mut out);
        assert_eq!(out, "k=one\\\ntwo\n");
    }

    #[test]
    fn test_store_sorted() {
        let props: Properties = [("b", "2"), ("c", "3"), ("a", "1")].into_iter().collect();
        let mut out = Vec::new();
        let settings = Settings::default().with_sorted_output(true);
        let n = store_to(&props, &mut out, &settings).unwrap();
        assert_eq!(out, b"a=1\nb=2\nc=3\n");
        assert_eq!(n, out.len());
    }

    #[test]
    fn test_first_write_error_aborts() {
        let props: Properties = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        let mut sink = Limited {
            out: Vec::new(),
            budget: 5,
        };
        let settings = Settings::default().with_sorted_output(true);
        let err = store_to(&props, &mut sink, &settings).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
        assert_eq!(sink.out, b"a=1\nb");
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let mut out = Vec::new();
        let n = store_to(&Properties::new(), &mut out, &Settings::default()).unwrap();
        assert_eq!(n, 0);
        assert!(out.is_empty());
    }
}
