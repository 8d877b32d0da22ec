use memchr::memchr;
use propfile_error::SyntaxError;
use tracing::trace;

use super::{
    sink::PropertySink,
    state::{Member, Phase, ScanState},
};
use crate::{
    config::Settings,
    escape::{is_blank, EscapePolicy, COMMENT, ESCAPE, NEWLINE, SEPARATOR},
};

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Number of committed definitions, redefinitions included.
    pub entries: usize,
    /// Number of physical lines scanned.
    pub lines: usize,
}

/// Push-style `.properties` parser.
///
/// Bytes are fed in chunks of any size; the chunk boundaries have no effect
/// on the result. Every completed definition is handed to the sink as soon
/// as its logical line ends. After an error the parser must be discarded.
#[derive(Debug)]
pub struct Parser {
    state: ScanState,
    policy: EscapePolicy,
    limit: Option<usize>,
    line: usize,
    buf: Member,
    key: Vec<u8>,
    entries: usize,
    last: Option<u8>,
}

impl Parser {
    pub fn new(policy: EscapePolicy) -> Self {
        Self {
            state: ScanState::LineStart,
            policy,
            limit: None,
            line: 1,
            buf: Member::default(),
            key: Vec::new(),
            entries: 0,
            last: None,
        }
    }

    /// Parser that rejects keys or values longer than `limit` bytes.
    pub fn with_limit(
        policy: EscapePolicy,
        limit: usize,
    ) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new(policy)
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            limit: settings.max_member_len,
            ..Self::new(settings.escape_policy)
        }
    }

    /// Current 1-based physical line.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Scans `chunk`, committing every logical line it completes.
    pub fn feed<S: PropertySink + ?Sized>(
        &mut self,
        chunk: &[u8],
        sink: &mut S,
    ) -> Result<(), SyntaxError> {
        let mut pos = 0;
        while pos < chunk.len() {
            if self.state == ScanState::Comment {
                match memchr(NEWLINE, &chunk[pos..]) {
                    Some(i) => {
                        pos += i + 1;
                        self.line += 1;
                        self.state = ScanState::LineStart;
                        continue;
                    }
                    None => break,
                }
            }
            let b = chunk[pos];
            pos += 1;
            self.step(b, sink)?;
        }
        if let Some(&b) = chunk.last() {
            self.last = Some(b);
        }
        Ok(())
    }

    /// Applies the end-of-stream rules and returns the load summary.
    ///
    /// A definition without a trailing newline is committed as if one were
    /// present; a pending continuation backslash is an error.
    pub fn finish<S: PropertySink + ?Sized>(
        mut self,
        sink: &mut S,
    ) -> Result<LoadSummary, SyntaxError> {
        let lines = match self.last {
            None => 0,
            Some(NEWLINE) => self.line - 1,
            Some(_) => self.line,
        };
        match self.state {
            ScanState::LineStart | ScanState::Comment => {}
            ScanState::Escape { .. } => {
                return Err(SyntaxError::UnterminatedContinuation { line: self.line });
            }
            ScanState::Member {
                phase: Phase::Key, ..
            } => return Err(SyntaxError::MissingSeparator { line: self.line }),
            ScanState::Member {
                phase: Phase::Value,
                ..
            } => self.commit(sink)?,
        }
        Ok(LoadSummary {
            entries: self.entries,
            lines,
        })
    }

    fn step<S: PropertySink + ?Sized>(
        &mut self,
        b: u8,
        sink: &mut S,
    ) -> Result<(), SyntaxError> {
        match self.state {
            ScanState::Comment => {
                if b == NEWLINE {
                    self.line += 1;
                    self.state = ScanState::LineStart;
                }
            }
            ScanState::Escape { phase, cr } => self.step_escape(phase, cr, b)?,
            ScanState::LineStart => match b {
                ESCAPE => {
                    self.state = ScanState::Escape {
                        phase: Phase::Key,
                        cr: false,
                    }
                }
                NEWLINE => self.line += 1,
                SEPARATOR => return Err(SyntaxError::EmptyKey { line: self.line }),
                COMMENT => self.state = ScanState::Comment,
                b if is_blank(b) => {}
                b => {
                    self.push(b)?;
                    self.state = ScanState::Member {
                        phase: Phase::Key,
                        skipping: false,
                    };
                }
            },
            ScanState::Member { phase, skipping } => match b {
                ESCAPE => self.state = ScanState::Escape { phase, cr: false },
                NEWLINE => match phase {
                    Phase::Key => return Err(SyntaxError::MissingSeparator { line: self.line }),
                    Phase::Value => {
                        self.commit(sink)?;
                        self.line += 1;
                        self.state = ScanState::LineStart;
                    }
                },
                SEPARATOR if phase == Phase::Key => {
                    if self.buf.is_empty() {
                        return Err(SyntaxError::EmptyKey { line: self.line });
                    }
                    self.key = self.buf.take_trimmed();
                    self.state = ScanState::Member {
                        phase: Phase::Value,
                        skipping: true,
                    };
                }
                b if skipping && is_blank(b) => {}
                b => {
                    self.push(b)?;
                    self.state = ScanState::Member {
                        phase,
                        skipping: false,
                    };
                }
            },
        }
        Ok(())
    }

    fn step_escape(
        &mut self,
        phase: Phase,
        cr: bool,
        b: u8,
    ) -> Result<(), SyntaxError> {
        match (cr, b) {
            // Line continuation: the logical line goes on, the next physical
            // line's indentation is dropped.
            (_, NEWLINE) => {
                self.line += 1;
                self.state = ScanState::Member {
                    phase,
                    skipping: true,
                };
            }
            (false, b'\r') => self.state = ScanState::Escape { phase, cr: true },
            (true, _) => {
                return Err(SyntaxError::IllegalEscape {
                    line: self.line,
                    found: b'\r',
                })
            }
            (false, b) => {
                let decoded = self
                    .policy
                    .decode(b)
                    .ok_or(SyntaxError::IllegalEscape {
                        line: self.line,
                        found: b,
                    })?;
                self.check_limit()?;
                self.buf.push_escaped(decoded);
                self.state = ScanState::Member {
                    phase,
                    skipping: false,
                };
            }
        }
        Ok(())
    }

    fn push(
        &mut self,
        b: u8,
    ) -> Result<(), SyntaxError> {
        self.check_limit()?;
        self.buf.push(b);
        Ok(())
    }

    fn check_limit(&self) -> Result<(), SyntaxError> {
        match self.limit {
            Some(limit) if self.buf.len() >= limit => Err(SyntaxError::MemberTooLong {
                line: self.line,
                limit,
            }),
            _ => Ok(()),
        }
    }

    fn commit<S: PropertySink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<(), SyntaxError> {
        let line = self.line;
        let key = String::from_utf8(std::mem::take(&mut self.key))
            .map_err(|_| SyntaxError::InvalidUtf8 { line })?;
        let value = String::from_utf8(self.buf.take_trimmed())
            .map_err(|_| SyntaxError::InvalidUtf8 { line })?;
        trace!(line, key = %key, "property committed");
        sink.put(key, value);
        self.entries += 1;
        Ok(())
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(EscapePolicy::default())
    }
}
