use crate::escape::is_blank;

/// Which half of a definition is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Key,
    Value,
}

/// Scan state of the parser between two bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Nothing has been accumulated on the current logical line.
    LineStart,
    /// Discarding a comment line up to and including its newline.
    Comment,
    /// Building a member. `skipping` while leading whitespace is dropped,
    /// i.e. right after the separator or a line continuation.
    Member { phase: Phase, skipping: bool },
    /// A backslash was read. `cr` once a carriage return followed it and a
    /// newline must come next.
    Escape { phase: Phase, cr: bool },
}

/// Accumulation buffer for the key or value being built.
///
/// Bytes produced by an escape sequence are pinned: trailing trimming never
/// removes them, so `\t` at the end of a value survives the commit.
#[derive(Debug, Default)]
pub(crate) struct Member {
    bytes: Vec<u8>,
    pinned: usize,
}

impl Member {
    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn push(
        &mut self,
        b: u8,
    ) {
        self.bytes.push(b);
    }

    pub(crate) fn push_escaped(
        &mut self,
        b: u8,
    ) {
        self.bytes.push(b);
        self.pinned = self.bytes.len();
    }

    /// Takes the contents without trailing whitespace and resets the buffer.
    pub(crate) fn take_trimmed(&mut self) -> Vec<u8> {
        let mut end = self.bytes.len();
        while end > self.pinned && is_blank(self.bytes[end - 1]) {
            end -= 1;
        }
        self.bytes.truncate(end);
        self.pinned = 0;
        std::mem::take(&mut self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_trimmed_drops_raw_trailing_blanks() {
        let mut m = Member::default();
        for b in b"value \t\r" {
            m.push(*b);
        }
        assert_eq!(m.take_trimmed(), b"value");
        assert!(m.is_empty());
    }

    #[test]
    fn test_take_trimmed_keeps_escaped_blanks() {
        let mut m = Member::default();
        m.push(b'a');
        m.push_escaped(b'\t');
        m.push(b' ');
        assert_eq!(m.take_trimmed(), b"a\t");
    }

    #[test]
    fn test_pin_is_reset_between_members() {
        let mut m = Member::default();
        m.push_escaped(b'=');
        m.push(b' ');
        assert_eq!(m.take_trimmed(), b"=");

        m.push(b'x');
        m.push(b' ');
        assert_eq!(m.take_trimmed(), b"x");
        assert_eq!(m.len(), 0);
    }
}
