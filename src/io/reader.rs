use super::*;
use std::io::Read;

/// Reads protocol lines one byte at a time.
///
/// No lookahead is buffered here, so the underlying stream never loses
/// bytes past the newline it stopped at. Carriage returns are dropped so that
/// hand-typed input on Windows parses the same as piped input.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
}

impl<R> LineReader<R>
where
    R: Read,
{
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Next line without its terminator.
    /// End of stream before any byte is a [`Hangup::Closed`], a trailing
    /// unterminated line is returned as is.
    pub fn read_line(&mut self) -> Result<String, Hangup> {
        let mut line = Vec::new();
        let mut seen = false;
        for byte in self.inner.by_ref().bytes() {
            seen = true;
            match byte? {
                b'\n' => break,
                b'\r' => continue,
                b => line.push(b),
            }
        }
        match seen {
            false => Err(Hangup::Closed),
            true => Ok(String::from_utf8_lossy(&line).into_owned()),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines() {
        let ref mut reader = LineReader::new("42,10\nWIN\n".as_bytes());
        assert_eq!(reader.read_line().unwrap(), "42,10");
        assert_eq!(reader.read_line().unwrap(), "WIN");
        assert!(matches!(reader.read_line(), Err(Hangup::Closed)));
    }
    #[test]
    fn strips_carriage_returns() {
        let ref mut reader = LineReader::new("R\r\nP\r\n".as_bytes());
        assert_eq!(reader.read_line().unwrap(), "R");
        assert_eq!(reader.read_line().unwrap(), "P");
    }
    #[test]
    fn keeps_blank_lines() {
        let ref mut reader = LineReader::new("\n\nS\n".as_bytes());
        assert_eq!(reader.read_line().unwrap(), "");
        assert_eq!(reader.read_line().unwrap(), "");
        assert_eq!(reader.read_line().unwrap(), "S");
    }
    #[test]
    fn returns_unterminated_tail() {
        let ref mut reader = LineReader::new("ROCK".as_bytes());
        assert_eq!(reader.read_line().unwrap(), "ROCK");
        assert!(matches!(reader.read_line(), Err(Hangup::Closed)));
    }
    #[test]
    fn closed_before_first_line() {
        let ref mut reader = LineReader::new("".as_bytes());
        assert!(matches!(reader.read_line(), Err(Hangup::Closed)));
    }
    #[test]
    fn io_failure_is_hangup() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"))
            }
        }
        let ref mut reader = LineReader::new(Failing);
        assert!(matches!(reader.read_line(), Err(Hangup::Broken(_))));
    }
    #[test]
    fn leaves_rest_of_stream() {
        let mut reader = LineReader::new("a\nrest".as_bytes());
        assert_eq!(reader.read_line().unwrap(), "a");
        assert_eq!(reader.into_inner(), b"rest");
    }
}
