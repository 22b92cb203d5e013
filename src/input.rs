use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{BenchError, Result};
use crate::record::Record;

/// Reads newline-terminated lines, reusing one buffer
pub struct LineReader<R> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
        }
    }

    /// Read the next line, returning None at EOF
    ///
    /// The `\n` terminator and a preceding `\r` are stripped.
    pub fn read_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_until(b'\n', &mut self.buffer)?;

        if bytes_read == 0 {
            return Ok(None);
        }

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
        }
        if self.buffer.last() == Some(&b'\r') {
            self.buffer.pop();
        }

        Ok(Some(&self.buffer))
    }
}

/// Sequential FASTA parser
///
/// A record is a `>` header line followed by one or more sequence lines,
/// which are concatenated into the record body. Blank lines are skipped but
/// still count towards line numbers.
pub struct FastaReader<R> {
    lines: LineReader<R>,
    /// Name used in diagnostics
    origin: PathBuf,
    /// Lines read so far, including a read-ahead header
    line: usize,
    /// Header of the next record, with its line number, seen while finishing
    /// the previous one
    pending: Option<(String, usize)>,
}

impl FastaReader<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| BenchError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("opened '{}'", path.display());
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R, origin: impl Into<PathBuf>) -> Self {
        Self {
            lines: LineReader::new(reader),
            origin: origin.into(),
            line: 0,
            pending: None,
        }
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// Decode the next record into `record`, replacing its contents
    ///
    /// Returns the number of lines the record spans, or 0 at clean end of
    /// input. Malformed input is an error carrying the offending line.
    pub fn read_record(&mut self, record: &mut Record) -> Result<usize> {
        record.clear();
        let mut consumed = 0;

        let header_line = match self.pending.take() {
            Some((header, line)) => {
                record.header = header;
                consumed += 1;
                line
            }
            None => loop {
                let Some(raw) = self.lines.read_line()? else {
                    return Ok(0);
                };
                self.line += 1;
                consumed += 1;

                let text = decode(raw, self.line, &self.origin)?;
                if text.trim().is_empty() {
                    continue;
                }
                match text.strip_prefix('>') {
                    Some(header) => {
                        record.header.push_str(header.trim_end());
                        break self.line;
                    }
                    None => {
                        return Err(malformed(
                            &self.origin,
                            self.line,
                            "sequence data before first header",
                        ));
                    }
                }
            },
        };

        while let Some(raw) = self.lines.read_line()? {
            self.line += 1;
            let text = decode(raw, self.line, &self.origin)?;

            if let Some(header) = text.strip_prefix('>') {
                self.pending = Some((header.trim_end().to_string(), self.line));
                break;
            }

            consumed += 1;
            let residues = text.trim();
            if let Some(bad) = residues.chars().find(|&c| !is_residue(c)) {
                return Err(malformed(
                    &self.origin,
                    self.line,
                    format!("invalid sequence character '{bad}'"),
                ));
            }
            record.body.push_str(residues);
        }

        if record.body.is_empty() {
            return Err(malformed(
                &self.origin,
                header_line,
                format!("record '{}' has no sequence", record.header),
            ));
        }

        Ok(consumed)
    }
}

/// Letters plus the stop, gap and unknown-gap symbols
fn is_residue(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '*' | '-' | '.')
}

fn decode<'a>(raw: &'a [u8], line: usize, origin: &Path) -> Result<&'a str> {
    std::str::from_utf8(raw).map_err(|_| malformed(origin, line, "line is not valid UTF-8"))
}

fn malformed(origin: &Path, line: usize, reason: impl Into<String>) -> BenchError {
    BenchError::Malformed {
        path: origin.to_path_buf(),
        line,
        reason: reason.into(),
    }
}
