//! Line source for compressed dumps
//!
//! Wraps the input file in a multi-member gzip decoder so dumps that were
//! concatenated from several gzip streams decode completely.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use wdp_core::{Result, WdpError};

/// Buffered reader over a decompressed dump
pub type DumpReader = BufReader<MultiGzDecoder<File>>;

/// Open a gzip-compressed dump for line reading
pub fn open_dump(path: &Path) -> Result<DumpReader> {
    let file = File::open(path).map_err(|e| WdpError::InputOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(BufReader::with_capacity(1024 * 1024, MultiGzDecoder::new(file)))
}

/// Iterate the lines of any buffered reader
pub fn read_lines<R: BufRead>(reader: R) -> Lines<R> {
    Lines {
        reader,
        line_no: 0,
        skip_lf: false,
        done: false,
    }
}

/// Forward-only line iterator that tags read errors with the line number
///
/// Lines end at `\n`, `\r` or `\r\n` and are yielded without their
/// terminator. The first read or decoding error ends the iteration.
pub struct Lines<R> {
    reader: R,
    line_no: u64,
    /// Previous line ended with `\r`; a leading `\n` belongs to it
    skip_lf: bool,
    done: bool,
}

impl<R: BufRead> Lines<R> {
    /// Append bytes up to the next terminator; `false` means end of input
    fn read_until_eol(&mut self, line: &mut Vec<u8>) -> io::Result<bool> {
        loop {
            let (found, used) = {
                let buf = match self.reader.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if buf.is_empty() {
                    return Ok(false);
                }

                let mut start = 0;
                if self.skip_lf {
                    self.skip_lf = false;
                    if buf[0] == b'\n' {
                        start = 1;
                    }
                }

                match buf[start..].iter().position(|&b| b == b'\n' || b == b'\r') {
                    Some(i) => {
                        line.extend_from_slice(&buf[start..start + i]);
                        self.skip_lf = buf[start + i] == b'\r';
                        (true, start + i + 1)
                    }
                    None => {
                        line.extend_from_slice(&buf[start..]);
                        (false, buf.len())
                    }
                }
            };

            self.reader.consume(used);
            if found {
                return Ok(true);
            }
        }
    }

    fn fail(&mut self, source: io::Error) -> Option<Result<String>> {
        self.done = true;
        Some(Err(WdpError::InputRead {
            line: self.line_no + 1,
            source,
        }))
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut line = Vec::new();
        match self.read_until_eol(&mut line) {
            Ok(false) if line.is_empty() => {
                self.done = true;
                None
            }
            Ok(_) => match String::from_utf8(line) {
                Ok(line) => {
                    self.line_no += 1;
                    Some(Ok(line))
                }
                Err(e) => self.fail(io::Error::new(io::ErrorKind::InvalidData, e)),
            },
            Err(e) => self.fail(e),
        }
    }
}
