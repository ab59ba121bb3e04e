//! Line-oriented input from file arguments or stdin.
//!
//! Implements the classic multi-file filter convention: read the files
//! named on the command line in argument order, or standard input when
//! none are given (a file named `-` also means stdin). Lines keep their
//! original terminators so transforms can pass non-matching content
//! through byte-for-byte.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use thiserror::Error;

/// Error raised while opening or reading an input source.
#[derive(Error, Debug)]
#[error("{path}: {source}")]
pub struct InputError {
    /// The file path, or `stdin`
    pub path: String,
    /// The underlying I/O failure
    pub source: io::Error,
}

enum Source {
    Stdin,
    Path(PathBuf),
}

impl Source {
    fn label(&self) -> String {
        match self {
            Source::Stdin => "stdin".to_string(),
            Source::Path(path) => path.display().to_string(),
        }
    }

    fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            Source::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            Source::Path(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        }
    }
}

/// Iterator over the lines of the named inputs, in argument order.
///
/// Sources are opened lazily, so an unreadable file surfaces as an error
/// item only once iteration reaches it. Yielded lines include their
/// terminators; the final line of a source may have none, in which case a
/// following file's first line continues the same logical line downstream,
/// exactly as with concatenated streams.
pub struct LineReader {
    sources: std::vec::IntoIter<Source>,
    current: Option<(String, Box<dyn BufRead>)>,
}

impl LineReader {
    /// Builds a reader over `files`, falling back to stdin when the list
    /// is empty. The name `-` stands for stdin wherever it appears.
    pub fn open(files: &[PathBuf]) -> Self {
        let sources: Vec<Source> = if files.is_empty() {
            vec![Source::Stdin]
        } else {
            files
                .iter()
                .map(|path| {
                    if path.as_os_str() == "-" {
                        Source::Stdin
                    } else {
                        Source::Path(path.clone())
                    }
                })
                .collect()
        };

        Self {
            sources: sources.into_iter(),
            current: None,
        }
    }
}

impl Iterator for LineReader {
    type Item = Result<String, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (path, mut reader) = match self.current.take() {
                Some(current) => current,
                None => {
                    let source = self.sources.next()?;
                    let path = source.label();
                    match source.open() {
                        Ok(reader) => (path, reader),
                        Err(source) => return Some(Err(InputError { path, source })),
                    }
                }
            };

            let mut line = String::new();
            match reader.read_line(&mut line) {
                // End of this source; move on to the next one.
                Ok(0) => continue,
                Ok(_) => {
                    self.current = Some((path, reader));
                    return Some(Ok(line));
                }
                Err(source) => return Some(Err(InputError { path, source })),
            }
        }
    }
}
