//! Row sources feeding the aggregator.

use super::error::TwLogError;
use super::row::RawRow;
use csv::{Reader, ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Anything that yields raw rows one at a time.
pub trait RowSource {
    fn rows(&mut self) -> Box<dyn Iterator<Item = Result<RawRow, TwLogError>> + '_>;
}

/// CSV export with a header line.
pub struct CsvSource<R: Read> {
    origin: PathBuf,
    reader: Reader<R>,
}

impl CsvSource<File> {
    pub fn from_path(path: &Path) -> Result<Self, TwLogError> {
        let reader = Self::builder().from_path(path).map_err(|source| TwLogError::Source {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            origin: path.to_path_buf(),
            reader,
        })
    }
}

impl<R: Read> CsvSource<R> {
    /// Reads CSV from any reader; `origin` only names it in errors.
    pub fn from_reader(reader: R, origin: impl Into<PathBuf>) -> Self {
        Self {
            origin: origin.into(),
            reader: Self::builder().from_reader(reader),
        }
    }

    fn builder() -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder.has_headers(true).trim(Trim::Headers).flexible(false);
        builder
    }
}

impl<R: Read> RowSource for CsvSource<R> {
    fn rows(&mut self) -> Box<dyn Iterator<Item = Result<RawRow, TwLogError>> + '_> {
        let origin = &self.origin;
        Box::new(self.reader.deserialize::<RawRow>().map(move |row| {
            row.map_err(|source| TwLogError::Source {
                path: origin.clone(),
                source,
            })
        }))
    }
}
