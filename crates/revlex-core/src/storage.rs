//! File I/O helpers shared by the pipeline stages.
//!
//! All artifacts are JSON; paths ending in `.gz` are transparently
//! gzip-compressed on write and decompressed on read.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

use camino::Utf8Path;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{BuildError, BuildResult};

fn is_gz(path: &Utf8Path) -> bool {
    path.extension() == Some("gz")
}

/// Open `path` for buffered line-oriented reading, decompressing `.gz`.
pub fn open_lines(path: &Utf8Path) -> BuildResult<Box<dyn BufRead>> {
    let file = File::open(path.as_std_path()).map_err(|source| BuildError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    if is_gz(path) {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read an entire JSON artifact, decompressing `.gz`.
pub fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> BuildResult<T> {
    let file = File::open(path.as_std_path()).map_err(|source| BuildError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader: Box<dyn Read> = if is_gz(path) {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|source| BuildError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_slice(&buf).map_err(|source| BuildError::ParseArtifact {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a JSON artifact compactly, compressing when `path` ends in `.gz`.
pub fn write_json<T: Serialize>(path: &Utf8Path, value: &T) -> BuildResult<()> {
    let file = File::create(path.as_std_path()).map_err(|source| BuildError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let map_io = |source: std::io::Error| BuildError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    let map_json = |e: serde_json::Error| BuildError::WriteOutput {
        path: path.to_path_buf(),
        source: e.into(),
    };
    if is_gz(path) {
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        serde_json::to_writer(&mut encoder, value).map_err(map_json)?;
        // finish() writes the gzip trailer; Drop would swallow its error
        let mut inner = encoder.finish().map_err(map_io)?;
        inner.flush().map_err(map_io)
    } else {
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, value).map_err(map_json)?;
        writer.flush().map_err(map_io)
    }
}

/// Create a plain text writer for line-oriented output.
pub fn create_writer(path: &Utf8Path) -> BuildResult<BufWriter<File>> {
    let file = File::create(path.as_std_path()).map_err(|source| BuildError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}
