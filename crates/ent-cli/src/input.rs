//! Input side of the tool: opening the byte source and pumping it into the
//! analyzer. Case folding happens here, before the core sees any byte.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use ent_core::{Analyzer, EntReport, Mode};
use log::debug;

use crate::error::CliError;

const CHUNK_SIZE: usize = 64 * 1024;

/// Open `path`, or standard input when none is given.
///
/// Files are always read as raw bytes; there is no text-mode translation.
pub fn open(path: Option<&Path>) -> Result<Box<dyn Read>, CliError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            debug!("reading {}", path.display());
            Ok(Box::new(file))
        }
        None => {
            debug!("reading standard input");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

/// Read `reader` to the end and finalize the statistics.
///
/// With `fold`, ASCII `A`-`Z` become `a`-`z`; every other byte is untouched.
pub fn analyze_reader<R: Read>(
    mut reader: R,
    mode: Mode,
    fold: bool,
) -> Result<EntReport, CliError> {
    let mut analyzer = Analyzer::new(mode);
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CliError::Read(e)),
        };
        let chunk = &mut buf[..n];
        if fold {
            chunk.make_ascii_lowercase();
        }
        analyzer.ingest_slice(chunk);
    }
    debug!(
        "input exhausted: {} bytes, {} symbols",
        analyzer.bytes_consumed(),
        analyzer.symbols_consumed()
    );
    Ok(analyzer.finalize())
}
