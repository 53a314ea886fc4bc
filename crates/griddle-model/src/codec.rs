// Copyright (c) 2025 The griddle developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The on-disk PDB format.
//!
//! A PDB file is a little-endian byte stream with a variable-length header
//! followed by the raw table. With `N` the goal length and `A` the address
//! space of the p-pattern:
//!
//! | Offset   | Size | Meaning                                             |
//! |----------|------|-----------------------------------------------------|
//! | 0        | 3    | ASCII `"MAX"` or `"ADD"`                            |
//! | 3        | 1    | `N`                                                 |
//! | 4        | `N`  | goal symbols, one per byte                          |
//! | 4 + N    | `N`  | p-pattern, `'-'`/`'*'` bytes                        |
//! | 4 + 2N   | `N`  | c-pattern, same alphabet                            |
//! | 4 + 3N   | `A`  | payload: one byte per abstract state, true cost, 0 for unreachable |
//!
//! The writer removes the in-memory offset-by-one from every occupied cell;
//! the reader re-applies it so the loaded table behaves exactly like a
//! freshly generated one. The total file size must be `4 + 3N + A`.

use crate::{
    cell::CellValue,
    index::PdbIndex,
    mode::PdbMode,
    pattern::Pattern,
    pdb::{Pdb, PdbError},
    perm::{Permutation, NONPAT},
};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

/// The error raised when a PDB cannot be written.
#[derive(Debug)]
pub enum WriteError {
    /// The file could not be created or written.
    Io(std::io::Error),
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteError::Io(e) => write!(f, "It was not possible to write the PDB: {}", e),
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriteError::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for WriteError {
    fn from(e: std::io::Error) -> Self {
        WriteError::Io(e)
    }
}

/// The error raised when a PDB cannot be read back.
///
/// File-level variants report what went wrong before any byte was decoded;
/// field-level variants name the header field that could not be recovered.
#[derive(Debug)]
pub enum ReadError {
    /// The file does not exist.
    FileMissing {
        /// The path that was probed.
        path: PathBuf,
    },
    /// The path exists but is not a regular file.
    NotRegular {
        /// The offending path.
        path: PathBuf,
    },
    /// The file could not be opened.
    OpenFailed {
        /// The offending path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The file size could not be determined.
    SizeUnknown {
        /// The offending path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The mode tag could not be read or is not a known tag.
    HeaderModeUnreadable,
    /// The permutation length could not be read.
    HeaderLengthUnreadable,
    /// The goal symbols could not be read or are not a concrete goal.
    HeaderGoalUnreadable,
    /// The p-pattern could not be read or is not a valid pattern.
    HeaderPPatternUnreadable,
    /// The c-pattern could not be read or is not a valid pattern.
    HeaderCPatternUnreadable,
    /// The file size disagrees with the size implied by the header.
    SizeMismatch {
        /// The size implied by the header.
        expected: u64,
        /// The actual file size.
        found: u64,
    },
    /// The payload could not be read in full.
    PayloadUnreadable,
    /// The header fields were readable but do not form a valid PDB.
    Invalid(PdbError),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::FileMissing { path } => {
                write!(f, "File does not exist: {}", path.display())
            }
            ReadError::NotRegular { path } => {
                write!(f, "Non regular file: {}", path.display())
            }
            ReadError::OpenFailed { path, source } => {
                write!(f, "File could not be opened: {}: {}", path.display(), source)
            }
            ReadError::SizeUnknown { path, source } => write!(
                f,
                "Size could not be determined: {}: {}",
                path.display(),
                source
            ),
            ReadError::HeaderModeUnreadable => write!(f, "PDB mode could not be read"),
            ReadError::HeaderLengthUnreadable => write!(f, "Length could not be read"),
            ReadError::HeaderGoalUnreadable => write!(f, "The goal could not be read"),
            ReadError::HeaderPPatternUnreadable => write!(f, "The p-pattern could not be read"),
            ReadError::HeaderCPatternUnreadable => write!(f, "The c-pattern could not be read"),
            ReadError::SizeMismatch { expected, found } => write!(
                f,
                "Incorrect size: the header implies {} bytes but the file has {}",
                expected, found
            ),
            ReadError::PayloadUnreadable => write!(f, "g-values could not be read"),
            ReadError::Invalid(e) => write!(f, "The header does not describe a valid PDB: {}", e),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::OpenFailed { source, .. } | ReadError::SizeUnknown { source, .. } => {
                Some(source)
            }
            ReadError::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PdbError> for ReadError {
    fn from(e: PdbError) -> Self {
        ReadError::Invalid(e)
    }
}

/// Writes a PDB to `path`, truncating any previous content.
///
/// The header records the mode, goal and both patterns; the payload is the
/// table with the offset-by-one removed, so the file stores *true* costs
/// with zero marking cells that were never reached.
pub fn write<P: AsRef<Path>>(pdb: &Pdb, path: P) -> Result<(), WriteError> {
    let file = File::create(path.as_ref())?;
    let mut out = BufWriter::new(file);

    out.write_all(pdb.mode().tag())?;
    out.write_all(&[pdb.goal().len() as u8])?;
    out.write_all(pdb.goal().symbols())?;
    out.write_all(pdb.p_pattern().as_bytes())?;
    out.write_all(pdb.c_pattern().as_bytes())?;

    let payload: Vec<u8> = pdb
        .table()
        .as_bytes()
        .iter()
        .map(|&raw| CellValue::from_raw(raw).to_disk())
        .collect();
    out.write_all(&payload)?;

    out.flush()?;
    Ok(())
}

/// Reads a PDB back from `path`.
///
/// Every header field is validated as it is decoded and the total file size
/// must match the size implied by the header. The payload is re-offset on
/// the way in so `find` and value lookups behave exactly as they do on a
/// freshly generated table.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Pdb, ReadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ReadError::FileMissing {
            path: path.to_owned(),
        });
    }
    if !path.is_file() {
        return Err(ReadError::NotRegular {
            path: path.to_owned(),
        });
    }

    let file = File::open(path).map_err(|source| ReadError::OpenFailed {
        path: path.to_owned(),
        source,
    })?;
    let file_size = file
        .metadata()
        .map_err(|source| ReadError::SizeUnknown {
            path: path.to_owned(),
            source,
        })?
        .len();

    let mut input = BufReader::new(file);

    // 1. MAX or ADD
    let mut tag = [0u8; PdbMode::TAG_LEN];
    input
        .read_exact(&mut tag)
        .map_err(|_| ReadError::HeaderModeUnreadable)?;
    let mode = PdbMode::from_tag(&tag).ok_or(ReadError::HeaderModeUnreadable)?;

    // 2. the length of the permutations
    let mut length = [0u8; 1];
    input
        .read_exact(&mut length)
        .map_err(|_| ReadError::HeaderLengthUnreadable)?;
    let n = length[0] as usize;

    // 3. the explicit goal
    let mut goal_bytes = vec![0u8; n];
    input
        .read_exact(&mut goal_bytes)
        .map_err(|_| ReadError::HeaderGoalUnreadable)?;
    if goal_bytes.iter().any(|&s| s == NONPAT) {
        return Err(ReadError::HeaderGoalUnreadable);
    }
    let goal = Permutation::new(goal_bytes);

    // 4. the p-pattern the table is keyed by
    let p_pattern = read_pattern(&mut input, n).ok_or(ReadError::HeaderPPatternUnreadable)?;

    // 5. the c-pattern the generation traversed
    let c_pattern = read_pattern(&mut input, n).ok_or(ReadError::HeaderCPatternUnreadable)?;

    // 6. the payload, as many bytes as the p-pattern's address space
    let address_space = p_pattern.address_space();
    let expected = (4 + 3 * n + address_space) as u64;
    if expected != file_size {
        return Err(ReadError::SizeMismatch {
            expected,
            found: file_size,
        });
    }

    let mut pdb = Pdb::new(mode, goal, p_pattern, c_pattern)?;

    let mut payload = vec![0u8; address_space];
    input
        .read_exact(&mut payload)
        .map_err(|_| ReadError::PayloadUnreadable)?;

    let table = pdb.table_mut();
    for (i, &disk) in payload.iter().enumerate() {
        table[PdbIndex::new(i)] = CellValue::from_disk(disk).raw();
    }

    Ok(pdb)
}

fn read_pattern<R: Read>(input: &mut R, n: usize) -> Option<Pattern> {
    let mut bytes = vec![0u8; n];
    input.read_exact(&mut bytes).ok()?;
    let text = std::str::from_utf8(&bytes).ok()?;
    Pattern::parse(text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    /// A path in the system temporary directory that no other test uses.
    fn scratch_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before the epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("griddle-{}-{}-{}.pdb", label, std::process::id(), nanos))
    }

    fn sample_pdb() -> Pdb {
        let goal = Permutation::identity(4);
        let pattern: Pattern = "--**".parse().unwrap();
        let mut pdb = Pdb::new(PdbMode::Max, goal, pattern.clone(), pattern).unwrap();

        // fill every cell with a deterministic occupied value
        for i in 0..pdb.address_space() {
            pdb.table_mut()[PdbIndex::new(i)] = (i % 200) as u8 + 1;
        }
        pdb
    }

    #[test]
    fn test_round_trip() {
        let pdb = sample_pdb();
        let path = scratch_path("round-trip");

        write(&pdb, &path).unwrap();
        let loaded = read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.mode(), pdb.mode());
        assert_eq!(loaded.goal(), pdb.goal());
        assert_eq!(loaded.p_pattern(), pdb.p_pattern());
        assert_eq!(loaded.c_pattern(), pdb.c_pattern());
        assert_eq!(loaded.address_space(), pdb.address_space());
        assert_eq!(loaded.table().as_bytes(), pdb.table().as_bytes());
    }

    #[test]
    fn test_file_size() {
        let pdb = sample_pdb();
        let path = scratch_path("file-size");

        write(&pdb, &path).unwrap();
        let size = std::fs::metadata(&path).unwrap().len();
        std::fs::remove_file(&path).unwrap();

        // 3 mode + 1 length + 3 * N + address space
        assert_eq!(size, (4 + 3 * 4 + 12) as u64);
    }

    #[test]
    fn test_disk_form_removes_the_offset() {
        let goal = Permutation::identity(3);
        let pattern: Pattern = "---".parse().unwrap();
        let mut pdb = Pdb::new(PdbMode::Max, goal.clone(), pattern.clone(), pattern).unwrap();
        let index = pdb.table_mut().insert(&goal, 1).unwrap();
        for i in 0..pdb.address_space() {
            if PdbIndex::new(i) != index {
                pdb.table_mut()[PdbIndex::new(i)] = 4;
            }
        }

        let path = scratch_path("offset");
        write(&pdb, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let payload = &bytes[4 + 3 * 3..];
        assert_eq!(payload[index.get()], 0, "the goal cell stores true cost 0");
        assert!(payload.iter().enumerate().all(|(i, &b)| i == index.get() || b == 3));
    }

    #[test]
    fn test_missing_file() {
        let path = scratch_path("missing");
        assert!(matches!(read(&path), Err(ReadError::FileMissing { .. })));
    }

    #[test]
    fn test_non_regular_file() {
        let dir = std::env::temp_dir();
        assert!(matches!(read(&dir), Err(ReadError::NotRegular { .. })));
    }

    #[test]
    fn test_unknown_mode_tag() {
        let path = scratch_path("bad-mode");
        std::fs::write(&path, b"XYZ\x04").unwrap();
        let result = read(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ReadError::HeaderModeUnreadable)));
    }

    #[test]
    fn test_truncated_header() {
        let path = scratch_path("truncated");
        // mode and length, then only half of the goal
        std::fs::write(&path, b"MAX\x04\x01\x02").unwrap();
        let result = read(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ReadError::HeaderGoalUnreadable)));
    }

    #[test]
    fn test_invalid_pattern_bytes() {
        let path = scratch_path("bad-pattern");
        std::fs::write(&path, b"MAX\x02\x01\x02x-**").unwrap();
        let result = read(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ReadError::HeaderPPatternUnreadable)));
    }

    #[test]
    fn test_size_mismatch() {
        let pdb = sample_pdb();
        let path = scratch_path("size-mismatch");

        write(&pdb, &path).unwrap();
        // append a stray byte
        let mut bytes = std::fs::read(&path).unwrap();
        bytes.push(0);
        std::fs::write(&path, &bytes).unwrap();

        let result = read(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ReadError::SizeMismatch { .. })));
    }

    #[test]
    fn test_incompatible_patterns_rejected() {
        let path = scratch_path("bad-cover");
        // p preserves both positions, c abstracts them: 4 + 3*2 + A(p) where
        // A("--") over N=2 is 2
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"MAX\x02\x01\x02");
        bytes.extend_from_slice(b"--");
        bytes.extend_from_slice(b"**");
        bytes.extend_from_slice(&[0, 0]);
        std::fs::write(&path, &bytes).unwrap();

        let result = read(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ReadError::Invalid(_))));
    }
}
