//! Filesystem helpers shared by the generators.

use std::fs::File;
use std::io;
use std::path::Path;

/// Returns the byte length of an open regular file
///
/// Directories and other non-regular files are rejected with
/// [`io::ErrorKind::InvalidInput`]; some platforms let them be opened but
/// fail on the first read.
pub fn file_size(file: &File) -> io::Result<u64> {
    let metadata = file.metadata()?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        ));
    }
    Ok(metadata.len())
}

/// Returns the last component of `path`, splitting on both `/` and `\`
///
/// The bytes are returned as they appear in the path so that file names
/// which are not valid UTF-8 are still embedded exactly.
pub fn basename(path: &Path) -> &[u8] {
    basename_bytes(path.as_os_str().as_encoded_bytes())
}

/// Byte-level counterpart of [`basename`]
pub fn basename_bytes(path: &[u8]) -> &[u8] {
    match path.iter().rposition(|&b| b == b'/' || b == b'\\') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Returns the file name of `path` as a lossy string, for display and naming
pub fn display_name(path: &Path) -> String {
    String::from_utf8_lossy(basename(path)).into_owned()
}
