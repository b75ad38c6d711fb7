use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::Error;

/// Loads the complete contents of `path`.
///
/// Fails with [`Error::FileNotFound`] when `path` is not a regular file and
/// with [`Error::EmptyInput`] when the file holds no bytes.
pub fn load_file(path: &Path) -> Result<Vec<u8>, Error> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
    let capacity = file
        .metadata()
        .map(|meta| meta.len() as usize)
        .unwrap_or(0);
    let mut data = Vec::with_capacity(capacity);
    file.read_to_end(&mut data).map_err(|e| Error::io(path, e))?;

    if data.is_empty() {
        return Err(Error::EmptyInput(path.to_path_buf()));
    }

    debug!(path = %path.display(), len = data.len(), "loaded input");
    Ok(data)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use assert_matches::assert_matches;

    use super::load_file;
    use crate::Error;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("create-buffer-reader-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_file() {
        let dir = scratch_dir("load");
        let path = dir.join("roots.pem");
        let bytes: Vec<u8> = (0..=255).collect();
        fs::write(&path, &bytes).unwrap();

        assert_matches!(load_file(&path), Ok(data) => assert_eq!(data, bytes));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let dir = scratch_dir("missing");
        let path = dir.join("nope.pem");

        assert_matches!(load_file(&path), Err(Error::FileNotFound(p)) => assert_eq!(p, path));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_directory() {
        let dir = scratch_dir("dir");

        assert_matches!(load_file(&dir), Err(Error::FileNotFound(_)));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_empty_file() {
        let dir = scratch_dir("empty");
        let path = dir.join("empty.pem");
        fs::write(&path, b"").unwrap();

        assert_matches!(load_file(&path), Err(Error::EmptyInput(p)) => assert_eq!(p, path));
        fs::remove_dir_all(&dir).unwrap();
    }
}
