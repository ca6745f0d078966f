use std::{
    env,
    fs::{self, File},
    io::{Read, Write},
    path::{Path, PathBuf},
};

use eyre::{eyre, Result};

/// Convert a long path to a short path.
///
/// ```no_run
/// use stowage_common::utils::io::file::short_path;
///
/// let path = "/some/long/path/that/is/cwd/something.json";
/// let short_path = short_path(path);
/// assert_eq!(short_path, "./something.json");
/// ```
pub fn short_path(path: &str) -> String {
    match env::current_dir() {
        Ok(dir) => path.replace(&dir.into_os_string().into_string().unwrap_or(String::new()), "."),
        Err(_) => path.to_owned(),
    }
}

/// Write contents to a file on the disc, creating parent directories as needed.
///
/// ```no_run
/// use stowage_common::utils::io::file::write_file;
///
/// let path = "/tmp/storage_layout/output.json";
/// let contents = "[]";
/// let result = write_file(path, contents);
/// ```
pub fn write_file(path_str: &str, contents: &str) -> Result<()> {
    let path = Path::new(path_str);

    // Create the directory if it doesn't exist
    fs::create_dir_all(path.parent().ok_or_else(|| eyre!("unable to create directory"))?)?;

    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;

    Ok(())
}

/// Read contents from a file on the disc
///
/// ```no_run
/// use stowage_common::utils::io::file::read_file;
///
/// let path = "/tmp/storage_layout/output.json";
/// let contents = read_file(path);
/// ```
pub fn read_file(path: &str) -> Result<String> {
    let path = Path::new(path);
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Delete a file or directory from the disc. Returns `true` if the path no longer exists.
///
/// ```no_run
/// use stowage_common::utils::io::file::delete_path;
///
/// let path = "/tmp/storage_layout";
/// let result = delete_path(path);
/// ```
pub fn delete_path(path: &str) -> bool {
    let path = Path::new(path);
    let removed = if path.is_dir() {
        fs::remove_dir_all(path)
    } else if path.exists() {
        fs::remove_file(path)
    } else {
        Ok(())
    };

    removed.is_ok() && !path.exists()
}

/// List the files directly inside `dir` with the given extension, sorted by path.
///
/// Sorting keeps discovery order stable across platforms, since `read_dir` makes no ordering
/// guarantee.
pub fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = fs::read_dir(dir)
        .map_err(|e| eyre!("failed to read directory {}: {e}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some(extension)
        })
        .collect::<Vec<_>>();
    files.sort();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_successful() {
        let dir = tempfile::tempdir().expect("unable to create tempdir");
        let path = dir.path().join("nested/output.json");
        let result = write_file(path.to_str().expect("utf8 path"), "[]");
        assert!(result.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_read_file_successful() {
        let dir = tempfile::tempdir().expect("unable to create tempdir");
        let path = dir.path().join("output.json");
        let path = path.to_str().expect("utf8 path");
        write_file(path, "Hello, World!").expect("unable to write file");

        let result = read_file(path).expect("unable to read file");
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_read_file_failure() {
        let path = "/nonexistent/test2.txt";
        let result = read_file(path);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_path_successful() {
        let dir = tempfile::tempdir().expect("unable to create tempdir");
        let path = dir.path().join("to_delete");
        fs::create_dir(&path).expect("unable to create directory");
        write_file(path.join("file.txt").to_str().expect("utf8 path"), "x")
            .expect("unable to write file");

        assert!(delete_path(path.to_str().expect("utf8 path")));
        assert!(!path.exists());
    }

    #[test]
    fn test_delete_path_missing() {
        let path = "/nonexistent/test_dir2";
        let result = delete_path(path);
        assert!(result);
    }

    #[test]
    fn test_list_files_with_extension_sorted() {
        let dir = tempfile::tempdir().expect("unable to create tempdir");
        for name in ["b.json", "a.json", "c.txt"] {
            write_file(dir.path().join(name).to_str().expect("utf8 path"), "{}")
                .expect("unable to write file");
        }

        let files = list_files_with_extension(dir.path(), "json").expect("unable to list files");
        let names = files
            .iter()
            .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }
}
