use log::debug;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions treated as message files.
pub const MESSAGE_EXTENSIONS: [&str; 2] = ["md", "txt"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid messages directory: {0}")]
    InvalidMessagesDir(String),
}

/// Read a message file and return its content
pub fn read_message(relative_path: &RelativePath, messages_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(messages_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    Ok(fs::read_to_string(&absolute_path)?)
}

/// Scan for message files in the messages directory.
///
/// Paths are returned relative to `messages_root`, sorted.
pub fn scan_message_files(messages_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_messages_dir(messages_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(messages_root, &mut files)?;
    files.sort();
    debug!(
        "found {} message files under {}",
        files.len(),
        messages_root.display()
    );

    files
        .into_iter()
        .map(|path| {
            let relative = path.strip_prefix(messages_root).unwrap_or(&path);
            RelativePathBuf::from_path(relative).map_err(|e| {
                IoError::InvalidMessagesDir(format!("{}: {e}", path.display()))
            })
        })
        .collect()
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && MESSAGE_EXTENSIONS.iter().any(|m| ext == *m)
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_messages_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidMessagesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_file(dir: &TempDir, name: &str, content: &str) {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_scan_finds_md_and_txt() {
        let dir = TempDir::new().unwrap();
        create_test_file(&dir, "fox.md", "**Red Fox**");
        create_test_file(&dir, "owl.txt", "- **Diet:** mice");
        create_test_file(&dir, "image.png", "fake image data");

        let files = scan_message_files(dir.path()).unwrap();

        assert_eq!(
            files,
            vec![
                RelativePathBuf::from("fox.md"),
                RelativePathBuf::from("owl.txt")
            ]
        );
    }

    #[test]
    fn test_scan_nested_directories() {
        let dir = TempDir::new().unwrap();
        create_test_file(&dir, "root.md", "root");
        create_test_file(&dir, "birds/heron.md", "nested");

        let files = scan_message_files(dir.path()).unwrap();

        assert_eq!(
            files,
            vec![
                RelativePathBuf::from("birds/heron.md"),
                RelativePathBuf::from("root.md")
            ]
        );
    }

    #[test]
    fn test_scan_invalid_directory() {
        let result = scan_message_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidMessagesDir(_))));
    }

    #[test]
    fn test_validate_file_is_not_a_directory() {
        let dir = TempDir::new().unwrap();
        create_test_file(&dir, "fox.md", "x");
        let result = validate_messages_dir(&dir.path().join("fox.md"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a directory"));
    }

    #[test]
    fn test_read_message_success() {
        let dir = TempDir::new().unwrap();
        create_test_file(&dir, "fox.md", "**Red Fox**\n\n- **Diet:** voles");

        let content = read_message(RelativePath::new("fox.md"), dir.path()).unwrap();
        assert_eq!(content, "**Red Fox**\n\n- **Diet:** voles");
    }

    #[test]
    fn test_read_message_not_found() {
        let dir = TempDir::new().unwrap();
        let result = read_message(RelativePath::new("missing.md"), dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
