use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "draft.md", "A short draft")?;
    create_test_file(&dir, "notes.md", "First thought here.\nThen a second one!")?;
    create_test_file(&dir, "nested/chapter.md", "Chapter one begins here")?;
    create_test_file(&dir, "todo.txt", "buy milk -- and bread, eggs")?;

    create_test_file(&dir, ".hidden.md", "Hidden file")?;

    Ok(dir)
}
