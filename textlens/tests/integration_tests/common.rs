// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub const SAMPLE: &str = "Hello world. How are you?";

/// Eight distinct letters with strictly decreasing counts: a > b > ... > h.
pub const EIGHT_LETTERS: &str = "aaaaaaaabbbbbbbccccccdddddeeeefffggh";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_config_file(dir: &Path, lines: &[&str]) -> Result<()> {
    let content = lines.join("\n");
    create_test_file(dir, textlens::CONFIG_FILE_NAME, &content)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(
        temp_dir.path(),
        "essay.md",
        "# Essay\nThis is the opening line. It has two sentences!",
    )?;

    create_test_file(temp_dir.path(), "short.txt", "Tiny note")?;

    create_test_file(
        temp_dir.path(),
        "drafts/idea.md",
        "An idea worth writing down, maybe later?",
    )?;

    create_test_file(temp_dir.path(), ".git/HEAD", "ref: refs/heads/main")?;

    create_test_file(temp_dir.path(), "build/output.log", "lots of log words here")?;

    Ok(temp_dir)
}
