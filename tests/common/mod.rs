//! Common test utilities for Packline integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Settings used by most tests: three environments sharing one default
/// section through YAML merge keys.
pub const DEFAULT_SETTINGS: &str = r#"default: &default
  source_path: app/frontend
  source_entry_path: entrypoints
  public_root_path: public
  public_output_path: bundles
  cache_path: tmp/cache/packline
  extensions:
    - .ts
    - .tsx
    - .js

development:
  <<: *default
  dev_server:
    host: localhost
    port: 3035

test:
  <<: *default

production:
  <<: *default
"#;

/// A test workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a workspace with the default packline.yml already in place
    pub fn with_default_settings() -> Self {
        let workspace = Self::new();
        workspace.write_settings(DEFAULT_SETTINGS);
        workspace
    }

    /// Write packline.yml at the workspace root
    pub fn write_settings(&self, content: &str) {
        self.write_file("packline.yml", content);
    }

    /// Create an entry-point source file under the entry directory
    pub fn create_entry(&self, name: &str) -> PathBuf {
        let relative = format!("app/frontend/entrypoints/{}", name);
        self.write_file(&relative, "export {};\n");
        self.path.join(relative)
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
    }

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("test/file.txt", "hello");
        assert!(workspace.file_exists("test/file.txt"));
        assert_eq!(workspace.read_file("test/file.txt"), "hello");
    }

    #[test]
    fn test_workspace_with_default_settings() {
        let workspace = TestWorkspace::with_default_settings();
        assert!(workspace.file_exists("packline.yml"));
        assert!(workspace.read_file("packline.yml").contains("production:"));
    }

    #[test]
    fn test_workspace_create_entry() {
        let workspace = TestWorkspace::new();
        workspace.create_entry("application.ts");
        assert!(workspace.file_exists("app/frontend/entrypoints/application.ts"));
    }
}
