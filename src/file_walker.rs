use std::error::Error;
use std::ffi::OsStr;
use std::path::Path;
use walkdir::WalkDir;

/// A struct to configure source-file discovery options
pub struct SourceWalker {
    extensions: Vec<String>,
    max_depth: Option<usize>,
}

impl SourceWalker {
    /// Create a new SourceWalker with default settings
    pub fn new() -> Self {
        SourceWalker {
            extensions: vec!["h".to_string(), "cpp".to_string()],
            max_depth: None, // No depth limit by default
        }
    }

    /// Set the file extensions to filter by
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Set the maximum directory depth to traverse
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Walk the directory and collect relative paths of files with the
    /// specified extensions.
    ///
    /// Paths are returned relative to `root_dir`, joined with `/` regardless
    /// of platform. Order is filesystem traversal order; callers that need a
    /// stable order must sort. A missing or unreadable root is an error, not
    /// an empty result.
    pub fn find_files<P: AsRef<Path>>(&self, root_dir: P) -> Result<Vec<String>, Box<dyn Error>> {
        let root_dir = root_dir.as_ref();
        let mut files = Vec::new();
        let mut walker = WalkDir::new(root_dir);

        // Apply max depth if specified
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            // Skip directories
            if path.is_dir() {
                continue;
            }

            // Check if the file has one of the specified extensions
            if let Some(ext) = path.extension().and_then(OsStr::to_str) {
                if self.extensions.iter().any(|e| e == ext) {
                    files.push(relative_slash_path(root_dir, path));
                }
            }
        }

        Ok(files)
    }
}

impl Default for SourceWalker {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `path` relative to `root`, joined with forward slashes.
fn relative_slash_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
