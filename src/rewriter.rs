use std::error::Error;
use std::fs;
use std::path::Path;

/// The include form that triggers the fixed jsoncpp replacement, regardless of
/// how the original line spelled the path.
const SENTINEL_FILENAME: &str = "jsonparser.h";
const SENTINEL_REPLACEMENT: &str = "#include \"json/json.h\"";

/// Angle-bracket includes of the vendored library itself.
const LIBRARY_PREFIX: &str = "#include <jsonrpccpp/";

const INCLUDE_MARKER: &str = "#include ";
const QUOTED_MARKER: &str = "#include \"";

/// A struct to rewrite `#include` directives so they resolve under a
/// flattened namespace folder.
pub struct IncludeRewriter {
    namespace: String,
}

impl IncludeRewriter {
    /// Create a new IncludeRewriter with the given namespace folder token
    /// (the folder prefix prepended to every rewritten include path).
    pub fn new<S: Into<String>>(namespace: S) -> Self {
        IncludeRewriter {
            namespace: namespace.into(),
        }
    }

    /// Rewrite one line, or return `None` if it should pass through verbatim.
    ///
    /// `file_dir` is the directory of the current input file, relative to the
    /// source root (`""` for files at the root). Rules apply in priority
    /// order, first match wins, at most one rewrite per line:
    /// 1. an include line naming the sentinel parser header becomes the fixed
    ///    canonical include;
    /// 2. a quoted include is resolved against `file_dir`, normalized, and
    ///    flattened;
    /// 3. an angle-bracket include of the library namespace is stripped of
    ///    its prefix and flattened (no resolution);
    /// 4. anything else passes through.
    ///
    /// Rewritten lines carry a trailing newline; a quoted or bracketed form
    /// with no closing delimiter is malformed and passes through.
    pub fn rewrite_line(&self, line: &str, file_dir: &str) -> Option<String> {
        if line.starts_with(INCLUDE_MARKER) && line.contains(SENTINEL_FILENAME) {
            return Some(format!("{}\n", SENTINEL_REPLACEMENT));
        }

        if let Some(rest) = line.strip_prefix(QUOTED_MARKER) {
            let include = &rest[..rest.find('"')?];
            let resolved = if file_dir.is_empty() {
                normalize_path(include)
            } else {
                normalize_path(&format!("{}/{}", file_dir, include))
            };
            return Some(self.flattened_include(&resolved));
        }

        if let Some(rest) = line.strip_prefix(LIBRARY_PREFIX) {
            let include = &rest[..rest.find('>')?];
            return Some(self.flattened_include(include));
        }

        None
    }

    /// Rewrite one file from the source tree into `out_dir`, returning the
    /// flattened filename actually written.
    ///
    /// Input bytes are decoded as UTF-8 with lossy replacement so a stray
    /// non-UTF-8 byte degrades that character rather than failing the file;
    /// output is plain UTF-8. Untouched lines are copied through verbatim,
    /// terminators included.
    pub fn rewrite_file(
        &self,
        source_root: &Path,
        rel_path: &str,
        out_dir: &Path,
    ) -> Result<String, Box<dyn Error>> {
        let file_dir = parent_dir(rel_path);
        let out_filename = flatten_path(rel_path);

        let bytes = fs::read(source_root.join(rel_path))?;
        let content = String::from_utf8_lossy(&bytes);

        let mut output = String::with_capacity(content.len());
        for line in content.split_inclusive('\n') {
            match self.rewrite_line(line, file_dir) {
                Some(rewritten) => output.push_str(&rewritten),
                None => output.push_str(line),
            }
        }

        fs::write(out_dir.join(&out_filename), output)?;
        Ok(out_filename)
    }

    fn flattened_include(&self, path: &str) -> String {
        format!("#include \"{}/{}\"\n", self.namespace, flatten_path(path))
    }
}

/// Replace every path separator with an underscore, producing a single-level
/// filename from a nested relative path.
pub fn flatten_path(path: &str) -> String {
    path.replace('/', "_")
}

/// Lexically normalize a forward-slash relative path: drop `.` and empty
/// segments, let `..` consume the preceding segment, keep leading `..`s.
pub fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(&"..") | None) {
                    segments.push("..");
                } else {
                    segments.pop();
                }
            }
            other => segments.push(other),
        }
    }
    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}

/// The directory portion of a forward-slash relative path (`""` if none).
fn parent_dir(rel_path: &str) -> &str {
    match rel_path.rfind('/') {
        Some(idx) => &rel_path[..idx],
        None => "",
    }
}
