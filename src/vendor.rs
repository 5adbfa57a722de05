use std::collections::HashMap;
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::file_walker::SourceWalker;
use crate::rewriter::IncludeRewriter;

/// A struct to drive the vendoring pipeline: discover source files, rewrite
/// each one into the output directory, and collect the produced filenames.
pub struct Vendorer {
    walker: SourceWalker,
    rewriter: IncludeRewriter,
    out_dir: PathBuf,
    trace: bool,
}

impl Vendorer {
    /// Create a new Vendorer writing flattened files into `out_dir`
    pub fn new<P: AsRef<Path>>(walker: SourceWalker, rewriter: IncludeRewriter, out_dir: P) -> Self {
        Vendorer {
            walker,
            rewriter,
            out_dir: out_dir.as_ref().to_path_buf(),
            trace: false,
        }
    }

    /// Print each resolved input path to stdout before processing it
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Vendor every source file under `source_root`, returning the produced
    /// filenames in traversal order.
    ///
    /// Processing is strictly sequential and aborts on the first error. Two
    /// distinct relative paths that flatten to the same output filename are
    /// reported as an error rather than silently overwriting each other.
    pub fn vendor_tree<P: AsRef<Path>>(&self, source_root: P) -> Result<Vec<String>, Box<dyn Error>> {
        let source_root = source_root.as_ref();
        let rel_paths = self.walker.find_files(source_root)?;

        let mut produced = Vec::with_capacity(rel_paths.len());
        let mut seen: HashMap<String, String> = HashMap::new();

        for rel_path in rel_paths {
            if self.trace {
                println!("{}", source_root.join(&rel_path).display());
            }

            let out_filename = self.rewriter.rewrite_file(source_root, &rel_path, &self.out_dir)?;

            if let Some(previous) = seen.insert(out_filename.clone(), rel_path.clone()) {
                return Err(format!(
                    "output name collision: '{}' and '{}' both flatten to '{}'",
                    previous, rel_path, out_filename
                )
                .into());
            }
            produced.push(out_filename);
        }

        Ok(produced)
    }
}
