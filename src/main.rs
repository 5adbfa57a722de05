use std::path::PathBuf;
use std::process;

use clap::Parser;

use vendorpull::{BuildFragment, IncludeRewriter, SourceWalker, Vendorer};

/// Vendor third-party C/C++ sources, flattening filenames and rewriting
/// their include directives under a namespace folder.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the third-party project root
    dir: PathBuf,

    /// Subpath below the project root where the source tree lives
    #[arg(long, default_value = "src/jsonrpccpp")]
    subdir: String,

    /// Namespace folder token prepended to rewritten include paths
    #[arg(short, long, default_value = "jsonrpc")]
    namespace: String,

    /// Directory to write the flattened files into
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// File extensions to vendor (comma-separated)
    #[arg(short, long, default_value = "h,cpp")]
    extensions: String,

    /// Library target name used in the build fragment
    #[arg(long, default_value = "jsonrpc")]
    lib_name: String,

    /// Emit a cc_library build fragment to stdout instead of the per-file
    /// progress trace
    #[arg(short, long, default_value_t = false)]
    build_fragment: bool,
}

fn main() {
    let cli = Cli::parse();

    let source_root = cli.dir.join(&cli.subdir);
    let extensions: Vec<String> = cli.extensions.split(',').map(|s| s.trim().to_string()).collect();

    if !cli.output.exists() {
        if let Err(e) = std::fs::create_dir_all(&cli.output) {
            eprintln!("Error creating output directory {}: {}", cli.output.display(), e);
            process::exit(1);
        }
    }

    let walker = SourceWalker::new().with_extensions(extensions);
    let rewriter = IncludeRewriter::new(&cli.namespace);
    let vendorer = Vendorer::new(walker, rewriter, &cli.output).with_trace(!cli.build_fragment);

    let produced = match vendorer.vendor_tree(&source_root) {
        Ok(files) => files,
        Err(err) => {
            eprintln!("Error vendoring {}: {}", source_root.display(), err);
            process::exit(1);
        }
    };

    if cli.build_fragment {
        print!("{}", BuildFragment::new(&cli.lib_name, produced).render());
    }
}
