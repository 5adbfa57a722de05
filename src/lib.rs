pub mod build_fragment;
pub mod file_walker;
pub mod rewriter;
pub mod vendor;

// Re-export commonly used types for convenience
pub use build_fragment::BuildFragment;
pub use file_walker::SourceWalker;
pub use rewriter::IncludeRewriter;
pub use vendor::Vendorer;
