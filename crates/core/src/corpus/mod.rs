//! Discovery of markdown documents under a documentation root.

mod walker;

pub use walker::{CorpusWalkError, CorpusWalker, Document};
