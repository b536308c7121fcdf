//! Recursive documentation tree walker.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum CorpusWalkError {
    #[error("documentation root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk documentation directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// A discovered markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Absolute path to the file.
    pub absolute_path: PathBuf,
    /// Path relative to the root.
    pub relative_path: PathBuf,
}

/// Walker for discovering markdown documents.
#[derive(Debug)]
pub struct CorpusWalker {
    root: PathBuf,
    /// Folders to exclude from walking (relative to root).
    excluded_folders: Vec<PathBuf>,
}

impl CorpusWalker {
    pub fn new(root: &Path) -> Result<Self, CorpusWalkError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Create a walker that skips the given folders.
    ///
    /// Excluded folders may be relative to the root or absolute paths inside it.
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, CorpusWalkError> {
        let root = root
            .canonicalize()
            .map_err(|_| CorpusWalkError::MissingRoot(root.display().to_string()))?;

        let excluded_folders = excluded_folders
            .into_iter()
            .map(|p| {
                if p.is_absolute() {
                    let p = p.canonicalize().unwrap_or(p);
                    p.strip_prefix(&root).unwrap_or(&p).to_path_buf()
                } else {
                    p
                }
            })
            .collect();

        Ok(Self { root, excluded_folders })
    }

    /// Walk the root and return all markdown documents, sorted by relative path.
    ///
    /// A root that is itself a markdown file yields just that file.
    pub fn walk(&self) -> Result<Vec<Document>, CorpusWalkError> {
        let mut docs = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = entry
                .map_err(|e| CorpusWalkError::WalkError(self.root.display().to_string(), e))?;

            let path = entry.path();
            if !entry.file_type().is_file() || !is_markdown_file(path) {
                continue;
            }

            let relative_path = match path.strip_prefix(&self.root) {
                Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
                _ => path.file_name().map(PathBuf::from).unwrap_or_else(|| path.to_path_buf()),
            };

            docs.push(Document { absolute_path: path.to_path_buf(), relative_path });
        }

        docs.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        debug!(root = %self.root.display(), count = docs.len(), "discovered documents");
        Ok(docs)
    }

    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        // Never filter the root itself
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();

        if name.starts_with('.') {
            return true;
        }

        if matches!(name.as_ref(), "node_modules" | "target" | "__pycache__" | "venv") {
            return true;
        }

        if let Ok(relative) = entry.path().strip_prefix(&self.root) {
            return self.excluded_folders.iter().any(|excluded| relative.starts_with(excluded));
        }

        false
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("md"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        fs::write(root.join("index.md"), "# Index").unwrap();
        fs::create_dir_all(root.join("standards")).unwrap();
        fs::write(root.join("standards/naming.md"), "# Naming").unwrap();
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join(".git/HEAD.md"), "# not a doc").unwrap();
        fs::write(root.join("notes.txt"), "Not markdown").unwrap();

        dir
    }

    #[test]
    fn finds_markdown_sorted() {
        let tree = create_test_tree();
        let docs = CorpusWalker::new(tree.path()).unwrap().walk().unwrap();

        let hints: Vec<_> = docs.iter().map(|d| d.relative_path.to_str().unwrap()).collect();
        assert_eq!(hints, ["index.md", "standards/naming.md"]);
    }

    #[test]
    fn exclusions_skip_folders() {
        let tree = create_test_tree();
        fs::create_dir_all(tree.path().join("archive/old")).unwrap();
        fs::write(tree.path().join("archive/old/legacy.md"), "# Legacy").unwrap();

        let walker =
            CorpusWalker::with_exclusions(tree.path(), vec![PathBuf::from("archive")]).unwrap();
        let docs = walker.walk().unwrap();

        assert!(docs.iter().all(|d| !d.relative_path.starts_with("archive")));
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn single_file_root() {
        let tree = create_test_tree();
        let docs = CorpusWalker::new(&tree.path().join("standards/naming.md"))
            .unwrap()
            .walk()
            .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].relative_path, PathBuf::from("naming.md"));
    }

    #[test]
    fn missing_root() {
        let result = CorpusWalker::new(Path::new("/nonexistent/docs"));
        assert!(matches!(result.unwrap_err(), CorpusWalkError::MissingRoot(_)));
    }
}
