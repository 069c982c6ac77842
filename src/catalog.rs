//! The set of loaded snippet documents.
//!
//! Files are discovered and parsed once, up front. Document order is whatever
//! order the filesystem enumerates the directory in; it is not sorted and may
//! differ between platforms.

use crate::error::SelectionError;
use crate::parser::{self, Document, Heading};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Loaded documents, owned exclusively by the catalog.
#[derive(Debug, Clone, Default)]
pub struct FileCatalog {
    directory: PathBuf,
    documents: Vec<Document>,
}

impl FileCatalog {
    /// Load every `.md` file directly inside `dir`.
    ///
    /// A missing directory is created and yields an empty catalog. Files that
    /// cannot be read are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or listed.
    pub fn load(dir: &Path) -> io::Result<Self> {
        if !dir.exists() {
            log::info!("Creating snippets directory {}", dir.display());
            fs::create_dir_all(dir)?;
            return Ok(Self::from_documents(dir.to_path_buf(), Vec::new()));
        }

        let mut documents = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    log::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };

            if !is_markdown_file(&path) {
                continue;
            }

            match parser::parse_file(&path) {
                Ok(doc) => {
                    log::debug!("Loaded {} ({} headings)", doc.name, doc.headings.len());
                    documents.push(doc);
                }
                Err(e) => log::warn!("Failed to read {}: {}", path.display(), e),
            }
        }

        log::info!("Loaded {} documents from {}", documents.len(), dir.display());
        Ok(Self::from_documents(dir.to_path_buf(), documents))
    }

    pub fn from_documents(directory: PathBuf, documents: Vec<Document>) -> Self {
        Self {
            directory,
            documents,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// The full, unfiltered headings of the document at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::IndexOutOfRange`] if there is no such document.
    pub fn select_document(&self, index: usize) -> Result<&[Heading], SelectionError> {
        self.documents
            .get(index)
            .map(|doc| doc.headings.as_slice())
            .ok_or(SelectionError::IndexOutOfRange {
                index,
                len: self.documents.len(),
            })
    }

    /// Position of the document whose file name is exactly `name`.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.documents.iter().position(|doc| doc.name == name)
    }
}

fn is_markdown_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("md"))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_is_created() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("snippets");

        let catalog = FileCatalog::load(&dir).unwrap();
        assert!(catalog.is_empty());
        assert!(dir.is_dir());
        assert_eq!(catalog.directory(), dir.as_path());
    }

    #[test]
    fn test_loads_only_markdown_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("git.md"), "# Git\n## Undo\ngit reset --soft HEAD~1").unwrap();
        fs::write(dir.path().join("shell.MD"), "# Shell\nls -la").unwrap();
        fs::write(dir.path().join("notes.txt"), "# Not loaded").unwrap();
        fs::create_dir(dir.path().join("nested.md")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("deep.md"), "# Deep").unwrap();

        let catalog = FileCatalog::load(dir.path()).unwrap();
        let mut names: Vec<&str> = catalog.documents().iter().map(|d| d.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["git.md", "shell.MD"]);

        let git = catalog.position_by_name("git.md").unwrap();
        let headings = catalog.select_document(git).unwrap();
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[1].content, "git reset --soft HEAD~1");
    }

    #[test]
    fn test_select_document_out_of_range() {
        let catalog = FileCatalog::from_documents(
            PathBuf::from("snippets"),
            vec![parser::parse_document(PathBuf::from("a.md"), "# A")],
        );

        assert!(catalog.select_document(0).is_ok());
        assert_eq!(
            catalog.select_document(1),
            Err(SelectionError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert!(FileCatalog::default().select_document(0).is_err());
    }

    #[test]
    fn test_document_without_headings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("plain.md"), "no headings here").unwrap();

        let catalog = FileCatalog::load(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.select_document(0).unwrap().is_empty());
    }

    #[test]
    fn test_position_by_name_is_exact() {
        let catalog = FileCatalog::from_documents(
            PathBuf::from("snippets"),
            vec![
                parser::parse_document(PathBuf::from("snippets/a.md"), "# A"),
                parser::parse_document(PathBuf::from("snippets/b.md"), "# B"),
            ],
        );
        assert_eq!(catalog.position_by_name("b.md"), Some(1));
        assert_eq!(catalog.position_by_name("B.md"), None);
        assert_eq!(catalog.position_by_name(""), None);
    }
}
