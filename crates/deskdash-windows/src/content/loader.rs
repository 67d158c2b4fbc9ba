use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use deskdash_common::ContentError;

use crate::catalog::WindowCatalog;

/// Where loaded content came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentOrigin {
    File(PathBuf),
    Inline,
}

/// Renderable body for one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub body: String,
    pub origin: ContentOrigin,
}

#[async_trait]
pub trait ContentLoader: Send + Sync {
    async fn load(&self, id: &str) -> Result<Content, ContentError>;
}

/// Loads a window's `content_file` from under `base_dir`, or its inline
/// `code` when no file is configured.
pub struct CatalogContentLoader {
    catalog: Arc<WindowCatalog>,
    base_dir: PathBuf,
}

impl CatalogContentLoader {
    pub fn new(catalog: Arc<WindowCatalog>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    async fn read_under_base(&self, relative: &str) -> Result<Content, ContentError> {
        let base = tokio::fs::canonicalize(&self.base_dir).await?;
        let candidate = base.join(relative);
        let resolved = match tokio::fs::canonicalize(&candidate).await {
            Ok(path) => path,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ContentError::NotFound(candidate.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        if !resolved.starts_with(&base) {
            return Err(ContentError::OutsideBase(resolved));
        }

        let body = tokio::fs::read_to_string(&resolved).await?;
        Ok(Content {
            body,
            origin: ContentOrigin::File(resolved),
        })
    }
}

#[async_trait]
impl ContentLoader for CatalogContentLoader {
    async fn load(&self, id: &str) -> Result<Content, ContentError> {
        if let Some(relative) = self.catalog.content_file(id) {
            return self.read_under_base(relative).await;
        }

        match self.catalog.entry(id) {
            Some(entry) => Ok(Content {
                body: entry.code.clone(),
                origin: ContentOrigin::Inline,
            }),
            None => Err(ContentError::NotFound(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;

    fn entry(code: &str, content_file: Option<&str>) -> CatalogEntry {
        CatalogEntry {
            title: "T".into(),
            description: String::new(),
            tags: Vec::new(),
            code: code.into(),
            icon: String::new(),
            content_file: content_file.map(String::from),
        }
    }

    fn catalog() -> Arc<WindowCatalog> {
        let mut catalog = WindowCatalog::new();
        catalog.insert("inline", entry("<h1>hi</h1>", None));
        catalog.insert("notes", entry("", Some("notes.md")));
        catalog.insert("missing", entry("", Some("gone.md")));
        catalog.insert("escape", entry("", Some("../secret.txt")));
        Arc::new(catalog)
    }

    #[tokio::test]
    async fn inline_code_when_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = CatalogContentLoader::new(catalog(), dir.path());
        let content = loader.load("inline").await.unwrap();
        assert_eq!(content.body, "<h1>hi</h1>");
        assert_eq!(content.origin, ContentOrigin::Inline);
    }

    #[tokio::test]
    async fn reads_file_under_base() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.md"), "# Notes").unwrap();
        let loader = CatalogContentLoader::new(catalog(), dir.path());

        let content = loader.load("notes").await.unwrap();
        assert_eq!(content.body, "# Notes");
        assert!(matches!(content.origin, ContentOrigin::File(_)));
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let loader = CatalogContentLoader::new(catalog(), dir.path());
        let err = loader.load("missing").await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let loader = CatalogContentLoader::new(catalog(), dir.path());
        assert!(matches!(
            loader.load("nobody").await,
            Err(ContentError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn rejects_paths_outside_base() {
        let root = tempfile::tempdir().unwrap();
        let base = root.path().join("content");
        std::fs::create_dir(&base).unwrap();
        std::fs::write(root.path().join("secret.txt"), "nope").unwrap();

        let loader = CatalogContentLoader::new(catalog(), &base);
        let err = loader.load("escape").await.unwrap_err();
        assert!(matches!(err, ContentError::OutsideBase(_)));
    }
}
