//! Lookup of relative resource paths (defaults documents) against an ordered root list.

use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

#[confdrift_derive::confdrift_error]
pub enum ResourceError {
    #[error("Resource not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid resource path{}: {message}", format_context(.context))]
    InvalidPath { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Resolves relative resource paths the way a classpath lookup would: the first root that
/// contains the file wins.
#[derive(Debug, Clone, Default)]
pub struct ResourceLocator {
    roots: Vec<PathBuf>,
}

impl ResourceLocator {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self { roots: roots.into_iter().map(Into::into).collect() }
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Finds `resource` under the configured roots.
    ///
    /// # Errors
    /// Returns [`ResourceError::InvalidPath`] for empty, absolute, or parent-escaping paths.
    /// Returns [`ResourceError::NotFound`] when no root contains the file; the message lists
    /// every root searched.
    pub fn locate(&self, resource: impl AsRef<Path>) -> Result<PathBuf, ResourceError> {
        let resource = resource.as_ref();
        validate_relative(resource)?;

        for root in &self.roots {
            let candidate = root.join(resource);
            if candidate.is_file() {
                debug!(
                    resource = %resource.display(),
                    path = %candidate.display(),
                    "Resolved resource"
                );
                return Ok(candidate);
            }
        }

        let searched =
            self.roots.iter().map(|root| root.display().to_string()).collect::<Vec<_>>().join(", ");
        Err(ResourceError::NotFound {
            message: resource.display().to_string().into(),
            context: Some(format!("searched roots: [{searched}]").into()),
        })
    }
}

fn validate_relative(resource: &Path) -> Result<(), ResourceError> {
    if resource.as_os_str().is_empty() {
        return Err(ResourceError::InvalidPath {
            message: "EMPTY".into(),
            context: Some("Resource path cannot be empty".into()),
        });
    }

    let escapes = resource
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
    if escapes {
        return Err(ResourceError::InvalidPath {
            message: resource.display().to_string().into(),
            context: Some("Resource paths must stay relative to their root".into()),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_escaping_paths() {
        let locator = ResourceLocator::new(["."]);
        assert!(matches!(locator.locate(""), Err(ResourceError::InvalidPath { .. })));
        assert!(matches!(locator.locate("../secret.xml"), Err(ResourceError::InvalidPath { .. })));
        assert!(matches!(locator.locate("/etc/hosts"), Err(ResourceError::InvalidPath { .. })));
    }

    #[test]
    fn missing_resource_lists_searched_roots() {
        let locator = ResourceLocator::new(["first", "second"]);
        let err = locator.locate("absent.xml").unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("absent.xml"));
        assert!(rendered.contains("first, second"));
    }
}
