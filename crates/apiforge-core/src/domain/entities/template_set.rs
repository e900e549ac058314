use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Final file set ready for materialization.
///
/// This is the output of the template catalog. It contains no business
/// logic, only data: relative path → file content, ordered by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSet {
    files: BTreeMap<RelativePath, String>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, rejecting duplicate paths.
    pub fn add_file(
        &mut self,
        path: impl Into<RelativePath>,
        content: impl Into<String>,
    ) -> Result<(), DomainError> {
        let path = path.into();
        if self.files.contains_key(&path) {
            return Err(DomainError::DuplicatePath {
                path: path.to_string(),
            });
        }
        self.files.insert(path, content.into());
        Ok(())
    }

    pub fn with_file(
        mut self,
        path: impl Into<RelativePath>,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        self.add_file(path, content)?;
        Ok(self)
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|(p, _)| p.as_str() == path)
            .map(|(_, content)| content.as_str())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn files(&self) -> impl Iterator<Item = (&RelativePath, &str)> {
        self.files.iter().map(|(p, c)| (p, c.as_str()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &RelativePath> {
        self.files.keys()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Directories that must exist before any file is written.
    pub fn provisioning_plan(&self) -> ProvisioningPlan {
        ProvisioningPlan {
            directories: self.files.keys().flat_map(|p| p.ancestors()).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::InconsistentTemplate {
                path: String::new(),
                reason: "template set is empty".into(),
            });
        }

        // A path cannot be both a file and the parent of another file.
        let plan = self.provisioning_plan();
        if let Some(clash) = self.files.keys().find(|p| plan.directories.contains(*p)) {
            return Err(DomainError::DuplicatePath {
                path: clash.to_string(),
            });
        }

        Ok(())
    }
}

impl FromIterator<(RelativePath, String)> for TemplateSet {
    /// Collect entries; a later duplicate path replaces the earlier one.
    fn from_iter<I: IntoIterator<Item = (RelativePath, String)>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

/// Distinct parent directories of a [`TemplateSet`], parents before children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisioningPlan {
    directories: BTreeSet<RelativePath>,
}

impl ProvisioningPlan {
    /// Iterate directories in creation order.
    ///
    /// Lexicographic order on `/`-separated paths puts every prefix before
    /// its extensions, so parents are always yielded first.
    pub fn directories(&self) -> impl Iterator<Item = &RelativePath> {
        self.directories.iter()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.directories.iter().any(|d| d.as_str() == path)
    }
}
