//! Global stylesheets.
//!
//! Every page links the same stylesheets in the same order. The list is
//! registered once per process with [`install`]; later calls return the
//! list already in place.

use std::sync::OnceLock;

use crate::error::ShellError;

static STYLESHEETS: OnceLock<Stylesheets> = OnceLock::new();

/// Ordered, de-duplicated list of stylesheet paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheets {
    paths: Vec<String>,
}

impl Stylesheets {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from paths, keeping the first occurrence of each.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::EmptyStylesheet`] for a blank path.
    pub fn from_paths<I, S>(paths: I) -> Result<Self, ShellError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stylesheets = Self::new();
        for path in paths {
            stylesheets.register(path.as_ref())?;
        }
        Ok(stylesheets)
    }

    /// Append a stylesheet. Returns `false` if it was already registered.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::EmptyStylesheet`] for a blank path.
    pub fn register(&mut self, path: &str) -> Result<bool, ShellError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(ShellError::EmptyStylesheet);
        }
        if self.paths.iter().any(|p| p == path) {
            tracing::debug!(path, "Stylesheet already registered");
            return Ok(false);
        }
        self.paths.push(path.to_owned());
        Ok(true)
    }

    /// Registered paths in import order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// `<link>` tags for the document head, one per line.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.paths
            .iter()
            .map(|p| {
                format!(
                    r#"<link rel="stylesheet" href="{}">"#,
                    html_escape::encode_double_quoted_attribute(p)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Register the process-wide stylesheet list.
///
/// The first call wins. Later calls log at debug level and return the list
/// installed by the first one.
///
/// # Errors
///
/// Returns [`ShellError::EmptyStylesheet`] if the first call receives a blank
/// path.
pub fn install<I, S>(paths: I) -> Result<&'static Stylesheets, ShellError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if let Some(existing) = STYLESHEETS.get() {
        tracing::debug!("Stylesheets already installed");
        return Ok(existing);
    }
    Ok(install_list(Stylesheets::from_paths(paths)?))
}

/// Install an already validated list. First call wins.
pub(crate) fn install_list(stylesheets: Stylesheets) -> &'static Stylesheets {
    let mut installed_here = false;
    let installed = STYLESHEETS.get_or_init(|| {
        installed_here = true;
        stylesheets
    });
    if installed_here {
        tracing::debug!(count = installed.len(), "Installed global stylesheets");
    } else {
        tracing::debug!("Stylesheets already installed");
    }
    installed
}

/// Process-wide stylesheet list, if installed.
pub fn get() -> Option<&'static Stylesheets> {
    STYLESHEETS.get()
}
