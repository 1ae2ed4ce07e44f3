//! Syntax highlighting grammars.
//!
//! Code blocks are highlighted client-side; the shell only decides which
//! grammars ship with the page. The default set is always present, extra
//! languages are added once at startup with [`install`].

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::ShellError;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Highlighting grammar for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    /// Canonical language name (e.g. `"shell-session"`).
    pub name: &'static str,
    /// Alternative code fence names resolving to this grammar.
    pub aliases: &'static [&'static str],
}

impl Grammar {
    const fn new(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { name, aliases }
    }
}

/// Grammars loaded on every page.
const DEFAULT_GRAMMARS: &[Grammar] = &[
    Grammar::new("markup", &["html", "xml", "svg"]),
    Grammar::new("javascript", &["js"]),
    Grammar::new("jsx", &[]),
    Grammar::new("typescript", &["ts", "tsx"]),
    Grammar::new("bash", &["sh", "shell"]),
    Grammar::new("json", &[]),
    Grammar::new("yaml", &["yml"]),
    Grammar::new("rust", &["rs"]),
    Grammar::new("python", &["py"]),
    Grammar::new("go", &["golang"]),
];

/// Grammars available on request.
const OPTIONAL_GRAMMARS: &[Grammar] = &[
    Grammar::new("kotlin", &["kt", "kts"]),
    Grammar::new("csharp", &["cs", "dotnet"]),
    Grammar::new("solidity", &["sol"]),
    Grammar::new("shell-session", &["sh-session", "shellsession", "console"]),
    Grammar::new("swift", &[]),
];

/// Find a known grammar by name or alias.
fn lookup(name: &str) -> Option<&'static Grammar> {
    DEFAULT_GRAMMARS
        .iter()
        .chain(OPTIONAL_GRAMMARS)
        .find(|g| g.name == name || g.aliases.contains(&name))
}

/// Language name to grammar mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    grammars: BTreeMap<&'static str, &'static Grammar>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            grammars: DEFAULT_GRAMMARS.iter().map(|g| (g.name, g)).collect(),
        }
    }
}

impl Registry {
    /// Default grammars plus `languages`.
    ///
    /// Languages may be given by name or alias. A language listed twice, or
    /// already in the default set, is registered once.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::UnknownLanguage`] for a language without a grammar.
    pub fn with_languages<I, S>(languages: I) -> Result<Self, ShellError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::default();
        for language in languages {
            let language = language.as_ref().trim();
            let grammar =
                lookup(language).ok_or_else(|| ShellError::UnknownLanguage(language.to_owned()))?;
            registry.grammars.insert(grammar.name, grammar);
        }
        Ok(registry)
    }

    /// Resolve a code fence language to its grammar.
    #[must_use]
    pub fn resolve(&self, language: &str) -> Option<&'static Grammar> {
        self.grammars.get(language).copied().or_else(|| {
            self.grammars
                .values()
                .find(|g| g.aliases.contains(&language))
                .copied()
        })
    }

    #[must_use]
    pub fn contains(&self, language: &str) -> bool {
        self.resolve(language).is_some()
    }

    /// Canonical names of all registered grammars, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.grammars.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }
}

/// Install the process-wide registry.
///
/// # Errors
///
/// Returns [`ShellError::UnknownLanguage`] for a language without a grammar,
/// and [`ShellError::AlreadyInitialized`] if a registry is already installed.
/// The installed registry is left untouched in both cases.
pub fn install<I, S>(languages: I) -> Result<&'static Registry, ShellError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if REGISTRY.get().is_some() {
        return Err(ShellError::AlreadyInitialized("highlighter"));
    }
    install_registry(Registry::with_languages(languages)?)
}

/// Install an already validated registry.
pub(crate) fn install_registry(registry: Registry) -> Result<&'static Registry, ShellError> {
    // Another thread may have won the race since any earlier check
    let mut installed_here = false;
    let installed = REGISTRY.get_or_init(|| {
        installed_here = true;
        registry
    });
    if !installed_here {
        return Err(ShellError::AlreadyInitialized("highlighter"));
    }
    tracing::debug!(languages = installed.len(), "Installed highlighter grammars");
    Ok(installed)
}

/// Process-wide registry, if installed.
pub fn get() -> Option<&'static Registry> {
    REGISTRY.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_registry() {
        let registry = Registry::default();

        assert_eq!(registry.len(), 10);
        assert!(registry.contains("rust"));
        assert!(registry.contains("js"));
        assert!(!registry.contains("kotlin"));
    }

    #[test]
    fn test_with_languages() {
        let registry =
            Registry::with_languages(["kotlin", "csharp", "solidity", "shell-session", "swift"])
                .unwrap();

        assert_eq!(registry.len(), 15);
        assert_eq!(registry.resolve("kt").map(|g| g.name), Some("kotlin"));
        assert_eq!(registry.resolve("console").map(|g| g.name), Some("shell-session"));
        assert_eq!(registry.resolve("sol").map(|g| g.name), Some("solidity"));
    }

    #[test]
    fn test_with_languages_by_alias_and_duplicates() {
        let registry = Registry::with_languages(["cs", "csharp", "rust"]).unwrap();

        assert_eq!(registry.len(), 11);
        assert!(registry.contains("dotnet"));
    }

    #[test]
    fn test_with_languages_unknown() {
        let err = Registry::with_languages(["kotlin", "brainfuck"]).unwrap_err();

        assert!(matches!(err, ShellError::UnknownLanguage(ref l) if l == "brainfuck"));
        assert_eq!(err.to_string(), "Unknown highlight language: brainfuck");
    }

    #[test]
    fn test_languages_sorted() {
        let registry = Registry::with_languages(["swift"]).unwrap();
        let languages: Vec<_> = registry.languages().collect();

        let mut sorted = languages.clone();
        sorted.sort_unstable();
        assert_eq!(languages, sorted);
        assert!(languages.contains(&"swift"));
    }

    #[test]
    fn test_resolve_unknown() {
        assert!(Registry::default().resolve("cobol").is_none());
    }
}
