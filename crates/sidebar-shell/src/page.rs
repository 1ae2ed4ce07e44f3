//! Pages, layouts and the application wrapper.
//!
//! A [`Page`] renders its own body; an optional [`Layout`] wraps that body in
//! shared chrome (navigation, footer). Pages without a layout render as-is.
//! [`App`] adds the document head and body built from the process-wide
//! stylesheets, highlighter and analytics client.

use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

use sidebar_config::SiteConfig;

use crate::analytics::{self, AnalyticsClient};
use crate::error::ShellError;
use crate::highlighter::{self, Registry};
use crate::styles::{self, Stylesheets};

static APP: OnceLock<App<'static>> = OnceLock::new();
static BOOTSTRAP_LOCK: Mutex<()> = Mutex::new(());

/// Properties passed to a page when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageProps {
    /// Document id of the page (e.g. `"Build/Chains/near"`).
    pub doc_id: String,
    /// Page title for the document head.
    pub title: String,
    /// Rendered page content.
    pub content: String,
}

/// Wraps a rendered page body.
pub struct Layout {
    name: String,
    wrap: Box<dyn Fn(String) -> String + Send + Sync>,
}

impl Layout {
    pub fn new(
        name: impl Into<String>,
        wrap: impl Fn(String) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            wrap: Box::new(wrap),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wrap a rendered page body.
    #[must_use]
    pub fn apply(&self, page: String) -> String {
        (self.wrap)(page)
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Renderable page.
pub trait Page {
    /// Render the page body.
    fn render(&self, props: &PageProps) -> String;

    /// Layout wrapping this page. `None` renders the page unwrapped.
    fn layout(&self) -> Option<&Layout> {
        None
    }
}

/// Application wrapper applied to every page.
#[derive(Debug, Clone, Copy)]
pub struct App<'a> {
    stylesheets: &'a Stylesheets,
    highlighter: &'a Registry,
    analytics: Option<&'a AnalyticsClient>,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        stylesheets: &'a Stylesheets,
        highlighter: &'a Registry,
        analytics: Option<&'a AnalyticsClient>,
    ) -> Self {
        Self {
            stylesheets,
            highlighter,
            analytics,
        }
    }

    #[must_use]
    pub fn stylesheets(&self) -> &'a Stylesheets {
        self.stylesheets
    }

    #[must_use]
    pub fn highlighter(&self) -> &'a Registry {
        self.highlighter
    }

    #[must_use]
    pub fn analytics(&self) -> Option<&'a AnalyticsClient> {
        self.analytics
    }

    /// Render a page through its layout.
    pub fn render_page(&self, page: &dyn Page, props: &PageProps) -> String {
        let body = page.render(props);
        match page.layout() {
            Some(layout) => layout.apply(body),
            None => body,
        }
    }

    /// Render a complete HTML document for a page.
    pub fn render_document(&self, page: &dyn Page, props: &PageProps) -> String {
        let mut head = vec![
            r#"<meta charset="utf-8">"#.to_owned(),
            format!("<title>{}</title>", html_escape::encode_text(&props.title)),
        ];
        if !self.stylesheets.is_empty() {
            head.push(self.stylesheets.to_html());
        }
        if let Some(client) = self.analytics {
            head.push(client.head_script());
        }

        let languages = self.highlighter.languages().collect::<Vec<_>>().join(" ");
        let noscript = self.analytics.map(AnalyticsClient::body_noscript);

        let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str(&head.join("\n"));
        html.push_str("\n</head>\n");
        html.push_str(&format!(r#"<body data-highlight="{languages}">"#));
        html.push('\n');
        if let Some(noscript) = noscript {
            html.push_str(&noscript);
            html.push('\n');
        }
        html.push_str(&self.render_page(page, props));
        html.push_str("\n</body>\n</html>\n");
        html
    }
}

impl App<'static> {
    /// Run the process-wide initializers and return the application.
    ///
    /// Installs stylesheets and highlighter grammars, and initializes
    /// analytics when `site.analytics_id` is set. Later calls return the
    /// application built by the first successful one.
    ///
    /// All of `site` is validated before any process-wide state is touched,
    /// so a failed call installs nothing and a corrected call can follow.
    /// Concurrent first calls are serialized; the later ones get the
    /// application built by the first.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] if a stylesheet path is empty, a highlight
    /// language is unknown, or the highlighter was installed elsewhere.
    pub fn bootstrap(site: &SiteConfig) -> Result<&'static Self, ShellError> {
        if let Some(app) = APP.get() {
            tracing::debug!("Application already bootstrapped");
            return Ok(app);
        }

        let _guard = BOOTSTRAP_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(app) = APP.get() {
            tracing::debug!("Application bootstrapped by another thread");
            return Ok(app);
        }

        let stylesheets = Stylesheets::from_paths(&site.stylesheets)?;
        let registry = Registry::with_languages(&site.highlight_languages)?;

        // Highlighter first: it is the only installer that can still fail
        let highlighter = highlighter::install_registry(registry)?;
        let stylesheets = styles::install_list(stylesheets);
        let analytics = site.analytics_id.as_deref().map(analytics::init);

        tracing::info!(
            stylesheets = stylesheets.len(),
            languages = highlighter.len(),
            analytics = analytics.is_some(),
            "Bootstrapped page shell"
        );
        Ok(APP.get_or_init(|| Self::new(stylesheets, highlighter, analytics)))
    }

    /// Process-wide application, if bootstrapped.
    pub fn get() -> Option<&'static Self> {
        APP.get()
    }
}
