//! Page shell wrapping every documentation page.
//!
//! The shell owns the process-wide pieces a page needs but never configures
//! itself: global stylesheets, syntax highlighting grammars and the analytics
//! client. Each is installed once, normally through [`App::bootstrap`] from the
//! program entry point.
//!
//! # Example
//!
//! ```ignore
//! use sidebar_config::Config;
//! use sidebar_shell::{App, Page, PageProps};
//!
//! let config = Config::load(None, None)?;
//! let app = App::bootstrap(&config.site)?;
//! let html = app.render_document(&page, &PageProps::default());
//! ```

pub mod analytics;
mod error;
pub mod highlighter;
mod page;
pub mod styles;

pub use analytics::AnalyticsClient;
pub use error::ShellError;
pub use highlighter::{Grammar, Registry};
pub use page::{App, Layout, Page, PageProps};
pub use styles::Stylesheets;
