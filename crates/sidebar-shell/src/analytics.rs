//! Tag manager integration.

use std::sync::OnceLock;

static CLIENT: OnceLock<AnalyticsClient> = OnceLock::new();

/// Tag manager client for one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsClient {
    container_id: String,
}

impl AnalyticsClient {
    #[must_use]
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
        }
    }

    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Loader script for the document head.
    #[must_use]
    pub fn head_script(&self) -> String {
        let id = html_escape::encode_script_single_quoted_text(&self.container_id);
        format!(
            "<script>(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':\
             new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],\
             j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';j.async=true;j.src=\
             'https://www.googletagmanager.com/gtm.js?id='+i+dl;f.parentNode.insertBefore(j,f);\
             }})(window,document,'script','dataLayer','{id}');</script>"
        )
    }

    /// Fallback frame for the start of the body when scripts are disabled.
    #[must_use]
    pub fn body_noscript(&self) -> String {
        let id = html_escape::encode_double_quoted_attribute(&self.container_id);
        format!(
            "<noscript><iframe src=\"https://www.googletagmanager.com/ns.html?id={id}\" \
             height=\"0\" width=\"0\" style=\"display:none;visibility:hidden\"></iframe></noscript>"
        )
    }
}

/// Initialize the process-wide client.
///
/// Idempotent: later calls return the client created by the first one. A
/// later call with a different id is ignored with a warning.
pub fn init(container_id: &str) -> &'static AnalyticsClient {
    let mut initialized_here = false;
    let client = CLIENT.get_or_init(|| {
        initialized_here = true;
        AnalyticsClient::new(container_id)
    });
    if initialized_here {
        tracing::debug!(container_id, "Initialized analytics");
    } else if client.container_id() == container_id {
        tracing::debug!(container_id, "Analytics already initialized");
    } else {
        tracing::warn!(
            requested = container_id,
            active = client.container_id(),
            "Analytics already initialized with a different container"
        );
    }
    client
}

/// Process-wide client, if initialized.
pub fn client() -> Option<&'static AnalyticsClient> {
    CLIENT.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_script_embeds_container_id() {
        let client = AnalyticsClient::new("GTM-P8NCFXZ");

        let script = client.head_script();

        assert!(script.starts_with("<script>"));
        assert!(script.ends_with("'dataLayer','GTM-P8NCFXZ');</script>"));
        assert!(script.contains("googletagmanager.com/gtm.js"));
    }

    #[test]
    fn test_head_script_escapes_quotes() {
        let client = AnalyticsClient::new("GTM-X');alert('1");

        assert!(!client.head_script().contains("GTM-X');alert"));
    }

    #[test]
    fn test_body_noscript() {
        let client = AnalyticsClient::new("G-12AB34");

        assert_eq!(
            client.body_noscript(),
            "<noscript><iframe src=\"https://www.googletagmanager.com/ns.html?id=G-12AB34\" \
             height=\"0\" width=\"0\" style=\"display:none;visibility:hidden\"></iframe></noscript>"
        );
    }
}
