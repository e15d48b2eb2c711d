//! Declarative page configuration.
//!
//! A [`PageConfig`] describes the head of a page (title, language, encoding,
//! links, scripts) as data, typically loaded from JSON:
//!
//! ```
//! use tessera_document::{Page, PageConfig};
//!
//! let config = PageConfig::from_json(r#"{
//!     "title": "Docs",
//!     "charset": "UTF-8",
//!     "stylesheets": [{ "href": "/site.css" }],
//!     "scripts": [{ "src": "/app.js", "placement": "body" }]
//! }"#).unwrap();
//!
//! let page = Page::from_config(&config).unwrap();
//! assert!(page.render().contains("\n\t<meta charset='UTF-8'/>"));
//! ```

use serde::Deserialize;
use tessera_core::{Charset, LinkTarget, MarkupError, Result};

use crate::media::MediaQuery;
use crate::page::{Page, ScriptPlacement};

/// Page description.
///
/// Enumerated values are kept as strings and checked by
/// [`Page::from_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
	/// Document title
	pub title: String,
	/// Document language, `en` when absent
	pub lang: Option<String>,
	/// Character encoding (e.g. "UTF-8")
	pub charset: Option<String>,
	/// Add the mobile viewport meta tag
	pub mobile: bool,
	/// Add the no-cache meta tags
	pub no_cache: bool,
	/// Base URL for relative links
	pub base: Option<String>,
	/// Default link target (e.g. "_blank")
	pub base_target: Option<String>,
	/// Favicon URL
	pub icon: Option<String>,
	/// Stylesheets in link order
	pub stylesheets: Vec<StylesheetConfig>,
	/// Scripts in insertion order
	pub scripts: Vec<ScriptConfig>,
}

/// A stylesheet link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StylesheetConfig {
	/// Stylesheet URL
	pub href: String,
	/// Media the stylesheet applies to
	#[serde(default)]
	pub media: Option<MediaQuery>,
}

/// A script reference or inline command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptConfig {
	/// Script URL, or inline code for the `command` placement
	pub src: String,
	/// `head`, `body` or `command`
	#[serde(default = "default_placement")]
	pub placement: String,
	/// CORS mode for external scripts
	#[serde(default)]
	pub crossorigin: Option<String>,
}

fn default_placement() -> String {
	ScriptPlacement::Head.as_str().to_string()
}

impl PageConfig {
	/// Parses a configuration from JSON.
	pub fn from_json(json: &str) -> Result<Self> {
		serde_json::from_str(json).map_err(|e| MarkupError::InvalidConfig(e.to_string()))
	}
}

impl Page {
	/// Builds a page from a configuration.
	///
	/// Every enumerated string is validated before the page is built, so an
	/// invalid configuration produces no partial page.
	pub fn from_config(config: &PageConfig) -> Result<Self> {
		let charset = config
			.charset
			.as_deref()
			.map(str::parse::<Charset>)
			.transpose()?;
		let base_target = config
			.base_target
			.as_deref()
			.map(str::parse::<LinkTarget>)
			.transpose()?;
		let scripts = config
			.scripts
			.iter()
			.map(|script| {
				if script.src.is_empty() {
					return Err(MarkupError::InvalidConfig(
						"script source must not be empty".to_string(),
					));
				}
				Ok((script.placement.parse::<ScriptPlacement>()?, script))
			})
			.collect::<Result<Vec<_>>>()?;
		if config.stylesheets.iter().any(|sheet| sheet.href.is_empty()) {
			return Err(MarkupError::InvalidConfig(
				"stylesheet href must not be empty".to_string(),
			));
		}

		let mut page = Page::new(config.title.as_str());
		if let Some(lang) = &config.lang {
			page.set_language(lang.as_str());
		}
		if let Some(charset) = charset {
			page.set_charset(charset);
		}
		if config.mobile {
			page.setup_mobile();
		}
		if config.no_cache {
			page.set_no_cache();
		}
		if let Some(base) = &config.base {
			page.set_base(base.as_str());
		}
		if let Some(target) = base_target {
			page.set_base_target(target);
		}
		if let Some(icon) = &config.icon {
			page.set_icon(icon.as_str());
		}
		for sheet in &config.stylesheets {
			page.add_stylesheet(sheet.href.as_str(), sheet.media.clone());
		}
		for (placement, script) in scripts {
			page.add_script(placement, script.src.as_str(), script.crossorigin.clone());
		}

		tracing::debug!(
			title = %config.title,
			stylesheets = config.stylesheets.len(),
			scripts = config.scripts.len(),
			"built page from configuration"
		);
		Ok(page)
	}
}
