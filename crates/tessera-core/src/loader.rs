//! Loading element content from files and URLs.
//!
//! Elements such as text, code and images can pull their content from an
//! external resource. The [`ContentLoader`] trait abstracts the fetch so tests
//! and callers can substitute their own source.
//!
//! - [`FileLoader`] reads local paths, optionally relative to a root directory
//! - `HttpLoader` (feature `http`) fetches `http://` and `https://` URLs
//! - [`DefaultLoader`] dispatches on the location's scheme
//!
//! Every failure is reported as
//! [`MarkupError::ResourceUnavailable`](crate::MarkupError::ResourceUnavailable).

use std::path::{Path, PathBuf};

use crate::error::{MarkupError, Result};

/// Source of raw resource bytes.
pub trait ContentLoader: Send + Sync {
	/// Reads the whole resource at `location`.
	fn load_bytes(&self, location: &str) -> Result<Vec<u8>>;

	/// Reads the resource at `location` as UTF-8 text.
	fn load_text(&self, location: &str) -> Result<String> {
		let bytes = self.load_bytes(location)?;
		String::from_utf8(bytes).map_err(|e| MarkupError::unavailable(location, e))
	}
}

/// Reads resources from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FileLoader {
	root: Option<PathBuf>,
}

impl FileLoader {
	/// Creates a loader that resolves paths as given.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a loader that resolves relative paths under `root`.
	pub fn with_root(root: impl Into<PathBuf>) -> Self {
		Self {
			root: Some(root.into()),
		}
	}

	fn resolve(&self, location: &str) -> PathBuf {
		let location = location.strip_prefix("file://").unwrap_or(location);
		let path = Path::new(location);
		match &self.root {
			Some(root) if path.is_relative() => root.join(path),
			_ => path.to_path_buf(),
		}
	}
}

impl ContentLoader for FileLoader {
	fn load_bytes(&self, location: &str) -> Result<Vec<u8>> {
		let path = self.resolve(location);
		match std::fs::read(&path) {
			Ok(bytes) => {
				tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded file resource");
				Ok(bytes)
			}
			Err(e) => {
				tracing::warn!(path = %path.display(), error = %e, "failed to read file resource");
				Err(MarkupError::unavailable(location, e))
			}
		}
	}
}

/// Fetches resources over HTTP with a blocking client.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Default)]
pub struct HttpLoader {
	client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpLoader {
	/// Creates a loader with a default client.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a loader around an existing client.
	pub fn with_client(client: reqwest::blocking::Client) -> Self {
		Self { client }
	}
}

#[cfg(feature = "http")]
impl ContentLoader for HttpLoader {
	fn load_bytes(&self, location: &str) -> Result<Vec<u8>> {
		let fetched = self
			.client
			.get(location)
			.send()
			.and_then(|response| response.error_for_status())
			.and_then(|response| response.bytes());
		match fetched {
			Ok(bytes) => {
				tracing::debug!(url = location, bytes = bytes.len(), "fetched remote resource");
				Ok(bytes.to_vec())
			}
			Err(e) => {
				tracing::warn!(url = location, error = %e, "failed to fetch remote resource");
				Err(MarkupError::unavailable(location, e))
			}
		}
	}
}

/// Returns true if `location` names an `http` or `https` URL.
pub fn is_remote(location: &str) -> bool {
	location.starts_with("http://") || location.starts_with("https://")
}

/// Loader that reads local paths and, with the `http` feature, remote URLs.
#[derive(Debug, Clone, Default)]
pub struct DefaultLoader {
	files: FileLoader,
	#[cfg(feature = "http")]
	http: HttpLoader,
}

impl DefaultLoader {
	/// Creates a loader with default file and HTTP sources.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the file source.
	pub fn with_files(mut self, files: FileLoader) -> Self {
		self.files = files;
		self
	}

	#[cfg(feature = "http")]
	fn load_remote(&self, location: &str) -> Result<Vec<u8>> {
		self.http.load_bytes(location)
	}

	#[cfg(not(feature = "http"))]
	fn load_remote(&self, location: &str) -> Result<Vec<u8>> {
		tracing::warn!(url = location, "remote resource requested without the http feature");
		Err(MarkupError::unavailable(
			location,
			"remote loading requires the `http` feature",
		))
	}
}

impl ContentLoader for DefaultLoader {
	fn load_bytes(&self, location: &str) -> Result<Vec<u8>> {
		if is_remote(location) {
			return self.load_remote(location);
		}
		self.files.load_bytes(location)
	}
}
