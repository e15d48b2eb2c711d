//! Closed value enumerations shared by elements and documents.
//!
//! Every enumeration maps its variants to a fixed markup string through
//! `as_str()`, implements `Display`, and parses back with `FromStr`. Parsing an
//! unknown string fails with [`MarkupError::InvalidEnumValue`](crate::MarkupError).

/// Declares a closed enumeration of markup strings.
///
/// Generates the enum plus `ALL`, `as_str()`, `Display` and `FromStr`.
///
/// # Example
///
/// ```
/// tessera_core::markup_enum! {
///     /// Text alignment
///     pub enum Align: "alignment" {
///         /// Left aligned
///         Left => "left",
///         /// Right aligned
///         Right => "right",
///     }
/// }
///
/// assert_eq!(Align::Left.as_str(), "left");
/// assert_eq!("right".parse::<Align>().unwrap(), Align::Right);
/// assert!("center".parse::<Align>().is_err());
/// ```
#[macro_export]
macro_rules! markup_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident : $kind:literal {
			$(
				$(#[$vmeta:meta])*
				$variant:ident => $value:literal
			),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		$vis enum $name {
			$(
				$(#[$vmeta])*
				$variant,
			)+
		}

		impl $name {
			/// All variants in declaration order.
			pub const ALL: &'static [$name] = &[$($name::$variant),+];

			/// Returns the markup string for this value.
			pub fn as_str(&self) -> &'static str {
				match self {
					$(Self::$variant => $value,)+
				}
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = $crate::MarkupError;

			fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
				match s {
					$($value => Ok(Self::$variant),)+
					_ => Err($crate::MarkupError::invalid_value($kind, s)),
				}
			}
		}
	};
}

markup_enum! {
	/// Browsing context for links, forms and `<base>`
	pub enum LinkTarget: "link target" {
		/// Open in a new tab or window
		NewPage => "_blank",
		/// Open in the same frame
		SamePage => "_self",
		/// Open in the parent frame
		ParentPage => "_parent",
		/// Open in the full body of the window
		Top => "_top",
	}
}

markup_enum! {
	/// Document character encodings
	pub enum Charset: "charset" {
		/// UTF-8
		Utf8 => "UTF-8",
		/// UTF-16
		Utf16 => "UTF-16",
		/// Windows-1252
		Windows1252 => "Windows-1252",
		/// ISO-8859
		Iso8859 => "ISO-8859",
	}
}

markup_enum! {
	/// Text direction (`dir` attribute)
	pub enum Direction: "direction" {
		/// Left to right
		Ltr => "ltr",
		/// Right to left
		Rtl => "rtl",
		/// Let the user agent decide
		Auto => "auto",
	}
}

markup_enum! {
	/// Values for the `translate` attribute
	pub enum Translate: "translate" {
		/// Translate the element's content
		Yes => "yes",
		/// Leave the content untranslated
		No => "no",
	}
}

impl Default for Translate {
	fn default() -> Self {
		Self::Yes
	}
}
