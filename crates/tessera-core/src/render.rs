//! Helpers shared by element renderers.
//!
//! Elements open on their own line, indented with one tab per level, and
//! write attributes as ` name='value'`.

use std::borrow::Cow;

/// Indentation unit, one per nesting level.
pub const INDENT: char = '\t';

/// Appends `level` indentation units.
pub fn push_indent(output: &mut String, level: usize) {
	output.extend(std::iter::repeat_n(INDENT, level));
}

/// Appends a newline followed by `level` indentation units.
pub fn push_line(output: &mut String, level: usize) {
	output.push('\n');
	push_indent(output, level);
}

/// Appends `\n<indent><tag`, leaving the tag open for attributes.
pub fn open_tag(output: &mut String, level: usize, tag: &str) {
	push_line(output, level);
	output.push('<');
	output.push_str(tag);
}

/// Appends `\n<indent></tag>`.
pub fn close_tag(output: &mut String, level: usize, tag: &str) {
	push_line(output, level);
	output.push_str("</");
	output.push_str(tag);
	output.push('>');
}

/// Appends ` name='value'` unless the value is empty.
pub fn push_attr(output: &mut String, name: &str, value: &str) {
	if value.is_empty() {
		return;
	}
	output.push(' ');
	output.push_str(name);
	output.push_str("='");
	output.push_str(value);
	output.push('\'');
}

/// Appends ` name="value"` unless the value is empty.
pub fn push_attr_double(output: &mut String, name: &str, value: &str) {
	if value.is_empty() {
		return;
	}
	output.push(' ');
	output.push_str(name);
	output.push_str("=\"");
	output.push_str(value);
	output.push('"');
}

/// Appends ` name='value'` when the value is present and non-empty.
pub fn push_opt_attr(output: &mut String, name: &str, value: Option<&str>) {
	if let Some(value) = value {
		push_attr(output, name, value);
	}
}

/// Appends ` name='n'` when the number is present.
pub fn push_num_attr<N: std::fmt::Display>(output: &mut String, name: &str, value: Option<N>) {
	if let Some(value) = value {
		push_attr(output, name, &value.to_string());
	}
}

/// Appends ` name='name'` for a boolean attribute that is on.
pub fn push_flag(output: &mut String, name: &str, on: bool) {
	if on {
		push_attr(output, name, name);
	}
}

/// Escapes HTML special characters in a string.
///
/// This function replaces the following characters:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#x27;`
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}
