//! Multi-line text input.

use tessera_core::render::{open_tag, push_flag, push_num_attr, push_opt_attr};
use tessera_core::{AttributeSet, Render, markup_enum};

use crate::element::impl_attributes;

markup_enum! {
	/// How submitted text is wrapped
	pub enum WrapMode: "wrap mode" {
		/// Line breaks are not submitted
		Soft => "soft",
		/// Visual line breaks are submitted
		Hard => "hard",
	}
}

/// `<textarea>`
///
/// The value is written on its own line right after the opening tag.
#[derive(Debug, Clone, Default)]
pub struct Textarea {
	value: Option<String>,
	form: Option<String>,
	readonly: bool,
	disabled: bool,
	minlength: Option<u32>,
	maxlength: Option<u32>,
	rows: Option<u32>,
	cols: Option<u32>,
	required: bool,
	autofocus: bool,
	placeholder: Option<String>,
	wrap: Option<WrapMode>,
	attrs: AttributeSet,
}

impl Textarea {
	/// Creates an empty text area.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the initial text.
	pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
		self.value = Some(value.into());
		self
	}

	/// Returns the initial text.
	pub fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}

	/// Sets the id of the owning form.
	pub fn set_form(&mut self, form_id: impl Into<String>) -> &mut Self {
		self.form = Some(form_id.into());
		self
	}

	/// Makes the text read-only.
	pub fn set_readonly(&mut self, readonly: bool) -> &mut Self {
		self.readonly = readonly;
		self
	}

	/// Disables the control.
	pub fn disable(&mut self) -> &mut Self {
		self.disabled = true;
		self
	}

	/// Gives the control focus on page load.
	pub fn focus(&mut self) -> &mut Self {
		self.autofocus = true;
		self
	}

	/// Marks the control as required.
	pub fn set_required(&mut self, required: bool) -> &mut Self {
		self.required = required;
		self
	}

	/// Sets the visible size in columns and rows.
	pub fn set_size(&mut self, cols: u32, rows: u32) -> &mut Self {
		self.cols = Some(cols);
		self.rows = Some(rows);
		self
	}

	/// Sets the allowed text length range.
	pub fn set_length_range(&mut self, min: Option<u32>, max: Option<u32>) -> &mut Self {
		self.minlength = min;
		self.maxlength = max;
		self
	}

	/// Sets the placeholder text.
	pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> &mut Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Sets the wrap mode.
	pub fn set_wrap(&mut self, wrap: WrapMode) -> &mut Self {
		self.wrap = Some(wrap);
		self
	}
}

impl Render for Textarea {
	fn render_into(&self, level: usize, output: &mut String) {
		open_tag(output, level, "textarea");
		push_opt_attr(output, "form", self.form.as_deref());
		push_flag(output, "readonly", self.readonly);
		push_flag(output, "disabled", self.disabled);
		push_num_attr(output, "minlength", self.minlength);
		push_num_attr(output, "maxlength", self.maxlength);
		push_num_attr(output, "rows", self.rows);
		push_num_attr(output, "cols", self.cols);
		push_flag(output, "required", self.required);
		push_flag(output, "autofocus", self.autofocus);
		push_opt_attr(output, "placeholder", self.placeholder.as_deref());
		push_opt_attr(output, "wrap", self.wrap.map(|w| w.as_str()));
		self.attrs.render_into(output);
		output.push('>');
		if let Some(value) = self.value.as_deref().filter(|v| !v.is_empty()) {
			output.push('\n');
			output.push_str(value);
		}
		output.push_str("</textarea>");
	}
}

impl_attributes!(Textarea);
