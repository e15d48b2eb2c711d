//! Drop-down lists.

use tessera_core::render::{close_tag, open_tag, push_flag, push_num_attr, push_opt_attr};
use tessera_core::{AttributeSet, Render};

use crate::element::impl_attributes;

/// `<option>` inside a [`Select`].
#[derive(Debug, Clone, Default)]
pub struct SelectOption {
	value: String,
	text: String,
	disabled: bool,
	selected: bool,
	attrs: AttributeSet,
}

impl SelectOption {
	/// Creates an option submitting `value` and showing `text`.
	pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			text: text.into(),
			..Self::default()
		}
	}

	/// Returns the submitted value.
	pub fn value(&self) -> &str {
		&self.value
	}

	/// Returns the shown text.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Enables the option.
	pub fn enable(&mut self) -> &mut Self {
		self.disabled = false;
		self
	}

	/// Disables the option.
	pub fn disable(&mut self) -> &mut Self {
		self.disabled = true;
		self
	}

	/// Returns true if the option is disabled.
	pub fn is_disabled(&self) -> bool {
		self.disabled
	}

	/// Marks the option as selected.
	pub fn select(&mut self) -> &mut Self {
		self.selected = true;
		self
	}

	/// Clears the selection mark.
	pub fn deselect(&mut self) -> &mut Self {
		self.selected = false;
		self
	}

	/// Returns true if the option is selected.
	pub fn is_selected(&self) -> bool {
		self.selected
	}
}

impl Render for SelectOption {
	fn render_into(&self, level: usize, output: &mut String) {
		open_tag(output, level, "option");
		output.push_str(" value='");
		output.push_str(&self.value);
		output.push('\'');
		push_flag(output, "disabled", self.disabled);
		push_flag(output, "selected", self.selected);
		self.attrs.render_into(output);
		output.push('>');
		output.push_str(&self.text);
		output.push_str("</option>");
	}
}

/// `<select>` with its options one level deeper.
#[derive(Debug, Clone, Default)]
pub struct Select {
	form: Option<String>,
	disabled: bool,
	required: bool,
	autofocus: bool,
	multiple: bool,
	size: Option<u32>,
	options: Vec<SelectOption>,
	attrs: AttributeSet,
}

impl Select {
	/// Creates an empty select.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the id of the owning form.
	pub fn set_form(&mut self, form_id: impl Into<String>) -> &mut Self {
		self.form = Some(form_id.into());
		self
	}

	/// Disables the control.
	pub fn disable(&mut self) -> &mut Self {
		self.disabled = true;
		self
	}

	/// Marks the control as required.
	pub fn set_required(&mut self, required: bool) -> &mut Self {
		self.required = required;
		self
	}

	/// Gives the control focus on page load.
	pub fn focus(&mut self) -> &mut Self {
		self.autofocus = true;
		self
	}

	/// Allows selecting several options.
	pub fn enable_multiple(&mut self) -> &mut Self {
		self.multiple = true;
		self
	}

	/// Sets the number of visible rows.
	pub fn set_size(&mut self, size: u32) -> &mut Self {
		self.size = Some(size);
		self
	}

	/// Appends an option.
	pub fn add_option(&mut self, option: SelectOption) -> &mut Self {
		self.options.push(option);
		self
	}

	/// Returns the options in order.
	pub fn options(&self) -> &[SelectOption] {
		&self.options
	}

	/// Returns the options mutably.
	pub fn options_mut(&mut self) -> &mut [SelectOption] {
		&mut self.options
	}

	/// Returns the index of the first selected option.
	pub fn selected_index(&self) -> Option<usize> {
		self.options.iter().position(SelectOption::is_selected)
	}
}

impl Render for Select {
	fn render_into(&self, level: usize, output: &mut String) {
		open_tag(output, level, "select");
		push_opt_attr(output, "form", self.form.as_deref());
		push_flag(output, "disabled", self.disabled);
		push_flag(output, "required", self.required);
		push_flag(output, "autofocus", self.autofocus);
		push_flag(output, "multiple", self.multiple);
		push_num_attr(output, "size", self.size);
		self.attrs.render_into(output);
		output.push('>');
		for option in &self.options {
			option.render_into(level + 1, output);
		}
		close_tag(output, level, "select");
	}
}

impl_attributes!(SelectOption, Select);
