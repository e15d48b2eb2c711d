//! `<input>` and its companions `<output>` and `<datalist>`.
//!
//! An [`Input`] can carry two trailing siblings derived from its own id:
//! an `<output id='{id}_output'>` mirroring the value (see
//! [`Input::show_value`]) and a `<datalist id='{id}_list'>` of suggestions
//! (see [`Input::add_suggestion`]). Both are rebuilt from the input's current
//! state on every render.

use tessera_core::render::{
	open_tag, push_attr, push_flag, push_line, push_num_attr, push_opt_attr,
};
use tessera_core::{AttributeSet, Render, markup_enum};

use crate::element::impl_attributes;

markup_enum! {
	/// Kind of `<input>` control
	pub enum InputType: "input type" {
		/// Push button
		Button => "button",
		/// Checkbox
		Checkbox => "checkbox",
		/// Color picker
		Color => "color",
		/// Date picker
		Date => "date",
		/// Local date and time picker
		DateTimeLocal => "datetime-local",
		/// E-mail address
		Email => "email",
		/// File chooser
		File => "file",
		/// Hidden value
		Hidden => "hidden",
		/// Graphical submit button
		Image => "image",
		/// Month picker
		Month => "month",
		/// Number
		Number => "number",
		/// Password
		Password => "password",
		/// Radio button
		Radio => "radio",
		/// Slider
		Range => "range",
		/// Form reset button
		Reset => "reset",
		/// Search field
		Search => "search",
		/// Form submit button
		Submit => "submit",
		/// Telephone number
		Tel => "tel",
		/// Single-line text
		Text => "text",
		/// Time picker
		Time => "time",
		/// URL
		Url => "url",
		/// Week picker
		Week => "week",
	}
}

markup_enum! {
	/// File types accepted by a file input
	pub enum FileFormat: "file format" {
		/// Any file
		Any => ".*",
		/// Audio files
		Audio => "audio/*",
		/// Video files
		Video => "video/*",
		/// Images
		Image => "image/*",
		/// PDF documents
		Pdf => ".pdf, application/pdf",
		/// Word documents
		MsDoc => ".doc, .docx, application/msword",
		/// XML
		Xml => ".xml, text/xml, application/xml",
		/// HTML
		Html => ".htm, .html, text/html",
		/// SQL scripts
		Sql => ".sql",
		/// ZIP archives
		Zip => ".zip, application/zip",
		/// JSON
		Json => ".json, text/json, application/json",
		/// JavaScript
		JavaScript => ".js, text/javascript, text/jscript",
		/// Camera capture
		Camera => "capture=camera",
	}
}

/// `<input>` form control.
#[derive(Debug, Clone, Default)]
pub struct Input {
	kind: Option<InputType>,
	alt: Option<String>,
	src: Option<String>,
	value: Option<String>,
	form: Option<String>,
	readonly: bool,
	disabled: bool,
	checked: bool,
	size: Option<u32>,
	width: Option<u32>,
	height: Option<u32>,
	minlength: Option<u32>,
	maxlength: Option<u32>,
	min: Option<String>,
	max: Option<String>,
	step: Option<String>,
	multiple: bool,
	required: bool,
	autofocus: bool,
	autocomplete: Option<bool>,
	pattern: Option<String>,
	placeholder: Option<String>,
	formats: Vec<FileFormat>,
	capture: Option<String>,
	show_value: bool,
	suggestions: Vec<String>,
	attrs: AttributeSet,
}

impl Input {
	/// Creates an input of the given type.
	pub fn new(kind: InputType) -> Self {
		Self {
			kind: Some(kind),
			..Self::default()
		}
	}

	/// Creates an input with no `type` attribute (a text field).
	pub fn untyped() -> Self {
		Self::default()
	}

	/// Returns the input type.
	pub fn kind(&self) -> Option<InputType> {
		self.kind
	}

	/// Sets the current value.
	pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
		self.value = Some(value.into());
		self
	}

	/// Returns the current value.
	pub fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}

	/// Sets the alternate text of an image input.
	pub fn set_alt(&mut self, alt: impl Into<String>) -> &mut Self {
		self.alt = Some(alt.into());
		self
	}

	/// Sets the image URL of an image input.
	pub fn set_source(&mut self, url: impl Into<String>) -> &mut Self {
		self.src = Some(url.into());
		self
	}

	/// Sets the id of the owning form.
	pub fn set_form(&mut self, form_id: impl Into<String>) -> &mut Self {
		self.form = Some(form_id.into());
		self
	}

	/// Makes the input read-only.
	pub fn set_readonly(&mut self, readonly: bool) -> &mut Self {
		self.readonly = readonly;
		self
	}

	/// Disables the input.
	pub fn disable(&mut self) -> &mut Self {
		self.disabled = true;
		self
	}

	/// Checks a checkbox or radio button.
	pub fn check(&mut self) -> &mut Self {
		self.checked = true;
		self
	}

	/// Sets the visible width in characters.
	pub fn set_length(&mut self, size: u32) -> &mut Self {
		self.size = Some(size);
		self
	}

	/// Sets the rendered size of an image input.
	pub fn set_image_size(&mut self, width: u32, height: u32) -> &mut Self {
		self.width = Some(width);
		self.height = Some(height);
		self
	}

	/// Sets the allowed text length range; `None` leaves a bound unset.
	pub fn set_length_range(&mut self, min: Option<u32>, max: Option<u32>) -> &mut Self {
		if min.is_some() {
			self.minlength = min;
		}
		if max.is_some() {
			self.maxlength = max;
		}
		self
	}

	/// Sets the allowed value range; `None` leaves a bound unset.
	pub fn set_range(&mut self, min: Option<&str>, max: Option<&str>) -> &mut Self {
		if let Some(min) = min {
			self.min = Some(min.to_string());
		}
		if let Some(max) = max {
			self.max = Some(max.to_string());
		}
		self
	}

	/// Sets the value granularity.
	pub fn set_step(&mut self, step: impl Into<String>) -> &mut Self {
		self.step = Some(step.into());
		self
	}

	/// Allows several values (files, e-mail addresses).
	pub fn enable_multiple(&mut self) -> &mut Self {
		self.multiple = true;
		self
	}

	/// Marks the input as required.
	pub fn set_required(&mut self, required: bool) -> &mut Self {
		self.required = required;
		self
	}

	/// Gives the input focus on page load.
	pub fn focus(&mut self) -> &mut Self {
		self.autofocus = true;
		self
	}

	/// Writes `autocomplete='on'` or `'off'`; unset by default.
	pub fn set_autocomplete(&mut self, autocomplete: bool) -> &mut Self {
		self.autocomplete = Some(autocomplete);
		self
	}

	/// Sets the validation regex.
	pub fn set_pattern(&mut self, pattern: impl Into<String>) -> &mut Self {
		self.pattern = Some(pattern.into());
		self
	}

	/// Sets the placeholder text.
	pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> &mut Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Sets the capture device of a file input (e.g. `user`, `environment`).
	pub fn set_device(&mut self, device: impl Into<String>) -> &mut Self {
		self.capture = Some(device.into());
		self
	}

	/// Adds an accepted file format.
	pub fn add_file_format(&mut self, format: FileFormat) -> &mut Self {
		self.formats.push(format);
		self
	}

	/// Adds several accepted file formats.
	pub fn add_file_formats(&mut self, formats: impl IntoIterator<Item = FileFormat>) -> &mut Self {
		self.formats.extend(formats);
		self
	}

	/// Mirrors the value in a trailing `<output>` element.
	pub fn show_value(&mut self) -> &mut Self {
		self.show_value = true;
		self
	}

	/// Adds a suggestion to the trailing `<datalist>`.
	pub fn add_suggestion(&mut self, value: impl Into<String>) -> &mut Self {
		self.suggestions.push(value.into());
		self
	}

	/// Adds several suggestions to the trailing `<datalist>`.
	pub fn add_suggestions<S: Into<String>>(
		&mut self,
		values: impl IntoIterator<Item = S>,
	) -> &mut Self {
		self.suggestions.extend(values.into_iter().map(Into::into));
		self
	}

	fn id_or_empty(&self) -> &str {
		self.attrs.id().unwrap_or_default()
	}

	fn output(&self) -> Output {
		let mut output = Output::new(self.value.clone().unwrap_or_default());
		output.attrs.set_id(format!("{}_output", self.id_or_empty()));
		if self.attrs.is_hidden() {
			output.attrs.hide();
		}
		output
	}

	fn datalist(&self) -> Datalist {
		let mut list = Datalist::new();
		list.attrs.set_id(format!("{}_list", self.id_or_empty()));
		list.options = self.suggestions.clone();
		list
	}
}

impl Render for Input {
	fn render_into(&self, level: usize, output: &mut String) {
		open_tag(output, level, "input");
		push_opt_attr(output, "type", self.kind.map(|k| k.as_str()));
		push_opt_attr(output, "alt", self.alt.as_deref());
		push_opt_attr(output, "src", self.src.as_deref());
		push_opt_attr(output, "value", self.value.as_deref());
		push_opt_attr(output, "form", self.form.as_deref());
		push_flag(output, "readonly", self.readonly);
		push_flag(output, "disabled", self.disabled);
		push_flag(output, "checked", self.checked);
		push_num_attr(output, "size", self.size);
		push_num_attr(output, "width", self.width);
		push_num_attr(output, "height", self.height);
		push_num_attr(output, "minlength", self.minlength);
		push_num_attr(output, "maxlength", self.maxlength);
		push_opt_attr(output, "min", self.min.as_deref());
		push_opt_attr(output, "max", self.max.as_deref());
		push_opt_attr(output, "step", self.step.as_deref());
		if !self.suggestions.is_empty() {
			push_attr(output, "list", &format!("{}_list", self.id_or_empty()));
		}
		push_flag(output, "multiple", self.multiple);
		push_flag(output, "required", self.required);
		push_flag(output, "autofocus", self.autofocus);
		if let Some(on) = self.autocomplete {
			push_attr(output, "autocomplete", if on { "on" } else { "off" });
		}
		push_opt_attr(output, "pattern", self.pattern.as_deref());
		push_opt_attr(output, "placeholder", self.placeholder.as_deref());
		if self.show_value {
			push_attr(
				output,
				"oninput",
				&format!("{}_output.value=value", self.id_or_empty()),
			);
		}
		self.attrs.render_into(output);
		if !self.formats.is_empty() {
			let formats: Vec<&str> = self.formats.iter().map(FileFormat::as_str).collect();
			push_attr(output, "accept", &formats.join(", "));
		}
		push_opt_attr(output, "capture", self.capture.as_deref());
		output.push_str("/>");

		if self.show_value {
			self.output().render_into(level, output);
		}
		if !self.suggestions.is_empty() {
			self.datalist().render_into(level, output);
		}
	}
}

/// `<output>` showing a computed value inline.
#[derive(Debug, Clone, Default)]
pub struct Output {
	value: String,
	form: Option<String>,
	input: Option<String>,
	attrs: AttributeSet,
}

impl Output {
	/// Creates an output showing `value`.
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			..Self::default()
		}
	}

	/// Changes the shown value.
	pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
		self.value = value.into();
		self
	}

	/// Sets the id of the input the value is computed from (`for`).
	pub fn set_input(&mut self, input_id: impl Into<String>) -> &mut Self {
		self.input = Some(input_id.into());
		self
	}

	/// Sets the id of the owning form.
	pub fn set_form(&mut self, form_id: impl Into<String>) -> &mut Self {
		self.form = Some(form_id.into());
		self
	}
}

impl Render for Output {
	fn render_into(&self, level: usize, output: &mut String) {
		open_tag(output, level, "output");
		push_opt_attr(output, "form", self.form.as_deref());
		push_opt_attr(output, "for", self.input.as_deref());
		self.attrs.render_into(output);
		output.push('>');
		output.push_str(&self.value);
		output.push_str("</output>");
	}
}

/// `<datalist>` of predefined values.
#[derive(Debug, Clone, Default)]
pub struct Datalist {
	options: Vec<String>,
	attrs: AttributeSet,
}

impl Datalist {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a value.
	pub fn add_element(&mut self, value: impl Into<String>) -> &mut Self {
		self.options.push(value.into());
		self
	}

	/// Returns the number of values.
	pub fn len(&self) -> usize {
		self.options.len()
	}

	/// Returns true if the list has no values.
	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}
}

impl Render for Datalist {
	fn render_into(&self, level: usize, output: &mut String) {
		open_tag(output, level, "datalist");
		self.attrs.render_into(output);
		output.push('>');
		for value in &self.options {
			push_line(output, level + 1);
			output.push_str("<option value='");
			output.push_str(value);
			output.push_str("'/>");
		}
		push_line(output, level);
		output.push_str("</datalist>");
	}
}

impl_attributes!(Input, Output, Datalist);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use tessera_core::GlobalAttributes;

	#[rstest]
	fn test_text_input_minimal() {
		let mut input = Input::new(InputType::Text);
		input.set_name("q");
		assert_eq!(input.render(1), "\n\t<input type='text' name='q'/>");
	}

	#[rstest]
	fn test_untyped_input_has_no_type() {
		assert_eq!(Input::untyped().render(0), "\n<input/>");
	}

	#[rstest]
	fn test_input_attribute_order() {
		let mut input = Input::new(InputType::Number);
		input
			.set_value("5")
			.set_form("f")
			.set_readonly(true)
			.set_length(4)
			.set_length_range(Some(1), Some(3))
			.set_range(Some("0"), Some("10"))
			.set_step("1")
			.set_required(true)
			.focus()
			.set_autocomplete(false)
			.set_placeholder("0-10")
			.set_id("qty");

		assert_eq!(
			input.render(0),
			"\n<input type='number' value='5' form='f' readonly='readonly' size='4' \
			 minlength='1' maxlength='3' min='0' max='10' step='1' required='required' \
			 autofocus='autofocus' autocomplete='off' placeholder='0-10' id='qty'/>"
		);
	}

	#[rstest]
	fn test_range_keeps_unset_bound() {
		let mut input = Input::new(InputType::Range);
		input.set_range(Some("1"), Some("9"));
		input.set_range(None, Some("5"));
		assert_eq!(input.render(0), "\n<input type='range' min='1' max='5'/>");
	}

	#[rstest]
	fn test_image_input() {
		let mut input = Input::new(InputType::Image);
		input
			.set_alt("Go")
			.set_source("/go.png")
			.set_image_size(40, 20)
			.check()
			.disable();
		assert_eq!(
			input.render(0),
			"\n<input type='image' alt='Go' src='/go.png' disabled='disabled' \
			 checked='checked' width='40' height='20'/>"
		);
	}

	#[rstest]
	fn test_file_input_accept_and_capture_follow_global_attributes() {
		let mut input = Input::new(InputType::File);
		input
			.enable_multiple()
			.add_file_formats([FileFormat::Pdf, FileFormat::Image])
			.set_device("user")
			.set_name("upload");

		assert_eq!(
			input.render(0),
			"\n<input type='file' multiple='multiple' name='upload' \
			 accept='.pdf, application/pdf, image/*' capture='user'/>"
		);
	}

	#[rstest]
	fn test_show_value_appends_output() {
		let mut input = Input::new(InputType::Range);
		input.set_id("vol").set_value("3");
		input.show_value();

		assert_eq!(
			input.render(1),
			"\n\t<input type='range' value='3' oninput='vol_output.value=value' id='vol'/>\
			 \n\t<output id='vol_output'>3</output>"
		);
	}

	#[rstest]
	fn test_hidden_input_hides_its_output() {
		let mut input = Input::new(InputType::Range);
		input.set_id("v").show_value();
		input.hide();

		let rendered = input.render(0);
		assert!(rendered.ends_with("\n<output id='v_output' hidden='hidden'></output>"));
	}

	#[rstest]
	fn test_suggestions_append_datalist() {
		let mut input = Input::new(InputType::Text);
		input.set_id("city");
		input.add_suggestions(["Budapest", "Vienna"]);

		assert_eq!(
			input.render(0),
			"\n<input type='text' list='city_list' id='city'/>\
			 \n<datalist id='city_list'>\
			 \n\t<option value='Budapest'/>\
			 \n\t<option value='Vienna'/>\
			 \n</datalist>"
		);
	}

	#[rstest]
	fn test_standalone_output() {
		let mut output = Output::new("42");
		output.set_form("calc").set_input("a b").set_id("sum");
		assert_eq!(
			output.render(2),
			"\n\t\t<output form='calc' for='a b' id='sum'>42</output>"
		);
	}

	#[rstest]
	fn test_standalone_datalist() {
		let mut list = Datalist::new();
		assert!(list.is_empty());
		list.add_element("a");
		assert_eq!(list.len(), 1);
		assert_eq!(
			list.render(0),
			"\n<datalist>\n\t<option value='a'/>\n</datalist>"
		);
	}

	#[rstest]
	fn test_input_type_parse() {
		assert_eq!("datetime-local".parse::<InputType>().unwrap(), InputType::DateTimeLocal);
		assert!("datetime".parse::<InputType>().is_err());
		assert_eq!(InputType::ALL.len(), 22);
		assert_eq!(FileFormat::ALL.len(), 13);
	}
}
