//! Facade Tests
//!
//! Builds a small settings page using only the `tessera` prelude.

use rstest::*;
use tessera::prelude::*;

#[fixture]
fn language_select() -> Select {
	let mut select = Select::new();
	select.set_id("lang").set_name("lang");
	for (value, text) in [("en", "English"), ("hu", "Magyar")] {
		select.add_option(SelectOption::new(value, text));
	}
	select.options_mut()[1].select();
	select
}

#[rstest]
fn test_selected_option_is_reported(language_select: Select) {
	assert_eq!(language_select.selected_index(), Some(1));
	assert_eq!(
		language_select.render(2),
		"\n\t\t<select id='lang' name='lang'>\
		 \n\t\t\t<option value='en'>English</option>\
		 \n\t\t\t<option value='hu' selected='selected'>Magyar</option>\
		 \n\t\t</select>"
	);
}

#[rstest]
fn test_settings_page(language_select: Select) {
	let mut form = Form::with_action("/settings", FormMethod::Post);
	form.add_content(Label::for_input("lang", "Language"))
		.add_content(language_select);

	let mut page = Page::new("Settings");
	page.set_charset(Charset::Utf8).add_content(form);

	let html = page.render();
	assert!(html.contains("\n\t<form action='/settings' method='post' autocomplete='on'>"));
	assert!(html.contains("\n\t\t<select id='lang' name='lang'>"));
	assert!(html.contains("\n\t\t\t<option value='hu' selected='selected'>Magyar</option>"));
	assert!(html.ends_with("\n\t</form>\n</body>\n</html>"));
}

#[rstest]
fn test_deep_clone_through_prelude(language_select: Select) {
	let mut copy = deep_clone(&language_select);
	copy.options_mut()[0].select();

	assert!(!language_select.options()[0].is_selected());
	assert!(copy.options()[0].is_selected());
}

#[rstest]
fn test_rejected_event_name_is_an_error() {
	let mut div = Div::new();
	let result = div.add_event("onwhatever", "x()").map(|_| ());

	assert_eq!(
		result,
		Err(MarkupError::InvalidEventName("onwhatever".to_string()))
	);
	assert_eq!(div.render(0), "\n<div>\n</div>");
}
