//! Page Integration Tests
//!
//! Builds complete documents and checks the serialized output.
//!
//! Test Categories:
//! 1. Skeleton - document structure and nesting inside the body
//! 2. Configuration - pages built from JSON match builder-built pages
//! 3. Output - writing rendered pages to files

use std::io::Read;

use rstest::*;
use tessera_core::{Charset, GlobalAttributes, LinkTarget, Render};
use tessera_document::{MediaQuery, Meta, Page, PageConfig, ScriptPlacement};
use tessera_elements::{Anchor, Container, Div, Paragraph};

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
fn greeting() -> Div {
	let mut paragraph = Paragraph::new();
	paragraph.add_content("Hello");
	let mut div = Div::new();
	div.add_content(paragraph);
	div
}

fn builder_page() -> Page {
	let mut wide = MediaQuery::new("screen");
	wide.set_min_width(1024);

	let mut page = Page::new("Config");
	page.set_language("de")
		.set_charset(Charset::Utf8)
		.setup_mobile()
		.set_no_cache()
		.set_base("https://example.com/")
		.set_base_target(LinkTarget::SamePage)
		.set_icon("/favicon.gif")
		.add_stylesheet("/site.css", None)
		.add_stylesheet("/wide.css", Some(wide))
		.add_script(ScriptPlacement::Head, "/head.js", None)
		.add_script(
			ScriptPlacement::Body,
			"https://cdn.example/lib.js",
			Some("anonymous".to_string()),
		)
		.add_script(ScriptPlacement::Command, "start();", None);
	page
}

// ============================================================================
// Skeleton
// ============================================================================

#[rstest]
fn test_hello_page(greeting: Div) {
	let mut page = Page::new("Test");
	page.add_content(greeting);

	let expected = "<!DOCTYPE html>\
		\n<html xmlns='http://www.w3.org/1999/xhtml' lang='en'>\
		\n<head>\
		\n\t<title>Test</title>\
		\n</head>\
		\n<body>\
		\n\t<div>\
		\n\t\t<p>Hello\
		\n\t\t</p>\
		\n\t</div>\
		\n</body>\
		\n</html>";

	assert_eq!(page.render(), expected);
}

#[rstest]
fn test_render_is_repeatable(greeting: Div) {
	let mut page = Page::new("Twice");
	page.add_clone(&greeting).add_content(greeting);

	let first = page.render();
	assert_eq!(page.render(), first);
	assert_eq!(first.matches("\n\t<div>").count(), 2);
}

#[rstest]
fn test_full_head_order() {
	let html = builder_page().render();

	let expected_head = "\n<head>\
		\n\t<title>Config</title>\
		\n\t<base href='https://example.com/' target='_self'/>\
		\n\t<meta charset='UTF-8'/>\
		\n\t<meta content='height=device-height, width=device-width, initial-scale=1.0, \
		minimum-scale=1.0, maximum-scale=1.0, user-scalable=no' name='viewport'/>\
		\n\t<meta http-equiv='Cache-Control' content='no-cache, no-store, must-revalidate'/>\
		\n\t<meta http-equiv='Pragma' content='no-cache'/>\
		\n\t<meta http-equiv='Expires' content='0'/>\
		\n\t<link rel='icon' href='/favicon.gif' type='image/gif'/>\
		\n\t<link rel='stylesheet' href='/site.css'/>\
		\n\t<link rel='stylesheet' href='/wide.css' media='screen and (min-width:1024px)'/>\
		\n\t<script type='text/javascript' src='/head.js'></script>\
		\n</head>";
	let expected_body = "\n<body>\
		\n\t<script src='https://cdn.example/lib.js' crossorigin='anonymous'></script>\
		\n\t<script type='text/javascript'>start();</script>\
		\n</body>";

	assert!(html.contains("lang='de'>"));
	assert!(html.contains(expected_head), "unexpected head in:\n{html}");
	assert!(html.contains(expected_body), "unexpected body in:\n{html}");
}

#[rstest]
fn test_head_mut_and_body_mut() {
	let mut page = Page::new("Custom");
	page.head_mut().add_meta(Meta::named("author", "Tessera"));
	let mut link = Anchor::new("/next");
	link.set_id("next").add_content("Next");
	page.body_mut().set_id("root").add_content(link);

	let html = page.render();
	assert!(html.contains("\n\t<meta content='Tessera' name='author'/>"));
	assert!(html.contains("\n<body id='root'>\n\t<a href=\"/next\" id='next'>Next\n\t</a>\n</body>"));
	assert_eq!(page.body().content().len(), 1);
	assert_eq!(page.head().metas().len(), 1);
}

// ============================================================================
// Configuration
// ============================================================================

#[rstest]
fn test_config_matches_builder() {
	let config = PageConfig::from_json(
		r#"{
			"title": "Config",
			"lang": "de",
			"charset": "UTF-8",
			"mobile": true,
			"no_cache": true,
			"base": "https://example.com/",
			"base_target": "_self",
			"icon": "/favicon.gif",
			"stylesheets": [
				{ "href": "/site.css" },
				{ "href": "/wide.css", "media": { "media": "screen", "min_width": 1024 } }
			],
			"scripts": [
				{ "src": "/head.js" },
				{ "src": "https://cdn.example/lib.js", "placement": "body", "crossorigin": "anonymous" },
				{ "src": "start();", "placement": "command" }
			]
		}"#,
	)
	.unwrap();

	let page = Page::from_config(&config).unwrap();

	assert_eq!(page.render(), builder_page().render());
}

#[rstest]
fn test_config_page_accepts_content(greeting: Div) {
	let config = PageConfig::from_json(r#"{"title": "Test"}"#).unwrap();
	let mut page = Page::from_config(&config).unwrap();
	page.add_content(greeting);

	assert!(page.render().contains("\n<body>\n\t<div>\n\t\t<p>Hello"));
}

// ============================================================================
// Output
// ============================================================================

#[rstest]
fn test_write_page_to_file(greeting: Div) {
	let mut page = Page::new("File");
	page.add_content(greeting);

	let mut file = tempfile::tempfile().unwrap();
	page.write_to(&mut file).unwrap();

	let mut written = String::new();
	std::io::Seek::rewind(&mut file).unwrap();
	file.read_to_string(&mut written).unwrap();

	assert_eq!(written, page.render());
	assert_eq!(greeting_depth(&written), 2);
}

fn greeting_depth(html: &str) -> usize {
	html.lines()
		.find(|line| line.trim_start().starts_with("<p>"))
		.map(|line| line.len() - line.trim_start().len())
		.unwrap_or_default()
}

#[rstest]
fn test_elements_render_identically_inside_page(greeting: Div) {
	let standalone = greeting.render(1);
	let mut page = Page::new("Same");
	page.add_content(greeting);

	assert!(page.render().contains(&standalone));
}
