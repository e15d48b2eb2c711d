//! Font Awesome icons.

use tessera_core::render::open_tag;
use tessera_core::{AttributeSet, Render, markup_enum};

use crate::element::impl_attributes;

markup_enum! {
	/// Icon family
	pub enum IconStyle: "icon style" {
		/// Solid (default)
		Solid => "fa-solid",
		/// Regular
		Regular => "fa-regular",
		/// Light
		Light => "fa-light",
		/// Duotone
		Duotone => "fa-duotone",
		/// Thin
		Thin => "fa-thin",
		/// Brand logos
		Brands => "fa-brands",
	}
}

markup_enum! {
	/// Icon animation
	pub enum IconAnimation: "icon animation" {
		/// Beat
		Beat => "fa-beat",
		/// Beat and fade
		BeatFade => "fa-beat-fade",
		/// Bounce
		Bounce => "fa-bounce",
		/// Fade
		Fade => "fa-fade",
		/// Flip
		Flip => "fa-flip",
		/// Shake
		Shake => "fa-shake",
		/// Spin
		Spin => "fa-spin",
		/// Spin backwards
		SpinReverse => "fa-spin fa-spin-reverse",
		/// Spin in eight steps
		SpinPulse => "fa-spin fa-spin-pulse",
	}
}

markup_enum! {
	/// Icon rotation or flip
	pub enum IconRotation: "icon rotation" {
		/// 90 degrees
		Rotate90 => "fa-rotate-90",
		/// 180 degrees
		Rotate180 => "fa-rotate-180",
		/// 270 degrees
		Rotate270 => "fa-rotate-270",
		/// Mirror horizontally
		FlipHorizontal => "fa-flip-horizontal",
		/// Mirror vertically
		FlipVertical => "fa-flip-vertical",
		/// Mirror both ways
		FlipBoth => "fa-flip-both",
	}
}

markup_enum! {
	/// Icon size relative to the surrounding text
	pub enum IconSize: "icon size" {
		/// 2x small
		Xxs => "fa-2xs",
		/// Extra small
		Xs => "fa-xs",
		/// Small
		Sm => "fa-sm",
		/// Large
		Lg => "fa-lg",
		/// Extra large
		Xl => "fa-xl",
		/// 2x large
		Xxl => "fa-2xl",
	}
}

impl Default for IconStyle {
	fn default() -> Self {
		Self::Solid
	}
}

/// Font Awesome `<i>` icon.
///
/// The style, icon, rotation, animation and size classes come first in the
/// `class` attribute, followed by classes added with `add_class`.
///
/// ```
/// use tessera_core::{GlobalAttributes, Render};
/// use tessera_elements::{Icon, IconSize};
///
/// let mut icon = Icon::new("user");
/// icon.set_size(IconSize::Lg).add_class("muted");
/// assert_eq!(
///     icon.render(0),
///     "\n<i class='fa-solid fa-user fa-lg muted'></i>"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Icon {
	name: String,
	style: IconStyle,
	rotation: Option<IconRotation>,
	animation: Option<IconAnimation>,
	size: Option<IconSize>,
	attrs: AttributeSet,
}

impl Icon {
	/// Creates a solid icon; `name` is given without the `fa-` prefix.
	pub fn new(name: impl AsRef<str>) -> Self {
		Self {
			name: format!("fa-{}", name.as_ref()),
			..Self::default()
		}
	}

	/// Changes the icon family.
	pub fn set_style(&mut self, style: IconStyle) -> &mut Self {
		self.style = style;
		self
	}

	/// Rotates or flips the icon.
	pub fn set_rotation(&mut self, rotation: IconRotation) -> &mut Self {
		self.rotation = Some(rotation);
		self
	}

	/// Animates the icon.
	pub fn set_animation(&mut self, animation: IconAnimation) -> &mut Self {
		self.animation = Some(animation);
		self
	}

	/// Scales the icon.
	pub fn set_size(&mut self, size: IconSize) -> &mut Self {
		self.size = Some(size);
		self
	}
}

impl Render for Icon {
	fn render_into(&self, level: usize, output: &mut String) {
		let mut leading = vec![self.style.as_str(), self.name.as_str()];
		leading.extend(self.rotation.map(|r| r.as_str()));
		leading.extend(self.animation.map(|a| a.as_str()));
		leading.extend(self.size.map(|s| s.as_str()));

		open_tag(output, level, "i");
		self.attrs.render_into_with_classes(output, &leading);
		output.push_str("></i>");
	}
}

impl_attributes!(Icon);
