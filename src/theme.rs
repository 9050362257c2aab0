//! Application theme.
//!
//! A [`Theme`] is the explicit configuration an application builds
//! once at startup; [`Theme::resolve`] turns it into the concrete
//! colors of the interface.

use log::debug;
use crate::{Color, FlatColor, RGBColor};

/// Color of the content (text, icons) drawn on top of the theme colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentStyle {
    /// Black or white, whichever contrasts more with the background.
    #[default]
    Contrast,
    /// Always light content.
    Light,
    /// Always dark content.
    Dark,
}

/// Theme of an application: bar color, control tint and content style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Color of bars (navigation, tab and tool bars).
    pub primary: Color,
    /// Tint of controls (buttons, switches, sliders).
    pub secondary: Color,
    pub content_style: ContentStyle,
}

/// The colors of an interface, see [`Theme::resolve`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    /// Background of bars.
    pub bar_tint: Color,
    /// Content drawn on bars.
    pub bar_content: Color,
    /// Tint of controls.
    pub tint: Color,
    /// Content drawn on tinted controls.
    pub tint_content: Color,
    /// Background of views.
    pub background: Color,
    /// Text drawn on views.  It always contrasts with `background`,
    /// whatever the content style.
    pub text: Color,
}

impl Theme {
    /// Create a theme from colors in any encoding.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use chameleon::{ContentStyle, FlatColor, Theme};
    /// let theme = Theme::new(&FlatColor::Plum.light::<RGB8>(),
    ///                        &FlatColor::Blue.light::<RGB8>(),
    ///                        ContentStyle::Contrast);
    /// let appearance = theme.resolve();
    /// assert_eq!(appearance.bar_content, FlatColor::White.light::<chameleon::Color>());
    /// ```
    pub fn new<C: RGBColor>(primary: &C, secondary: &C,
                            content_style: ContentStyle) -> Self {
        Theme { primary: primary.to_rgba(), secondary: secondary.to_rgba(),
                content_style }
    }

    fn content_on(&self, background: &Color) -> Color {
        match self.content_style {
            ContentStyle::Contrast => background.contrast(true),
            ContentStyle::Light => FlatColor::White.light(),
            ContentStyle::Dark => FlatColor::Black.dark(),
        }
    }

    /// Compute the colors of the interface.
    pub fn resolve(&self) -> Appearance {
        let background: Color = FlatColor::White.light();
        let appearance = Appearance {
            bar_tint: self.primary,
            bar_content: self.content_on(&self.primary),
            tint: self.secondary,
            tint_content: self.content_on(&self.secondary),
            background,
            text: background.contrast(true),
        };
        debug!("resolved {:?} theme: {:?}", self.content_style, appearance);
        appearance
    }
}
