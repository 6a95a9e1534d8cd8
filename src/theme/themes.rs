#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Light,
    Dark,
}

impl Default for ThemeName {
    fn default() -> Self {
        Self::Dark
    }
}

impl ThemeName {
    pub const ALL: [ThemeName; 2] = [ThemeName::Light, ThemeName::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_light(&self) -> bool {
        matches!(self, Self::Light)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl TryFrom<&str> for ThemeName {
    type Error = UnknownTheme;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let theme = match value {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => return Err(UnknownTheme(value.to_owned())),
        };
        debug_assert_eq!(
            theme.as_str(),
            value,
            "resulting theme's name must match with the provided value"
        );
        Ok(theme)
    }
}

impl FromStr for ThemeName {
    type Err = UnknownTheme;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

// Values reference the `--color-*` variables declared by DefaultStyling.
impl<'a> RawTheme<'a> {
    pub fn light() -> Self {
        Self {
            id: ThemeName::Light,
            background: "var(--color-white)",
            header_color: "var(--color-black)",
            copy_color: "var(--color-black)",
            link_color: "var(--color-blue-700)",
            hero_color: "var(--color-white)",
            homepage_link_color: "var(--color-black)",
            title_color: "var(--color-charcoal)",
            title_shadow: "none",
            hover_color: "var(--color-blue-600)",
            active_color: "var(--color-blue-400)",
            nav_link_color: "var(--color-charcoal)",
            highlight_color: "var(--color-blue-600)",
            auxiliary_color: "var(--color-gray-700)",
            border_color: "var(--color-charcoal)",
            card_color: "var(--color-black)",
            card_link_color: "var(--color-blue-600)",
            card_header_color: "var(--color-black)",
            card_info_color: "var(--color-charcoal)",
            input_color: "var(--color-black)",
            input_caret_color: "var(--color-gray-600)",
            input_border_color: "var(--color-gray-600)",
            input_label_color: "var(--color-charcoal)",
            input_autofill_color: "var(--color-blue-600)",
            cv_header_color: "var(--color-black)",
            cv_subheader_color: "var(--color-black)",
            cv_interface_color: "var(--color-gray-400)",
            cv_border_color: "var(--color-charcoal)",
            blog_syntax_color: "var(--color-gray-600)",
            overlay5: "#e2e7ec",
            overlay10: "var(--color-white)",
            overlay15: "var(--color-white)",
        }
    }

    pub fn dark() -> Self {
        Self {
            id: ThemeName::Dark,
            background: "var(--color-black)",
            header_color: "var(--color-gray-200)",
            copy_color: "var(--color-gray-200)",
            link_color: "var(--color-blue-400)",
            hero_color: "var(--color-black)",
            homepage_link_color: "var(--color-gray-200)",
            title_color: "var(--color-orange-400)",
            title_shadow: "2px 2px rgba(0, 0, 0, 0.18)",
            hover_color: "var(--color-blue-600)",
            active_color: "var(--color-blue-700)",
            nav_link_color: "var(--color-orange-400)",
            highlight_color: "var(--color-blue-600)",
            auxiliary_color: "var(--color-gray-400)",
            border_color: "var(--color-charcoal)",
            card_color: "var(--color-gray-200)",
            card_link_color: "var(--color-blue-600)",
            card_header_color: "var(--color-orange-200)",
            card_info_color: "var(--color-gray-200)",
            input_color: "var(--color-gray-200)",
            input_caret_color: "var(--color-gray-400)",
            input_border_color: "var(--color-gray-400)",
            input_label_color: "var(--color-gray-200)",
            input_autofill_color: "var(--color-orange-400)",
            cv_header_color: "var(--color-orange-400)",
            cv_subheader_color: "var(--color-orange-200)",
            cv_interface_color: "var(--color-charcoal)",
            cv_border_color: "var(--color-orange-400)",
            blog_syntax_color: "var(--color-orange-400)",
            overlay5: "#1e1e1e",
            overlay10: "#242424",
            overlay15: "#363636",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub id: ThemeName,
    pub background: AttrValue,
    pub header_color: AttrValue,
    pub copy_color: AttrValue,
    pub link_color: AttrValue,
    pub hero_color: AttrValue,
    pub homepage_link_color: AttrValue,
    pub title_color: AttrValue,
    pub title_shadow: AttrValue,
    pub hover_color: AttrValue,
    pub active_color: AttrValue,
    pub nav_link_color: AttrValue,
    pub highlight_color: AttrValue,
    pub auxiliary_color: AttrValue,
    pub border_color: AttrValue,
    pub card_color: AttrValue,
    pub card_link_color: AttrValue,
    pub card_header_color: AttrValue,
    pub card_info_color: AttrValue,
    pub input_color: AttrValue,
    pub input_caret_color: AttrValue,
    pub input_border_color: AttrValue,
    pub input_label_color: AttrValue,
    pub input_autofill_color: AttrValue,
    pub cv_header_color: AttrValue,
    pub cv_subheader_color: AttrValue,
    pub cv_interface_color: AttrValue,
    pub cv_border_color: AttrValue,
    pub blog_syntax_color: AttrValue,
    pub overlay5: AttrValue,
    pub overlay10: AttrValue,
    pub overlay15: AttrValue,
}

struct RawTheme<'a> {
    pub id: ThemeName,
    pub background: &'a str,
    pub header_color: &'a str,
    pub copy_color: &'a str,
    pub link_color: &'a str,
    pub hero_color: &'a str,
    pub homepage_link_color: &'a str,
    pub title_color: &'a str,
    pub title_shadow: &'a str,
    pub hover_color: &'a str,
    pub active_color: &'a str,
    pub nav_link_color: &'a str,
    pub highlight_color: &'a str,
    pub auxiliary_color: &'a str,
    pub border_color: &'a str,
    pub card_color: &'a str,
    pub card_link_color: &'a str,
    pub card_header_color: &'a str,
    pub card_info_color: &'a str,
    pub input_color: &'a str,
    pub input_caret_color: &'a str,
    pub input_border_color: &'a str,
    pub input_label_color: &'a str,
    pub input_autofill_color: &'a str,
    pub cv_header_color: &'a str,
    pub cv_subheader_color: &'a str,
    pub cv_interface_color: &'a str,
    pub cv_border_color: &'a str,
    pub blog_syntax_color: &'a str,
    pub overlay5: &'a str,
    pub overlay10: &'a str,
    pub overlay15: &'a str,
}

impl<'a> From<RawTheme<'a>> for Theme {
    fn from(theme: RawTheme) -> Self {
        let attr = |value: &str| AttrValue::from(value.to_owned());

        Theme {
            id: theme.id,
            background: attr(theme.background),
            header_color: attr(theme.header_color),
            copy_color: attr(theme.copy_color),
            link_color: attr(theme.link_color),
            hero_color: attr(theme.hero_color),
            homepage_link_color: attr(theme.homepage_link_color),
            title_color: attr(theme.title_color),
            title_shadow: attr(theme.title_shadow),
            hover_color: attr(theme.hover_color),
            active_color: attr(theme.active_color),
            nav_link_color: attr(theme.nav_link_color),
            highlight_color: attr(theme.highlight_color),
            auxiliary_color: attr(theme.auxiliary_color),
            border_color: attr(theme.border_color),
            card_color: attr(theme.card_color),
            card_link_color: attr(theme.card_link_color),
            card_header_color: attr(theme.card_header_color),
            card_info_color: attr(theme.card_info_color),
            input_color: attr(theme.input_color),
            input_caret_color: attr(theme.input_caret_color),
            input_border_color: attr(theme.input_border_color),
            input_label_color: attr(theme.input_label_color),
            input_autofill_color: attr(theme.input_autofill_color),
            cv_header_color: attr(theme.cv_header_color),
            cv_subheader_color: attr(theme.cv_subheader_color),
            cv_interface_color: attr(theme.cv_interface_color),
            cv_border_color: attr(theme.cv_border_color),
            blog_syntax_color: attr(theme.blog_syntax_color),
            overlay5: attr(theme.overlay5),
            overlay10: attr(theme.overlay10),
            overlay15: attr(theme.overlay15),
        }
    }
}

impl From<ThemeName> for Theme {
    fn from(value: ThemeName) -> Self {
        match value {
            ThemeName::Light => RawTheme::light(),
            ThemeName::Dark => RawTheme::dark(),
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back_to_themselves() {
        for name in ThemeName::ALL {
            assert_eq!(ThemeName::try_from(name.as_str()), Ok(name));
            assert_eq!(Theme::from(name).id, name);
        }
    }

    #[test]
    fn unknown_and_differently_cased_names_are_rejected() {
        for value in ["blue", "", "Dark", " light", "pastel"] {
            assert_eq!(
                ThemeName::try_from(value),
                Err(UnknownTheme(value.to_owned()))
            );
        }
    }

    #[test]
    fn dark_is_the_default() {
        assert_eq!(ThemeName::default(), ThemeName::Dark);
    }

    #[test]
    fn palettes_differ_where_it_shows() {
        let light = Theme::from(ThemeName::Light);
        let dark = Theme::from(ThemeName::Dark);

        assert_ne!(light.background, dark.background);
        assert_ne!(light.copy_color, dark.copy_color);
        assert_eq!(light.border_color, dark.border_color);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use yew::AttrValue;
