// Responsive mixins. Rules are written mobile first and widened with
// `media(Media::Tablet, ...)` and friends.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Media {
    Tablet,
    Desktop,
    DesktopWide,
    Print,
}

impl Media {
    /// Minimum viewport width in pixels, `None` for print.
    pub fn breakpoint(&self) -> Option<u32> {
        match self {
            Self::Tablet => Some(768),
            Self::Desktop => Some(1024),
            Self::DesktopWide => Some(1440),
            Self::Print => None,
        }
    }

    pub fn query(&self) -> String {
        match self.breakpoint() {
            Some(width) => format!("@media (min-width: {}px)", width),
            None => "@media print".to_owned(),
        }
    }
}

pub fn media(at: Media, rules: &str) -> String {
    format!("{} {{ {} }}", at.query(), rules.trim())
}

pub const BASE_FONT_SIZE: u32 = 16;

pub fn px_to_rem(px: u32) -> String {
    format!("{}rem", px as f32 / BASE_FONT_SIZE as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_grow() {
        let widths: Vec<_> = [Media::Tablet, Media::Desktop, Media::DesktopWide]
            .iter()
            .filter_map(Media::breakpoint)
            .collect();

        assert!(widths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn media_wraps_rules() {
        assert_eq!(
            media(Media::Tablet, "\n  padding: 1em;\n"),
            "@media (min-width: 768px) { padding: 1em; }"
        );
        assert_eq!(
            media(Media::Print, "display: none;"),
            "@media print { display: none; }"
        );
    }

    #[test]
    fn rem_conversion_uses_16px_base() {
        assert_eq!(px_to_rem(16), "1rem");
        assert_eq!(px_to_rem(18), "1.125rem");
        assert_eq!(px_to_rem(10), "0.625rem");
    }
}
