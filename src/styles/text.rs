#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSize {
    Xxs,
    Xs,
    /// Small paragraph
    Ps,
    /// Big paragraph
    Pb,
    M,
    L,
    Xl,
    Xxl,
    Xxxl,
    X4l,
    X5l,
}

struct Scale {
    px: u32,
    line_height: &'static str,
    wider: &'static [(Media, u32)],
    print: Option<u32>,
    caps: bool,
}

impl Scale {
    fn new(
        px: u32,
        line_height: &'static str,
        wider: &'static [(Media, u32)],
        print: Option<u32>,
    ) -> Self {
        Self {
            px,
            line_height,
            wider,
            print,
            caps: false,
        }
    }

    fn caps(self) -> Self {
        Self { caps: true, ..self }
    }
}

impl TextSize {
    fn scale(&self) -> Scale {
        use Media::*;

        match self {
            Self::Xxs => Scale::new(10, "1.8", &[], None).caps(),
            Self::Xs => Scale::new(12, "1.667", &[], Some(10)).caps(),
            Self::Ps => Scale::new(16, "1.5", &[], Some(14)),
            Self::Pb => Scale::new(18, "1.8", &[], Some(16)),
            Self::M => Scale::new(18, "1.5", &[(Desktop, 20)], Some(16)),
            Self::L => Scale::new(20, "1.4", &[(Desktop, 22)], Some(18)),
            Self::Xl => Scale::new(24, "1.334", &[(Desktop, 28)], Some(20)),
            Self::Xxl => Scale::new(28, "1.214", &[(Desktop, 34)], Some(24)),
            Self::Xxxl => Scale::new(32, "1.25", &[(Desktop, 40)], Some(28)),
            Self::X4l => Scale::new(38, "1.211", &[(Desktop, 44)], Some(32)),
            Self::X5l => Scale::new(40, "1.2", &[(Tablet, 72), (Desktop, 88)], Some(38)),
        }
    }

    /// CSS declarations for this size, media queries included.
    pub fn css(&self) -> String {
        let scale = self.scale();
        let mut out = font_size(scale.px);

        out.push_str(&format!(" line-height: {};", scale.line_height));

        if scale.caps {
            out.push_str(" letter-spacing: 2px; text-transform: uppercase;");
        }

        for (at, px) in scale.wider {
            out.push(' ');
            out.push_str(&media(*at, &font_size(*px)));
        }

        if let Some(px) = scale.print {
            out.push(' ');
            out.push_str(&media(Media::Print, &font_size(px)));
        }

        out
    }
}

// px first for browsers without rem support
fn font_size(px: u32) -> String {
    format!("font-size: {}px; font-size: {};", px, px_to_rem(px))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_caps_sizes_are_uppercase() {
        let css = TextSize::Xxs.css();
        assert!(css.starts_with("font-size: 10px; font-size: 0.625rem;"));
        assert!(css.contains("text-transform: uppercase;"));
        assert!(!css.contains("@media"));
    }

    #[test]
    fn large_sizes_grow_with_the_viewport() {
        let css = TextSize::X5l.css();

        let tablet = css.find("@media (min-width: 768px)").unwrap();
        let desktop = css.find("@media (min-width: 1024px)").unwrap();
        let print = css.find("@media print { font-size: 38px;").unwrap();

        assert!(tablet < desktop && desktop < print);
    }
}

use super::media::{media, px_to_rem, Media};
