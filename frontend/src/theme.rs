//! Presentation parameters for the notice pages.
//!
//! Views read the active [`Theme`] through [`use_theme`]. The host can supply
//! its own palette with a `ContextProvider<Theme>`; without one the defaults
//! below are used.

use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub background: AttrValue,
    pub icon: AttrValue,
    pub title: AttrValue,
    pub body: AttrValue,
    pub muted: AttrValue,
    /// Size of one spacing unit in pixels
    pub spacing_px: u32,
    pub icon_size_px: u32,
    pub body_max_width_px: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: AttrValue::Static("#ffffff"),
            icon: AttrValue::Static("#666666"),
            title: AttrValue::Static("#333333"),
            body: AttrValue::Static("#666666"),
            muted: AttrValue::Static("#999999"),
            spacing_px: 8,
            icon_size_px: 120,
            body_max_width_px: 600,
        }
    }
}

impl Theme {
    /// CSS length for `units` spacing units (e.g. 3 -> "24px")
    pub fn spacing(&self, units: u32) -> String {
        format!("{}px", units * self.spacing_px)
    }

    pub fn container_style(&self) -> String {
        format!(
            "display: flex; flex-direction: column; align-items: center; \
             justify-content: center; min-height: 100vh; text-align: center; \
             background-color: {}; padding: 0 {};",
            self.background,
            self.spacing(3)
        )
    }

    pub fn icon_badge_style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; border-radius: 50%; display: flex; \
             align-items: center; justify-content: center; margin-bottom: {};",
            self.spacing(3),
            size = self.icon_size_px
        )
    }

    pub fn icon_style(&self) -> String {
        format!("font-size: 3rem; margin: 0; color: {};", self.icon)
    }

    pub fn title_style(&self) -> String {
        format!(
            "font-weight: bold; color: {}; margin: 0 0 {};",
            self.title,
            self.spacing(2)
        )
    }

    pub fn body_style(&self) -> String {
        format!(
            "font-size: 1.25rem; color: {}; margin: 0 0 {}; max-width: {}px;",
            self.body,
            self.spacing(4),
            self.body_max_width_px
        )
    }

    pub fn notice_style(&self) -> String {
        format!(
            "font-size: 0.875rem; color: {}; margin: {} 0 0;",
            self.muted,
            self.spacing(2)
        )
    }
}

/// The theme from the nearest `ContextProvider<Theme>`, or the default one.
#[hook]
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_scales_with_unit() {
        let theme = Theme::default();
        assert_eq!(theme.spacing(0), "0px");
        assert_eq!(theme.spacing(3), "24px");

        let compact = Theme {
            spacing_px: 4,
            ..Theme::default()
        };
        assert_eq!(compact.spacing(3), "12px");
    }

    #[test]
    fn test_styles_use_palette() {
        let theme = Theme {
            background: "#101010".into(),
            muted: "#abcdef".into(),
            ..Theme::default()
        };
        assert!(theme.container_style().contains("background-color: #101010"));
        assert!(theme.notice_style().contains("color: #abcdef"));
        assert!(theme.icon_badge_style().contains("width: 120px"));
        assert!(theme.body_style().contains("max-width: 600px"));
    }
}
