use log::{debug, error};
use stylist::GlobalStyle;
use yew::prelude::*;

pub const PRIMARY: &str = "#0EA5E9"; // Electric blue
pub const PRIMARY_DARK: &str = "#0284C7";
pub const SECONDARY: &str = "#8B5CF6"; // Violet accents
pub const FONT_DISPLAY: &str = "\"Space Grotesk\", sans-serif";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Material symbol for the toggle button: shows the mode you switch to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "dark_mode",
            Theme::Dark => "light_mode",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: "#0B1121",
                surface: "#151E32",
                surface_highlight: "#1E293B",
                text_main: "#F8FAFC",
                text_muted: "#94A3B8",
                border: "rgba(255, 255, 255, 0.06)",
            },
            Theme::Light => Palette {
                background: "#F5F8F8",
                surface: "#FFFFFF",
                surface_highlight: "#E2E8F0",
                text_main: "#0F172A",
                text_muted: "#64748B",
                border: "#E2E8F0",
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub surface_highlight: &'static str,
    pub text_main: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
}

/// Global stylesheet for `theme`: palette and radii as custom properties plus
/// the document-level defaults every variant relies on.
pub fn global_css(theme: Theme) -> String {
    let p = theme.palette();
    format!(
        r#"
        :root {{
            --color-primary: {primary};
            --color-primary-dark: {primary_dark};
            --color-secondary: {secondary};
            --color-background: {background};
            --color-surface: {surface};
            --color-surface-highlight: {surface_highlight};
            --color-text-main: {text_main};
            --color-text-muted: {text_muted};
            --color-border: {border};
            --radius: 0.5rem;
            --radius-lg: 1rem;
            --radius-xl: 1.5rem;
            --radius-full: 9999px;
            --font-display: {font};
        }}
        html, body {{
            margin: 0;
            padding: 0;
            background: {background};
            color: {text_main};
            font-family: {font};
            -webkit-font-smoothing: antialiased;
        }}
        *, *::before, *::after {{
            box-sizing: border-box;
        }}
        a {{
            color: inherit;
            text-decoration: none;
        }}
        button {{
            font-family: inherit;
        }}
        "#,
        primary = PRIMARY,
        primary_dark = PRIMARY_DARK,
        secondary = SECONDARY,
        background = p.background,
        surface = p.surface,
        surface_highlight = p.surface_highlight,
        text_main = p.text_main,
        text_muted = p.text_muted,
        border = p.border,
        font = FONT_DISPLAY,
    )
}

/// Mounts the global stylesheet for `theme`, replacing the previous one when
/// the theme changes.
#[hook]
pub fn use_theme_stylesheet(theme: Theme) {
    use_effect_with_deps(
        move |theme| {
            let sheet = match GlobalStyle::new(global_css(*theme)) {
                Ok(sheet) => {
                    debug!("Mounted {} theme stylesheet", theme.class_name());
                    Some(sheet)
                }
                Err(e) => {
                    error!("Failed to build theme stylesheet: {}", e);
                    None
                }
            };
            move || {
                if let Some(sheet) = sheet {
                    sheet.unregister();
                }
            }
        },
        theme,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggle(), theme);
            assert_eq!(theme.toggle().toggle(), theme);
        }
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_css_carries_active_palette() {
        let dark = global_css(Theme::Dark);
        assert!(dark.contains("--color-background: #0B1121;"));
        assert!(dark.contains("--color-primary: #0EA5E9;"));
        assert!(!dark.contains("#F5F8F8"));

        let light = global_css(Theme::Light);
        assert!(light.contains("--color-background: #F5F8F8;"));
        assert!(light.contains("--color-text-main: #0F172A;"));
    }

    #[test]
    fn test_css_has_radii_and_font() {
        let css = global_css(Theme::Light);
        assert!(css.contains("--radius-xl: 1.5rem;"));
        assert!(css.contains("--radius-full: 9999px;"));
        assert!(css.contains("Space Grotesk"));
    }
}
