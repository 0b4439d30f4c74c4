/// The external dark/light signal, reduced to what the scene needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// A passive view onto the surrounding chrome's theme state. The scene only
/// ever reads it; it never drives theme changes. Polled by
/// `Controller::observe_theme`.
pub trait ThemeSource {
    fn is_dark(&self) -> bool;
}

impl ThemeSource for bool {
    fn is_dark(&self) -> bool {
        *self
    }
}

/// Theme-dependent chrome colors for the graph surface. Node fills come
/// from [`crate::catalog::NodeStyle`]; everything that is not type-derived
/// lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub edge: &'static str,
    pub edge_label: &'static str,
    pub text_outline: &'static str,
    pub select_border: &'static str,
    pub highlight_edge: &'static str,
    pub search_border: &'static str,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                edge: "rgba(0,0,0,0.15)",
                edge_label: "rgba(0,0,0,0.4)",
                text_outline: "#F5F5F0",
                select_border: "#0F172A",
                highlight_edge: "rgba(0,0,0,0.5)",
                search_border: "#FBBF24",
            },
            Theme::Dark => Palette {
                edge: "rgba(255,255,255,0.22)",
                edge_label: "rgba(255,255,255,0.5)",
                text_outline: "#2B2A27",
                select_border: "#F8FAFC",
                highlight_edge: "rgba(255,255,255,0.6)",
                search_border: "#FBBF24",
            },
        }
    }
}
