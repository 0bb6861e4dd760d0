//! Adaptive styles that respond to system color mode.

use std::sync::{Arc, PoisonError, RwLock};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

use super::style::Style;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Interprets a style's theme identifier, e.g. `"dark"`.
    pub fn from_theme(theme: &str) -> Option<ColorMode> {
        if theme.eq_ignore_ascii_case("light") {
            Some(ColorMode::Light)
        } else if theme.eq_ignore_ascii_case("dark") {
            Some(ColorMode::Dark)
        } else {
            None
        }
    }
}

/// A pair of styles, one per color mode.
///
/// The variant is picked by the process-wide color-mode detector (see
/// [`set_theme_detector`]). When the detector has no answer the pair uses
/// its fallback mode, which defaults to light.
///
/// # Example
///
/// ```rust
/// use tokenstyle::{AdaptiveStyle, StyleBuilder, TokenType};
///
/// let light = StyleBuilder::new("paper", "light")
///     .add(TokenType::Background, "bg:#ffffff #000000")
///     .build()
///     .unwrap();
/// let dark = StyleBuilder::new("ink", "dark")
///     .add(TokenType::Background, "bg:#000000 #ffffff")
///     .build()
///     .unwrap();
///
/// let adaptive = AdaptiveStyle::new(light, dark);
/// let style = adaptive.resolve();
/// assert!(style.name() == "paper" || style.name() == "ink");
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveStyle {
    light: Arc<Style>,
    dark: Arc<Style>,
    fallback: ColorMode,
}

impl AdaptiveStyle {
    /// Creates an adaptive style with separate light and dark variants.
    pub fn new(light: Arc<Style>, dark: Arc<Style>) -> Self {
        Self {
            light,
            dark,
            fallback: ColorMode::Light,
        }
    }

    /// Pairs two styles using their theme identifiers.
    ///
    /// The first style's mode becomes the fallback. Returns `None` unless
    /// one style is `"light"` and the other `"dark"`.
    pub fn from_pair(preferred: Arc<Style>, other: Arc<Style>) -> Option<Self> {
        let mode = ColorMode::from_theme(preferred.theme())?;
        let pair = match (mode, ColorMode::from_theme(other.theme())?) {
            (ColorMode::Light, ColorMode::Dark) => Self::new(preferred, other),
            (ColorMode::Dark, ColorMode::Light) => Self::new(other, preferred),
            _ => return None,
        };
        Some(pair.with_fallback(mode))
    }

    /// Sets the mode used when the detector cannot tell.
    pub fn with_fallback(mut self, mode: ColorMode) -> Self {
        self.fallback = mode;
        self
    }

    /// The variant for `mode`.
    pub fn for_mode(&self, mode: ColorMode) -> &Arc<Style> {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// Resolves to the variant matching the current color mode.
    pub fn resolve(&self) -> Arc<Style> {
        let mode = detect_color_mode().unwrap_or(self.fallback);
        Arc::clone(self.for_mode(mode))
    }
}

/// Reports the preferred color mode, or `None` when there is no preference.
pub type ColorModeDetector = fn() -> Option<ColorMode>;

static DETECTOR: Lazy<RwLock<ColorModeDetector>> = Lazy::new(|| RwLock::new(os_color_mode));

/// Replaces the color-mode probe used by [`AdaptiveStyle::resolve`].
///
/// The default probe asks the OS. Return `None` to defer to each
/// [`AdaptiveStyle`]'s fallback mode.
pub fn set_theme_detector(detector: ColorModeDetector) {
    *DETECTOR.write().unwrap_or_else(PoisonError::into_inner) = detector;
}

/// Restores the OS color-mode probe.
pub fn reset_theme_detector() {
    set_theme_detector(os_color_mode);
}

fn detect_color_mode() -> Option<ColorMode> {
    let detector = *DETECTOR.read().unwrap_or_else(PoisonError::into_inner);
    let mode = detector();
    tracing::trace!(?mode, "detected color mode");
    mode
}

fn os_color_mode() -> Option<ColorMode> {
    Some(match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    })
}
