//! Studio theme: palette, spacing constants, and widget styles.
//!
//! Style functions receive `&Theme` and read from Iced's extended palette,
//! supplemented by the [`StudioColors`] extension trait for colors the
//! palette does not cover.

use iced::theme::Palette;
use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

// =============================================================================
// BORDERS
// =============================================================================

/// Small radius - buttons, inputs, chips
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Thin border - subtle separators
pub const BORDER_WIDTH_THIN: f32 = 1.0;

/// Medium border - focus rings
pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the studio theme.
pub fn studio_theme() -> Theme {
    Theme::custom(
        "Studio Light".to_string(),
        Palette {
            background: Color::from_rgb(0.98, 0.98, 0.99),
            text: Color::from_rgb(0.10, 0.10, 0.12),
            primary: Color::from_rgb(0.12, 0.44, 0.70),
            success: Color::from_rgb(0.20, 0.70, 0.40),
            warning: Color::from_rgb(0.95, 0.65, 0.05),
            danger: Color::from_rgb(0.85, 0.25, 0.25),
        },
    )
}

// =============================================================================
// STUDIO COLOR SET
// =============================================================================

/// App-specific colors not covered by Iced's `ExtendedPalette`.
#[derive(Debug, Clone, Copy)]
pub struct StudioColorSet {
    /// Light tint of the primary accent (hover backgrounds)
    pub accent_primary_light: Color,
    /// Medium tint of the primary accent (selections)
    pub accent_primary_medium: Color,
    /// Accent hover color
    pub accent_hover: Color,
    /// Accent pressed color
    pub accent_pressed: Color,
    /// Accent disabled color
    pub accent_disabled: Color,
    /// Secondary background (cards, surfaces)
    pub background_secondary: Color,
    /// Elevated surface (cards, dropdowns)
    pub background_elevated: Color,
    /// Default border color
    pub border_default: Color,
    /// Subtle/lighter border
    pub border_subtle: Color,
    /// Focused element border
    pub border_focused: Color,
    /// Error border color
    pub border_error: Color,
    /// Error status light background
    pub status_error_light: Color,
    /// Secondary text color
    pub text_secondary: Color,
    /// Muted text (descriptions, hints)
    pub text_muted: Color,
    /// Disabled text
    pub text_disabled: Color,
    /// Text on accent color backgrounds
    pub text_on_accent: Color,
    /// Shadow color for elevation
    pub shadow: Color,
    /// Strong shadow for higher elevation
    pub shadow_strong: Color,
}

/// Extension trait for studio-specific colors.
pub trait StudioColors {
    /// Get the studio color set for this theme.
    fn studio(&self) -> StudioColorSet;
}

impl StudioColors for Theme {
    fn studio(&self) -> StudioColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;
        let primary = palette.primary.base.color;
        let danger = palette.danger.base.color;

        StudioColorSet {
            accent_primary_light: if is_dark {
                Color::from_rgba(primary.r, primary.g, primary.b, 0.15)
            } else {
                blend_color(primary, Color::WHITE, 0.88)
            },
            accent_primary_medium: if is_dark {
                Color::from_rgba(primary.r, primary.g, primary.b, 0.25)
            } else {
                blend_color(primary, Color::WHITE, 0.70)
            },
            accent_hover: blend_color(primary, Color::BLACK, 0.12),
            accent_pressed: blend_color(primary, Color::BLACK, 0.25),
            accent_disabled: blend_color(primary, Color::WHITE, 0.60),
            background_secondary: palette.background.weak.color,
            background_elevated: if is_dark {
                Color::from_rgb(0.16, 0.16, 0.18)
            } else {
                Color::WHITE
            },
            border_default: palette.background.strong.color,
            border_subtle: if is_dark {
                Color::from_rgb(0.20, 0.20, 0.22)
            } else {
                Color::from_rgb(0.90, 0.90, 0.93)
            },
            border_focused: primary,
            border_error: danger,
            status_error_light: if is_dark {
                Color::from_rgba(danger.r, danger.g, danger.b, 0.15)
            } else {
                blend_color(danger, Color::WHITE, 0.85)
            },
            text_secondary: if is_dark {
                Color::from_rgb(0.80, 0.80, 0.85)
            } else {
                Color::from_rgb(0.30, 0.30, 0.35)
            },
            text_muted: if is_dark {
                Color::from_rgb(0.60, 0.60, 0.65)
            } else {
                Color::from_rgb(0.50, 0.50, 0.55)
            },
            text_disabled: if is_dark {
                Color::from_rgb(0.45, 0.45, 0.50)
            } else {
                Color::from_rgb(0.70, 0.70, 0.75)
            },
            text_on_accent: Color::WHITE,
            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
            shadow_strong: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
        }
    }
}

/// Linear blend of two colors; `amount` is the share of `other`.
fn blend_color(base: Color, other: Color, amount: f32) -> Color {
    Color::from_rgb(
        base.r + (other.r - base.r) * amount,
        base.g + (other.g - base.g) * amount,
        base.b + (other.b - base.b) * amount,
    )
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    let base = button::Style {
        background: Some(palette.primary.base.color.into()),
        text_color: studio.text_on_accent,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: studio.shadow,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(studio.accent_hover.into()),
            shadow: Shadow {
                color: studio.shadow_strong,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(studio.accent_pressed.into()),
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(studio.accent_disabled.into()),
            text_color: studio.text_muted,
            shadow: Shadow::default(),
            ..base
        },
    }
}

/// Ghost button style - low-emphasis actions (clear, suggestion entries).
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    let base = button::Style {
        background: None,
        text_color: palette.primary.base.color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        ..Default::default()
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(studio.accent_primary_light.into()),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(studio.accent_primary_medium.into()),
            text_color: studio.accent_pressed,
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: studio.text_disabled,
            ..base
        },
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container style - elevated surface.
pub fn container_card(theme: &Theme) -> container::Style {
    let studio = theme.studio();

    container::Style {
        background: Some(studio.background_elevated.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: BORDER_WIDTH_THIN,
            color: studio.border_subtle,
        },
        shadow: Shadow {
            color: studio.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Error banner container style.
pub fn container_error(theme: &Theme) -> container::Style {
    let studio = theme.studio();

    container::Style {
        background: Some(studio.status_error_light.into()),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: BORDER_WIDTH_THIN,
            color: studio.border_error,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    let base = text_input::Style {
        background: studio.background_elevated.into(),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: BORDER_WIDTH_THIN,
            color: studio.border_default,
        },
        icon: studio.text_muted,
        placeholder: studio.text_disabled,
        value: palette.background.base.text,
        selection: studio.accent_primary_medium,
    };

    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            border: Border {
                color: studio.text_disabled,
                ..base.border
            },
            ..base
        },
        text_input::Status::Focused { .. } => text_input::Style {
            border: Border {
                width: BORDER_WIDTH_MEDIUM,
                color: studio.border_focused,
                ..base.border
            },
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            background: studio.background_secondary.into(),
            icon: studio.text_disabled,
            value: studio.text_muted,
            selection: studio.border_subtle,
            ..base
        },
    }
}
