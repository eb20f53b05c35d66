//! Theme for the card
//! A single crimson page with white cards and pink accents

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette
// ============================================================================

/// Page background (crimson)
pub const PAGE_BG: Color = color!(0xb0183d);
/// Card surfaces
pub const CARD_BG: Color = color!(0xffffff);
/// Body text on white cards
pub const TEXT_DARK: Color = color!(0x1f2937);
/// Heading above the social grid
pub const TEXT_CREAM: Color = color!(0xfcedd8);
/// Plea line in the apology dialog
pub const TEXT_ALERT: Color = color!(0xef4444);

/// Player panel background
pub const PINK_300: Color = color!(0xf9a8d4);
/// Skip buttons
pub const PINK_400: Color = color!(0xf472b6);
/// Play button icon
pub const PINK_500: Color = color!(0xec4899);
/// Slider accent
pub const ACCENT_PINK: Color = color!(0xe23c64);

/// Dialog body
pub const DIALOG_BG: Color = color!(0xf5f5f7);
/// Dialog frame and title bar
pub const DIALOG_FRAME: Color = color!(0xe8e8ea);

/// Title bar dots
pub const DOT_RED: Color = color!(0xef4444);
pub const DOT_YELLOW: Color = color!(0xfacc15);
pub const DOT_GREEN: Color = color!(0x22c55e);

/// Bold font for headings and buttons
pub fn bold() -> iced::Font {
    iced::Font {
        weight: iced::font::Weight::Bold,
        ..Default::default()
    }
}

/// Mix a color towards white by `amount` (0.0 to 1.0)
pub fn lighten(color: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    Color {
        r: color.r + (1.0 - color.r) * amount,
        g: color.g + (1.0 - color.g) * amount,
        b: color.b + (1.0 - color.b) * amount,
        a: color.a,
    }
}

fn soft_shadow(alpha: f32, blur: f32) -> Shadow {
    Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, alpha),
        offset: Vector::new(0.0, 4.0),
        blur_radius: blur,
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Whole-window background
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PAGE_BG)),
        text_color: Some(TEXT_DARK),
        ..Default::default()
    }
}

/// The white card holding photo, message and player
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(CARD_BG)),
        text_color: Some(TEXT_DARK),
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        shadow: soft_shadow(0.15, 16.0),
        ..Default::default()
    }
}

/// Pink panel holding the player controls
pub fn player_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PINK_300)),
        text_color: Some(TEXT_DARK),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Title bar dot
pub fn dot(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: 7.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Round skip button
pub fn skip_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => lighten(PINK_400, 0.15),
        button::Status::Pressed => PINK_500,
        _ => PINK_400,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: Color::WHITE,
        border: Border {
            radius: 100.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round white play/pause button
pub fn play_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => color!(0xfdf2f8),
        _ => CARD_BG,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: PINK_500,
        border: Border {
            radius: 100.0.into(),
            ..Default::default()
        },
        shadow: soft_shadow(0.12, 8.0),
        ..Default::default()
    }
}

/// Outlined dialog button ("I don't forgive you")
pub fn outline_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => lighten(PAGE_BG, 0.9),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: PAGE_BG,
        border: Border {
            radius: 8.0.into(),
            width: 2.0,
            color: PAGE_BG,
        },
        ..Default::default()
    }
}

/// Filled dialog button ("I forgive you")
pub fn filled_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => lighten(PAGE_BG, 0.12),
        _ => PAGE_BG,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Social link tile; `hover` is the hover animation progress (0.0 to 1.0)
pub fn link_tile(hover: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, _status| button::Style {
        background: Some(Background::Color(CARD_BG)),
        text_color: TEXT_DARK,
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        shadow: soft_shadow(0.12 + 0.1 * hover, 8.0 + 8.0 * hover),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighten_bounds() {
        assert_eq!(lighten(PAGE_BG, 0.0), PAGE_BG);
        let white = lighten(PAGE_BG, 1.0);
        assert!((white.r - 1.0).abs() < 1e-6);
        assert!((white.g - 1.0).abs() < 1e-6);
        assert!((white.b - 1.0).abs() < 1e-6);
        assert_eq!(lighten(PAGE_BG, 5.0), white);
    }
}
