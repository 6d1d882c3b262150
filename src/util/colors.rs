use ratatui::style::Color;

/// Band blue used for the splash panels.
pub const PANEL: Color = Color::Rgb(51, 135, 186);
pub const PRIMARY: Color = Color::from_u32(0x0077bbdd);
pub const SECONDARY: Color = Color::from_u32(0x00e8a0bf);
pub const NEUTRAL: Color = Color::from_u32(0x00505050);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d0d);
pub const FAVORITE: Color = Color::from_u32(0x00e0445a);
pub const LOGO: Color = Color::from_u32(0x00f5f5f5);
pub const ACCENT: Color = Color::from_u32(0x00feca88);

/// Mixes `color` over `background` at `opacity` (0 = background only).
/// Non-RGB colors are returned unchanged above half opacity.
pub fn fade(color: Color, background: Color, opacity: f64) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (color, background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let mix = |c: u8, bc: u8| (bc as f64 + (c as f64 - bc as f64) * opacity).round() as u8;
            Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
        }
        _ if opacity >= 0.5 => color,
        _ => background,
    }
}
