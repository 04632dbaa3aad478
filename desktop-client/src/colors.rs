use eframe::egui;
use snake_common::games::snake::PlayerSlot;

pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x12, 0x16, 0x1c);
pub const GRID_LINE: egui::Color32 = egui::Color32::from_rgba_premultiplied(0x33, 0x33, 0x33, 0x33);

pub fn body_color(slot: PlayerSlot) -> egui::Color32 {
    match slot {
        PlayerSlot::One => egui::Color32::from_rgb(50, 205, 50),
        PlayerSlot::Two => egui::Color32::from_rgb(0, 0, 255),
        PlayerSlot::Ai => egui::Color32::from_rgb(128, 0, 128),
    }
}

pub fn head_color(slot: PlayerSlot) -> egui::Color32 {
    match slot {
        PlayerSlot::One => egui::Color32::YELLOW,
        PlayerSlot::Two | PlayerSlot::Ai => egui::Color32::from_rgb(255, 165, 0),
    }
}

/// Fully saturated colour at 50% lightness for a hue in degrees.
pub fn color_from_hue(hue: f32) -> egui::Color32 {
    let hue = hue.rem_euclid(360.0);
    let saturation = 1.0_f32;
    let lightness = 0.5_f32;

    let c = (1.0_f32 - (2.0_f32 * lightness - 1.0_f32).abs()) * saturation;
    let x = c * (1.0_f32 - ((hue / 60.0_f32) % 2.0_f32 - 1.0_f32).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = if hue < 60.0 {
        (c, x, 0.0)
    } else if hue < 120.0 {
        (x, c, 0.0)
    } else if hue < 180.0 {
        (0.0, c, x)
    } else if hue < 240.0 {
        (0.0, x, c)
    } else if hue < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    egui::Color32::from_rgb(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(color_from_hue(0.0), egui::Color32::from_rgb(255, 0, 0));
        assert_eq!(color_from_hue(120.0), egui::Color32::from_rgb(0, 255, 0));
        assert_eq!(color_from_hue(240.0), egui::Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(color_from_hue(360.0), color_from_hue(0.0));
    }
}
