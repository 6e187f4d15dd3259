use image::Rgba;

/// Width used when a non-positive pen width is supplied
pub const DEFAULT_PEN_WIDTH: i32 = 10;

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Snapshot of the pen applied to a stroke when it is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenStyle {
    width: f32,
    color: Rgba<u8>,
    anti_alias: bool,
}

impl Default for PenStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_PEN_WIDTH as f32,
            color: BLACK,
            anti_alias: true,
        }
    }
}

impl PenStyle {
    pub fn new(width_px: i32, color: Rgba<u8>) -> Self {
        Self {
            width: Self::clamp_width(width_px) as f32,
            color,
            anti_alias: true,
        }
    }

    /// Returns `px` when positive, otherwise the default width
    pub fn clamp_width(px: i32) -> i32 {
        if px > 0 { px } else { DEFAULT_PEN_WIDTH }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_width(&mut self, width_px: i32) {
        self.width = Self::clamp_width(width_px) as f32;
    }

    pub fn color(&self) -> Rgba<u8> {
        self.color
    }

    pub fn set_color(&mut self, color: Rgba<u8>) {
        self.color = color;
    }

    pub fn anti_alias(&self) -> bool {
        self.anti_alias
    }

    pub fn set_anti_alias(&mut self, anti_alias: bool) {
        self.anti_alias = anti_alias;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_width_falls_back_to_default() {
        assert_eq!(PenStyle::new(0, BLACK).width(), 10.0);
        assert_eq!(PenStyle::new(-4, BLACK).width(), 10.0);
        assert_eq!(PenStyle::new(20, BLACK).width(), 20.0);

        let mut pen = PenStyle::default();
        pen.set_width(-1);
        assert_eq!(pen.width(), 10.0);
    }

    #[test]
    fn test_default_pen() {
        let pen = PenStyle::default();
        assert_eq!(pen.color(), BLACK);
        assert!(pen.anti_alias());
    }
}
