//! Chart default styling: the shared series palette and canvas defaults.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const GOLD: Rgb = Rgb::new(0xd4, 0xa8, 0x53);
pub const TEAL: Rgb = Rgb::new(0x2d, 0xd4, 0xbf);
pub const CORAL: Rgb = Rgb::new(0xf9, 0x73, 0x16);
pub const ROSE: Rgb = Rgb::new(0xf4, 0x3f, 0x5e);
pub const BLUE: Rgb = Rgb::new(0x3b, 0x82, 0xf6);
pub const PURPLE: Rgb = Rgb::new(0xa8, 0x55, 0xf7);
pub const GREEN: Rgb = Rgb::new(0x10, 0xb9, 0x81);

/// Series palette in presentation order.
pub const PALETTE: [Rgb; 7] = [GOLD, TEAL, CORAL, ROSE, BLUE, PURPLE, GREEN];

/// Canvas-wide chart defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDefaults {
    pub text_color: Rgb,
    pub border_color: Rgb,
    pub border_alpha: f32,
    pub font_family: &'static str,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            text_color: Rgb::new(0xa1, 0xa1, 0xaa),
            border_color: Rgb::new(0xff, 0xff, 0xff),
            border_alpha: 0.06,
            font_family: "Source Sans 3",
        }
    }
}
