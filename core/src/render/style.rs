use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const BLUE: Rgb = Rgb::new(31, 119, 180);
    pub const RED: Rgb = Rgb::new(214, 39, 40);
    pub const GREEN: Rgb = Rgb::new(44, 160, 44);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to `[0, 1]`.
    pub fn to_unit(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerShape {
    Circle,
    Cross,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    /// Radius in device pixels.
    pub radius: f32,
    pub color: Rgb,
    pub alpha: f32,
    pub outline: Option<Rgb>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Rgb,
    pub width: f32,
    pub dashed: bool,
}

/// Palette for the three marker kinds and the connectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureStyle {
    pub sensor: MarkerStyle,
    pub cluster_head: MarkerStyle,
    pub base_station: MarkerStyle,
    pub connector: LineStyle,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            sensor: MarkerStyle {
                shape: MarkerShape::Circle,
                radius: 2.5,
                color: Rgb::BLUE,
                alpha: 0.5,
                outline: None,
            },
            cluster_head: MarkerStyle {
                shape: MarkerShape::Circle,
                radius: 5.0,
                color: Rgb::RED,
                alpha: 1.0,
                outline: Some(Rgb::BLACK),
            },
            base_station: MarkerStyle {
                shape: MarkerShape::Cross,
                radius: 7.0,
                color: Rgb::GREEN,
                alpha: 1.0,
                outline: None,
            },
            connector: LineStyle {
                color: Rgb::GRAY,
                width: 1.5,
                dashed: true,
            },
        }
    }
}
