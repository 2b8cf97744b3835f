use attitude::Attitude;
use bevy_ecs::system::Resource;
use egui::Color32;

/// Inclusive degree interval used by the advisory range filters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeRange {
    pub min: f32,
    pub max: f32,
}

impl DegreeRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Perspective,
    Orthographic,
    Isometric,
}

impl Projection {
    pub const ALL: [Projection; 3] = [
        Projection::Perspective,
        Projection::Orthographic,
        Projection::Isometric,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Projection::Perspective => "Perspective",
            Projection::Orthographic => "Orthographic",
            Projection::Isometric => "Isometric",
        }
    }
}

/// Colours for one overlay set: the three orientation lines, the plane
/// patch and the index-keyed point markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub strike: Color32,
    pub dip: Color32,
    pub normal: Color32,
    pub plane: Color32,
    pub points: [Color32; 3],
    pub text: Color32,
}

const GEOLOGICAL: Palette = Palette {
    strike: Color32::from_rgb(0xff, 0x44, 0x44),
    dip: Color32::from_rgb(0x44, 0xff, 0x44),
    normal: Color32::from_rgb(0xff, 0xff, 0x44),
    plane: Color32::from_rgb(0x44, 0x44, 0xff),
    points: [
        Color32::from_rgb(0xff, 0x00, 0x00),
        Color32::from_rgb(0x00, 0xff, 0x00),
        Color32::from_rgb(0x00, 0x00, 0xff),
    ],
    text: Color32::WHITE,
};

const MONOCHROME: Palette = Palette {
    strike: Color32::from_rgb(0xff, 0xff, 0xff),
    dip: Color32::from_rgb(0xcc, 0xcc, 0xcc),
    normal: Color32::from_rgb(0x99, 0x99, 0x99),
    plane: Color32::from_rgb(0x66, 0x66, 0x66),
    points: [
        Color32::from_rgb(0xff, 0xff, 0xff),
        Color32::from_rgb(0xcc, 0xcc, 0xcc),
        Color32::from_rgb(0x99, 0x99, 0x99),
    ],
    text: Color32::WHITE,
};

const RAINBOW: Palette = Palette {
    strike: Color32::from_rgb(0xff, 0x00, 0x00),
    dip: Color32::from_rgb(0x00, 0xff, 0x00),
    normal: Color32::from_rgb(0x00, 0x00, 0xff),
    plane: Color32::from_rgb(0xff, 0xff, 0x00),
    points: [
        Color32::from_rgb(0xff, 0x00, 0x00),
        Color32::from_rgb(0x00, 0xff, 0x00),
        Color32::from_rgb(0x00, 0x00, 0xff),
    ],
    text: Color32::WHITE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourScheme {
    Geological,
    Monochrome,
    Rainbow,
}

impl ColourScheme {
    pub const ALL: [ColourScheme; 3] = [
        ColourScheme::Geological,
        ColourScheme::Monochrome,
        ColourScheme::Rainbow,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColourScheme::Geological => "Geological",
            ColourScheme::Monochrome => "Monochrome",
            ColourScheme::Rainbow => "Rainbow",
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            ColourScheme::Geological => &GEOLOGICAL,
            ColourScheme::Monochrome => &MONOCHROME,
            ColourScheme::Rainbow => &RAINBOW,
        }
    }
}

/// User-adjustable display state, mutated in place by the control panels
/// and read fresh every frame. Never persisted.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DisplayFilters {
    pub strike_range: DegreeRange,
    pub dip_range: DegreeRange,
    pub dip_direction_range: DegreeRange,
    pub point_size: f32,
    pub plane_opacity: f32,
    pub show_strike_line: bool,
    pub show_dip_line: bool,
    pub show_normal: bool,
    pub show_grid: bool,
    pub show_axes: bool,
    pub projection: Projection,
    pub colour_scheme: ColourScheme,
}

impl Default for DisplayFilters {
    fn default() -> Self {
        Self {
            strike_range: DegreeRange::new(0.0, 360.0),
            dip_range: DegreeRange::new(0.0, 90.0),
            dip_direction_range: DegreeRange::new(0.0, 360.0),
            point_size: 0.1,
            plane_opacity: 0.6,
            show_strike_line: true,
            show_dip_line: true,
            show_normal: true,
            show_grid: true,
            show_axes: true,
            projection: Projection::Perspective,
            colour_scheme: ColourScheme::Geological,
        }
    }
}

impl DisplayFilters {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether an attitude triple passes the three range filters. Advisory
    /// only: callers dim or suppress derived overlays, never the raw data.
    pub fn admits(&self, attitude: &Attitude) -> bool {
        self.strike_range.contains(attitude.strike_deg)
            && self.dip_range.contains(attitude.dip_deg)
            && self.dip_direction_range.contains(attitude.dip_direction_deg)
    }
}
