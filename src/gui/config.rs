use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 320.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const WIDGET_GAP: f32 = 20.;

    pub const MAX_FPS: f64 = 30.;
    pub const FIELD_SIDE: u32 = 128;
    pub const MIN_FIELD_SIDE: u32 = 8;
    pub const MAX_FIELD_SIDE: u32 = 512;
    pub const FILL_THRESHOLD: f64 = 0.3;

    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(0, 0xff, 0xff);
    pub const DEAD_COLOR: Color32 = Color32::BLACK;
    pub const BARE_COLOR: Color32 = Color32::from_rgb(0x30, 0x20, 0x10);
}
