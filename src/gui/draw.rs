use super::{App, Config, DemoKind};
use eframe::egui::{
    load::SizedTexture, Button, ColorImage, DragValue, Image, RichText, Slider, Stroke,
    TextureOptions, Ui,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.is_paused = !self.is_paused;
        }

        if ui
            .add_enabled(self.is_paused, Self::new_button("Next step"))
            .clicked()
        {
            self.do_one_step = true;
        }

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Randomize")).clicked() {
                self.demo.randomize(self.threshold);
            }
            ui.label(Self::new_text("fill: "));
            ui.add(Slider::new(&mut self.threshold, 0.0..=1.0));
        });

        ui.label(Self::new_text(&format!(
            "Generation: {}",
            self.demo.generation()
        )));

        ui.label(Self::new_text(&format!(
            "Last field update: {:.3} ms",
            self.last_update_duration * 1e3
        )));
    }

    fn draw_field_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(Self::new_text("Demo: "));
            ui.radio_value(&mut self.selected, DemoKind::Conway, Self::new_text("Life"));
            ui.radio_value(
                &mut self.selected,
                DemoKind::ForestFire,
                Self::new_text("Forest fire"),
            );
        });

        ui.checkbox(&mut self.wrap, Self::new_text("Wrap edges"));

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Side: "));
            ui.add(
                DragValue::new(&mut self.side)
                    .range(Config::MIN_FIELD_SIDE..=Config::MAX_FIELD_SIDE),
            );
        });

        if ui.add(Self::new_button("Reset field")).clicked() {
            self.reset_field();
        }

        ui.add_space(Config::WIDGET_GAP);

        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));
        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(Slider::new(&mut self.max_fps, 1.0..=240.0).logarithmic(true));
        });
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_simulation_controls(ui);
                });
            });
            ui.add_space(Config::WIDGET_GAP);
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_field_controls(ui);
                });
            });
        });
    }

    fn draw_field(&mut self, ui: &mut Ui, size_px: f32) {
        let image = ColorImage {
            size: self.demo.size(),
            pixels: self.demo.pixels(),
        };
        self.texture.set(image, TextureOptions::NEAREST);

        let source = SizedTexture::new(self.texture.id(), [size_px; 2]);
        let response = ui.add(Image::from_texture(source));
        self.field_rect.replace(response.rect);
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();

        let size_px = area
            .y
            .min(area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN)
            .max(0.);
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(ui.available_width() - size_px);

            ui.vertical_centered(|ui| {
                self.draw_field(ui, size_px);
            });
        });
    }
}
