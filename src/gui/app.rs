use super::{Config, Demo, DemoKind, FpsLimiter};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, Rect, TextureHandle,
    TextureOptions,
};
use std::time::Instant;
use tracing::{error, info};

pub struct App {
    pub(super) demo: Demo,                // Automaton being shown.
    pub(super) selected: DemoKind,        // Demo picked in the controls, applied on reset.
    pub(super) wrap: bool,                // Toroidal edges for the next reset.
    pub(super) side: u32,                 // Field side in cells for the next reset.
    pub(super) threshold: f64,            // Fill probability used by randomize.
    pub(super) is_paused: bool,           // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,         // Do one step and pause.
    pub(super) last_update_duration: f64, // Duration of the last step in seconds.
    pub(super) texture: TextureHandle,    // Texture handle of the field.
    pub(super) field_rect: Option<Rect>,  // Part of the window displaying the field.
    pub(super) fps_limiter: FpsLimiter,   // Limits the frame rate to a certain value.
    pub(super) max_fps: f64,
}

impl App {
    pub fn new(ctx: &Context) -> crate::Result<Self> {
        let demo = Demo::new(
            DemoKind::Conway,
            Config::FIELD_SIDE,
            true,
            Config::FILL_THRESHOLD,
        )?;
        Ok(Self {
            selected: demo.kind(),
            demo,
            wrap: true,
            side: Config::FIELD_SIDE,
            threshold: Config::FILL_THRESHOLD,
            is_paused: true,
            do_one_step: false,
            last_update_duration: 0.,
            texture: ctx.load_texture(
                "automaton field",
                ColorImage::default(),
                TextureOptions::NEAREST,
            ),
            field_rect: None,
            fps_limiter: FpsLimiter::default(),
            max_fps: Config::MAX_FPS,
        })
    }

    pub fn reset_field(&mut self) {
        match Demo::new(self.selected, self.side, self.wrap, self.threshold) {
            Ok(demo) => {
                info!(demo = ?self.selected, side = self.side, wrap = self.wrap, "field reset");
                self.demo = demo;
                self.is_paused = true;
                self.do_one_step = false;
                self.last_update_duration = 0.;
            }
            Err(err) => error!(%err, "failed to reset field"),
        }
    }

    fn update_engine(&mut self) {
        if self.is_paused && !self.do_one_step {
            return;
        }

        let timer = Instant::now();
        self.demo.step();
        self.last_update_duration = timer.elapsed().as_secs_f64();
        self.do_one_step = false;
    }

    fn update_input(&mut self, ctx: &Context, field_rect: Rect) {
        let [w, h] = self.demo.size();
        ctx.input(|input| {
            if input.pointer.primary_clicked() {
                if let Some(pos) = input.pointer.interact_pos() {
                    if field_rect.contains(pos) {
                        let p = (pos - field_rect.left_top()) / field_rect.size();
                        let x = (p.x as f64 * w as f64) as i64;
                        let y = (p.y as f64 * h as f64) as i64;
                        self.demo.poke(x, y);
                    }
                }
            }
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.is_paused = !self.is_paused;
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                if let Some(field_rect) = self.field_rect {
                    self.update_input(ctx, field_rect);
                }

                self.draw(ui);

                self.update_engine();
            });

        self.fps_limiter.sleep(self.max_fps);
    }
}
