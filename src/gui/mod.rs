mod app;
mod config;
mod demo;
mod draw;
mod fps_limit;

pub use app::App;
pub use config::Config;
use demo::{Demo, DemoKind};
use fps_limit::FpsLimiter;
