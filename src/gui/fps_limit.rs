use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Sleeps out the rest of each frame and tracks a smoothed frame rate.
pub struct FpsLimiter {
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl Default for FpsLimiter {
    fn default() -> Self {
        Self {
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }
}

impl FpsLimiter {
    const SMOOTHING: f64 = 0.1;

    pub fn fps(&self) -> f64 {
        if self.frametime_smoothed == 0. {
            return 0.;
        }
        1. / self.frametime_smoothed
    }

    pub fn sleep(&mut self, max_fps: f64) {
        let target = Duration::from_secs_f64(1. / max_fps.max(1.));
        let elapsed = self.frame_timer.elapsed();
        if target > elapsed {
            sleep(target - elapsed);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * Self::SMOOTHING;
        self.frame_timer = Instant::now();
    }
}
