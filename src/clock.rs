//! Fixed timestep bookkeeping for the game loop.

// time snapping technique from Tyler Glaiel's blog post
// https://medium.com/@tglaiel/how-to-make-your-game-run-at-60fps-24c61210fe75
const NANOS_120FPS: u128 = 1_000_000_000 / 120;
const NANOS_60FPS: u128 = 1_000_000_000 / 60;
const NANOS_30FPS: u128 = 1_000_000_000 / 30;
const NANOS_20FPS: u128 = 1_000_000_000 / 20;
const NANOS_15FPS: u128 = 1_000_000_000 / 15;
const SNAP_TARGETS: [u128; 5] = [
    NANOS_120FPS,
    NANOS_60FPS,
    NANOS_30FPS,
    NANOS_20FPS,
    NANOS_15FPS,
];
const SNAP_THRESHOLD: u128 = 200_000;

fn should_snap(dt: u128, target: u128) -> bool {
    if dt < target {
        target - dt < SNAP_THRESHOLD
    } else {
        dt - target < SNAP_THRESHOLD
    }
}

/// Turns measured frame times into a whole number of fixed-length ticks.
///
/// Leftover time that doesn't fill a whole tick is carried over to the next frame.
#[derive(Clone, Debug)]
pub struct FrameClock {
    nanos_per_frame: u128,
    max_acc: u128,
    acc: u128,
}

impl FrameClock {
    pub fn new(nanos_per_frame: u128, max_acc: u128) -> Self {
        FrameClock {
            nanos_per_frame,
            max_acc: max_acc.max(nanos_per_frame),
            acc: 0,
        }
    }

    pub fn from_config(config: &crate::GameConfig) -> Self {
        Self::new(
            config.nanos_per_frame(),
            u128::from(config.max_frame_skip_nanos),
        )
    }

    /// Report that `elapsed_nanos` have passed since the start of the previous frame
    /// and get the number of ticks to run now.
    ///
    /// Zero means it's too early for a new frame. In that case the caller should keep
    /// measuring from the same frame start and try again later.
    pub fn advance(&mut self, elapsed_nanos: u128) -> usize {
        let mut dt = elapsed_nanos;
        // if vsynced, pretend frame timing is exact (see blog post mentioned above)
        if let Some(&target) = SNAP_TARGETS.iter().find(|&&t| should_snap(dt, t)) {
            dt = target;
            self.acc = 0;
        }

        if dt < self.nanos_per_frame - self.acc {
            return 0;
        }

        self.acc += dt;
        // limit acc to prevent spiral of death
        if self.acc > self.max_acc {
            log::debug!(
                "Dropping {} ms of lag",
                (self.acc - self.max_acc) / 1_000_000
            );
            self.acc = self.max_acc;
        }

        let ticks = self.acc / self.nanos_per_frame;
        self.acc %= self.nanos_per_frame;
        ticks as usize
    }

    /// Time until the next tick is due, measured from the start of the current frame.
    #[inline]
    pub fn nanos_until_next_tick(&self) -> u128 {
        self.nanos_per_frame - self.acc
    }

    #[inline]
    pub fn nanos_per_frame(&self) -> u128 {
        self.nanos_per_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_60fps() -> FrameClock {
        FrameClock::new(NANOS_60FPS, 1_000_000_000 / 8)
    }

    #[test]
    fn exact_frames() {
        let mut clock = clock_60fps();
        for _ in 0..10 {
            assert_eq!(clock.advance(NANOS_60FPS), 1);
            assert_eq!(clock.nanos_until_next_tick(), NANOS_60FPS);
        }
    }

    #[test]
    fn too_early() {
        let mut clock = clock_60fps();
        assert_eq!(clock.advance(5_000_000), 0);
        assert_eq!(clock.nanos_until_next_tick(), NANOS_60FPS);
    }

    #[test]
    fn near_vsync_snaps() {
        let mut clock = clock_60fps();
        assert_eq!(clock.advance(NANOS_60FPS + 150_000), 1);
        assert_eq!(clock.nanos_until_next_tick(), NANOS_60FPS);
        assert_eq!(clock.advance(NANOS_60FPS - 150_000), 1);
        assert_eq!(clock.nanos_until_next_tick(), NANOS_60FPS);
    }

    #[test]
    fn slow_frames_run_several_ticks() {
        let mut clock = clock_60fps();
        // snaps to 20 fps
        assert_eq!(clock.advance(50_100_000), 3);
        assert_eq!(clock.nanos_until_next_tick(), NANOS_60FPS - 2);

        // not near any vsync rate, leftover carries over
        let mut clock = clock_60fps();
        assert_eq!(clock.advance(25_000_000), 1);
        assert_eq!(clock.advance(25_000_000), 2);
        assert_eq!(clock.nanos_until_next_tick(), NANOS_60FPS - 2);
    }

    #[test]
    fn lag_is_capped() {
        let mut clock = clock_60fps();
        assert_eq!(clock.advance(1_000_000_000), 7);
        assert_eq!(clock.advance(NANOS_60FPS), 1);
    }
}
