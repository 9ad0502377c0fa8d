//! A managed fixed-timestep game loop with restarts.

use std::time::Duration;

use crate::{clock::FrameClock, error::Result, GameConfig, InputCache};

/// What the game loop should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Keep going.
    Continue,
    /// Throw the state away and build a fresh one.
    Restart,
    /// Stop the game loop.
    Quit,
}

/// The state of a game.
///
/// Everything the game needs to remember between ticks lives in this object.
/// The input state and the timestep are handed in on every tick.
pub trait GameState {
    /// Advance the game forward by a timestep.
    fn step(&mut self, dt: f64, input: &InputCache) -> FrameOutcome;
    /// Present the game, once per frame after all of the frame's ticks.
    /// Drawing is up to the game, so this does nothing by default.
    fn draw(&mut self) {}
}

/// A source of input events, such as a window's event queue.
pub trait EventSource {
    /// Feed every event that arrived since the last call into the input cache.
    fn pump(&mut self, input: &mut InputCache);
}

impl<F> EventSource for F
where
    F: FnMut(&mut InputCache),
{
    fn pump(&mut self, input: &mut InputCache) {
        self(input)
    }
}

/// A Game owns the state of a game, the input cache and the timing of the game loop.
///
/// The state is created by a factory function so it can be recreated on restart.
///
/// # Example
/// ```
/// # use ribs::{FrameOutcome, Game, GameConfig, GameState, InputCache};
/// struct Countdown(u32);
/// impl GameState for Countdown {
///     fn step(&mut self, _dt: f64, _input: &InputCache) -> FrameOutcome {
///         self.0 -= 1;
///         if self.0 == 0 { FrameOutcome::Quit } else { FrameOutcome::Continue }
///     }
/// }
/// let game = Game::new(GameConfig::default(), || Countdown(3))?;
/// let state = game.run(|_: &mut InputCache| ());
/// assert_eq!(state.0, 0);
/// # Ok::<(), ribs::Error>(())
/// ```
pub struct Game<S, F> {
    config: GameConfig,
    input: InputCache,
    clock: FrameClock,
    factory: F,
    state: S,
    running: bool,
    tick_count: u64,
}

impl<S, F> Game<S, F>
where
    S: GameState,
    F: FnMut() -> S,
{
    /// Validate the config and create the first state.
    ///
    /// Fails with [`Error::InvalidConfig`][crate::Error::InvalidConfig] before
    /// the factory is called if the config can't drive a game loop.
    pub fn new(config: GameConfig, mut factory: F) -> Result<Self> {
        config.validate()?;
        let state = factory();
        Ok(Game {
            clock: FrameClock::from_config(&config),
            config,
            input: InputCache::new(),
            factory,
            state,
            running: true,
            tick_count: 0,
        })
    }

    /// Discard the current state and create a new one with the factory.
    ///
    /// Input state is kept so held keys stay held.
    pub fn restart(&mut self) {
        log::info!(
            "Restarting {:?} after {} ticks",
            self.config.title,
            self.tick_count
        );
        self.state = (self.factory)();
    }

    /// Run a single fixed timestep. Returns false once the game has stopped.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        if self.input.quit_requested() {
            log::info!("Quit requested, stopping {:?}", self.config.title);
            self.running = false;
            return false;
        }

        log::trace!("tick {}", self.tick_count);
        let outcome = self.state.step(self.config.dt_fixed(), &self.input);
        self.input.tick();
        self.tick_count += 1;

        match outcome {
            FrameOutcome::Continue => (),
            FrameOutcome::Restart => self.restart(),
            FrameOutcome::Quit => {
                log::info!(
                    "{:?} quit after {} ticks",
                    self.config.title,
                    self.tick_count
                );
                self.running = false;
            }
        }
        self.running
    }

    /// Run one frame of the loop with an externally measured frame time:
    /// gather events, run as many ticks as the time allows and draw once if anything ran.
    ///
    /// Returns the number of ticks that ran.
    pub fn run_frame(&mut self, elapsed_nanos: u128, events: &mut impl EventSource) -> usize {
        events.pump(&mut self.input);
        let ticks = self.clock.advance(elapsed_nanos);
        self.run_ticks(ticks)
    }

    fn run_ticks(&mut self, ticks: usize) -> usize {
        let mut ran = 0;
        for _ in 0..ticks {
            if !self.tick() {
                break;
            }
            ran += 1;
        }
        if ran > 0 && self.running {
            self.state.draw();
        }
        ran
    }

    /// Begin the game loop in real time. Returns the final state when the game stops.
    pub fn run(mut self, mut events: impl EventSource) -> S {
        log::info!(
            "Starting {:?} at {} ticks per second",
            self.config.title,
            self.config.fps
        );

        let mut frame_start_t = instant::Instant::now();
        while self.running {
            events.pump(&mut self.input);
            let ticks = self.clock.advance(frame_start_t.elapsed().as_nanos());
            if ticks == 0 {
                // still time left in this frame, also makes sure quit requests get handled
                if self.input.quit_requested() {
                    self.tick();
                    continue;
                }
                let wait = self
                    .clock
                    .nanos_until_next_tick()
                    .saturating_sub(frame_start_t.elapsed().as_nanos());
                std::thread::sleep(Duration::from_nanos(wait as u64));
                continue;
            }

            frame_start_t = instant::Instant::now();
            self.run_ticks(ticks);

            let nanos_this_frame = frame_start_t.elapsed().as_nanos();
            // the accumulator represents drift from perfect tick timing that we should correct by
            let target_frame_duration = self.clock.nanos_until_next_tick();
            // sleep till next frame if we have time to kill
            if nanos_this_frame < target_frame_duration {
                std::thread::sleep(Duration::from_nanos(
                    (target_frame_duration - nanos_this_frame) as u64,
                ));
            }
        }
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[inline]
    pub fn input(&self) -> &InputCache {
        &self.input
    }

    /// Mutable access to the input cache, for feeding events in by hand.
    #[inline]
    pub fn input_mut(&mut self) -> &mut InputCache {
        &mut self.input
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Total number of ticks run, across restarts.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ElementState, Key};

    const FRAME: u128 = 1_000_000_000 / 60;

    /// Counts ticks, restarts on R and quits on Escape.
    #[derive(Default)]
    struct Counter {
        steps: u32,
        draws: u32,
        presses: u32,
        last_dt: f64,
    }

    impl GameState for Counter {
        fn step(&mut self, dt: f64, input: &InputCache) -> FrameOutcome {
            self.steps += 1;
            self.last_dt = dt;
            if input.key_pressed(Key::Space) {
                self.presses += 1;
            }
            if input.key_pressed(Key::KeyR) {
                FrameOutcome::Restart
            } else if input.key_down(Key::Escape) {
                FrameOutcome::Quit
            } else {
                FrameOutcome::Continue
            }
        }

        fn draw(&mut self) {
            self.draws += 1;
        }
    }

    fn new_game() -> Game<Counter, impl FnMut() -> Counter> {
        Game::new(GameConfig::default(), Counter::default).unwrap()
    }

    fn no_events(_: &mut InputCache) {}

    #[test]
    fn frames_run_ticks_and_draw() {
        let mut game = new_game();
        assert_eq!(game.run_frame(FRAME, &mut no_events), 1);
        assert_eq!(game.run_frame(1_000_000, &mut no_events), 0);
        assert_eq!(game.run_frame(FRAME * 3, &mut no_events), 3);
        assert_eq!(game.state().steps, 4);
        assert_eq!(game.state().draws, 2);
        assert_eq!(game.tick_count(), 4);
        assert!((game.state().last_dt - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn pressed_lasts_one_tick() {
        let mut game = new_game();
        let mut pressed_once = false;
        let mut events = |input: &mut InputCache| {
            if !pressed_once {
                input.track_key(Key::Space, ElementState::Pressed);
                pressed_once = true;
            }
        };
        game.run_frame(FRAME * 3, &mut events);
        assert_eq!(game.state().steps, 3);
        assert_eq!(game.state().presses, 1);
        assert!(game.input().key_down(Key::Space));
    }

    #[test]
    fn restart_rebuilds_state() {
        let mut game = new_game();
        game.run_frame(FRAME * 2, &mut no_events);
        assert_eq!(game.state().steps, 2);

        game.input_mut().track_key(Key::KeyR, ElementState::Pressed);
        assert!(game.tick());
        assert_eq!(game.state().steps, 0);
        assert_eq!(game.tick_count(), 3);

        // R is still held but not freshly pressed, so no second restart
        assert!(game.tick());
        assert_eq!(game.state().steps, 1);
    }

    #[test]
    fn quit_outcome_stops() {
        let mut game = new_game();
        let mut events =
            |input: &mut InputCache| input.track_key(Key::Escape, ElementState::Pressed);
        assert_eq!(game.run_frame(FRAME * 3, &mut events), 0);
        assert!(!game.is_running());
        assert_eq!(game.state().steps, 1);
        assert_eq!(game.state().draws, 0);
        assert!(!game.tick());
        assert_eq!(game.state().steps, 1);
    }

    #[test]
    fn quit_request_stops_before_step() {
        let mut game = new_game();
        game.input_mut().request_quit();
        assert!(!game.tick());
        assert_eq!(game.state().steps, 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut built = 0;
        let mut factory = || {
            built += 1;
            Counter::default()
        };
        for config in [
            GameConfig {
                fps: 0,
                ..Default::default()
            },
            GameConfig {
                fps: 2_000_000_000,
                ..Default::default()
            },
        ] {
            assert!(matches!(
                Game::new(config, &mut factory),
                Err(crate::Error::InvalidConfig(_))
            ));
        }
        assert_eq!(built, 0);
    }

    #[test]
    fn run_until_quit() {
        let game = Game::new(
            GameConfig {
                fps: 1000,
                ..Default::default()
            },
            Counter::default,
        )
        .unwrap();
        let mut frames = 0;
        let state = game.run(|input: &mut InputCache| {
            frames += 1;
            if frames == 5 {
                input.request_quit();
            }
        });
        assert_eq!(frames, 5);
        assert!(state.draws <= state.steps);
    }
}
