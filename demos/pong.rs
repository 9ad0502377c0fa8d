//! Headless Pong played by a scripted keyboard.
//!
//! Run with `RUST_LOG=debug cargo run --example pong [config.ron]` to see every frame.

use ribs::{
    physics::{self, ContactParams},
    Aabb, Body, ElementState, FrameOutcome, Game, GameConfig, GameState, InputCache, Key, Vec2,
};

const FIELD_W: f64 = 40.0;
const FIELD_H: f64 = 20.0;
const PADDLE_ACCEL: f64 = 200.0;
const BALL_SPEED: f64 = 12.0;

#[derive(Clone, Copy)]
struct Controls {
    up: Key,
    down: Key,
}

struct Pong {
    controls: [Controls; 2],
    damping: f64,
    ball: Body,
    paddles: [Body; 2],
    walls: [Body; 2],
    score: [u32; 2],
    bounces: u32,
}

impl Pong {
    fn new(controls: [Controls; 2], damping: f64) -> Self {
        let paddle = |x: f64| Body::new_static(Aabb::new([x, 0.0], 1.0, 4.0));
        let wall = |y: f64| Body::new_static(Aabb::new([0.0, y], FIELD_W, 1.0));
        Pong {
            controls,
            damping,
            ball: Self::serve(1.0),
            paddles: [paddle(-FIELD_W / 2.0 + 1.0), paddle(FIELD_W / 2.0 - 1.0)],
            walls: [wall(-FIELD_H / 2.0), wall(FIELD_H / 2.0)],
            score: [0, 0],
            bounces: 0,
        }
    }

    fn serve(dir: f64) -> Body {
        Body::new_dynamic(Aabb::square([0.0, 0.0], 1.0), 1.0)
            .with_velocity([dir * BALL_SPEED, BALL_SPEED * 0.5])
    }

    fn move_paddles(&mut self, dt: f64, input: &InputCache) {
        for (paddle, controls) in self.paddles.iter_mut().zip(self.controls) {
            let axis = input
                .get_key_axis_state(controls.up, controls.down)
                .as_f64();
            paddle.velocity.y += axis * PADDLE_ACCEL * dt;
            paddle.apply_damping(self.damping, dt);
            paddle.integrate(dt);

            // paddles can't push walls, but walls push paddles
            let params = ContactParams::default().with_masses(1.0, 0.0);
            for wall in &self.walls {
                let mut wall_rect = wall.rect;
                physics::solve_rect_overlap(
                    &mut paddle.rect,
                    &mut wall_rect,
                    &mut paddle.velocity,
                    &mut Vec2::zero(),
                    &params,
                );
            }
        }
    }

    fn move_ball(&mut self, dt: f64) {
        self.ball.integrate(dt);
        for other in self.walls.iter_mut().chain(self.paddles.iter_mut()) {
            // broadphase
            if !self.ball.rect.overlaps(&other.rect) {
                continue;
            }
            if self.ball.collide(other, 1.0) {
                self.bounces += 1;
            }
        }

        let field = Aabb::new([0.0, 0.0], FIELD_W, FIELD_H);
        let x = self.ball.rect.center.x;
        if !field.contains_point(self.ball.rect.center) {
            let scorer = if x > 0.0 { 0 } else { 1 };
            self.score[scorer] += 1;
            log::info!("Point to player {}, score {:?}", scorer + 1, self.score);
            self.ball = Self::serve(-x.signum());
        }
    }
}

impl GameState for Pong {
    fn step(&mut self, dt: f64, input: &InputCache) -> FrameOutcome {
        if input.key_pressed(Key::Escape) {
            return FrameOutcome::Quit;
        }
        if input.key_pressed(Key::KeyR) {
            return FrameOutcome::Restart;
        }
        self.move_paddles(dt, input);
        self.move_ball(dt);
        FrameOutcome::Continue
    }

    fn draw(&mut self) {
        log::debug!(
            "ball {:?} paddles {:?} {:?}",
            self.ball.rect.center,
            self.paddles[0].rect.center,
            self.paddles[1].rect.center
        );
    }
}

/// Keys held by the script at a given time in seconds.
fn scripted_keys(t: f64, controls: &[Controls; 2]) -> Vec<Key> {
    let mut keys = Vec::new();
    if (0.0..0.8).contains(&t) {
        keys.push(controls[0].up);
    }
    if (0.4..1.2).contains(&t) {
        keys.push(controls[1].down);
    }
    if (1.5..1.55).contains(&t) {
        keys.push(Key::KeyR);
    }
    if t >= 3.0 {
        keys.push(Key::Escape);
    }
    keys
}

fn main() -> ribs::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig {
            title: String::from("pong"),
            ..Default::default()
        },
    };

    let controls = [
        Controls {
            up: ribs::key_from_char('w')?,
            down: ribs::key_from_char('s')?,
        },
        Controls {
            up: Key::ArrowUp,
            down: Key::ArrowDown,
        },
    ];
    let damping = config.damping;
    let game = Game::new(config, move || Pong::new(controls, damping))?;

    let start = instant::Instant::now();
    let all_keys = [
        controls[0].up,
        controls[0].down,
        controls[1].up,
        controls[1].down,
        Key::KeyR,
        Key::Escape,
    ];
    let final_state = game.run(move |input: &mut InputCache| {
        let held = scripted_keys(start.elapsed().as_secs_f64(), &controls);
        for key in all_keys {
            let state = if held.contains(&key) {
                ElementState::Pressed
            } else {
                ElementState::Released
            };
            input.track_key(key, state);
        }
    });

    println!(
        "Final score {} - {} after {} bounces",
        final_state.score[0], final_state.score[1], final_state.bounces
    );
    Ok(())
}
