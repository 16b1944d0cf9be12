use log::{debug, info, warn};

use crate::config::{Settings, TickIntervals};

use super::board::Board;
use super::rng::SessionRng;
use super::timer::TickTimer;
use super::types::{Cell, Direction, Lifecycle, Mode, Rect};

/// What ended a game. A single tick may report several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBody,
    Obstacle,
}

/// Outcome of one [`GameState::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEvent {
    /// Not playing; nothing changed.
    Idle,
    Moved,
    Ate { score: u32 },
    GameOver { collisions: Vec<Collision> },
}

/// Read-only view handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub snake: &'a [Cell],
    pub food: Option<Cell>,
    pub obstacle: Option<Rect>,
    pub mode: Mode,
    pub lifecycle: Lifecycle,
    pub score: u32,
    pub high_score: u32,
    pub grid_width: i32,
    pub grid_height: i32,
    pub tile_size: i32,
}

/// The whole game: snake, food, ruleset, lifecycle, scores and the tick timer.
///
/// Every operation is guarded by the lifecycle it belongs to and is a no-op
/// otherwise, so late timer ticks and stray key presses are harmless.
pub struct GameState {
    board: Board,
    intervals: TickIntervals,
    rng: SessionRng,
    timer: TickTimer,
    /// Head first.
    snake: Vec<Cell>,
    food: Option<Cell>,
    /// Heading used by the last tick.
    direction: Direction,
    /// Heading the next tick will use.
    next_direction: Direction,
    mode: Mode,
    lifecycle: Lifecycle,
    score: u32,
    high_score: u32,
}

impl GameState {
    pub fn new(settings: &Settings, rng: SessionRng) -> Self {
        let board = Board::from_settings(settings);
        let start = board.start();
        Self {
            board,
            intervals: settings.tick_ms,
            rng,
            timer: TickTimer::new(settings.tick_ms.for_mode(Mode::Classic)),
            snake: vec![start],
            food: None,
            direction: Direction::Right,
            next_direction: Direction::Right,
            mode: Mode::Classic,
            lifecycle: Lifecycle::Menu,
            score: 0,
            high_score: 0,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn snake(&self) -> &[Cell] {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    /// Heading the next tick will move in.
    pub fn direction(&self) -> Direction {
        self.next_direction
    }

    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.snake,
            food: self.food,
            obstacle: self.mode.has_obstacle().then(|| self.board.obstacle()),
            mode: self.mode,
            lifecycle: self.lifecycle,
            score: self.score,
            high_score: self.high_score,
            grid_width: self.board.width(),
            grid_height: self.board.height(),
            tile_size: self.board.tile_size(),
        }
    }

    /// Leaves the menu and starts a game in `mode`. `now` arms the timer.
    pub fn select_mode(&mut self, mode: Mode, now: f64) -> bool {
        if self.lifecycle != Lifecycle::Menu {
            return false;
        }
        info!("Starting {mode} game (seed {})", self.rng.seed());
        self.init_game(mode, now);
        true
    }

    /// Plays the same mode again straight from the game-over screen.
    pub fn restart(&mut self, now: f64) -> bool {
        if self.lifecycle != Lifecycle::GameOver {
            return false;
        }
        info!("Restarting {} game", self.mode);
        self.init_game(self.mode, now);
        true
    }

    pub fn return_to_menu(&mut self) -> bool {
        if self.lifecycle != Lifecycle::GameOver {
            return false;
        }
        self.timer.stop();
        self.snake = vec![self.board.start()];
        self.food = None;
        self.score = 0;
        self.lifecycle = Lifecycle::Menu;
        info!("Back to menu, high score {}", self.high_score);
        true
    }

    /// Queues a turn for the next tick. U-turns relative to the heading of
    /// the last tick are dropped.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.lifecycle != Lifecycle::Playing {
            return false;
        }
        if requested.is_opposite(self.direction) {
            debug!("Ignoring reversal from {:?} to {requested:?}", self.direction);
            return false;
        }
        self.next_direction = requested;
        true
    }

    /// Runs a tick if the timer says one is due.
    pub fn update(&mut self, now: f64) -> Option<TickEvent> {
        self.timer.poll(now).then(|| self.tick())
    }

    pub fn tick(&mut self) -> TickEvent {
        if self.lifecycle != Lifecycle::Playing {
            return TickEvent::Idle;
        }

        self.direction = self.next_direction;
        let mut head = self.head().offset(self.direction);
        if self.mode == Mode::Free {
            head = self.board.wrap(head);
        }

        let ate = self.food == Some(head);
        self.snake.insert(0, head);
        if ate {
            self.score += 1;
            self.high_score = self.high_score.max(self.score);
            self.spawn_food();
        } else {
            self.snake.pop();
        }

        let collisions = self.collisions(head);
        if !collisions.is_empty() {
            self.game_over(&collisions);
            return TickEvent::GameOver { collisions };
        }

        if ate {
            TickEvent::Ate { score: self.score }
        } else {
            TickEvent::Moved
        }
    }

    // Every check runs, even after an earlier one matched.
    fn collisions(&self, head: Cell) -> Vec<Collision> {
        let mut collisions = Vec::new();
        if self.mode.walls_kill() && !self.board.contains(head) {
            collisions.push(Collision::Wall);
        }
        if self.snake[1..].contains(&head) {
            collisions.push(Collision::SelfBody);
        }
        if self.mode.has_obstacle() && self.board.hits_obstacle(head) {
            collisions.push(Collision::Obstacle);
        }
        collisions
    }

    fn game_over(&mut self, collisions: &[Collision]) {
        self.lifecycle = Lifecycle::GameOver;
        self.timer.stop();
        info!(
            "Game over in {} mode ({collisions:?}), score {}, high score {}",
            self.mode, self.score, self.high_score
        );
    }

    fn init_game(&mut self, mode: Mode, now: f64) {
        self.mode = mode;
        self.snake = vec![self.board.start()];
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.score = 0;
        self.spawn_food();
        self.lifecycle = Lifecycle::Playing;
        self.timer = TickTimer::new(self.intervals.for_mode(mode));
        self.timer.start(now);
    }

    fn spawn_food(&mut self) {
        let free = self.board.free_cells(&self.snake, self.mode);
        self.food = self.rng.pick(&free);
        match self.food {
            Some(cell) => debug!("Food spawned at ({}, {})", cell.x, cell.y),
            None => warn!("No free cell left for food"),
        }
    }
}
