pub mod board;
pub mod rng;
pub mod state;
pub mod timer;
pub mod types;

pub use board::Board;
pub use rng::SessionRng;
pub use state::{Collision, GameState, Snapshot, TickEvent};
pub use timer::TickTimer;
pub use types::{Cell, Direction, Lifecycle, Mode, Rect};
