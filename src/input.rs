use std::ops::ControlFlow;

use log::info;
use macroquad::input::{KeyCode, MouseButton, get_keys_pressed, is_mouse_button_pressed, mouse_position};
use macroquad::math::vec2;

use crate::game::{Direction, GameState, Lifecycle, Mode};
use crate::render::Button;

/// Player intent, decoded from a key press or a button click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    SelectMode(Mode),
    Restart,
    Menu,
    Quit,
}

fn digit(key: KeyCode) -> Option<u8> {
    let n = match key {
        KeyCode::Key0 | KeyCode::Kp0 => 0,
        KeyCode::Key1 | KeyCode::Kp1 => 1,
        KeyCode::Key2 | KeyCode::Kp2 => 2,
        KeyCode::Key3 | KeyCode::Kp3 => 3,
        KeyCode::Key4 | KeyCode::Kp4 => 4,
        KeyCode::Key5 | KeyCode::Kp5 => 5,
        KeyCode::Key6 | KeyCode::Kp6 => 6,
        KeyCode::Key7 | KeyCode::Kp7 => 7,
        KeyCode::Key8 | KeyCode::Kp8 => 8,
        KeyCode::Key9 | KeyCode::Kp9 => 9,
        _ => return None,
    };
    Some(n)
}

fn turn(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up | KeyCode::W => Some(Direction::Up),
        KeyCode::Down | KeyCode::S => Some(Direction::Down),
        KeyCode::Left | KeyCode::A => Some(Direction::Left),
        KeyCode::Right | KeyCode::D => Some(Direction::Right),
        _ => None,
    }
}

/// Keys only mean something on the screen they belong to.
pub fn command_for_key(lifecycle: Lifecycle, key: KeyCode) -> Option<Command> {
    if key == KeyCode::Q {
        return Some(Command::Quit);
    }
    match lifecycle {
        Lifecycle::Menu => digit(key)
            .and_then(|n| Mode::try_from(n).ok())
            .map(Command::SelectMode),
        Lifecycle::Playing => turn(key).map(Command::Turn),
        Lifecycle::GameOver => match key {
            KeyCode::R => Some(Command::Restart),
            KeyCode::Enter | KeyCode::KpEnter | KeyCode::M | KeyCode::Escape => Some(Command::Menu),
            _ => None,
        },
    }
}

/// Commands from this frame's key presses and clicks on `buttons`.
pub fn poll_commands(lifecycle: Lifecycle, buttons: &[Button]) -> Vec<Command> {
    let mut commands: Vec<Command> = get_keys_pressed()
        .into_iter()
        .filter_map(|key| command_for_key(lifecycle, key))
        .collect();

    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        commands.extend(
            buttons
                .iter()
                .filter(|b| b.rect.contains(vec2(x, y)))
                .map(|b| b.command),
        );
    }
    commands
}

/// Applies `command` to the game. Breaks when the player asked to quit.
pub fn dispatch(game: &mut GameState, command: Command, now: f64) -> ControlFlow<()> {
    match command {
        Command::Turn(direction) => {
            game.set_direction(direction);
        }
        Command::SelectMode(mode) => {
            game.select_mode(mode, now);
        }
        Command::Restart => {
            game.restart(now);
        }
        Command::Menu => {
            game.return_to_menu();
        }
        Command::Quit => {
            info!("Quit requested, high score {}", game.high_score());
            return ControlFlow::Break(());
        }
    }
    ControlFlow::Continue(())
}
