use macroquad::prelude::*;

use crate::game::{Cell, Lifecycle, Mode, Snapshot};
use crate::game::Rect as PixelRect;
use crate::input::Command;

// Matrix-style palette
const MATRIX_HEAD: Color = Color::new(0.64, 1.0, 0.64, 1.0);
const MATRIX_BODY: Color = Color::new(0.25, 0.9, 0.25, 1.0);
const MATRIX_WALL: Color = Color::new(0.08, 0.4, 0.08, 1.0);
const MATRIX_FOOD: Color = Color::new(0.9, 1.0, 0.9, 1.0);
const OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.6);

const MATRIX_GLYPHS: &[u8] = b"01<>[]{}()/\\|-=+*;:.,^~ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BUTTON_WIDTH: f32 = 110.0;
const BUTTON_HEIGHT: f32 = 36.0;
const BUTTON_GAP: f32 = 16.0;

/// Clickable area on the game-over screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub command: Command,
}

/// Square tiles sized to fit the window, with the grid centred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub tile: f32,
    pub off_x: f32,
    pub off_y: f32,
}

impl Layout {
    pub fn fit(screen_w: f32, screen_h: f32, grid_w: i32, grid_h: i32) -> Self {
        let tile = (screen_w / grid_w as f32).min(screen_h / grid_h as f32);
        Self {
            tile,
            off_x: (screen_w - tile * grid_w as f32) * 0.5,
            off_y: (screen_h - tile * grid_h as f32) * 0.5,
        }
    }

    pub fn cell_origin(&self, cell: Cell) -> Vec2 {
        vec2(
            self.off_x + cell.x as f32 * self.tile,
            self.off_y + cell.y as f32 * self.tile,
        )
    }

    /// Maps a rectangle given in board pixels onto the screen.
    pub fn pixel_rect(&self, rect: PixelRect, tile_size: i32) -> Rect {
        let scale = self.tile / tile_size as f32;
        Rect::new(
            self.off_x + rect.x as f32 * scale,
            self.off_y + rect.y as f32 * scale,
            rect.w as f32 * scale,
            rect.h as f32 * scale,
        )
    }
}

/// Restart / Menu / Quit, side by side below the screen centre.
pub fn game_over_buttons(screen_w: f32, screen_h: f32) -> Vec<Button> {
    let entries = [
        ("Restart", Command::Restart),
        ("Menu", Command::Menu),
        ("Quit", Command::Quit),
    ];
    let total = entries.len() as f32 * BUTTON_WIDTH + (entries.len() - 1) as f32 * BUTTON_GAP;
    let left = (screen_w - total) * 0.5;
    let top = screen_h * 0.65;
    entries
        .iter()
        .enumerate()
        .map(|(i, &(label, command))| Button {
            label,
            rect: Rect::new(left + i as f32 * (BUTTON_WIDTH + BUTTON_GAP), top, BUTTON_WIDTH, BUTTON_HEIGHT),
            command,
        })
        .collect()
}

fn matrix_char_for_cell(c: Cell) -> char {
    let hx = (c.x as i64).wrapping_mul(73_856_093);
    let hy = (c.y as i64).wrapping_mul(19_349_663);
    let h = (hx ^ hy).unsigned_abs() as usize;
    MATRIX_GLYPHS[h % MATRIX_GLYPHS.len()] as char
}

fn draw_cell(layout: &Layout, cell: Cell, color: Color) {
    let origin = layout.cell_origin(cell);
    draw_rectangle(origin.x, origin.y, layout.tile, layout.tile, Color::new(color.r, color.g, color.b, 0.25));
    let size = layout.tile.max(6.0);
    let params = TextParams {
        font_size: size as u16,
        font_scale: 1.0,
        font_scale_aspect: 1.0,
        color,
        ..Default::default()
    };
    // baseline sits one pixel above the tile's bottom edge
    draw_text_ex(
        &matrix_char_for_cell(cell).to_string(),
        origin.x + 1.0,
        origin.y + layout.tile - 1.0,
        params,
    );
}

fn draw_centered(text: &str, y: f32, size: u16, color: Color) {
    let m = measure_text(text, None, size, 1.0);
    draw_text(text, (screen_width() - m.width) * 0.5, y, size as f32, color);
}

fn draw_board(view: &Snapshot<'_>, layout: &Layout) {
    let grid = Rect::new(
        layout.off_x,
        layout.off_y,
        layout.tile * view.grid_width as f32,
        layout.tile * view.grid_height as f32,
    );
    draw_rectangle_lines(grid.x, grid.y, grid.w, grid.h, 2.0, MATRIX_WALL);

    if let Some(obstacle) = view.obstacle {
        let r = layout.pixel_rect(obstacle, view.tile_size);
        draw_rectangle(r.x, r.y, r.w, r.h, MATRIX_WALL);
    }

    if let Some(food) = view.food {
        draw_cell(layout, food, MATRIX_FOOD);
    }

    // Out-of-bounds heads (wall deaths) are left undrawn
    let in_grid = |c: &Cell| (0..view.grid_width).contains(&c.x) && (0..view.grid_height).contains(&c.y);
    for (i, cell) in view.snake.iter().enumerate().filter(|(_, c)| in_grid(*c)) {
        let color = if i == 0 { MATRIX_HEAD } else { MATRIX_BODY };
        draw_cell(layout, *cell, color);
    }
}

fn draw_hud(view: &Snapshot<'_>) {
    draw_text(&format!("Score: {}", view.score), 8.0, 20.0, 22.0, MATRIX_BODY);
    let high = format!("High Score: {}", view.high_score);
    let m = measure_text(&high, None, 22, 1.0);
    draw_text(&high, screen_width() - m.width - 8.0, 20.0, 22.0, MATRIX_BODY);
    let mode = format!("{} mode", view.mode);
    draw_text(&mode, 8.0, screen_height() - 10.0, 18.0, MATRIX_WALL);
}

fn draw_menu(view: &Snapshot<'_>) {
    let sh = screen_height();
    let mut y = sh * 0.25;
    draw_centered("SNAKE", y, 40, MATRIX_HEAD);
    y += 56.0;
    draw_centered("Choose Mode:", y, 22, WHITE);
    y += 36.0;
    for mode in Mode::all() {
        let line = format!("{} - {} Mode", mode.menu_index(), mode);
        draw_centered(&line, y, 20, GRAY);
        y += 28.0;
    }
    draw_centered("Q: Quit", y + 12.0, 18, GRAY);
    draw_centered(&format!("High Score: {}", view.high_score), sh - 40.0, 20, MATRIX_BODY);
}

fn draw_game_over(view: &Snapshot<'_>, buttons: &[Button]) {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), OVERLAY);
    let sh = screen_height();
    draw_centered("GAME OVER", sh * 0.4, 36, MATRIX_HEAD);
    draw_centered(&format!("Score: {}", view.score), sh * 0.4 + 40.0, 22, WHITE);
    draw_centered(&format!("High Score: {}", view.high_score), sh * 0.4 + 68.0, 22, WHITE);

    let (mx, my) = mouse_position();
    for button in buttons {
        let hovered = button.rect.contains(vec2(mx, my));
        let fill = if hovered { MATRIX_BODY } else { MATRIX_WALL };
        let r = button.rect;
        draw_rectangle(r.x, r.y, r.w, r.h, fill);
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, MATRIX_HEAD);
        let m = measure_text(button.label, None, 20, 1.0);
        draw_text(button.label, r.x + (r.w - m.width) * 0.5, r.y + r.h * 0.5 + m.offset_y * 0.5, 20.0, WHITE);
    }
    draw_centered("R: Restart  Enter: Menu  Q: Quit", sh * 0.65 + BUTTON_HEIGHT + 30.0, 18, GRAY);
}

/// Draws the screen matching the snapshot's lifecycle.
pub fn draw(view: &Snapshot<'_>, buttons: &[Button]) {
    clear_background(BLACK);
    match view.lifecycle {
        Lifecycle::Menu => draw_menu(view),
        Lifecycle::Playing => {
            let layout = Layout::fit(screen_width(), screen_height(), view.grid_width, view.grid_height);
            draw_board(view, &layout);
            draw_hud(view);
        }
        Lifecycle::GameOver => {
            let layout = Layout::fit(screen_width(), screen_height(), view.grid_width, view.grid_height);
            draw_board(view, &layout);
            draw_game_over(view, buttons);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_keeps_square_tiles_and_centres() {
        let layout = Layout::fit(800.0, 400.0, 20, 20);
        assert_eq!(layout.tile, 20.0);
        assert_eq!(layout.off_x, 200.0);
        assert_eq!(layout.off_y, 0.0);
        assert_eq!(layout.cell_origin(Cell::new(1, 2)), vec2(220.0, 40.0));
    }

    #[test]
    fn test_pixel_rect_scales_with_tiles() {
        let layout = Layout::fit(800.0, 800.0, 20, 20);
        let r = layout.pixel_rect(PixelRect::new(160, 160, 80, 80), 20);
        assert_eq!(r, Rect::new(320.0, 320.0, 160.0, 160.0));
    }

    #[test]
    fn test_game_over_buttons() {
        let buttons = game_over_buttons(400.0, 400.0);
        let commands: Vec<Command> = buttons.iter().map(|b| b.command).collect();
        assert_eq!(commands, vec![Command::Restart, Command::Menu, Command::Quit]);
        for pair in buttons.windows(2) {
            assert!(!pair[0].rect.overlaps(&pair[1].rect));
        }
        assert!(buttons.iter().all(|b| b.rect.x >= 0.0 && b.rect.right() <= 400.0));
    }
}
