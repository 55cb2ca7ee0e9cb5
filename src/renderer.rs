use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph,
        canvas::{Canvas, Circle, Context, Rectangle},
    },
};

use crate::entities::{Aabb, Projectile, ProjectileOwner};
use crate::session::{GameState, Outcome, SessionSnapshot};

const PLAYER_COLOR: Color = Color::Rgb(50, 200, 255);
const ENEMY_COLOR: Color = Color::Rgb(200, 80, 80);
const PLAYER_BULLET_COLOR: Color = Color::Rgb(255, 255, 0);
const ENEMY_BULLET_COLOR: Color = Color::Rgb(255, 120, 50);
const BACKGROUND: Color = Color::Rgb(10, 10, 30);

/// View struct that holds everything needed to draw one frame
pub struct RenderView<'a> {
    pub snapshot: SessionSnapshot<'a>,
    pub area: Rect,
    pub fps: u32,
    pub paused: bool,
}

/// Handles all rendering responsibilities for the game
#[derive(Debug, Default)]
pub struct GameRenderer;

impl GameRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw the playfield and HUD, then any overlay for the current state
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        let [hud_area, field_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(view.area);

        self.render_hud(frame, view, hud_area);
        self.render_field(frame, view, field_area);

        let controls = Line::from(Span::styled(
            "[A/D or Arrows: Move] [Space: Fire] [R: Reset] [P: Pause] [Q/Esc: Quit]",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(controls).centered(), hint_area);

        match view.snapshot.state {
            GameState::Terminal(outcome) => self.render_terminal(frame, view, outcome),
            GameState::Active if view.paused => self.render_paused(frame, view),
            GameState::Active => {}
        }
    }

    /// Score, lives and frame rate across the top row
    fn render_hud(&self, frame: &mut Frame, view: &RenderView, area: Rect) {
        let snapshot = &view.snapshot;
        let lives_style = if snapshot.lives > 1 {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        };

        let stats = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snapshot.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Lives: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}", snapshot.lives), lives_style),
            Span::styled("  Enemies: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snapshot.living_enemies().count()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  FPS: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.fps),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        frame.render_widget(Paragraph::new(stats), area);
    }

    /// The playfield, scaled from world units onto a braille canvas
    fn render_field(&self, frame: &mut Frame, view: &RenderView, area: Rect) {
        let snapshot = &view.snapshot;
        let width = f64::from(snapshot.screen_width);
        let height = f64::from(snapshot.screen_height);

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .background_color(BACKGROUND)
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                draw_box(ctx, &snapshot.player.bounding_box(), height, PLAYER_COLOR);

                // Tombstoned enemies are simply skipped
                for enemy in snapshot.living_enemies() {
                    draw_box(ctx, &enemy.bounding_box(), height, ENEMY_COLOR);
                }

                for projectile in snapshot
                    .player_projectiles
                    .iter()
                    .chain(snapshot.enemy_projectiles)
                {
                    draw_projectile(ctx, projectile, height);
                }
            });

        frame.render_widget(canvas, area);
    }

    fn render_paused(&self, frame: &mut Frame, view: &RenderView) {
        let pause_text = vec![
            Line::from(""),
            Line::from("PAUSED").centered().bold().yellow(),
            Line::from(""),
            Line::from("Press P to resume").centered().white(),
        ];

        let pause_area = centered_rect(view.area, 30, 6);
        frame.render_widget(Clear, pause_area);
        frame.render_widget(
            Paragraph::new(pause_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .alignment(Alignment::Center),
            pause_area,
        );
    }

    /// Win/loss banner over the frozen playfield
    fn render_terminal(&self, frame: &mut Frame, view: &RenderView, outcome: Outcome) {
        let message = view.snapshot.terminal_message().unwrap_or_default();
        let (title, color) = match outcome {
            Outcome::Won => ("VICTORY!", Color::Green),
            Outcome::Lost => ("GAME OVER", Color::Red),
        };

        let text = vec![
            Line::from(""),
            Line::from(title).centered().bold().fg(color),
            Line::from(""),
            Line::from(message).centered().white(),
            Line::from(format!("Final Score: {}", view.snapshot.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(""),
            Line::from("Press Q to quit").centered().dark_gray(),
        ];

        let banner_area = centered_rect(view.area, 44, 9);
        frame.render_widget(Clear, banner_area);
        frame.render_widget(
            Paragraph::new(text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .alignment(Alignment::Center),
            banner_area,
        );
    }
}

/// Canvas y grows upwards; world y grows downwards
fn draw_box(ctx: &mut Context, aabb: &Aabb, world_height: f64, color: Color) {
    ctx.draw(&Rectangle {
        x: f64::from(aabb.left()),
        y: world_height - f64::from(aabb.bottom()),
        width: f64::from(aabb.width),
        height: f64::from(aabb.height),
        color,
    });
}

fn draw_projectile(ctx: &mut Context, projectile: &Projectile, world_height: f64) {
    let color = match projectile.owner {
        ProjectileOwner::Player => PLAYER_BULLET_COLOR,
        ProjectileOwner::Enemy => ENEMY_BULLET_COLOR,
    };
    ctx.draw(&Circle {
        x: f64::from(projectile.x),
        y: world_height - f64::from(projectile.y),
        radius: f64::from(projectile.radius),
        color,
    });
}

/// A `width` x `height` rect centered in `area`, shrunk to fit if needed
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
