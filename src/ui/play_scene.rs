//! The play field, drawn with half-block characters so each terminal cell
//! carries two vertically stacked grid cells (fg = top, bg = bottom).

use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::game::types::SnakeSim;
use crate::ui::centered_rect;

const EMPTY: Color = Color::Black;

pub fn draw(frame: &mut Frame, app: &App) {
    let sim = &app.sim;
    let cols = (sim.width / sim.cell) as u16;
    let rows = (sim.height / sim.cell) as u16;
    // One border on each side, plus a score line inside the block
    let area = centered_rect(frame.size(), cols + 2, rows / 2 + 3);

    let mut lines = vec![Line::styled(
        format!(
            "{}  score {}  length {}",
            app.current_user(),
            sim.score,
            sim.body.len()
        ),
        Style::default().fg(Color::Gray),
    )];
    lines.extend(field_lines(sim));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title(" Serpent "));
    frame.render_widget(widget, area);
}

/// Rasterizes the grid into colored half-block rows.
fn field_lines(sim: &SnakeSim) -> Vec<Line<'static>> {
    let cols = (sim.width / sim.cell) as usize;
    let rows = (sim.height / sim.cell) as usize;
    let mut grid = vec![vec![EMPTY; cols]; rows];

    let mut paint = |x: i32, y: i32, color: Color| {
        let (cx, cy) = ((x / sim.cell) as usize, (y / sim.cell) as usize);
        if cy < rows && cx < cols {
            grid[cy][cx] = color;
        }
    };

    for (i, seg) in sim.body.iter().enumerate() {
        let color = if i == 0 {
            Color::LightGreen
        } else {
            Color::Green
        };
        paint(seg.x, seg.y, color);
    }
    paint(sim.food.x, sim.food.y, Color::Red);
    if sim.bonus.active {
        paint(sim.bonus.pos.x, sim.bonus.pos.y, Color::Yellow);
    }
    if sim.anti_bonus.active {
        paint(sim.anti_bonus.pos.x, sim.anti_bonus.pos.y, Color::Magenta);
    }

    let mut lines = Vec::with_capacity(rows / 2);
    for pair in grid.chunks(2) {
        let bottom = pair.get(1);
        let spans: Vec<Span<'static>> = (0..cols)
            .map(|x| {
                let top = pair[0][x];
                let bot = bottom.map_or(EMPTY, |row| row[x]);
                Span::styled("\u{2580}", Style::default().fg(top).bg(bot))
            })
            .collect();
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Difficulty;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_field_lines_cover_the_grid() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let sim = SnakeSim::new(Difficulty::Normal, &mut rng);
        let lines = field_lines(&sim);
        assert_eq!(lines.len() as i32, sim.height / sim.cell / 2);
        for line in &lines {
            assert_eq!(line.spans.len() as i32, sim.width / sim.cell);
        }
    }
}
