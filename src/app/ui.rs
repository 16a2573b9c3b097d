use letterpool::{Letter, LetterPool};
use ratatui::{
    prelude::*,
    symbols::border,
    widgets::{block::*, *},
};

use super::{App, COLUMNS};

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Title::from(" Letter pool ".bold());
        let instructions = Title::from(Line::from(vec![
            " Quit ".into(),
            "<Esc> ".blue().bold(),
            "Toggle letter ".into(),
            "<A-Z> ".blue().bold(),
            "Toggle selected ".into(),
            "<Space> ".blue().bold(),
        ]));
        let block = Block::default()
            .title(title.alignment(Alignment::Center))
            .title(
                instructions
                    .alignment(Alignment::Center)
                    .position(Position::Bottom),
            )
            .borders(Borders::ALL)
            .border_set(symbols::border::PLAIN);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Fill(1),
            ])
            .split(block.inner(area));
        block.render(area, buf);

        for (row, letters) in Letter::ALL.chunks(COLUMNS).enumerate() {
            let tiles = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Length(7); letters.len()])
                .flex(layout::Flex::Center)
                .split(rows[row]);
            for (i, &letter) in letters.iter().enumerate() {
                let selected = letter.index() == self.selected_letter;
                render_letter(&self.pool, letter, tiles[i], buf, selected);
            }
        }

        Paragraph::new(vec![
            Line::from(vec![
                "Visible: ".bold().green(),
                LetterPool::format_letters(self.pool.visible()).into(),
            ]),
            Line::from(vec![
                "Hidden: ".bold().red(),
                LetterPool::format_letters(self.pool.hidden()).into(),
            ]),
        ])
        .render(rows[2], buf);
    }
}

fn render_letter(pool: &LetterPool, letter: Letter, area: Rect, buf: &mut Buffer, selected: bool) {
    let block = match selected {
        true => Block::new()
            .borders(Borders::ALL)
            .border_set(border::DOUBLE),
        false => Block::new().borders(Borders::ALL),
    };

    let style = match pool.get(letter) {
        true => Style::default()
            .bg(Color::LightGreen)
            .fg(Color::Black)
            .bold(),
        false => Style::default().bg(Color::Black).fg(Color::DarkGray),
    };

    Paragraph::new(letter.to_string())
        .bold()
        .centered()
        .block(block)
        .style(style)
        .render(area, buf);
}
