mod ui;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::info;
use ratatui::prelude::*;

use letterpool::pool::letter::NLETTER;
use letterpool::{Letter, LetterPool};

use super::tui;

/// Number of letter tiles on one row
const COLUMNS: usize = 13;

pub struct App {
    exit: bool,
    pool: LetterPool,
    selected_letter: usize,
}

impl App {
    pub fn init(pool: LetterPool) -> Self {
        App {
            exit: false,
            pool,
            selected_letter: 0,
        }
    }

    /// runs the application's main loop until the user quits and hands
    /// back the edited pool
    pub fn run(mut self, terminal: &mut tui::Tui) -> Result<LetterPool> {
        while !self.exit {
            terminal
                .draw(|frame| self.render_frame(frame))
                .context("Drawing the letter pool")?;
            self.handle_events().context("Reading terminal events")?;
        }
        Ok(self.pool)
    }

    fn render_frame(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.size());
    }

    /// updates the application's state based on user input
    fn handle_events(&mut self) -> std::io::Result<()> {
        match event::read()? {
            // it's important to check that the event is a key press event as
            // crossterm also emits key release and repeat events on Windows.
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc => self.exit(),
            KeyCode::Right => self.move_right(),
            KeyCode::Left => self.move_left(),
            KeyCode::Down => self.move_down(),
            KeyCode::Up => self.move_up(),
            KeyCode::Char(' ') | KeyCode::Tab | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Char(x) if x.is_ascii_alphabetic() => self.toggle_char(x),
            _ => {}
        }
    }

    fn selected(&self) -> Letter {
        Letter::ALL[self.selected_letter]
    }

    fn toggle_selected(&mut self) {
        let letter = self.selected();
        let visible = self.pool.toggle(letter);
        info!("{letter} is now {}", if visible { "visible" } else { "hidden" });
    }

    /// Jump to the typed letter and flip it
    fn toggle_char(&mut self, x: char) {
        if let Ok(letter) = Letter::try_from(x.to_ascii_uppercase()) {
            self.selected_letter = letter.index();
            self.toggle_selected();
        }
    }

    fn move_right(&mut self) {
        if self.selected_letter < NLETTER - 1 {
            self.selected_letter += 1;
        }
    }

    fn move_left(&mut self) {
        if self.selected_letter > 0 {
            self.selected_letter -= 1;
        }
    }

    fn move_down(&mut self) {
        if self.selected_letter + COLUMNS < NLETTER {
            self.selected_letter += COLUMNS;
        }
    }

    fn move_up(&mut self) {
        if self.selected_letter >= COLUMNS {
            self.selected_letter -= COLUMNS;
        }
    }

    fn exit(&mut self) {
        self.exit = true;
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn typing_a_letter_toggles_it() -> io::Result<()> {
        let mut app = App::init(LetterPool::new());
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.selected().as_char(), 'C');
        assert!(!app.pool.is_visible('C').unwrap());
        press(&mut app, KeyCode::Char('C'));
        assert!(app.pool.is_visible('C').unwrap());
        Ok(())
    }

    #[test]
    fn cursor_stays_on_the_board() -> io::Result<()> {
        let mut app = App::init(LetterPool::new());
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_letter, 0);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected().as_char(), 'N');
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected().as_char(), 'N');

        for _ in 0..30 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected().as_char(), 'Z');
        Ok(())
    }

    #[test]
    fn space_toggles_the_selection() -> io::Result<()> {
        let mut app = App::init(LetterPool::new());
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.pool.is_visible('B').unwrap());
        press(&mut app, KeyCode::Tab);
        assert!(app.pool.is_visible('B').unwrap());
        Ok(())
    }

    #[test]
    fn escape_exits() -> io::Result<()> {
        let mut app = App::init(LetterPool::new());
        press(&mut app, KeyCode::Esc);
        assert!(app.exit);
        Ok(())
    }

    #[test]
    fn renders_every_letter() -> io::Result<()> {
        let mut app = App::init(LetterPool::new());
        press(&mut app, KeyCode::Char('q'));
        let area = Rect::new(0, 0, 100, 14);
        let mut buf = Buffer::empty(area);
        (&app).render(area, &mut buf);

        let text: String = buf.content.iter().map(|cell| cell.symbol()).collect();
        for c in 'A'..='Z' {
            assert!(text.contains(c), "{c} missing from the board");
        }
        assert!(text.contains("Hidden: [ Q ]"));
        Ok(())
    }
}
