use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

pub trait EventHandler {
    fn handle_events(&mut self) -> Result<()>;
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()>;
}

impl EventHandler for App {
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)?
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Char('u') if ctrl => self.clear_query(),
            // Every printable key belongs to the search box
            KeyCode::Char(c) if !ctrl => self.push_char(c),
            KeyCode::Backspace => self.pop_char(),
            KeyCode::Up => self.scroll_up(),
            KeyCode::Down => self.scroll_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => self.scroll_home(),
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use rollcall_service::Record;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn press_ctrl(app: &mut App, c: char) {
        app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn app() -> App {
        let mut app = App::new(TuiConfig::default());
        app.apply_load(Ok(vec![Record::new(1, "Kamal Perera", "123", "Galle")]));
        app
    }

    #[test]
    fn test_letters_go_to_query() {
        let mut app = app();
        for c in "qjk Q".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.query, "qjk Q");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_shifted_characters_are_typed() {
        let mut app = app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT))
            .unwrap();
        assert_eq!(app.query, "K");
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut app = app();
        for c in "kamal".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.query, "kama");

        press_ctrl(&mut app, 'u');
        assert!(app.query.is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app();
        press_ctrl(&mut app, 'c');
        assert!(app.should_quit);
        assert!(app.query.is_empty());
    }
}
