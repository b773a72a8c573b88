use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, Direction};
use super::mouse_events;
use crate::layout::LayoutMode;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_fetcher();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event);
                }
                Event::Resize(width, height) => {
                    self.set_viewport_size(width, height);
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') => self.confirm(),
            KeyCode::Char('r') => self.refresh(),

            KeyCode::Left | KeyCode::Char('h') => self.move_focus(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => self.move_focus(Direction::Right),
            KeyCode::Up | KeyCode::Char('k') => self.move_focus(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => self.move_focus(Direction::Down),
            KeyCode::Home => self.focus_edge(false),
            KeyCode::End => self.focus_edge(true),

            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select_focused();
            }

            KeyCode::Char('n') | KeyCode::Char(']') | KeyCode::PageDown
                if self.layout_mode == LayoutMode::Wide =>
            {
                self.next_page();
            }
            KeyCode::Char('p') | KeyCode::Char('[') | KeyCode::PageUp
                if self.layout_mode == LayoutMode::Wide =>
            {
                self.prev_page();
            }

            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
