//! Shared test utilities
//!
//! Common fixtures and helper functions used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::path::PathBuf;

    use crate::app::App;
    use crate::catalog::{FetchSource, Skip};
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// A skip with round-number prices: 200 + 10 per yard, 20% VAT
    pub fn sample_skip(id: u64, size: u32) -> Skip {
        Skip {
            id,
            size,
            price_before_vat: Some(200.0 + 10.0 * size as f64),
            vat: Some(20.0),
            transport_cost: None,
            per_tonne_cost: None,
            hire_period_days: 14,
            postcode: Some("NR32".to_string()),
            area: Some("Lowestoft".to_string()),
            allowed_on_road: true,
            allows_heavy_waste: false,
            forbidden: false,
        }
    }

    /// `count` skips with ids 1..=count and sizes counting up from 4 yards
    pub fn sample_skips(count: usize) -> Vec<Skip> {
        (0..count)
            .map(|i| sample_skip(i as u64 + 1, 4 + i as u32))
            .collect()
    }

    /// App with default config that never touches the network
    pub fn test_app() -> App {
        App::new(
            &Config::default(),
            FetchSource::File(PathBuf::from("/nonexistent/skips.json")),
        )
    }

    /// App whose first fetch already settled with `count` sample skips
    pub fn app_with_skips(count: usize) -> App {
        let mut app = test_app();
        app.catalog.begin_fetch();
        app.apply_fetch_result(Ok(sample_skips(count)));
        app
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Render the whole app into a test terminal
    pub fn render_app(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
    }

    /// Render the whole app and return the screen as text
    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        render_app(app, width, height).backend().to_string()
    }
}
