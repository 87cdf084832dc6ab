#![allow(dead_code)]

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use feasibility::app::{App, FormField, InputMode};
use feasibility::config::Config;
use feasibility::handlers;
use feasibility::storage::{
    Department, FixedClock, ManufacturingSpec, NewProject, Priority, Status,
};
use feasibility::ui;

pub const SCREEN_WIDTH: u16 = 100;
pub const SCREEN_HEIGHT: u16 = 40;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A complete insert request with every required field filled.
pub fn new_project(name: &str, customer: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        customer_name: customer.to_string(),
        customer_contact: "Dana Cruz".to_string(),
        customer_email: "dana@example.com".to_string(),
        customer_phone: String::new(),
        description: "Progressive die stampings".to_string(),
        expected_volume: "250,000 pcs/year".to_string(),
        target_price: 3.40,
        target_margin: 18.0,
        delivery_date: "2026-11-30".to_string(),
        technical_requirements: String::new(),
        quality_requirements: String::new(),
        regulatory_requirements: String::new(),
        priority: Priority::Medium,
        status: Status::New,
        assigned_departments: vec![Department::Engineering],
        feasibility_score: 60,
        risk_factors: vec![],
        opportunities: vec![],
        comments: vec![],
        created_by: "Ana Garcia".to_string(),
        manufacturing: ManufacturingSpec::default(),
    }
}

pub struct TestContext {
    pub app: App,
    pub clock: FixedClock,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(date(2026, 1, 15), Config::default())
    }

    /// No sample projects; ids start at the configured seed.
    pub fn empty() -> Self {
        let config = Config {
            sample_data: false,
            ..Config::default()
        };
        Self::with_config(date(2026, 1, 15), config)
    }

    pub fn with_config(today: NaiveDate, config: Config) -> Self {
        let clock = FixedClock::new(today);
        let mut app = App::with_clock(config, clock.clone());
        app.sync();
        Self { app, clock }
    }

    pub fn press(&mut self, key: KeyCode) {
        let event = KeyEvent::new(key, KeyModifiers::NONE);
        self.handle_key_event(event);
    }

    pub fn press_with_modifiers(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        let event = KeyEvent::new(key, modifiers);
        self.handle_key_event(event);
    }

    pub fn ctrl(&mut self, c: char) {
        self.press_with_modifiers(KeyCode::Char(c), KeyModifiers::CONTROL);
    }

    pub fn type_str(&mut self, s: &str) {
        for c in s.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        self.app.status_message = None;
        handlers::handle_key(&mut self.app, key);
        self.app.sync();
    }

    /// Sets form fields directly, skipping per-key typing.
    pub fn fill_form(&mut self, values: &[(FormField, &str)]) {
        let state = self.app.form_state_mut().expect("form should be open");
        for (field, value) in values {
            state.form.set_value(*field, value);
        }
    }

    pub fn fill_required_fields(&mut self, name: &str) {
        self.fill_form(&[
            (FormField::ProjectName, name),
            (FormField::Description, "Deep drawn housings"),
            (FormField::Priority, "High"),
            (FormField::CustomerName, "Lucid Motors"),
            (FormField::CustomerContact, "Sam Reyes"),
            (FormField::CustomerEmail, "sam@lucid.test"),
            (FormField::ExpectedVolume, "80,000 pcs/year"),
            (FormField::TargetPrice, "4.25"),
            (FormField::DeliveryDate, "2026-12-01"),
        ]);
    }

    pub fn render_screen(&mut self) -> Vec<String> {
        let backend = TestBackend::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|f| ui::render_app(f, &mut self.app))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    /// Card rows as plain text, without any overlay on top.
    pub fn render_dashboard(&self) -> Vec<String> {
        ui::build_dashboard_lines(&self.app, SCREEN_WIDTH as usize - 4)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    pub fn screen_contains(&mut self, text: &str) -> bool {
        self.render_screen().iter().any(|line| line.contains(text))
    }

    pub fn find_line(&mut self, text: &str) -> Option<String> {
        self.render_screen()
            .into_iter()
            .find(|line| line.contains(text))
    }

    pub fn status_contains(&self, text: &str) -> bool {
        self.app
            .status_message
            .as_ref()
            .is_some_and(|s| s.contains(text))
    }

    pub fn form_error(&self) -> Option<String> {
        self.app.form_state().and_then(|s| s.error.clone())
    }

    pub fn visible_names(&self) -> Vec<String> {
        self.app
            .visible_projects()
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }

    /// Verify invariants that must always hold after any operation.
    /// Call this at the end of every test.
    pub fn verify_invariants(&mut self) {
        assert!(
            self.app.modals.visible_count() <= 1,
            "{} overlays visible",
            self.app.modals.visible_count()
        );

        let count = self.app.visible_projects().len();
        if count > 0 {
            assert!(
                self.app.selected < count,
                "Selection {} out of bounds (count={})",
                self.app.selected,
                count
            );
        }

        if self.app.input_mode == InputMode::Search {
            let buffer = &self.app.search_buffer;
            assert!(buffer.cursor_char_pos() <= buffer.content().chars().count());
        }

        let ids: Vec<_> = self.app.repository.projects().iter().map(|p| p.id).collect();
        assert!(
            ids.windows(2).all(|w| w[0] < w[1]),
            "ids not strictly increasing: {ids:?}"
        );
    }
}
