//! Settings menu: subtitles, playback speed, quality readout.

/// Playback speeds offered by the speed page, in display order.
pub const SPEED_PRESETS: [f64; 8] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsPage {
    Main,
    Speed,
}

/// What the player should do after a menu selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsAction {
    None,
    /// Ask the host for a subtitle file
    ChooseSubtitles,
    ApplySpeed(f64),
}

/// A row as the renderer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub value: Option<String>,
    pub checked: bool,
}

impl MenuItem {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            checked: false,
        }
    }

    fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

const MAIN_SUBTITLES: usize = 0;
const MAIN_SPEED: usize = 1;
const MAIN_ITEMS: usize = 3;

#[derive(Debug, Clone)]
pub struct SettingsMenu {
    open: bool,
    page: SettingsPage,
    cursor: usize,
    speeds: Vec<f64>,
    speed: f64,
}

impl SettingsMenu {
    pub fn new(speeds: Vec<f64>) -> Self {
        Self {
            open: false,
            page: SettingsPage::Main,
            cursor: 0,
            speeds,
            speed: 1.0,
        }
    }

    /// Menu whose speed page starts checked on `speed`.
    pub fn with_speed(speeds: Vec<f64>, speed: f64) -> Self {
        Self {
            speed,
            ..Self::new(speeds)
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn page(&self) -> SettingsPage {
        self.page
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The speed checked on the speed page.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Follow a rate change made outside the menu.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        if !self.open {
            self.page = SettingsPage::Main;
            self.cursor = 0;
        }
    }

    fn len(&self) -> usize {
        match self.page {
            SettingsPage::Main => MAIN_ITEMS,
            // "Back" row plus one per speed
            SettingsPage::Speed => self.speeds.len() + 1,
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len().saturating_sub(1));
    }

    /// Leave the speed page, or close the menu from the main page.
    pub fn back(&mut self) {
        match self.page {
            SettingsPage::Speed => {
                self.page = SettingsPage::Main;
                self.cursor = MAIN_SPEED;
            }
            SettingsPage::Main => self.toggle(),
        }
    }

    /// Activate the row under the cursor.
    pub fn select(&mut self) -> SettingsAction {
        self.activate(self.cursor)
    }

    /// Activate row `row` of the current page (pointer selection).
    pub fn activate(&mut self, row: usize) -> SettingsAction {
        if !self.open || row >= self.len() {
            return SettingsAction::None;
        }
        self.cursor = row;

        match self.page {
            SettingsPage::Main => match row {
                MAIN_SUBTITLES => SettingsAction::ChooseSubtitles,
                MAIN_SPEED => {
                    self.page = SettingsPage::Speed;
                    self.cursor = 0;
                    SettingsAction::None
                }
                _ => SettingsAction::None,
            },
            SettingsPage::Speed => {
                if row == 0 {
                    self.back();
                    return SettingsAction::None;
                }
                let speed = self.speeds[row - 1];
                self.speed = speed;
                self.page = SettingsPage::Main;
                self.cursor = MAIN_SPEED;
                SettingsAction::ApplySpeed(speed)
            }
        }
    }

    /// Rows of the current page.
    pub fn items(&self, subtitles: Option<&str>, quality: &str) -> Vec<MenuItem> {
        match self.page {
            SettingsPage::Main => vec![
                MenuItem::new("Subtitles").with_value(subtitles.unwrap_or("None")),
                MenuItem::new("Playback speed").with_value(format!("x{}", self.speed)),
                MenuItem::new("Quality").with_value(quality),
            ],
            SettingsPage::Speed => {
                let mut items = vec![MenuItem::new("Back")];
                items.extend(self.speeds.iter().map(|&speed| MenuItem {
                    label: speed_label(speed),
                    value: None,
                    checked: speed == self.speed,
                }));
                items
            }
        }
    }
}

/// `Normal` for 1x, `x{rate}` otherwise.
pub fn speed_label(speed: f64) -> String {
    if speed == 1.0 {
        "Normal".to_string()
    } else {
        format!("x{}", speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_menu() -> SettingsMenu {
        let mut menu = SettingsMenu::new(SPEED_PRESETS.to_vec());
        menu.toggle();
        menu
    }

    #[test]
    fn main_page_shows_current_values() {
        let menu = open_menu();
        let items = menu.items(Some("movie.srt"), "720p");

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].value.as_deref(), Some("movie.srt"));
        assert_eq!(items[1].value.as_deref(), Some("x1"));
        assert_eq!(items[2].value.as_deref(), Some("720p"));
    }

    #[test]
    fn missing_subtitles_shows_none() {
        let items = open_menu().items(None, "0p");
        assert_eq!(items[0].value.as_deref(), Some("None"));
    }

    #[test]
    fn speed_page_lists_presets_with_check() {
        let mut menu = open_menu();
        menu.activate(MAIN_SPEED);
        assert_eq!(menu.page(), SettingsPage::Speed);

        let items = menu.items(None, "0p");
        assert_eq!(items.len(), 9);
        assert_eq!(items[0].label, "Back");
        assert_eq!(items[1].label, "x0.25");
        assert_eq!(items[4].label, "Normal");
        assert!(items[4].checked);
        assert_eq!(items[8].label, "x2");
        assert_eq!(items.iter().filter(|i| i.checked).count(), 1);
    }

    #[test]
    fn choosing_speed_applies_and_returns_to_main() {
        let mut menu = open_menu();
        menu.activate(MAIN_SPEED);
        let action = menu.activate(6);

        assert_eq!(action, SettingsAction::ApplySpeed(1.5));
        assert_eq!(menu.page(), SettingsPage::Main);
        assert_eq!(menu.speed(), 1.5);
        assert_eq!(menu.items(None, "0p")[1].value.as_deref(), Some("x1.5"));
    }

    #[test]
    fn back_row_returns_without_change() {
        let mut menu = open_menu();
        menu.activate(MAIN_SPEED);
        assert_eq!(menu.activate(0), SettingsAction::None);
        assert_eq!(menu.page(), SettingsPage::Main);
        assert_eq!(menu.speed(), 1.0);
    }

    #[test]
    fn keyboard_navigation_selects_rows() {
        let mut menu = open_menu();
        menu.move_down();
        assert_eq!(menu.select(), SettingsAction::None);
        assert_eq!(menu.page(), SettingsPage::Speed);

        for _ in 0..20 {
            menu.move_down();
        }
        assert_eq!(menu.cursor(), 8);
        assert_eq!(menu.select(), SettingsAction::ApplySpeed(2.0));
    }

    #[test]
    fn subtitles_row_requests_file() {
        let mut menu = open_menu();
        assert_eq!(menu.activate(0), SettingsAction::ChooseSubtitles);
    }

    #[test]
    fn external_speed_moves_check_mark() {
        let mut menu = SettingsMenu::with_speed(SPEED_PRESETS.to_vec(), 2.0);
        assert_eq!(menu.items(None, "0p")[1].value.as_deref(), Some("x2"));

        menu.toggle();
        menu.activate(MAIN_SPEED);
        let items = menu.items(None, "0p");
        assert!(items[8].checked);
        assert!(!items[4].checked);

        menu.set_speed(0.75);
        assert!(menu.items(None, "0p")[3].checked);
    }

    #[test]
    fn closed_menu_ignores_selection() {
        let mut menu = SettingsMenu::new(SPEED_PRESETS.to_vec());
        assert_eq!(menu.activate(1), SettingsAction::None);
        assert_eq!(menu.page(), SettingsPage::Main);
    }

    #[test]
    fn back_on_main_closes_and_resets() {
        let mut menu = open_menu();
        menu.activate(MAIN_SPEED);
        menu.back();
        menu.back();
        assert!(!menu.is_open());
        assert_eq!(menu.page(), SettingsPage::Main);
        assert_eq!(menu.cursor(), 0);
    }
}
