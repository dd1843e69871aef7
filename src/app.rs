//! Application state and the main event loop.
//!
//! `App` owns the session state and is its only writer. Screens and launch
//! timers never mutate it directly: screens return a [`ScreenAction`] and
//! timers send a [`LaunchEvent`], both of which are applied here.

use crate::catalog::GameSource;
use crate::components::{Footer, Header, NavBar};
use crate::config::Config;
use crate::keymap::Action;
use crate::launch::{LaunchEvent, LaunchSimulator};
use crate::screens::{
    HomeScreen, LibraryScreen, RenderContext, Screen, ScreenAction, ScreenContext,
    SettingsScreen, StreamingScreen,
};
use crate::state::{select_view, ScreenId, SessionState, View};
use crate::styles::{init_theme, ThemeType};
use crate::tui::Tui;
use crate::utils::create_standard_layout;
use crate::widgets::ToastManager;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

/// How long the loop waits for input before ticking timers and toasts
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// One controller per view
struct Screens {
    home: HomeScreen,
    steam_library: LibraryScreen,
    local_library: LibraryScreen,
    settings: SettingsScreen,
    streaming: StreamingScreen,
}

impl Screens {
    fn new() -> Self {
        Self {
            home: HomeScreen::new(),
            steam_library: LibraryScreen::new(GameSource::Steam),
            local_library: LibraryScreen::new(GameSource::Local),
            settings: SettingsScreen::new(),
            streaming: StreamingScreen::new(),
        }
    }

    fn get_mut(&mut self, view: View) -> &mut dyn Screen {
        match view {
            View::Home => &mut self.home,
            View::SteamLibrary => &mut self.steam_library,
            View::LocalLibrary => &mut self.local_library,
            View::Settings => &mut self.settings,
            View::Streaming => &mut self.streaming,
        }
    }
}

/// Main application state
pub struct App {
    config: Config,
    /// Where theme changes are saved. `None` keeps them in memory only.
    config_path: Option<PathBuf>,
    /// `--no-colors` or `NO_COLOR` forces the plain theme whatever the config says
    no_colors: bool,
    session: SessionState,
    launcher: LaunchSimulator,
    screens: Screens,
    toasts: ToastManager,
    /// Header and navigation bar areas from the last draw, for mouse hits
    header_area: Rect,
    nav_area: Rect,
    should_quit: bool,
}

impl App {
    /// Create the app. Launch timers are spawned on `handle`.
    pub fn new(config: Config, config_path: Option<PathBuf>, handle: Handle) -> Self {
        let launcher = LaunchSimulator::new(handle, config.launch_delay());
        Self {
            config,
            config_path,
            no_colors: false,
            session: SessionState::new(),
            launcher,
            screens: Screens::new(),
            toasts: ToastManager::new(),
            header_area: Rect::default(),
            nav_area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn with_no_colors(mut self, no_colors: bool) -> Self {
        self.no_colors = no_colors;
        self
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        tui.enter()?;
        info!("GameHub started");

        loop {
            self.tick();
            tui.terminal_mut().draw(|frame| {
                if let Err(e) = self.draw(frame) {
                    warn!("Draw failed: {:#}", e);
                }
            })?;

            if self.should_quit {
                break;
            }

            if let Some(event) = tui.poll_event(POLL_INTERVAL)? {
                self.handle_event(event)?;
            }
        }

        tui.exit()?;
        info!("GameHub exited");
        Ok(())
    }

    /// Apply finished launch timers and expire old toasts.
    pub fn tick(&mut self) {
        for event in self.launcher.poll() {
            self.apply_launch_event(&event);
        }
        self.toasts.tick();
    }

    fn apply_launch_event(&mut self, event: &LaunchEvent) {
        event.apply(&mut self.session);
        self.toasts.success(event.message());
    }

    pub fn draw(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        let view = self.session.current_view();
        let ctx = RenderContext::new(&self.config, &self.session);

        if view == View::Streaming {
            self.screens.get_mut(view).render(frame, area, &ctx)?;
        } else {
            let (header, content, nav, footer) =
                create_standard_layout(area, Header::HEIGHT, NavBar::HEIGHT, Footer::HEIGHT);
            self.header_area = header;
            self.nav_area = nav;

            let keymap = &self.config.keymap;
            let screen = self.screens.get_mut(view);
            Header::render(
                frame,
                header,
                self.session.current_screen,
                &keymap.key_for(Action::GoSettings),
            )?;
            screen.render(frame, content, &ctx)?;
            NavBar::render(frame, nav, self.session.current_screen)?;
            Footer::render(frame, footer, &keymap.footer(&screen.footer_hints()))?;
        }

        self.toasts.render(frame, area);
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = &event {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
        }

        let view = self.session.current_view();
        if view != View::Streaming {
            if let Some(action) = self.global_action(&event, view) {
                return self.apply_action(action);
            }
        }

        let ctx = ScreenContext::new(&self.config, &self.session);
        let action = self.screens.get_mut(view).handle_event(event, &ctx)?;
        self.apply_action(action)
    }

    /// Shortcuts available on every screen with chrome, unless a text field has focus
    fn global_action(&mut self, event: &Event, view: View) -> Option<ScreenAction> {
        match event {
            Event::Key(key) => {
                if self.screens.get_mut(view).is_input_focused() {
                    return None;
                }
                let current = self.session.current_screen;
                match self.config.keymap.get_action(key.code, key.modifiers)? {
                    Action::GoHome => Some(ScreenAction::Navigate(ScreenId::Home)),
                    Action::GoSteamLibrary => Some(ScreenAction::Navigate(ScreenId::SteamLibrary)),
                    Action::GoLocalLibrary => Some(ScreenAction::Navigate(ScreenId::LocalLibrary)),
                    Action::GoSettings => Some(ScreenAction::Navigate(ScreenId::Settings)),
                    Action::NextTab => Some(ScreenAction::Navigate(NavBar::cycle(current, true))),
                    Action::PrevTab => Some(ScreenAction::Navigate(NavBar::cycle(current, false))),
                    Action::Back if current.shows_back() => {
                        Some(ScreenAction::Navigate(ScreenId::Home))
                    }
                    Action::Quit => Some(ScreenAction::Quit),
                    _ => None,
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let settings_key = self.config.keymap.key_for(Action::GoSettings);
                NavBar::hit_test(self.nav_area, mouse.column, mouse.row)
                    .or_else(|| {
                        Header::hit_test(
                            self.header_area,
                            self.session.current_screen,
                            &settings_key,
                            mouse.column,
                            mouse.row,
                        )
                    })
                    .map(ScreenAction::Navigate)
            }
            _ => None,
        }
    }

    /// Apply a screen's request to the session state.
    pub fn apply_action(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(screen) => {
                debug!("Navigate: {} -> {}", self.session.current_screen, screen);
                self.session.navigate(screen);
                let ctx = ScreenContext::new(&self.config, &self.session);
                self.screens
                    .get_mut(select_view(screen, false))
                    .on_enter(&ctx)?;
            }
            ScreenAction::Launch { title } => {
                if let Some(pending) = self.session.begin_launch(&title) {
                    debug!("Launch of '{}' replaces pending '{}'", title, pending);
                }
                self.launcher.start(&title);
            }
            ScreenAction::EndStream => {
                if self.session.end_stream() {
                    info!("Streaming session terminated.");
                }
            }
            ScreenAction::ToggleSteam => {
                if self.session.toggle_steam() {
                    info!("Steam account connected");
                    self.toasts.success("Steam account connected");
                } else {
                    info!("Steam account disconnected");
                    self.toasts.info("Steam account disconnected");
                }
            }
            ScreenAction::SetSearch(query) => self.session.set_search_query(query),
            ScreenAction::TestConnection => {
                let address = &self.config.companion.address;
                info!("Connection test to {}: companion app offline", address);
                self.toasts
                    .info(format!("Companion app at {} is not reachable", address));
            }
            ScreenAction::CycleTheme => self.cycle_theme()?,
            ScreenAction::Quit => self.should_quit = true,
        }
        Ok(())
    }

    fn cycle_theme(&mut self) -> Result<()> {
        let current: ThemeType = self.config.theme.parse().unwrap_or_default();
        let next = current.next();
        self.config.theme = next.to_config_string().to_string();
        if !self.no_colors {
            init_theme(next);
        }
        let Some(path) = &self.config_path else {
            self.toasts.info(format!("Theme: {}", next.name()));
            return Ok(());
        };
        // A failed save keeps the new theme for this session only
        match self.config.save(path) {
            Ok(()) => {
                info!("Theme set to {} and saved", next.name());
                self.toasts.info(format!("Theme: {}", next.name()));
            }
            Err(e) => {
                warn!("Failed to save theme: {:#}", e);
                self.toasts
                    .warning(format!("Theme: {} (not saved)", next.name()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(crossterm::event::MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn app() -> App {
        let config = Config {
            launch_delay_ms: 20,
            ..Config::default()
        };
        App::new(config, None, Handle::current())
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame).unwrap()).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[tokio::test]
    async fn test_number_keys_switch_screens() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.session().current_screen, ScreenId::SteamLibrary);
        app.handle_event(key(KeyCode::Char('4'))).unwrap();
        assert_eq!(app.session().current_view(), View::Settings);
        app.handle_event(key(KeyCode::Esc)).unwrap();
        assert_eq!(app.session().current_screen, ScreenId::Home);
    }

    #[tokio::test]
    async fn test_tab_cycles_nav_bar() {
        let mut app = app();
        app.handle_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.session().current_screen, ScreenId::LocalLibrary);
        app.handle_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.session().current_screen, ScreenId::Settings);
        app.handle_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.session().current_screen, ScreenId::Home);
    }

    #[tokio::test]
    async fn test_launch_and_end_stream() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('3'))).unwrap();
        app.handle_event(key(KeyCode::Enter)).unwrap();

        assert!(app.session().is_streaming);
        assert_eq!(
            app.session().launching_game.as_deref(),
            Some("Cyberpunk 2077 (Local)")
        );
        assert!(screen_text(&mut app).contains("Cyberpunk 2077 (Local)"));

        tokio::time::sleep(Duration::from_millis(200)).await;
        app.tick();
        assert!(app.session().launching_game.is_none());
        assert!(app.session().is_streaming);
        assert_eq!(
            app.toasts().current().map(|t| t.message.as_str()),
            Some("Now streaming: Cyberpunk 2077 (Local)")
        );

        app.handle_event(key(KeyCode::Char('e'))).unwrap();
        assert!(!app.session().is_streaming);
        assert_eq!(app.session().current_view(), View::LocalLibrary);
    }

    #[tokio::test]
    async fn test_global_keys_ignored_while_typing() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('2'))).unwrap();
        app.handle_event(key(KeyCode::Char('/'))).unwrap();
        for c in "q1s".chars() {
            app.handle_event(key(KeyCode::Char(c))).unwrap();
        }
        assert!(!app.should_quit());
        assert_eq!(app.session().current_screen, ScreenId::SteamLibrary);
        assert_eq!(app.session().search_query, "q1s");
    }

    #[tokio::test]
    async fn test_search_is_shared_between_libraries() {
        let mut app = app();
        app.apply_action(ScreenAction::SetSearch("hades".to_string()))
            .unwrap();
        app.handle_event(key(KeyCode::Char('3'))).unwrap();
        let text = screen_text(&mut app);
        assert!(text.contains("Hades (Local)"));
        assert!(!text.contains("The Witcher 3 (Local)"));
    }

    #[tokio::test]
    async fn test_settings_toggle_and_connection_toast() {
        let mut app = app();
        app.apply_action(ScreenAction::ToggleSteam).unwrap();
        assert!(app.session().steam_connected);
        app.apply_action(ScreenAction::ToggleSteam).unwrap();
        assert!(!app.session().steam_connected);

        app.apply_action(ScreenAction::TestConnection).unwrap();
        let toast = app.toasts().current().unwrap();
        assert!(toast.message.contains("192.168.1.100"));
    }

    #[tokio::test]
    async fn test_chrome_is_drawn() {
        let mut app = app();
        let text = screen_text(&mut app);
        assert!(text.contains("GameHub"));
        assert!(text.contains("Home"));
        assert!(text.contains("Settings"));
        assert!(text.contains("Quit: Q"));
    }

    #[tokio::test]
    async fn test_header_clicks_go_back_and_open_settings() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('2'))).unwrap();
        screen_text(&mut app);

        app.handle_event(click(1, 0)).unwrap();
        assert_eq!(app.session().current_screen, ScreenId::Home);

        // The gear sits at the right edge, inside the header padding
        app.handle_event(click(77, 0)).unwrap();
        assert_eq!(app.session().current_screen, ScreenId::Settings);
    }

    #[tokio::test]
    async fn test_quit() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit());
    }
}
