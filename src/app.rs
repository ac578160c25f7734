//! Application state machine: screens, transitions and per-screen input.

use std::path::Path;

use rand::rngs::ThreadRng;

use crate::accounts::AccountStore;
use crate::audio::{AudioOutput, MusicTrack, SoundCue};
use crate::game::logic::{self, StepEvent};
use crate::game::types::{Direction, SnakeSim};
use crate::input::AppInput;
use crate::leaderboard::Leaderboard;
use crate::settings::{Settings, SettingsStore};
use crate::ui::text_field::TextField;

/// The screen currently owning input and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Menu,
    Playing,
    Paused,
    GameOver,
    Settings,
    Leaderboard,
}

pub const MENU_ITEMS: [&str; 4] = ["Play", "Settings", "Leaderboard", "Exit"];
pub const PAUSE_ITEMS: [&str; 3] = ["Resume", "Settings", "Main Menu"];
pub const GAME_OVER_ITEMS: [&str; 2] = ["Play Again", "Main Menu"];
pub const SETTINGS_ROWS: [&str; 5] = ["Difficulty", "Music", "Sound Effects", "Save", "Back"];

/// Login screen focus order: username, password, then the two buttons.
pub const LOGIN_SUBMIT: usize = 2;
pub const LOGIN_TO_REGISTER: usize = 3;
pub const LOGIN_SLOTS: usize = 4;

/// Register screen focus order: three fields, then the two buttons.
pub const REGISTER_SUBMIT: usize = 3;
pub const REGISTER_TO_LOGIN: usize = 4;
pub const REGISTER_SLOTS: usize = 5;

#[derive(Debug, Default)]
pub struct LoginForm {
    pub username: TextField,
    pub password: TextField,
    pub focus: usize,
    pub error: Option<String>,
    /// One-shot notice, e.g. after a successful registration.
    pub info: Option<String>,
}

#[derive(Debug, Default)]
pub struct RegisterForm {
    pub username: TextField,
    pub password: TextField,
    pub confirm: TextField,
    pub focus: usize,
    pub error: Option<String>,
}

pub struct App {
    pub screen: Screen,
    /// Where the settings screen returns to (menu or pause).
    pub settings_return: Screen,
    pub should_quit: bool,

    pub settings: Settings,
    pub settings_store: SettingsStore,
    pub accounts: AccountStore,
    pub leaderboard: Leaderboard,
    pub sim: SnakeSim,
    pub audio: AudioOutput,

    pub login: LoginForm,
    pub register: RegisterForm,
    pub menu_selected: usize,
    pub pause_selected: usize,
    pub over_selected: usize,
    pub settings_selected: usize,

    rng: ThreadRng,
}

impl App {
    /// Builds the application from the stores under `data_dir` and starts on
    /// the login screen.
    pub fn new(data_dir: &Path, mut audio: AudioOutput) -> Self {
        let settings_store = SettingsStore::new(data_dir);
        let settings = settings_store.load();
        let mut rng = rand::thread_rng();
        let sim = SnakeSim::new(settings.difficulty, &mut rng);

        audio.play_music(MusicTrack::Menu, settings.music_enabled);

        let mut login = LoginForm::default();
        login.password.masked = true;

        let mut register = RegisterForm::default();
        register.password.masked = true;
        register.confirm.masked = true;

        Self {
            screen: Screen::Login,
            settings_return: Screen::Menu,
            should_quit: false,
            settings,
            settings_store,
            accounts: AccountStore::open(data_dir),
            leaderboard: Leaderboard::open(data_dir),
            sim,
            audio,
            login,
            register,
            menu_selected: 0,
            pause_selected: 0,
            over_selected: 0,
            settings_selected: 0,
            rng,
        }
    }

    /// Routes one input to the current screen.
    pub fn handle_input(&mut self, input: AppInput) {
        match self.screen {
            Screen::Login => self.handle_login(input),
            Screen::Register => self.handle_register(input),
            Screen::Menu => self.handle_menu(input),
            Screen::Playing => self.handle_playing(input),
            Screen::Paused => self.handle_paused(input),
            Screen::GameOver => self.handle_game_over(input),
            Screen::Settings => self.handle_settings(input),
            Screen::Leaderboard => self.handle_leaderboard(input),
        }
    }

    /// Advances real time. Only the play screen simulates; every other
    /// screen is static between inputs.
    pub fn update(&mut self, dt_ms: u64) {
        if self.screen != Screen::Playing {
            return;
        }
        let events = logic::advance(&mut self.sim, dt_ms, &mut self.rng);
        for event in events {
            match event {
                StepEvent::Ate => self.play_cue(SoundCue::Eat),
                StepEvent::BonusPicked => self.play_cue(SoundCue::Bonus),
                StepEvent::PenaltyPicked => self.play_cue(SoundCue::Penalty),
                StepEvent::GameOver => self.finish_game(),
            }
        }
    }

    pub fn current_user(&self) -> &str {
        self.accounts.current_user().unwrap_or("player")
    }

    fn finish_game(&mut self) {
        let name = self.current_user().to_string();
        self.leaderboard.add_score(&name, self.sim.score);
        self.over_selected = 0;
        self.screen = Screen::GameOver;
        self.audio
            .play_music(MusicTrack::GameOver, self.settings.music_enabled);
    }

    fn play_cue(&mut self, cue: SoundCue) {
        self.audio.play_cue(cue, self.settings.sound_enabled);
    }

    fn play_music(&mut self, track: MusicTrack) {
        self.audio.play_music(track, self.settings.music_enabled);
    }

    fn handle_login(&mut self, input: AppInput) {
        match input {
            AppInput::NextField | AppInput::Down => {
                self.login.focus = (self.login.focus + 1) % LOGIN_SLOTS;
            }
            AppInput::Up => {
                self.login.focus = (self.login.focus + LOGIN_SLOTS - 1) % LOGIN_SLOTS;
            }
            AppInput::Char(c) => {
                if let Some(field) = self.login_focused_field() {
                    field.push(c);
                }
            }
            AppInput::Backspace => {
                if let Some(field) = self.login_focused_field() {
                    field.pop();
                }
            }
            AppInput::Activate => {
                self.play_cue(SoundCue::Click);
                match self.login.focus {
                    LOGIN_TO_REGISTER => {
                        self.register = RegisterForm::default();
                        self.register.password.masked = true;
                        self.register.confirm.masked = true;
                        self.screen = Screen::Register;
                    }
                    LOGIN_SUBMIT => self.submit_login(),
                    // Enter inside a field advances the focus
                    _ => self.login.focus += 1,
                }
            }
            AppInput::Back => self.should_quit = true,
            _ => {}
        }
    }

    fn login_focused_field(&mut self) -> Option<&mut TextField> {
        match self.login.focus {
            0 => Some(&mut self.login.username),
            1 => Some(&mut self.login.password),
            _ => None,
        }
    }

    fn submit_login(&mut self) {
        let username = self.login.username.value.clone();
        let password = self.login.password.value.clone();
        if self.accounts.login(&username, &password) {
            self.login.error = None;
            self.login.info = None;
            self.login.password.clear();
            self.menu_selected = 0;
            self.screen = Screen::Menu;
            self.play_music(MusicTrack::Menu);
        } else {
            self.login.error = Some("Invalid username or password".to_string());
            self.login.info = None;
        }
    }

    fn handle_register(&mut self, input: AppInput) {
        match input {
            AppInput::NextField | AppInput::Down => {
                self.register.focus = (self.register.focus + 1) % REGISTER_SLOTS;
            }
            AppInput::Up => {
                self.register.focus = (self.register.focus + REGISTER_SLOTS - 1) % REGISTER_SLOTS;
            }
            AppInput::Char(c) => {
                if let Some(field) = self.register_focused_field() {
                    field.push(c);
                }
            }
            AppInput::Backspace => {
                if let Some(field) = self.register_focused_field() {
                    field.pop();
                }
            }
            AppInput::Activate => {
                self.play_cue(SoundCue::Click);
                match self.register.focus {
                    REGISTER_TO_LOGIN => self.back_to_login(),
                    REGISTER_SUBMIT => self.submit_register(),
                    _ => self.register.focus += 1,
                }
            }
            AppInput::Back => self.back_to_login(),
            _ => {}
        }
    }

    fn register_focused_field(&mut self) -> Option<&mut TextField> {
        match self.register.focus {
            0 => Some(&mut self.register.username),
            1 => Some(&mut self.register.password),
            2 => Some(&mut self.register.confirm),
            _ => None,
        }
    }

    fn back_to_login(&mut self) {
        self.login.focus = 0;
        self.screen = Screen::Login;
    }

    fn submit_register(&mut self) {
        let username = self.register.username.value.clone();
        let password = self.register.password.value.clone();
        let confirm = self.register.confirm.value.clone();

        if username.is_empty() || password.is_empty() {
            self.register.error = Some("Username and password are required".to_string());
            return;
        }
        if password != confirm {
            self.register.error = Some("Passwords do not match".to_string());
            return;
        }
        if !self.accounts.register(&username, &password) {
            self.register.error = Some("Username already taken".to_string());
            return;
        }

        self.register.error = None;
        self.login = LoginForm::default();
        self.login.password.masked = true;
        self.login.info = Some("Account created, please log in".to_string());
        self.screen = Screen::Login;
    }

    fn handle_menu(&mut self, input: AppInput) {
        match input {
            AppInput::Up => {
                self.menu_selected = (self.menu_selected + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
            }
            AppInput::Down => {
                self.menu_selected = (self.menu_selected + 1) % MENU_ITEMS.len();
            }
            AppInput::Activate => {
                self.play_cue(SoundCue::Click);
                match self.menu_selected {
                    0 => self.start_game(),
                    1 => self.open_settings(Screen::Menu),
                    2 => self.screen = Screen::Leaderboard,
                    _ => self.should_quit = true,
                }
            }
            AppInput::Back => self.should_quit = true,
            _ => {}
        }
    }

    fn start_game(&mut self) {
        self.sim.set_difficulty(self.settings.difficulty);
        self.sim.reset(&mut self.rng);
        self.screen = Screen::Playing;
        self.play_music(MusicTrack::Game);
    }

    fn open_settings(&mut self, return_to: Screen) {
        self.settings_return = return_to;
        self.settings_selected = 0;
        self.screen = Screen::Settings;
        self.play_music(MusicTrack::Settings);
    }

    fn handle_playing(&mut self, input: AppInput) {
        match input {
            AppInput::Up => logic::change_direction(&mut self.sim, Direction::Up),
            AppInput::Down => logic::change_direction(&mut self.sim, Direction::Down),
            AppInput::Left => logic::change_direction(&mut self.sim, Direction::Left),
            AppInput::Right => logic::change_direction(&mut self.sim, Direction::Right),
            AppInput::Back => {
                self.pause_selected = 0;
                self.screen = Screen::Paused;
                self.audio.stop_music();
            }
            _ => {}
        }
    }

    fn handle_paused(&mut self, input: AppInput) {
        match input {
            AppInput::Up => {
                self.pause_selected =
                    (self.pause_selected + PAUSE_ITEMS.len() - 1) % PAUSE_ITEMS.len();
            }
            AppInput::Down => {
                self.pause_selected = (self.pause_selected + 1) % PAUSE_ITEMS.len();
            }
            AppInput::Activate => {
                self.play_cue(SoundCue::Click);
                match self.pause_selected {
                    0 => self.resume_game(),
                    1 => self.open_settings(Screen::Paused),
                    _ => self.abandon_to_menu(),
                }
            }
            AppInput::Back => self.resume_game(),
            _ => {}
        }
    }

    fn resume_game(&mut self) {
        self.screen = Screen::Playing;
        self.play_music(MusicTrack::Game);
    }

    /// Leaving a paused game discards it; nothing is scored.
    fn abandon_to_menu(&mut self) {
        self.sim.reset(&mut self.rng);
        self.menu_selected = 0;
        self.screen = Screen::Menu;
        self.play_music(MusicTrack::Menu);
    }

    fn handle_game_over(&mut self, input: AppInput) {
        match input {
            AppInput::Up => {
                self.over_selected =
                    (self.over_selected + GAME_OVER_ITEMS.len() - 1) % GAME_OVER_ITEMS.len();
            }
            AppInput::Down => {
                self.over_selected = (self.over_selected + 1) % GAME_OVER_ITEMS.len();
            }
            AppInput::Activate => {
                self.play_cue(SoundCue::Click);
                match self.over_selected {
                    0 => self.start_game(),
                    _ => self.abandon_to_menu(),
                }
            }
            AppInput::Back => self.abandon_to_menu(),
            _ => {}
        }
    }

    fn handle_settings(&mut self, input: AppInput) {
        match input {
            AppInput::Up => {
                self.settings_selected =
                    (self.settings_selected + SETTINGS_ROWS.len() - 1) % SETTINGS_ROWS.len();
            }
            AppInput::Down => {
                self.settings_selected = (self.settings_selected + 1) % SETTINGS_ROWS.len();
            }
            AppInput::Left | AppInput::Right => self.adjust_setting(input == AppInput::Right),
            AppInput::Activate => {
                self.play_cue(SoundCue::Click);
                match self.settings_selected {
                    3 => {
                        let _ = self.settings_store.save(&self.settings);
                    }
                    4 => self.close_settings(),
                    _ => self.adjust_setting(true),
                }
            }
            AppInput::Back => self.close_settings(),
            _ => {}
        }
    }

    /// Mutates the selected row in place. Changes take effect immediately;
    /// only the save row persists them.
    fn adjust_setting(&mut self, forward: bool) {
        match self.settings_selected {
            0 => {
                self.settings.difficulty = if forward {
                    self.settings.difficulty.next()
                } else {
                    self.settings.difficulty.prev()
                };
                self.sim.set_difficulty(self.settings.difficulty);
            }
            1 => {
                self.settings.music_enabled = !self.settings.music_enabled;
                if self.settings.music_enabled {
                    self.play_music(MusicTrack::Settings);
                } else {
                    self.audio.stop_music();
                }
            }
            2 => {
                self.settings.sound_enabled = !self.settings.sound_enabled;
            }
            _ => {}
        }
    }

    fn close_settings(&mut self) {
        self.screen = self.settings_return;
        match self.settings_return {
            Screen::Menu => self.play_music(MusicTrack::Menu),
            // Back to the pause overlay, which keeps music stopped
            _ => self.audio.stop_music(),
        }
    }

    fn handle_leaderboard(&mut self, input: AppInput) {
        if matches!(input, AppInput::Back | AppInput::Activate) {
            self.menu_selected = 0;
            self.screen = Screen::Menu;
        }
    }
}
