use std::fs;
use std::path::{Path, PathBuf};

use serpent::app::{App, Screen, LOGIN_SUBMIT, LOGIN_TO_REGISTER, REGISTER_SUBMIT};
use serpent::audio::AudioOutput;
use serpent::input::AppInput;
use serpent::leaderboard::Leaderboard;
use serpent::settings::{Difficulty, SettingsStore};

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("serpent-flow-{}-{}", tag, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn app(dir: &Path) -> App {
    App::new(dir, AudioOutput::disabled())
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_input(AppInput::Char(c));
    }
}

#[test]
fn test_register_then_login_journey() {
    let dir = scratch_dir("journey");
    let mut app = app(&dir);

    app.login.focus = LOGIN_TO_REGISTER;
    app.handle_input(AppInput::Activate);
    assert_eq!(app.screen, Screen::Register);

    type_text(&mut app, "alice");
    app.handle_input(AppInput::NextField);
    type_text(&mut app, "secret");
    app.handle_input(AppInput::NextField);
    type_text(&mut app, "secret");
    app.register.focus = REGISTER_SUBMIT;
    app.handle_input(AppInput::Activate);
    assert_eq!(app.screen, Screen::Login);

    type_text(&mut app, "alice");
    app.handle_input(AppInput::NextField);
    type_text(&mut app, "secret");
    app.login.focus = LOGIN_SUBMIT;
    app.handle_input(AppInput::Activate);
    assert_eq!(app.screen, Screen::Menu);
    assert_eq!(app.current_user(), "alice");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_accounts_survive_restart() {
    let dir = scratch_dir("restart");
    {
        let mut first = app(&dir);
        assert!(first.accounts.register("bob", "pw"));
    }
    let mut second = app(&dir);
    type_text(&mut second, "bob");
    second.handle_input(AppInput::NextField);
    type_text(&mut second, "pw");
    second.login.focus = LOGIN_SUBMIT;
    second.handle_input(AppInput::Activate);
    assert_eq!(second.screen, Screen::Menu);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_settings_save_persists_to_disk() {
    let dir = scratch_dir("settings");
    let mut app = app(&dir);
    assert!(app.accounts.register("carl", "pw"));
    app.accounts.login("carl", "pw");
    app.screen = Screen::Menu;

    app.menu_selected = 1;
    app.handle_input(AppInput::Activate);
    assert_eq!(app.screen, Screen::Settings);

    app.handle_input(AppInput::Right); // Normal -> Hard
    app.settings_selected = 3; // Save
    app.handle_input(AppInput::Activate);

    let reloaded = SettingsStore::new(&dir).load();
    assert_eq!(reloaded.difficulty, Difficulty::Hard);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_unsaved_settings_are_not_persisted() {
    let dir = scratch_dir("unsaved");
    let mut app = app(&dir);
    app.screen = Screen::Settings;
    app.handle_input(AppInput::Right);
    app.handle_input(AppInput::Back);

    let reloaded = SettingsStore::new(&dir).load();
    assert_eq!(reloaded.difficulty, Difficulty::Normal);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_game_over_score_lands_in_the_score_file() {
    let dir = scratch_dir("scorefile");
    let mut app = app(&dir);
    assert!(app.accounts.register("dana", "pw"));
    app.accounts.login("dana", "pw");
    app.screen = Screen::Menu;
    app.handle_input(AppInput::Activate); // Play
    assert_eq!(app.screen, Screen::Playing);

    // Drive the snake into the left wall
    app.handle_input(AppInput::Up);
    app.update(app.sim.move_interval_ms);
    app.handle_input(AppInput::Left);
    for _ in 0..100 {
        app.update(app.sim.move_interval_ms);
        if app.screen == Screen::GameOver {
            break;
        }
    }
    assert_eq!(app.screen, Screen::GameOver);

    let board = Leaderboard::open(&dir);
    assert!(board.entries().iter().any(|e| e.name == "dana"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_abandoning_a_paused_game_scores_nothing() {
    let dir = scratch_dir("abandon");
    let mut app = app(&dir);
    assert!(app.accounts.register("elmo", "pw"));
    app.accounts.login("elmo", "pw");
    app.screen = Screen::Menu;
    app.handle_input(AppInput::Activate);
    app.sim.score = 9;

    app.handle_input(AppInput::Back);
    assert_eq!(app.screen, Screen::Paused);
    app.pause_selected = 2; // Main Menu
    app.handle_input(AppInput::Activate);
    assert_eq!(app.screen, Screen::Menu);

    let board = Leaderboard::open(&dir);
    assert!(board.entries().is_empty());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_escape_on_login_quits() {
    let dir = scratch_dir("quit");
    let mut app = app(&dir);
    app.handle_input(AppInput::Back);
    assert!(app.should_quit);
    let _ = fs::remove_dir_all(&dir);
}
