use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::state::{AppMode, AppState};
use crate::domain::clipboard::{ClipboardError, MockClipboardFacade};
use crate::domain::models::Section;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::draw(f, state)).unwrap();
    buffer_text(terminal.backend().buffer())
}

fn ctrl_c() -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
}

#[tokio::test]
async fn test_copy_command_reports_success() {
    let mut mock = MockClipboardFacade::new();
    mock.expect_set_text()
        .with(mockall::predicate::eq("git status"))
        .times(1)
        .returning(|_| Ok(()));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::CopyToClipboard("git status".to_string()),
        Arc::new(mock),
        tx,
    );

    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::CopyFinished("git status".to_string(), true));
}

#[tokio::test]
async fn test_copy_command_failure_becomes_status() {
    let mut mock = MockClipboardFacade::new();
    mock.expect_set_text()
        .returning(|_| Err(ClipboardError::Unavailable("headless".to_string())));

    let (tx, mut rx) = mpsc::channel(1);
    let mut state = AppState::default();
    handle_command(
        Command::CopyToClipboard("git log".to_string()),
        Arc::new(mock),
        tx,
    );

    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::CopyFinished("git log".to_string(), false));

    crate::app::reducer::update(&mut state, action);
    let status = state.status.unwrap();
    assert_eq!(status.message, "Clipboard unavailable");
}

#[tokio::test]
async fn test_copy_through_the_loop() {
    let mut mock = MockClipboardFacade::new();
    mock.expect_set_text()
        .with(mockall::predicate::eq("git help"))
        .times(1)
        .returning(|_| Ok(()));

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(10);

    let feeder = tokio::spawn(async move {
        let y = Event::Key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE));
        event_tx.send(Ok(y)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;
        event_tx.send(Ok(ctrl_c())).await.unwrap();
    });

    tokio::time::timeout(
        Duration::from_secs(5),
        run_loop_with_events(&mut terminal, AppState::default(), Arc::new(mock), event_rx),
    )
    .await
    .expect("loop timed out")
    .unwrap();
    feeder.await.unwrap();

    let screen = buffer_text(terminal.backend().buffer());
    assert!(screen.contains("Copied: git help"), "{screen}");
}

#[tokio::test]
async fn test_search_typed_through_the_loop() {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(20);

    for c in "/stash".chars() {
        event_tx
            .send(Ok(Event::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::NONE,
            ))))
            .await
            .unwrap();
    }
    event_tx
        .send(Ok(Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))))
        .await
        .unwrap();
    event_tx.send(Ok(ctrl_c())).await.unwrap();

    run_loop_with_events(
        &mut terminal,
        AppState::default(),
        Arc::new(MockClipboardFacade::new()),
        event_rx,
    )
    .await
    .unwrap();

    let screen = buffer_text(terminal.backend().buffer());
    assert!(screen.contains("Search Results for 'stash'"), "{screen}");
    assert!(screen.contains("Category: Stashing in Git"), "{screen}");
}

#[test]
fn test_render_commands_page() {
    let screen = render(&AppState::default(), 120, 40);
    assert!(screen.contains("Git Commands Documentation"));
    assert!(screen.contains("Basic Git Commands"));
    assert!(screen.contains("git help"));
    assert!(screen.contains("Total Commands: 165 commands across 20 categories"));
    assert!(screen.contains("READY"));
}

#[test]
fn test_render_problem_options() {
    let mut state = AppState::default();
    crate::app::reducer::update(&mut state, Action::SelectSection(Section::Problems));
    let screen = render(&state, 120, 40);
    assert!(screen.contains("To take all code from one branch to another"));
    assert!(screen.contains("Option 1"));
    assert!(screen.contains("Total Problems: 8 common Git problems with solutions"));
}

#[test]
fn test_render_no_results() {
    let state = AppState::default().with_query("zzzz");
    let screen = render(&state, 120, 40);
    assert!(screen.contains("No commands found matching your search."));
}

#[test]
fn test_render_modals() {
    let state = AppState {
        mode: AppMode::Help,
        ..Default::default()
    };
    assert!(render(&state, 120, 40).contains("HELP - KEYBINDINGS"));

    let mut state = AppState::default();
    crate::app::reducer::update(&mut state, Action::EnterThemeSelection);
    let screen = render(&state, 120, 40);
    assert!(screen.contains("SELECT THEME"));
    assert!(screen.contains("Gruvbox"));
}

#[test]
fn test_render_tiny_terminals() {
    let mut searching = AppState::default().with_query("branch");
    searching.mode = AppMode::Search;
    let mut problems = AppState::default();
    crate::app::reducer::update(&mut problems, Action::SelectSection(Section::Problems));
    let states = [AppState::default(), searching, problems];

    for state in &states {
        for (w, h) in [(1, 1), (5, 3), (20, 6), (40, 10), (80, 24)] {
            render(state, w, h);
        }
    }
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockClipboardFacade::new();
    mock.expect_set_text().returning(|_| Ok(()));

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => Event::Resize(rng.gen_range(10..200), rng.gen_range(10..100)),
                6..=20 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        let _ = event_tx.send(Ok(ctrl_c())).await;
    });

    let result = tokio::time::timeout(
        Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, Arc::new(mock), event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

/// Random key presses, minus the ones that end the session early.
fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(if c == 'q' || c == 'c' { 'x' } else { c })
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    Event::Mouse(MouseEvent {
        kind,
        column: rng.gen_range(0..size.width),
        row: rng.gen_range(0..size.height),
        modifiers: KeyModifiers::empty(),
    })
}
