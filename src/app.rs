//! Mount API - application lifecycle and render effect.
//!
//! `mount()` wires the reactive pipeline: one render effect composes a
//! frame from the state signals and writes it to the terminal; the tick
//! loop owns stdin, translates crossterm events, and feeds the keyboard
//! dispatcher, the scroll tracker, and the copy indicator.
//!
//! # Example
//!
//! ```ignore
//! let storage = Rc::new(FileStorage::default_location());
//! let handle = mount(storage, Rc::new(BufferClipboard::new()))?;
//! run(&handle)?;
//! handle.unmount();
//! ```

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use spark_signals::{effect, signal, Signal};

use crate::error::DocsError;
use crate::render::{compose, first_code_block, layout_content, FrameInput, Screen};
use crate::search::SearchState;
use crate::state::app::AppState;
use crate::state::clipboard::{ClipboardBackend, CopyIndicator};
use crate::state::keyboard::{self, KeyboardEvent, Modifiers};
use crate::state::keys::{self, GlobalKeysHandle};
use crate::state::scroll::ScrollTracker;
use crate::storage::Storage;
use crate::theme;

/// Rows per scroll step for PageUp/PageDown.
const PAGE_STEP: i32 = 10;

/// Frame geometry published by the render effect, read by the tick loop.
#[derive(Clone, Copy, Default)]
struct Geometry {
    content_rows: usize,
    viewport_rows: usize,
    content_width: usize,
}

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`] that allows ticking and unmounting.
pub struct MountHandle {
    app: AppState,
    search: SearchState,
    tracker: Rc<RefCell<ScrollTracker>>,
    indicator: Rc<CopyIndicator>,
    scroll_y: Signal<i32>,
    size: Signal<(u16, u16)>,
    geometry: Rc<Cell<Geometry>>,
    screen: Rc<RefCell<Screen>>,
    running: Arc<AtomicBool>,
    stop_effect: Option<Box<dyn FnOnce()>>,
    global_keys: Option<GlobalKeysHandle>,
    key_cleanups: Vec<Box<dyn FnOnce()>>,
    // Theme persist failure, reported on stderr once the terminal is
    // restored (the status line is gone by then).
    persist_error: Rc<RefCell<Option<DocsError>>>,
    // Tick-loop change detection.
    marked_section: Cell<&'static str>,
    marked_width: Cell<usize>,
}

impl MountHandle {
    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request graceful shutdown.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// The application state, for embedding hosts.
    pub fn app(&self) -> &AppState {
        &self.app
    }

    /// Stop the render effect, deregister handlers, restore the terminal.
    pub fn unmount(mut self) {
        self.running.store(false, Ordering::SeqCst);

        if let Some(handle) = self.global_keys.take() {
            handle.cleanup();
        }
        for cleanup in self.key_cleanups.drain(..) {
            cleanup();
        }
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }

        let _ = self.screen.borrow_mut().leave();

        if let Some(err) = self.persist_error.borrow_mut().take() {
            eprintln!("zendoc: theme preference not saved: {err}");
        }
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
        // Best effort restore.
        let _ = self.screen.borrow_mut().leave();
    }
}

// =============================================================================
// Mount
// =============================================================================

/// Mount the documentation browser.
///
/// Sets up the terminal, the render effect, and the key handlers. The
/// theme preference is read from `storage` before the first frame.
pub fn mount(
    storage: Rc<dyn Storage>,
    clipboard: Rc<dyn ClipboardBackend>,
) -> io::Result<MountHandle> {
    let app = AppState::with_storage(storage.as_ref());
    let search = SearchState::new();
    let tracker = Rc::new(RefCell::new(ScrollTracker::default()));
    let indicator = Rc::new(CopyIndicator::new());
    let scroll_y = signal(0i32);
    let size = signal(Screen::size()?);
    let geometry = Rc::new(Cell::new(Geometry::default()));

    let screen = Rc::new(RefCell::new(Screen::new()));
    screen.borrow_mut().enter()?;

    let running = Arc::new(AtomicBool::new(true));

    // The ONE render effect: recomposes whenever any state it read changes.
    let stop_effect = {
        let app = app.clone();
        let search = search.clone();
        let active_heading = tracker.borrow().heading_signal();
        let copied = indicator.copied_signal();
        let scroll_y = scroll_y.clone();
        let size = size.clone();
        let geometry = geometry.clone();
        let screen = screen.clone();
        let running = running.clone();

        effect(move || {
            if !running.load(Ordering::SeqCst) {
                return;
            }

            let (width, height) = size.get();
            let frame = compose(&FrameInput {
                app: &app,
                search: &search,
                active_heading: active_heading.get(),
                copied: copied.get(),
                scroll_y: scroll_y.get(),
                width,
                height,
            });

            geometry.set(Geometry {
                content_rows: frame.content_rows,
                viewport_rows: frame.viewport_rows,
                content_width: frame.content_width,
            });

            let _ = screen.borrow_mut().draw(&frame);
        })
    };

    let persist_error = Rc::new(RefCell::new(None));

    let global_keys = keys::setup_global_keys(&app, &search, running.clone());
    let key_cleanups = setup_app_keys(
        &app,
        &search,
        &storage,
        &clipboard,
        &indicator,
        &scroll_y,
        &geometry,
        &persist_error,
    );

    Ok(MountHandle {
        app,
        search,
        tracker,
        indicator,
        scroll_y,
        size,
        geometry,
        screen,
        running,
        stop_effect: Some(Box::new(stop_effect)),
        global_keys: Some(global_keys),
        key_cleanups,
        persist_error,
        marked_section: Cell::new(""),
        marked_width: Cell::new(0),
    })
}

/// Register the app-level keys: scrolling, copy, theme, sidebar.
fn setup_app_keys(
    app: &AppState,
    search: &SearchState,
    storage: &Rc<dyn Storage>,
    clipboard: &Rc<dyn ClipboardBackend>,
    indicator: &Rc<CopyIndicator>,
    scroll_y: &Signal<i32>,
    geometry: &Rc<Cell<Geometry>>,
    persist_error: &Rc<RefCell<Option<DocsError>>>,
) -> Vec<Box<dyn FnOnce()>> {
    let mut cleanups: Vec<Box<dyn FnOnce()>> = Vec::new();

    let scroll = |delta: i32| {
        let scroll_y = scroll_y.clone();
        let geometry = geometry.clone();
        move || {
            let geo = geometry.get();
            let max = geo.content_rows.saturating_sub(geo.viewport_rows) as i32;
            let next = (scroll_y.get() + delta).clamp(0, max);
            if next != scroll_y.get() {
                scroll_y.set(next);
            }
            true
        }
    };
    cleanups.push(Box::new(keyboard::on_key("ArrowDown", scroll(1))));
    cleanups.push(Box::new(keyboard::on_key("ArrowUp", scroll(-1))));
    cleanups.push(Box::new(keyboard::on_key("PageDown", scroll(PAGE_STEP))));
    cleanups.push(Box::new(keyboard::on_key("PageUp", scroll(-PAGE_STEP))));

    // Copy the current section's first code sample. A plain "c" only -
    // Ctrl+C is shutdown and must not reach this handler.
    {
        let app = app.clone();
        let clipboard = clipboard.clone();
        let indicator = indicator.clone();
        let copy = keyboard::on(move |event| {
            if event.key != "c" || event.modifiers.ctrl || event.modifiers.alt {
                return false;
            }
            copy_current(&app, clipboard.as_ref(), &indicator);
            true
        });
        cleanups.push(Box::new(copy));
    }

    {
        let app = app.clone();
        let storage = storage.clone();
        let persist_error = persist_error.clone();
        let toggle = keyboard::on_key("t", move || {
            switch_theme(&app, storage.as_ref(), &persist_error);
            true
        });
        cleanups.push(Box::new(toggle));
    }

    {
        let app = app.clone();
        let toggle = keyboard::on_key("b", move || {
            app.toggle_sidebar();
            true
        });
        cleanups.push(Box::new(toggle));
    }

    {
        let app = app.clone();
        let toggle = keyboard::on_key("m", move || {
            app.toggle_mobile_menu();
            true
        });
        cleanups.push(Box::new(toggle));
    }

    // Escape blurs the search box even when it is not capturing text.
    {
        let search = search.clone();
        let escape = keyboard::on_key("Escape", move || {
            if search.is_focused() {
                search.blur();
                true
            } else {
                false
            }
        });
        cleanups.push(Box::new(escape));
    }

    cleanups
}

/// Copy the current section's first code sample.
///
/// A failed write reaches the user through the status line; the copied
/// indicator never turns on for it. Success clears any stale message.
fn copy_current(app: &AppState, clipboard: &dyn ClipboardBackend, indicator: &CopyIndicator) {
    let Some((block_id, source)) = first_code_block(&app.active_section()) else {
        return;
    };
    match indicator.copy_block(clipboard, block_id, source) {
        Ok(()) => app.clear_status(),
        Err(err) => app.set_status(format!("copy failed: {err}")),
    }
}

/// Flip the theme. The mode always changes; a persist failure is shown on
/// the status line and kept for the stderr report at unmount.
fn switch_theme(app: &AppState, storage: &dyn Storage, persist_error: &RefCell<Option<DocsError>>) {
    match app.toggle_theme(storage) {
        Ok(()) => app.clear_status(),
        Err(err) => {
            app.set_status(format!("theme not saved: {err}"));
            *persist_error.borrow_mut() = Some(err);
        }
    }
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run the event loop once (non-blocking, ~60fps poll).
///
/// Returns `Ok(false)` when the application should stop.
pub fn tick(handle: &MountHandle) -> io::Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    if event::poll(Duration::from_millis(16))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(ke) = translate_key(&key) {
                    route_key(handle, ke);
                }
            }
            Event::Resize(w, h) => {
                // Drop the row cache first: the size signal redraws
                // synchronously and every row must be rewritten.
                handle.screen.borrow_mut().invalidate();
                handle.size.set((w, h));
            }
            _ => {}
        }
    }

    sync_scroll_marks(handle);
    handle.tracker.borrow().on_scroll(&handle.app, handle.scroll_y.get());
    handle.indicator.poll();

    Ok(handle.is_running())
}

/// Run the event loop until stopped.
pub fn run(handle: &MountHandle) -> io::Result<()> {
    while tick(handle)? {}
    Ok(())
}

fn route_key(handle: &MountHandle, event: KeyboardEvent) {
    // A focused search box captures plain keys as text input.
    if handle.search.is_focused() && !event.modifiers.ctrl && !event.modifiers.alt {
        if search_input(&handle.search, &handle.app, &event) {
            return;
        }
    }
    keyboard::dispatch(event);
}

/// Feed a key into the search box. Returns false for keys the box does
/// not handle, which then go through normal dispatch.
fn search_input(search: &SearchState, app: &AppState, event: &KeyboardEvent) -> bool {
    match event.key.as_str() {
        "Enter" => {
            search.submit(app);
            true
        }
        "Escape" => {
            search.blur();
            true
        }
        // The result cursor owns the arrows while the box is focused;
        // content scrolling resumes on blur.
        "ArrowDown" => {
            search.move_cursor(1);
            true
        }
        "ArrowUp" => {
            search.move_cursor(-1);
            true
        }
        "Backspace" => {
            let query = search.query();
            let mut chars = query.chars();
            chars.next_back();
            search.set_query(chars.as_str());
            true
        }
        _ => match event.text_char() {
            Some(c) => {
                search.set_query(format!("{}{}", search.query(), c));
                true
            }
            None => false,
        },
    }
}

/// Re-register scroll marks when the section or the wrap width changed.
fn sync_scroll_marks(handle: &MountHandle) {
    let geo = handle.geometry.get();
    if geo.content_width == 0 {
        return;
    }

    let active = handle.app.resolved_section();
    if handle.marked_section.get() == active && handle.marked_width.get() == geo.content_width {
        return;
    }

    let section_changed = handle.marked_section.get() != active;
    let layout = layout_content(
        active,
        geo.content_width,
        &theme::for_mode(handle.app.dark_mode()),
        None,
    );
    handle
        .tracker
        .borrow_mut()
        .set_content(vec![layout.span], layout.headings);
    handle.marked_section.set(active);
    handle.marked_width.set(geo.content_width);

    // A new section starts at the top.
    if section_changed && handle.scroll_y.get() != 0 {
        handle.scroll_y.set(0);
    }
}

fn translate_key(key: &KeyEvent) -> Option<KeyboardEvent> {
    let name = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        _ => return None,
    };

    Some(KeyboardEvent::with_modifiers(
        name,
        Modifiers {
            ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
            alt: key.modifiers.contains(KeyModifiers::ALT),
            shift: key.modifiers.contains(KeyModifiers::SHIFT),
        },
    ))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::clipboard::BufferClipboard;
    use crate::storage::MemStorage;

    struct FailingClipboard;

    impl ClipboardBackend for FailingClipboard {
        fn write(&self, _text: &str) -> Result<(), DocsError> {
            Err(DocsError::Clipboard("denied".into()))
        }
    }

    struct FailingStorage;

    impl Storage for FailingStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    #[test]
    fn test_translate_named_keys() {
        let key = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(translate_key(&key).unwrap().key, "ArrowLeft");

        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(translate_key(&key).unwrap().key, "x");

        let key = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert!(translate_key(&key).is_none());
    }

    #[test]
    fn test_translate_modifiers() {
        let key = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);
        let event = translate_key(&key).unwrap();
        assert!(event.modifiers.ctrl);
        assert!(!event.modifiers.shift);
    }

    #[test]
    fn test_search_input_builds_query() {
        let app = AppState::new();
        let search = SearchState::new();
        search.focus();

        for c in ["w", "a", "l"] {
            assert!(search_input(&search, &app, &KeyboardEvent::new(c)));
        }
        assert_eq!(search.query(), "wal");

        assert!(search_input(&search, &app, &KeyboardEvent::new("Backspace")));
        assert_eq!(search.query(), "wa");
    }

    #[test]
    fn test_search_input_submit_navigates() {
        let app = AppState::new();
        let search = SearchState::new();
        search.focus();
        search.set_query("installation");

        assert!(search_input(&search, &app, &KeyboardEvent::new("Enter")));
        assert_eq!(app.active_section(), "installation");
        assert!(!search.is_focused());
        assert_eq!(search.query(), "");
    }

    #[test]
    fn test_search_input_escape_blurs() {
        let app = AppState::new();
        let search = SearchState::new();
        search.focus();

        assert!(search_input(&search, &app, &KeyboardEvent::new("Escape")));
        assert!(!search.is_focused());
    }

    #[test]
    fn test_search_input_arrows_move_result_cursor() {
        let app = AppState::new();
        let search = SearchState::new();
        search.focus();
        search.set_query("wallet");

        assert!(search_input(&search, &app, &KeyboardEvent::new("ArrowDown")));
        assert_eq!(search.cursor(), 1);

        assert!(search_input(&search, &app, &KeyboardEvent::new("ArrowUp")));
        assert_eq!(search.cursor(), 0);
    }

    #[test]
    fn test_search_input_enter_selects_cursor_result() {
        let app = AppState::new();
        let search = SearchState::new();
        search.focus();
        search.set_query("wallet");
        let second = search.results()[1].id;

        assert!(search_input(&search, &app, &KeyboardEvent::new("ArrowDown")));
        assert!(search_input(&search, &app, &KeyboardEvent::new("Enter")));

        assert_eq!(app.active_section(), second);
        assert!(!search.is_focused());
    }

    #[test]
    fn test_copy_failure_reaches_status_line() {
        let app = AppState::new();
        let indicator = CopyIndicator::new();
        app.navigate("installation");

        copy_current(&app, &FailingClipboard, &indicator);

        assert!(app.status().unwrap().contains("copy failed"));
        assert_eq!(indicator.copied_block(), None);
    }

    #[test]
    fn test_copy_success_clears_stale_status() {
        let app = AppState::new();
        let indicator = CopyIndicator::new();
        let clipboard = BufferClipboard::new();
        app.navigate("installation");
        app.set_status("copy failed: clipboard error: denied");

        copy_current(&app, &clipboard, &indicator);

        assert_eq!(app.status(), None);
        assert!(indicator.copied_block().is_some());
        assert!(clipboard.paste().is_some());
    }

    #[test]
    fn test_theme_persist_failure_is_reported_and_kept() {
        let app = AppState::new();
        let persist_error = RefCell::new(None);

        switch_theme(&app, &FailingStorage, &persist_error);

        // The mode still flips; the failure is on the status line and
        // retained for the shutdown report.
        assert!(app.dark_mode());
        assert!(app.status().unwrap().contains("theme not saved"));
        assert!(persist_error.borrow().is_some());
    }

    #[test]
    fn test_theme_persist_success_clears_status() {
        let app = AppState::new();
        let storage = MemStorage::new();
        let persist_error = RefCell::new(None);
        app.set_status("theme not saved: permission denied");

        switch_theme(&app, &storage, &persist_error);

        assert!(app.dark_mode());
        assert_eq!(app.status(), None);
        assert!(persist_error.borrow().is_none());
    }
}
