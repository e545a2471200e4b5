//! Input and message handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{App, AppMessage};

/// Lines moved per mouse wheel notch.
const WHEEL_LINES: isize = 3;

impl App {
    /// Handle an incoming async message.
    /// All messages mark the app dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        tracing::trace!(message = msg.name(), "Handling message");
        match msg {
            AppMessage::PageLoaded {
                generation,
                append,
                result,
            } => {
                self.view_model.apply_page(generation, append, result);
            }
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Backspace => self.go_back(),

            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll.scroll_by(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll.scroll_by(-1);
            }
            KeyCode::PageDown | KeyCode::Char(' ') => {
                let page = self.scroll.page();
                self.scroll.scroll_by(page);
            }
            KeyCode::PageUp => {
                let page = self.scroll.page();
                self.scroll.scroll_by(-page);
            }
            KeyCode::Home | KeyCode::Char('g') => self.scroll.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll.scroll_to_bottom(),

            KeyCode::Char('r') | KeyCode::F(5) => self.retry_or_refresh(),
            KeyCode::Char('s') => self.share(),
            KeyCode::Char('o') => self.open_in_browser(),

            KeyCode::Tab => self.move_focus(1),
            KeyCode::BackTab => self.move_focus(-1),
            KeyCode::Enter | KeyCode::Char('d') => self.download_focused(),

            _ => {}
        }
    }

    /// Handle a mouse event.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.scroll.scroll_by(WHEEL_LINES);
                self.mark_dirty();
            }
            MouseEventKind::ScrollUp => {
                if self.scroll.is_at_top() {
                    if self.scroll.pull() {
                        tracing::debug!("Pull to refresh");
                        self.refresh();
                    }
                } else {
                    self.scroll.scroll_by(-WHEEL_LINES);
                }
                self.mark_dirty();
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.layout.asset_at_row(mouse.row, self.scroll.offset) {
                    self.download(index);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
impl App {
    /// Wait for one background message and handle it.
    pub(crate) async fn pump_one(&mut self) {
        let msg = match self.message_rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        };
        if let Some(msg) = msg {
            self.handle_message(msg);
        }
    }
}
