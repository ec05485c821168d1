use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, ToastLevel, update};
use crate::ui::style::Theme;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized or reading
    /// terminal events fails.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - todo-tui requires an interactive terminal")?;
        let size = terminal.size()?;
        let mut model = Model::new(self.lang, (size.width, size.height))
            .with_theme(Theme::for_mode(self.theme));
        tracing::info!(
            lang = self.lang.as_str(),
            width = size.width,
            height = size.height,
            "starting"
        );

        let _ = execute!(stdout(), EnableBracketedPaste);
        let mouse_captured = if self.mouse_enabled {
            match execute!(stdout(), EnableMouseCapture) {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(%err, "mouse capture unavailable");
                    model.show_toast(ToastLevel::Warning, format!("Mouse unavailable: {err}"));
                    false
                }
            }
        } else {
            false
        };

        let result = self.event_loop(&mut terminal, &mut model);

        // Restore terminal
        if mouse_captured {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        let _ = execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();

        tracing::info!(items = model.todos.len(), "exiting");
        result
    }

    fn event_loop(&self, terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if model.take_clear_request() {
                terminal.clear()?;
                needs_render = true;
            }

            if needs_render {
                frame_idx += 1;
                let draw_start = Instant::now();
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                tracing::trace!(
                    frame = frame_idx,
                    draw_ms = draw_start.elapsed().as_secs_f64() * 1000.0,
                    "frame drawn"
                );
                needs_render = false;
            }

            if model.should_quit {
                break;
            }

            // Wake up periodically so toasts expire without input.
            let poll_ms = if model.active_toast().is_some() { 100 } else { 250 };
            if !event::poll(Duration::from_millis(poll_ms))? {
                continue;
            }

            // Coalesce bursts (key repeat, paste fallbacks) into a single render.
            loop {
                if let Some(msg) = self.handle_event(event::read()?, model) {
                    tracing::trace!(frame = frame_idx, ?msg, "message");
                    *model = update(std::mem::take(model), msg);
                    needs_render = true;
                }
                if model.should_quit || !event::poll(Duration::from_millis(0))? {
                    break;
                }
            }
        }
        Ok(())
    }
}
