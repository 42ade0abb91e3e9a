// ui/renderer.rs - Ratatui-backed terminal surface

use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Stdout;

use crate::ui::surface::FrameSurface;
use crate::view::View;

/// Raw mode plus alternate screen, undone on drop even on error paths.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> std::io::Result<Self> {
        enable_raw_mode()?;
        if let Err(err) = crossterm::execute!(std::io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(std::io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        log::info!("terminal restored");
    }
}

/// Paints a view tree onto the real terminal.
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiRenderer {
    pub fn new() -> std::io::Result<Self> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    /// Terminal size as `(width, height)`.
    pub fn size(&self) -> std::io::Result<(u16, u16)> {
        let area = self.terminal.size()?;
        Ok((area.width, area.height))
    }

    /// Draw `root` at the origin and flush the frame to the screen.
    pub fn draw(&mut self, root: &mut dyn View) -> std::io::Result<()> {
        self.terminal.draw(|f| {
            let mut surface = FrameSurface::new(f);
            root.draw(&mut surface, 0, 0);
        })?;
        Ok(())
    }
}
