//! Icon sets for Nerd Fonts, Unicode, and ASCII fallback.

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Nerd Font icons (default, richest experience).
    #[default]
    Nerd,
    /// Standard Unicode symbols (wide compatibility).
    Unicode,
    /// ASCII-only fallback (maximum compatibility, also used with `NO_COLOR`).
    Ascii,
}

/// Icon set based on configured mode.
#[derive(Debug, Clone)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current icon mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    // === Role Icons ===

    pub fn assistant(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f06a9}", // 󰚩
            IconMode::Unicode => "\u{1f916}", // 🤖
            IconMode::Ascii => "[AI]",
        }
    }

    pub fn user(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f0004}", // 󰀄
            IconMode::Unicode => "\u{1f464}", // 👤
            IconMode::Ascii => "[yo]",
        }
    }

    // === Input Icons ===

    pub fn send(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f048a}", // 󰒊
            IconMode::Unicode => "\u{27a4}", // ➤
            IconMode::Ascii => ">>",
        }
    }

    // === Spinner Frames (waiting indicator) ===

    pub fn spinner_frames(&self) -> &'static [&'static str] {
        match self.mode {
            IconMode::Nerd => &["\u{f0a9e}", "\u{f0a9f}", "\u{f0aa0}", "\u{f0aa1}", "\u{f0aa2}", "\u{f0aa3}"],
            IconMode::Unicode => &["\u{25d0}", "\u{25d3}", "\u{25d1}", "\u{25d2}"], // ◐◓◑◒
            IconMode::Ascii => &["|", "/", "-", "\\"],
        }
    }

    /// Spinner frame for a tick counter.
    pub fn spinner_frame(&self, tick: usize) -> &'static str {
        let frames = self.spinner_frames();
        frames[tick % frames.len()]
    }
}
