//! Help screen — modal overlay showing keybinding reference.

/// A line in the help screen.
#[derive(Debug, Clone)]
pub struct HelpLine {
    pub text: String,
    pub is_header: bool,
}

/// Help screen state.
#[derive(Debug, Clone)]
pub struct HelpScreen {
    pub visible: bool,
    content: Vec<HelpLine>,
}

impl HelpScreen {
    pub fn new() -> Self {
        Self {
            visible: false,
            content: Self::build_content(),
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn lines(&self) -> &[HelpLine] {
        &self.content
    }

    fn build_content() -> Vec<HelpLine> {
        let h = |text: &str| HelpLine {
            text: text.to_string(),
            is_header: true,
        };
        let l = |text: &str| HelpLine {
            text: text.to_string(),
            is_header: false,
        };

        vec![
            h("GLOBAL"),
            l("  Ctrl-Q/C     Quit"),
            l("  Ctrl-T       Next theme"),
            l("  Ctrl-R       Re-tokenize now"),
            l("  Ctrl-E       Inspect: raw text / colored"),
            l("  Tab          Switch panel"),
            l("  F1           Toggle this help"),
            l("  Esc          Close overlay, back to editor"),
            l(""),
            h("EDITOR"),
            l("  Arrows       Move cursor"),
            l("  Home/End     Line start / end"),
            l("  Enter        New line"),
            l("  Bksp/Del     Delete"),
            l(""),
            h("PALETTE"),
            l("  Up/Down j/k  Select token class"),
            l("  Enter        Edit color (#rrggbb or name)"),
            l("  r            Reset class to theme color"),
            l("  ?            Toggle this help"),
        ]
    }
}

impl Default for HelpScreen {
    fn default() -> Self {
        Self::new()
    }
}
