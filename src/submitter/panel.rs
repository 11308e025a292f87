/// Render target for analysis responses. Starts hidden with an empty output
/// area and is only written on a successful round trip, so a failed
/// submission leaves whatever was rendered before fully intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultPanel {
    output: String,
    visible: bool,
}

impl ResultPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, text: impl Into<String>) {
        self.output = text.into();
        self.visible = true;
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
