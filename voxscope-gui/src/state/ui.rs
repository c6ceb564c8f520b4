//! UI state for dialogs and visibility toggles.

/// Severity of a user-facing notice dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A pending modal message. At most one is shown at a time.
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub text: String,
    pub severity: Severity,
}

/// Dialog visibility and toggle state.
#[derive(Debug)]
pub struct UiState {
    /// Whether the histogram window is open.
    pub show_histogram: bool,
    /// Dark chart background for the histogram window.
    pub histogram_dark: bool,
    /// Visibility of every annotation label and marker, flipped as one
    /// atomic action.
    pub labels_visible: bool,
    /// Whether the legend section is expanded (Student mode).
    pub legend_visible: bool,
    /// Pending modal message, if any.
    pub notice: Option<Notice>,
    /// Annotation index whose description popup is open.
    pub description_target: Option<usize>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_histogram: false,
            histogram_dark: false,
            labels_visible: true,
            legend_visible: false,
            notice: None,
            description_target: None,
        }
    }
}

impl UiState {
    /// Queue a modal notice, replacing any pending one.
    pub fn notify(&mut self, severity: Severity, title: &str, text: impl Into<String>) {
        self.notice = Some(Notice {
            title: title.to_string(),
            text: text.into(),
            severity,
        });
    }
}
