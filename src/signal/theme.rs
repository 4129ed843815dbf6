use crate::signal::cell::{Subscription, ValueCell};

/// Page color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light scheme.
    Light,
    /// Dark scheme.
    Dark,
}

/// Explicit theme-state signal.
///
/// Replaces attribute-observation dark-mode sniffing: the initial value is
/// explicit at construction, changes are edge-triggered through the cell's
/// change suppression, and observers tear down by dropping their guard.
#[derive(Clone)]
pub struct ThemeSignal {
    cell: ValueCell<Theme>,
}

impl ThemeSignal {
    /// Create a signal with a defined initial theme.
    pub fn new(initial: Theme) -> Self {
        Self {
            cell: ValueCell::new(initial),
        }
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.cell.get()
    }

    /// Switch themes; observers fire only on an actual transition.
    pub fn set_theme(&self, theme: Theme) {
        self.cell.set(theme);
    }

    /// Observe theme transitions until the guard is dropped.
    #[must_use = "dropping the subscription detaches the observer"]
    pub fn subscribe(&self, f: impl Fn(&Theme) + 'static) -> Subscription<Theme> {
        self.cell.subscribe(f)
    }
}
