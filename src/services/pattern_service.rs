use stitch_quant::{PaletteEntry, Pattern, Rgb};
use tokio::sync::RwLock;

/// Shared mutable pattern state behind the API.
///
/// Holds at most one pattern at a time plus the cell-number display flag.
/// Handlers take a [`PatternSnapshot`] and render outside the lock, so a
/// slow render never blocks a concurrent recolor or clear.
pub struct PatternService {
    state: RwLock<PatternState>,
}

struct PatternState {
    pattern: Option<Pattern>,
    show_numbers: bool,
}

/// A point-in-time copy of the pattern state.
#[derive(Debug, Clone)]
pub struct PatternSnapshot {
    pub pattern: Pattern,
    pub show_numbers: bool,
}

impl PatternService {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(PatternState {
                pattern: None,
                show_numbers: true,
            }),
        }
    }

    /// Replace the stored pattern. The number display flag is kept as-is.
    pub async fn install(&self, pattern: Pattern) {
        let mut state = self.state.write().await;
        state.pattern = Some(pattern);
    }

    /// Drop the stored pattern.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.pattern = None;
    }

    /// Repaint the first palette entry matching `old`.
    ///
    /// Returns `None` when no pattern is loaded. With a pattern loaded,
    /// returns the updated pattern along with the changed entry id
    /// (`None` id means nothing matched, which is a defined no-op).
    pub async fn recolor(&self, old: Rgb, new: Rgb) -> Option<(Pattern, Option<u32>)> {
        let mut state = self.state.write().await;
        let pattern = state.pattern.as_mut()?;
        let changed = pattern.recolor(old, new);
        Some((pattern.clone(), changed))
    }

    pub async fn set_show_numbers(&self, show_numbers: bool) {
        let mut state = self.state.write().await;
        state.show_numbers = show_numbers;
    }

    pub async fn show_numbers(&self) -> bool {
        self.state.read().await.show_numbers
    }

    pub async fn is_loaded(&self) -> bool {
        self.state.read().await.pattern.is_some()
    }

    /// Copy of the current pattern plus the number flag, or `None` when no
    /// pattern is loaded.
    pub async fn snapshot(&self) -> Option<PatternSnapshot> {
        let state = self.state.read().await;
        state.pattern.as_ref().map(|pattern| PatternSnapshot {
            pattern: pattern.clone(),
            show_numbers: state.show_numbers,
        })
    }

    /// Copy of the current palette, or `None` when no pattern is loaded.
    pub async fn palette(&self) -> Option<Vec<PaletteEntry>> {
        let state = self.state.read().await;
        state
            .pattern
            .as_ref()
            .map(|pattern| pattern.palette().to_vec())
    }
}

impl Default for PatternService {
    fn default() -> Self {
        Self::new()
    }
}
