use crate::{
    foundation::core::Progress,
    foundation::error::{ScrollyteError, ScrollyteResult},
    foundation::math::inv_lerp,
};

/// A sub-range of global progress assigned to one visual item.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    /// Item index within the partition.
    pub index: usize,
    /// Global progress at which this section begins.
    pub start: f64,
    /// Global progress at which this section ends.
    pub end: f64,
}

impl Section {
    /// Map global progress into this section's own `[0, 1]` window, clamped.
    /// A degenerate section resolves as a step at its start.
    pub fn local(&self, progress: Progress) -> f64 {
        let p = progress.value();
        if self.start == self.end {
            return if p >= self.start { 1.0 } else { 0.0 };
        }
        inv_lerp(self.start, self.end, p).clamp(0.0, 1.0)
    }

    /// Width of this section in global progress units.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// A partition of `[0, 1]` into per-item sections.
///
/// Equal mode tiles exactly with no gaps or overlaps. Custom mode takes
/// explicit per-item windows that may intentionally overlap or extend beyond
/// an item's nominal slot (the hero item's dwell window does both).
#[derive(Clone, Debug, PartialEq)]
pub struct Partition {
    sections: Vec<Section>,
}

impl Partition {
    /// `n` equal sections: `start_i = i/n`, `end_i = (i+1)/n`.
    pub fn equal(n: usize) -> ScrollyteResult<Self> {
        if n == 0 {
            return Err(ScrollyteError::validation(
                "equal partition must have at least 1 section",
            ));
        }
        let n_f = n as f64;
        let sections = (0..n)
            .map(|i| Section {
                index: i,
                start: i as f64 / n_f,
                end: (i + 1) as f64 / n_f,
            })
            .collect();
        Ok(Self { sections })
    }

    /// Explicit `(start, end)` windows, one per item.
    pub fn custom(windows: &[(f64, f64)]) -> ScrollyteResult<Self> {
        if windows.is_empty() {
            return Err(ScrollyteError::validation(
                "custom partition must have at least 1 window",
            ));
        }
        let sections = windows
            .iter()
            .enumerate()
            .map(|(index, &(start, end))| {
                if !(start.is_finite() && end.is_finite()) {
                    return Err(ScrollyteError::validation(
                        "partition window bounds must be finite",
                    ));
                }
                if start >= end {
                    return Err(ScrollyteError::validation(format!(
                        "partition window {index} must have start < end"
                    )));
                }
                Ok(Section { index, start, end })
            })
            .collect::<ScrollyteResult<Vec<_>>>()?;
        Ok(Self { sections })
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the partition is empty. Never true for a validated partition.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section for item `index`.
    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// All sections in item order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/partition.rs"]
mod tests;
