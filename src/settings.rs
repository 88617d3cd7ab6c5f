//! Tracing configuration

/// How the dark/light cut-off of an image is chosen
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ThresholdMode {
    /// Otsu's method, computed from the image histogram
    #[default]
    Otsu,
    /// A fixed luma value; pixels at or below it count as dark
    Fixed(u8),
}

/// Settings for turning an image into strokes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TraceSettings {
    /// Sampling stride over pixels in both directions
    pub step: usize,
    /// How the threshold is picked
    pub threshold: ThresholdMode,
    /// Largest gap bridged while following a stroke
    pub max_distance: i32,
    /// Strokes shorter than this are dropped
    pub min_stroke_len: usize,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            step: 1,
            threshold: ThresholdMode::Otsu,
            max_distance: 2,
            min_stroke_len: 3,
        }
    }
}

impl TraceSettings {
    #[must_use]
    pub fn with_step(self, step: usize) -> Self {
        Self { step, ..self }
    }

    #[must_use]
    pub fn with_threshold(self, threshold: ThresholdMode) -> Self {
        Self { threshold, ..self }
    }

    #[must_use]
    pub fn with_max_distance(self, max_distance: i32) -> Self {
        Self {
            max_distance,
            ..self
        }
    }

    #[must_use]
    pub fn with_min_stroke_len(self, min_stroke_len: usize) -> Self {
        Self {
            min_stroke_len,
            ..self
        }
    }

    /// Sampling stride, never zero
    pub fn effective_step(&self) -> usize {
        self.step.max(1)
    }

    /// Stroke gap, never below one
    pub fn effective_max_distance(&self) -> i32 {
        self.max_distance.max(1)
    }
}
