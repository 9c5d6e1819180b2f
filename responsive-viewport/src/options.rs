/// Debounce delay applied when no explicit delay is configured, in ms.
pub const DEFAULT_DELAY_MS: u32 = 200;

/// Minimum logical width enforced when none is configured, in px.
pub const DEFAULT_MIN_WIDTH: f64 = 360.0;

/// Configuration for [`use_responsive_viewport`](crate::use_responsive_viewport).
///
/// A bare number converts into options with that `min_width` and the default
/// delay; partial overrides use struct-update syntax:
///
/// ```
/// use responsive_viewport::ViewportOptions;
///
/// let narrow: ViewportOptions = 320.0.into();
/// let slow = ViewportOptions { delay: 500, ..Default::default() };
/// # assert_eq!(narrow.min_width, 320.0);
/// # assert_eq!(slow.min_width, 360.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportOptions {
    /// Debounce delay for resize/orientation events, in milliseconds.
    pub delay: u32,
    /// Minimum logical width to enforce, in pixels.
    pub min_width: f64,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self { delay: DEFAULT_DELAY_MS, min_width: DEFAULT_MIN_WIDTH }
    }
}

impl From<f64> for ViewportOptions {
    fn from(min_width: f64) -> Self {
        Self { min_width, ..Self::default() }
    }
}

impl From<u32> for ViewportOptions {
    fn from(min_width: u32) -> Self {
        Self { min_width: f64::from(min_width), ..Self::default() }
    }
}

impl From<i32> for ViewportOptions {
    fn from(min_width: i32) -> Self {
        Self { min_width: f64::from(min_width), ..Self::default() }
    }
}
