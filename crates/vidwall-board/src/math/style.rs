//! Card chrome constants

/// Layout of the per-card controls, used for hit testing
pub struct ChromeStyle {
    /// Side of a square control button
    pub button_size: f32,
    /// Gap between adjacent buttons
    pub button_spacing: f32,
    /// Inset of the control strip from the card's top-right corner
    pub button_margin: f32,
    /// Side of a square corner resize handle
    pub resize_handle_size: f32,
}

/// Default chrome matching the page stylesheet
pub const CHROME_STYLE: ChromeStyle = ChromeStyle {
    button_size: 28.0,
    button_spacing: 4.0,
    button_margin: 6.0,
    resize_handle_size: 12.0,
};
