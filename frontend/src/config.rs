//! Page configuration.
//!
//! Upload limits, allow-lists and delays live in [`notesynth::config`]; this
//! module only holds what is specific to the page itself.

/// Product name shown in the navbar, hero and footer.
pub const APP_NAME: &str = "Master Note Synthesizer";

/// Scroll offset (px) past which the navbar switches to its compact style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Section anchors used by the navigation links.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("how-it-works", "How it works"),
    ("upload", "Try it"),
    ("features", "Features"),
];
