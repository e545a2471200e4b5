//! Color theme constants for the gloom UI
//!
//! Minimal dark palette, close to GitHub's dark theme.

use ratatui::style::Color;

// ============================================================================
// Base palette
// ============================================================================

/// Assumed terminal background, used to fade the collapsing title
pub const COLOR_BACKGROUND: Color = Color::Rgb(13, 17, 23); // #0D1117

/// Borders, dividers and rules
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for labels and the focused asset
pub const COLOR_ACCENT: Color = Color::Rgb(88, 166, 255); // GitHub blue #58A6FF

/// Primary text in the header and title bar
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for secondary info (sizes, timestamps, separators)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Links and references in release notes
pub const COLOR_LINK: Color = Color::Rgb(88, 166, 255);

/// `@mentions` and `#123` references
pub const COLOR_MENTION: Color = Color::Rgb(210, 168, 255); // #D2A8FF

/// Background of the focused asset row
pub const COLOR_SELECTION_BG: Color = Color::Rgb(22, 27, 34); // #161B22

// ============================================================================
// Badges
// ============================================================================

/// "Latest" badge
pub const COLOR_LATEST: Color = Color::Rgb(63, 185, 80); // green #3FB950

/// "Pre-release" badge
pub const COLOR_PRERELEASE: Color = Color::Rgb(210, 153, 34); // amber #D29922

/// "Draft" badge
pub const COLOR_DRAFT: Color = Color::Gray;

// ============================================================================
// Status
// ============================================================================

/// Spinner and in-flight indicators
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Status line for successful actions
pub const COLOR_SUCCESS: Color = Color::Rgb(63, 185, 80);

/// Errors and the build-failure block
pub const COLOR_ERROR: Color = Color::Red;

/// Reaction chips the viewer has reacted with
pub const COLOR_REACTED_BG: Color = Color::Rgb(56, 139, 253); // #388BFD
