//! Window-size classification and adaptive layout selection
//!
//! The shell measures the window and feeds the width (in dp) here; the
//! returned [`LayoutSpec`] says which navigation chrome and content
//! arrangement to render. The mapping is a fixed table:
//!
//! | window class | navigation        | content       |
//! |--------------|-------------------|---------------|
//! | Compact      | bottom navigation | list only     |
//! | Medium       | navigation rail   | list only     |
//! | Expanded     | permanent drawer  | list + detail |

use serde::{Deserialize, Serialize};

/// Bucketed window width classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowSizeClass {
    Compact,
    Medium,
    Expanded,
}

impl WindowSizeClass {
    /// Minimum width for the Medium class, in dp
    pub const MEDIUM_MIN_WIDTH: f32 = 600.0;
    /// Minimum width for the Expanded class, in dp
    pub const EXPANDED_MIN_WIDTH: f32 = 840.0;

    /// Classify an available window width in dp
    pub fn from_width(width: f32) -> Self {
        if width < Self::MEDIUM_MIN_WIDTH {
            WindowSizeClass::Compact
        } else if width < Self::EXPANDED_MIN_WIDTH {
            WindowSizeClass::Medium
        } else {
            WindowSizeClass::Expanded
        }
    }
}

/// Which navigation chrome to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationType {
    BottomNavigation,
    NavigationRail,
    PermanentDrawer,
}

/// How much content fits beside the navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    ListOnly,
    ListAndDetail,
}

/// Navigation chrome and content arrangement for one window class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub navigation: NavigationType,
    pub content: ContentType,
}

impl LayoutSpec {
    /// Look up the layout for a window class
    pub fn for_window(class: WindowSizeClass) -> Self {
        match class {
            WindowSizeClass::Compact => Self {
                navigation: NavigationType::BottomNavigation,
                content: ContentType::ListOnly,
            },
            WindowSizeClass::Medium => Self {
                navigation: NavigationType::NavigationRail,
                content: ContentType::ListOnly,
            },
            WindowSizeClass::Expanded => Self {
                navigation: NavigationType::PermanentDrawer,
                content: ContentType::ListAndDetail,
            },
        }
    }

    /// Classify `width` and look up its layout in one step
    pub fn for_width(width: f32) -> Self {
        Self::for_window(WindowSizeClass::from_width(width))
    }
}
