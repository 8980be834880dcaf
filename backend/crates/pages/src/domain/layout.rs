//! Layout Variants

use std::fmt;

/// Base layout a page is rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutVariant {
    /// Dashboard chrome with the navigation sidebar
    Navbar,
    /// Bare page without navigation (login, landing)
    Blank,
}

impl LayoutVariant {
    pub const ALL: [LayoutVariant; 2] = [LayoutVariant::Navbar, LayoutVariant::Blank];

    /// Root template of the layout
    pub fn root(&self) -> &'static str {
        match self {
            LayoutVariant::Navbar => "basenavbar.html",
            LayoutVariant::Blank => "baseblank.html",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutVariant::Navbar => "navbar",
            LayoutVariant::Blank => "blank",
        }
    }
}

impl fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
