//! Page Table
//!
//! Every rendered page is one row here; a single handler serves them all.

use super::layout::LayoutVariant;

/// Static description of one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub path: &'static str,
    pub title: &'static str,
    pub layout: LayoutVariant,
    /// Body template name, without `.html`
    pub body: &'static str,
    /// Page script template name, without `.html`
    pub script: &'static str,
    /// Gated behind a valid session
    pub auth_required: bool,
}

impl PageSpec {
    const fn navbar(path: &'static str, title: &'static str, body: &'static str) -> Self {
        Self {
            path,
            title,
            layout: LayoutVariant::Navbar,
            body,
            script: "blank_js",
            auth_required: false,
        }
    }

    const fn with_script(mut self, script: &'static str) -> Self {
        self.script = script;
        self
    }

    const fn gated(mut self) -> Self {
        self.auth_required = true;
        self
    }

    const fn login(path: &'static str) -> Self {
        Self {
            path,
            title: "Login Page",
            layout: LayoutVariant::Blank,
            body: "login",
            script: "blank_js",
            auth_required: false,
        }
    }

    /// File name of the body template
    pub fn body_file(&self) -> String {
        format!("{}.html", self.body)
    }

    /// File name of the script template
    pub fn script_file(&self) -> String {
        format!("{}.html", self.script)
    }
}

pub static PAGES: &[PageSpec] = &[
    PageSpec::login("/"),
    PageSpec::login("/loginpage"),
    PageSpec::navbar("/main", "Home Page", "main").gated(),
    PageSpec::navbar("/flot", "Flot Page", "flot").with_script("flot_js"),
    PageSpec::navbar("/morris", "Morris Page", "morris").with_script("morris_js"),
    PageSpec::navbar("/tables", "Tables Page", "tables").with_script("tables_js"),
    PageSpec::navbar("/forms", "Forms Page", "forms"),
    PageSpec::navbar("/panels-wells", "Panels and Wells Page", "panels-wells"),
    PageSpec::navbar("/buttons", "Buttons Page", "buttons"),
    PageSpec::navbar("/notifications", "Notifications Page", "notifications"),
    PageSpec::navbar("/typography", "Typography Page", "typography"),
    PageSpec::navbar("/icons", "Icons Page", "icons"),
    PageSpec::navbar("/grid", "Grid Page", "grid"),
    PageSpec::navbar("/blank", "Blank Page", "blank"),
];
