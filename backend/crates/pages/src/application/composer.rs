//! Template Composer
//!
//! Two immutable base environments (navbar and blank layouts) are built
//! at startup. Each render clones one, attaches the page's body and
//! script templates under fixed names, and renders into a buffer so a
//! failure never leaves a half-written response.

use std::path::{Path, PathBuf};

use minijinja::Environment;

use crate::domain::context::PageContext;
use crate::domain::layout::LayoutVariant;
use crate::error::{PageError, PageResult};

/// Name the layouts include the page body under
pub const BODY_SLOT: &str = "page_body.html";

/// Name the layouts include the page script under
pub const SCRIPT_SLOT: &str = "page_script.html";

/// Partials shared by both layouts
pub const SHARED_PARTIALS: [&str; 2] = ["head.html", "basefooter.html"];

/// Composes layout + body + script and renders them
#[derive(Debug, Clone)]
pub struct TemplateComposer {
    navbar: Environment<'static>,
    blank: Environment<'static>,
    dir: PathBuf,
}

impl TemplateComposer {
    /// Build both base environments from `dir`
    ///
    /// Runs once at startup, so plain blocking reads are fine here.
    pub fn new(dir: impl Into<PathBuf>) -> PageResult<Self> {
        let dir = dir.into();
        let navbar = base_environment(&dir, LayoutVariant::Navbar)?;
        let blank = base_environment(&dir, LayoutVariant::Blank)?;

        tracing::debug!(dir = %dir.display(), "Base layouts loaded");

        Ok(Self { navbar, blank, dir })
    }

    /// Shared base environment of a layout
    pub fn base(&self, layout: LayoutVariant) -> &Environment<'static> {
        match layout {
            LayoutVariant::Navbar => &self.navbar,
            LayoutVariant::Blank => &self.blank,
        }
    }

    /// Render the `body_file` and `script_file` templates inside `layout`
    pub async fn render(
        &self,
        layout: LayoutVariant,
        body_file: &str,
        script_file: &str,
        context: &PageContext,
    ) -> PageResult<String> {
        let body_source = load(&self.dir, body_file).await?;
        let script_source = load(&self.dir, script_file).await?;

        // Clone: the shared base sets are never modified
        let mut env = self.base(layout).clone();
        attach(&mut env, BODY_SLOT, body_file, body_source)?;
        attach(&mut env, SCRIPT_SLOT, script_file, script_source)?;

        env.get_template(layout.root())
            .and_then(|template| template.render(context))
            .map_err(PageError::TemplateRender)
    }
}

fn base_environment(dir: &Path, layout: LayoutVariant) -> PageResult<Environment<'static>> {
    let mut env = Environment::new();

    for name in std::iter::once(layout.root()).chain(SHARED_PARTIALS) {
        let source =
            std::fs::read_to_string(dir.join(name)).map_err(|source| PageError::TemplateLoad {
                name: name.to_string(),
                source,
            })?;
        attach(&mut env, name, name, source)?;
    }

    Ok(env)
}

async fn load(dir: &Path, name: &str) -> PageResult<String> {
    tokio::fs::read_to_string(dir.join(name))
        .await
        .map_err(|source| PageError::TemplateLoad {
            name: name.to_string(),
            source,
        })
}

/// Register `source` (read from `file`) under `slot`
fn attach(
    env: &mut Environment<'static>,
    slot: &str,
    file: &str,
    source: String,
) -> PageResult<()> {
    env.add_template_owned(slot.to_string(), source)
        .map_err(|source| PageError::TemplateParse {
            name: file.to_string(),
            source,
        })
}
