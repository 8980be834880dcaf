//! Page Error Types
//!
//! Template failures, labelled by the stage that failed, mapped onto
//! the unified `kernel::AppError`.

use axum::response::{IntoResponse, Response};
use kernel::{AppError, ErrorKind};
use thiserror::Error;

/// Page-specific result type alias
pub type PageResult<T> = Result<T, PageError>;

/// Page rendering errors
#[derive(Debug, Error)]
pub enum PageError {
    /// Template file could not be read
    #[error("Failed to load template {name}: {source}")]
    TemplateLoad {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Template source did not compile
    #[error("Failed to parse template {name}: {source}")]
    TemplateParse {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// Composed template failed while executing
    #[error("Failed to render template: {0}")]
    TemplateRender(#[source] minijinja::Error),
}

impl PageError {
    /// Stage label used in logs
    pub fn stage(&self) -> &'static str {
        match self {
            PageError::TemplateLoad { .. } => "load",
            PageError::TemplateParse { .. } => "parse",
            PageError::TemplateRender(_) => "render",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InternalServerError
    }

    /// Template file involved, when known
    pub fn template(&self) -> Option<&str> {
        match self {
            PageError::TemplateLoad { name, .. } | PageError::TemplateParse { name, .. } => {
                Some(name.as_str())
            }
            PageError::TemplateRender(_) => None,
        }
    }

    /// Log the error with its stage
    fn log(&self) {
        match self.template() {
            Some(template) => {
                tracing::error!(stage = self.stage(), template, error = %self, "Template error")
            }
            None => tracing::error!(stage = self.stage(), error = %self, "Template error"),
        }
    }
}

impl From<PageError> for AppError {
    fn from(err: PageError) -> Self {
        let kind = err.kind();
        AppError::new(kind, "The page could not be rendered").with_source(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
