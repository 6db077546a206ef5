//! Admin web interface
//!
//! Server-side rendered dashboard. Templates are embedded at compile time
//! and rendered with Tera from view models that carry display-ready values.
//!
//! ## Pages
//!
//! - `/admin/indexing/status` - Connector indexing status grouped by source

pub mod builders;
pub mod handlers;
pub mod router;
pub mod view_models;

use std::sync::Arc;

use cis_domain::error::{Error, Result};
use rocket::http::Status;
use rocket::response::content::RawHtml;
use serde::Serialize;
use tera::{Context, Tera};

use self::builders::ViewModelBuilder;

pub use router::web_routes;

const TPL_BASE: &str = include_str!("templates/base.html");
const TPL_STATUS: &str = include_str!("templates/status.html");
const TPL_ERROR: &str = include_str!("templates/error.html");

/// HTML response with an explicit status
pub type HtmlResponse = (Status, RawHtml<String>);

/// Compiled templates
#[derive(Clone)]
pub struct WebInterface {
    templates: Arc<Tera>,
}

impl WebInterface {
    /// Compile the embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", TPL_BASE),
            ("status.html", TPL_STATUS),
            ("error.html", TPL_ERROR),
        ])
        .map_err(|e| Error::template(format!("Failed to compile templates: {e}")))?;

        Ok(Self {
            templates: Arc::new(tera),
        })
    }

    /// Get the templates instance
    pub fn templates(&self) -> Arc<Tera> {
        Arc::clone(&self.templates)
    }

    /// Render a page with its view model
    pub fn render_page<T: Serialize>(&self, name: &str, page: &str, view_model: &T) -> HtmlResponse {
        render_template(&self.templates, name, &create_page_context(page, view_model))
    }

    /// Render the error page
    pub fn render_error(&self, status: Status, title: &str, message: &str) -> HtmlResponse {
        render_error_page(&self.templates, status, title, message)
    }
}

/// Tera context with the "page" and "vm" keys
fn create_page_context<T: Serialize>(page: &str, view_model: &T) -> Context {
    let mut context = Context::new();
    context.insert("page", page);
    context.insert("vm", view_model);
    context
}

fn render_template(tera: &Tera, name: &str, context: &Context) -> HtmlResponse {
    match tera.render(name, context) {
        Ok(html) => (Status::Ok, RawHtml(html)),
        Err(err) => {
            tracing::error!("Template error: {:?}", err);
            (
                Status::InternalServerError,
                RawHtml(format!("Template error: {err}")),
            )
        }
    }
}

fn render_error_page(tera: &Tera, status: Status, title: &str, message: &str) -> HtmlResponse {
    let error_vm = ViewModelBuilder::build_error(status, title, message);
    let mut context = Context::new();
    context.insert("error", &error_vm);
    context.insert("page", "error");

    match tera.render("error.html", &context) {
        Ok(html) => (status, RawHtml(html)),
        Err(_) => (status, RawHtml(format!("{title}: {message}"))),
    }
}
