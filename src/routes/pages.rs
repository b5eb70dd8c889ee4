use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tera::Context;

use crate::catalog;
use crate::pdf::{self, CertificateRequest};
use crate::state::AppState;
use crate::theme;

pub async fn index() -> impl IntoResponse {
    form_page(None)
}

#[derive(Deserialize)]
pub struct GenerateForm {
    pub recipient_name: Option<String>,
    pub category: Option<String>,
    pub date_label: Option<String>,
    pub description: Option<String>,
    pub theme: Option<String>,
}

pub async fn generate_certificate(
    State(state): State<Arc<AppState>>,
    Form(form): Form<GenerateForm>,
) -> Response {
    // Validation failures stop before rendering; asset failures never do.
    let recipient_name = form
        .recipient_name
        .map(|n| n.trim().to_string())
        .unwrap_or_default();
    if recipient_name.is_empty() {
        return form_page(Some("Please enter a recipient name.")).into_response();
    }

    let entry = match form.category.as_deref().and_then(catalog::lookup) {
        Some(entry) => entry,
        None => {
            return form_page(Some("Please select a valid award category.")).into_response();
        }
    };

    let theme = form
        .theme
        .as_deref()
        .and_then(theme::by_name)
        .unwrap_or_else(theme::default_theme);

    // The description is prefilled from the catalog but remains editable; an
    // emptied field falls back to the catalog default.
    let award_description = match form.description.map(|d| d.trim().to_string()) {
        Some(d) if !d.is_empty() => d,
        _ => entry.description.to_string(),
    };
    let date_label = match form.date_label.map(|d| d.trim().to_string()) {
        Some(d) if !d.is_empty() => d,
        _ => chrono::Local::now().format("%d-%m-%Y").to_string(),
    };

    let logo = state.assets.get_or_fetch(&state.config.logo_file_id).await;
    let signature = state
        .assets
        .get_or_fetch(&state.config.signature_file_id)
        .await;

    let mut character_images = HashMap::new();
    if let Some(id) = catalog::character_file_id(entry.key) {
        if let Some(bytes) = state.assets.get_or_fetch(id).await {
            character_images.insert(entry.key.to_string(), bytes);
        }
    }

    let request = CertificateRequest {
        recipient_name,
        award_title: entry.title.to_string(),
        award_description,
        date_label,
        character_key: Some(entry.key.to_string()),
    };

    match pdf::render(
        &request,
        theme,
        logo.as_ref().map(|b| b.as_slice()),
        signature.as_ref().map(|b| b.as_slice()),
        &character_images,
    ) {
        Ok(bytes) => {
            let filename = pdf::suggested_filename(&request.recipient_name, theme);
            Response::builder()
                .header("Content-Type", "application/pdf")
                .header(
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", filename),
                )
                .body(axum::body::Body::from(bytes))
                .unwrap()
                .into_response()
        }
        Err(e) => {
            tracing::error!("certificate render failed: {}", e);
            form_page(Some("Certificate generation failed, please try again.")).into_response()
        }
    }
}

fn form_page(error: Option<&str>) -> Html<String> {
    let mut ctx = Context::new();
    ctx.insert("sections", &catalog::SECTIONS);
    ctx.insert(
        "themes",
        &theme::THEMES.iter().map(|t| t.name).collect::<Vec<_>>(),
    );
    ctx.insert("today", &chrono::Local::now().format("%d-%m-%Y").to_string());
    ctx.insert("error", &error);
    render_template("index.html", ctx)
}

fn render_template(name: &str, ctx: Context) -> Html<String> {
    let tera = crate::templates::get_tera();
    let rendered = tera
        .render(name, &ctx)
        .unwrap_or_else(|_| format!("Template error: {}", name));
    Html(rendered)
}
