// Certificate PDF rendering.
// One pass over a fixed layout: images first, then the frame, then text, so
// borders and captions stay legible over the artwork. All geometry comes from
// the theme; only text content and asset availability vary per call.

pub mod images;
pub mod metrics;

use std::collections::HashMap;

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::utils::calculate_points_for_circle;
use printpdf::{
    Color, CustomPdfConformance, IndirectFontRef, Line, Mm, PdfConformance, PdfDocument,
    PdfLayerReference, Point, Polygon, Rgb,
};
use time::OffsetDateTime;

use crate::assets::AssetData;
use crate::theme::{Rgb8, Theme};
use metrics::FontStyle;

/// Landscape A4 in millimeters.
pub const PAGE_W: f32 = 297.0;
pub const PAGE_H: f32 = 210.0;

#[derive(Debug, Clone)]
pub struct CertificateRequest {
    pub recipient_name: String,
    pub award_title: String,
    pub award_description: String,
    /// Caller-formatted; drawn verbatim, never parsed.
    pub date_label: String,
    pub character_key: Option<String>,
}

impl CertificateRequest {
    /// The name exactly as it appears on the certificate.
    pub fn display_name(&self) -> String {
        self.recipient_name.trim().to_uppercase()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("recipient name must not be empty")]
    EmptyRecipient,
    #[error("pdf backend error: {0}")]
    Pdf(#[from] printpdf::Error),
}

/// Download filename for a finished certificate, e.g.
/// `Royal_Award_Mr._Rahul_Sir.pdf`.
pub fn suggested_filename(recipient_name: &str, theme: &Theme) -> String {
    format!(
        "{}_{}.pdf",
        theme.captions.filename_prefix,
        recipient_name.trim().replace(' ', "_")
    )
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

/// Renders one finished certificate page.
///
/// Logo, signature, and character illustration are each independently
/// optional: missing or undecodable bytes drop that one element and nothing
/// else. A `character_key` with no entry in `character_images` is treated the
/// same way. Identical inputs produce byte-identical output.
pub fn render(
    request: &CertificateRequest,
    theme: &Theme,
    logo: Option<&[u8]>,
    signature: Option<&[u8]>,
    character_images: &HashMap<String, AssetData>,
) -> Result<Vec<u8>, RenderError> {
    if request.recipient_name.trim().is_empty() {
        return Err(RenderError::EmptyRecipient);
    }

    let (doc, page, layer) = PdfDocument::new(
        theme.captions.class_label,
        Mm(PAGE_W),
        Mm(PAGE_H),
        "certificate",
    );
    // Pin the metadata so identical inputs stay byte-identical.
    let doc = doc
        .with_conformance(PdfConformance::Custom(CustomPdfConformance {
            requires_icc_profile: false,
            requires_xmp_metadata: false,
            ..Default::default()
        }))
        .with_creation_date(OffsetDateTime::UNIX_EPOCH)
        .with_mod_date(OffsetDateTime::UNIX_EPOCH);

    let family = theme.font_family;
    let fonts = Fonts {
        regular: doc.add_builtin_font(metrics::builtin(family, FontStyle::Regular))?,
        bold: doc.add_builtin_font(metrics::builtin(family, FontStyle::Bold))?,
        italic: doc.add_builtin_font(metrics::builtin(family, FontStyle::Italic))?,
    };

    let layer = doc.get_page(page).get_layer(layer);

    draw_image_layer(&layer, request, theme, logo, signature, character_images);
    draw_frame(&layer, theme);
    draw_text(&layer, request, theme, &fonts);

    Ok(doc.save_to_bytes()?)
}

fn color(c: Rgb8) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(c.r) / 255.0,
        f32::from(c.g) / 255.0,
        f32::from(c.b) / 255.0,
        None,
    ))
}

fn draw_image_layer(
    layer: &PdfLayerReference,
    request: &CertificateRequest,
    theme: &Theme,
    logo: Option<&[u8]>,
    signature: Option<&[u8]>,
    character_images: &HashMap<String, AssetData>,
) {
    let g = &theme.geometry;

    // The watermark goes down before every other image: it is flattened onto
    // an opaque ground, so anything drawn earlier would be painted over.
    if theme.logo_watermark {
        if let Some(bytes) = logo {
            match images::decode_flattened(bytes, theme.watermark_opacity) {
                Some(img) => {
                    let inset = 2.0 * g.outer_inset;
                    images::place_in_box(
                        layer,
                        img,
                        inset,
                        inset,
                        PAGE_W - 2.0 * inset,
                        PAGE_H - 2.0 * inset,
                    );
                }
                None => tracing::warn!("logo asset not decodable, omitting"),
            }
        }
    }

    if let Some(key) = request.character_key.as_deref() {
        if let Some(bytes) = character_images.get(key) {
            match images::decode_flattened(bytes, 1.0) {
                Some(img) => {
                    let x = PAGE_W - g.char_box_w - g.char_margin_right;
                    let y = PAGE_H - g.char_box_h - g.char_margin_top;
                    images::place_in_box(layer, img, x, y, g.char_box_w, g.char_box_h);
                }
                None => tracing::warn!("character image {} not decodable, omitting", key),
            }
        }
    }

    if !theme.logo_watermark {
        if let Some(bytes) = logo {
            match images::decode_flattened(bytes, 1.0) {
                Some(img) => {
                    images::place_in_box(layer, img, g.logo_x, g.logo_y, g.logo_w, g.logo_h)
                }
                None => tracing::warn!("logo asset not decodable, omitting"),
            }
        }
    }

    if let Some(bytes) = signature {
        match images::decode_flattened(bytes, 1.0) {
            Some(img) => {
                let x = g.sign_center_x - g.sign_w / 2.0;
                images::place_in_box(layer, img, x, g.sign_y, g.sign_w, g.sign_h);
            }
            None => tracing::warn!("signature asset not decodable, omitting"),
        }
    }
}

fn stroke_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32) {
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(x), Mm(y)), false),
            (Point::new(Mm(x + w), Mm(y)), false),
            (Point::new(Mm(x + w), Mm(y + h)), false),
            (Point::new(Mm(x), Mm(y + h)), false),
        ],
        is_closed: true,
    });
}

fn stroke_segment(layer: &PdfLayerReference, x1: f32, y1: f32, x2: f32, y2: f32) {
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y1)), false),
            (Point::new(Mm(x2), Mm(y2)), false),
        ],
        is_closed: false,
    });
}

fn draw_frame(layer: &PdfLayerReference, theme: &Theme) {
    let g = &theme.geometry;

    layer.set_outline_color(color(theme.palette.accent));
    layer.set_outline_thickness(g.outer_width_pt);
    stroke_rect(
        layer,
        g.outer_inset,
        g.outer_inset,
        PAGE_W - 2.0 * g.outer_inset,
        PAGE_H - 2.0 * g.outer_inset,
    );

    layer.set_outline_color(color(theme.palette.rule));
    layer.set_outline_thickness(g.inner_width_pt);
    stroke_rect(
        layer,
        g.inner_inset,
        g.inner_inset,
        PAGE_W - 2.0 * g.inner_inset,
        PAGE_H - 2.0 * g.inner_inset,
    );

    layer.set_fill_color(color(theme.palette.rule));
    for (cx, cy) in [
        (g.outer_inset, g.outer_inset),
        (PAGE_W - g.outer_inset, g.outer_inset),
        (g.outer_inset, PAGE_H - g.outer_inset),
        (PAGE_W - g.outer_inset, PAGE_H - g.outer_inset),
    ] {
        let ring = calculate_points_for_circle(Mm(g.corner_radius), Mm(cx), Mm(cy));
        layer.add_polygon(Polygon {
            rings: vec![ring],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }
}

fn draw_centered_at(
    layer: &PdfLayerReference,
    text: &str,
    size: f32,
    center_x: f32,
    baseline_y: f32,
    font: &IndirectFontRef,
    theme: &Theme,
    style: FontStyle,
) {
    let w = metrics::text_width_mm(text, theme.font_family, style, size);
    layer.use_text(text, size, Mm(center_x - w / 2.0), Mm(baseline_y), font);
}

fn draw_centered(
    layer: &PdfLayerReference,
    text: &str,
    size: f32,
    drop: f32,
    font: &IndirectFontRef,
    theme: &Theme,
    style: FontStyle,
) {
    draw_centered_at(layer, text, size, PAGE_W / 2.0, PAGE_H - drop, font, theme, style);
}

fn draw_text(
    layer: &PdfLayerReference,
    request: &CertificateRequest,
    theme: &Theme,
    fonts: &Fonts,
) {
    let g = &theme.geometry;
    let s = &theme.sizes;
    let cap = &theme.captions;

    layer.set_fill_color(color(theme.palette.primary));
    draw_centered(layer, cap.institution, s.title, g.title_drop, &fonts.bold, theme, FontStyle::Bold);

    layer.set_fill_color(color(theme.palette.ink));
    draw_centered(layer, cap.subtitle, s.subtitle, g.subtitle_drop, &fonts.regular, theme, FontStyle::Regular);

    layer.set_fill_color(color(theme.palette.faint));
    draw_centered(layer, cap.class_label, s.class_label, g.class_label_drop, &fonts.italic, theme, FontStyle::Italic);

    layer.set_fill_color(color(theme.palette.muted));
    draw_centered(layer, cap.lead_in, s.lead_in, g.lead_in_drop, &fonts.regular, theme, FontStyle::Regular);

    let name = request.display_name();
    layer.set_fill_color(color(theme.palette.accent));
    draw_centered(layer, &name, s.recipient, g.recipient_drop, &fonts.bold, theme, FontStyle::Bold);

    layer.set_outline_color(color(theme.palette.rule));
    layer.set_outline_thickness(1.5);
    stroke_segment(
        layer,
        PAGE_W / 2.0 - g.rule_half_width,
        PAGE_H - g.rule_drop,
        PAGE_W / 2.0 + g.rule_half_width,
        PAGE_H - g.rule_drop,
    );

    layer.set_fill_color(color(theme.palette.primary));
    draw_centered(layer, &request.award_title, s.award_title, g.award_title_drop, &fonts.bold, theme, FontStyle::Bold);

    // Description paragraph, reflowed inside the fixed box. Overflow past the
    // box height is the caller's responsibility; nothing is truncated.
    let max_width = PAGE_W - 2.0 * g.description_side_margin;
    let lines = metrics::wrap_paragraph(
        &request.award_description,
        theme.font_family,
        FontStyle::Regular,
        s.description,
        max_width,
    );
    let leading = metrics::leading_mm(s.description_leading);
    if lines.len() as f32 * leading > g.description_max_height {
        tracing::debug!(
            "description flows past its {}mm box ({} lines)",
            g.description_max_height,
            lines.len()
        );
    }
    layer.set_fill_color(color(theme.palette.ink));
    for (i, line) in lines.iter().enumerate() {
        let drop = g.description_drop + i as f32 * leading;
        draw_centered(layer, line, s.description, drop, &fonts.regular, theme, FontStyle::Regular);
    }

    layer.set_fill_color(color(theme.palette.ink));
    layer.use_text(
        format!("Date: {}", request.date_label),
        s.date,
        Mm(g.date_x),
        Mm(g.date_y),
        &fonts.bold,
    );
    layer.use_text(cap.place, s.date, Mm(g.date_x), Mm(g.place_y), &fonts.bold);

    layer.set_outline_color(color(theme.palette.ink));
    layer.set_outline_thickness(1.0);
    stroke_segment(
        layer,
        g.sign_center_x - g.sign_line_half_width,
        g.sign_line_y,
        g.sign_center_x + g.sign_line_half_width,
        g.sign_line_y,
    );
    draw_centered_at(layer, cap.closing, s.caption, g.sign_center_x, g.caption_y, &fonts.regular, theme, FontStyle::Regular);
    draw_centered_at(layer, cap.signatory, s.caption_role, g.sign_center_x, g.caption_role_y, &fonts.bold, theme, FontStyle::Bold);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    #[test]
    fn display_name_is_upper_cased() {
        let request = CertificateRequest {
            recipient_name: "mr. rahul sir".to_string(),
            award_title: String::new(),
            award_description: String::new(),
            date_label: String::new(),
            character_key: None,
        };
        assert_eq!(request.display_name(), "MR. RAHUL SIR");
    }

    #[test]
    fn filename_replaces_spaces() {
        let name = suggested_filename("Mr. Rahul Sir", theme::default_theme());
        assert_eq!(name, "Royal_Award_Mr._Rahul_Sir.pdf");
    }

    #[test]
    fn empty_recipient_is_refused() {
        let request = CertificateRequest {
            recipient_name: "   ".to_string(),
            award_title: "THE KRISHNA SARTHI AWARD".to_string(),
            award_description: "desc".to_string(),
            date_label: "01-01-2025".to_string(),
            character_key: None,
        };
        let result = render(
            &request,
            theme::default_theme(),
            None,
            None,
            &HashMap::new(),
        );
        assert!(matches!(result, Err(RenderError::EmptyRecipient)));
    }
}
