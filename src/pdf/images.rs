//! Asset decoding and placement.
//!
//! Every asset arrives as raw encoded bytes and may be absent or corrupt;
//! callers treat a `None` from [`decode_flattened`] as "no such element" and
//! carry on. Decoded pixels are flattened onto white on a copy, so input
//! buffers are never touched.

use printpdf::image_crate::{self, DynamicImage, GenericImageView, RgbImage};
use printpdf::{Image, ImageTransform, Mm, PdfLayerReference};

const DPI: f32 = 300.0;
const PX_TO_MM: f32 = 25.4 / DPI;

/// Decodes asset bytes and flattens any alpha channel onto a white ground,
/// scaling the alpha by `opacity` first. Returns `None` for bytes that are
/// not a decodable image.
pub fn decode_flattened(bytes: &[u8], opacity: f32) -> Option<DynamicImage> {
    let decoded = image_crate::load_from_memory(bytes).ok()?;
    let rgba = decoded.to_rgba8();
    let (w, h) = rgba.dimensions();
    if w == 0 || h == 0 {
        return None;
    }

    let mut flat = RgbImage::new(w, h);
    for (x, y, px) in rgba.enumerate_pixels() {
        let a = f32::from(px[3]) / 255.0 * opacity;
        let blend = |c: u8| (f32::from(c) * a + 255.0 * (1.0 - a)).round().clamp(0.0, 255.0) as u8;
        flat.put_pixel(x, y, image_crate::Rgb([blend(px[0]), blend(px[1]), blend(px[2])]));
    }
    Some(DynamicImage::ImageRgb8(flat))
}

/// Places a decoded image into a millimeter bounding box anchored at its
/// bottom-left corner, preserving aspect ratio and centering inside the box.
pub fn place_in_box(
    layer: &PdfLayerReference,
    img: DynamicImage,
    x: f32,
    y: f32,
    box_w: f32,
    box_h: f32,
) {
    let (px_w, px_h) = img.dimensions();
    if px_w == 0 || px_h == 0 {
        return;
    }

    let nat_w = px_w as f32 * PX_TO_MM;
    let nat_h = px_h as f32 * PX_TO_MM;
    let scale = (box_w / nat_w).min(box_h / nat_h);

    let tx = x + (box_w - nat_w * scale) / 2.0;
    let ty = y + (box_h - nat_h * scale) / 2.0;

    Image::from_dynamic_image(&img).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(tx)),
            translate_y: Some(Mm(ty)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(DPI),
            ..Default::default()
        },
    );
}
