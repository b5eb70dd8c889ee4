// End-to-end renderer checks: well-formedness, asset-omission behavior, and
// determinism. Assets are synthetic PNGs generated in-memory so the suite
// never touches the network or the filesystem (except the tempfile round
// trip at the end).

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use printpdf::image_crate::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};
use prashasti::assets::AssetData;
use prashasti::pdf::{render, CertificateRequest};
use prashasti::theme;

fn png_asset(w: u32, h: u32, pixel: [u8; 4]) -> Vec<u8> {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba(pixel)));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)
        .unwrap();
    buf
}

fn sample_request() -> CertificateRequest {
    CertificateRequest {
        recipient_name: "Mr. Rahul Sir".to_string(),
        award_title: "THE KRISHNA SARTHI AWARD".to_string(),
        award_description: "Like Lord Krishna guided Arjuna to victory, you have been the \
            guiding light for our students. This award honors your exceptional mentorship \
            and direction."
            .to_string(),
        date_label: "01-01-2025".to_string(),
        character_key: Some("KRISHNA".to_string()),
    }
}

fn character_map(key: &str, bytes: Vec<u8>) -> HashMap<String, AssetData> {
    let mut map = HashMap::new();
    map.insert(key.to_string(), Arc::new(bytes));
    map
}

fn assert_is_pdf(bytes: &[u8]) {
    assert!(bytes.starts_with(b"%PDF"), "missing PDF header");
    assert!(bytes.len() > 1_000, "suspiciously small: {} bytes", bytes.len());
    let tail = &bytes[bytes.len().saturating_sub(32)..];
    assert!(
        tail.windows(5).any(|w| w == b"%%EOF"),
        "missing PDF trailer"
    );
}

#[test]
fn full_render_with_all_assets() {
    let logo = png_asset(120, 120, [0, 33, 71, 255]);
    let signature = png_asset(200, 70, [10, 10, 10, 255]);
    let characters = character_map("KRISHNA", png_asset(300, 400, [30, 90, 200, 255]));

    let bytes = render(
        &sample_request(),
        theme::default_theme(),
        Some(&logo),
        Some(&signature),
        &characters,
    )
    .unwrap();
    assert_is_pdf(&bytes);
}

#[test]
fn render_succeeds_with_no_assets_at_all() {
    let bytes = render(
        &sample_request(),
        theme::default_theme(),
        None,
        None,
        &HashMap::new(),
    )
    .unwrap();
    assert_is_pdf(&bytes);
}

#[test]
fn corrupt_asset_is_treated_as_absent() {
    let request = sample_request();
    let theme = theme::default_theme();

    let without = render(&request, theme, None, None, &HashMap::new()).unwrap();
    let corrupt_logo: &[u8] = b"\x89PNG but actually garbage";
    let with_corrupt = render(
        &request,
        theme,
        Some(corrupt_logo),
        None,
        &character_map("KRISHNA", b"also not an image".to_vec()),
    )
    .unwrap();

    // A corrupt asset must produce exactly the document its absence would.
    assert_eq!(without, with_corrupt);
}

#[test]
fn unknown_character_key_is_tolerated() {
    let mut request = sample_request();
    request.character_key = Some("GARUDA".to_string());
    let characters = character_map("KRISHNA", png_asset(32, 32, [1, 2, 3, 255]));

    let bytes = render(&request, theme::default_theme(), None, None, &characters).unwrap();
    assert_is_pdf(&bytes);
}

#[test]
fn character_image_actually_lands_on_the_page() {
    let request = sample_request();
    let theme = theme::default_theme();

    let plain = render(&request, theme, None, None, &HashMap::new()).unwrap();
    let characters = character_map("KRISHNA", png_asset(300, 400, [30, 90, 200, 255]));
    let illustrated = render(&request, theme, None, None, &characters).unwrap();

    assert!(
        illustrated.len() > plain.len(),
        "embedding an image must grow the document"
    );
}

#[test]
fn identical_inputs_give_identical_bytes() {
    let logo = png_asset(64, 64, [218, 165, 32, 255]);
    let characters = character_map("KRISHNA", png_asset(90, 120, [128, 0, 0, 255]));
    let request = sample_request();
    let theme = theme::default_theme();

    let first = render(&request, theme, Some(&logo), None, &characters).unwrap();
    let second = render(&request, theme, Some(&logo), None, &characters).unwrap();
    assert_eq!(first, second);
}

#[test]
fn heritage_watermark_leaves_the_character_illustration_intact() {
    let request = sample_request();
    let heritage = theme::by_name("heritage").unwrap();
    let logo = png_asset(200, 200, [0, 33, 71, 255]);
    let characters = character_map("KRISHNA", png_asset(300, 400, [30, 90, 200, 255]));

    let with_both = render(&request, heritage, Some(&logo), None, &characters).unwrap();
    let watermark_only = render(&request, heritage, Some(&logo), None, &HashMap::new()).unwrap();
    let character_only = render(&request, heritage, None, None, &characters).unwrap();

    // Both images must land on the page; the flattened watermark may not
    // replace the illustration.
    assert_is_pdf(&with_both);
    assert!(with_both.len() > watermark_only.len());
    assert!(with_both.len() > character_only.len());

    let body = String::from_utf8_lossy(&with_both);
    let image_xobjects = body.matches("/Image").count();
    assert!(
        image_xobjects >= 2,
        "expected watermark and illustration XObjects, found {}",
        image_xobjects
    );
}

#[test]
fn every_theme_renders() {
    let logo = png_asset(100, 100, [0, 0, 0, 255]);
    for theme in &theme::THEMES {
        let bytes = render(
            &sample_request(),
            theme,
            Some(&logo),
            None,
            &HashMap::new(),
        )
        .unwrap();
        assert_is_pdf(&bytes);
    }
}

#[test]
fn rendered_document_survives_a_disk_round_trip() {
    let bytes = render(
        &sample_request(),
        theme::default_theme(),
        None,
        None,
        &HashMap::new(),
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("certificate.pdf");
    std::fs::write(&path, &bytes).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}
