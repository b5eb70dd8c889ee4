//! Layout themes: the colors, fonts, fixed offsets, and caption strings that
//! make up one visual style of certificate. All geometry is in millimeters on
//! a landscape A4 page; vertical text offsets are measured down from the top
//! edge ("drop") except where noted.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Times,
    Helvetica,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Institution name and award title.
    pub primary: Rgb8,
    /// Recipient name and the outer border.
    pub accent: Rgb8,
    /// Inner border, corner marks, and decorative rules.
    pub rule: Rgb8,
    pub ink: Rgb8,
    pub muted: Rgb8,
    pub faint: Rgb8,
}

/// Point sizes for every text block.
#[derive(Debug, Clone, Copy)]
pub struct FontSizes {
    pub title: f32,
    pub subtitle: f32,
    pub class_label: f32,
    pub lead_in: f32,
    pub recipient: f32,
    pub award_title: f32,
    pub description: f32,
    pub description_leading: f32,
    pub date: f32,
    pub caption: f32,
    pub caption_role: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    pub char_box_w: f32,
    pub char_box_h: f32,
    pub char_margin_right: f32,
    pub char_margin_top: f32,
    pub logo_w: f32,
    pub logo_h: f32,
    pub logo_x: f32,
    pub logo_y: f32,
    pub sign_w: f32,
    pub sign_h: f32,
    pub sign_center_x: f32,
    pub sign_y: f32,
    pub outer_inset: f32,
    pub outer_width_pt: f32,
    pub inner_inset: f32,
    pub inner_width_pt: f32,
    pub corner_radius: f32,
    pub title_drop: f32,
    pub subtitle_drop: f32,
    pub class_label_drop: f32,
    pub lead_in_drop: f32,
    pub recipient_drop: f32,
    pub rule_drop: f32,
    pub rule_half_width: f32,
    pub award_title_drop: f32,
    pub description_drop: f32,
    pub description_side_margin: f32,
    pub description_max_height: f32,
    pub date_x: f32,
    pub date_y: f32,
    pub place_y: f32,
    pub sign_line_half_width: f32,
    pub sign_line_y: f32,
    pub caption_y: f32,
    pub caption_role_y: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct Captions {
    pub institution: &'static str,
    pub subtitle: &'static str,
    pub class_label: &'static str,
    pub lead_in: &'static str,
    pub place: &'static str,
    pub closing: &'static str,
    pub signatory: &'static str,
    pub filename_prefix: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    pub font_family: FontFamily,
    pub palette: Palette,
    pub sizes: FontSizes,
    pub geometry: Geometry,
    pub captions: Captions,
    /// Render the logo as a near-transparent full-page watermark instead of a
    /// crisp corner mark. Kept as a toggle: one deployment used it, the
    /// others did not.
    pub logo_watermark: bool,
    pub watermark_opacity: f32,
}

const ROYAL_GEOMETRY: Geometry = Geometry {
    char_box_w: 74.0,
    char_box_h: 74.0,
    char_margin_right: 16.0,
    char_margin_top: 24.0,
    logo_w: 42.0,
    logo_h: 42.0,
    logo_x: 32.0,
    logo_y: 142.0,
    sign_w: 65.0,
    sign_h: 22.0,
    sign_center_x: 235.0,
    sign_y: 38.0,
    outer_inset: 15.0,
    outer_width_pt: 5.0,
    inner_inset: 18.0,
    inner_width_pt: 2.0,
    corner_radius: 4.0,
    title_drop: 52.0,
    subtitle_drop: 60.0,
    class_label_drop: 75.0,
    lead_in_drop: 85.0,
    recipient_drop: 100.0,
    rule_drop: 103.0,
    rule_half_width: 65.0,
    award_title_drop: 120.0,
    description_drop: 132.0,
    description_side_margin: 30.0,
    description_max_height: 50.0,
    date_x: 30.0,
    date_y: 35.0,
    place_y: 29.0,
    sign_line_half_width: 35.0,
    sign_line_y: 35.0,
    caption_y: 30.0,
    caption_role_y: 25.0,
};

const ROYAL_SIZES: FontSizes = FontSizes {
    title: 30.0,
    subtitle: 14.0,
    class_label: 22.0,
    lead_in: 14.0,
    recipient: 32.0,
    award_title: 28.0,
    description: 14.0,
    description_leading: 18.0,
    date: 12.0,
    caption: 10.0,
    caption_role: 12.0,
};

const ROYAL_CAPTIONS: Captions = Captions {
    institution: "MURLIDHAR ACADEMY",
    subtitle: "JUNAGADH",
    class_label: "Certificate of Honor",
    lead_in: "This prestigious award is presented to",
    place: "Place: Junagadh",
    closing: "With Gratitude,",
    signatory: "Director of Murlidhar Academy",
    filename_prefix: "Royal_Award",
};

pub static THEMES: [Theme; 3] = [
    // The original royal look: Times over royal blue, maroon, and gold.
    Theme {
        name: "royal",
        font_family: FontFamily::Times,
        palette: Palette {
            primary: Rgb8 { r: 0, g: 33, b: 71 },      // #002147
            accent: Rgb8 { r: 128, g: 0, b: 0 },        // #800000
            rule: Rgb8 { r: 218, g: 165, b: 32 },       // #DAA520
            ink: Rgb8 { r: 0, g: 0, b: 0 },
            muted: Rgb8 { r: 128, g: 128, b: 128 },
            faint: Rgb8 { r: 169, g: 169, b: 169 },
        },
        sizes: ROYAL_SIZES,
        geometry: ROYAL_GEOMETRY,
        captions: ROYAL_CAPTIONS,
        logo_watermark: false,
        watermark_opacity: 1.0,
    },
    // Sans-serif variant with a slate and brass palette and a slightly
    // tighter title block.
    Theme {
        name: "classic",
        font_family: FontFamily::Helvetica,
        palette: Palette {
            primary: Rgb8 { r: 31, g: 58, b: 95 },      // #1F3A5F
            accent: Rgb8 { r: 27, g: 77, b: 62 },       // #1B4D3E
            rule: Rgb8 { r: 181, g: 166, b: 66 },       // #B5A642
            ink: Rgb8 { r: 20, g: 20, b: 20 },
            muted: Rgb8 { r: 110, g: 110, b: 110 },
            faint: Rgb8 { r: 150, g: 150, b: 150 },
        },
        sizes: FontSizes {
            title: 27.0,
            recipient: 30.0,
            award_title: 25.0,
            ..ROYAL_SIZES
        },
        geometry: Geometry {
            logo_x: 30.0,
            logo_y: 145.0,
            title_drop: 50.0,
            subtitle_drop: 58.0,
            rule_half_width: 60.0,
            ..ROYAL_GEOMETRY
        },
        captions: ROYAL_CAPTIONS,
        logo_watermark: false,
        watermark_opacity: 1.0,
    },
    // Deep green and copper, with the logo washed across the whole page.
    Theme {
        name: "heritage",
        font_family: FontFamily::Times,
        palette: Palette {
            primary: Rgb8 { r: 1, g: 50, b: 32 },       // #013220
            accent: Rgb8 { r: 184, g: 115, b: 51 },     // #B87333
            rule: Rgb8 { r: 207, g: 181, b: 59 },       // #CFB53B
            ink: Rgb8 { r: 0, g: 0, b: 0 },
            muted: Rgb8 { r: 128, g: 128, b: 128 },
            faint: Rgb8 { r: 169, g: 169, b: 169 },
        },
        sizes: ROYAL_SIZES,
        geometry: ROYAL_GEOMETRY,
        captions: ROYAL_CAPTIONS,
        logo_watermark: true,
        watermark_opacity: 0.08,
    },
];

pub fn by_name(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.name == name)
}

pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}
