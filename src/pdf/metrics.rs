//! Text metrics for the built-in base-14 fonts.
//!
//! PDF viewers ship the base-14 fonts, so nothing is embedded; centering and
//! paragraph wrap instead rely on the standard AFM advance widths, recorded
//! here in 1/1000 em units for the printable ASCII range (0x20..=0x7E).
//! Helvetica-Oblique shares Helvetica's widths, so five tables cover all six
//! faces in use.

use crate::theme::FontFamily;
use printpdf::BuiltinFont;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

pub fn builtin(family: FontFamily, style: FontStyle) -> BuiltinFont {
    match (family, style) {
        (FontFamily::Times, FontStyle::Regular) => BuiltinFont::TimesRoman,
        (FontFamily::Times, FontStyle::Bold) => BuiltinFont::TimesBold,
        (FontFamily::Times, FontStyle::Italic) => BuiltinFont::TimesItalic,
        (FontFamily::Helvetica, FontStyle::Regular) => BuiltinFont::Helvetica,
        (FontFamily::Helvetica, FontStyle::Bold) => BuiltinFont::HelveticaBold,
        (FontFamily::Helvetica, FontStyle::Italic) => BuiltinFont::HelveticaOblique,
    }
}

const PT_TO_MM: f32 = 25.4 / 72.0;

/// Width of `text` in millimeters at the given point size.
pub fn text_width_mm(text: &str, family: FontFamily, style: FontStyle, size_pt: f32) -> f32 {
    let table = widths(family, style);
    let units: u32 = text.chars().map(|c| u32::from(char_units(table, c))).sum();
    units as f32 / 1000.0 * size_pt * PT_TO_MM
}

pub fn leading_mm(leading_pt: f32) -> f32 {
    leading_pt * PT_TO_MM
}

/// Splits description markup into drawable lines: `<br>`/`<br/>` force a
/// break, emphasis tags are stripped, and the remainder is greedily wrapped
/// so no line exceeds `max_width_mm`. A single word wider than the box gets a
/// line of its own instead of a mid-word cut. An empty segment between two
/// forced breaks stays an empty line, so deliberate blank lines keep their
/// vertical advance.
pub fn wrap_paragraph(
    text: &str,
    family: FontFamily,
    style: FontStyle,
    size_pt: f32,
    max_width_mm: f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in split_forced_breaks(text) {
        let plain = strip_emphasis(&segment);
        let start = lines.len();
        let mut current = String::new();
        for word in plain.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
                continue;
            }
            let candidate = format!("{} {}", current, word);
            if text_width_mm(&candidate, family, style, size_pt) > max_width_mm {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            } else {
                current = candidate;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        if lines.len() == start {
            lines.push(String::new());
        }
    }
    lines
}

fn split_forced_breaks(text: &str) -> Vec<String> {
    text.replace("<br/>", "\n")
        .replace("<br />", "\n")
        .replace("<br>", "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

fn strip_emphasis(text: &str) -> String {
    let mut out = text.to_string();
    for tag in ["<b>", "</b>", "<i>", "</i>", "<em>", "</em>", "<strong>", "</strong>"] {
        out = out.replace(tag, "");
    }
    out
}

fn widths(family: FontFamily, style: FontStyle) -> &'static [u16; 95] {
    match (family, style) {
        (FontFamily::Times, FontStyle::Regular) => &TIMES_ROMAN,
        (FontFamily::Times, FontStyle::Bold) => &TIMES_BOLD,
        (FontFamily::Times, FontStyle::Italic) => &TIMES_ITALIC,
        (FontFamily::Helvetica, FontStyle::Regular | FontStyle::Italic) => &HELVETICA,
        (FontFamily::Helvetica, FontStyle::Bold) => &HELVETICA_BOLD,
    }
}

fn char_units(table: &[u16; 95], c: char) -> u16 {
    let cp = c as u32;
    if (0x20..=0x7E).contains(&cp) {
        table[(cp - 0x20) as usize]
    } else {
        // Out of table; half an em keeps the estimate stable.
        500
    }
}

#[rustfmt::skip]
static TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 333, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
static TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 333, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

#[rustfmt::skip]
static TIMES_ITALIC: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 333, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500,
    920, 611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
    611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389, 278, 389, 422, 500,
    333, 500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722, 500, 500,
    500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
];

#[rustfmt::skip]
static HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 222, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    222, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
static HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 278, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    278, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[cfg(test)]
mod tests {
    use super::*;

    const BOX_WIDTH_MM: f32 = 237.0;

    #[test]
    fn width_scales_with_point_size() {
        let small = text_width_mm("Murlidhar", FontFamily::Times, FontStyle::Regular, 10.0);
        let large = text_width_mm("Murlidhar", FontFamily::Times, FontStyle::Regular, 20.0);
        assert!(small > 0.0);
        assert!((large - 2.0 * small).abs() < 1e-4);
    }

    #[test]
    fn bold_runs_wider_than_regular() {
        let regular = text_width_mm("award", FontFamily::Times, FontStyle::Regular, 14.0);
        let bold = text_width_mm("award", FontFamily::Times, FontStyle::Bold, 14.0);
        assert!(bold > regular);
    }

    #[test]
    fn long_description_wraps_to_several_bounded_lines() {
        let description = "Like Lord Krishna guided Arjuna to victory, you have been the \
            guiding light for our students across every batch and every season. This award \
            honors your exceptional mentorship, patience, and direction over many years.";
        assert!(description.len() >= 200);

        let lines = wrap_paragraph(
            description,
            FontFamily::Times,
            FontStyle::Regular,
            14.0,
            BOX_WIDTH_MM,
        );
        assert!(lines.len() >= 3, "expected >= 3 lines, got {}", lines.len());
        for line in &lines {
            let w = text_width_mm(line, FontFamily::Times, FontStyle::Regular, 14.0);
            assert!(w <= BOX_WIDTH_MM, "line too wide: {:.1}mm: {}", w, line);
        }
    }

    #[test]
    fn wrapping_never_cuts_words() {
        let description = "exceptional mentorship and unwavering dedication to every student";
        let lines = wrap_paragraph(
            description,
            FontFamily::Helvetica,
            FontStyle::Regular,
            14.0,
            40.0,
        );
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, description);
    }

    #[test]
    fn forced_breaks_and_emphasis_markup() {
        let lines = wrap_paragraph(
            "For <b>excellence</b> in teaching<br/>and mentorship",
            FontFamily::Times,
            FontStyle::Regular,
            14.0,
            BOX_WIDTH_MM,
        );
        assert_eq!(lines, vec!["For excellence in teaching", "and mentorship"]);
    }

    #[test]
    fn doubled_break_keeps_a_blank_line() {
        let lines = wrap_paragraph(
            "first stanza<br/><br/>second stanza",
            FontFamily::Times,
            FontStyle::Regular,
            14.0,
            BOX_WIDTH_MM,
        );
        assert_eq!(lines, vec!["first stanza", "", "second stanza"]);
    }

    #[test]
    fn oversized_single_word_gets_its_own_line() {
        let lines = wrap_paragraph(
            "short Hemchandracharya short",
            FontFamily::Times,
            FontStyle::Regular,
            14.0,
            10.0,
        );
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Hemchandracharya");
    }
}
