//! Static font-metric tables for the two builtin PDF faces.
//!
//! Character widths are in em units (relative to font size), taken from the
//! Adobe AFM metrics for Helvetica and Helvetica-Bold (widths / 1000). The
//! paginated renderer wraps and centers text without a shaping engine, so a
//! static table is exact for the builtin faces: both cover ASCII
//! 0x20..=0x7E (95 printable characters), index = (char as usize) - 32.
//! Non-ASCII codepoints fall back to an average width.

/// The two faces the paginated renderer draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Helvetica,
    HelveticaBold,
}

/// One typographic point in millimetres.
pub const PT_TO_MM: f32 = 0.352_778;

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Fixed page geometry for the paginated renderer, in millimetres.
#[derive(Debug, Clone, Copy)]
pub struct PageConfig {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
}

impl PageConfig {
    /// Usable text width between the left and right margins.
    pub fn text_width_mm(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// X coordinate of the left text edge.
    pub fn left_mm(&self) -> f32 {
        self.margin_mm
    }

    /// X coordinate of the right text edge.
    pub fn right_mm(&self) -> f32 {
        self.page_width_mm - self.margin_mm
    }

    /// Y coordinate where the page body starts.
    pub fn top_mm(&self) -> f32 {
        self.page_height_mm - self.margin_mm
    }

    /// Y coordinate below which no further line may be placed.
    pub fn bottom_mm(&self) -> f32 {
        self.margin_mm
    }
}

/// A4 with 20 mm margins on all sides — the fixed page model.
pub fn a4_page_config() -> PageConfig {
    PageConfig {
        page_width_mm: 210.0,
        page_height_mm: 297.0,
        margin_mm: 20.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Metric tables
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one face.
///
/// `widths[i]` = width of ASCII character `(i + 32)` in em units, covering
/// 0x20 (space) through 0x7E (~).
pub struct FaceMetrics {
    pub face: Face,
    widths: [f32; 95],
    /// Fallback width for codepoints outside 0x20..=0x7E.
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FaceMetrics {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Measures the rendered width of a string in millimetres at a font size.
    pub fn width_mm(&self, s: &str, font_size_pt: f32) -> f32 {
        self.measure_str(s) * font_size_pt * PT_TO_MM
    }
}

/// Helvetica — Adobe AFM widths / 1000.
static HELVETICA_TABLE: FaceMetrics = FaceMetrics {
    face: Face::Helvetica,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.513,
    space_width: 0.278,
};

/// Helvetica-Bold — Adobe AFM widths / 1000.
static HELVETICA_BOLD_TABLE: FaceMetrics = FaceMetrics {
    face: Face::HelveticaBold,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.536,
    space_width: 0.278,
};

/// Returns the static metric table for a face.
pub fn metrics(face: Face) -> &'static FaceMetrics {
    match face {
        Face::Helvetica => &HELVETICA_TABLE,
        Face::HelveticaBold => &HELVETICA_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Word wrap
// ────────────────────────────────────────────────────────────────────────────

/// Greedy word-wrap of `text` into lines no wider than `max_width_mm` at the
/// given face and size.
///
/// A single word wider than the line gets a line of its own rather than being
/// broken mid-word. Whitespace runs collapse to single spaces; an empty or
/// all-whitespace string yields no lines.
pub fn wrap_words(text: &str, face: Face, font_size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let table = metrics(face);
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let space_mm = table.space_width * font_size_pt * PT_TO_MM;
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_mm = 0.0_f32;

    for word in words {
        let word_mm = table.width_mm(word, font_size_pt);
        if current.is_empty() {
            current.push_str(word);
            current_mm = word_mm;
        } else if current_mm + space_mm + word_mm > max_width_mm {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_mm = word_mm;
        } else {
            current.push(' ');
            current.push_str(word);
            current_mm += space_mm + word_mm;
        }
    }
    lines.push(current);
    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_is_zero() {
        assert_eq!(metrics(Face::Helvetica).measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_space_width() {
        let table = metrics(Face::Helvetica);
        let width = table.measure_str(" ");
        assert!(
            (width - 0.278).abs() < 1e-4,
            "space should be 0.278 em, got {width}"
        );
    }

    #[test]
    fn test_measure_str_known_word() {
        // "CV" = C(0.722) + V(0.667) = 1.389 em in Helvetica
        let width = metrics(Face::Helvetica).measure_str("CV");
        assert!(
            (width - 1.389).abs() < 1e-3,
            "CV should be ~1.389 em, got {width}"
        );
    }

    #[test]
    fn test_non_ascii_falls_back_to_average() {
        let table = metrics(Face::Helvetica);
        let width = table.measure_str("é");
        assert!((width - table.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_bold_face_wider_than_regular() {
        let text = "Software Engineer";
        let regular = metrics(Face::Helvetica).measure_str(text);
        let bold = metrics(Face::HelveticaBold).measure_str(text);
        assert!(bold > regular);
    }

    #[test]
    fn test_width_mm_scales_with_font_size() {
        let table = metrics(Face::Helvetica);
        let at_10 = table.width_mm("Engineer", 10.0);
        let at_20 = table.width_mm("Engineer", 20.0);
        assert!((at_20 - 2.0 * at_10).abs() < 1e-4);
    }

    #[test]
    fn test_a4_page_config_geometry() {
        let config = a4_page_config();
        assert_eq!(config.text_width_mm(), 170.0);
        assert_eq!(config.left_mm(), 20.0);
        assert_eq!(config.right_mm(), 190.0);
        assert_eq!(config.top_mm(), 277.0);
        assert_eq!(config.bottom_mm(), 20.0);
    }

    #[test]
    fn test_wrap_words_empty_yields_no_lines() {
        assert!(wrap_words("", Face::Helvetica, 10.0, 170.0).is_empty());
        assert!(wrap_words("   \t ", Face::Helvetica, 10.0, 170.0).is_empty());
    }

    #[test]
    fn test_wrap_words_short_text_single_line() {
        let lines = wrap_words("Software Engineer", Face::Helvetica, 10.0, 170.0);
        assert_eq!(lines, ["Software Engineer"]);
    }

    #[test]
    fn test_wrap_words_long_text_wraps_without_losing_words() {
        let text = "word ".repeat(200);
        let lines = wrap_words(&text, Face::Helvetica, 10.0, 170.0);
        assert!(lines.len() > 1);
        let total: usize = lines.iter().map(|l| l.split(' ').count()).sum();
        assert_eq!(total, 200);
    }

    #[test]
    fn test_wrap_words_lines_fit_width() {
        let text = "Architected a distributed caching layer using consistent hashing \
                    to reduce latency across five production services at peak load";
        let max = 60.0;
        for line in wrap_words(text, Face::Helvetica, 10.0, max) {
            let width = metrics(Face::Helvetica).width_mm(&line, 10.0);
            assert!(width <= max, "line '{line}' is {width} mm wide, max {max}");
        }
    }

    #[test]
    fn test_wrap_words_oversized_word_gets_own_line() {
        let text = "a superlongunbreakablewordthatexceedsthecolumn b";
        let lines = wrap_words(text, Face::Helvetica, 10.0, 15.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "superlongunbreakablewordthatexceedsthecolumn");
    }
}
