//! Colors and number formatting shared by the charts.
use crate::data::ModelType;

/// Red / yellow / green gradient for the capability heatmap.
pub const CAPABILITY_GRADIENT: [&str; 3] = ["#ff6b6b", "#ffe066", "#69db7c"];
/// Red / yellow / green gradient for the SDK heatmap.
pub const SDK_GRADIENT: [&str; 3] = ["#ff8787", "#ffe066", "#69db7c"];

pub const COMMERCIAL_LABEL_COLOR: &str = "darkblue";
pub const OPEN_SOURCE_LABEL_COLOR: &str = "darkgreen";

pub const COMMERCIAL_BAR_COLOR: &str = "#4dabf7";
pub const OPEN_SOURCE_BAR_COLOR: &str = "#40c057";

/// Heatmap row label color for a model type.
pub fn label_color(model_type: ModelType) -> &'static str {
    match model_type {
        ModelType::Commercial => COMMERCIAL_LABEL_COLOR,
        ModelType::OpenSource => OPEN_SOURCE_LABEL_COLOR,
    }
}

/// Bar fill color for a model type.
pub fn bar_color(model_type: ModelType) -> &'static str {
    match model_type {
        ModelType::Commercial => COMMERCIAL_BAR_COLOR,
        ModelType::OpenSource => OPEN_SOURCE_BAR_COLOR,
    }
}

/// Color of `score` on a three-stop gradient spanning 0.0 to 1.0.
///
/// Stops are returned verbatim; values in between are interpolated in RGB.
pub fn gradient_color(gradient: &[&str; 3], score: f64) -> String {
    let score = score.clamp(0.0, 1.0);
    if score == 0.0 || score == 0.5 || score == 1.0 {
        return gradient[(score * 2.0) as usize].to_string();
    }
    let (from, to, t) = if score < 0.5 {
        (gradient[0], gradient[1], score * 2.0)
    } else {
        (gradient[1], gradient[2], (score - 0.5) * 2.0)
    };
    match (parse_hex(from), parse_hex(to)) {
        (Some(a), Some(b)) => {
            let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
            format!("#{:02x}{:02x}{:02x}", mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
        }
        _ => from.to_string(),
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Cell text for a score, one decimal place.
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Integer part of `value` with comma thousands separators, e.g. `2,000`.
pub fn format_thousands(value: f64) -> String {
    let int = value.trunc() as i64;
    let digits = int.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if int < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
