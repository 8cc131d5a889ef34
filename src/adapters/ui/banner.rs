//! Startup banner: "PROJECTS" in figlet's standard font with a vertical color gradient.

use crossterm::QueueableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{self, Write};

const TITLE: &str = "PROJECTS";

/// Amber (#ffb000).
const TOP: (u8, u8, u8) = (0xff, 0xb0, 0x00);
/// Teal (#00b3a4).
const BOTTOM: (u8, u8, u8) = (0x00, 0xb3, 0xa4);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let mix = |x: u8, y: u8| (f64::from(x) * (1.0 - t) + f64::from(y) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Render the title as ASCII art, or the bare title if the font cannot render it.
fn title_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()))
        .unwrap_or_else(|| TITLE.to_string())
}

/// Print the banner and crate version to `out`.
pub fn print_welcome(out: &mut impl Write) -> io::Result<()> {
    let art = title_art();
    let lines: Vec<&str> = art.lines().filter(|l| !l.trim().is_empty()).collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(TOP, BOTTOM, t);
        out.queue(SetForegroundColor(Color::Rgb { r, g, b }))?
            .queue(Print(line))?
            .queue(Print("\n"))?
            .queue(ResetColor)?;
    }

    out.queue(Print(format!("v{}\n", env!("CARGO_PKG_VERSION"))))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb(TOP, BOTTOM, 0.0), TOP);
        assert_eq!(lerp_rgb(TOP, BOTTOM, 1.0), BOTTOM);
    }

    #[test]
    fn test_banner_ends_with_version() {
        let mut buf = Vec::new();
        print_welcome(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with(&format!("v{}\n", env!("CARGO_PKG_VERSION"))));
    }
}
