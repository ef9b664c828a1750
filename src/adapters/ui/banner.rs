//! Welcome banner: "SUMMARIZER" in figlet ASCII with a vertical color gradient.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Signal Orange (#ff7a18).
const SIGNAL_ORANGE: (u8, u8, u8) = (0xff, 0x7a, 0x18);
/// Studio Teal (#1fd1c1).
const STUDIO_TEAL: (u8, u8, u8) = (0x1f, 0xd1, 0xc1);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let mix = |x: u8, y: u8| (f64::from(x) * (1.0 - t) + f64::from(y) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Prints the banner followed by the version line. Skips the art if the font fails to load.
pub fn print_welcome() {
    let mut out = stdout();
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("SUMMARIZER").map(|figure| figure.to_string()));

    if let Some(art) = art {
        let lines: Vec<&str> = art.lines().collect();
        let last = lines.len().saturating_sub(1).max(1) as f64;
        for (i, line) in lines.iter().enumerate() {
            let (r, g, b) = lerp_rgb(SIGNAL_ORANGE, STUDIO_TEAL, i as f64 / last);
            let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
            let _ = out.execute(Print(line));
            let _ = out.execute(Print("\r\n"));
            let _ = out.execute(ResetColor);
        }
    }

    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: STUDIO_TEAL.0,
        g: STUDIO_TEAL.1,
        b: STUDIO_TEAL.2,
    }));
    let _ = out.execute(Print(format!(
        "meeting-summarizer v{}\r\n",
        env!("CARGO_PKG_VERSION")
    )));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
