//! SCSS override document.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use base16_model::{Palette, Role, Scheme};
use tracing::{debug, info};

/// Name written into the generated header.
pub const GENERATOR: &str = "base16-gtk";

/// Render the override document. Output is fully determined by the inputs;
/// nothing time or environment dependent is embedded.
pub fn render_document(scheme: &Scheme, palette: &Palette) -> String {
    let mut lines: Vec<String> = vec![
        format!("// Base16 Theme: {}", scheme.name),
        format!("// Author: {}", scheme.author),
        format!("// Variant: {}", palette.variant),
        format!("// Generated automatically by {GENERATOR}"),
        String::new(),
        "// Override palette colors with base16 scheme".to_string(),
    ];

    for (name, ramp) in palette.ramps() {
        for (index, color) in ramp.steps().iter().enumerate() {
            lines.push(format!("${name}_{}: {color};", index + 1));
        }
        lines.push(String::new());
    }

    lines.push("// Override default colors".to_string());
    for (index, pair) in Role::ALL.chunks(2).enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        for role in pair {
            lines.push(format!("@define-color {role} {};", palette.role(*role)));
        }
    }

    let mut document = lines.join("\n");
    document.push('\n');
    document
}

/// Write a rendered document, creating missing parent directories.
///
/// The whole document goes out in one write; on error nothing further is
/// attempted.
pub fn write_document(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
            debug!(dir = %parent.display(), "ensured output directory");
        }
    }
    fs::write(path, document).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), bytes = document.len(), "wrote stylesheet override");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base16_model::{Hue, Paint, Ramp, Rgb, Variant};

    fn flat_palette(variant: Variant) -> Palette {
        let gray = Rgb::new(0x80, 0x80, 0x80);
        let ramp = Ramp::new([gray; 5]);
        Palette::from_fn(variant, |_: Hue| ramp, ramp, ramp, |_| Paint::White)
    }

    fn flat_scheme() -> Scheme {
        Scheme::new("Flat", "Nobody", [Rgb::new(0x80, 0x80, 0x80); 16])
    }

    #[test]
    fn header_lines() {
        let document = render_document(&flat_scheme(), &flat_palette(Variant::Light));
        let header: Vec<&str> = document.lines().take(5).collect();
        assert_eq!(
            header,
            [
                "// Base16 Theme: Flat",
                "// Author: Nobody",
                "// Variant: light",
                "// Generated automatically by base16-gtk",
                "",
            ]
        );
    }

    #[test]
    fn variables_use_single_hash() {
        let document = render_document(&flat_scheme(), &flat_palette(Variant::Dark));
        assert!(document.contains("$blue_1: #808080;\n"));
        assert!(document.contains("$dark_5: #808080;\n"));
        assert!(!document.contains("##"));
    }

    #[test]
    fn every_ramp_and_role_is_emitted_once() {
        let document = render_document(&flat_scheme(), &flat_palette(Variant::Dark));
        let variables = document.lines().filter(|l| l.starts_with('$')).count();
        let defines = document
            .lines()
            .filter(|l| l.starts_with("@define-color "))
            .count();
        assert_eq!(variables, 45);
        assert_eq!(defines, Role::COUNT);
        for role in Role::ALL {
            let needle = format!("@define-color {role} ");
            assert_eq!(document.matches(&needle).count(), 1, "{role}");
        }
    }

    #[test]
    fn ends_with_single_newline() {
        let document = render_document(&flat_scheme(), &flat_palette(Variant::Dark));
        assert!(document.ends_with("@define-color popover_fg_color white;\n"));
        assert!(!document.ends_with("\n\n"));
    }
}
