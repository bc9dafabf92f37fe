//! Printable label-sheet generation.
//!
//! The rendering side of the system: it calls [`Store::allocate`] once per
//! label and lays the issued identifiers out on an SVG page sized in inches
//! at a configurable DPI. Each label carries a machine-readable byte block
//! (the identifier's four big-endian bytes as an 8x4 bit grid) and the
//! `xx-xx-xx-xx` text beneath it. The sheet has no visibility into store
//! internals beyond the allocator.

use crate::ident::format_id;
use crate::store::Store;
use anyhow::{Result, bail};
use std::fmt::Write;

/// Page geometry for one sheet of labels.
#[derive(Debug, Clone)]
pub struct SheetSpec {
    pub paper_width_in: f64,
    pub paper_height_in: f64,
    /// Left/right margin, in inches
    pub margin_x_in: f64,
    /// Top/bottom margin, in inches
    pub margin_y_in: f64,
    /// Horizontal label count
    pub count_x: u32,
    /// Vertical label count
    pub count_y: u32,
    pub dpi: u32,
    /// Side length of the byte-block glyph, in inches
    pub code_inches: f64,
}

impl SheetSpec {
    fn validate(&self) -> Result<()> {
        if self.count_x == 0 || self.count_y == 0 {
            bail!("label counts must be at least 1x1");
        }
        if self.dpi == 0 {
            bail!("DPI must be non-zero");
        }
        let usable_w = self.paper_width_in - 2.0 * self.margin_x_in;
        let usable_h = self.paper_height_in - 2.0 * self.margin_y_in;
        if usable_w <= 0.0 || usable_h <= 0.0 {
            bail!(
                "margins leave no printable area on a {}x{} inch page",
                self.paper_width_in,
                self.paper_height_in
            );
        }
        Ok(())
    }
}

/// Allocate one identifier per label and render the sheet as SVG.
///
/// The caller publishes the store afterwards; until then the issued
/// identifiers exist only as in-memory concept records.
pub fn generate(store: &mut Store, spec: &SheetSpec) -> Result<String> {
    spec.validate()?;

    let labels = spec.count_x as usize * spec.count_y as usize;
    let mut ids = Vec::with_capacity(labels);
    for _ in 0..labels {
        ids.push(store.allocate()?);
    }

    Ok(render(spec, &ids))
}

fn render(spec: &SheetSpec, ids: &[u32]) -> String {
    let dpi = spec.dpi as f64;
    let page_w = spec.paper_width_in * dpi;
    let page_h = spec.paper_height_in * dpi;
    let margin_x = spec.margin_x_in * dpi;
    let margin_y = spec.margin_y_in * dpi;
    let cell_w = (page_w - 2.0 * margin_x) / spec.count_x as f64;
    let cell_h = (page_h - 2.0 * margin_y) / spec.count_y as f64;
    let code = (spec.code_inches * dpi).min(cell_w * 0.9).min(cell_h * 0.7);
    let text_size = (code * 0.18).max(8.0);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{page_w}" height="{page_h}" viewBox="0 0 {page_w} {page_h}">"#
    );
    let _ = writeln!(svg, r#"<rect width="{page_w}" height="{page_h}" fill="white"/>"#);

    for (i, &id) in ids.iter().enumerate() {
        let col = (i as u32 % spec.count_x) as f64;
        let row = (i as u32 / spec.count_x) as f64;
        let cx = margin_x + col * cell_w + cell_w / 2.0;
        let cy = margin_y + row * cell_h + cell_h / 2.0;
        render_label(&mut svg, id, cx, cy, code, text_size);
    }

    svg.push_str("</svg>\n");
    svg
}

/// One label, centered at (cx, cy): the byte-block glyph with the formatted
/// identifier underneath.
fn render_label(svg: &mut String, id: u32, cx: f64, cy: f64, code: f64, text_size: f64) {
    let x0 = cx - code / 2.0;
    let y0 = cy - code / 2.0;
    // 8 bit columns, 4 byte rows, one cell per bit
    let cell_w = code / 8.0;
    let cell_h = code / 4.0;

    let _ = writeln!(
        svg,
        r#"<rect x="{x0}" y="{y0}" width="{code}" height="{code}" fill="white" stroke="black" stroke-width="1"/>"#
    );

    for (row, byte) in id.to_be_bytes().iter().enumerate() {
        for bit in 0..8 {
            if byte & (0x80 >> bit) != 0 {
                let x = x0 + bit as f64 * cell_w;
                let y = y0 + row as f64 * cell_h;
                let _ = writeln!(
                    svg,
                    r#"<rect x="{x}" y="{y}" width="{cell_w}" height="{cell_h}" fill="black"/>"#
                );
            }
        }
    }

    let ty = y0 + code + text_size * 1.2;
    let _ = writeln!(
        svg,
        r#"<text x="{cx}" y="{ty}" font-family="monospace" font-size="{text_size}" text-anchor="middle">{}</text>"#,
        format_id(id)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Record;

    fn spec_2x3() -> SheetSpec {
        SheetSpec {
            paper_width_in: 8.5,
            paper_height_in: 11.0,
            margin_x_in: 0.5,
            margin_y_in: 0.5,
            count_x: 2,
            count_y: 3,
            dpi: 300,
            code_inches: 0.9,
        }
    }

    fn open_temp() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("inventory.tsv")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_generate_allocates_one_id_per_label() {
        let (_dir, mut store) = open_temp();
        let svg = generate(&mut store, &spec_2x3()).unwrap();

        assert_eq!(store.len(), 6);
        for record in store.records() {
            assert!(svg.contains(&format_id(record.id)));
        }
    }

    #[test]
    fn test_generate_reclaims_purgatory_first() {
        let (_dir, mut store) = open_temp();
        store.add(Record::purgatory(40));
        let svg = generate(&mut store, &spec_2x3()).unwrap();

        assert!(svg.contains(&format_id(40)));
        assert_eq!(store.len(), 6); // 40 reused, five fresh
    }

    #[test]
    fn test_sheet_is_wellformed_svg() {
        let (_dir, mut store) = open_temp();
        let svg = generate(&mut store, &spec_2x3()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_rejects_degenerate_geometry() {
        let (_dir, mut store) = open_temp();

        let mut zero_labels = spec_2x3();
        zero_labels.count_x = 0;
        assert!(generate(&mut store, &zero_labels).is_err());

        let mut all_margin = spec_2x3();
        all_margin.margin_x_in = 5.0;
        assert!(generate(&mut store, &all_margin).is_err());

        // no identifiers were consumed by the failed attempts
        assert!(store.is_empty());
    }
}
