//! Printable QR pass card
//!
//! The QR payload is the registration number. The card is a green header
//! band with the event title, the code on white, and the registration
//! number underneath, encoded as PNG for display and saving.

mod glyphs;

use std::io::Cursor;

use anyhow::{Context, Result, bail};
use image::{ImageFormat, Rgba, RgbaImage};
use qrcode_generator::QrCodeEcc;

use glyphs::{GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH, glyph, text_width};

const TITLE: &str = "EVREADY 2026";
const SUBTITLE: &str = "KARNATAKAS LARGEST EV EXPO";
const FOOTNOTE: &str = "SHOW THIS QR AT THE VENUE FOR ENTRY";

const GREEN_700: Rgba<u8> = Rgba([21, 128, 61, 255]);
const GREEN_800: Rgba<u8> = Rgba([22, 101, 52, 255]);
const GREEN_100: Rgba<u8> = Rgba([220, 252, 231, 255]);
const GREEN_200: Rgba<u8> = Rgba([187, 247, 208, 255]);
const GRAY_500: Rgba<u8> = Rgba([107, 114, 128, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Pixels per QR module
const MODULE_PX: u32 = 6;
/// Quiet zone around the code, in modules
const QUIET_MODULES: u32 = 4;
const MIN_CARD_WIDTH: u32 = 360;
const BORDER_PX: u32 = 3;
const HEADER_HEIGHT: u32 = 100;
const PADDING: u32 = 24;

/// Save dialog default for a pass
pub fn pass_file_name(reg_num: &str) -> String {
    let safe: String = reg_num
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect();
    format!("{}-evready-pass.png", safe)
}

/// Layout of a rendered card, used by tests and the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub width: u32,
    pub height: u32,
    /// Top-left pixel of the first QR module
    pub qr_origin: (u32, u32),
    pub modules: u32,
}

/// Render the pass card for `reg_num` as PNG bytes
pub fn render_pass_png(reg_num: &str) -> Result<Vec<u8>> {
    let (image, _) = render_pass(reg_num)?;
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .context("Failed to encode pass card")?;
    Ok(buf.into_inner())
}

/// Render the pass card for `reg_num`
pub fn render_pass(reg_num: &str) -> Result<(RgbaImage, CardLayout)> {
    let reg_num = reg_num.trim();
    if reg_num.is_empty() {
        bail!("Registration number is empty");
    }

    let matrix = qrcode_generator::to_matrix(reg_num, QrCodeEcc::Medium)
        .context("Failed to encode QR code")?;
    let modules = matrix.len() as u32;
    let qr_px = (modules + QUIET_MODULES * 2) * MODULE_PX;

    let caption = format!("REG NO: {}", reg_num);
    let caption_scale = 3;
    let note_scale = 2;
    let content_width = qr_px
        .max(text_width(&caption, caption_scale))
        .max(text_width(FOOTNOTE, note_scale));
    let width = (content_width + PADDING * 2).max(MIN_CARD_WIDTH);

    let qr_top = HEADER_HEIGHT + PADDING;
    let caption_top = qr_top + qr_px + PADDING / 2;
    let note_top = caption_top + GLYPH_HEIGHT * caption_scale + PADDING / 2;
    let height = note_top + GLYPH_HEIGHT * note_scale + PADDING;

    let mut img = RgbaImage::from_pixel(width, height, WHITE);

    fill_rect(&mut img, 0, 0, width, HEADER_HEIGHT, GREEN_700);
    draw_text_centered(&mut img, TITLE, 26, 4, WHITE);
    draw_text_centered(&mut img, SUBTITLE, 26 + GLYPH_HEIGHT * 4 + 12, 2, GREEN_100);

    let qr_left = (width - qr_px) / 2;
    let origin = (
        qr_left + QUIET_MODULES * MODULE_PX,
        qr_top + QUIET_MODULES * MODULE_PX,
    );
    for (y, row) in matrix.iter().enumerate() {
        for (x, &dark) in row.iter().enumerate() {
            if dark {
                fill_rect(
                    &mut img,
                    origin.0 + x as u32 * MODULE_PX,
                    origin.1 + y as u32 * MODULE_PX,
                    MODULE_PX,
                    MODULE_PX,
                    BLACK,
                );
            }
        }
    }

    draw_text_centered(&mut img, &caption, caption_top, caption_scale, GREEN_800);
    draw_text_centered(&mut img, FOOTNOTE, note_top, note_scale, GRAY_500);
    draw_border(&mut img, BORDER_PX, GREEN_200);

    let layout = CardLayout {
        width,
        height,
        qr_origin: origin,
        modules,
    };
    tracing::debug!("Rendered pass card {}x{} for {}", width, height, reg_num);
    Ok((img, layout))
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    let x_end = (x + w).min(img.width());
    let y_end = (y + h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

fn draw_border(img: &mut RgbaImage, thickness: u32, color: Rgba<u8>) {
    let (w, h) = img.dimensions();
    fill_rect(img, 0, 0, w, thickness, color);
    fill_rect(img, 0, h.saturating_sub(thickness), w, thickness, color);
    fill_rect(img, 0, 0, thickness, h, color);
    fill_rect(img, w.saturating_sub(thickness), 0, thickness, h, color);
}

fn draw_text_centered(img: &mut RgbaImage, text: &str, top: u32, scale: u32, color: Rgba<u8>) {
    let left = img.width().saturating_sub(text_width(text, scale)) / 2;
    for (i, c) in text.chars().enumerate() {
        let gx = left + i as u32 * GLYPH_ADVANCE * scale;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                    fill_rect(
                        img,
                        gx + col * scale,
                        top + row as u32 * scale,
                        scale,
                        scale,
                        color,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_reg_num() {
        assert_eq!(pass_file_name("EV2026-0042"), "EV2026-0042-evready-pass.png");
        assert_eq!(pass_file_name("A/B:C"), "A_B_C-evready-pass.png");
    }

    #[test]
    fn empty_reg_num_rejected() {
        assert!(render_pass("  ").is_err());
    }

    #[test]
    fn card_contains_qr_finder_pattern() {
        let (img, layout) = render_pass("EV2026-0042").unwrap();
        assert!(layout.width >= MIN_CARD_WIDTH);
        assert_eq!(img.dimensions(), (layout.width, layout.height));

        // Finder pattern: dark outer ring, light ring, dark center
        let module = |mx: u32, my: u32| {
            *img.get_pixel(
                layout.qr_origin.0 + mx * MODULE_PX + 1,
                layout.qr_origin.1 + my * MODULE_PX + 1,
            )
        };
        assert_eq!(module(0, 0), BLACK);
        assert_eq!(module(1, 1), WHITE);
        assert_eq!(module(3, 3), BLACK);
        assert_eq!(module(layout.modules - 1, 0), BLACK);
        assert_eq!(module(0, layout.modules - 1), BLACK);

        // Quiet zone stays white
        assert_eq!(
            *img.get_pixel(layout.qr_origin.0 - 2, layout.qr_origin.1 - 2),
            WHITE
        );
    }

    #[test]
    fn header_band_and_border() {
        let (img, layout) = render_pass("R1").unwrap();
        assert_eq!(*img.get_pixel(0, 0), GREEN_200);
        assert_eq!(*img.get_pixel(BORDER_PX + 1, BORDER_PX + 1), GREEN_700);
        assert_eq!(*img.get_pixel(layout.width / 2, layout.height - 1), GREEN_200);
    }

    #[test]
    fn png_decodes_back() {
        let bytes = render_pass_png("EV2026-0001").unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
        let (_, layout) = render_pass("EV2026-0001").unwrap();
        assert_eq!(decoded.width(), layout.width);
        assert_eq!(decoded.height(), layout.height);
    }

    #[test]
    fn long_reg_num_widens_card() {
        let short = render_pass("R1").unwrap().1;
        let long = render_pass("EVREADY-2026-REGISTRATION-000123456").unwrap().1;
        assert!(long.width > short.width);
    }
}
