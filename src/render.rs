//! Software framebuffer backing the minifb window: a `0RGB` `u32` buffer
//! with a filled-disc rasterizer and a tiny 5x7 bitmap font for the score
//! overlay.

use crate::game::Canvas;
use crate::messages::Color;

pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

fn pack(color: Color) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | (color.b as u32)
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    fn set(&mut self, x: i32, y: i32, value: u32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = value;
        }
    }
}

impl Canvas for Framebuffer {
    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Color) {
        let value = pack(color);
        let r = radius as i32;
        let r2 = (radius as i64) * (radius as i64);
        for dy in -r..=r {
            for dx in -r..=r {
                if (dx as i64) * (dx as i64) + (dy as i64) * (dy as i64) <= r2 {
                    self.set(cx + dx, cy + dy, value);
                }
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        let value = pack(color);
        let mut pen_x = x;
        for ch in text.chars() {
            if let Some(bits) = glyph_bits(ch.to_ascii_uppercase()) {
                for (row_index, row) in bits.iter().enumerate() {
                    for column in 0..5 {
                        if (row >> (4 - column)) & 1 == 1 {
                            self.set(pen_x + column, y + row_index as i32, value);
                        }
                    }
                }
            }
            pen_x += 6; // 5px glyph + 1px spacing
        }
    }
}

// 5x7 glyphs, 7 rows of 5 bits each (MSB left). Single-cased font covering
// the score overlay: digits, the label letters and ':'.
fn glyph_bits(ch: char) -> Option<[u8; 7]> {
    match ch {
        '0' => Some([0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
        '1' => Some([0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
        '2' => Some([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
        '3' => Some([0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110]),
        '4' => Some([0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
        '5' => Some([0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
        '6' => Some([0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
        '7' => Some([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
        '8' => Some([0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
        '9' => Some([0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
        'S' => Some([0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
        'C' => Some([0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
        'O' => Some([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'R' => Some([0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
        'E' => Some([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
        ':' => Some([0b00000, 0b00100, 0b00100, 0b00000, 0b00100, 0b00100, 0b00000]),
        _ => None,
    }
}
