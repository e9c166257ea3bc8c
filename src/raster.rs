//! Pixel-buffer drawing primitives for the canvas surface.
//!
//! All functions clip against the image bounds, so callers may pass
//! coordinates that lie partly or entirely outside the surface.

use image::{Rgba, RgbaImage};

/// A pixel coordinate. May be negative or past the surface edge.
pub type Pixel = (i32, i32);

/// Fewest points used to approximate an ellipse outline
const MIN_ELLIPSE_SEGMENTS: usize = 16;
const MAX_ELLIPSE_SEGMENTS: usize = 4096;

/// Fill the whole image with one color
pub fn fill(image: &mut RgbaImage, color: Rgba<u8>) {
    for pixel in image.pixels_mut() {
        *pixel = color;
    }
}

fn put_clipped(image: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < image.width() && y < image.height() {
        image.put_pixel(x, y, color);
    }
}

/// Stamp a filled disc whose diameter is `width` pixels
pub fn stamp_disc(image: &mut RgbaImage, center: Pixel, width: u32, color: Rgba<u8>) {
    let radius = (width as f32 / 2.0).max(0.5);
    if radius <= 0.5 {
        put_clipped(image, center.0, center.1, color);
        return;
    }

    let reach = radius.ceil() as i32;
    let radius_sq = radius * radius;
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            if (dx * dx + dy * dy) as f32 <= radius_sq {
                put_clipped(image, center.0 + dx, center.1 + dy, color);
            }
        }
    }
}

/// Draw a straight segment of the given stroke width.
///
/// Walks the segment with Bresenham's algorithm and stamps a disc at every
/// step, which gives round caps and joins for free.
pub fn draw_segment(image: &mut RgbaImage, from: Pixel, to: Pixel, width: u32, color: Rgba<u8>) {
    let (x0, y0) = from;
    let (x1, y1) = to;
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let (mut x, mut y) = (x0, y0);
    loop {
        stamp_disc(image, (x, y), width, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draw a closed polyline through `points`
pub fn draw_closed_path(image: &mut RgbaImage, points: &[Pixel], width: u32, color: Rgba<u8>) {
    match points {
        [] => {}
        [single] => stamp_disc(image, *single, width, color),
        _ => {
            for pair in points.windows(2) {
                draw_segment(image, pair[0], pair[1], width, color);
            }
            let first = points[0];
            let last = points[points.len() - 1];
            draw_segment(image, last, first, width, color);
        }
    }
}

/// Outline of the box with top-left corner `min`, spanning `size` pixels.
///
/// Like most 2D APIs, the outline covers `min.x ..= min.x + size.0`.
pub fn draw_rect_outline(image: &mut RgbaImage, min: Pixel, size: (i32, i32), width: u32, color: Rgba<u8>) {
    let (x, y) = min;
    let (w, h) = size;
    let corners = [(x, y), (x + w, y), (x + w, y + h), (x, y + h)];
    draw_closed_path(image, &corners, width, color);
}

/// Points on the ellipse inscribed in the box at `min` spanning `size`
pub fn ellipse_points(min: Pixel, size: (i32, i32)) -> Vec<Pixel> {
    let rx = size.0 as f32 / 2.0;
    let ry = size.1 as f32 / 2.0;
    let cx = min.0 as f32 + rx;
    let cy = min.1 as f32 + ry;

    if size.0 == 0 && size.1 == 0 {
        return vec![min];
    }

    let circumference = std::f32::consts::TAU * rx.max(ry);
    let segments = ((circumference / 2.0).ceil() as usize).clamp(MIN_ELLIPSE_SEGMENTS, MAX_ELLIPSE_SEGMENTS);

    let mut points: Vec<Pixel> = Vec::with_capacity(segments);
    for i in 0..segments {
        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
        let point = (
            (cx + rx * angle.cos()).round() as i32,
            (cy + ry * angle.sin()).round() as i32,
        );
        if points.last() != Some(&point) {
            points.push(point);
        }
    }
    points
}

/// Outline of the ellipse inscribed in the box at `min` spanning `size`
pub fn draw_ellipse_outline(image: &mut RgbaImage, min: Pixel, size: (i32, i32), width: u32, color: Rgba<u8>) {
    let points = ellipse_points(min, size);
    draw_closed_path(image, &points, width, color);
}
