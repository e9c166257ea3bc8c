use eframe_sketch::canvas::BACKGROUND;
use eframe_sketch::{BrushSize, Canvas, Tool};
use egui::{Color32, Pos2};
use image::Rgba;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

fn canvas_with_surface() -> Canvas {
    let mut canvas = Canvas::new(None);
    canvas.ensure_surface(100, 100);
    canvas
}

fn pixel(canvas: &Canvas, x: u32, y: u32) -> Rgba<u8> {
    *canvas.surface().unwrap().get_pixel(x, y)
}

fn drag(canvas: &mut Canvas, from: (f32, f32), to: (f32, f32)) {
    canvas.pointer_down(Pos2::new(from.0, from.1));
    canvas.pointer_drag(Pos2::new(to.0, to.1));
    canvas.pointer_up(Pos2::new(to.0, to.1));
}

#[test]
fn test_new_surface_is_white() {
    let canvas = canvas_with_surface();
    assert_eq!(BACKGROUND, Color32::WHITE);
    assert!(canvas.surface().unwrap().pixels().all(|p| *p == WHITE));
}

#[test]
fn test_pencil_paints_while_dragging() {
    let mut canvas = canvas_with_surface();
    canvas.pointer_down(Pos2::new(10.0, 10.0));
    canvas.pointer_drag(Pos2::new(50.0, 10.0));
    assert_eq!(pixel(&canvas, 30, 10), BLACK);

    canvas.pointer_drag(Pos2::new(50.0, 40.0));
    assert_eq!(pixel(&canvas, 50, 25), BLACK);
    canvas.pointer_up(Pos2::new(50.0, 40.0));
    assert!(!canvas.is_drawing());
}

#[test]
fn test_pencil_uses_current_color_and_width() {
    let mut canvas = canvas_with_surface();
    canvas.set_color(Color32::RED);
    canvas.set_brush_size(BrushSize::Large);
    drag(&mut canvas, (10.0, 50.0), (90.0, 50.0));

    let red = Rgba([255, 0, 0, 255]);
    assert_eq!(pixel(&canvas, 50, 50), red);
    // Large is 12px wide, so 6px either side of the center line.
    assert_eq!(pixel(&canvas, 50, 44), red);
    assert_eq!(pixel(&canvas, 50, 56), red);
    assert_eq!(pixel(&canvas, 50, 57), WHITE);
}

#[test]
fn test_click_paints_a_dot() {
    let mut canvas = canvas_with_surface();
    canvas.pointer_down(Pos2::new(20.0, 20.0));
    canvas.pointer_up(Pos2::new(20.0, 20.0));
    assert_eq!(pixel(&canvas, 20, 20), BLACK);
}

#[test]
fn test_eraser_paints_background() {
    let mut canvas = canvas_with_surface();
    canvas.set_brush_size(BrushSize::Medium);
    drag(&mut canvas, (10.0, 30.0), (90.0, 30.0));
    assert_eq!(pixel(&canvas, 50, 30), BLACK);

    canvas.set_tool(Tool::Eraser);
    canvas.set_color(Color32::RED);
    drag(&mut canvas, (10.0, 30.0), (90.0, 30.0));
    assert_eq!(pixel(&canvas, 50, 30), WHITE);
}

#[test]
fn test_line_commits_on_release() {
    let mut canvas = canvas_with_surface();
    canvas.set_tool(Tool::Line);
    canvas.pointer_down(Pos2::new(10.0, 10.0));
    canvas.pointer_drag(Pos2::new(50.0, 50.0));

    assert_eq!(pixel(&canvas, 30, 30), WHITE);
    assert_eq!(pixel(&canvas, 10, 10), WHITE);
    let preview = canvas.preview().unwrap();
    assert_eq!(preview.tool, Tool::Line);
    assert_eq!(preview.start, Pos2::new(10.0, 10.0));
    assert_eq!(preview.end, Pos2::new(50.0, 50.0));

    canvas.pointer_up(Pos2::new(50.0, 50.0));
    assert_eq!(pixel(&canvas, 30, 30), BLACK);
    assert!(canvas.preview().is_none());
}

#[test]
fn test_rectangle_from_any_corner() {
    let mut canvas = canvas_with_surface();
    canvas.set_tool(Tool::Rectangle);
    drag(&mut canvas, (60.0, 60.0), (20.0, 30.0));

    assert_eq!(pixel(&canvas, 20, 30), BLACK);
    assert_eq!(pixel(&canvas, 60, 30), BLACK);
    assert_eq!(pixel(&canvas, 60, 60), BLACK);
    assert_eq!(pixel(&canvas, 20, 60), BLACK);
    assert_eq!(pixel(&canvas, 40, 30), BLACK);
    assert_eq!(pixel(&canvas, 40, 45), WHITE);
}

#[test]
fn test_circle_inscribed_in_box() {
    let mut canvas = canvas_with_surface();
    canvas.set_tool(Tool::Circle);
    drag(&mut canvas, (10.0, 10.0), (90.0, 50.0));

    assert_eq!(pixel(&canvas, 90, 30), BLACK);
    assert_eq!(pixel(&canvas, 10, 30), BLACK);
    assert_eq!(pixel(&canvas, 50, 30), WHITE);
    // Box corners lie outside the ellipse.
    assert_eq!(pixel(&canvas, 10, 10), WHITE);
    assert_eq!(pixel(&canvas, 90, 50), WHITE);
}

#[test]
fn test_freehand_tools_have_no_preview() {
    let mut canvas = canvas_with_surface();
    canvas.pointer_down(Pos2::new(10.0, 10.0));
    canvas.pointer_drag(Pos2::new(20.0, 20.0));
    assert!(canvas.is_drawing());
    assert!(canvas.preview().is_none());
}

#[test]
fn test_drag_without_press_is_ignored() {
    let mut canvas = canvas_with_surface();
    canvas.pointer_drag(Pos2::new(20.0, 20.0));
    canvas.pointer_up(Pos2::new(30.0, 30.0));
    assert!(canvas.surface().unwrap().pixels().all(|p| *p == WHITE));
    assert!(!canvas.history().can_undo());
}

#[test]
fn test_drawing_past_the_edge() {
    let mut canvas = canvas_with_surface();
    canvas.set_brush_size(BrushSize::Large);
    drag(&mut canvas, (50.0, 50.0), (500.0, -300.0));
    canvas.set_tool(Tool::Circle);
    drag(&mut canvas, (-50.0, -50.0), (150.0, 150.0));
    assert_eq!(pixel(&canvas, 50, 50), BLACK);
}

#[test]
fn test_pointer_without_surface() {
    let mut canvas = Canvas::new(None);
    drag(&mut canvas, (1.0, 1.0), (5.0, 5.0));
    assert!(canvas.surface().is_none());
    assert!(!canvas.history().can_undo());
}

#[test]
fn test_settings_do_not_touch_history() {
    let mut canvas = canvas_with_surface();
    canvas.set_color(Color32::BLUE);
    canvas.set_brush_size(BrushSize::Medium);
    canvas.set_tool(Tool::Rectangle);
    assert!(!canvas.history().can_undo());
    assert!(canvas.surface().unwrap().pixels().all(|p| *p == WHITE));
}
