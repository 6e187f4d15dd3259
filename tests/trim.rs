use image::Rgba;
use signature_pad::pen::{BLACK, TRANSPARENT, WHITE};
use signature_pad::trim::{content_bounds, trim_bounds};
use signature_pad::{PadConfig, Point, RasterSurface, StrokeRenderer, TrimBounds, trim};

fn single_pixel(width: u32, height: u32, x: u32, y: u32) -> RasterSurface {
    let mut surface = RasterSurface::new(width, height, WHITE);
    surface.image_mut().put_pixel(x, y, BLACK);
    surface
}

#[test]
fn test_blank_surface_trims_to_nothing() {
    let surface = RasterSurface::new(40, 30, WHITE);

    assert_eq!(content_bounds(&surface, WHITE), TrimBounds::default());
    let trimmed = trim(&surface, WHITE, 0);
    assert_eq!(trimmed.dimensions(), (0, 0));
}

#[test]
fn test_blank_surface_with_margin() {
    // Degenerate bounds sit at the origin and only the margin survives
    let surface = RasterSurface::new(40, 30, TRANSPARENT);
    let trimmed = trim(&surface, TRANSPARENT, 3);
    assert_eq!(trimmed.dimensions(), (3, 3));
    assert!(trimmed.is_uniform(TRANSPARENT));
}

#[test]
fn test_single_pixel_bounds_are_exact() {
    let surface = single_pixel(20, 10, 6, 4);

    assert_eq!(
        content_bounds(&surface, WHITE),
        TrimBounds {
            left: 6,
            top: 4,
            right: 6,
            bottom: 4
        }
    );

    // Right and bottom are exclusive in the crop, so the lone pixel is cut
    assert_eq!(trim(&surface, WHITE, 0).dimensions(), (0, 0));
}

#[test]
fn test_single_pixel_with_margin() {
    let surface = single_pixel(20, 10, 6, 4);

    assert_eq!(
        trim_bounds(&surface, WHITE, 1),
        TrimBounds {
            left: 5,
            top: 3,
            right: 7,
            bottom: 5
        }
    );

    let trimmed = trim(&surface, WHITE, 1);
    assert_eq!(trimmed.dimensions(), (2, 2));
    assert_eq!(trimmed.pixel(1, 1), BLACK);
    assert_eq!(trimmed.pixel(0, 0), WHITE);
}

#[test]
fn test_margin_is_clamped_at_the_edges() {
    let surface = single_pixel(20, 10, 0, 0);
    let bounds = trim_bounds(&surface, WHITE, 5);
    assert_eq!(
        bounds,
        TrimBounds {
            left: 0,
            top: 0,
            right: 5,
            bottom: 5
        }
    );

    let corner = single_pixel(20, 10, 19, 9);
    let bounds = trim_bounds(&corner, WHITE, 50);
    assert_eq!(
        bounds,
        TrimBounds {
            left: 0,
            top: 0,
            right: 19,
            bottom: 9
        }
    );
    assert_eq!(trim(&corner, WHITE, 50).dimensions(), (19, 9));
}

#[test]
fn test_background_color_decides_what_is_empty() {
    let surface = single_pixel(20, 10, 6, 4);

    // Against a black background every white pixel counts as content
    let bounds = content_bounds(&surface, BLACK);
    assert_eq!(
        bounds,
        TrimBounds {
            left: 0,
            top: 0,
            right: 19,
            bottom: 9
        }
    );

    // A slightly different shade is still content
    let mut tinted = RasterSurface::new(10, 10, WHITE);
    tinted.image_mut().put_pixel(3, 7, Rgba([255, 255, 255, 254]));
    assert_eq!(content_bounds(&tinted, WHITE).bottom, 7);
}

#[test]
fn test_trim_is_pure() {
    let surface = single_pixel(20, 10, 6, 4);
    let version = surface.version();
    let before = surface.image().clone();

    let _ = trim(&surface, WHITE, 2);

    assert_eq!(surface.version(), version);
    assert_eq!(surface.image(), &before);
}

#[test]
fn test_trim_a_drawn_signature() {
    let config = PadConfig {
        background_color: WHITE.0,
        pen_width: 4,
        ..PadConfig::default()
    };
    let mut pad = StrokeRenderer::with_config(100, 60, &config);
    pad.on_stroke_start(Point::new(20.0, 30.0));
    for x in [30.0, 40.0, 50.0, 60.0] {
        pad.on_stroke_move(Point::new(x, 30.0));
    }
    pad.on_stroke_end();

    let surface = pad.raw_image();
    let bounds = content_bounds(&surface, WHITE);
    assert!(bounds.left >= 15 && bounds.left <= 20);
    assert!(bounds.right >= 55 && bounds.right <= 60);
    assert!(bounds.top >= 27 && bounds.bottom <= 33);

    let trimmed = trim(&surface, WHITE, 0);
    assert_eq!(
        trimmed.dimensions(),
        (bounds.right - bounds.left, bounds.bottom - bounds.top)
    );
    assert!(!trimmed.is_uniform(WHITE));
}
