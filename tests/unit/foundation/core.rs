use super::*;

#[test]
fn design_area_containment_is_half_open() {
    let size = SurfaceSize::new(100, 80);
    assert!(DesignArea::new(0, 0, 100, 80).fits_within(size));
    assert!(DesignArea::new(10, 10, 90, 70).fits_within(size));
    assert!(!DesignArea::new(10, 10, 91, 70).fits_within(size));
    assert!(!DesignArea::new(0, 0, 0, 10).fits_within(size));
}

#[test]
fn design_area_center_and_rect() {
    let a = DesignArea::new(350, 300, 300, 400);
    assert_eq!(a.to_rect(), Rect::new(350.0, 300.0, 650.0, 700.0));
    assert_eq!(a.center(), Point::new(500.0, 500.0));
}

#[test]
fn pixel_region_snaps_outwards_and_clips() {
    let size = SurfaceSize::new(50, 40);
    let r = PixelRegion::covering(Rect::new(-5.2, 3.4, 20.1, 60.0), 1.0, size).unwrap();
    assert_eq!(
        r,
        PixelRegion {
            x0: 0,
            y0: 2,
            x1: 22,
            y1: 40
        }
    );
    assert_eq!(r.width(), 22);
    assert_eq!(r.height(), 38);
}

#[test]
fn pixel_region_outside_surface_is_none() {
    let size = SurfaceSize::new(10, 10);
    assert!(PixelRegion::covering(Rect::new(20.0, 20.0, 30.0, 30.0), 0.0, size).is_none());
    assert!(PixelRegion::covering(Rect::new(f64::NAN, 0.0, 1.0, 1.0), 0.0, size).is_none());
}

#[test]
fn rgba_len_check() {
    let size = SurfaceSize::new(2, 3);
    assert!(expect_rgba_len(&[0u8; 24], size, "t").is_ok());
    assert!(expect_rgba_len(&[0u8; 23], size, "t").is_err());
}
