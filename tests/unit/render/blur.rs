use super::*;

#[test]
fn sigma_0_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6];
    assert_eq!(blur_alpha(&src, 3, 2, 0.0).unwrap(), src);
    assert_eq!(blur_alpha(&src, 3, 2, f64::NAN).unwrap(), src);
}

#[test]
fn radii_follow_gaussian_approximation() {
    assert_eq!(box_radii(10.0), [9, 9, 10]);
    assert_eq!(box_radii(0.5), [0, 0, 0]);
    let r = box_radii(5.0);
    assert!(r.iter().all(|&v| v >= 3 && v <= 6));
}

#[test]
fn rejects_mismatched_buffer() {
    let err = blur_alpha(&[0u8; 5], 3, 2, 2.0).unwrap_err();
    assert!(err.to_string().contains("width*height"));
}

#[test]
fn constant_interior_is_preserved() {
    let (w, h) = (64u32, 64u32);
    let src = vec![200u8; (w * h) as usize];
    let out = blur_alpha(&src, w, h, 3.0).unwrap();
    assert_eq!(out[(32 * w + 32) as usize], 200);
    // zero padding fades the border
    assert!(out[0] < 200);
}

#[test]
fn single_pixel_spreads_and_conserves_mass() {
    let (w, h) = (61u32, 61u32);
    let mut src = vec![0u8; (w * h) as usize];
    let center = (30 * w + 30) as usize;
    src[center] = 255;

    let out = blur_alpha(&src, w, h, 1.0).unwrap();
    let nonzero = out.iter().filter(|&&v| v != 0).count();
    assert!(nonzero > 1);
    let sum: u32 = out.iter().map(|&v| u32::from(v)).sum();
    assert!((sum as i32 - 255).abs() <= 12, "sum {sum}");

    assert_eq!(out[center - 1], out[center + 1]);
    assert_eq!(out[center - w as usize], out[center + w as usize]);
}
