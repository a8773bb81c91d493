use super::*;
use crate::assets::decode::parse_svg;

const RED_SQUARE: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
<rect x="0" y="0" width="10" height="10" fill="#ff0000"/></svg>"##;

#[test]
fn rasterizes_at_requested_size() {
    let tree = parse_svg(RED_SQUARE).unwrap();
    let r = rasterize_svg(&tree, 40, 20).unwrap();
    assert_eq!((r.width, r.height), (40, 20));
    assert_eq!(r.rgba8_premul.len(), 40 * 20 * 4);
    let center = ((10 * 40 + 20) * 4) as usize;
    assert_eq!(&r.rgba8_premul[center..center + 4], &[255, 0, 0, 255]);
}

#[test]
fn rejects_degenerate_sizes() {
    let tree = parse_svg(RED_SQUARE).unwrap();
    assert!(rasterize_svg(&tree, 0, 10).is_err());
    assert!(rasterize_svg(&tree, 10, MAX_DIM + 1).is_err());
}
