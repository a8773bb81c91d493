use crate::foundation::error::{EngineError, EngineResult};

/// Number of box passes approximating one Gaussian.
const BOX_PASSES: usize = 3;

/// Blur a single-channel coverage plane with a Gaussian of standard deviation `sigma`.
///
/// Three successive box blurs per axis; pixels outside the plane count as zero.
pub(crate) fn blur_alpha(
    src: &[u8],
    width: u32,
    height: u32,
    sigma: f64,
) -> EngineResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| EngineError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(EngineError::render(
            "blur_alpha expects src matching width*height",
        ));
    }

    let radii = box_radii(sigma);
    if radii.iter().all(|&r| r == 0) || expected_len == 0 {
        return Ok(src.to_vec());
    }

    let (w, h) = (width as usize, height as usize);
    let mut a: Vec<f32> = src.iter().map(|&v| f32::from(v)).collect();
    let mut b = vec![0.0f32; expected_len];
    for &r in &radii {
        if r == 0 {
            continue;
        }
        horizontal_box(&a, &mut b, w, h, r);
        vertical_box(&b, &mut a, w, h, r);
    }

    Ok(a.into_iter()
        .map(|v| v.round().clamp(0.0, 255.0) as u8)
        .collect())
}

/// Box radii whose successive application approximates a Gaussian of `sigma`.
pub(crate) fn box_radii(sigma: f64) -> [usize; BOX_PASSES] {
    if !sigma.is_finite() || sigma <= 0.0 {
        return [0; BOX_PASSES];
    }
    let n = BOX_PASSES as f64;
    let w_ideal = (12.0 * sigma * sigma / n + 1.0).sqrt();
    let mut wl = w_ideal.floor() as i64;
    if wl % 2 == 0 {
        wl -= 1;
    }
    let wu = wl + 2;
    let wlf = wl as f64;
    let m_ideal =
        (12.0 * sigma * sigma - n * wlf * wlf - 4.0 * n * wlf - 3.0 * n) / (-4.0 * wlf - 4.0);
    let m = m_ideal.round() as i64;

    let mut out = [0usize; BOX_PASSES];
    for (i, r) in out.iter_mut().enumerate() {
        let size = if (i as i64) < m { wl } else { wu };
        *r = ((size.max(1) - 1) / 2) as usize;
    }
    out
}

fn horizontal_box(src: &[f32], dst: &mut [f32], w: usize, h: usize, r: usize) {
    let norm = 1.0 / (2 * r + 1) as f32;
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        let out = &mut dst[y * w..(y + 1) * w];
        let mut acc: f32 = row[..(r + 1).min(w)].iter().sum();
        for x in 0..w {
            out[x] = acc * norm;
            if x + r + 1 < w {
                acc += row[x + r + 1];
            }
            if x >= r {
                acc -= row[x - r];
            }
        }
    }
}

fn vertical_box(src: &[f32], dst: &mut [f32], w: usize, h: usize, r: usize) {
    let norm = 1.0 / (2 * r + 1) as f32;
    for x in 0..w {
        let mut acc = 0.0f32;
        for y in 0..(r + 1).min(h) {
            acc += src[y * w + x];
        }
        for y in 0..h {
            dst[y * w + x] = acc * norm;
            if y + r + 1 < h {
                acc += src[(y + r + 1) * w + x];
            }
            if y >= r {
                acc -= src[(y - r) * w + x];
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
