//! Per-pixel transforms from BGR bytes into the 8-bit encodings of each
//! colorspace. Ranges follow the usual 8-bit conventions: hue is stored as
//! degrees / 2, Lab/Luv lightness is rescaled from 0..100 to 0..255 and the
//! chroma axes are offset so they fit an unsigned byte.

// sRGB primaries to CIE XYZ, D65 white point.
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412453, 0.357580, 0.180423],
    [0.212671, 0.715160, 0.072169],
    [0.019334, 0.119193, 0.950227],
];

const WHITE_X: f64 = 0.950456;
const WHITE_Z: f64 = 1.088754;

// CIE constants for the linear segment near black.
const LAB_EPSILON: f64 = 0.008856;
const LAB_KAPPA: f64 = 903.3;

const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

// Rounds to nearest and saturates into a byte.
fn to_byte(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

// Hue in degrees [0, 360) from channel values of any common scale.
fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (g - b) / delta
    } else if max == g {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };

    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

// Halves degrees into a byte, wrapping after rounding so 359.5° lands on 0.
fn hue_byte(degrees: f64) -> u8 {
    let h = (degrees / 2.0).round();
    to_byte(if h >= 180.0 { h - 180.0 } else { h })
}

// Gamma-expands one sRGB byte into linear light.
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_xyz(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let [mx, my, mz] = RGB_TO_XYZ;
    (
        mx[0] * r + mx[1] * g + mx[2] * b,
        my[0] * r + my[1] * g + my[2] * b,
        mz[0] * r + mz[1] * g + mz[2] * b,
    )
}

// CIE lightness in 0..100 from relative luminance.
fn lightness(y: f64) -> f64 {
    if y > LAB_EPSILON {
        116.0 * y.cbrt() - 16.0
    } else {
        LAB_KAPPA * y
    }
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

// Converts a BGR triple to HSV bytes, H in 0..180.
pub fn bgr_to_hsv(b: u8, g: u8, r: u8) -> (u8, u8, u8) {
    let (r, g, b) = (r as f64, g as f64, b as f64);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = hue_degrees(r, g, b, max, delta);
    let s = if max == 0.0 { 0.0 } else { delta / max };

    (hue_byte(h), to_byte(s * 255.0), to_byte(max))
}

// Converts a BGR triple to HLS bytes, H in 0..180.
pub fn bgr_to_hls(b: u8, g: u8, r: u8) -> (u8, u8, u8) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let s = if delta == 0.0 {
        0.0
    } else if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };
    let h = hue_degrees(r, g, b, max, delta);

    (hue_byte(h), to_byte(l * 255.0), to_byte(s * 255.0))
}

/// Converts a BGR triple to CIE L\*a\*b\* bytes.
///
/// L is rescaled to 0..=255, a and b are offset by 128.
pub fn bgr_to_lab(b: u8, g: u8, r: u8) -> (u8, u8, u8) {
    let (x, y, z) = linear_to_xyz(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));

    let fx = lab_f(x / WHITE_X);
    let fy = lab_f(y);
    let fz = lab_f(z / WHITE_Z);

    let l = lightness(y);
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    (to_byte(l * 255.0 / 100.0), to_byte(a + 128.0), to_byte(b + 128.0))
}

/// Converts a BGR triple to CIE L\*u\*v\* bytes.
///
/// L is rescaled to 0..=255, u from -134..=220 and v from -140..=122 are
/// stretched over the full byte.
pub fn bgr_to_luv(b: u8, g: u8, r: u8) -> (u8, u8, u8) {
    let (x, y, z) = linear_to_xyz(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));

    let white_denom = WHITE_X + 15.0 + 3.0 * WHITE_Z;
    let un = 4.0 * WHITE_X / white_denom;
    let vn = 9.0 / white_denom;

    let l = lightness(y);
    let denom = (x + 15.0 * y + 3.0 * z).max(f64::EPSILON);
    let u = 13.0 * l * (4.0 * x / denom - un);
    let v = 13.0 * l * (9.0 * y / denom - vn);

    (
        to_byte(l * 255.0 / 100.0),
        to_byte((u + 134.0) * 255.0 / 354.0),
        to_byte((v + 140.0) * 255.0 / 262.0),
    )
}

// Converts a BGR triple to (Y, Cr, Cb) bytes.
pub fn bgr_to_ycrcb(b: u8, g: u8, r: u8) -> (u8, u8, u8) {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    let y = LUMA_R * r + LUMA_G * g + LUMA_B * b;
    let cr = (r - y) * 0.713 + 128.0;
    let cb = (b - y) * 0.564 + 128.0;
    (to_byte(y), to_byte(cr), to_byte(cb))
}

// Converts a BGR triple to XYZ bytes. No gamma, values past 255 saturate.
pub fn bgr_to_xyz(b: u8, g: u8, r: u8) -> (u8, u8, u8) {
    let (x, y, z) = linear_to_xyz(r as f64, g as f64, b as f64);
    (to_byte(x), to_byte(y), to_byte(z))
}

// Converts a BGR triple to a single luminance value.
pub fn bgr_to_gray(b: u8, g: u8, r: u8) -> u8 {
    to_byte(LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64)
}
