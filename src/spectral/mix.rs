//! Kubelka-Munk paint mixing.
//!
//! Both colors are upsampled to reflectance spectra, mixed as pigments in
//! absorption/scattering (K/S) space, and downsampled back to linear RGB:
//!
//! 1. `linear_to_reflectance`: white baseline plus residual primaries over three basis spectra
//! 2. `reflectance_to_luminance`: y-bar weighted sum
//! 3. `luminance_to_concentration`: reshape the mix position so dark and bright paints
//!    meet halfway at `t = 0.5`
//! 4. `mix_reflectances`: per band `K/S = (1 - R)^2 / 2R`, weighted sum, inverted back to `R`
//! 5. `reflectance_to_xyz` then `xyz_to_linear`, with XYZ rounded to three decimals in between

use crate::blend::contracts::Rgb;
use crate::foundation::math::round3;
use crate::spectral::tables::{
    BANDS, BASIS_BLUE, BASIS_GREEN, BASIS_RED, CMF_X, CMF_Y, CMF_Z, REFLECTANCE_EPSILON,
    XYZ_TO_LINEAR_RGB,
};

/// Reflectance sampled at [`BANDS`] wavelengths. Every sample is at least
/// [`REFLECTANCE_EPSILON`].
pub type Spectrum = [f32; BANDS];

/// Upsample a linear RGB color to a reflectance spectrum.
pub fn linear_to_reflectance(r: f32, g: f32, b: f32) -> Spectrum {
    let w = r.min(g).min(b);
    let (wr, wg, wb) = (r - w, g - w, b - w);

    std::array::from_fn(|i| {
        (w + wr * BASIS_RED[i] + wg * BASIS_GREEN[i] + wb * BASIS_BLUE[i]).max(REFLECTANCE_EPSILON)
    })
}

/// CIE Y of a spectrum.
pub fn reflectance_to_luminance(spectrum: &Spectrum) -> f32 {
    spectrum.iter().zip(CMF_Y.iter()).map(|(r, y)| r * y).sum()
}

/// Map a linear mix position `t` (0 = first color, 1 = second) to a pigment
/// concentration of the second color, given both luminances:
/// `c = l2 t^2 / (l1 (1 - t)^2 + l2 t^2)`.
pub fn luminance_to_concentration(l1: f32, l2: f32, t: f32) -> f32 {
    let t1 = l1 * (1.0 - t) * (1.0 - t);
    let t2 = l2 * t * t;
    let denom = t1 + t2;
    if denom <= 0.0 {
        return t;
    }
    t2 / denom
}

#[inline]
fn absorption_scattering(r: f32) -> f64 {
    let r = f64::from(r);
    (1.0 - r) * (1.0 - r) / (2.0 * r)
}

#[inline]
fn reflectance_from_ks(ks: f64) -> f64 {
    1.0 + ks - (ks * ks + 2.0 * ks).sqrt()
}

/// Mix two spectra as pigments with concentration `c` of the second.
///
/// K/S is evaluated in `f64`: near-black bands have K/S around 5e7 and the
/// inversion cancels almost all of it.
pub fn mix_reflectances(first: &Spectrum, second: &Spectrum, c: f32) -> Spectrum {
    let c = f64::from(c);
    std::array::from_fn(|i| {
        let ks = absorption_scattering(first[i]) * (1.0 - c) + absorption_scattering(second[i]) * c;
        reflectance_from_ks(ks) as f32
    })
}

/// Integrate a spectrum against the observer, returning `[X, Y, Z]`.
pub fn reflectance_to_xyz(spectrum: &Spectrum) -> [f32; 3] {
    let mut xyz = [0.0f32; 3];
    for (i, r) in spectrum.iter().enumerate() {
        xyz[0] += r * CMF_X[i];
        xyz[1] += r * CMF_Y[i];
        xyz[2] += r * CMF_Z[i];
    }
    xyz
}

/// XYZ to linear sRGB.
pub fn xyz_to_linear(xyz: [f32; 3]) -> Rgb {
    XYZ_TO_LINEAR_RGB.map(|row| row[0] * xyz[0] + row[1] * xyz[1] + row[2] * xyz[2])
}

/// Mix `(sr, sg, sb)` with the color in `(dr, dg, db)` as paint, writing the
/// result back into the destination. `factor` 0 yields the source, 1 the destination.
pub fn spectral_mix(
    sr: f32,
    sg: f32,
    sb: f32,
    factor: f32,
    dr: &mut f32,
    dg: &mut f32,
    db: &mut f32,
) {
    let first = linear_to_reflectance(sr, sg, sb);
    let second = linear_to_reflectance(*dr, *dg, *db);

    let c = luminance_to_concentration(
        reflectance_to_luminance(&first),
        reflectance_to_luminance(&second),
        factor,
    );

    let mixed = mix_reflectances(&first, &second, c);
    let [r, g, b] = xyz_to_linear(reflectance_to_xyz(&mixed).map(round3));
    *dr = r;
    *dg = g;
    *db = b;
}

#[cfg(test)]
#[path = "../../tests/unit/spectral/mix.rs"]
mod tests;
