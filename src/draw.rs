use rand::Rng;

/// Draw a uniform value in `[min, max]` rounded to `decimals` decimal places.
///
/// The draw is made over integers in the scaled range and divided back
/// down, so every representable step is equally likely and both ends can
/// be drawn.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use switchable::draw::random_decimal;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let v = random_decimal(&mut rng, 0.0, 100.0, 2);
/// assert!((0.0..=100.0).contains(&v));
/// ```
pub fn random_decimal<R: Rng>(rng: &mut R, min: f64, max: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let low = (min * scale).round() as i64;
    let high = (max * scale).round() as i64;

    if low >= high {
        return low as f64 / scale;
    }

    rng.random_range(low..=high) as f64 / scale
}

/// Draw a percentage in `[0.00, 100.00]` at two decimal places.
pub fn random_percentage<R: Rng>(rng: &mut R) -> f64 {
    random_decimal(rng, 0.0, 100.0, 2)
}
