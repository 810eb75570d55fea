/// Cohen's h between two proportions, 2 asin(sqrt(p2)) - 2 asin(sqrt(p1)).
/// The arcsine transform stabilizes the variance of a proportion, so equal
/// differences in h need equal sample sizes wherever p1 and p2 sit in [0, 1].
/// Positive when p2 > p1.
pub fn cohens_h(p1: f64, p2: f64) -> f64 {
    2. * p2.sqrt().asin() - 2. * p1.sqrt().asin()
}
