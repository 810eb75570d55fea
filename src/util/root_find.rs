use crate::error::AbcomputeErr;
use crate::util::error::RootFindErr;

const MAX_ITERATIONS: usize = 200;

/// Given a monotonically increasing function f(x) and a bracket
/// [lower_bound, upper_bound] with f(lower_bound) <= target <= f(upper_bound),
/// finds x such that f(x) = target. Bisects until the bracket is narrower
/// than tol, or until its ends are adjacent floats when tol is below their
/// spacing, returning the upper end so that f(x) >= target.
pub fn root_find_monotonic<F>(
    f: F,
    lower_bound: f64,
    upper_bound: f64,
    target: f64,
    tol: f64,
) -> Result<f64, AbcomputeErr>
where
    F: Fn(f64) -> Result<f64, AbcomputeErr>,
{
    let bad_bracket = || RootFindErr::BadBracket {
        lower_bound,
        upper_bound,
        target,
    };
    if !(lower_bound <= upper_bound) || f(lower_bound)? > target || f(upper_bound)? < target {
        return Err(bad_bracket().into());
    }

    let mut lower = lower_bound;
    let mut upper = upper_bound;
    let mut iterations = 0;
    while upper - lower > tol {
        if iterations == MAX_ITERATIONS {
            return Err(RootFindErr::FailedToConverge(iterations).into());
        }
        let x = lower + (upper - lower) / 2.;
        if x <= lower || x >= upper {
            break;
        }
        if f(x)? < target {
            lower = x;
        } else {
            upper = x;
        }
        iterations += 1;
    }
    Ok(upper)
}
