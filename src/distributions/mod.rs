// Natively implemented families. Every other family is served by the
// numeric backend (see [crate::backend]).

pub mod Categorical;

/// Transform shared by every cumulative evaluation: `1 - p` if `complement`,
/// then the natural logarithm if `log`.
#[must_use]
pub fn convert_p(p: f64, log: bool, complement: bool) -> f64 {
    let mut ret: f64 = p;
    if complement {
        ret = 1.0 - ret;
    }
    if log {
        ret = ret.ln();
    }
    return ret;
}
