use super::action::RangeAction;
use super::options::CurrentOptions;
use crate::ranges::Range;

/// Checks that `action` splits `range` exactly and sizes its raise legally.
///
/// Every combo of the range must land in exactly one branch with its
/// original weight. Nothing is mutated, so a rejected partition can simply
/// be resubmitted.
pub fn validate_partition(action: &RangeAction, options: &CurrentOptions, range: &Range) -> crate::Result<()> {
    let invalid = |reason: String| Err(crate::Error::InvalidPartition(reason));
    for (branch, part) in action.branches() {
        for (hole, weight) in part.iter() {
            match range.weight_of(hole) {
                None => return invalid(format!("{} in the {:?} branch is not in the range", hole, branch)),
                Some(w) if w != *weight => {
                    return invalid(format!("{} has weight {} but the range gives it {}", hole, weight, w));
                }
                Some(_) => {}
            }
        }
    }
    let [a, b, c] = action.branches().map(|(_, part)| part);
    if a.overlaps(b) || a.overlaps(c) || b.overlaps(c) {
        return invalid("a combo appears in more than one branch".to_string());
    }
    if a.len() + b.len() + c.len() != range.len() {
        return invalid(format!(
            "branches cover {} of {} combos",
            a.len() + b.len() + c.len(),
            range.len()
        ));
    }
    let total = action.raise_total;
    let bounds = crate::Error::InvalidRaiseTotal {
        total,
        min: options.min_raise_total,
        max: options.max_raise_total,
    };
    match action.aggressive.is_empty() {
        true if total != 0 => Err(bounds),
        true => Ok(()),
        false if !options.can_raise => invalid("raising is not allowed here".to_string()),
        false if !options.allows(total) => Err(bounds),
        false => Ok(()),
    }
}
