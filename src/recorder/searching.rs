// Linear, binary and interpolation search

use crate::step::{BudgetExceeded, Detail, Outcome, StepKind, StepLog};

pub(crate) fn linear(values: &[i64], target: i64, log: &mut StepLog) -> Result<Outcome, BudgetExceeded> {
    for (i, &value) in values.iter().enumerate() {
        log.counters_mut().comparisons += 1;
        log.emit(
            StepKind::Compare,
            values,
            [i],
            format!("Checking index {}: {} == {}?", i, value, target),
            Detail::None,
        )?;

        if value == target {
            let comparisons = log.counters().comparisons;
            log.emit(
                StepKind::Found,
                values,
                [i],
                format!(
                    "Target {} found at index {} after {} comparisons!",
                    target, i, comparisons
                ),
                Detail::None,
            )?;
            return Ok(Outcome::Found { index: i });
        }
    }

    log.emit(
        StepKind::NotFound,
        values,
        [],
        format!(
            "Target {} not found after searching {} elements!",
            target,
            values.len()
        ),
        Detail::None,
    )?;
    Ok(Outcome::NotFound)
}

/// Binary search over a non-decreasing array. Bounds are inclusive.
pub(crate) fn binary(values: &[i64], target: i64, log: &mut StepLog) -> Result<Outcome, BudgetExceeded> {
    let mut low = 0usize;
    // Exclusive upper bound; the narrated `Right` is `high - 1`.
    let mut high = values.len();

    while low < high {
        let right = high - 1;
        let mid = (low + right) / 2;
        let value = values[mid];
        log.counters_mut().comparisons += 1;
        let bounds = Detail::Bounds {
            left: low,
            right,
            mid,
        };

        let action = if value == target {
            format!("Found! {} = {}", target, value)
        } else if value < target {
            format!("{} < {}, search right half", value, target)
        } else {
            format!("{} > {}, search left half", value, target)
        };
        log.emit(
            StepKind::Probe,
            values,
            [mid],
            format!("Left={}, Mid={}, Right={} → {}", low, mid, right, action),
            bounds.clone(),
        )?;

        if value == target {
            let comparisons = log.counters().comparisons;
            log.emit(
                StepKind::Found,
                values,
                [mid],
                format!(
                    "Target {} found at index {} after {} comparisons!",
                    target, mid, comparisons
                ),
                bounds,
            )?;
            return Ok(Outcome::Found { index: mid });
        } else if value < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    let comparisons = log.counters().comparisons;
    log.emit(
        StepKind::NotFound,
        values,
        [],
        format!(
            "Target {} not found after {} comparisons!",
            target, comparisons
        ),
        Detail::None,
    )?;
    Ok(Outcome::NotFound)
}

/// Interpolation search over a non-decreasing array. Each guess lands where
/// the target would sit if the values between the bounds were evenly spread.
pub(crate) fn interpolation(values: &[i64], target: i64, log: &mut StepLog) -> Result<Outcome, BudgetExceeded> {
    let mut low = 0usize;
    let mut high = values.len();

    // Outside the bounding values the target cannot be present.
    while low < high && values[low] <= target && target <= values[high - 1] {
        let right = high - 1;
        let (pos, formula) = if low == right {
            (low, "Single element remaining".to_string())
        } else {
            let span = values[right] - values[low];
            // Equal bounding values: everything in range equals the target.
            let offset = if span == 0 {
                0
            } else {
                (target - values[low]) * (right - low) as i64 / span
            };
            let pos = low + offset as usize;
            let formula = format!(
                "pos = {} + ⌊(({} - {}) / ({} - {})) × ({} - {})⌋ = {}",
                low, target, values[low], values[right], values[low], right, low, pos
            );
            (pos, formula)
        };

        let value = values[pos];
        log.counters_mut().comparisons += 1;
        let bounds = Detail::Bounds {
            left: low,
            right,
            mid: pos,
        };

        let action = if value == target {
            format!("Found! {} = {}", target, value)
        } else if value < target {
            format!("{} < {}, search right portion", value, target)
        } else {
            format!("{} > {}, search left portion", value, target)
        };
        log.emit(
            StepKind::Probe,
            values,
            [pos],
            format!(
                "{}; Left={}, Pos={}, Right={} → {}",
                formula, low, pos, right, action
            ),
            bounds.clone(),
        )?;

        if value == target {
            let comparisons = log.counters().comparisons;
            log.emit(
                StepKind::Found,
                values,
                [pos],
                format!(
                    "Target {} found at index {} after {} comparisons!",
                    target, pos, comparisons
                ),
                bounds,
            )?;
            return Ok(Outcome::Found { index: pos });
        } else if value < target {
            low = pos + 1;
        } else {
            high = pos;
        }
    }

    let comparisons = log.counters().comparisons;
    log.emit(
        StepKind::NotFound,
        values,
        [],
        format!(
            "Target {} not found after {} comparisons!",
            target, comparisons
        ),
        Detail::None,
    )?;
    Ok(Outcome::NotFound)
}
