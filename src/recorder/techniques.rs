// Array techniques: two-pointer pair sum and sliding window maximum sum

use crate::step::{BudgetExceeded, Detail, Outcome, StepKind, StepLog};

/// Find a pair summing to `target` in a non-decreasing array.
pub(crate) fn two_pointer(
    values: &[i64],
    target: i64,
    log: &mut StepLog,
) -> Result<Outcome, BudgetExceeded> {
    if values.len() < 2 {
        log.emit(
            StepKind::NotFound,
            values,
            [],
            format!("No pair found that sums to {}", target),
            Detail::None,
        )?;
        return Ok(Outcome::NotFound);
    }

    let mut left = 0;
    let mut right = values.len() - 1;
    let mut step = 0;

    while left < right {
        step += 1;
        let (a, b) = (values[left], values[right]);
        let sum = a + b;
        let pointers = Detail::Pointers { left, right };
        log.counters_mut().comparisons += 1;
        log.emit(
            StepKind::Compare,
            values,
            [left, right],
            format!(
                "Step {}: arr[{}] + arr[{}] = {} + {} = {}",
                step, left, right, a, b, sum
            ),
            pointers.clone(),
        )?;

        if sum == target {
            log.emit(
                StepKind::Found,
                values,
                [left, right],
                format!(
                    "Found pair: ({}, {}) at indices ({}, {})",
                    a, b, left, right
                ),
                pointers,
            )?;
            return Ok(Outcome::Pair { left, right });
        }

        let narration = if sum < target {
            left += 1;
            "Sum < target, move left pointer right"
        } else {
            right -= 1;
            "Sum > target, move right pointer left"
        };
        log.emit(
            StepKind::MovePointer,
            values,
            [left, right],
            narration,
            Detail::Pointers { left, right },
        )?;
    }

    log.emit(
        StepKind::NotFound,
        values,
        [],
        format!("No pair found that sums to {}", target),
        Detail::Pointers { left, right },
    )?;
    Ok(Outcome::NotFound)
}

/// Maximum-sum window of a fixed size. Ties keep the leftmost window.
pub(crate) fn sliding_window(
    values: &[i64],
    window: usize,
    log: &mut StepLog,
) -> Result<Outcome, BudgetExceeded> {
    let n = values.len();
    if n == 0 {
        log.emit(
            StepKind::Done,
            values,
            [],
            "Array is empty - no window to slide",
            Detail::None,
        )?;
        return Ok(Outcome::Empty);
    }

    let w = window.clamp(1, n);
    let mut sum: i64 = values[..w].iter().sum();
    let mut best_start = 0;
    let mut best_sum = sum;

    log.emit(
        StepKind::WindowInit,
        values,
        0..w,
        format!("Initial window [0-{}]: sum = {}", w - 1, sum),
        Detail::Window {
            start: 0,
            len: w,
            sum,
            best_start,
            best_sum,
        },
    )?;

    for end in w..n {
        let start = end + 1 - w;
        let removed = values[end - w];
        let added = values[end];
        sum = sum - removed + added;

        log.counters_mut().passes += 1;
        log.emit(
            StepKind::WindowSlide,
            values,
            start..=end,
            format!(
                "Window [{}-{}]: remove {}, add {}, sum = {}",
                start, end, removed, added, sum
            ),
            Detail::Window {
                start,
                len: w,
                sum,
                best_start,
                best_sum,
            },
        )?;

        log.counters_mut().comparisons += 1;
        if sum > best_sum {
            best_sum = sum;
            best_start = start;
            log.emit(
                StepKind::NewBest,
                values,
                start..=end,
                format!("New maximum sum found: {}", best_sum),
                Detail::Window {
                    start,
                    len: w,
                    sum,
                    best_start,
                    best_sum,
                },
            )?;
        }
    }

    let best = &values[best_start..best_start + w];
    let listed = best
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    log.emit(
        StepKind::Done,
        values,
        best_start..best_start + w,
        format!("Maximum sum subarray: [{}] = {}", listed, best_sum),
        Detail::Window {
            start: best_start,
            len: w,
            sum: best_sum,
            best_start,
            best_sum,
        },
    )?;
    Ok(Outcome::MaxWindow {
        start: best_start,
        len: w,
        sum: best_sum,
    })
}
