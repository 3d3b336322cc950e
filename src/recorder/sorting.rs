// Comparison sorts: bubble (basic and optimized), selection, insertion

use crate::step::{BudgetExceeded, Detail, Outcome, StepKind, StepLog};

const EMPTY_NARRATION: &str = "Array is empty - nothing to sort";

/// "largest", "2nd largest", then a flat "th" suffix: "3th largest", ...
fn nth_largest(n: usize) -> String {
    match n {
        1 => "largest".to_string(),
        2 => "2nd largest".to_string(),
        _ => format!("{}th largest", n),
    }
}

fn record_empty(log: &mut StepLog) -> Result<Outcome, BudgetExceeded> {
    log.emit(StepKind::Done, &[], [], EMPTY_NARRATION, Detail::None)?;
    Ok(Outcome::Empty)
}

/// Bubble sort. The optimized variant stops after a pass without swaps.
pub(crate) fn bubble(
    values: &[i64],
    optimized: bool,
    log: &mut StepLog,
) -> Result<Outcome, BudgetExceeded> {
    let mut arr = values.to_vec();
    let n = arr.len();
    if n == 0 {
        return record_empty(log);
    }

    for i in 0..n - 1 {
        log.counters_mut().passes += 1;
        let pass = log.counters().passes;
        let mut swapped = false;

        log.emit(
            StepKind::PassStart,
            &arr,
            [],
            format!("Pass {}: Finding the {} element", pass, nth_largest(i + 1)),
            Detail::None,
        )?;

        for j in 0..n - i - 1 {
            let (a, b) = (arr[j], arr[j + 1]);
            log.counters_mut().comparisons += 1;
            log.emit(
                StepKind::Compare,
                &arr,
                [j, j + 1],
                format!("Comparing {} and {}", a, b),
                Detail::None,
            )?;

            // Strict comparison keeps equal elements in their original order.
            if a > b {
                log.counters_mut().swaps += 1;
                swapped = true;
                log.emit(
                    StepKind::Swap,
                    &arr,
                    [j, j + 1],
                    format!("{} > {}, swapping", a, b),
                    Detail::None,
                )?;

                arr.swap(j, j + 1);

                log.emit(
                    StepKind::Swapped,
                    &arr,
                    [j, j + 1],
                    format!("Swapped: {} and {}", arr[j], arr[j + 1]),
                    Detail::None,
                )?;
            } else {
                log.emit(
                    StepKind::NoSwap,
                    &arr,
                    [j, j + 1],
                    format!("{} ≤ {}, no swap needed", a, b),
                    Detail::None,
                )?;
            }
        }

        let last = n - i - 1;
        log.settle(last);
        log.emit(
            StepKind::MarkSorted,
            &arr,
            [last],
            format!("{} is now in its correct position", arr[last]),
            Detail::None,
        )?;

        if optimized && !swapped {
            log.settle_range(0..last);
            log.emit(
                StepKind::EarlyExit,
                &arr,
                [],
                "No swaps in this pass - array is sorted!",
                Detail::None,
            )?;
            break;
        }
    }

    log.settle_range(0..n);
    log.emit(StepKind::Done, &arr, [], "Sorting complete!", Detail::None)?;
    Ok(Outcome::Sorted)
}

pub(crate) fn selection(values: &[i64], log: &mut StepLog) -> Result<Outcome, BudgetExceeded> {
    let mut arr = values.to_vec();
    let n = arr.len();
    if n == 0 {
        return record_empty(log);
    }

    for i in 0..n {
        log.counters_mut().passes += 1;
        let pass = log.counters().passes;
        let mut min = i;

        log.emit(
            StepKind::PassStart,
            &arr,
            [i],
            format!("Pass {}: Finding the minimum of positions {}-{}", pass, i, n - 1),
            Detail::None,
        )?;

        for j in i + 1..n {
            log.counters_mut().comparisons += 1;
            log.emit(
                StepKind::Compare,
                &arr,
                [min, j],
                format!("Comparing {} with current minimum {}", arr[j], arr[min]),
                Detail::None,
            )?;

            if arr[j] < arr[min] {
                min = j;
                log.emit(
                    StepKind::NewMinimum,
                    &arr,
                    [min],
                    format!("New minimum: {} at index {}", arr[min], min),
                    Detail::None,
                )?;
            }
        }

        if min != i {
            log.counters_mut().swaps += 1;
            log.emit(
                StepKind::Swap,
                &arr,
                [i, min],
                format!("Swapping {} and {}", arr[i], arr[min]),
                Detail::None,
            )?;
            arr.swap(i, min);
        }

        log.settle(i);
        log.emit(
            StepKind::MarkSorted,
            &arr,
            [i],
            format!("{} is now in its correct position", arr[i]),
            Detail::None,
        )?;
    }

    log.emit(StepKind::Done, &arr, [], "Sorting complete!", Detail::None)?;
    Ok(Outcome::Sorted)
}

pub(crate) fn insertion(values: &[i64], log: &mut StepLog) -> Result<Outcome, BudgetExceeded> {
    let mut arr = values.to_vec();
    let n = arr.len();
    if n == 0 {
        return record_empty(log);
    }

    for i in 1..n {
        log.counters_mut().passes += 1;
        let pass = log.counters().passes;
        let key = arr[i];

        log.emit(
            StepKind::PassStart,
            &arr,
            [i],
            format!("Pass {}: Inserting {}", pass, key),
            Detail::None,
        )?;

        let mut j = i;
        while j > 0 {
            log.counters_mut().comparisons += 1;
            log.emit(
                StepKind::Compare,
                &arr,
                [j - 1, j],
                format!("Comparing {} with key {}", arr[j - 1], key),
                Detail::None,
            )?;

            if arr[j - 1] <= key {
                break;
            }

            arr[j] = arr[j - 1];
            log.counters_mut().writes += 1;
            log.emit(
                StepKind::Shift,
                &arr,
                [j - 1, j],
                format!("{} > {}, shifting {} right", arr[j - 1], key, arr[j - 1]),
                Detail::None,
            )?;
            j -= 1;
        }

        arr[j] = key;
        log.counters_mut().writes += 1;
        log.emit(
            StepKind::Place,
            &arr,
            [j],
            format!("Placing {} at index {}", key, j),
            Detail::None,
        )?;
    }

    log.settle_range(0..n);
    log.emit(StepKind::Done, &arr, [], "Sorting complete!", Detail::None)?;
    Ok(Outcome::Sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nth_largest() {
        assert_eq!(nth_largest(1), "largest");
        assert_eq!(nth_largest(2), "2nd largest");
        assert_eq!(nth_largest(3), "3th largest");
        assert_eq!(nth_largest(4), "4th largest");
        assert_eq!(nth_largest(11), "11th largest");
        assert_eq!(nth_largest(21), "21th largest");
        assert_eq!(nth_largest(22), "22th largest");
    }
}
