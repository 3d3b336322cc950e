// Merge sort as divide, conquer and merge frames driven by an explicit work list

use crate::step::{BudgetExceeded, Detail, Outcome, StepKind, StepLog};

enum Task {
    /// Split `start..end`, or report it as a base case.
    Visit {
        start: usize,
        end: usize,
        depth: usize,
    },
    /// Merge the sorted halves `start..split` and `split..end`.
    Merge {
        start: usize,
        split: usize,
        end: usize,
        depth: usize,
    },
}

fn listed(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Top-down merge sort. Frames come out in the same order as the recursive
/// version: a segment is divided, its left half fully solved, then its right
/// half, then the two are merged one element at a time.
pub(crate) fn merge_sort(values: &[i64], log: &mut StepLog) -> Result<Outcome, BudgetExceeded> {
    let mut arr = values.to_vec();
    let n = arr.len();
    if n == 0 {
        log.emit(
            StepKind::Done,
            &arr,
            [],
            "Array is empty - nothing to sort",
            Detail::None,
        )?;
        return Ok(Outcome::Empty);
    }

    let mut work = vec![Task::Visit {
        start: 0,
        end: n,
        depth: 0,
    }];
    while let Some(task) = work.pop() {
        match task {
            Task::Visit { start, end, depth } => {
                let segment = &arr[start..end];
                if segment.len() <= 1 {
                    log.emit(
                        StepKind::BaseCase,
                        &arr,
                        start..end,
                        format!("Base case: segment [{}] is already sorted.", listed(segment)),
                        Detail::Segment {
                            start,
                            end,
                            depth,
                            split: None,
                        },
                    )?;
                    continue;
                }

                let half = segment.len() / 2;
                let split = start + half;
                log.emit(
                    StepKind::Divide,
                    &arr,
                    start..end,
                    format!(
                        "Divide: split segment [{}] at mid = {}.",
                        listed(segment),
                        half
                    ),
                    Detail::Segment {
                        start,
                        end,
                        depth,
                        split: Some(split),
                    },
                )?;

                // Popped in reverse: left half first, merge last.
                work.push(Task::Merge {
                    start,
                    split,
                    end,
                    depth,
                });
                work.push(Task::Visit {
                    start: split,
                    end,
                    depth: depth + 1,
                });
                work.push(Task::Visit {
                    start,
                    end: split,
                    depth: depth + 1,
                });
            }
            Task::Merge {
                start,
                split,
                end,
                depth,
            } => merge(&mut arr, start, split, end, depth, log)?,
        }
    }

    log.settle_range(0..n);
    log.emit(
        StepKind::Done,
        &arr,
        [],
        format!("Complete: array sorted → [{}].", listed(&arr)),
        Detail::Segment {
            start: 0,
            end: n,
            depth: 0,
            split: None,
        },
    )?;
    Ok(Outcome::Sorted)
}

fn merge(
    arr: &mut [i64],
    start: usize,
    split: usize,
    end: usize,
    depth: usize,
    log: &mut StepLog,
) -> Result<(), BudgetExceeded> {
    let left = arr[start..split].to_vec();
    let right = arr[split..end].to_vec();
    let detail = Detail::Segment {
        start,
        end,
        depth,
        split: Some(split),
    };

    log.counters_mut().passes += 1;
    log.emit(
        StepKind::Conquer,
        arr,
        start..end,
        format!(
            "Conquer: both halves solved => left [{}], right [{}].",
            listed(&left),
            listed(&right)
        ),
        detail.clone(),
    )?;

    let (mut i, mut j) = (0, 0);
    let mut merged = Vec::with_capacity(end - start);
    while i < left.len() || j < right.len() {
        let take_left = if i < left.len() && j < right.len() {
            log.counters_mut().comparisons += 1;
            left[i] <= right[j]
        } else {
            i < left.len()
        };
        if take_left {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }

        // Merged prefix, then whatever is left of each half.
        let building: Vec<i64> = merged
            .iter()
            .chain(&left[i..])
            .chain(&right[j..])
            .copied()
            .collect();
        arr[start..end].copy_from_slice(&building);
        log.counters_mut().writes += 1;

        // The side is read back from the value, so a right-hand value equal
        // to the last left-hand one is reported as "left".
        let side = if i > 0 && merged.last() == Some(&left[i - 1]) {
            "left"
        } else {
            "right"
        };
        log.emit(
            StepKind::Merge,
            arr,
            [start + merged.len() - 1],
            format!(
                "Merge: building [{}]; chose next from {} segment.",
                listed(&building),
                side
            ),
            detail.clone(),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrations(values: &[i64]) -> Vec<String> {
        let mut log = StepLog::new();
        merge_sort(values, &mut log).unwrap();
        log.finish(crate::algorithm::Algorithm::MergeSort, values.to_vec(), Outcome::Sorted)
            .iter()
            .map(|s| s.narration.clone())
            .collect()
    }

    #[test]
    fn test_single_element_is_base_case() {
        assert_eq!(
            narrations(&[7]),
            vec![
                "Base case: segment [7] is already sorted.",
                "Complete: array sorted → [7].",
            ]
        );
    }

    #[test]
    fn test_pair_divides_then_merges() {
        assert_eq!(
            narrations(&[9, 1]),
            vec![
                "Divide: split segment [9, 1] at mid = 1.",
                "Base case: segment [9] is already sorted.",
                "Base case: segment [1] is already sorted.",
                "Conquer: both halves solved => left [9], right [1].",
                "Merge: building [1, 9]; chose next from right segment.",
                "Merge: building [1, 9]; chose next from left segment.",
                "Complete: array sorted → [1, 9].",
            ]
        );
    }
}
