// Counting sort phase machine: count, prefix sums, stable placement

use crate::input::COUNTING_RANGE;
use crate::step::{BudgetExceeded, CountingPhase, Detail, Outcome, StepKind, StepLog};

fn detail(
    phase: CountingPhase,
    counts: &[usize],
    output: &[Option<i64>],
    slot: Option<usize>,
) -> Detail {
    Detail::Counting {
        phase,
        counts: counts.to_vec(),
        output: output.to_vec(),
        slot,
    }
}

/// Keys must already be validated to lie in `[0, COUNTING_RANGE)`.
pub(crate) fn counting_sort(values: &[i64], log: &mut StepLog) -> Result<Outcome, BudgetExceeded> {
    let n = values.len();
    let mut counts = vec![0usize; COUNTING_RANGE];
    let mut output: Vec<Option<i64>> = vec![None; n];

    if n == 0 {
        log.emit(
            StepKind::Done,
            values,
            [],
            "Array is empty - nothing to sort",
            detail(CountingPhase::Done, &counts, &output, None),
        )?;
        return Ok(Outcome::Empty);
    }

    log.counters_mut().passes += 1;
    log.emit(
        StepKind::PhaseStart,
        values,
        [],
        CountingPhase::Count.label(),
        detail(CountingPhase::Count, &counts, &output, None),
    )?;
    for (i, &value) in values.iter().enumerate() {
        let slot = value as usize;
        counts[slot] += 1;
        log.counters_mut().writes += 1;
        log.emit(
            StepKind::Count,
            values,
            [i],
            format!("Count {}: count[{}] = {}", value, slot, counts[slot]),
            detail(CountingPhase::Count, &counts, &output, Some(slot)),
        )?;
    }

    log.counters_mut().passes += 1;
    log.emit(
        StepKind::PhaseStart,
        values,
        [],
        CountingPhase::Prefix.label(),
        detail(CountingPhase::Prefix, &counts, &output, None),
    )?;
    for slot in 1..COUNTING_RANGE {
        counts[slot] += counts[slot - 1];
        log.emit(
            StepKind::PrefixSum,
            values,
            [],
            format!(
                "count[{}] = count[{}] + count[{}] = {}",
                slot,
                slot,
                slot - 1,
                counts[slot]
            ),
            detail(CountingPhase::Prefix, &counts, &output, Some(slot)),
        )?;
    }

    log.counters_mut().passes += 1;
    log.emit(
        StepKind::PhaseStart,
        values,
        [],
        CountingPhase::Output.label(),
        detail(CountingPhase::Output, &counts, &output, None),
    )?;
    // Right to left keeps equal keys in input order.
    for i in (0..n).rev() {
        let value = values[i];
        let slot = value as usize;
        counts[slot] -= 1;
        let pos = counts[slot];
        output[pos] = Some(value);
        log.counters_mut().writes += 1;
        log.emit(
            StepKind::Place,
            values,
            [i],
            format!("Place {} at output[{}]", value, pos),
            detail(CountingPhase::Output, &counts, &output, Some(slot)),
        )?;
    }

    let sorted: Vec<i64> = output.iter().flatten().copied().collect();
    log.settle_range(0..n);
    log.emit(
        StepKind::Done,
        &sorted,
        [],
        CountingPhase::Done.label(),
        detail(CountingPhase::Done, &counts, &output, None),
    )?;
    Ok(Outcome::Sorted)
}
