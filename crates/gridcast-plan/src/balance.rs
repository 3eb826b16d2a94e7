//! Width balancing against the available panel width.

use crate::descriptor::Descriptor;

/// Minimum usable cell width for a column without an explicit width.
const MIN_AUTO_WIDTH: usize = 5;

/// Balances explicit widths against the available data width.
///
/// `total_width` is the character budget for data cells: the panel width
/// minus one border per column plus one (N columns need N + 1 borders); the
/// caller performs that subtraction.
///
/// Two corrections, mutually exclusive:
/// - too wide: the explicit widths would leave less than [`MIN_AUTO_WIDTH`]
///   cells for each auto column, so every explicit width is cleared and the
///   layout falls back to fully automatic sizing;
/// - too narrow: every column has an explicit width and their sum is
///   strictly below the budget, so the single largest width is cleared and
///   that column re-expands to fill the remaining space.
///
/// The largest width is tracked while scanning from the end of the list and
/// only a strictly greater value replaces it, so equal maxima resolve to the
/// highest-indexed descriptor. Downstream layouts depend on that tie-break;
/// keep the scan direction as is.
pub fn balance_widths(descriptors: &mut [Descriptor], total_width: usize) {
    let mut set_sum = 0usize;
    let mut set_count = 0usize;
    let mut set_max_value = 0usize;
    let mut set_max_index = None;

    for index in (0..descriptors.len()).rev() {
        let Some(width) = descriptors[index].width.filter(|w| *w > 0) else {
            continue;
        };
        set_count += 1;
        set_sum += width;
        if set_max_value < width {
            set_max_value = width;
            set_max_index = Some(index);
        }
    }

    let unset_count = descriptors.len() - set_count;

    if set_sum + unset_count * MIN_AUTO_WIDTH > total_width {
        for descriptor in descriptors.iter_mut() {
            descriptor.width = None;
        }
    } else if set_count == descriptors.len() && set_sum < total_width {
        if let Some(index) = set_max_index {
            descriptors[index].width = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_widths(widths: &[Option<usize>]) -> Vec<Descriptor> {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let mut descriptor = Descriptor::new(format!("F{index}"));
                descriptor.width = *width;
                descriptor
            })
            .collect()
    }

    fn widths(descriptors: &[Descriptor]) -> Vec<Option<usize>> {
        descriptors.iter().map(|d| d.width).collect()
    }

    #[test]
    fn too_wide_clears_every_explicit_width() {
        // 20 + 15 + one unset at 5 minimum = 40 > 30
        let mut list = with_widths(&[Some(20), Some(15), None]);
        balance_widths(&mut list, 30);
        assert_eq!(widths(&list), vec![None, None, None]);
    }

    #[test]
    fn too_narrow_clears_only_the_largest() {
        // all set, 10 + 30 + 10 = 50 < 60
        let mut list = with_widths(&[Some(10), Some(30), Some(10)]);
        balance_widths(&mut list, 60);
        assert_eq!(widths(&list), vec![Some(10), None, Some(10)]);
    }

    #[test]
    fn exact_fit_is_left_alone() {
        let mut list = with_widths(&[Some(10), Some(30), Some(10)]);
        balance_widths(&mut list, 50);
        assert_eq!(widths(&list), vec![Some(10), Some(30), Some(10)]);
    }

    #[test]
    fn unset_column_disables_the_narrow_correction() {
        // not every column is explicit, so nothing is freed
        let mut list = with_widths(&[Some(10), None, Some(10)]);
        balance_widths(&mut list, 60);
        assert_eq!(widths(&list), vec![Some(10), None, Some(10)]);
    }

    #[test]
    fn equal_maxima_resolve_to_the_highest_index() {
        let mut list = with_widths(&[Some(30), Some(10), Some(30)]);
        balance_widths(&mut list, 100);
        assert_eq!(widths(&list), vec![Some(30), Some(10), None]);
    }

    #[test]
    fn all_auto_is_untouched() {
        let mut list = with_widths(&[None, None, None]);
        balance_widths(&mut list, 40);
        assert_eq!(widths(&list), vec![None, None, None]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn balancing_matches_the_declared_corrections(
            widths in proptest::collection::vec(proptest::option::of(1usize..40), 1..8),
            total in 10usize..200,
        ) {
            let mut list: Vec<Descriptor> = widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let mut descriptor = Descriptor::new(format!("F{index}"));
                    descriptor.width = *width;
                    descriptor
                })
                .collect();

            let set_sum: usize = widths.iter().flatten().sum();
            let set_count = widths.iter().flatten().count();
            let unset_count = widths.len() - set_count;

            balance_widths(&mut list, total);
            let after: Vec<Option<usize>> = list.iter().map(|d| d.width).collect();

            if set_sum + unset_count * 5 > total {
                prop_assert!(after.iter().all(Option::is_none));
            } else if set_count == widths.len() && set_sum < total {
                let cleared: Vec<usize> = widths
                    .iter()
                    .zip(&after)
                    .enumerate()
                    .filter(|(_, (before, now))| before.is_some() && now.is_none())
                    .map(|(index, _)| index)
                    .collect();
                prop_assert_eq!(cleared.len(), 1);
                let max = widths.iter().flatten().max().copied().unwrap();
                prop_assert_eq!(widths[cleared[0]], Some(max));
            } else {
                prop_assert_eq!(&after, &widths);
            }
        }
    }
}
