use crate::model::{Item, Row, TreeMap};

/// Initial target weight: at least the heaviest item, and at least the mean per row.
fn target_row_weight(items: &[Item], row_count: usize) -> f64 {
    let total: f64 = items.iter().map(|i| i.weight).sum();
    let max = items
        .iter()
        .map(|i| i.weight)
        .fold(f64::NEG_INFINITY, f64::max);
    let avg = total / row_count as f64;
    tracing::debug!(
        "Target weight: total={:.3}, max={:.3}, avg={:.3} over {} rows",
        total,
        max,
        avg,
        row_count
    );
    max.max(avg)
}

/// Pack weighted items into at most `row_count` rows of equal weight.
///
/// Items are placed heaviest first into the first row with room under the
/// shared target. When nothing fits, the item goes into the first-created row
/// and the target grows to that row's new weight. Every row is then padded
/// with a dummy item up to the final target, and rows are returned heaviest
/// first.
///
/// Returns `None` when `items` is empty or `row_count` is zero. The caller's
/// slice is not reordered; ties keep input order.
pub fn pack(items: &[Item], row_count: usize) -> Option<TreeMap> {
    if items.is_empty() || row_count == 0 {
        return None;
    }

    let mut weight_per_row = target_row_weight(items, row_count);

    // Stable, descending by weight
    let mut sorted: Vec<Item> = items.to_vec();
    sorted.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    let mut rows: Vec<Row> = Vec::with_capacity(row_count.min(sorted.len()));
    let mut forced = 0usize;

    for item in sorted {
        if rows.len() < row_count {
            rows.push(Row::with_item(item));
            continue;
        }

        if let Some(row) = rows
            .iter_mut()
            .find(|row| row.fits(item.weight, weight_per_row))
        {
            row.push(item);
            continue;
        }

        // All rows full: overflow into the first row and raise the target
        let first = &mut rows[0];
        first.push(item);
        weight_per_row = first.current_weight();
        forced += 1;
        tracing::debug!("Forced overflow into row 0, target now {:.3}", weight_per_row);
    }

    let mut padding = 0.0;
    for row in &mut rows {
        if let Some(diff) = row.pad_to(weight_per_row) {
            padding += diff;
        }
    }

    // Heavier rows display first; stable so equal rows keep creation order
    rows.sort_by(|a, b| b.current_weight().total_cmp(&a.current_weight()));

    tracing::info!(
        "Packed {} items into {} rows (target={:.3}, padding={:.3}, forced={})",
        items.len(),
        rows.len(),
        weight_per_row,
        padding,
        forced
    );

    Some(TreeMap {
        weight_per_row,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::pack;
    use crate::model::Item;

    fn items(weights: &[f64]) -> Vec<Item> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Item::new(&format!("item{i}"), w, i as f64))
            .collect()
    }

    fn real_weights(map: &crate::model::TreeMap, row: usize) -> Vec<f64> {
        map.rows[row]
            .items()
            .iter()
            .filter(|i| !i.is_dummy)
            .map(|i| i.weight)
            .collect()
    }

    #[test]
    fn empty_input_or_zero_rows_gives_none() {
        assert!(pack(&[], 3).is_none());
        assert!(pack(&items(&[1.0]), 0).is_none());
    }

    #[test]
    fn heavy_item_sits_alone() {
        let map = pack(&items(&[10.0, 1.0, 1.0, 1.0]), 2).unwrap();
        assert_eq!(map.weight_per_row, 10.0);
        assert_eq!(map.rows.len(), 2);

        let heavy = &map.rows[0];
        assert_eq!(heavy.items().len(), 1);
        assert_eq!(heavy.items()[0].weight, 10.0);
        assert!(!heavy.items()[0].is_dummy);

        let light = &map.rows[1];
        assert_eq!(real_weights(&map, 1), vec![1.0, 1.0, 1.0]);
        let dummy = light.items().last().unwrap();
        assert!(dummy.is_dummy);
        assert_eq!(dummy.weight, 7.0);
        assert_eq!(light.current_weight(), 10.0);
    }

    #[test]
    fn target_is_average_when_no_item_dominates() {
        let map = pack(&items(&[3.0, 3.0, 2.0, 2.0, 1.0, 1.0]), 3).unwrap();
        assert_eq!(map.weight_per_row, 4.0);
        for row in &map.rows {
            assert_eq!(row.current_weight(), 4.0);
            assert!(row.items().iter().all(|i| !i.is_dummy));
        }
    }

    #[test]
    fn fewer_items_than_rows() {
        let map = pack(&items(&[5.0, 2.0]), 4).unwrap();
        assert_eq!(map.rows.len(), 2);
        assert_eq!(map.weight_per_row, 5.0);
        assert_eq!(real_weights(&map, 1), vec![2.0]);
        assert_eq!(map.rows[1].items()[1].weight, 3.0);
    }

    #[test]
    fn forced_overflow_raises_target_and_pads_other_rows() {
        // target = max(3, 9/2) = 4.5; the third 3 fits nowhere
        let map = pack(&items(&[3.0, 3.0, 3.0]), 2).unwrap();
        assert_eq!(map.weight_per_row, 6.0);
        assert_eq!(real_weights(&map, 0), vec![3.0, 3.0]);
        assert_eq!(real_weights(&map, 1), vec![3.0]);
        let pad = map.rows[1].items().last().unwrap();
        assert!(pad.is_dummy);
        assert_eq!(pad.weight, 3.0);
    }

    #[test]
    fn raised_target_lets_later_items_fit() {
        // target = max(5, 17/3); the first 1 is forced into row 0 (target 6),
        // after which the second 1 fits row 1 and row 2 only gets padding.
        let map = pack(&items(&[5.0, 5.0, 5.0, 1.0, 1.0]), 3).unwrap();
        assert_eq!(map.weight_per_row, 6.0);
        assert_eq!(real_weights(&map, 0), vec![5.0, 1.0]);
        assert_eq!(real_weights(&map, 1), vec![5.0, 1.0]);
        assert_eq!(real_weights(&map, 2), vec![5.0]);
        assert_eq!(map.rows[2].items().last().unwrap().weight, 1.0);
        assert!(map.rows.iter().all(|r| r.current_weight() == 6.0));
    }

    #[test]
    fn later_items_fill_lighter_rows() {
        // target = max(6, 18/3) = 6; rows [6] [6] [3], then 2 and 1 join row 2
        let map = pack(&items(&[6.0, 6.0, 3.0, 2.0, 1.0]), 3).unwrap();
        assert_eq!(map.weight_per_row, 6.0);
        assert_eq!(real_weights(&map, 2), vec![3.0, 2.0, 1.0]);
        assert!(map.rows.iter().all(|r| r.items().iter().all(|i| !i.is_dummy)));
    }

    #[test]
    fn caller_slice_is_not_reordered() {
        let input = items(&[1.0, 5.0, 3.0]);
        let before = input.clone();
        let _ = pack(&input, 2);
        assert_eq!(input, before);
    }

    #[test]
    fn ties_keep_input_order() {
        let input = vec![
            Item::new("first", 2.0, 0.0),
            Item::new("second", 2.0, 0.0),
            Item::new("third", 2.0, 0.0),
        ];
        let map = pack(&input, 3).unwrap();
        let names: Vec<&str> = map.rows.iter().map(|r| r.items()[0].name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn values_are_carried_through() {
        let input = vec![Item::new("a", 2.0, -4.5), Item::new("b", 1.0, 0.25)];
        let map = pack(&input, 1).unwrap();
        let values: Vec<f64> = map.real_items().map(|i| i.value).collect();
        assert_eq!(values, vec![-4.5, 0.25]);
    }
}
