use crate::model::TreeMap;

/// A positioned rectangle for one item of a packed row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRect {
    /// Index into `TreeMap::rows`
    pub row: usize,
    /// Index into that row's items
    pub item: usize,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Padding rect (renderers normally leave these blank)
    pub is_dummy: bool,
}

impl ItemRect {
    pub fn area(&self) -> f32 {
        self.w * self.h
    }
}

/// Map a packed treemap onto a `width` x `height` viewport.
///
/// Rows stack top to bottom with height proportional to their weight; items
/// run left to right with width proportional to their share of the row.
pub fn compute_rects(map: &TreeMap, width: f32, height: f32) -> Vec<ItemRect> {
    let total = map.total_weight();
    if map.rows.is_empty() || total <= 0.0 || width <= 1e-6 || height <= 1e-6 {
        return Vec::new();
    }

    let capacity = map.rows.iter().map(|r| r.items().len()).sum();
    let mut rects = Vec::with_capacity(capacity);

    let mut y = 0.0f64;
    for (row_idx, row) in map.rows.iter().enumerate() {
        let row_weight = row.current_weight();
        let thickness = height as f64 * row_weight / total;

        let mut x = 0.0f64;
        for (item_idx, item) in row.items().iter().enumerate() {
            let length = width as f64 * item.weight / row_weight;

            if !length.is_finite() || !thickness.is_finite() || length <= 0.0 || thickness <= 0.0 {
                tracing::warn!(
                    "Rows: invalid dimensions (length={}, thickness={}, weight={}, row={}), skipping",
                    length,
                    thickness,
                    item.weight,
                    row_idx
                );
                continue;
            }

            rects.push(ItemRect {
                row: row_idx,
                item: item_idx,
                x: x as f32,
                y: y as f32,
                w: length as f32,
                h: thickness as f32,
                is_dummy: item.is_dummy,
            });
            x += length;
        }

        if thickness.is_finite() && thickness > 0.0 {
            y += thickness;
        }
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::compute_rects;
    use crate::layout::pack;
    use crate::model::Item;

    fn sample() -> crate::model::TreeMap {
        let items: Vec<Item> = [10.0, 1.0, 1.0, 1.0]
            .iter()
            .map(|&w| Item::new("x", w, 1.0))
            .collect();
        pack(&items, 2).unwrap()
    }

    #[test]
    fn rects_cover_viewport() {
        let rects = compute_rects(&sample(), 1920.0, 1080.0);
        assert_eq!(rects.len(), 5);
        let total: f32 = rects.iter().map(|r| r.area()).sum();
        assert!((total - 1920.0 * 1080.0).abs() < 8.0);
    }

    #[test]
    fn equal_rows_split_height_evenly() {
        let rects = compute_rects(&sample(), 100.0, 50.0);
        let first = rects[0];
        assert_eq!(first.row, 0);
        assert!((first.w - 100.0).abs() < 1e-4);
        assert!((first.h - 25.0).abs() < 1e-4);

        let second_row: Vec<_> = rects.iter().filter(|r| r.row == 1).collect();
        assert_eq!(second_row.len(), 4);
        assert!(second_row.iter().all(|r| (r.y - 25.0).abs() < 1e-4));
        assert!((second_row[0].w - 10.0).abs() < 1e-4);
        let pad = second_row[3];
        assert!(pad.is_dummy);
        assert!((pad.w - 70.0).abs() < 1e-4);
        assert!((pad.x - 30.0).abs() < 1e-4);
    }

    #[test]
    fn degenerate_viewport_is_empty() {
        assert!(compute_rects(&sample(), 0.0, 100.0).is_empty());
        assert!(compute_rects(&sample(), 100.0, 0.0).is_empty());
    }
}
