//! The `items x (capacity + 1)` value table.

use std::io::{self, Write};

use crate::model::Item;

/// Row-major table of optimal sub-solution values.
///
/// Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    rows: usize,
    width: usize,
    cells: Vec<u64>,
}

impl DpTable {
    /// Fills the table for `items` and `capacity`.
    ///
    /// `dp[last][w]` holds the last item's value when it fits in `w`,
    /// otherwise 0; every other row takes or skips its item against the
    /// row below. Column 0 is all zeros.
    pub fn build(items: &[Item], capacity: usize) -> Self {
        let rows = items.len();
        let width = capacity + 1;
        let mut table = Self {
            rows,
            width,
            cells: vec![0; rows * width],
        };

        for i in (0..rows).rev() {
            let weight = items[i].weight();
            let value = items[i].value();
            for w in 1..width {
                let fits = weight <= w as u64;
                let cell = if i + 1 == rows {
                    if fits {
                        value
                    } else {
                        0
                    }
                } else if !fits {
                    table.get(i + 1, w)
                } else {
                    let skip = table.get(i + 1, w);
                    let take = table.get(i + 1, w - weight as usize) + value;
                    skip.max(take)
                };
                table.cells[i * width + w] = cell;
            }
        }
        table
    }

    /// Number of item rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The largest capacity column.
    pub fn capacity(&self) -> usize {
        self.width - 1
    }

    /// Best value using items `item..` with capacity `capacity`.
    pub fn get(&self, item: usize, capacity: usize) -> u64 {
        self.cells[item * self.width + capacity]
    }

    /// The row for `item`, indexed by capacity.
    pub fn row(&self, item: usize) -> &[u64] {
        &self.cells[item * self.width..(item + 1) * self.width]
    }

    /// Optimal value of the whole instance.
    pub fn optimum(&self) -> u64 {
        if self.rows == 0 {
            0
        } else {
            self.get(0, self.capacity())
        }
    }

    /// Indices of the chosen items, ascending.
    ///
    /// Item `i` is taken when its row differs from the next row at the
    /// remaining capacity; the last item is taken when it fits in what is
    /// left. Stops as soon as no capacity remains.
    pub fn reconstruct(&self, items: &[Item]) -> Vec<usize> {
        let mut remaining = self.capacity();
        let mut picks = Vec::new();

        for (i, item) in items.iter().enumerate().take(self.rows) {
            if remaining == 0 {
                break;
            }
            let weight = item.weight() as usize;
            let taken = if i + 1 == self.rows {
                weight <= remaining
            } else {
                self.get(i, remaining) != self.get(i + 1, remaining)
            };
            if taken {
                picks.push(i);
                remaining -= weight;
            }
        }
        picks
    }

    /// Writes the table as CSV: a header of `<capacity>` columns and one
    /// `[item]` row per item.
    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "Item\\Cap")?;
        for w in 0..self.width {
            write!(out, ",<{w}>")?;
        }
        writeln!(out)?;
        for i in 0..self.rows {
            write!(out, "[{i}]")?;
            for value in self.row(i) {
                write!(out, ",{value}")?;
            }
            writeln!(out)?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Item> {
        vec![
            Item::new("1", 2, 3),
            Item::new("2", 3, 4),
            Item::new("3", 4, 5),
            Item::new("4", 5, 6),
        ]
    }

    #[test]
    fn test_build_sample() {
        let items = sample();
        let table = DpTable::build(&items, 5);
        assert_eq!(table.rows(), 4);
        assert_eq!(table.capacity(), 5);
        assert_eq!(table.row(3), &[0, 0, 0, 0, 0, 6]);
        assert_eq!(table.row(2), &[0, 0, 0, 0, 5, 6]);
        assert_eq!(table.row(1), &[0, 0, 0, 4, 5, 6]);
        assert_eq!(table.row(0), &[0, 0, 3, 4, 5, 7]);
        assert_eq!(table.optimum(), 7);
    }

    #[test]
    fn test_reconstruct_sample() {
        let items = sample();
        let table = DpTable::build(&items, 5);
        assert_eq!(table.reconstruct(&items), vec![0, 1]);
    }

    #[test]
    fn test_reconstruct_takes_last_item() {
        let items = vec![Item::new("a", 6, 1), Item::new("b", 3, 9)];
        let table = DpTable::build(&items, 4);
        assert_eq!(table.reconstruct(&items), vec![1]);
    }

    #[test]
    fn test_rows_monotone_in_capacity() {
        let items = vec![
            Item::new("a", 3, 4),
            Item::new("b", 4, 5),
            Item::new("c", 7, 10),
            Item::new("d", 1, 1),
        ];
        let table = DpTable::build(&items, 12);
        for i in 0..table.rows() {
            assert!(table.row(i).windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_empty_items() {
        let table = DpTable::build(&[], 3);
        assert_eq!(table.rows(), 0);
        assert_eq!(table.optimum(), 0);
        assert!(table.reconstruct(&[]).is_empty());
    }

    #[test]
    fn test_zero_capacity() {
        let items = sample();
        let table = DpTable::build(&items, 0);
        assert_eq!(table.optimum(), 0);
        assert!(table.reconstruct(&items).is_empty());
    }

    #[test]
    fn test_write_csv() {
        let items = vec![Item::new("a", 1, 2), Item::new("b", 2, 3)];
        let table = DpTable::build(&items, 2);
        let mut out = Vec::new();
        table.write_csv(&mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();
        assert_eq!(csv, "Item\\Cap,<0>,<1>,<2>\n[0],0,2,3\n[1],0,0,3\n");
    }
}
