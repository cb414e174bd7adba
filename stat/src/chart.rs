use std::io::Write;

use span::Integer;

use crate::standard::SPECIAL_ITEMS;
use crate::{ChartError, Item, Kind, Stat};

// Widest bar in characters; quantities are scaled proportionally.
const BAR_WIDTH: i64 = 50;

const BAR_CHAR: char = '█';

struct Row {
    label: String,
    value: i64,
}

impl<T: Integer> Stat<T> {
    /// Writes the statistics as a bar chart to the specified writer.
    ///
    /// One line per item in snapshot order, labelled `[missed]`,
    /// `[-Inf:end]`, `[begin:end]` or `[begin:+Inf]`, with a bar
    /// proportional to the quantity and the quantity printed after it.
    ///
    /// Fails with [`ChartError::QuantityOverflow`] when a quantity exceeds
    /// the chart's signed value type.
    pub fn chart<W: Write>(&self, writer: &mut W) -> Result<(), ChartError> {
        let mut rows = Vec::with_capacity(self.items.len() + SPECIAL_ITEMS);

        if self.missed.quantity != 0 {
            rows.push(row(&self.missed)?);
        }

        if self.below.quantity != 0 {
            rows.push(row(&self.below)?);
        }

        for item in &self.items {
            rows.push(row(item)?);
        }

        if self.above.quantity != 0 {
            rows.push(row(&self.above)?);
        }

        let label_width = rows.iter().map(|row| row.label.len()).max().unwrap_or(0);
        let scale = rows.iter().map(|row| row.value).max().unwrap_or(0).max(1);

        for row in rows {
            // Widened so the proportion cannot overflow for large counts.
            let length = (i128::from(row.value) * i128::from(BAR_WIDTH) / i128::from(scale)) as usize;
            let bar: String = (0..length).map(|_| BAR_CHAR).collect();

            writeln!(
                writer,
                "{:<label_width$} {} {}",
                row.label, bar, row.value
            )?;
        }

        Ok(())
    }

    /// Writes the statistics as a bar chart to standard output.
    pub fn print(&self) -> Result<(), ChartError> {
        self.chart(&mut std::io::stdout().lock())
    }
}

fn row<T: Integer>(item: &Item<T>) -> Result<Row, ChartError> {
    let label = match item.kind {
        Kind::Missed => "[missed]".to_string(),
        Kind::BelowRange => format!("[-Inf:{}]", item.span.end()),
        Kind::AboveRange => format!("[{}:+Inf]", item.span.begin()),
        Kind::Regular => format!("[{}:{}]", item.span.begin(), item.span.end()),
    };

    let value = i64::try_from(item.quantity).map_err(|_| ChartError::QuantityOverflow)?;

    Ok(Row { label, value })
}
