use std::fmt;

use crate::Results;

/// Outcomes shown before the ellipsis in a long preview.
const LEADING_ROWS: usize = 9;

/// Longest outcome text shown before truncation.
const MAX_CELL_CHARS: usize = 100;

/// A row of the tabular preview of a [`Results`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewRow {
    /// An outcome and its (possibly truncated) text.
    Outcome { index: usize, text: String },

    /// Marks skipped outcomes.
    Ellipsis,
}

impl Results {
    /// Returns the rows of a truncated preview.
    ///
    /// Collections of up to nine outcomes show every outcome. Longer ones
    /// show the first nine, an ellipsis, then the last outcome. Outcome text
    /// longer than 100 characters is cut and followed by `...`.
    #[must_use]
    pub fn preview(&self) -> Vec<PreviewRow> {
        let row = |index: usize| PreviewRow::Outcome {
            index,
            text: self.get(index).map(|x| truncate(&x.to_string())).unwrap_or_default(),
        };

        if self.len() <= LEADING_ROWS {
            return (0..self.len()).map(row).collect();
        }
        (0..LEADING_ROWS)
            .map(row)
            .chain([PreviewRow::Ellipsis, row(self.len() - 1)])
            .collect()
    }
}

fn truncate(text: &str) -> String {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_owned(),
    }
}

/// A two-column table of outcome index and outcome.
impl fmt::Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Index  Result")?;
        for row in self.preview() {
            match row {
                PreviewRow::Outcome { index, text } => writeln!(f, "{index:<5}  {text}")?,
                PreviewRow::Ellipsis => writeln!(f, "...    ...")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tally_core::Outcome;

    use super::*;

    fn indices(rows: &[PreviewRow]) -> Vec<Option<usize>> {
        rows.iter()
            .map(|row| match row {
                PreviewRow::Outcome { index, .. } => Some(*index),
                PreviewRow::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn short_collections_show_every_outcome() {
        let rows = Results::numeric(0..9).preview();
        assert_eq!(indices(&rows), (0..9).map(Some).collect::<Vec<_>>());
    }

    #[test]
    fn long_collections_show_first_nine_and_last() {
        let rows = Results::numeric(0..25).preview();

        let mut expected: Vec<_> = (0..9).map(Some).collect();
        expected.extend([None, Some(24)]);
        assert_eq!(indices(&rows), expected);
        assert_eq!(
            rows[10],
            PreviewRow::Outcome {
                index: 24,
                text: "24".into()
            }
        );
    }

    #[test]
    fn ten_outcomes_already_truncate() {
        let rows = Results::numeric(0..10).preview();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[9], PreviewRow::Ellipsis);
    }

    #[test]
    fn long_text_is_capped() {
        let long = "x".repeat(150);
        let rows = Results::generic([long.as_str(), "short"]).preview();

        let PreviewRow::Outcome { text, .. } = &rows[0] else {
            panic!("expected an outcome row");
        };
        assert_eq!(text.len(), 103);
        assert!(text.ends_with("..."));
        assert_eq!(
            rows[1],
            PreviewRow::Outcome {
                index: 1,
                text: "short".into()
            }
        );
    }

    #[test]
    fn displays_as_a_table() {
        let results = Results::generic([Outcome::tuple([1, 2]), "H".into()]);
        assert_eq!(results.to_string(), "Index  Result\n0      (1, 2)\n1      H\n");
    }
}
