use crate::detect::MarkedMessage;
use cluemine_core::ClueRow;

/// Timestamp rendering used in export rows.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Builds one export row per detected clue, in transcript order.
///
/// Missing answers render as empty strings so the tabular output keeps a
/// fixed column set.
pub fn build_rows(messages: &[MarkedMessage]) -> Vec<ClueRow> {
    messages
        .iter()
        .filter_map(|marked| {
            let mark = marked.clue.as_ref()?;
            let answer = |i: usize| mark.answers.get(i).cloned().unwrap_or_default();
            Some(ClueRow {
                date: format_date(marked.message.timestamp),
                author: marked.message.author.clone(),
                clue: marked.message.text.clone(),
                enumeration: mark.enumeration.to_string(),
                enumeration_total: mark.enumeration.total(),
                answer1: answer(0),
                answer2: answer(1),
                answer3: answer(2),
            })
        })
        .collect()
}

fn format_date(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect;
    use cluemine_core::Message;

    #[test]
    fn one_row_per_clue_with_padded_answers() {
        let mut marked = detect::mark_messages(vec![
            Message::new(0, "Alice", "Capital of France (5)"),
            Message::new(60, "Bob", "PARIS"),
        ]);
        marked[0].clue.as_mut().unwrap().answers = vec!["PARIS".to_string()];

        let rows = build_rows(&marked);
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.date, "1970-01-01 00:00");
        assert_eq!(row.author, "Alice");
        assert_eq!(row.clue, "Capital of France (5)");
        assert_eq!(row.enumeration, "( 5 )");
        assert_eq!(row.enumeration_total, 5);
        assert_eq!(row.answer1, "PARIS");
        assert_eq!(row.answer2, "");
        assert_eq!(row.answer3, "");
    }

    #[test]
    fn clueless_transcripts_build_zero_rows() {
        let marked = detect::mark_messages(vec![Message::new(0, "Alice", "morning")]);
        assert!(build_rows(&marked).is_empty());
    }

    #[test]
    fn rows_keep_transcript_order() {
        let marked = detect::mark_messages(vec![
            Message::new(0, "Alice", "First of two (4,5)"),
            Message::new(1, "Bob", "chatter"),
            Message::new(2, "Carol", "Second teaser (8)"),
        ]);

        let rows = build_rows(&marked);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].enumeration, "( 4, 5 )");
        assert_eq!(rows[0].enumeration_total, 9);
        assert_eq!(rows[1].enumeration, "( 8 )");
        assert_eq!(rows[1].author, "Carol");
    }
}
