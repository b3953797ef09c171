use crate::deck::parser::Row;

/// Named view over one dataset row.
///
/// Columns are positional in the source sheet: an unused key first, then the
/// prompt, a hint and the answer. Short rows leave the trailing fields empty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Card {
    pub key: Option<String>,
    pub prompt: Option<String>,
    pub hint: Option<String>,
    pub answer: Option<String>,
    pub extra: Vec<String>,
}

impl Card {
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or_default()
    }

    pub fn hint(&self) -> &str {
        self.hint.as_deref().unwrap_or_default()
    }

    pub fn answer(&self) -> &str {
        self.answer.as_deref().unwrap_or_default()
    }

    /// Fields in their original column order.
    pub fn fields(&self) -> Vec<&str> {
        [&self.key, &self.prompt, &self.hint, &self.answer]
            .into_iter()
            .filter_map(Option::as_deref)
            .chain(self.extra.iter().map(String::as_str))
            .collect()
    }
}

impl From<Row> for Card {
    fn from(row: Row) -> Self {
        let mut fields = row.into_iter();
        Card {
            key: fields.next(),
            prompt: fields.next(),
            hint: fields.next(),
            answer: fields.next(),
            extra: fields.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn maps_columns_by_position() {
        let card: Card = row(&["x", "What is 2+2?", "basic math", "4"]).into();
        assert_eq!(card.key.as_deref(), Some("x"));
        assert_eq!(card.prompt(), "What is 2+2?");
        assert_eq!(card.hint(), "basic math");
        assert_eq!(card.answer(), "4");
        assert!(card.extra.is_empty());
    }

    #[test]
    fn short_rows_leave_fields_blank() {
        let card: Card = row(&["x", "prompt only"]).into();
        assert_eq!(card.prompt(), "prompt only");
        assert_eq!(card.hint(), "");
        assert_eq!(card.answer(), "");
        assert_eq!(card.answer, None);
    }

    #[test]
    fn fields_keep_column_order() {
        let fields = row(&["k", "p", "h", "a", "more", "still more"]);
        let card: Card = fields.clone().into();
        assert_eq!(card.extra, vec!["more", "still more"]);
        assert_eq!(card.fields(), fields);
    }
}
