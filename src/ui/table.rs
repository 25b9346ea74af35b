use tabled::{settings::Style, Table, Tabled};
use crate::question::Choice;

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Tabled)]
struct ChoiceRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Choice")]
    text: String,
    #[tabled(rename = "Correct")]
    correct: &'static str,
}

#[derive(Default)]
pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

pub fn stats_table(stats: &[(&str, &str)]) -> String {
    let mut builder = TableBuilder::new();
    for (label, value) in stats {
        builder.add_row(label, value);
    }
    builder.build()
}

/// Render choices in submitted order, numbered from 1
pub fn choices_table(choices: &[Choice]) -> String {
    if choices.is_empty() {
        return String::new();
    }

    let rows: Vec<ChoiceRow> = choices
        .iter()
        .enumerate()
        .map(|(i, c)| ChoiceRow {
            position: i + 1,
            text: c.choice_text.clone(),
            correct: if c.is_correct { "yes" } else { "" },
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tables_render_nothing() {
        assert!(TableBuilder::new().build().is_empty());
        assert!(choices_table(&[]).is_empty());
    }

    #[test]
    fn test_stats_table_contains_values() {
        let table = stats_table(&[("Questions", "3"), ("Choices", "9")]);
        assert!(table.contains("Questions"));
        assert!(table.contains("9"));
    }

    #[test]
    fn test_choices_table_marks_correct() {
        let choices = vec![
            Choice { id: 1, choice_text: "4".to_string(), is_correct: true, question_id: 1 },
            Choice { id: 2, choice_text: "5".to_string(), is_correct: false, question_id: 1 },
        ];
        let table = choices_table(&choices);
        assert!(table.contains("yes"));
        assert!(table.contains("Correct"));
    }
}
