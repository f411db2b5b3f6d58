use std::collections::BTreeMap;

use crate::column::ColumnSet;
use crate::filter::InputKind;
use crate::grid::GridSignal;
use crate::state::FilterValues;

/// One rendered filter input: the column it filters, its display label, the
/// input control kind and the current round-tripped value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterInput {
    pub column: String,
    pub label: String,
    pub input_kind: InputKind,
    pub value: String,
}

/// Filter form rebuilt by the grid on every render from the filtered
/// columns and the currently stored values.
#[derive(Debug, Clone, Default)]
pub struct FilterForm {
    inputs: Vec<FilterInput>,
}

impl FilterForm {
    /// Rebuilds the inputs: one per column carrying a filter, in column
    /// registration order, pre-filled with the stored value.
    pub(crate) fn rebuild(&mut self, columns: &ColumnSet, values: &FilterValues) {
        self.inputs = columns
            .iter()
            .filter_map(|column| {
                let filter = column.filter()?;
                Some(FilterInput {
                    column: column.name().to_string(),
                    label: column.label().to_string(),
                    input_kind: filter.input_kind(),
                    value: values.get(column.name()).unwrap_or_default().to_string(),
                })
            })
            .collect();
    }

    pub fn inputs(&self) -> &[FilterInput] {
        &self.inputs
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Submission signal replacing all stored filter values.
    pub fn submit(&self, values: BTreeMap<String, String>) -> GridSignal {
        GridSignal::FilterChanged { values }
    }

    /// Reset signal dropping all stored filter values.
    pub fn reset(&self) -> GridSignal {
        GridSignal::FilterReset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;
    use crate::filter::ColumnFilter;

    fn columns() -> ColumnSet {
        let mut columns = ColumnSet::new();
        columns.add(Column::text("id", "Id")).unwrap();
        columns
            .add(Column::text("name", "Name").with_filter(ColumnFilter::Text))
            .unwrap();
        columns
            .add(Column::date("created", "Created").with_filter(ColumnFilter::Date))
            .unwrap();
        columns
    }

    #[test]
    fn test_rebuild_keeps_registration_order_and_values() {
        let mut values = FilterValues::new();
        values.set_values(BTreeMap::from([(
            "name".to_string(),
            "smith".to_string(),
        )]));

        let mut form = FilterForm::default();
        form.rebuild(&columns(), &values);

        let inputs = form.inputs();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].column, "name");
        assert_eq!(inputs[0].input_kind, InputKind::Text);
        assert_eq!(inputs[0].value, "smith");
        assert_eq!(inputs[1].column, "created");
        assert_eq!(inputs[1].input_kind, InputKind::Date);
        assert_eq!(inputs[1].value, "");
    }

    #[test]
    fn test_unfiltered_columns_get_no_input() {
        let mut form = FilterForm::default();
        form.rebuild(&columns(), &FilterValues::new());
        assert!(form.inputs().iter().all(|input| input.column != "id"));
    }

    #[test]
    fn test_signals() {
        let form = FilterForm::default();
        let values = BTreeMap::from([("name".to_string(), "x".to_string())]);
        assert!(matches!(
            form.submit(values),
            GridSignal::FilterChanged { .. }
        ));
        assert!(matches!(form.reset(), GridSignal::FilterReset));
    }
}
