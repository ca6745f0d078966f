use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Table};
use stowage_core::stowage_layout::ConsolidatedTable;

/// Render the consolidated table for the terminal, one line per reported state variable.
pub fn render_table(consolidated: &ConsolidatedTable) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Contract"),
        Cell::new("State Variable"),
        Cell::new("Storage Slot"),
        Cell::new("Offset"),
        Cell::new("Type"),
        Cell::new("Number of Bytes"),
        Cell::new("Source"),
    ]);

    for row in consolidated.rows() {
        for variable in &row.state_variables {
            table.add_row([
                row.name.as_str(),
                variable.name.as_str(),
                variable.slot.as_str(),
                &variable.offset.to_string(),
                variable.type_ref.as_str(),
                variable.number_of_bytes.as_str(),
                variable.source.as_str(),
            ]);
        }
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_core::stowage_layout::{ConsolidatedRow, ReportedVariable};

    fn variable(name: &str, slot: &str, offset: u64) -> ReportedVariable {
        ReportedVariable {
            name: name.to_string(),
            slot: slot.to_string(),
            offset,
            type_ref: "t_uint128".to_string(),
            source: "contracts/Vault.sol".to_string(),
            number_of_bytes: "16".to_string(),
        }
    }

    #[test]
    fn test_render_table() {
        let consolidated = ConsolidatedTable::new(vec![
            ConsolidatedRow {
                name: "Vault".to_string(),
                state_variables: vec![variable("reserve0", "3", 0), variable("reserve1", "3", 16)],
            },
            ConsolidatedRow { name: "Empty".to_string(), state_variables: vec![] },
        ]);

        let rendered = render_table(&consolidated);

        assert!(rendered.contains("State Variable"));
        assert!(rendered.contains("Number of Bytes"));
        assert!(rendered.contains("reserve0"));
        assert!(rendered.contains("reserve1"));
        assert!(rendered.contains("contracts/Vault.sol"));
        assert!(!rendered.contains("Empty"));
        assert!(rendered.starts_with('╭'));

        let body = rendered.lines().filter(|line| line.contains("Vault")).count();
        assert_eq!(body, 2);
    }

    #[test]
    fn test_render_empty_table() {
        let rendered = render_table(&ConsolidatedTable::new(vec![]));

        assert!(rendered.contains("Contract"));
        assert!(!rendered.contains("Vault"));
    }
}
