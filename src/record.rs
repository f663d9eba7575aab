// ABOUTME: MedicationRecord type and the medicaments column layout
// ABOUTME: Builds SELECT and INSERT statements from a single column-order constant

use mysql_async::Value;

/// Table name used by every command unless overridden on the CLI.
pub const DEFAULT_TABLE: &str = "medicaments";

/// Column order shared by the SQLite SELECT, the in-memory record, and the
/// MySQL INSERT. The migration relies on positional correspondence, so both
/// statements are generated from this one list.
pub const COLUMNS: [&str; 6] = [
    "name",
    "price",
    "dosage",
    "composition",
    "Classe_thérapeutique",
    "Code_ATCv",
];

/// One medication entry. Fields mirror `COLUMNS` in order; any of them may
/// be NULL in the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicationRecord {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub dosage: Option<String>,
    pub composition: Option<String>,
    pub therapeutic_class: Option<String>,
    pub atc_code: Option<String>,
}

impl MedicationRecord {
    /// Positional insert parameters, in `COLUMNS` order.
    pub fn to_params(&self) -> Vec<Value> {
        vec![
            Value::from(self.name.clone()),
            Value::from(self.price),
            Value::from(self.dosage.clone()),
            Value::from(self.composition.clone()),
            Value::from(self.therapeutic_class.clone()),
            Value::from(self.atc_code.clone()),
        ]
    }
}

/// Quote a MySQL identifier.
pub fn quote_mysql_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Quote a SQLite identifier.
pub fn quote_sqlite_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// SELECT statement reading the six columns from the SQLite source table.
pub fn select_sql(table: &str) -> String {
    let cols: Vec<String> = COLUMNS.iter().map(|c| quote_sqlite_ident(c)).collect();
    format!("SELECT {} FROM {}", cols.join(", "), quote_sqlite_ident(table))
}

/// Parameterized INSERT statement for the MySQL destination table.
pub fn insert_sql(table: &str) -> String {
    let cols: Vec<String> = COLUMNS.iter().map(|c| quote_mysql_ident(c)).collect();
    let placeholders = vec!["?"; COLUMNS.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_mysql_ident(table),
        cols.join(", "),
        placeholders
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_mysql_ident() {
        assert_eq!(quote_mysql_ident("medicaments"), "`medicaments`");
        assert_eq!(quote_mysql_ident("bad`name"), "`bad``name`");
    }

    #[test]
    fn test_quote_sqlite_ident() {
        assert_eq!(quote_sqlite_ident("medicaments"), "\"medicaments\"");
        assert_eq!(quote_sqlite_ident("bad\"name"), "\"bad\"\"name\"");
    }

    #[test]
    fn test_select_sql_column_order() {
        let sql = select_sql("medicaments");
        assert_eq!(
            sql,
            "SELECT \"name\", \"price\", \"dosage\", \"composition\", \
             \"Classe_thérapeutique\", \"Code_ATCv\" FROM \"medicaments\""
        );
    }

    #[test]
    fn test_insert_sql_placeholder_count() {
        let sql = insert_sql("medicaments");
        assert_eq!(
            sql,
            "INSERT INTO `medicaments` (`name`, `price`, `dosage`, `composition`, \
             `Classe_thérapeutique`, `Code_ATCv`) VALUES (?, ?, ?, ?, ?, ?)"
        );
        assert_eq!(sql.matches('?').count(), COLUMNS.len());
    }

    #[test]
    fn test_to_params_positional_order() {
        let record = MedicationRecord {
            name: Some("Aspirin".to_string()),
            price: Some(3.5),
            dosage: Some("500mg".to_string()),
            composition: None,
            therapeutic_class: Some("Analgesic".to_string()),
            atc_code: Some("N02BA01".to_string()),
        };

        let params = record.to_params();
        assert_eq!(params.len(), COLUMNS.len());
        assert_eq!(params[0], Value::from("Aspirin"));
        assert_eq!(params[1], Value::from(3.5));
        assert_eq!(params[3], Value::NULL);
        assert_eq!(params[5], Value::from("N02BA01"));
    }
}
