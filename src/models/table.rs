use std::fmt;

/// A single table value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Missing,
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Coerce to a number; unparseable, non-finite and sentinel values become missing
    pub fn to_numeric(&self, sentinel: f64) -> Cell {
        let value = match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
            Cell::Missing => None,
        };

        match value {
            Some(v) if v.is_finite() && v != sentinel => Cell::Number(v),
            _ => Cell::Missing,
        }
    }
}

impl fmt::Display for Cell {
    /// Missing values render as an empty field
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Missing => Ok(()),
        }
    }
}

/// Column-named rows; every row has exactly one cell per column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClimateTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl ClimateTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding short rows with missing cells
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Missing);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Rename a column if present; returns whether it was
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.column_index(from) {
            Some(index) => {
                self.columns[index] = to.to_string();
                true
            }
            None => false,
        }
    }

    /// Coerce a column to numbers, returning how many of its cells end up missing
    pub fn coerce_numeric(&mut self, column: &str, sentinel: f64) -> usize {
        let Some(index) = self.column_index(column) else {
            return 0;
        };

        let mut missing = 0;
        for row in &mut self.rows {
            row[index] = row[index].to_numeric(sentinel);
            if row[index].is_missing() {
                missing += 1;
            }
        }
        missing
    }

    /// Insert a column holding the same value in every row
    pub fn insert_constant_column(&mut self, index: usize, name: &str, value: Cell) {
        let index = index.min(self.columns.len());
        self.columns.insert(index, name.to_string());
        for row in &mut self.rows {
            row.insert(index, value.clone());
        }
    }

    /// Project onto `schema` order, dropping other columns and skipping absent ones
    pub fn select_columns(&self, schema: &[&str]) -> ClimateTable {
        let picked: Vec<(usize, &str)> = schema
            .iter()
            .filter_map(|name| self.column_index(name).map(|i| (i, *name)))
            .collect();

        ClimateTable {
            columns: picked.iter().map(|(_, name)| name.to_string()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| picked.iter().map(|(i, _)| row[*i].clone()).collect())
                .collect(),
        }
    }

    /// Stack tables in order under `schema`
    ///
    /// The result holds every schema column present in at least one table; rows from a table
    /// lacking such a column get missing cells there.
    pub fn concat(tables: &[ClimateTable], schema: &[&str]) -> ClimateTable {
        let columns: Vec<String> = schema
            .iter()
            .filter(|name| tables.iter().any(|t| t.column_index(name).is_some()))
            .map(|name| name.to_string())
            .collect();

        let mut combined = ClimateTable::new(columns);
        for table in tables {
            let mapping: Vec<Option<usize>> = combined
                .columns
                .iter()
                .map(|name| table.column_index(name))
                .collect();

            for row in &table.rows {
                combined.rows.push(
                    mapping
                        .iter()
                        .map(|m| m.map_or(Cell::Missing, |i| row[i].clone()))
                        .collect(),
                );
            }
        }
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn sample() -> ClimateTable {
        let mut table = ClimateTable::new(vec![
            "YEAR".to_string(),
            "DOY".to_string(),
            "PRECTOT".to_string(),
        ]);
        table.push_row(vec![text("2023"), text("274"), text("-999.0")]);
        table.push_row(vec![text("2023"), text("275"), text("1.25")]);
        table
    }

    #[test]
    fn test_cell_coercion() {
        assert_eq!(text("25.31").to_numeric(-999.0), Cell::Number(25.31));
        assert_eq!(text("-999.0").to_numeric(-999.0), Cell::Missing);
        assert_eq!(text("-999").to_numeric(-999.0), Cell::Missing);
        assert_eq!(text("n/a").to_numeric(-999.0), Cell::Missing);
        assert_eq!(text("NaN").to_numeric(-999.0), Cell::Missing);
        assert_eq!(text("").to_numeric(-999.0), Cell::Missing);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Number(2023.0).to_string(), "2023");
        assert_eq!(Cell::Number(25.31).to_string(), "25.31");
        assert_eq!(Cell::Missing.to_string(), "");
        assert_eq!(text("-12.05").to_string(), "-12.05");
    }

    #[test]
    fn test_rename_and_coerce() {
        let mut table = sample();
        assert!(table.rename_column("PRECTOT", "PRECIPITACION_MM"));
        assert!(!table.rename_column("ALLSKY_SFC_SW_DWN", "RADIACION_SOLAR"));

        let missing = table.coerce_numeric("PRECIPITACION_MM", -999.0);
        assert_eq!(missing, 1);
        assert_eq!(table.rows()[0][2], Cell::Missing);
        assert_eq!(table.rows()[1][2], Cell::Number(1.25));
    }

    #[test]
    fn test_select_columns() {
        let mut table = sample();
        table.insert_constant_column(0, "Departamento", text("Cusco"));

        let selected = table.select_columns(&["Departamento", "Latitud", "DOY", "YEAR"]);
        assert_eq!(selected.columns(), ["Departamento", "DOY", "YEAR"]);
        assert_eq!(selected.rows()[1], vec![text("Cusco"), text("275"), text("2023")]);
    }

    #[test]
    fn test_concat_preserves_order() {
        let first = sample();
        let mut second = sample().select_columns(&["YEAR", "DOY"]);
        second.push_row(vec![text("2024"), text("1")]);

        let combined = ClimateTable::concat(&[first, second], &["DOY", "YEAR", "PRECTOT"]);
        assert_eq!(combined.columns(), ["DOY", "YEAR", "PRECTOT"]);
        assert_eq!(combined.row_count(), 5);
        assert_eq!(combined.rows()[4], vec![text("1"), text("2024"), Cell::Missing]);
    }

    #[test]
    fn test_push_row_pads() {
        let mut table = sample();
        table.push_row(vec![text("2023")]);
        assert_eq!(table.rows()[2].len(), 3);
        assert!(table.rows()[2][2].is_missing());
    }
}
