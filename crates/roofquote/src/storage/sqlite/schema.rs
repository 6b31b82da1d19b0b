//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Statistics queries are templates: the `{where}`
//! placeholder is replaced by the clause produced in [`super::filters`].

/// SQL statement to create the quotes table.
///
/// No column is NOT NULL. `roof_size` has INTEGER affinity but accepts any
/// value, so numeric-looking text is coerced and everything else is kept as text.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS quotes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    contractor_name TEXT,
    company TEXT,
    roof_size INTEGER,
    roof_type TEXT,
    city TEXT,
    state TEXT,
    project_date TEXT
);
"#;

pub const INSERT_QUOTE: &str = r#"
INSERT INTO quotes (contractor_name, company, roof_size, roof_type, city, state, project_date)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const SELECT_QUOTES: &str = r#"
SELECT id, contractor_name, company, roof_size, roof_type, city, state, project_date
FROM quotes
{where}
ORDER BY id
"#;

// Filter enumeration
pub const SELECT_DISTINCT_STATES: &str = "SELECT DISTINCT state FROM quotes ORDER BY state";

pub const SELECT_DISTINCT_ROOF_TYPES: &str =
    "SELECT DISTINCT roof_type FROM quotes ORDER BY roof_type";

pub const SELECT_DISTINCT_DATES: &str =
    "SELECT DISTINCT project_date FROM quotes ORDER BY project_date DESC";

// Statistics
pub const SUMMARY_TOTALS: &str = r#"
SELECT COUNT(*), AVG(roof_size)
FROM quotes
{where}
"#;

/// Ties on the count go to the lexicographically smallest roof type.
pub const MOST_COMMON_ROOF_TYPE: &str = r#"
SELECT roof_type, COUNT(*) AS total
FROM quotes
{where}
GROUP BY roof_type
ORDER BY total DESC, roof_type ASC
LIMIT 1
"#;

// Grouped statistics fold NULL into the 'null' bucket inside SQL, so a NULL
// value and a stored "null" string are aggregated together.
pub const COUNT_BY_STATE: &str = r#"
SELECT COALESCE(state, 'null') AS grp, COUNT(*)
FROM quotes
{where}
GROUP BY grp
ORDER BY grp
"#;

pub const AVERAGE_SIZE_BY_ROOF_TYPE: &str = r#"
SELECT COALESCE(roof_type, 'null') AS grp, AVG(roof_size)
FROM quotes
{where}
GROUP BY grp
ORDER BY grp
"#;

pub const MONTHLY_TREND: &str = r#"
SELECT COALESCE(strftime('%Y-%m', project_date), 'null') AS grp, COUNT(*)
FROM quotes
{where}
GROUP BY grp
ORDER BY grp
"#;

pub const PING: &str = "SELECT 1";

/// Substitutes a rendered WHERE clause (possibly empty) into a template.
pub fn with_where(template: &str, where_clause: &str) -> String {
    template.replace("{where}", where_clause)
}
