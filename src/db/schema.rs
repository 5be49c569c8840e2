//! SQL DDL for initializing the item storage.

/// MySQL schema with:
/// - `id` INT AUTO_INCREMENT PRIMARY KEY
/// - `name` required, `description` optional
/// - `created_at` assigned by the server at insert
///
/// `IF NOT EXISTS` makes the statement safe to run on every process start.
pub const MYSQL_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    description TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;
