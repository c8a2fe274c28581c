//! Statements over `companies`. `$1` is always the company code.

pub const LIST: &str = "SELECT code, name FROM companies ORDER BY code";

pub const SELECT_WITH_INVOICES: &str = "SELECT c.code, c.name, c.description, i.id AS invoice_id \
     FROM companies AS c \
     LEFT JOIN invoices AS i ON c.code = i.comp_code \
     WHERE c.code = $1 \
     ORDER BY i.id";

pub const INSERT: &str = "INSERT INTO companies (code, name, description) \
     VALUES ($1, $2, $3) \
     RETURNING code, name, description";

pub const UPDATE: &str = "UPDATE companies SET name = $2, description = $3 \
     WHERE code = $1 \
     RETURNING code, name, description";

pub const DELETE: &str = "DELETE FROM companies WHERE code = $1 RETURNING code";
