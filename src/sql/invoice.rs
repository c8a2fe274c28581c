//! Statements over `invoices`. `$1` is always the invoice id on keyed statements.

pub const LIST: &str = "SELECT id, comp_code FROM invoices ORDER BY id";

pub const SELECT_WITH_COMPANY: &str = "SELECT i.id, i.amt, i.paid, i.add_date, i.paid_date, \
     c.code, c.name, c.description \
     FROM invoices AS i \
     JOIN companies AS c ON i.comp_code = c.code \
     WHERE i.id = $1";

pub const INSERT: &str = "INSERT INTO invoices (comp_code, amt) \
     VALUES ($1, $2) \
     RETURNING id, comp_code, amt, paid, add_date, paid_date";

pub const UPDATE: &str = "UPDATE invoices SET amt = $2 \
     WHERE id = $1 \
     RETURNING id, comp_code, amt, paid, add_date, paid_date";

pub const DELETE: &str = "DELETE FROM invoices WHERE id = $1 RETURNING id";
