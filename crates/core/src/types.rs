/// Primary keys of both catalogue tables are SQLite `INTEGER` rowids.
pub type DbId = i64;
