mod common;
mod responses;
mod schema_path;
