pub mod route_table;
pub mod routes;
