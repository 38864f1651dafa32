//! Repository structs with async CRUD methods over the connection pool.

pub mod ticket_repo;

pub use ticket_repo::TicketRepo;
