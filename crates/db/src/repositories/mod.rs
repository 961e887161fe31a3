//! Repository structs providing async data access over a `PgPool`.

mod mesa_repo;

pub use mesa_repo::MesaRepo;
