mod postgres_contact_repository;

pub use postgres_contact_repository::PostgresContactRepository;
