//! Network Repository Adapters

mod postgres;

pub use postgres::PostgresNetworkRepository;
