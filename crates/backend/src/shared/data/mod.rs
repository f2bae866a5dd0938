pub mod data_source;
pub mod fixtures;
pub mod mock_store;

pub use data_source::DataSource;
pub use mock_store::MockDataSource;
