pub mod mock_projection_store;

pub use mock_projection_store::MockProjectionStore;
