mod init_tracing;

pub use init_tracing::init_tracing;
