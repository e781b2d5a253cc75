//! Session Use Cases

mod resolve_session;

pub use resolve_session::ResolveSessionUseCase;
