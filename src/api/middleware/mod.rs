pub mod session;

pub use session::{Session, SessionState, SessionTable, session_middleware};
