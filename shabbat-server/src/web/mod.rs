//! Web layer for the Shabbat times API.
//!
//! Provides JSON endpoints for listing cities and looking up this week's
//! candle lighting and havdalah times.

mod dto;
mod error;
mod routes;
mod state;

pub use dto::*;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
