mod callback;
mod create_ticket;
mod login;

pub use callback::*;
pub use create_ticket::*;
pub use login::*;
