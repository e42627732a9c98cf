mod access_token;
mod ticket;
mod ticket_count;
mod ticket_created;

pub use access_token::*;
pub use ticket::*;
pub use ticket_count::*;
pub use ticket_created::*;
