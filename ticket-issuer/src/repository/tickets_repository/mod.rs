mod dto;
mod tickets_repository;
mod tickets_repository_impl;

pub use dto::Ticket;
pub use tickets_repository::*;
pub use tickets_repository_impl::*;
