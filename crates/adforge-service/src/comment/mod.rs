//! Comment service.

mod service;

pub use service::CommentService;
