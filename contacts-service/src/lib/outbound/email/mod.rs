pub mod smtp;

pub use smtp::SmtpMailDispatcher;
