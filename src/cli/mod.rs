mod server;

pub use server::{app, serve};
