pub mod app;
pub mod config;
pub mod console_interface;
pub mod core;

#[cfg(test)]
mod test;
