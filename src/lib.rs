pub mod contact;
pub mod notify;
pub mod projects;
pub mod sections;
pub mod skills;
pub mod starfield;
pub mod telemetry;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
