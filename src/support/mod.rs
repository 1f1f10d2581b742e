#[cfg(feature = "anyhow")]
mod anyhow;
mod core;
#[cfg(feature = "log")]
mod log;
mod std;
