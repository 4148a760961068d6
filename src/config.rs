// src/config.rs

/// Startup configuration. The original deployment hardcoded these as
/// module-level globals; here they are carried explicitly in app state.
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub model_name: String,
    pub temperature: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5001,
            model_name: "gpt-3.5-turbo".to_string(),
            temperature: 0.9,
        }
    }
}
