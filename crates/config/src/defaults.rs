//! Serde default functions for optional config fields.

pub fn default_service_name() -> String {
    "climated".to_string()
}

pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_port() -> u16 {
    8080
}

pub fn default_max_connections() -> u32 {
    5
}
