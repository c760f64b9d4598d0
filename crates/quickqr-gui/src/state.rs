use quickqr_core::config::FetchConfig;
use quickqr_core::request::EcLevel;

/// Overall UI state.
pub struct UIState {
    /// Current contents of the URL input box (uncommitted).
    pub input_text: String,
    /// True until the input box has grabbed focus once at startup.
    pub focus_input: bool,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            input_text: String::new(),
            focus_input: true,
            log_messages: Vec::new(),
        }
    }
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    pub image_size: Option<[usize; 2]>,
    pub viewing_label: String,
}

pub const EC_LEVEL_NAMES: &[&str] = &["L", "M", "Q", "H"];

/// Fetch parameters as editable UI fields.
pub struct ConfigState {
    pub endpoint: String,
    pub size: u32,
    pub ec_level_index: usize,
    pub save_name: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self::from_fetch_config(&FetchConfig::default())
    }
}

impl ConfigState {
    pub fn ec_level(&self) -> EcLevel {
        match self.ec_level_index {
            0 => EcLevel::L,
            1 => EcLevel::M,
            3 => EcLevel::H,
            _ => EcLevel::Q,
        }
    }

    pub fn to_fetch_config(&self) -> FetchConfig {
        FetchConfig {
            endpoint: self.endpoint.clone(),
            size: self.size,
            ec_level: self.ec_level(),
            save_name: self.save_name.clone(),
        }
    }

    pub fn from_fetch_config(config: &FetchConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            size: config.size,
            ec_level_index: match config.ec_level {
                EcLevel::L => 0,
                EcLevel::M => 1,
                EcLevel::Q => 2,
                EcLevel::H => 3,
            },
            save_name: config.save_name.clone(),
        }
    }
}
