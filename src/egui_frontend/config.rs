use serde::{Serialize, Deserialize};
use crate::config::load_or_default;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EguiConfig {
    #[serde(default = "defaults::min_window_size")]
    pub min_window_size: u32,
    #[serde(default = "defaults::always_on_top")]
    pub always_on_top: bool,
    #[serde(default = "defaults::window_decorated")]
    pub window_decorated: bool,
    #[serde(default = "defaults::copy_alert_time")]
    pub copy_alert_time: f32,
    #[serde(default = "defaults::font_size")]
    pub font_size: f32,
}

macro_rules! default_ {
    ($name:ident, $type:ident) => {
        pub fn $name() -> $type {
            EguiConfig::default().$name
        }
    };
}

mod defaults {
    use super::EguiConfig;
    default_!(min_window_size, u32);
    default_!(always_on_top, bool);
    default_!(window_decorated, bool);
    default_!(copy_alert_time, f32);
    default_!(font_size, f32);
}

impl Default for EguiConfig {
    fn default() -> Self {
        Self {
            min_window_size: 300,
            always_on_top: false,
            window_decorated: true,
            copy_alert_time: 1.5,
            font_size: 18.,
        }
    }
}

impl EguiConfig {
    pub fn load() -> Self {
        load_or_default("egui.cfg")
    }
}

#[test]
fn partial_config_keeps_defaults() {
    let conf: EguiConfig = crate::config::from_ron("(always_on_top: true)").unwrap();
    assert!(conf.always_on_top);
    assert_eq!(conf.font_size, EguiConfig::default().font_size);
    assert_eq!(conf.min_window_size, 300);
}
