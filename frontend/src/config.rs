use crate::env_variable_utils::get_env_var;

pub const DEFAULT_APP_NAME: &str = "Watched Talks";
pub const DEFAULT_DETAIL_BASE_URL: &str = "https://api.media.ccc.de/public/events/";
pub const DEFAULT_LOCAL_DATA_PATH: &str = "talks.json";
pub const DEFAULT_LIST_ROOT_ID: &str = "talks";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub app_name: String,
    /// Remote catalog prefix, a talk id is appended to form its detail URL.
    pub detail_base_url: String,
    pub local_data_path: String,
    /// Id of the element the log is mounted into; it must exist in the page.
    pub list_root_id: String,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            detail_base_url: DEFAULT_DETAIL_BASE_URL.to_string(),
            local_data_path: DEFAULT_LOCAL_DATA_PATH.to_string(),
            list_root_id: DEFAULT_LIST_ROOT_ID.to_string(),
            debug: false,
        }
    }
}

impl Config {
    /// Defaults overlaid with whatever the page put into `window.ENV_CONFIG`.
    pub fn from_env() -> Self {
        Self::from_lookup(get_env_var)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            detail_base_url: lookup("DETAIL_BASE_URL").unwrap_or(defaults.detail_base_url),
            local_data_path: lookup("LOCAL_DATA_PATH").unwrap_or(defaults.local_data_path),
            list_root_id: lookup("LIST_ROOT_ID").unwrap_or(defaults.list_root_id),
            debug: lookup("DEBUG_MODE")
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.debug),
        }
    }

    pub fn detail_url(&self, id: &str) -> String {
        format!("{}{}", self.detail_base_url, urlencoding::encode(id))
    }
}
