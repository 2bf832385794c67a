use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

use log::error;
use serde::{Deserialize, Serialize};

use netlens_core::data::http::Method;
use netlens_core::preferences::PreferenceStore;

use crate::APP_NAME;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigData {
    preferences: BTreeMap<String, String>,
    last_url: String,
    last_method: Method,
    last_body: String,
}

impl Default for ConfigData {
    fn default() -> Self {
        ConfigData {
            preferences: BTreeMap::default(),
            last_url: "https://httpbin.org/get?name=J%C3%B6rg+M&q=a%2Bb".to_string(),
            last_method: Method::GET,
            last_body: String::new(),
        }
    }
}

impl ConfigData {
    fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home_dir| home_dir.join(APP_NAME).join("config.json"))
    }

    pub fn load() -> Self {
        match Self::config_path().map(File::open) {
            Some(Ok(mut file)) => {
                let mut content = String::new();
                match file.read_to_string(&mut content) {
                    Ok(_) => serde_json::from_str(content.as_str()).unwrap_or_else(|err| {
                        error!("parse config failed: {}", err);
                        Self::default()
                    }),
                    Err(_) => Self::default(),
                }
            }
            _ => Self::default(),
        }
    }

    fn save(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string(self)?;
        if let Some(config_path) = Self::config_path() {
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut file = File::create(config_path)?;
            file.write_all(json.as_bytes())?;
        }
        Ok(())
    }

    fn save_or_log(&self) {
        if let Err(err) = self.save() {
            error!("save config failed: {}", err);
        }
    }

    pub fn last_url(&self) -> String {
        self.last_url.clone()
    }
    pub fn last_method(&self) -> Method {
        self.last_method
    }
    pub fn last_body(&self) -> String {
        self.last_body.clone()
    }
    pub fn set_last_request(&mut self, method: Method, url: String, body: String) {
        self.last_method = method;
        self.last_url = url;
        self.last_body = body;
        self.save_or_log();
    }
}

impl PreferenceStore for ConfigData {
    fn get(&self, key: &str) -> Option<String> {
        self.preferences.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        if self.preferences.get(key).map(String::as_str) == Some(value) {
            return;
        }
        self.preferences.insert(key.to_string(), value.to_string());
        self.save_or_log();
    }
}
