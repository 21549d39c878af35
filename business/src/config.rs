use roster_states::State;
use std::any::Any;
use ustr::Ustr;

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
        }
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(feature = "env_test") {
                "https://roster-test.codarize.com".to_owned()
            } else if cfg!(feature = "env_pr") {
                "https://roster-pr.codarize.com".to_owned()
            } else if cfg!(feature = "env_nightly") {
                "https://roster-nightly.codarize.com".to_owned()
            } else {
                "https://roster.codarize.com".to_owned()
            },
        }
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}
