use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Content shown on the `/hello/` page.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct PageConfig {
    #[serde(default = "default_company_name")]
    pub company_name: String,
    #[serde(default = "default_challenge_description")]
    pub challenge_description: String,
}

fn default_company_name() -> String {
    "Warner Sisters Inc".to_string()
}

fn default_challenge_description() -> String {
    "A leading technology company, Warner Sisters Inc, faces a critical challenge \
     in efficiently deploying and managing its Python applications. As the company \
     grows and its application portfolio expands, the need for a scalable, resilient, \
     and automated deployment solution has become paramount."
        .to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            company_name: default_company_name(),
            challenge_description: default_challenge_description(),
        }
    }
}
