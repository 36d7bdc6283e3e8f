use serde::Deserialize;

/// Content limits applied by the workflow and contact services.
#[derive(Debug, Clone, Deserialize)]
pub struct Limits {
    #[serde(default = "default_max_prompt_chars")]
    pub max_prompt_chars: usize,
    #[serde(default = "default_min_options")]
    pub min_options: usize,
    #[serde(default = "default_max_options")]
    pub max_options: usize,
    #[serde(default = "default_max_contact_body_chars")]
    pub max_contact_body_chars: usize,
    #[serde(default = "default_report_page_size")]
    pub report_page_size: usize,
}

fn default_max_prompt_chars() -> usize {
    500
}

fn default_min_options() -> usize {
    2
}

fn default_max_options() -> usize {
    6
}

fn default_max_contact_body_chars() -> usize {
    2000
}

fn default_report_page_size() -> usize {
    20
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_prompt_chars: default_max_prompt_chars(),
            min_options: default_min_options(),
            max_options: default_max_options(),
            max_contact_body_chars: default_max_contact_body_chars(),
            report_page_size: default_report_page_size(),
        }
    }
}

impl Limits {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("QUIZ").separator("__"))
            .set_default("max_prompt_chars", 500)?
            .set_default("min_options", 2)?
            .set_default("max_options", 6)?
            .set_default("max_contact_body_chars", 2000)?
            .set_default("report_page_size", 20)?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
