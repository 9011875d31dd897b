use std::path::Path;

use postboard_runtime::Config;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, StatusBadge,
};

pub fn present_config(
    path: &Path,
    exists: bool,
    config: &Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        path: path.display().to_string(),
        exists,
        endpoint: config.endpoint.clone(),
        page_size: config.page_size,
        timeout_secs: config.timeout_secs,
    };

    let mut result = CommandResultViewModel::new(content);
    if !exists {
        result = result
            .with_badge(StatusBadge::info("No config file; using defaults"))
            .with_suggestion(Guidance::new("Write one").with_command("postboard config init"));
    }
    result
}

pub fn present_config_init(path: &Path, created: bool) -> CommandResultViewModel<ConfigInitViewModel> {
    let badge = if created {
        StatusBadge::success("Config file written")
    } else {
        StatusBadge::info("Config file already exists; left unchanged")
    };

    CommandResultViewModel::new(ConfigInitViewModel {
        path: path.display().to_string(),
        created,
    })
    .with_badge(badge)
}
