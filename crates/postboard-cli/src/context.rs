use crate::types::OutputFormat;
use anyhow::Result;
use once_cell::sync::OnceCell;
use postboard_client::{GraphqlClient, PostsApi};
use postboard_runtime::{Config, resolve_config_path};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Everything a handler needs, resolved once from the command line.
///
/// The config file is read eagerly; the HTTP client and the tokio runtime
/// are only built when a handler asks for them, so `config` commands never
/// touch the network stack.
pub struct ExecutionContext {
    config_path: PathBuf,
    config_exists: bool,
    config: Config,
    format: OutputFormat,
    api: OnceCell<Arc<GraphqlClient>>,
    runtime: OnceCell<Runtime>,
}

impl ExecutionContext {
    pub fn new(
        config_path: Option<&str>,
        endpoint: Option<String>,
        format: OutputFormat,
    ) -> Result<Self> {
        let config_path = resolve_config_path(config_path)?;
        let config_exists = config_path.exists();
        let config = Config::load_from(&config_path)?.with_overrides(endpoint, None);
        config.validate()?;

        Ok(Self {
            config_path,
            config_exists,
            config,
            format,
            api: OnceCell::new(),
            runtime: OnceCell::new(),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config_exists(&self) -> bool {
        self.config_exists
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn api(&self) -> Result<Arc<dyn PostsApi>> {
        let client = self.api.get_or_try_init(|| -> Result<_> {
            let client = GraphqlClient::new(self.config.client_options())?;
            Ok(Arc::new(client))
        })?;
        let api: Arc<dyn PostsApi> = client.clone();
        Ok(api)
    }

    pub fn runtime(&self) -> Result<&Runtime> {
        self.runtime.get_or_try_init(|| -> Result<_> {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .thread_name("postboard-net")
                .build()?;
            Ok(runtime)
        })
    }
}
