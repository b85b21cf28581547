use crate::codec::{Format, read_log, read_log_as};
use crate::conf::PipelineConfig;
use crate::discover::read_log_dir;
use crate::stats::Metric;
use crate::table::Table;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Pipeline settings shared by the commands that read many logs.
#[derive(Args, Debug, Default)]
pub struct PipelineArgs {
    /// Path to a TOML settings file
    #[arg(long, env = "RUNLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Counter column runs are split and grouped on (e.g. `iterations`)
    #[arg(short, long)]
    pub counter: Option<String>,

    /// Extension of the log files read from directories
    #[arg(long)]
    pub ext: Option<String>,

    /// Container format of log files named on the command line
    #[arg(long)]
    pub format: Option<Format>,
}

impl PipelineArgs {
    /// Loads the settings file and applies the flags on top of it.
    pub fn resolve(&self) -> Result<PipelineConfig> {
        let mut config = PipelineConfig::load(self.config.as_deref())
            .context("Failed to load pipeline config")?;

        if let Some(counter) = &self.counter {
            config.counter = counter.clone();
        }
        if let Some(ext) = &self.ext {
            config.extension = ext.clone();
        }
        if self.format.is_some() {
            config.format = self.format;
        }

        debug!(?config, "Resolved pipeline config");
        Ok(config)
    }

    /// Same as [`Self::resolve`], with the summary-specific overrides.
    pub fn resolve_summary(
        &self,
        metric: Option<Metric>,
        value: Option<&str>,
        no_fill: bool,
    ) -> Result<PipelineConfig> {
        let mut config = self.resolve()?;
        if let Some(metric) = metric {
            config.metric = metric;
        }
        if let Some(value) = value {
            config.value = Some(value.to_string());
        }
        if no_fill {
            config.fill = false;
        }
        Ok(config)
    }
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Log files or directories of log files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

impl InputArgs {
    /// Reads every named file and every matching file in named directories.
    ///
    /// Tables come back in argument order; directory contents are sorted by
    /// file name.
    pub fn load(&self, config: &PipelineConfig) -> Result<Vec<(String, Table)>> {
        let mut tables = Vec::new();

        for path in &self.paths {
            if path.is_dir() {
                let logs = read_log_dir(path, &config.extension)
                    .with_context(|| format!("Failed to read log directory {}", path.display()))?;
                tables.extend(logs);
            } else {
                let table = match config.format {
                    Some(format) => read_log_as(path, format),
                    None => read_log(path),
                }?;
                tables.push((path.display().to_string(), table));
            }
        }

        Ok(tables)
    }
}
