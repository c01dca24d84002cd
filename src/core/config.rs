use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the config file, or the effective defaults when there is none.
    pub fn print(cfg: &Config) -> AppResult<()> {
        let path = Config::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            println!("📄 {}\n", path.display());
            println!("{}", content);
        } else {
            warning(format!(
                "No config file at {}; showing effective settings.",
                path.display()
            ));
            println!("{}", cfg.to_yaml()?);
        }
        Ok(())
    }

    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist, run `rtimesheet init` first",
                path.display()
            )));
        }

        let ed = editor
            .map(str::to_string)
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            });

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot launch '{}': {}", ed, e)))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{}' exited with {}", ed, status)));
        }
        Ok(())
    }
}
