//! Theme persistence: loading builtin or on-disk themes and saving them
//! back. Builtin themes are a read-only baseline; persisting changes to
//! one requires an explicit destination via [`ThemeStore::save_as`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::errors::{Error, Result};
use crate::models::theme::Theme;
use crate::services::catppuccin::{self, Flavour};
use crate::services::codec::{decode_theme, encode_theme};

#[derive(Debug, Default)]
pub struct ThemeStore {
    name: Option<String>,
    theme: Option<Theme>,
    path: Option<PathBuf>,
    is_builtin: bool,
}

impl ThemeStore {
    pub fn new() -> ThemeStore {
        ThemeStore::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        self.is_builtin
    }

    pub fn theme(&self) -> Result<&Theme> {
        self.theme.as_ref().ok_or(Error::ThemeNotLoaded)
    }

    pub fn theme_mut(&mut self) -> Result<&mut Theme> {
        self.theme.as_mut().ok_or(Error::ThemeNotLoaded)
    }

    /// Resolves a builtin flavour name first, otherwise treats the name
    /// as a filesystem path.
    pub fn load_named(&mut self, name: &str) -> Result<&Theme> {
        if let Ok(flavour) = name.parse::<Flavour>() {
            let theme = catppuccin::theme(flavour)?;
            debug!(%flavour, "loaded builtin theme");
            return Ok(self.install(name.to_string(), theme, None, true));
        }
        self.load_path(Path::new(name))
    }

    pub fn load_path(&mut self, path: &Path) -> Result<&Theme> {
        let bytes = fs::read(path)?;
        let theme = decode_theme(&bytes)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        debug!(path = %path.display(), "loaded theme file");
        Ok(self.install(name, theme, Some(path.to_path_buf()), false))
    }

    /// Adopts an in-memory theme (e.g. captured live state). It has no
    /// destination yet, so `save` requires a `save_as` first.
    pub fn adopt(&mut self, name: impl Into<String>, theme: Theme) -> &Theme {
        self.install(name.into(), theme, None, false)
    }

    /// Re-encodes to the remembered path. Refused for builtin themes and
    /// for themes that never had a destination.
    pub fn save(&self) -> Result<()> {
        let theme = self.theme()?;
        if self.is_builtin {
            return Err(Error::CannotSaveOverDefaultTheme);
        }
        let path = self
            .path
            .as_ref()
            .ok_or(Error::CannotSaveOverDefaultTheme)?;
        let bytes = encode_theme(theme)?;
        fs::write(path, bytes)?;
        info!(path = %path.display(), "saved theme");
        Ok(())
    }

    /// Encodes to an explicit path and adopts it as the new save target.
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        let theme = self.theme()?;
        let bytes = encode_theme(theme)?;
        fs::write(path, bytes)?;
        self.path = Some(path.to_path_buf());
        self.is_builtin = false;
        info!(path = %path.display(), "saved theme");
        Ok(())
    }

    fn install(
        &mut self,
        name: String,
        theme: Theme,
        path: Option<PathBuf>,
        is_builtin: bool,
    ) -> &Theme {
        self.name = Some(name);
        self.path = path;
        self.is_builtin = is_builtin;
        self.theme.insert(theme)
    }
}
