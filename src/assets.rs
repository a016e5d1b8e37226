//! file: assets.rs
//! author: Jacob Xie
//! date: 2025/12/16 22:40:13 Tuesday
//! brief: tile sprites and message font, read once at startup

use std::{
    borrow::Cow,
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use gpui::{App, Image, ImageFormat, SharedString};
use thiserror::Error;

use crate::game::Sprite;

pub const ASSET_DIR: &str = "assets";
pub const FONT_FILE: &str = "DejaVuSansMono.ttf";
pub const FONT_FAMILY: &str = "DejaVu Sans Mono";

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Error {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not register font {family}: {reason}")]
    Font { family: String, reason: String },
}

#[derive(Clone)]
pub struct Assets {
    pub hidden: Arc<Image>,
    pub revealed: Arc<Image>,
    pub mine: Arc<Image>,
    pub exploded_mine: Arc<Image>,
    pub font_family: SharedString,
    font: Arc<Vec<u8>>,
}

/// `assets/` next to the executable, else `assets/` in the working directory.
pub fn asset_dir() -> PathBuf {
    let exe = std::env::current_exe().ok();
    let exe_dir = exe.as_deref().and_then(Path::parent);
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_asset_dir(exe_dir, &cwd)
}

pub fn resolve_asset_dir(exe_dir: Option<&Path>, cwd: &Path) -> PathBuf {
    exe_dir
        .map(|dir| dir.join(ASSET_DIR))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| cwd.join(ASSET_DIR))
}

impl Assets {
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, AssetError> {
        let dir = dir.as_ref();
        log::info!("Loading assets from {}", dir.display());

        let png = |name: &str| -> Result<Arc<Image>, AssetError> {
            let bytes = read(&dir.join(name))?;
            Ok(Arc::new(Image::from_bytes(ImageFormat::Png, bytes)))
        };

        Ok(Self {
            hidden: png("hidden.png")?,
            revealed: png("revealed.png")?,
            mine: png("mine.png")?,
            exploded_mine: png("exploded_mine.png")?,
            font_family: FONT_FAMILY.into(),
            font: Arc::new(read(&dir.join(FONT_FILE))?),
        })
    }

    pub fn image(&self, sprite: Sprite) -> Arc<Image> {
        match sprite {
            Sprite::Hidden => self.hidden.clone(),
            Sprite::Revealed => self.revealed.clone(),
            Sprite::Mine => self.mine.clone(),
            Sprite::ExplodedMine => self.exploded_mine.clone(),
        }
    }

    /// Makes the message font available to the text system.
    pub fn register_font(&self, cx: &mut App) -> Result<(), AssetError> {
        cx.text_system()
            .add_fonts(vec![Cow::Owned(self.font.as_ref().clone())])
            .map_err(|err| AssetError::Font {
                family: self.font_family.to_string(),
                reason: err.to_string(),
            })
    }
}

fn read(path: &Path) -> Result<Vec<u8>, AssetError> {
    fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_assets() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(ASSET_DIR)
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gpui-mines-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn bundled_assets_load() {
        let assets = Assets::load(source_assets()).unwrap();
        assert!(!assets.hidden.bytes().is_empty());
        assert!(!assets.exploded_mine.bytes().is_empty());
        assert!(!assets.font.is_empty());
        assert_eq!(assets.font_family.to_string(), FONT_FAMILY);
    }

    #[test]
    fn missing_file_names_its_path() {
        let dir = source_assets().join("does-not-exist");
        let err = Assets::load(&dir).err().unwrap();
        match &err {
            AssetError::Read { path, source } => {
                assert_eq!(path, &dir.join("hidden.png"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("hidden.png"));
    }

    #[test]
    fn asset_dir_prefers_folder_next_to_executable() {
        let root = scratch_dir("exe");
        let exe_dir = root.join("bin");
        let cwd = root.join("work");
        fs::create_dir_all(exe_dir.join(ASSET_DIR)).unwrap();
        fs::create_dir_all(cwd.join(ASSET_DIR)).unwrap();

        assert_eq!(
            resolve_asset_dir(Some(exe_dir.as_path()), &cwd),
            exe_dir.join(ASSET_DIR)
        );
        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn asset_dir_falls_back_to_working_directory() {
        let root = scratch_dir("cwd");
        let exe_dir = root.join("bin");
        let cwd = root.join("work");
        fs::create_dir_all(&exe_dir).unwrap();

        assert_eq!(resolve_asset_dir(Some(exe_dir.as_path()), &cwd), cwd.join(ASSET_DIR));
        assert_eq!(resolve_asset_dir(None, &cwd), cwd.join(ASSET_DIR));
        fs::remove_dir_all(&root).unwrap();
    }
}
