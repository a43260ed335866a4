//! Diffuse texture decoding and caching.
//!
//! The loader decodes image files through the `image` crate, normalises them
//! to RGBA8, flips rows into the expected vertical orientation, and caches
//! results by the raw path string a material named — including failures, so
//! an unreadable file is decoded (and complained about) at most once.

use std::collections::HashMap;
use std::path::Path;

/// Stable handle into [`Model::textures`](crate::loader::Model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(usize);

impl TextureId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A decoded RGBA8 image.
///
/// `pixels` holds exactly `width * height * 4` bytes, rows flipped once
/// relative to the decoder's native top-down orientation.
#[derive(Debug, Clone)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decodes and caches diffuse textures for one load call.
///
/// The cache key is the raw, unresolved path string: identical raw strings
/// hit the cache even across base directories, and different raw strings
/// that resolve to the same file decode independently.
pub struct TextureLoader {
    cache: HashMap<String, Option<TextureId>>,
    textures: Vec<Texture>,
}

impl TextureLoader {
    pub fn new() -> Self {
        TextureLoader {
            cache: HashMap::new(),
            textures: Vec::new(),
        }
    }

    /// Loads `raw_path` resolved against `base_dir`.
    ///
    /// An empty path means "no texture" and returns `None` without touching
    /// the cache. Backslash separators are rewritten to `/` before
    /// resolving. Decode failures log a diagnostic, are cached, and return
    /// `None` — the load as a whole continues.
    pub fn load(&mut self, raw_path: &str, base_dir: &Path) -> Option<TextureId> {
        if raw_path.is_empty() {
            return None;
        }
        if let Some(&cached) = self.cache.get(raw_path) {
            return cached;
        }

        let resolved = base_dir.join(raw_path.replace('\\', "/"));
        let loaded = match image::open(&resolved) {
            Ok(decoded) => {
                let rgba = decoded.to_rgba8();
                let (width, height) = rgba.dimensions();
                let mut pixels = rgba.into_raw();
                flip_rows(&mut pixels, width, height);
                let id = TextureId(self.textures.len());
                self.textures.push(Texture {
                    width,
                    height,
                    pixels,
                });
                Some(id)
            }
            Err(err) => {
                log::error!("could not load texture from {}: {err}", resolved.display());
                None
            }
        };
        self.cache.insert(raw_path.to_owned(), loaded);
        loaded
    }

    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }

    /// Hands the decoded textures over to the finished model.
    pub fn into_textures(self) -> Vec<Texture> {
        self.textures
    }
}

impl Default for TextureLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Mirrors the image vertically: row `y` swaps with row `height - 1 - y`,
/// stopping at the midpoint, so an odd middle row stays put.
fn flip_rows(pixels: &mut [u8], width: u32, height: u32) {
    let row_len = width as usize * 4;
    let height = height as usize;
    for y in 0..height / 2 {
        let top = y * row_len;
        let bottom = (height - 1 - y) * row_len;
        for x in 0..row_len {
            pixels.swap(top + x, bottom + x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const GREEN: [u8; 4] = [0, 255, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("obj_import_tex_{}_{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_png(dir: &Path, name: &str, width: u32, height: u32, pixels: Vec<u8>) {
        image::RgbaImage::from_raw(width, height, pixels)
            .unwrap()
            .save(dir.join(name))
            .unwrap();
    }

    #[test]
    fn empty_path_is_no_texture() {
        let mut loader = TextureLoader::new();
        assert_eq!(loader.load("", Path::new("anywhere")), None);
        assert!(loader.textures().is_empty());
    }

    #[test]
    fn rows_are_flipped_on_load() {
        let dir = fixture_dir("flip");
        write_png(&dir, "two_rows.png", 1, 2, [RED, GREEN].concat());

        let mut loader = TextureLoader::new();
        let id = loader.load("two_rows.png", &dir).unwrap();
        let texture = &loader.textures()[id.index()];
        assert_eq!((texture.width, texture.height), (1, 2));
        // Decoder order is top-down RED, GREEN; loaded order is reversed.
        assert_eq!(&texture.pixels[..4], &GREEN);
        assert_eq!(&texture.pixels[4..], &RED);
    }

    #[test]
    fn odd_height_keeps_middle_row() {
        let mut pixels = [RED, GREEN, BLUE].concat();
        flip_rows(&mut pixels, 1, 3);
        assert_eq!(pixels, [BLUE, GREEN, RED].concat());
    }

    #[test]
    fn same_raw_path_hits_cache() {
        let dir = fixture_dir("cache");
        write_png(&dir, "cached.png", 1, 1, RED.to_vec());

        let mut loader = TextureLoader::new();
        let first = loader.load("cached.png", &dir);
        let second = loader.load("cached.png", &dir);
        assert_eq!(first, second);
        assert_eq!(loader.textures().len(), 1);
    }

    #[test]
    fn decode_failure_is_cached() {
        let dir = fixture_dir("missing");
        let mut loader = TextureLoader::new();
        assert_eq!(loader.load("not_there.png", &dir), None);
        assert_eq!(loader.load("not_there.png", &dir), None);
        assert!(loader.textures().is_empty());
    }
}
