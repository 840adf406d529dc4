//! Directory scanning and year grouping for emission rasters.
//!
//! Filenames carry the data year in their final underscore-separated
//! segment, e.g. `odiac_co2_1km_2019.tif` or `co2_usa_20121231.tif`
//! (only the first four digits of the segment are read).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{RasterIoError, Result};

/// Index of raster files grouped by year.
///
/// Files within a year are sorted by path so that aggregation order is
/// deterministic regardless of directory iteration order.
#[derive(Debug, Clone)]
pub struct RasterIndex {
    files_by_year: BTreeMap<i32, Vec<PathBuf>>,
}

impl RasterIndex {
    /// Scan a directory for `.tif`/`.tiff` files and group them by year.
    ///
    /// Files whose names yield no parseable year are skipped with a
    /// warning rather than failing the whole scan.
    pub fn scan(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut files_by_year: BTreeMap<i32, Vec<PathBuf>> = BTreeMap::new();

        for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let is_tiff = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("tif") || e.eq_ignore_ascii_case("tiff"))
                .unwrap_or(false);
            if !is_tiff {
                continue;
            }

            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match year_from_filename(name) {
                Some(year) => {
                    files_by_year
                        .entry(year)
                        .or_default()
                        .push(path.to_path_buf());
                }
                None => {
                    warn!(path = %path.display(), "skipping raster with no parseable year");
                }
            }
        }

        if files_by_year.is_empty() {
            return Err(RasterIoError::NoRasters(dir.to_path_buf()));
        }

        for files in files_by_year.values_mut() {
            files.sort();
        }

        debug!(
            years = files_by_year.len(),
            files = files_by_year.values().map(|v| v.len()).sum::<usize>(),
            "indexed raster directory"
        );

        Ok(Self { files_by_year })
    }

    /// All indexed years, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.files_by_year.keys().copied().collect()
    }

    /// Earliest indexed year.
    pub fn min_year(&self) -> Option<i32> {
        self.files_by_year.keys().next().copied()
    }

    /// Latest indexed year.
    pub fn max_year(&self) -> Option<i32> {
        self.files_by_year.keys().next_back().copied()
    }

    /// Sorted file list for one year.
    pub fn files_for_year(&self, year: i32) -> Option<&[PathBuf]> {
        self.files_by_year.get(&year).map(|v| v.as_slice())
    }

    /// Iterate over (year, files) pairs in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &[PathBuf])> {
        self.files_by_year.iter().map(|(y, f)| (*y, f.as_slice()))
    }

    /// Number of indexed years.
    pub fn len(&self) -> usize {
        self.files_by_year.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.files_by_year.is_empty()
    }
}

/// Parse the year from a raster file stem.
///
/// Takes the final underscore-separated segment and reads its first
/// four characters as a year, so `odiac_co2_1km_2019` -> 2019 and
/// `co2_usa_20121231` -> 2012.
pub fn year_from_filename(stem: &str) -> Option<i32> {
    let last = stem.rsplit('_').next()?;
    last.get(..4)?.parse().ok()
}
