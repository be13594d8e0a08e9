use std::{
    io::{self, ErrorKind, Write},
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{
    ser::{Formatter, PrettyFormatter},
    Value,
};
use tokio::{fs, sync::Mutex};

use crate::{
    error::AppError,
    model::ban::{BanList, BanRecord},
};

const EMPTY_BAN_LIST: &str = "{}";

/// File-backed global ban list.
///
/// Reading never fails: a missing, empty, unreadable or malformed file is replaced
/// with an empty list, and a single malformed record is skipped. Writing replaces
/// the whole file and surfaces I/O errors.
///
/// Records keep their file order and stored time text, so saving a list that was
/// just loaded leaves the file byte for byte the same.
///
/// Every public operation takes the store's lock, so a read-modify-write made
/// through `update` cannot interleave with another command's update.
pub struct BanStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl BanStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current ban list, resetting the file when it is not usable.
    ///
    /// # Returns
    /// - `BanList` - Persisted bans, or an empty list if the file was missing or corrupt
    pub async fn load(&self) -> BanList {
        let _guard = self.lock.lock().await;
        self.load_or_reset().await
    }

    /// Overwrites the file with the given ban list.
    ///
    /// # Returns
    /// - `Ok(())` - File replaced
    /// - `Err(AppError::IoErr)` - File could not be written
    pub async fn save(&self, bans: &BanList) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        self.write(bans).await
    }

    /// Applies `mutate` to a fresh copy of the ban list and persists the result.
    ///
    /// The store stays locked from load to save.
    ///
    /// # Arguments
    /// - `mutate` - Closure editing the list; its return value is passed through
    ///
    /// # Returns
    /// - `Ok(T)` - Value returned by `mutate` once the list is saved
    /// - `Err(AppError::IoErr)` - File could not be written
    pub async fn update<F, T>(&self, mutate: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut BanList) -> T,
    {
        let _guard = self.lock.lock().await;

        let mut bans = self.load_or_reset().await;
        let result = mutate(&mut bans);
        self.write(&bans).await?;

        Ok(result)
    }

    async fn load_or_reset(&self) -> BanList {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("Ban list {} not found, creating it", self.path.display());
                self.reset().await;
                return BanList::new();
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read ban list {}, resetting it: {}",
                    self.path.display(),
                    e
                );
                self.reset().await;
                return BanList::new();
            }
        };

        if contents.trim().is_empty() {
            tracing::warn!("Ban list {} is empty, resetting it", self.path.display());
            self.reset().await;
            return BanList::new();
        }

        let entries = match serde_json::from_str::<IndexMap<String, Value>>(&contents) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    "Ban list {} is malformed, resetting it: {}",
                    self.path.display(),
                    e
                );
                self.reset().await;
                return BanList::new();
            }
        };

        let mut bans = BanList::with_capacity(entries.len());
        for (user_id, entry) in entries {
            match serde_json::from_value::<BanRecord>(entry) {
                Ok(record) => {
                    bans.insert(user_id, record);
                }
                Err(e) => tracing::warn!(
                    "Skipping malformed ban record for user {} in {}: {}",
                    user_id,
                    self.path.display(),
                    e
                ),
            }
        }

        bans
    }

    async fn reset(&self) {
        if let Err(e) = self.write_raw(EMPTY_BAN_LIST.as_bytes()).await {
            tracing::error!("Failed to reset ban list {}: {}", self.path.display(), e);
        }
    }

    async fn write(&self, bans: &BanList) -> Result<(), AppError> {
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter::new());
        bans.serialize(&mut serializer)?;

        self.write_raw(&buf).await?;

        Ok(())
    }

    /// Writes to a sibling temporary file and renames it over the list.
    async fn write_raw(&self, contents: &[u8]) -> std::io::Result<()> {
        let mut tmp_path = self.path.clone().into_os_string();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        fs::write(&tmp_path, contents).await?;
        fs::rename(&tmp_path, &self.path).await
    }
}

/// Four-space pretty printer that escapes everything outside printable ASCII as
/// `\uXXXX`, using surrogate pairs above the basic multilingual plane.
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl AsciiFormatter<'_> {
    fn new() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(b"    "),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut units = [0u16; 2];
        let mut start = 0;

        for (index, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }

            writer.write_all(fragment[start..index].as_bytes())?;
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + ch.len_utf8();
        }

        writer.write_all(fragment[start..].as_bytes())
    }
}
