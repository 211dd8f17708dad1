use crate::{error, info};
use std::fs;
use std::io;
use std::path::Path;

pub const DEFAULT_STANDOFF_NM: u32 = 10;
pub const DEFAULT_MAX_WARP_NM: u32 = 100;

/// Persisted user settings.
///
/// The on-disk form is a plain text file: a `#` header line, then one
/// `Key value` pair per line. Loading is lenient, anything that does not
/// parse keeps its default, and the file is rewritten in canonical form
/// right after loading so a hand-edited or truncated file heals itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    translucent: bool,
    standoff_nm: u32,
    max_warp_nm: u32,
    burn_fuel: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            translucent: true,
            standoff_nm: DEFAULT_STANDOFF_NM,
            max_warp_nm: DEFAULT_MAX_WARP_NM,
            burn_fuel: false,
        }
    }
}

impl Preferences {
    /// Reads preferences from `path`, falling back to defaults for anything
    /// missing or malformed, and rewrites the file afterwards.
    pub fn load(path: &Path) -> Self {
        let mut prefs = Self::default();
        match fs::read_to_string(path) {
            Ok(contents) => {
                info!("Reading preferences from {}", path.display());
                prefs.apply_lines(&contents);
            }
            Err(err) => {
                info!("No preferences at {}: {err}. Using defaults.", path.display());
            }
        }
        if let Err(err) = prefs.save(path) {
            error!("Failed to write preferences to {}: {err}", path.display());
        }
        prefs
    }

    /// Writes the canonical preference file.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let contents = format!(
            "# Simple Warp preferences\nTranslucent {}\nWarp_Dst {}\nWarp_Max {}\nWarp_Use {}\n",
            self.translucent, self.standoff_nm, self.max_warp_nm, self.burn_fuel
        );
        fs::write(path, contents)
    }

    fn apply_lines(&mut self, contents: &str) {
        for line in contents.lines() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 2 {
                continue;
            }
            match fields[0].to_uppercase().as_str() {
                "TRANSLUCENT" => self.translucent = parse_bool(fields[1]),
                "WARP_USE" => self.burn_fuel = parse_bool(fields[1]),
                "WARP_DST" => {
                    if let Ok(value) = fields[1].parse() {
                        self.standoff_nm = value;
                    }
                }
                "WARP_MAX" => {
                    if let Ok(value) = fields[1].parse() {
                        self.max_warp_nm = value;
                    }
                }
                _ => {}
            }
        }
    }

    pub fn translucent(&self) -> bool { self.translucent }

    pub fn standoff_nm(&self) -> u32 { self.standoff_nm }

    pub fn max_warp_nm(&self) -> u32 { self.max_warp_nm }

    pub fn burn_fuel(&self) -> bool { self.burn_fuel }

    pub fn set_translucent(&mut self, translucent: bool) { self.translucent = translucent; }

    pub fn set_standoff_nm(&mut self, standoff_nm: u32) { self.standoff_nm = standoff_nm; }

    pub fn set_max_warp_nm(&mut self, max_warp_nm: u32) { self.max_warp_nm = max_warp_nm; }

    pub fn set_burn_fuel(&mut self, burn_fuel: bool) { self.burn_fuel = burn_fuel; }

    /// Restores the warp fields to their defaults. Window translucency is a
    /// cosmetic setting and survives the reset.
    pub fn reset_warp_defaults(&mut self) {
        self.standoff_nm = DEFAULT_STANDOFF_NM;
        self.max_warp_nm = DEFAULT_MAX_WARP_NM;
        self.burn_fuel = false;
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_uppercase().as_str(), "1" | "YES" | "TRUE")
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MAX_WARP_NM, DEFAULT_STANDOFF_NM, Preferences};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults_and_heals() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Simple_Warp.prf");

        let prefs = Preferences::load(&path);
        assert_eq!(prefs, Preferences::default());
        assert!(prefs.translucent());
        assert!(!prefs.burn_fuel());
        assert_eq!(prefs.standoff_nm(), DEFAULT_STANDOFF_NM);
        assert_eq!(prefs.max_warp_nm(), DEFAULT_MAX_WARP_NM);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Simple Warp preferences\n"));
        assert!(written.contains("Warp_Dst 10"));
        assert!(written.contains("Warp_Max 100"));
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Simple_Warp.prf");

        let mut prefs = Preferences::default();
        prefs.set_translucent(false);
        prefs.set_standoff_nm(25);
        prefs.set_max_warp_nm(400);
        prefs.set_burn_fuel(true);
        prefs.save(&path).unwrap();

        assert_eq!(Preferences::load(&path), prefs);
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Simple_Warp.prf");
        fs::write(&path, "warp_dst 33\nWARP_MAX 250\ntranslucent YES\n").unwrap();

        let prefs = Preferences::load(&path);
        assert_eq!(prefs.standoff_nm(), 33);
        assert_eq!(prefs.max_warp_nm(), 250);
        assert!(prefs.translucent());
    }

    #[test]
    fn test_truthy_tokens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Simple_Warp.prf");
        for token in ["1", "YES", "yes", "TRUE", "true"] {
            fs::write(&path, format!("Warp_Use {token}\n")).unwrap();
            assert!(Preferences::load(&path).burn_fuel(), "token {token} should burn fuel");
        }
        for token in ["0", "NO", "false", "maybe"] {
            fs::write(&path, format!("Warp_Use {token}\n")).unwrap();
            assert!(!Preferences::load(&path).burn_fuel(), "token {token} should not burn fuel");
        }
    }

    #[test]
    fn test_malformed_lines_keep_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Simple_Warp.prf");
        fs::write(
            &path,
            "# Simple Warp preferences\nWarp_Dst banana\nWarp_Max\nWarp_Max 1 2 3\nBogus_Key 7\nWarp_Use 1\n",
        )
        .unwrap();

        let prefs = Preferences::load(&path);
        assert_eq!(prefs.standoff_nm(), DEFAULT_STANDOFF_NM);
        assert_eq!(prefs.max_warp_nm(), DEFAULT_MAX_WARP_NM);
        assert!(prefs.burn_fuel());

        // The rewrite replaces the damaged file with a canonical one.
        let healed = fs::read_to_string(&path).unwrap();
        assert!(healed.contains("Warp_Dst 10"));
        assert!(!healed.contains("banana"));
    }
}
