use std::{
	fmt,
	io,
	path::{Path, PathBuf}
};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SITE_DIR: &str = "frontend/dist";

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
	pub port: u16,
	pub site_dir: PathBuf
}

#[derive(Debug)]
pub enum ConfigErr {
	SiteDirUnreadable(PathBuf, io::Error),
	NotADirectory(PathBuf)
}

impl fmt::Display for ConfigErr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::SiteDirUnreadable(dir, err) => write!(
				f,
				"SITE_DIR ({}) does not point to a valid directory: {err}. Build the frontend (trunk build) or set SITE_DIR in .env",
				dir.display()
			),
			Self::NotADirectory(dir) => write!(f, "SITE_DIR ({}) is not a directory", dir.display())
		}
	}
}

impl std::error::Error for ConfigErr {}

impl Config {
	/// Reads from the environment, and `.env` if one is around
	pub fn from_env() -> Self {
		Self::from_lookup(|key| dotenv::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		macro_rules! lookup_num{
			($key:expr, $default:expr, $type:ident) => {
				lookup($key)
					.and_then(|v| v.parse::<$type>().ok())
					.unwrap_or($default)
			}
		}

		let port = lookup_num!("BACKEND_PORT", DEFAULT_PORT, u16);
		let site_dir = lookup("SITE_DIR")
			.filter(|d| !d.is_empty())
			.map_or_else(|| PathBuf::from(DEFAULT_SITE_DIR), PathBuf::from);

		Self { port, site_dir }
	}

	pub fn check_site_dir(&self) -> Result<&Path, ConfigErr> {
		let mtd = std::fs::metadata(&self.site_dir)
			.map_err(|e| ConfigErr::SiteDirUnreadable(self.site_dir.clone(), e))?;

		if mtd.is_dir() {
			Ok(&self.site_dir)
		} else {
			Err(ConfigErr::NotADirectory(self.site_dir.clone()))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn config(vars: &[(&str, &str)]) -> Config {
		let vars = vars.iter()
			.map(|(k, v)| ((*k).to_string(), (*v).to_string()))
			.collect::<HashMap<_, _>>();

		Config::from_lookup(|key| vars.get(key).cloned())
	}

	#[test]
	fn defaults() {
		assert_eq!(config(&[]), Config { port: DEFAULT_PORT, site_dir: DEFAULT_SITE_DIR.into() });
	}

	#[test]
	fn reads_vars() {
		let cfg = config(&[("BACKEND_PORT", "3000"), ("SITE_DIR", "/srv/warriors")]);
		assert_eq!(cfg.port, 3000);
		assert_eq!(cfg.site_dir, PathBuf::from("/srv/warriors"));
	}

	#[test]
	fn junk_falls_back() {
		let cfg = config(&[("BACKEND_PORT", "seventy"), ("SITE_DIR", "")]);
		assert_eq!(cfg, Config { port: DEFAULT_PORT, site_dir: DEFAULT_SITE_DIR.into() });

		assert_eq!(config(&[("BACKEND_PORT", "70000")]).port, DEFAULT_PORT);
	}

	#[test]
	fn site_dir_must_be_a_dir() {
		let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));

		let ok = Config { port: DEFAULT_PORT, site_dir: manifest.to_path_buf() };
		assert_eq!(ok.check_site_dir().unwrap(), manifest);

		let file = Config { port: DEFAULT_PORT, site_dir: manifest.join("Cargo.toml") };
		assert!(matches!(file.check_site_dir(), Err(ConfigErr::NotADirectory(_))));

		let missing = Config { port: DEFAULT_PORT, site_dir: manifest.join("definitely-not-here") };
		assert!(matches!(missing.check_site_dir(), Err(ConfigErr::SiteDirUnreadable(..))));
	}
}
