//! Gemfile reading and rewriting
//!
//! Handles:
//! - `gem` declarations with version constraints
//! - Single or double quoted names, optional parentheses
//! - Trailing options (`require: false`, `group: :test`) and comments
//!
//! Pinning rewrites only the version arguments of the line; everything
//! else is kept byte for byte.

use crate::domain::{GemDeclaration, VersionSpec};
use crate::error::ManifestError;
use crate::manifest::ManifestStore;
use crate::parser::RubyVersionParser;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// gem 'name' / gem("name"
static GEM_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\s*gem\s*\(?\s*)(?:'([A-Za-z0-9_.\-]+)'|"([A-Za-z0-9_.\-]+)")"#).unwrap()
});

// , 'string argument'
static STRING_ARG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*,\s*(?:'([^']*)'|"([^"]*)")"#).unwrap());

/// A `gem` line split into the parts needed to rewrite it
struct GemLine<'a> {
    /// Indentation and `gem` keyword, up to the opening quote of the name
    head: &'a str,
    quote: char,
    name: &'a str,
    constraints: Vec<VersionSpec>,
    /// Everything after the version arguments
    rest: &'a str,
}

impl<'a> GemLine<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let caps = GEM_LINE_RE.captures(line)?;
        let head = caps.get(1)?.as_str();
        let (quote, name) = match (caps.get(2), caps.get(3)) {
            (Some(m), _) => ('\'', m.as_str()),
            (None, Some(m)) => ('"', m.as_str()),
            (None, None) => return None,
        };

        let mut rest = &line[caps.get(0)?.end()..];
        let mut constraints = Vec::new();
        while let Some(arg) = STRING_ARG_RE.captures(rest) {
            let Some(value) = arg.get(1).or_else(|| arg.get(2)) else {
                break;
            };
            let Some(spec) = RubyVersionParser.parse(value.as_str()) else {
                break;
            };
            constraints.push(spec);
            rest = &rest[arg.get(0)?.end()..];
        }

        Some(Self {
            head,
            quote,
            name,
            constraints,
            rest,
        })
    }

    /// The line with all version arguments replaced by an exact pin
    fn pinned(&self, version: &str) -> String {
        format!(
            "{head}{q}{name}{q}, {q}{version}{q}{rest}",
            head = self.head,
            q = self.quote,
            name = self.name,
            version = version,
            rest = self.rest
        )
    }
}

/// A Gemfile loaded into memory with pending pins
#[derive(Debug, Clone)]
pub struct Gemfile {
    path: PathBuf,
    lines: Vec<String>,
    line_ending: &'static str,
    trailing_newline: bool,
    /// Rewritten lines keyed by line index
    pending: BTreeMap<usize, String>,
    /// Whether to run in dry-run mode (no file modifications)
    dry_run: bool,
}

impl Gemfile {
    /// Read a Gemfile from disk
    pub fn load(path: impl AsRef<Path>, dry_run: bool) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
        Ok(Self::from_content(path, &content, dry_run))
    }

    /// Build from already loaded content
    pub fn from_content(path: impl Into<PathBuf>, content: &str, dry_run: bool) -> Self {
        let line_ending = if content.contains("\r\n") { "\r\n" } else { "\n" };
        Self {
            path: path.into(),
            lines: content.lines().map(str::to_string).collect(),
            line_ending,
            trailing_newline: content.ends_with('\n'),
            pending: BTreeMap::new(),
            dry_run,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if this Gemfile is in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// All gem declarations, in file order
    pub fn declarations(&self) -> Vec<GemDeclaration> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| {
                let parsed = GemLine::parse(line)?;
                Some(GemDeclaration::new(parsed.name, index, parsed.constraints))
            })
            .collect()
    }

    /// Current content with pending pins applied
    pub fn content(&self) -> String {
        let mut content = self
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| self.pending.get(&index).unwrap_or(line).as_str())
            .collect::<Vec<_>>()
            .join(self.line_ending);
        if self.trailing_newline {
            content.push_str(self.line_ending);
        }
        content
    }
}

impl ManifestStore for Gemfile {
    fn find(&self, name: &str) -> Option<GemDeclaration> {
        self.declarations().into_iter().find(|d| d.name == name)
    }

    fn update(&mut self, declaration: &GemDeclaration, version: &str) {
        let Some(line) = self.lines.get(declaration.line) else {
            return;
        };
        let Some(parsed) = GemLine::parse(line) else {
            return;
        };
        if parsed.name != declaration.name {
            return;
        }
        let rewritten = parsed.pinned(version);
        self.pending.insert(declaration.line, rewritten);
    }

    fn pending(&self) -> usize {
        self.pending.len()
    }

    fn write(&mut self) -> Result<bool, ManifestError> {
        if self.pending.is_empty() || self.dry_run {
            return Ok(false);
        }

        fs::write(&self.path, self.content())
            .map_err(|e| ManifestError::write_error(&self.path, e))?;

        for (index, line) in std::mem::take(&mut self.pending) {
            self.lines[index] = line;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VersionSpecKind;

    const GEMFILE: &str = r#"source "https://rubygems.org"

ruby "3.2.2"

gem "rails", "~> 7.0.8"
gem 'rack', '>= 2.2', '< 3', require: false
gem "puma"
# gem "unused", "1.0"

group :test do
  gem("rspec-rails", "6.0.3") # pinned for now
  gem 'webmock', github: 'bblimke/webmock'
end
"#;

    fn gemfile() -> Gemfile {
        Gemfile::from_content("Gemfile", GEMFILE, false)
    }

    #[test]
    fn test_declarations() {
        let names: Vec<String> = gemfile().declarations().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["rails", "rack", "puma", "rspec-rails", "webmock"]);
    }

    #[test]
    fn test_find_with_constraints() {
        let rack = gemfile().find("rack").unwrap();
        assert_eq!(rack.line, 5);
        assert_eq!(rack.constraints.len(), 2);
        assert_eq!(rack.constraints[0].kind, VersionSpecKind::GreaterOrEqual);
        assert_eq!(rack.constraints[1].kind, VersionSpecKind::Less);
    }

    #[test]
    fn test_find_without_constraints() {
        let puma = gemfile().find("puma").unwrap();
        assert!(puma.constraints.is_empty());

        // a git source is not a version argument
        let webmock = gemfile().find("webmock").unwrap();
        assert!(webmock.constraints.is_empty());
    }

    #[test]
    fn test_find_ignores_comments_and_missing() {
        assert!(gemfile().find("unused").is_none());
        assert!(gemfile().find("sinatra").is_none());
    }

    #[test]
    fn test_find_pinned() {
        let rspec = gemfile().find("rspec-rails").unwrap();
        assert!(rspec.is_pinned());
    }

    #[test]
    fn test_update_replaces_single_constraint() {
        let mut gemfile = gemfile();
        let rails = gemfile.find("rails").unwrap();
        gemfile.update(&rails, "7.0.9");
        assert!(gemfile.content().contains("gem \"rails\", \"7.0.9\"\n"));
        assert_eq!(gemfile.pending(), 1);
    }

    #[test]
    fn test_update_replaces_all_constraints_keeps_options() {
        let mut gemfile = gemfile();
        let rack = gemfile.find("rack").unwrap();
        gemfile.update(&rack, "2.2.8");
        assert!(gemfile
            .content()
            .contains("gem 'rack', '2.2.8', require: false\n"));
    }

    #[test]
    fn test_update_adds_version_when_missing() {
        let mut gemfile = gemfile();
        let puma = gemfile.find("puma").unwrap();
        gemfile.update(&puma, "6.4.0");
        assert!(gemfile.content().contains("gem \"puma\", \"6.4.0\"\n"));

        let webmock = gemfile.find("webmock").unwrap();
        gemfile.update(&webmock, "3.19.1");
        assert!(gemfile
            .content()
            .contains("  gem 'webmock', '3.19.1', github: 'bblimke/webmock'\n"));
    }

    #[test]
    fn test_update_keeps_parentheses_and_comment() {
        let mut gemfile = gemfile();
        let rspec = gemfile.find("rspec-rails").unwrap();
        gemfile.update(&rspec, "6.1.0");
        assert!(gemfile
            .content()
            .contains("  gem(\"rspec-rails\", \"6.1.0\") # pinned for now\n"));
    }

    #[test]
    fn test_update_ignores_stale_declaration() {
        let mut gemfile = gemfile();
        let stale = GemDeclaration::new("rails", 0, Vec::new());
        gemfile.update(&stale, "7.1.0");
        assert_eq!(gemfile.pending(), 0);
        assert_eq!(gemfile.content(), GEMFILE);
    }

    #[test]
    fn test_content_unchanged_without_updates() {
        assert_eq!(gemfile().content(), GEMFILE);
    }

    #[test]
    fn test_crlf_preserved() {
        let content = "gem 'rack', '2.2.7'\r\ngem 'puma'\r\n";
        let mut gemfile = Gemfile::from_content("Gemfile", content, false);
        let rack = gemfile.find("rack").unwrap();
        gemfile.update(&rack, "2.2.8");
        assert_eq!(gemfile.content(), "gem 'rack', '2.2.8'\r\ngem 'puma'\r\n");
    }

    #[test]
    fn test_write_to_disk() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("Gemfile");
        fs::write(&path, GEMFILE).unwrap();

        let mut gemfile = Gemfile::load(&path, false).unwrap();
        let rails = gemfile.find("rails").unwrap();
        gemfile.update(&rails, "7.0.9");

        assert!(gemfile.write().unwrap());
        assert_eq!(gemfile.pending(), 0);
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("gem \"rails\", \"7.0.9\"\n"));
        assert!(written.contains("gem 'rack', '>= 2.2', '< 3', require: false\n"));
    }

    #[test]
    fn test_write_without_pending_is_noop() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("Gemfile");
        fs::write(&path, GEMFILE).unwrap();

        let mut gemfile = Gemfile::load(&path, false).unwrap();
        assert!(!gemfile.write().unwrap());
    }

    #[test]
    fn test_dry_run_leaves_file_unchanged() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("Gemfile");
        fs::write(&path, GEMFILE).unwrap();

        let mut gemfile = Gemfile::load(&path, true).unwrap();
        assert!(gemfile.is_dry_run());
        let rails = gemfile.find("rails").unwrap();
        gemfile.update(&rails, "7.0.9");

        assert!(!gemfile.write().unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), GEMFILE);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = Gemfile::load(temp_dir.path().join("Gemfile"), false).unwrap_err();
        assert!(matches!(err, ManifestError::NotFound { .. }));
    }
}
