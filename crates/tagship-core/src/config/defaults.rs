//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "tagship.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "tagship.toml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ".tagship.yaml",
        ".tagship.toml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Tagship Configuration

git:
  remote: origin
  branch: main
  require_clean: true
  push: true
  tag_format: "v{version}"
  tag_message: "Release {version}"
  commit_message: "chore(release): {version}"

changelog:
  enabled: true
  file: CHANGELOG.md
  include_hashes: true
  include_authors: false
  include_untyped: true
  types:
    feat:
      section: Features
    fix:
      section: Bug Fixes
    docs:
      section: Documentation
    perf:
      section: Performance
    refactor:
      section: Refactoring
      hidden: true
    test:
      section: Tests
      hidden: true
    chore:
      section: Chores
      hidden: true

version:
  files: []

build:
  enabled: true
  command: [python, setup.py, sdist, bdist_wheel]
  output_dir: dist
  clean: true

publish:
  enabled: true
  profile_dir: "."
  profile_extension: pypirc
  prerelease_pattern: '\.dev\d*(?:[.+-]|$)'
  dry_run: false
"#;
