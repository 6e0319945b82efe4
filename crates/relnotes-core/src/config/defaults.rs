//! Default configuration values

/// Template file used when none is given on the command line
pub const DEFAULT_TEMPLATE_FILE: &str = "TMPL";

/// Manifest tried first at each revision
pub const VENDOR_CONF: &str = "vendor.conf";

/// Manifest tried when `vendor.conf` is absent
pub const GO_MOD: &str = "go.mod";

/// Release file extensions stripped to obtain the tag
pub fn release_file_extensions() -> Vec<&'static str> {
    vec!["toml", "yaml", "yml"]
}

/// Built-in release notes template
pub const DEFAULT_TEMPLATE: &str = r#"# {{project_name}} {{version}}

Welcome to the {{tag}} release of {{project_name}}!{{pre_release}}

{{preface}}

{{notes}}

{{breaking}}

## Changes

{{changes}}

## Contributors

{{contributors}}

## Dependency Changes

{{dependencies}}

{{previous_release}}
"#;
