use std::fs;

use crate::output::print_error_full;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SiteAuditError};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error_full(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(SiteAuditError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# site-audit configuration file
version = "1"

[scanner]
# Document extension to audit, without the dot
extension = "html"

# Directory names pruned with their whole subtree (hidden dirs are always pruned)
skip_dirs = ["node_modules"]

# Extra glob patterns relative to the site root
# exclude = ["drafts/**"]

[links]
# Navigation definition whose `href: "..."` entries are audited too
nav_source = "assets/js/site-nav.js"

# Source label broken navigation links are reported under
nav_label = "[nav-config]"

# A link to a directory is satisfied by <index_stem>.<extension> inside it
index_stem = "index"

[head]
# Set to false to check links only
enabled = true

# Pages that must carry a noindex marker instead of a canonical link
noindex_pages = ["404.html", "en/index.html"]

# List pages: (<language prefix>/)?<section>/index.<extension>
sections = ["tech-stack", "projects", "notes", "tools", "misc"]
language_prefixes = ["zh"]

# Every list page must declare hreflang="<code>" for each of these
hreflang = ["en", "zh-cn"]

canonical_marker = 'rel="canonical"'
noindex_marker = "noindex"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
